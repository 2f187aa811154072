use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибка обращения к бэкенду постов.
///
/// Для `PostBoard` это один вид ошибки: варианты нужны только для логов.
pub enum ServiceError {
    /// Ошибка HTTP-транспорта (`reqwest`): соединение, таймаут, декодирование.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Бэкенд ответил не-2xx статусом.
    #[error("backend responded with {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение из тела ответа или статус в текстовом виде.
        message: String,
    },

    /// Некорректный адрес бэкенда.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Результат операций `PostService`.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("http status {status}"));
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
