use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::models::Post;
use crate::service::PostService;

const POSTS_PATH: &str = "/api/posts";

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    body: &'a str,
    author: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Clone)]
/// Параметры HTTP-транспорта.
pub struct HttpConfig {
    /// Базовый URL бэкенда, например `http://127.0.0.1:8080`.
    pub base_url: String,
    /// Таймаут установки соединения.
    pub connect_timeout: Duration,
    /// Таймаут запроса целиком.
    pub request_timeout: Duration,
}

impl HttpConfig {
    /// Конфигурация с таймаутами по умолчанию (5 с на соединение, 15 с на запрос).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
/// `PostService` поверх REST API бэкенда (`reqwest`).
pub struct HttpPostService {
    base_url: String,
    client: Client,
}

impl HttpPostService {
    /// Создаёт HTTP-клиент. Адрес без схемы дополняется `http://`.
    pub fn new(config: HttpConfig) -> ServiceResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Нормализованный базовый URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: Response) -> ServiceError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponseDto>(&text) {
            Ok(body) => body.error,
            Err(_) => Some(text),
        };
        ServiceError::from_http_status(status, message)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ServiceResult<Response> {
        let response = request.send().await.map_err(ServiceError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl PostService for HttpPostService {
    async fn list(&self) -> ServiceResult<Vec<Post>> {
        let url = self.endpoint(POSTS_PATH);
        debug!(%url, "listing posts");

        let response = self.send(self.client.request(Method::GET, url)).await?;
        response
            .json::<Vec<Post>>()
            .await
            .map_err(ServiceError::from_reqwest)
    }

    async fn create(&self, title: &str, body: &str, author: &str) -> ServiceResult<()> {
        let url = self.endpoint(POSTS_PATH);
        debug!(%url, author, "creating post");

        let payload = CreatePostRequestDto {
            title,
            body,
            author,
        };
        self.send(self.client.request(Method::POST, url).json(&payload))
            .await?;
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> ServiceResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ServiceError::InvalidEndpoint(
            "base url must not be empty".to_string(),
        ));
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(raw.to_string());
    }
    if raw.contains("://") {
        return Err(ServiceError::InvalidEndpoint(format!(
            "unsupported scheme in {raw}"
        )));
    }
    Ok(format!("http://{raw}"))
}
