use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель поста в том виде, в котором её отдаёт бэкенд.
pub struct Post {
    /// Идентификатор поста, назначается бэкендом.
    pub id: u64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Имя автора.
    pub author: String,
    /// Время создания в наносекундах от Unix epoch, назначается бэкендом.
    pub timestamp: i64,
}

impl Post {
    /// Время создания поста (UTC).
    ///
    /// Возвращает `None`, если `timestamp` не помещается в `DateTime<Utc>`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.div_euclid(NANOS_PER_SECOND);
        let nanos = self.timestamp.rem_euclid(NANOS_PER_SECOND) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}
