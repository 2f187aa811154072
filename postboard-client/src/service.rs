use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::Post;

/// Бэкенд постов: источник истины для списка и единственный способ создать пост.
///
/// `id` и `timestamp` нового поста назначает бэкенд, клиент их не передаёт.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Возвращает все посты в порядке, выбранном бэкендом.
    async fn list(&self) -> ServiceResult<Vec<Post>>;

    /// Создаёт пост.
    async fn create(&self, title: &str, body: &str, author: &str) -> ServiceResult<()>;
}

#[async_trait]
impl<S: PostService + ?Sized> PostService for std::sync::Arc<S> {
    async fn list(&self) -> ServiceResult<Vec<Post>> {
        (**self).list().await
    }

    async fn create(&self, title: &str, body: &str, author: &str) -> ServiceResult<()> {
        (**self).create(title, body, author).await
    }
}
