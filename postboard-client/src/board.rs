use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::form::NewPost;
use crate::models::Post;
use crate::service::PostService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Итог отправки поста через [`PostBoard::submit`].
pub enum SubmitOutcome {
    /// Пост создан, список перечитан. Форму нужно закрыть и очистить.
    Created,
    /// Бэкенд вернул ошибку. Форма остаётся открытой с введёнными значениями.
    Failed,
    /// Предыдущая отправка ещё не завершилась, сервис не вызывался.
    AlreadyPending,
}

impl SubmitOutcome {
    /// `true`, если вызывающему нужно закрыть форму и сбросить поля.
    pub fn closes_form(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Владелец отображаемого списка постов и флага отправки.
///
/// Список всегда равен результату последнего успешного `list()`;
/// клиент ничего в нём не меняет сам. После создания поста список
/// перечитывается с бэкенда, а не дополняется локально.
///
/// Методы принимают `&self`: доску можно разделить через `Arc` между
/// задачами, а слой отображения подписывается на изменения через
/// [`PostBoard::subscribe_posts`] и [`PostBoard::subscribe_pending`].
pub struct PostBoard<S: PostService> {
    service: S,
    posts: watch::Sender<Vec<Post>>,
    pending: watch::Sender<bool>,
}

impl<S: PostService> PostBoard<S> {
    /// Создаёт доску с пустым списком. Начальную загрузку делает вызывающий.
    pub fn new(service: S) -> Self {
        let (posts, _) = watch::channel(Vec::new());
        let (pending, _) = watch::channel(false);
        Self {
            service,
            posts,
            pending,
        }
    }

    /// Снимок отображаемого списка.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.borrow().clone()
    }

    /// Идёт ли сейчас отправка.
    pub fn is_pending(&self) -> bool {
        *self.pending.borrow()
    }

    /// Подписка на изменения списка.
    pub fn subscribe_posts(&self) -> watch::Receiver<Vec<Post>> {
        self.posts.subscribe()
    }

    /// Подписка на флаг отправки (например, чтобы блокировать кнопку).
    pub fn subscribe_pending(&self) -> watch::Receiver<bool> {
        self.pending.subscribe()
    }

    /// Перечитывает список с бэкенда.
    ///
    /// При ошибке список не меняется, ошибка пишется в лог, повтора нет.
    /// Параллельные вызовы не сериализуются: побеждает ответ, пришедший последним.
    /// Возвращает `true`, если список был заменён.
    pub async fn load(&self) -> bool {
        match self.service.list().await {
            Ok(posts) => {
                info!(count = posts.len(), "posts loaded");
                self.posts.send_replace(posts);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load posts");
                false
            }
        }
    }

    /// Создаёт пост и перечитывает список.
    ///
    /// Пока отправка не завершилась, повторный вызов возвращает
    /// [`SubmitOutcome::AlreadyPending`] и сервис не трогает.
    /// Флаг снимается и тогда, когда future отменили, не дождавшись ответа.
    pub async fn submit(&self, post: &NewPost) -> SubmitOutcome {
        let Some(_pending) = self.try_begin_submit() else {
            warn!("submission is already in progress");
            return SubmitOutcome::AlreadyPending;
        };

        match self
            .service
            .create(post.title(), post.body(), post.author())
            .await
        {
            Ok(()) => {
                info!(title = post.title(), author = post.author(), "post created");
                self.load().await;
                SubmitOutcome::Created
            }
            Err(err) => {
                error!(error = %err, "failed to create post");
                SubmitOutcome::Failed
            }
        }
    }

    fn try_begin_submit(&self) -> Option<PendingGuard<'_>> {
        let started = self.pending.send_if_modified(|pending| {
            if *pending {
                return false;
            }
            *pending = true;
            true
        });
        started.then_some(PendingGuard(&self.pending))
    }
}

/// Держит флаг отправки поднятым, пока жив.
struct PendingGuard<'a>(&'a watch::Sender<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
