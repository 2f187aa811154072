use validator::ValidationErrors;

use crate::board::{PostBoard, SubmitOutcome};
use crate::form::{PostDraft, field_message};
use crate::service::PostService;

#[derive(Debug, Clone, Default)]
/// Состояние формы создания поста: видимость, поля и последние ошибки валидации.
pub struct PostComposer {
    open: bool,
    draft: PostDraft,
    errors: Option<ValidationErrors>,
}

impl PostComposer {
    /// Закрытая форма с пустыми полями.
    pub fn new() -> Self {
        Self::default()
    }

    /// Открыта ли форма.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Открывает форму.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Закрывает форму. Введённые значения сохраняются.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Текущие значения полей.
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Значения полей для редактирования.
    pub fn draft_mut(&mut self) -> &mut PostDraft {
        &mut self.draft
    }

    /// Ошибки последней неудачной валидации.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Сообщение об ошибке для поля `title`, `body` или `author`.
    pub fn field_error(&self, field: &str) -> Option<String> {
        field_message(self.errors.as_ref()?, field)
    }

    /// Валидирует поля и отправляет пост через `board`.
    ///
    /// Если поля не прошли валидацию, сервис не вызывается и возвращаются
    /// ошибки (они же доступны через [`PostComposer::field_error`]).
    /// После [`SubmitOutcome::Created`] форма закрывается и очищается,
    /// в остальных случаях остаётся как есть.
    pub async fn submit<S: PostService>(
        &mut self,
        board: &PostBoard<S>,
    ) -> Result<SubmitOutcome, ValidationErrors> {
        let post = match self.draft.validated() {
            Ok(post) => post,
            Err(errors) => {
                self.errors = Some(errors.clone());
                return Err(errors);
            }
        };
        self.errors = None;

        let outcome = board.submit(&post).await;
        if outcome.closes_form() {
            self.draft.reset();
            self.close();
        }
        Ok(outcome)
    }
}
