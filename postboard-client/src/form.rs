use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Поля формы создания поста в том виде, в котором их ввёл пользователь.
pub struct PostDraft {
    /// Заголовок.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Текст поста.
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    /// Автор.
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl PostDraft {
    /// Создаёт черновик из трёх полей.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    /// Проверяет обязательные поля и возвращает пост, готовый к отправке.
    pub fn validated(&self) -> Result<NewPost, ValidationErrors> {
        NewPost::try_from(self)
    }

    /// Очищает все поля.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Черновик, прошедший валидацию. Только его принимает `PostBoard::submit`.
pub struct NewPost {
    title: String,
    body: String,
    author: String,
}

impl NewPost {
    /// Заголовок.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Текст поста.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Автор.
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl TryFrom<&PostDraft> for NewPost {
    type Error = ValidationErrors;

    fn try_from(draft: &PostDraft) -> Result<Self, Self::Error> {
        draft.validate()?;
        Ok(Self {
            title: draft.title.clone(),
            body: draft.body.clone(),
            author: draft.author.clone(),
        })
    }
}

/// Сообщение первой ошибки валидации для поля `field`, если она есть.
pub fn field_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .get(field)?
        .first()?
        .message
        .as_ref()
        .map(|message| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_accepts_filled_draft() {
        let draft = PostDraft::new("A", "B", "C");
        let post = draft.validated().expect("draft must be valid");
        assert_eq!(post.title(), "A");
        assert_eq!(post.body(), "B");
        assert_eq!(post.author(), "C");
    }

    #[test]
    fn validated_reports_every_empty_field() {
        let draft = PostDraft::new("", "B", "");
        let errors = draft.validated().expect_err("draft must be rejected");

        assert_eq!(field_message(&errors, "title").as_deref(), Some("Title is required"));
        assert_eq!(field_message(&errors, "author").as_deref(), Some("Author is required"));
        assert!(field_message(&errors, "body").is_none());
    }

    #[test]
    fn validated_keeps_values_as_entered() {
        let draft = PostDraft::new("  spaced  ", " ", "C");
        let post = draft.validated().expect("whitespace counts as present");
        assert_eq!(post.title(), "  spaced  ");
        assert_eq!(post.body(), " ");
    }

    #[test]
    fn reset_clears_fields() {
        let mut draft = PostDraft::new("A", "B", "C");
        draft.reset();
        assert_eq!(draft, PostDraft::default());
    }
}
