use std::fmt::Write as _;

use postboard_client::{Post, PostComposer};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Карточка поста: заголовок, автор с датой, текст.
pub(crate) fn render_post(post: &Post) -> String {
    let created_at = post
        .created_at()
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| format!("timestamp {}", post.timestamp));

    format!(
        "{}\nBy {} on {}\n{}",
        post.title, post.author, created_at, post.body
    )
}

/// Список карточек в порядке бэкенда, разделённых пустой строкой.
pub(crate) fn render_board(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "Постов пока нет".to_string();
    }

    posts
        .iter()
        .map(render_post)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ошибки валидации формы, по одной строке на поле.
pub(crate) fn render_field_errors(composer: &PostComposer) -> String {
    let mut out = String::new();
    for field in ["title", "body", "author"] {
        if let Some(message) = composer.field_error(field) {
            let _ = writeln!(out, "  {field}: {message}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_client::PostDraft;

    fn post(id: u64, title: &str, timestamp: i64) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: "World".to_string(),
            author: "Alice".to_string(),
            timestamp,
        }
    }

    #[test]
    fn render_post_shows_author_and_date() {
        let rendered = render_post(&post(1, "Hello", 1_700_000_000_000_000_000));
        assert_eq!(
            rendered,
            "Hello\nBy Alice on 2023-11-14 22:13:20 UTC\nWorld"
        );
    }

    #[test]
    fn render_board_keeps_backend_order() {
        let rendered = render_board(&[post(2, "Second", 0), post(1, "First", 0)]);
        let second = rendered.find("Second").expect("second must be rendered");
        let first = rendered.find("First").expect("first must be rendered");
        assert!(second < first);
    }

    #[test]
    fn render_board_handles_empty_list() {
        assert_eq!(render_board(&[]), "Постов пока нет");
    }

    #[tokio::test]
    async fn render_field_errors_lists_missing_fields() {
        use postboard_client::{PostBoard, PostService, ServiceResult};

        struct Unused;

        #[async_trait::async_trait]
        impl PostService for Unused {
            async fn list(&self) -> ServiceResult<Vec<Post>> {
                Ok(Vec::new())
            }

            async fn create(&self, _: &str, _: &str, _: &str) -> ServiceResult<()> {
                Ok(())
            }
        }

        let board = PostBoard::new(Unused);
        let mut composer = PostComposer::new();
        *composer.draft_mut() = PostDraft::new("", "B", "");
        assert!(composer.submit(&board).await.is_err());

        assert_eq!(
            render_field_errors(&composer),
            "  title: Title is required\n  author: Author is required\n"
        );
    }
}
