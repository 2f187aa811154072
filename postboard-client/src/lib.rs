//! Клиентская часть блога: список постов и форма создания поста.
//!
//! - [`PostBoard`] хранит отображаемый список и флаг отправки,
//!   перечитывает список после каждого успешного создания.
//! - [`PostComposer`] хранит состояние формы и валидирует поля
//!   перед отправкой (`validator`).
//! - [`PostService`] отделяет доску от транспорта; [`HttpPostService`]
//!   реализует его поверх REST API (`reqwest`).
#![warn(missing_docs)]

mod board;
mod composer;
mod error;
mod form;
mod http_service;
mod models;
mod service;

pub use board::{PostBoard, SubmitOutcome};
pub use composer::PostComposer;
pub use error::{ServiceError, ServiceResult};
pub use form::{NewPost, PostDraft, field_message};
pub use http_service::{HttpConfig, HttpPostService};
pub use models::Post;
pub use service::PostService;

pub use validator::ValidationErrors;
