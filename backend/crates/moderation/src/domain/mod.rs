//! Domain Layer
//!
//! Comment entity, value objects and the in-memory comment board.

pub mod board;
pub mod entities;
pub mod value_objects;

pub use board::CommentBoard;
pub use entities::{Comment, CommentAuthor, CommentView};
