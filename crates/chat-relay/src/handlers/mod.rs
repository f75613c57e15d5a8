//! HTTP request handlers.

mod chat;
mod health;
mod version;

pub use chat::chat;
pub use health::{livez, readyz, root};
pub use version::version;
