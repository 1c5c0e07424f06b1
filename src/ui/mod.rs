//! Server-rendered pages

pub mod handlers;
pub mod templates;

pub use handlers::*;
pub use templates::Templates;
