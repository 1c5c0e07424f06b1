//! HTTP server, route table and client tracking

pub mod clients;
pub mod routes;
pub mod server;

pub use clients::{Client, ClientRegistry};
pub use routes::{Access, View};
pub use server::*;
