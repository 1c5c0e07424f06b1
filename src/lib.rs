//! FitTrack - gym membership and workout tracking
//!
//! The library exposes the session and route guard, the gym domain model
//! and the HTTP server that renders the member and admin pages.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod gym;
pub mod ui;

pub use config::Config;
pub use error::Error;
