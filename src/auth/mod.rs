//! Authentication, sessions and route authorization

pub mod guard;
pub mod middleware;
pub mod models;
pub mod session;

pub use guard::{authorize, fallback, home_path, Decision};
pub use middleware::{client_session, ClientId};
pub use models::{Identity, LoginRequest, Role, SignupRequest};
pub use session::{Session, SessionStore};
