//! Route authorization

use crate::auth::models::Role;
use crate::auth::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// What a protected view should do for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectToLogin,
    /// Role is authenticated but not allowed here; go to that role's home
    RedirectToHome(Role),
}

impl Decision {
    /// Where to navigate, or `None` when the view should render
    pub fn location(&self) -> Option<&'static str> {
        match self {
            Decision::Render => None,
            Decision::RedirectToLogin => Some(LOGIN_PATH),
            Decision::RedirectToHome(role) => Some(home_path(*role)),
        }
    }
}

/// Landing route after login for each role
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Member => "/dashboard",
    }
}

/// Decide whether `session` may see a view requiring one of `required_roles`.
/// An empty role list admits any authenticated identity.
pub fn authorize(session: &Session, required_roles: &[Role]) -> Decision {
    let Some(identity) = session.identity() else {
        return Decision::RedirectToLogin;
    };

    if required_roles.is_empty() || required_roles.contains(&identity.role) {
        Decision::Render
    } else {
        Decision::RedirectToHome(identity.role)
    }
}

/// Target of the catch-all route
pub fn fallback(session: &Session) -> &'static str {
    match session.role() {
        Some(role) => home_path(role),
        None => LOGIN_PATH,
    }
}
