//! Session state for a single browser client

use crate::auth::models::{name_from_email, Identity, Role};
use crate::error::AuthError;

/// Who is logged in, if anyone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(identity) => Some(identity),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }
}

/// Owns the session of one client and performs login/signup/logout on it.
///
/// Credentials are not checked against anything: any non-empty email and
/// password pair succeeds. A failed call never touches the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// Create a store in the anonymous state
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in, replacing whatever identity was current
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Identity, AuthError> {
        required("email", email)?;
        required("password", password)?;

        let identity = Identity::new(email.to_string(), name_from_email(email.trim()), role);
        tracing::info!(email = %identity.email, role = %identity.role, "Logged in");
        self.session = Session::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Sign up, same contract as login but with an explicit display name
    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Identity, AuthError> {
        required("email", email)?;
        required("password", password)?;
        required("name", name)?;

        let identity = Identity::new(email.to_string(), name.to_string(), role);
        tracing::info!(email = %identity.email, role = %identity.role, "Signed up");
        self.session = Session::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Drop the current identity. Calling this while anonymous does nothing.
    pub fn logout(&mut self) {
        if let Session::Authenticated(identity) = &self.session {
            tracing::info!(email = %identity.email, "Logged out");
        }
        self.session = Session::Anonymous;
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Whitespace-only input counts as missing
fn required(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous() {
        let store = SessionStore::new();
        assert_eq!(store.session(), &Session::Anonymous);
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn test_login_sets_identity() {
        let mut store = SessionStore::new();
        let identity = store.login("a@b.com", "x", Role::Admin).unwrap();

        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.name, "a");
        assert_eq!(store.current_identity(), Some(&identity));
        assert!(store.session().is_authenticated());
    }

    #[test]
    fn test_login_rejects_blank_fields() {
        let mut store = SessionStore::new();
        assert_eq!(
            store.login("", "x", Role::Member),
            Err(AuthError::MissingField("email"))
        );
        assert_eq!(
            store.login("a@b.com", "   ", Role::Member),
            Err(AuthError::MissingField("password"))
        );
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn test_failed_login_keeps_previous_identity() {
        let mut store = SessionStore::new();
        let before = store.login("a@b.com", "x", Role::Member).unwrap();
        assert!(store.login("c@d.com", "", Role::Admin).is_err());
        assert_eq!(store.current_identity(), Some(&before));
    }

    #[test]
    fn test_relogin_replaces_identity() {
        let mut store = SessionStore::new();
        let first = store.login("a@b.com", "x", Role::Member).unwrap();
        let second = store.login("c@d.com", "y", Role::Admin).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.session().role(), Some(Role::Admin));
    }

    #[test]
    fn test_signup_requires_name() {
        let mut store = SessionStore::new();
        assert_eq!(
            store.signup("a@b.com", "x", " ", Role::Member),
            Err(AuthError::MissingField("name"))
        );
        let identity = store.signup("a@b.com", "x", "Alice", Role::Member).unwrap();
        assert_eq!(identity.name, "Alice");
    }

    #[test]
    fn test_failed_signup_keeps_previous_identity() {
        let mut store = SessionStore::new();
        let before = store.login("a@b.com", "x", Role::Member).unwrap();

        assert_eq!(
            store.signup("", "x", "N", Role::Admin),
            Err(AuthError::MissingField("email"))
        );
        assert_eq!(
            store.signup("c@d.com", "", "N", Role::Admin),
            Err(AuthError::MissingField("password"))
        );
        assert_eq!(store.current_identity(), Some(&before));
        assert_eq!(store.session().role(), Some(Role::Member));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut store = SessionStore::new();
        store.login("a@b.com", "x", Role::Member).unwrap();
        store.logout();
        assert_eq!(store.session(), &Session::Anonymous);
        store.logout();
        assert_eq!(store.session(), &Session::Anonymous);
    }
}
