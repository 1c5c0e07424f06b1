//! Browser client registry
//!
//! A client is one browser identified by a cookie. It owns exactly one
//! [`SessionStore`] plus the mock collections its views edit. Clients live in
//! memory only and are forgotten after a period of inactivity.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{Session, SessionStore};
use crate::gym::Workspace;

/// State owned by one browser client
#[derive(Debug, Clone)]
pub struct Client {
    pub id: String,
    pub session: SessionStore,
    pub workspace: Workspace,
    pub last_accessed: chrono::DateTime<chrono::Utc>,
}

impl Client {
    /// Create an anonymous client with freshly seeded view state
    pub fn new(default_plan: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session: SessionStore::new(),
            workspace: Workspace::new(default_plan, chrono::Local::now().date_naive()),
            last_accessed: chrono::Utc::now(),
        }
    }

    pub fn is_expired(&self, idle_timeout: chrono::Duration) -> bool {
        chrono::Utc::now().signed_duration_since(self.last_accessed) > idle_timeout
    }

    pub fn touch(&mut self) {
        self.last_accessed = chrono::Utc::now();
    }
}

/// In-memory client storage shared by every request handler
pub struct ClientRegistry {
    clients: Arc<RwLock<HashMap<String, Client>>>,
    idle_timeout: chrono::Duration,
    default_plan: String,
}

impl ClientRegistry {
    pub fn new(idle_timeout_minutes: i64, default_plan: impl Into<String>) -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout: chrono::Duration::minutes(idle_timeout_minutes),
            default_plan: default_plan.into(),
        }
    }

    /// Resolve the client behind a cookie value, creating a new one when the
    /// cookie is missing, unknown or expired. Returns the id and whether it is new.
    pub async fn ensure(&self, presented: Option<&str>) -> (String, bool) {
        let mut clients = self.clients.write().await;

        if let Some(id) = presented {
            match clients.get_mut(id) {
                Some(client) if !client.is_expired(self.idle_timeout) => {
                    client.touch();
                    return (client.id.clone(), false);
                }
                Some(_) => {
                    tracing::debug!(client = id, "Client expired");
                    clients.remove(id);
                }
                None => {}
            }
        }

        let client = Client::new(&self.default_plan);
        let id = client.id.clone();
        clients.insert(id.clone(), client);
        tracing::debug!(client = %id, "New client");
        (id, true)
    }

    /// Run `f` against a client while holding the write lock
    pub async fn with_client<R>(&self, id: &str, f: impl FnOnce(&mut Client) -> R) -> Option<R> {
        let mut clients = self.clients.write().await;
        clients.get_mut(id).map(f)
    }

    /// Snapshot of a client's session; anonymous for unknown clients
    pub async fn session(&self, id: &str) -> Session {
        self.clients
            .read()
            .await
            .get(id)
            .map(|c| c.session.session().clone())
            .unwrap_or_default()
    }

    /// Drop idle clients, returning how many were removed
    pub async fn cleanup_expired(&self) -> usize {
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|_, client| !client.is_expired(self.idle_timeout));
        before - clients.len()
    }

    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }
}

impl Clone for ClientRegistry {
    fn clone(&self) -> Self {
        Self {
            clients: Arc::clone(&self.clients),
            idle_timeout: self.idle_timeout,
            default_plan: self.default_plan.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    #[tokio::test]
    async fn test_ensure_creates_then_reuses() {
        let registry = ClientRegistry::new(30, "Basic");
        let (id, created) = registry.ensure(None).await;
        assert!(created);

        let (again, created) = registry.ensure(Some(&id)).await;
        assert!(!created);
        assert_eq!(again, id);
        assert_eq!(registry.client_count().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_cookie_gets_fresh_client() {
        let registry = ClientRegistry::new(30, "Basic");
        let (id, created) = registry.ensure(Some("forged")).await;
        assert!(created);
        assert_ne!(id, "forged");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_client() {
        let registry = ClientRegistry::new(30, "Basic");
        let (a, _) = registry.ensure(None).await;
        let (b, _) = registry.ensure(None).await;

        registry
            .with_client(&a, |c| c.session.login("a@b.com", "x", Role::Admin))
            .await
            .unwrap()
            .unwrap();

        assert!(registry.session(&a).await.is_authenticated());
        assert_eq!(registry.session(&b).await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_expired_client_is_replaced() {
        let registry = ClientRegistry::new(30, "Basic");
        let (id, _) = registry.ensure(None).await;
        registry
            .with_client(&id, |c| {
                c.session.login("a@b.com", "x", Role::Member).unwrap();
                c.last_accessed = chrono::Utc::now() - chrono::Duration::minutes(31);
            })
            .await;

        let (fresh, created) = registry.ensure(Some(&id)).await;
        assert!(created);
        assert_ne!(fresh, id);
        assert_eq!(registry.session(&fresh).await, Session::Anonymous);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let registry = ClientRegistry::new(30, "Basic");
        let (stale, _) = registry.ensure(None).await;
        registry.ensure(None).await;
        registry
            .with_client(&stale, |c| {
                c.last_accessed = chrono::Utc::now() - chrono::Duration::minutes(45);
            })
            .await;

        assert_eq!(registry.cleanup_expired().await, 1);
        assert_eq!(registry.client_count().await, 1);
    }
}
