//! Client cookie middleware

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::api::{routes::HEALTH_PATH, server::SharedState};

/// Id of the browser client making the request, set by [`client_session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(pub String);

/// Read the client id from the `Cookie` header
pub fn extract_client_id(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let prefix = format!("{}=", cookie_name);
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| cookie.trim().strip_prefix(prefix.as_str()).map(str::to_string))
        .filter(|id| !id.is_empty())
}

/// Attach a [`ClientId`] to every request, issuing a cookie for new clients.
/// Health probes pass through without a client.
pub async fn client_session(State(state): State<SharedState>, mut req: Request, next: Next) -> Response {
    if req.uri().path() == HEALTH_PATH {
        return next.run(req).await;
    }

    let cookie_name = &state.config.session.cookie_name;
    let presented = extract_client_id(req.headers(), cookie_name);
    let (id, created) = state.clients.ensure(presented.as_deref()).await;

    req.extensions_mut().insert(ClientId(id.clone()));
    let mut response = next.run(req).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Could not set client cookie: {}", e),
        }
    }

    response
}
