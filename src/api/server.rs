//! HTTP server

use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::client_session;
use crate::config::Config;
use crate::error::Result;
use crate::ui::{self, Templates};

use super::clients::ClientRegistry;
use super::routes;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub templates: Templates,
    pub clients: ClientRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let templates = Templates::load()?;
        let clients = ClientRegistry::new(
            config.session.idle_timeout_minutes,
            config.gym.default_plan.clone(),
        );
        Ok(Self {
            config,
            templates,
            clients,
        })
    }
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    serve(listener, config).await
}

/// Serve on an already bound listener
pub async fn serve(listener: TcpListener, config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);

    spawn_cleanup(&state);

    let app = create_router(state);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically forget idle clients
fn spawn_cleanup(state: &SharedState) {
    let clients = state.clients.clone();
    let every = Duration::from_secs(state.config.session.cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = clients.cleanup_expired().await;
            if removed > 0 {
                tracing::debug!("Removed {} idle clients", removed);
            }
        }
    });
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // API routes
        .route(routes::HEALTH_PATH, get(routes::health))
        .route("/api/session", get(routes::current_session))
        // Public pages
        .route("/", get(ui::landing))
        .route("/login", get(ui::login_page).post(ui::login_submit))
        .route("/signup", get(ui::signup_page).post(ui::signup_submit))
        .route("/logout", post(ui::logout))
        // Member pages
        .route("/dashboard", get(ui::member_dashboard))
        .route("/dashboard/exercises/{id}/log", post(ui::log_exercise))
        .route("/progress", get(ui::progress))
        .route("/subscription", get(ui::subscription))
        .route("/subscription/upgrade", post(ui::upgrade_subscription))
        // Any signed-in user
        .route("/profile", get(ui::profile).post(ui::update_profile))
        .route("/profile/bmi", post(ui::calculate_bmi))
        // Admin pages
        .route("/admin", get(ui::admin_dashboard))
        .route("/admin/members", post(ui::add_member))
        .route("/admin/members/{id}", post(ui::update_member))
        .route("/admin/members/{id}/delete", post(ui::delete_member))
        .route("/admin/trainers", get(ui::trainers).post(ui::add_trainer))
        .route("/admin/trainers/{id}", post(ui::update_trainer))
        .route("/admin/trainers/{id}/delete", post(ui::delete_trainer))
        .route("/admin/workouts", get(ui::workout_plans).post(ui::create_plan))
        .route("/admin/workouts/{id}/exercises", post(ui::add_exercise))
        .route(
            "/admin/workouts/{id}/exercises/{exercise_id}/delete",
            post(ui::remove_exercise),
        )
        .route("/admin/workouts/{id}/delete", post(ui::delete_plan))
        .fallback(ui::not_found)
        // Middleware
        .layer(middleware::from_fn_with_state(state.clone(), client_session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
