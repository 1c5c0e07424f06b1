//! Route table and JSON endpoints

use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::Serialize;

use super::server::SharedState;
use crate::auth::{authorize, ClientId, Decision, Role, Session};

/// Liveness probe; served without a client
pub const HEALTH_PATH: &str = "/api/health";

/// Who may open a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No session needed
    Public,
    /// Signed in with one of these roles; an empty list admits any role
    Roles(&'static [Role]),
}

impl Access {
    pub fn describe(self) -> String {
        match self {
            Access::Public => "public".to_string(),
            Access::Roles(&[]) => "any signed-in user".to_string(),
            Access::Roles(roles) => roles
                .iter()
                .map(Role::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

const MEMBER_ONLY: &[Role] = &[Role::Member];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[];

/// Every page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Landing,
    Login,
    Signup,
    MemberDashboard,
    Progress,
    Subscription,
    Profile,
    AdminDashboard,
    Trainers,
    WorkoutPlans,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Landing,
        View::Login,
        View::Signup,
        View::MemberDashboard,
        View::Progress,
        View::Subscription,
        View::Profile,
        View::AdminDashboard,
        View::Trainers,
        View::WorkoutPlans,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Login => "/login",
            View::Signup => "/signup",
            View::MemberDashboard => "/dashboard",
            View::Progress => "/progress",
            View::Subscription => "/subscription",
            View::Profile => "/profile",
            View::AdminDashboard => "/admin",
            View::Trainers => "/admin/trainers",
            View::WorkoutPlans => "/admin/workouts",
        }
    }

    pub fn access(self) -> Access {
        match self {
            View::Landing | View::Login | View::Signup => Access::Public,
            View::MemberDashboard | View::Progress | View::Subscription => Access::Roles(MEMBER_ONLY),
            View::Profile => Access::Roles(ANY_ROLE),
            View::AdminDashboard | View::Trainers | View::WorkoutPlans => Access::Roles(ADMIN_ONLY),
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            View::Landing => "landing.html",
            View::Login => "login.html",
            View::Signup => "signup.html",
            View::MemberDashboard => "dashboard.html",
            View::Progress => "progress.html",
            View::Subscription => "subscription.html",
            View::Profile => "profile.html",
            View::AdminDashboard => "admin.html",
            View::Trainers => "trainers.html",
            View::WorkoutPlans => "workouts.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "Welcome",
            View::Login => "Sign In",
            View::Signup => "Create Account",
            View::MemberDashboard => "Dashboard",
            View::Progress => "Progress Tracking",
            View::Subscription => "Subscription & Billing",
            View::Profile => "Profile Settings",
            View::AdminDashboard => "Admin Dashboard",
            View::Trainers => "Trainers",
            View::WorkoutPlans => "Workout Plans",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        View::ALL.into_iter().find(|view| view.path() == path)
    }

    /// Guard decision for this view; public views always render
    pub fn decide(self, session: &Session) -> Decision {
        match self.access() {
            Access::Public => Decision::Render,
            Access::Roles(roles) => authorize(session, roles),
        }
    }
}

/// One row of the route table
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub title: &'static str,
    pub template: &'static str,
    pub access: String,
}

pub fn route_table() -> Vec<RouteInfo> {
    View::ALL
        .into_iter()
        .map(|view| RouteInfo {
            path: view.path(),
            title: view.title(),
            template: view.template(),
            access: view.access().describe(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

/// Identity of the calling client, `data: null` when anonymous
pub async fn current_session(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> impl IntoResponse {
    let session = state.clients.session(&client.0).await;
    Json(ApiResponse {
        success: true,
        data: session.identity().cloned(),
        error: None,
    })
}
