//! Web UI handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use chrono::NaiveDate;
use minijinja::{context, Value};
use serde::{Deserialize, Serialize};

use crate::api::{AppState, SharedState, View};
use crate::auth::{self, guard::LOGIN_PATH, ClientId, Decision, Identity, LoginRequest, SignupRequest};
use crate::error::Result;
use crate::gym::bmi;
use crate::gym::forms::{
    non_blank, parse_number, BmiForm, ExerciseForm, LogExerciseForm, MemberForm, PlanForm,
    ProfileForm, TrainerForm, UpgradeForm,
};
use crate::gym::progress::{ProgressReport, TimeRange};
use crate::gym::stats::AdminStats;
use crate::gym::subscription::{next_billing_date, request_upgrade};
use crate::gym::workout::LogEntry;
use crate::gym::workspace::WorkspaceResult;
use crate::gym::{payment_history, Exercise, ProfileDetails, Workspace};

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn redirect(to: &str) -> Response {
    Redirect::to(to).into_response()
}

/// Values every page layout needs
fn layout(state: &AppState, view: View, identity: Option<&Identity>, notice: Option<String>) -> Value {
    context! {
        gym_name => state.config.gym.name,
        title => view.title(),
        path => view.path(),
        user => identity,
        notice => notice,
    }
}

fn render(state: &AppState, view: View, ctx: Value) -> Result<Response> {
    Ok(Html(state.templates.render(view.template(), ctx)?).into_response())
}

/// What a protected handler produces while its client is locked
enum Page {
    Render(Value),
    Redirect(&'static str),
}

/// Run `f` for a protected view if the guard admits the client's session,
/// otherwise redirect where the guard says. `f` only builds the page context;
/// rendering happens after the client registry is released.
async fn guarded<F>(state: &AppState, client: &ClientId, view: View, f: F) -> Result<Response>
where
    F: FnOnce(&Identity, &mut Workspace) -> Page,
{
    let page = state
        .clients
        .with_client(&client.0, |c| match view.decide(c.session.session()) {
            Decision::Render => match c.session.current_identity() {
                Some(identity) => f(identity, &mut c.workspace),
                None => Page::Redirect(LOGIN_PATH),
            },
            decision => {
                let to = decision.location().unwrap_or(LOGIN_PATH);
                tracing::debug!(from = view.path(), to, "Access redirected");
                Page::Redirect(to)
            }
        })
        .await
        .unwrap_or(Page::Redirect(LOGIN_PATH));

    match page {
        Page::Render(ctx) => render(state, view, ctx),
        Page::Redirect(to) => Ok(redirect(to)),
    }
}

/// Store the outcome of a workspace edit as the next page notice
fn notify<T>(ws: &mut Workspace, result: WorkspaceResult<T>, success: impl FnOnce(&T) -> String) {
    let message = match &result {
        Ok(value) => success(value),
        Err(e) => e.to_string(),
    };
    ws.set_notice(message);
}

// Public pages

pub async fn landing(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    let session = state.clients.session(&client.0).await;
    let home = session.role().map(auth::home_path);

    render(
        &state,
        View::Landing,
        context! {
            home => home,
            plans => state.config.gym.plans,
            ..layout(&state, View::Landing, session.identity(), None)
        },
    )
}

pub async fn login_page(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    let session = state.clients.session(&client.0).await;
    render(
        &state,
        View::Login,
        context! {
            form => context! { role => "member" },
            ..layout(&state, View::Login, session.identity(), None)
        },
    )
}

pub async fn signup_page(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    let session = state.clients.session(&client.0).await;
    render(
        &state,
        View::Signup,
        context! {
            form => context! { role => "member" },
            ..layout(&state, View::Signup, session.identity(), None)
        },
    )
}

/// Re-render a public form with an error message
async fn form_error(
    state: &AppState,
    client: &ClientId,
    view: View,
    message: &str,
    form: Value,
) -> Result<Response> {
    let session = state.clients.session(&client.0).await;
    let html = state.templates.render(
        view.template(),
        context! {
            error => message,
            form => form,
            ..layout(state, view, session.identity(), None)
        },
    )?;
    Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}

pub async fn login_submit(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(req): Form<LoginRequest>,
) -> Result<Response> {
    let outcome = state
        .clients
        .with_client(&client.0, |c| c.session.login(&req.email, &req.password, req.role))
        .await;

    match outcome {
        Some(Ok(identity)) => Ok(redirect(auth::home_path(identity.role))),
        Some(Err(e)) => {
            tracing::warn!("Login rejected: {}", e);
            let form = context! { email => req.email, role => req.role };
            form_error(&state, &client, View::Login, "Login failed. Please try again.", form).await
        }
        None => Ok(redirect(LOGIN_PATH)),
    }
}

pub async fn signup_submit(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(req): Form<SignupRequest>,
) -> Result<Response> {
    let form = context! { name => req.name, email => req.email, role => req.role };

    if req.password != req.confirm_password {
        return form_error(&state, &client, View::Signup, "Passwords do not match", form).await;
    }

    let outcome = state
        .clients
        .with_client(&client.0, |c| {
            c.session.signup(&req.email, &req.password, &req.name, req.role)
        })
        .await;

    match outcome {
        Some(Ok(identity)) => Ok(redirect(auth::home_path(identity.role))),
        Some(Err(e)) => {
            tracing::warn!("Signup rejected: {}", e);
            form_error(&state, &client, View::Signup, "Signup failed. Please try again.", form).await
        }
        None => Ok(redirect(LOGIN_PATH)),
    }
}

pub async fn logout(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Response {
    state.clients.with_client(&client.0, |c| c.session.logout()).await;
    redirect(View::Landing.path())
}

/// Catch-all: back to login, or to the signed-in user's home
pub async fn not_found(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Response {
    let session = state.clients.session(&client.0).await;
    redirect(auth::fallback(&session))
}

// Member pages

#[derive(Serialize)]
struct ExerciseRow<'a> {
    #[serde(flatten)]
    exercise: &'a Exercise,
    completed: bool,
}

pub async fn member_dashboard(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::MemberDashboard, |identity, ws| {
        let notice = ws.take_notice();
        let workout = &ws.today;
        let exercises: Vec<_> = workout
            .plan()
            .exercises
            .iter()
            .map(|exercise| ExerciseRow {
                exercise,
                completed: workout.is_completed(&exercise.id),
            })
            .collect();

        Page::Render(context! {
            plan => workout.plan(),
            exercises => exercises,
            stats => workout.stats(),
            finished => workout.is_finished(),
            date => today().format("%A, %B %-d, %Y").to_string(),
            ..layout(&state, View::MemberDashboard, Some(identity), notice)
        })
    })
    .await
}

pub async fn log_exercise(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(exercise_id): Path<String>,
    Form(form): Form<LogExerciseForm>,
) -> Result<Response> {
    guarded(&state, &client, View::MemberDashboard, |identity, ws| {
        let entry = LogEntry {
            completed_sets: parse_number(&form.completed_sets),
            weight: parse_number(&form.weight),
            notes: non_blank(&form.notes),
        };
        let notice = match ws.today.log_exercise(&identity.id, &exercise_id, entry) {
            Ok(logged) => format!("Logged {}", logged.exercise_name),
            Err(e) => e.to_string(),
        };
        ws.set_notice(notice);
        Page::Redirect(View::MemberDashboard.path())
    })
    .await
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub range: Option<String>,
}

pub async fn progress(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Query(query): Query<ProgressQuery>,
) -> Result<Response> {
    let range = TimeRange::from_query(query.range.as_deref());

    guarded(&state, &client, View::Progress, |identity, ws| {
        Page::Render(context! {
            report => ProgressReport::new(range),
            ranges => TimeRange::ALL,
            ..layout(&state, View::Progress, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn subscription(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::Subscription, |identity, ws| {
        let current = state.config.get_plan(&ws.current_plan);
        Page::Render(context! {
            plans => state.config.gym.plans,
            current_plan => ws.current_plan,
            monthly_payment => current.map(|p| p.price).unwrap_or(0),
            next_billing => next_billing_date(today()).format("%B %-d, %Y").to_string(),
            payments => payment_history(&identity.id),
            ..layout(&state, View::Subscription, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn upgrade_subscription(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<UpgradeForm>,
) -> Result<Response> {
    guarded(&state, &client, View::Subscription, |_, ws| {
        let notice = match request_upgrade(&state.config.gym.plans, &ws.current_plan, &form.plan) {
            Ok(notice) => notice,
            Err(e) => e.to_string(),
        };
        ws.set_notice(notice);
        Page::Redirect(View::Subscription.path())
    })
    .await
}

// Profile

pub async fn profile(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::Profile, |identity, ws| {
        let details = ws.profile.clone().unwrap_or_else(|| ProfileDetails {
            name: identity.name.clone(),
            email: identity.email.clone(),
            ..Default::default()
        });
        let bmi = ws.bmi.map(|b| context! { value => b.value, category => b.category.to_string() });

        Page::Render(context! {
            profile => details,
            bmi => bmi,
            ..layout(&state, View::Profile, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn update_profile(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<ProfileForm>,
) -> Result<Response> {
    guarded(&state, &client, View::Profile, |_, ws| {
        ws.profile = Some(form.into());
        ws.set_notice("Profile updated successfully!");
        Page::Redirect(View::Profile.path())
    })
    .await
}

pub async fn calculate_bmi(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<BmiForm>,
) -> Result<Response> {
    guarded(&state, &client, View::Profile, |_, ws| {
        match bmi::calculate_from_input(&form.weight, &form.height) {
            Some(result) => ws.bmi = Some(result),
            None => ws.set_notice("Enter a positive weight and height to calculate BMI"),
        }
        Page::Redirect(View::Profile.path())
    })
    .await
}

// Admin pages

pub async fn admin_dashboard(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::AdminDashboard, |identity, ws| {
        let stats = AdminStats::compute(ws.members.as_slice(), today(), |plan| {
            state.config.plan_price(plan)
        });
        Page::Render(context! {
            stats => stats,
            members => ws.members.as_slice(),
            plans => state.config.gym.plans,
            ..layout(&state, View::AdminDashboard, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn add_member(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<MemberForm>,
) -> Result<Response> {
    guarded(&state, &client, View::AdminDashboard, |_, ws| {
        let result = ws.add_member(form, today());
        notify(ws, result, |m| format!("Added member {}", m.name));
        Page::Redirect(View::AdminDashboard.path())
    })
    .await
}

pub async fn update_member(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(id): Path<String>,
    Form(form): Form<MemberForm>,
) -> Result<Response> {
    guarded(&state, &client, View::AdminDashboard, |_, ws| {
        let result = ws.update_member(&id, form);
        notify(ws, result, |_| "Member updated".to_string());
        Page::Redirect(View::AdminDashboard.path())
    })
    .await
}

pub async fn delete_member(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(id): Path<String>,
) -> Result<Response> {
    guarded(&state, &client, View::AdminDashboard, |_, ws| {
        let result = ws.delete_member(&id);
        notify(ws, result, |m| format!("Removed member {}", m.name));
        Page::Redirect(View::AdminDashboard.path())
    })
    .await
}

pub async fn trainers(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::Trainers, |identity, ws| {
        Page::Render(context! {
            trainers => ws.trainers.as_slice(),
            ..layout(&state, View::Trainers, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn add_trainer(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<TrainerForm>,
) -> Result<Response> {
    guarded(&state, &client, View::Trainers, |_, ws| {
        let result = ws.add_trainer(form);
        notify(ws, result, |t| format!("Added trainer {}", t.name));
        Page::Redirect(View::Trainers.path())
    })
    .await
}

pub async fn update_trainer(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(id): Path<String>,
    Form(form): Form<TrainerForm>,
) -> Result<Response> {
    guarded(&state, &client, View::Trainers, |_, ws| {
        let result = ws.update_trainer(&id, form);
        notify(ws, result, |_| "Trainer updated".to_string());
        Page::Redirect(View::Trainers.path())
    })
    .await
}

pub async fn delete_trainer(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(id): Path<String>,
) -> Result<Response> {
    guarded(&state, &client, View::Trainers, |_, ws| {
        let result = ws.delete_trainer(&id);
        notify(ws, result, |t| format!("Removed trainer {}", t.name));
        Page::Redirect(View::Trainers.path())
    })
    .await
}

pub async fn workout_plans(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
) -> Result<Response> {
    guarded(&state, &client, View::WorkoutPlans, |identity, ws| {
        Page::Render(context! {
            plans => ws.plans.as_slice(),
            trainers => ws.trainers.as_slice(),
            ..layout(&state, View::WorkoutPlans, Some(identity), ws.take_notice())
        })
    })
    .await
}

pub async fn create_plan(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Form(form): Form<PlanForm>,
) -> Result<Response> {
    guarded(&state, &client, View::WorkoutPlans, |_, ws| {
        let result = ws.create_plan(form);
        notify(ws, result, |p| format!("Created plan {}", p.name));
        Page::Redirect(View::WorkoutPlans.path())
    })
    .await
}

pub async fn add_exercise(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(plan_id): Path<String>,
    Form(form): Form<ExerciseForm>,
) -> Result<Response> {
    guarded(&state, &client, View::WorkoutPlans, |_, ws| {
        let result = ws.add_exercise(&plan_id, form);
        notify(ws, result, |e| format!("Added {}", e.name));
        Page::Redirect(View::WorkoutPlans.path())
    })
    .await
}

pub async fn remove_exercise(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path((plan_id, exercise_id)): Path<(String, String)>,
) -> Result<Response> {
    guarded(&state, &client, View::WorkoutPlans, |_, ws| {
        let result = ws.remove_exercise(&plan_id, &exercise_id);
        notify(ws, result, |e| format!("Removed {}", e.name));
        Page::Redirect(View::WorkoutPlans.path())
    })
    .await
}

pub async fn delete_plan(
    State(state): State<SharedState>,
    Extension(client): Extension<ClientId>,
    Path(plan_id): Path<String>,
) -> Result<Response> {
    guarded(&state, &client, View::WorkoutPlans, |_, ws| {
        let result = ws.delete_plan(&plan_id);
        notify(ws, result, |p| format!("Deleted plan {}", p.name));
        Page::Redirect(View::WorkoutPlans.path())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::config::Config;
    use axum::http::header;

    async fn client_as(state: &AppState, role: Option<Role>) -> ClientId {
        let (id, _) = state.clients.ensure(None).await;
        if let Some(role) = role {
            state
                .clients
                .with_client(&id, |c| c.session.login("a@b.com", "x", role))
                .await
                .unwrap()
                .unwrap();
        }
        ClientId(id)
    }

    #[tokio::test]
    async fn test_guarded_renders_context_built_under_lock() {
        let state = AppState::new(Config::default()).unwrap();
        let client = client_as(&state, Some(Role::Member)).await;

        let response = guarded(&state, &client, View::Progress, |identity, ws| {
            ws.set_notice("Saved");
            Page::Render(context! {
                report => ProgressReport::new(TimeRange::Week),
                ranges => TimeRange::ALL,
                ..layout(&state, View::Progress, Some(identity), ws.take_notice())
            })
        })
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The registry is free again once the page is built
        let notice = state
            .clients
            .with_client(&client.0, |c| c.workspace.take_notice())
            .await
            .unwrap();
        assert_eq!(notice, None);
    }

    #[tokio::test]
    async fn test_guarded_redirect_skips_page_builder() {
        let state = AppState::new(Config::default()).unwrap();

        let anonymous = client_as(&state, None).await;
        let response = guarded(&state, &anonymous, View::Progress, |_, _| -> Page {
            panic!("page built for an anonymous client")
        })
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let admin = client_as(&state, Some(Role::Admin)).await;
        let response = guarded(&state, &admin, View::Progress, |_, _| -> Page {
            panic!("page built for the wrong role")
        })
        .await
        .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/admin");
    }

    #[tokio::test]
    async fn test_guarded_unknown_client_goes_to_login() {
        let state = AppState::new(Config::default()).unwrap();
        let response = guarded(&state, &ClientId("gone".into()), View::Profile, |_, _| -> Page {
            panic!("no client to build for")
        })
        .await
        .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
