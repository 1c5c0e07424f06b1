//! Session and route guard tests

use fittrack::api::View;
use fittrack::auth::{authorize, fallback, home_path, Decision, Role, Session, SessionStore};

fn store_as(role: Role) -> SessionStore {
    let mut store = SessionStore::new();
    store.login("user@example.com", "pw", role).unwrap();
    store
}

#[test]
fn test_current_identity_follows_last_success() {
    let mut store = SessionStore::new();
    assert!(store.current_identity().is_none());

    let member = store.login("a@example.com", "pw", Role::Member).unwrap();
    assert_eq!(store.current_identity(), Some(&member));

    // A rejected attempt leaves the previous identity in place
    assert!(store.login("", "pw", Role::Admin).is_err());
    assert_eq!(store.current_identity(), Some(&member));

    let admin = store
        .signup("b@example.com", "pw", "Bea", Role::Admin)
        .unwrap();
    assert_eq!(store.current_identity(), Some(&admin));
    assert_eq!(admin.name, "Bea");

    store.logout();
    assert!(store.current_identity().is_none());
    store.logout();
    assert!(store.current_identity().is_none());
}

#[test]
fn test_every_protected_view_redirects_anonymous() {
    let store = SessionStore::new();
    for view in View::ALL {
        let decision = view.decide(store.session());
        match view {
            View::Landing | View::Login | View::Signup => assert_eq!(decision, Decision::Render),
            _ => assert_eq!(decision, Decision::RedirectToLogin),
        }
    }
}

#[test]
fn test_role_matrix() {
    let member = store_as(Role::Member);
    let admin = store_as(Role::Admin);

    for view in View::ALL {
        let as_member = view.decide(member.session());
        let as_admin = view.decide(admin.session());
        match view {
            View::MemberDashboard | View::Progress | View::Subscription => {
                assert_eq!(as_member, Decision::Render);
                assert_eq!(as_admin, Decision::RedirectToHome(Role::Admin));
            }
            View::AdminDashboard | View::Trainers | View::WorkoutPlans => {
                assert_eq!(as_admin, Decision::Render);
                assert_eq!(as_member, Decision::RedirectToHome(Role::Member));
            }
            _ => {
                assert_eq!(as_member, Decision::Render);
                assert_eq!(as_admin, Decision::Render);
            }
        }
    }
}

#[test]
fn test_redirects_land_on_role_home() {
    assert_eq!(home_path(Role::Admin), "/admin");
    assert_eq!(home_path(Role::Member), "/dashboard");

    let member = store_as(Role::Member);
    let decision = authorize(member.session(), &[Role::Admin]);
    assert_eq!(decision.location(), Some("/dashboard"));
}

#[test]
fn test_fallback() {
    assert_eq!(fallback(&Session::Anonymous), "/login");
    assert_eq!(fallback(store_as(Role::Admin).session()), "/admin");
    assert_eq!(fallback(store_as(Role::Member).session()), "/dashboard");
}
