use criterion::{criterion_group, criterion_main, Criterion};
use fittrack::api::View;
use fittrack::auth::{Role, Session, SessionStore};
use fittrack::gym::bmi;
use std::hint::black_box;

fn bench_guard(c: &mut Criterion) {
    let anonymous = Session::Anonymous;
    let mut store = SessionStore::new();
    store.login("bench@example.com", "pw", Role::Member).unwrap();

    c.bench_function("decide_all_views_anonymous", |b| {
        b.iter(|| {
            for view in View::ALL {
                black_box(view.decide(black_box(&anonymous)));
            }
        })
    });

    c.bench_function("decide_all_views_member", |b| {
        b.iter(|| {
            for view in View::ALL {
                black_box(view.decide(black_box(store.session())));
            }
        })
    });

    c.bench_function("view_from_path", |b| {
        b.iter(|| View::from_path(black_box("/admin/workouts/")))
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("login_logout", |b| {
        let mut store = SessionStore::new();
        b.iter(|| {
            let _ = store.login(black_box("a@b.com"), black_box("pw"), Role::Admin);
            store.logout();
        })
    });
}

fn bench_bmi(c: &mut Criterion) {
    c.bench_function("bmi_from_input", |b| {
        b.iter(|| bmi::calculate_from_input(black_box("70"), black_box("175")))
    });
}

criterion_group!(benches, bench_guard, bench_session, bench_bmi);
criterion_main!(benches);
