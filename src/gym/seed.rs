//! Demo data every new client starts with

use chrono::NaiveDate;

use super::models::{
    Exercise, Member, Payment, PaymentStatus, SubscriptionStatus, Trainer, WorkoutPlan,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // all call sites below pass valid calendar dates
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn exercise(id: &str, name: &str, sets: u32, reps: &str, rest: &str, notes: Option<&str>) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rest_time: Some(rest.to_string()),
        notes: notes.map(str::to_string),
    }
}

fn member(id: &str, name: &str, email: &str, phone: &str, plan: &str, end: NaiveDate, joined: NaiveDate) -> Member {
    Member {
        id: id.to_string(),
        user_id: format!("u{}", id),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        subscription_plan: Some(plan.to_string()),
        subscription_status: SubscriptionStatus::Active,
        subscription_end_date: Some(end),
        join_date: joined,
        trainer_id: None,
    }
}

pub fn members() -> Vec<Member> {
    vec![
        member("1", "John Doe", "john@example.com", "(555) 123-4567", "Pro", date(2025, 11, 1), date(2025, 1, 15)),
        member("2", "Jane Smith", "jane@example.com", "(555) 987-6543", "Basic", date(2025, 10, 20), date(2025, 2, 10)),
        member("3", "Mike Johnson", "mike@example.com", "(555) 456-7890", "Elite", date(2025, 12, 5), date(2025, 3, 20)),
    ]
}

pub fn trainers() -> Vec<Trainer> {
    let trainer = |id: &str, name: &str, email: &str, specialization: &str, experience: u32| Trainer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        specialization: specialization.to_string(),
        experience,
    };

    vec![
        trainer("1", "Alex Thompson", "alex@fittrack.com", "Strength Training", 8),
        trainer("2", "Sarah Martinez", "sarah@fittrack.com", "Cardio & Weight Loss", 5),
        trainer("3", "David Chen", "david@fittrack.com", "Bodybuilding", 10),
    ]
}

pub fn workout_plans() -> Vec<WorkoutPlan> {
    vec![
        WorkoutPlan {
            id: "1".to_string(),
            name: "Beginner Strength Program".to_string(),
            description: "Perfect for those new to weight training".to_string(),
            trainer_id: "trainer1".to_string(),
            days_per_week: 3,
            exercises: vec![
                exercise("1", "Squats", 3, "10-12", "90s", None),
                exercise("2", "Push-ups", 3, "8-10", "60s", None),
                exercise("3", "Rows", 3, "10-12", "90s", None),
            ],
        },
        WorkoutPlan {
            id: "2".to_string(),
            name: "Advanced Powerlifting".to_string(),
            description: "High-intensity strength building program".to_string(),
            trainer_id: "trainer2".to_string(),
            days_per_week: 5,
            exercises: vec![
                exercise("1", "Deadlifts", 5, "5", "180s", None),
                exercise("2", "Bench Press", 5, "5", "180s", None),
                exercise("3", "Squats", 5, "5", "180s", None),
            ],
        },
    ]
}

/// The plan shown on the member dashboard
pub fn todays_plan() -> WorkoutPlan {
    WorkoutPlan {
        id: "1".to_string(),
        name: "Strength Building Program".to_string(),
        description: "A comprehensive program focused on building overall strength".to_string(),
        trainer_id: "trainer1".to_string(),
        days_per_week: 4,
        exercises: vec![
            exercise("1", "Bench Press", 4, "8-10", "90s", Some("Focus on form")),
            exercise("2", "Squats", 4, "10-12", "120s", Some("Keep back straight")),
            exercise("3", "Deadlifts", 3, "6-8", "150s", Some("Warm up properly")),
            exercise("4", "Pull-ups", 3, "8-12", "90s", None),
        ],
    }
}

pub fn payments(member_id: &str) -> Vec<Payment> {
    [date(2025, 9, 1), date(2025, 8, 1), date(2025, 7, 1)]
        .into_iter()
        .enumerate()
        .map(|(i, paid)| Payment {
            id: (i + 1).to_string(),
            member_id: member_id.to_string(),
            amount: 29,
            date: paid,
            status: PaymentStatus::Completed,
            plan_name: "Basic".to_string(),
        })
        .collect()
}
