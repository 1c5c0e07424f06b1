//! Gym records shown and edited by the views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::roster::Record;

/// Short random id for records created at runtime
pub fn short_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..9].to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subscription_plan: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub subscription_end_date: Option<NaiveDate>,
    pub join_date: NaiveDate,
    pub trainer_id: Option<String>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.subscription_status == SubscriptionStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    /// Years of experience
    pub experience: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Rep target, e.g. "8-10"
    pub reps: String,
    pub rest_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trainer_id: String,
    pub exercises: Vec<Exercise>,
    pub days_per_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_id: String,
    pub exercise_name: String,
    pub completed_sets: u32,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: String,
    pub member_id: String,
    pub workout_plan_id: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseLog>,
    /// Minutes
    pub duration: Option<u32>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    /// Monthly price in whole dollars
    pub price: u32,
    pub duration_days: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub member_id: String,
    pub amount: u32,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub plan_name: String,
}

/// Personal details edited on the profile page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<u32>,
    /// Pounds
    pub weight: Option<f64>,
    /// Centimetres
    pub height: Option<f64>,
    pub goals: String,
}

impl Record for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Trainer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for WorkoutPlan {
    fn id(&self) -> &str {
        &self.id
    }
}
