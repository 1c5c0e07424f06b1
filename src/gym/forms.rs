//! Form payloads posted by the gym views

use serde::Deserialize;

use super::models::{ProfileDetails, SubscriptionStatus};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subscription_plan: String,
    /// Only used when editing
    #[serde(default)]
    pub subscription_status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: String,
    /// Years, as typed
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub days_per_week: String,
    #[serde(default)]
    pub trainer_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub rest_time: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogExerciseForm {
    #[serde(default)]
    pub completed_sets: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub goals: String,
}

impl From<ProfileForm> for ProfileDetails {
    fn from(form: ProfileForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            age: parse_number(&form.age),
            weight: parse_number(&form.weight),
            height: parse_number(&form.height),
            goals: form.goals.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BmiForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpgradeForm {
    #[serde(default)]
    pub plan: String,
}

/// Parse a trimmed number, `None` when blank or malformed
pub fn parse_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// `None` for blank text
pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
