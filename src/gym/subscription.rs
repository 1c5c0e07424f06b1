//! Subscription upgrades
//!
//! There is no payment integration: an upgrade request is validated and
//! answered with a notice, and the member stays on their current plan.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use super::models::SubscriptionPlan;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("Unknown plan '{0}'")]
    UnknownPlan(String),

    #[error("You are already on the {0} plan")]
    AlreadyOnPlan(String),
}

pub fn request_upgrade(
    plans: &[SubscriptionPlan],
    current: &str,
    target: &str,
) -> Result<String, UpgradeError> {
    let plan = plans
        .iter()
        .find(|p| p.name == target)
        .ok_or_else(|| UpgradeError::UnknownPlan(target.to_string()))?;

    if plan.name == current {
        return Err(UpgradeError::AlreadyOnPlan(plan.name.clone()));
    }

    tracing::info!(from = current, to = %plan.name, "Upgrade requested");
    Ok(format!(
        "Upgrading to {} plan. In production, this would redirect to payment.",
        plan.name
    ))
}

/// Billing runs on the first of each month
pub fn next_billing_date(today: NaiveDate) -> NaiveDate {
    let (year, month) = match today.month() {
        12 => (today.year() + 1, 1),
        m => (today.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}
