//! Admin dashboard figures

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::models::Member;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_members: usize,
    pub active_members: usize,
    /// Sum of plan prices across all members
    pub monthly_revenue: u32,
    /// Members who joined in the same calendar month as `today`
    pub new_this_month: usize,
}

impl AdminStats {
    /// `price` maps a plan name to its monthly price
    pub fn compute(members: &[Member], today: NaiveDate, price: impl Fn(&str) -> u32) -> Self {
        Self {
            total_members: members.len(),
            active_members: members.iter().filter(|m| m.is_active()).count(),
            monthly_revenue: members
                .iter()
                .filter_map(|m| m.subscription_plan.as_deref())
                .map(price)
                .sum(),
            new_this_month: members
                .iter()
                .filter(|m| m.join_date.year() == today.year() && m.join_date.month() == today.month())
                .count(),
        }
    }
}
