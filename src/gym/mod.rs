//! Gym domain: records, demo data and the per-client workspace

pub mod bmi;
pub mod forms;
pub mod models;
pub mod progress;
pub mod roster;
mod seed;
pub mod stats;
pub mod subscription;
pub mod workout;
pub mod workspace;

pub use models::*;
pub use roster::{Record, Roster};
pub use workspace::{Workspace, WorkspaceError};

/// Demo payment history for the subscription page
pub fn payment_history(member_id: &str) -> Vec<Payment> {
    seed::payments(member_id)
}
