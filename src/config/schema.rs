//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::gym::SubscriptionPlan;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub gym: GymConfig,
}

/// Server configuration for the HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3456
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Browser client tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cookie that identifies a browser client
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Idle clients are forgotten after this many minutes
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: i64,

    /// How often the expired-client sweep runs
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

fn default_cookie_name() -> String {
    "fittrack_sid".to_string()
}

fn default_idle_timeout() -> i64 {
    30
}

fn default_cleanup_interval() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_minutes: default_idle_timeout(),
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

/// Gym branding and subscription catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymConfig {
    #[serde(default = "default_gym_name")]
    pub name: String,

    /// Plan a new client starts on
    #[serde(default = "default_plan")]
    pub default_plan: String,

    #[serde(default = "default_plans")]
    pub plans: Vec<SubscriptionPlan>,
}

fn default_gym_name() -> String {
    "FitTrack Pro".to_string()
}

fn default_plan() -> String {
    "Basic".to_string()
}

fn default_plans() -> Vec<SubscriptionPlan> {
    fn features(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    vec![
        SubscriptionPlan {
            id: "1".to_string(),
            name: "Basic".to_string(),
            price: 29,
            duration_days: 30,
            features: features(&[
                "Access to gym facilities",
                "Workout tracking app",
                "Basic workout plans",
                "Email support",
            ]),
        },
        SubscriptionPlan {
            id: "2".to_string(),
            name: "Pro".to_string(),
            price: 59,
            duration_days: 30,
            features: features(&[
                "Everything in Basic",
                "Personal trainer sessions (2/month)",
                "Custom workout plans",
                "Progress analytics",
                "Priority support",
            ]),
        },
        SubscriptionPlan {
            id: "3".to_string(),
            name: "Elite".to_string(),
            price: 99,
            duration_days: 30,
            features: features(&[
                "Everything in Pro",
                "Unlimited trainer access",
                "Nutrition planning",
                "24/7 support",
                "Guest passes (4/month)",
                "Exclusive classes",
            ]),
        },
    ]
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            name: default_gym_name(),
            default_plan: default_plan(),
            plans: default_plans(),
        }
    }
}

impl Config {
    /// Get a subscription plan by name
    pub fn get_plan(&self, name: &str) -> Option<&SubscriptionPlan> {
        self.gym.plans.iter().find(|p| p.name == name)
    }

    /// Monthly price of a plan, 0 for plans not in the catalogue
    pub fn plan_price(&self, name: &str) -> u32 {
        self.get_plan(name).map(|p| p.price).unwrap_or(0)
    }
}
