//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

pub const CONFIG_FILENAME: &str = "fittrack.toml";

/// Load configuration from fittrack.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load fittrack.toml if one can be found, otherwise fall back to defaults
pub fn load_config_or_default() -> Result<Config> {
    match load_config() {
        Ok(config) => Ok(config),
        Err(Error::ConfigNotFound) => {
            tracing::info!("No {} found, using default configuration", CONFIG_FILENAME);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Write configuration to a path as TOML
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}").expect("valid env var pattern");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# FitTrack Configuration

[server]
host = "0.0.0.0"
port = 3456

[session]
cookie_name = "fittrack_sid"
# Forget browser clients after this many idle minutes
idle_timeout_minutes = 30
cleanup_interval_secs = 60

[gym]
name = "${FITTRACK_GYM_NAME:-FitTrack Pro}"
default_plan = "Basic"

[[gym.plans]]
id = "1"
name = "Basic"
price = 29
duration_days = 30
features = ["Access to gym facilities", "Workout tracking app", "Basic workout plans", "Email support"]

[[gym.plans]]
id = "2"
name = "Pro"
price = 59
duration_days = 30
features = ["Everything in Basic", "Personal trainer sessions (2/month)", "Custom workout plans", "Progress analytics", "Priority support"]

[[gym.plans]]
id = "3"
name = "Elite"
price = 99
duration_days = 30
features = ["Everything in Pro", "Unlimited trainer access", "Nutrition planning", "24/7 support", "Guest passes (4/month)", "Exclusive classes"]
"#
}
