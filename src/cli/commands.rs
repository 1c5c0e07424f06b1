//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::api::routes::route_table;
use crate::api::View;
use crate::auth::{self, Identity, Role, Session};
use crate::cli::{error, info, print_bmi, print_decision, print_route_table, success, warn, OutputFormat};
use crate::config::{self, loader::CONFIG_FILENAME};
use crate::gym::bmi;

/// Initialize a new fittrack.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new(CONFIG_FILENAME);

    if config_path.exists() {
        warn(&format!("{} already exists", CONFIG_FILENAME));
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success(&format!("Created {}", CONFIG_FILENAME));
    info("Edit the configuration file and run 'fittrack serve' to start the web UI");

    Ok(())
}

/// Start the web UI
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = config::load_config_or_default()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting {} at http://{}:{}", config.gym.name, host, port));

    crate::api::run_server(config, &host, port).await?;
    Ok(())
}

/// List every page and who may open it
pub fn routes(format: OutputFormat) -> Result<()> {
    let routes = route_table();

    match format {
        OutputFormat::Table => print_route_table(&routes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&routes)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&routes)?),
    }

    Ok(())
}

/// Show the guard decision for `path` as seen by `role`, or by an anonymous visitor
pub fn authorize(path: &str, role: Option<Role>) -> Result<()> {
    let session = match role {
        Some(role) => Session::Authenticated(Identity::new(
            format!("{}@fittrack.local", role),
            role.to_string(),
            role,
        )),
        None => Session::Anonymous,
    };

    match View::from_path(path) {
        Some(view) => print_decision(view.path(), view.decide(&session)),
        None => {
            warn(&format!("No page at {}", path));
            info(&format!("Unknown paths redirect to {}", auth::fallback(&session)));
        }
    }

    Ok(())
}

/// Calculate a BMI from kilograms and centimetres
pub fn bmi(weight: f64, height: f64) -> Result<()> {
    match bmi::calculate(weight, height) {
        Some(result) => {
            print_bmi(&result);
            Ok(())
        }
        None => {
            error("Weight and height must both be positive");
            Err(anyhow::anyhow!("invalid BMI input"))
        }
    }
}
