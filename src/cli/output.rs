//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::routes::RouteInfo;
use crate::auth::Decision;
use crate::gym::bmi::{Bmi, BmiCategory};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print the page table
pub fn print_route_table(routes: &[RouteInfo]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Page").fg(Color::Cyan),
            Cell::new("Access").fg(Color::Cyan),
            Cell::new("Template").fg(Color::Cyan),
        ]);

    for route in routes {
        let access_color = match route.access.as_str() {
            "public" => Color::Green,
            "admin" => Color::Red,
            _ => Color::Yellow,
        };

        table.add_row(vec![
            Cell::new(route.path),
            Cell::new(route.title),
            Cell::new(&route.access).fg(access_color),
            Cell::new(route.template),
        ]);
    }

    println!("{table}");
}

/// Print a guard decision for a path
pub fn print_decision(path: &str, decision: Decision) {
    match decision.location() {
        None => success(&format!("{} renders", path)),
        Some(to) => println!("{} {} {} {}", "→".yellow(), path, "redirects to".dimmed(), to.cyan()),
    }
}

/// Print a BMI result, colored by category
pub fn print_bmi(bmi: &Bmi) {
    let category = match bmi.category {
        BmiCategory::Normal => bmi.category.to_string().green(),
        BmiCategory::Underweight | BmiCategory::Overweight => bmi.category.to_string().yellow(),
        BmiCategory::Obese => bmi.category.to_string().red(),
    };
    println!("  {} {:.1}", "BMI:".bold(), bmi.value);
    println!("  {} {}", "Category:".bold(), category);
}
