//! Member progress report

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Month, TimeRange::Year];

    /// Parse a query value, falling back to the default for anything unknown
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            _ => Err(()),
        }
    }
}

/// One bar of a horizontal bar chart
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Width relative to the largest bar, 0-100
    pub percent: u32,
}

/// Scale labelled values into bars relative to the maximum
pub fn bars(points: &[(&str, f64)]) -> Vec<Bar> {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|(label, value)| Bar {
            label: label.to_string(),
            value: *value,
            percent: if max > 0.0 {
                ((value / max) * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightPoint {
    pub label: String,
    pub weight: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentWorkout {
    pub date: String,
    pub exercises: u32,
    pub duration: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressTotals {
    pub total_workouts: u32,
    pub total_hours: u32,
    pub avg_calories: u32,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub range: TimeRange,
    pub totals: ProgressTotals,
    pub weight: Vec<WeightPoint>,
    pub frequency: Vec<Bar>,
    pub strength: Vec<Bar>,
    pub recent: Vec<RecentWorkout>,
}

impl ProgressReport {
    pub fn new(range: TimeRange) -> Self {
        let weight = [("Week 1", 180.0), ("Week 2", 179.0), ("Week 3", 177.0), ("Week 4", 176.0)]
            .into_iter()
            .map(|(label, weight)| WeightPoint {
                label: label.to_string(),
                weight,
                target: 175.0,
            })
            .collect();

        let recent = [
            ("2025-10-01", 5, 55, 480),
            ("2025-09-29", 4, 45, 420),
            ("2025-09-27", 6, 60, 510),
            ("2025-09-25", 4, 50, 450),
        ]
        .into_iter()
        .map(|(date, exercises, duration, calories)| RecentWorkout {
            date: date.to_string(),
            exercises,
            duration,
            calories,
        })
        .collect();

        Self {
            range,
            totals: ProgressTotals {
                total_workouts: 48,
                total_hours: 52,
                avg_calories: 465,
                current_streak: 5,
            },
            weight,
            frequency: bars(&[("Week 1", 3.0), ("Week 2", 4.0), ("Week 3", 4.0), ("Week 4", 5.0)]),
            strength: bars(&[
                ("Bench Press", 185.0),
                ("Squats", 225.0),
                ("Deadlifts", 275.0),
                ("Pull-ups", 180.0),
            ]),
            recent,
        }
    }
}
