//! Today's workout on the member dashboard

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::models::{short_id, ExerciseLog, WorkoutLog, WorkoutPlan};

/// Fixed figures shown next to the exercise counter
pub const CALORIES_BURNED: u32 = 450;
pub const WORKOUT_MINUTES: u32 = 45;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("Exercise '{0}' is not part of today's plan")]
    UnknownExercise(String),

    #[error("Exercise '{0}' is already completed")]
    AlreadyCompleted(String),
}

/// Input from the "Log Exercise" form
#[derive(Debug, Clone, Default)]
pub struct LogEntry {
    /// Defaults to the plan's target when absent
    pub completed_sets: Option<u32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyStats {
    pub completed_exercises: usize,
    pub total_exercises: usize,
    pub calories_burned: u32,
    pub workout_minutes: u32,
    pub days_per_week: u32,
}

#[derive(Debug, Clone)]
pub struct TodayWorkout {
    plan: WorkoutPlan,
    log: WorkoutLog,
}

impl TodayWorkout {
    pub fn new(plan: WorkoutPlan, date: NaiveDate) -> Self {
        let log = WorkoutLog {
            id: short_id(),
            member_id: String::new(),
            workout_plan_id: plan.id.clone(),
            date,
            exercises: Vec::new(),
            duration: None,
            completed: false,
        };
        Self { plan, log }
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    pub fn is_completed(&self, exercise_id: &str) -> bool {
        self.log.exercises.iter().any(|e| e.exercise_id == exercise_id)
    }

    /// True once every exercise in the plan has been logged
    pub fn is_finished(&self) -> bool {
        self.log.completed
    }

    /// Record an exercise as done for `member_id`
    pub fn log_exercise(
        &mut self,
        member_id: &str,
        exercise_id: &str,
        entry: LogEntry,
    ) -> Result<&ExerciseLog, LogError> {
        let exercise = self
            .plan
            .exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| LogError::UnknownExercise(exercise_id.to_string()))?;

        if self.is_completed(exercise_id) {
            return Err(LogError::AlreadyCompleted(exercise.name.clone()));
        }

        self.log.member_id = member_id.to_string();
        self.log.exercises.push(ExerciseLog {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            completed_sets: entry.completed_sets.unwrap_or(exercise.sets),
            weight: entry.weight,
            notes: entry.notes.filter(|n| !n.trim().is_empty()),
        });
        self.log.completed = self.log.exercises.len() == self.plan.exercises.len();
        if self.log.completed {
            self.log.duration = Some(WORKOUT_MINUTES);
        }

        Ok(&self.log.exercises[self.log.exercises.len() - 1])
    }

    pub fn stats(&self) -> DailyStats {
        DailyStats {
            completed_exercises: self.log.exercises.len(),
            total_exercises: self.plan.exercises.len(),
            calories_burned: CALORIES_BURNED,
            workout_minutes: WORKOUT_MINUTES,
            days_per_week: self.plan.days_per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::seed;

    fn today() -> TodayWorkout {
        TodayWorkout::new(seed::todays_plan(), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())
    }

    #[test]
    fn test_log_marks_exercise_completed() {
        let mut workout = today();
        let logged = workout
            .log_exercise("m1", "1", LogEntry { weight: Some(135.0), ..Default::default() })
            .unwrap();
        assert_eq!(logged.exercise_name, "Bench Press");
        assert_eq!(logged.completed_sets, 4);

        assert!(workout.is_completed("1"));
        assert!(!workout.is_finished());
        assert_eq!(workout.stats().completed_exercises, 1);
        assert_eq!(workout.log().member_id, "m1");
    }

    #[test]
    fn test_cannot_log_twice_or_unknown() {
        let mut workout = today();
        workout.log_exercise("m1", "2", LogEntry::default()).unwrap();
        assert_eq!(
            workout.log_exercise("m1", "2", LogEntry::default()).unwrap_err(),
            LogError::AlreadyCompleted("Squats".to_string())
        );
        assert_eq!(
            workout.log_exercise("m1", "99", LogEntry::default()).unwrap_err(),
            LogError::UnknownExercise("99".to_string())
        );
    }

    #[test]
    fn test_finishing_every_exercise() {
        let mut workout = today();
        for id in ["1", "2", "3", "4"] {
            workout.log_exercise("m1", id, LogEntry::default()).unwrap();
        }
        assert!(workout.is_finished());
        assert_eq!(workout.log().duration, Some(WORKOUT_MINUTES));
    }
}
