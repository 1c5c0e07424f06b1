//! Per-client view state: the mock collections a client can edit
//!
//! Each browser client gets its own freshly seeded copy. Nothing here is
//! shared between clients or written to disk, and none of it ever feeds back
//! into the client's session.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use super::bmi::Bmi;
use super::forms::{non_blank, parse_number, ExerciseForm, MemberForm, PlanForm, TrainerForm};
use super::models::{
    short_id, Exercise, Member, ProfileDetails, SubscriptionStatus, Trainer, WorkoutPlan,
};
use super::roster::Roster;
use super::seed;
use super::workout::TodayWorkout;

/// New subscriptions run for this many days
const SUBSCRIPTION_DAYS: i64 = 30;
const DEFAULT_DAYS_PER_WEEK: u32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} '{1}' not found")]
    NotFound(&'static str, String),
}

pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub members: Roster<Member>,
    pub trainers: Roster<Trainer>,
    pub plans: Roster<WorkoutPlan>,
    pub today: TodayWorkout,
    /// Saved profile edits; `None` until the first save
    pub profile: Option<ProfileDetails>,
    pub bmi: Option<Bmi>,
    pub current_plan: String,
    notice: Option<String>,
}

impl Workspace {
    pub fn new(current_plan: &str, today: NaiveDate) -> Self {
        Self {
            members: Roster::new(seed::members()),
            trainers: Roster::new(seed::trainers()),
            plans: Roster::new(seed::workout_plans()),
            today: TodayWorkout::new(seed::todays_plan(), today),
            profile: None,
            bmi: None,
            current_plan: current_plan.to_string(),
            notice: None,
        }
    }

    /// Message shown once on the next rendered page
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    // Members

    pub fn add_member(&mut self, form: MemberForm, today: NaiveDate) -> WorkspaceResult<Member> {
        let name = required("Name", &form.name)?;
        let email = required("Email", &form.email)?;

        let member = Member {
            id: short_id(),
            user_id: short_id(),
            name,
            email,
            phone: non_blank(&form.phone),
            subscription_plan: non_blank(&form.subscription_plan).or_else(|| Some("Basic".to_string())),
            subscription_status: SubscriptionStatus::Active,
            subscription_end_date: Some(today + Duration::days(SUBSCRIPTION_DAYS)),
            join_date: today,
            trainer_id: None,
        };
        self.members.insert(member.clone());
        Ok(member)
    }

    pub fn update_member(&mut self, id: &str, form: MemberForm) -> WorkspaceResult<()> {
        let name = required("Name", &form.name)?;
        let email = required("Email", &form.email)?;

        let found = self.members.update(id, |member| {
            member.name = name;
            member.email = email;
            member.phone = non_blank(&form.phone);
            if let Some(plan) = non_blank(&form.subscription_plan) {
                member.subscription_plan = Some(plan);
            }
            if let Some(status) = form.subscription_status {
                member.subscription_status = status;
            }
        });
        found.then_some(()).ok_or_else(|| WorkspaceError::NotFound("Member", id.to_string()))
    }

    pub fn delete_member(&mut self, id: &str) -> WorkspaceResult<Member> {
        self.members
            .remove(id)
            .ok_or_else(|| WorkspaceError::NotFound("Member", id.to_string()))
    }

    // Trainers

    pub fn add_trainer(&mut self, form: TrainerForm) -> WorkspaceResult<Trainer> {
        let trainer = Trainer {
            id: short_id(),
            name: required("Name", &form.name)?,
            email: required("Email", &form.email)?,
            specialization: required("Specialization", &form.specialization)?,
            experience: parse_number(&form.experience).unwrap_or(0),
        };
        self.trainers.insert(trainer.clone());
        Ok(trainer)
    }

    pub fn update_trainer(&mut self, id: &str, form: TrainerForm) -> WorkspaceResult<()> {
        let name = required("Name", &form.name)?;
        let email = required("Email", &form.email)?;
        let specialization = required("Specialization", &form.specialization)?;

        let found = self.trainers.update(id, |trainer| {
            trainer.name = name;
            trainer.email = email;
            trainer.specialization = specialization;
            trainer.experience = parse_number(&form.experience).unwrap_or(0);
        });
        found.then_some(()).ok_or_else(|| WorkspaceError::NotFound("Trainer", id.to_string()))
    }

    pub fn delete_trainer(&mut self, id: &str) -> WorkspaceResult<Trainer> {
        self.trainers
            .remove(id)
            .ok_or_else(|| WorkspaceError::NotFound("Trainer", id.to_string()))
    }

    // Workout plans

    pub fn create_plan(&mut self, form: PlanForm) -> WorkspaceResult<WorkoutPlan> {
        let plan = WorkoutPlan {
            id: short_id(),
            name: required("Plan name", &form.name)?,
            description: form.description.trim().to_string(),
            trainer_id: non_blank(&form.trainer_id).unwrap_or_else(|| "trainer1".to_string()),
            exercises: Vec::new(),
            days_per_week: parse_number(&form.days_per_week).unwrap_or(DEFAULT_DAYS_PER_WEEK),
        };
        self.plans.insert(plan.clone());
        Ok(plan)
    }

    pub fn add_exercise(&mut self, plan_id: &str, form: ExerciseForm) -> WorkspaceResult<Exercise> {
        let name = required("Exercise name", &form.name)?;
        let sets = parse_number::<u32>(&form.sets)
            .filter(|sets| *sets > 0)
            .ok_or(WorkspaceError::MissingField("Sets"))?;
        let reps = required("Reps", &form.reps)?;

        let plan = self.plan_mut(plan_id)?;
        let exercise = Exercise {
            // positional ids within a plan
            id: next_exercise_id(&plan.exercises),
            name,
            sets,
            reps,
            rest_time: non_blank(&form.rest_time),
            notes: non_blank(&form.notes),
        };
        plan.exercises.push(exercise.clone());
        Ok(exercise)
    }

    pub fn remove_exercise(&mut self, plan_id: &str, exercise_id: &str) -> WorkspaceResult<Exercise> {
        let plan = self.plan_mut(plan_id)?;
        let index = plan
            .exercises
            .iter()
            .position(|e| e.id == exercise_id)
            .ok_or_else(|| WorkspaceError::NotFound("Exercise", exercise_id.to_string()))?;
        Ok(plan.exercises.remove(index))
    }

    pub fn delete_plan(&mut self, id: &str) -> WorkspaceResult<WorkoutPlan> {
        self.plans
            .remove(id)
            .ok_or_else(|| WorkspaceError::NotFound("Workout plan", id.to_string()))
    }

    fn plan_mut(&mut self, id: &str) -> WorkspaceResult<&mut WorkoutPlan> {
        self.plans
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotFound("Workout plan", id.to_string()))
    }
}

fn required(field: &'static str, value: &str) -> WorkspaceResult<String> {
    non_blank(value).ok_or(WorkspaceError::MissingField(field))
}

fn next_exercise_id(exercises: &[Exercise]) -> String {
    exercises
        .iter()
        .filter_map(|e| e.id.parse::<u32>().ok())
        .max()
        .map(|max| max + 1)
        .unwrap_or(1)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    fn workspace() -> Workspace {
        Workspace::new("Basic", today())
    }

    #[test]
    fn test_seeded_collections() {
        let ws = workspace();
        assert_eq!(ws.members.len(), 3);
        assert_eq!(ws.trainers.len(), 3);
        assert_eq!(ws.plans.len(), 2);
        assert_eq!(ws.current_plan, "Basic");
    }

    #[test]
    fn test_add_member_sets_dates() {
        let mut ws = workspace();
        let member = ws
            .add_member(
                MemberForm {
                    name: "Ann Lee".into(),
                    email: "ann@example.com".into(),
                    subscription_plan: "Pro".into(),
                    ..Default::default()
                },
                today(),
            )
            .unwrap();

        assert_eq!(member.join_date, today());
        assert_eq!(member.subscription_end_date, NaiveDate::from_ymd_opt(2025, 10, 31));
        assert_eq!(member.subscription_status, SubscriptionStatus::Active);
        assert_eq!(member.phone, None);
        assert_eq!(ws.members.len(), 4);
    }

    #[test]
    fn test_add_member_requires_name_and_email() {
        let mut ws = workspace();
        let err = ws.add_member(MemberForm::default(), today()).unwrap_err();
        assert_eq!(err, WorkspaceError::MissingField("Name"));
        assert_eq!(ws.members.len(), 3);
    }

    #[test]
    fn test_update_and_delete_member() {
        let mut ws = workspace();
        ws.update_member(
            "2",
            MemberForm {
                name: "Jane Smith".into(),
                email: "jane@new.com".into(),
                subscription_status: Some(SubscriptionStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap();

        let jane = ws.members.get("2").unwrap();
        assert_eq!(jane.email, "jane@new.com");
        assert_eq!(jane.subscription_plan.as_deref(), Some("Basic"));
        assert!(!jane.is_active());

        assert_eq!(ws.delete_member("2").unwrap().name, "Jane Smith");
        assert!(matches!(ws.delete_member("2"), Err(WorkspaceError::NotFound(..))));
    }

    #[test]
    fn test_trainer_experience_parsing() {
        let mut ws = workspace();
        let trainer = ws
            .add_trainer(TrainerForm {
                name: "Kim".into(),
                email: "kim@fittrack.com".into(),
                specialization: "Yoga".into(),
                experience: "lots".into(),
            })
            .unwrap();
        assert_eq!(trainer.experience, 0);

        ws.update_trainer(
            &trainer.id,
            TrainerForm {
                name: "Kim".into(),
                email: "kim@fittrack.com".into(),
                specialization: "Yoga".into(),
                experience: "7".into(),
            },
        )
        .unwrap();
        assert_eq!(ws.trainers.get(&trainer.id).unwrap().experience, 7);
        assert!(ws.delete_trainer(&trainer.id).is_ok());
    }

    #[test]
    fn test_plan_lifecycle() {
        let mut ws = workspace();
        let plan = ws
            .create_plan(PlanForm {
                name: "Mobility".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(plan.days_per_week, 3);

        let first = ws
            .add_exercise(
                &plan.id,
                ExerciseForm {
                    name: "Hip openers".into(),
                    sets: "2".into(),
                    reps: "10".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(first.id, "1");

        let bad = ExerciseForm {
            name: "Lunges".into(),
            sets: "0".into(),
            reps: "10".into(),
            ..Default::default()
        };
        assert_eq!(
            ws.add_exercise(&plan.id, bad).unwrap_err(),
            WorkspaceError::MissingField("Sets")
        );

        ws.remove_exercise(&plan.id, "1").unwrap();
        assert!(ws.plans.get(&plan.id).unwrap().exercises.is_empty());
        assert!(ws.delete_plan(&plan.id).is_ok());
        assert_eq!(ws.plans.len(), 2);
    }

    #[test]
    fn test_notice_is_taken_once() {
        let mut ws = workspace();
        ws.set_notice("Saved");
        assert_eq!(ws.take_notice().as_deref(), Some("Saved"));
        assert_eq!(ws.take_notice(), None);
    }
}
