pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use chrono::NaiveDate;

pub use config::Config;
pub use error::PlanError;
pub use services::{PolicyCheck, PolicyValidator, TransitionOutcome, WorkflowEngine};
pub use store::{Directory, PlanStore, SettingsStore};

use models::Notification;

/// Application state wiring the stores and the workflow together:
/// validate → transition → persist → hand back the emitted events.
pub struct Planner {
    pub directory: Directory,
    pub settings: SettingsStore,
    pub plans: PlanStore,
}

impl Planner {
    pub fn new(config: &Config) -> Self {
        Self {
            directory: Directory::new(),
            settings: SettingsStore::new(config.work_policy()),
            plans: PlanStore::new(),
        }
    }

    fn engine(&self) -> WorkflowEngine<'_> {
        WorkflowEngine::new(&self.directory, &self.settings)
    }

    /// Submit a draft plan on behalf of its owner and persist the result.
    pub fn submit(
        &mut self,
        plan: models::PresencePlan,
        actor_id: &str,
        override_confirmed: bool,
    ) -> Result<Vec<Notification>, PlanError> {
        let actor = self.directory.require_user(actor_id)?.clone();
        let outcome = self.engine().submit(plan, &actor, override_confirmed)?;
        self.plans.upsert(outcome.plan)?;
        Ok(outcome.notifications)
    }

    pub fn approve(
        &mut self,
        user_id: &str,
        week_of: NaiveDate,
        actor_id: &str,
    ) -> Result<Vec<Notification>, PlanError> {
        let actor = self.directory.require_user(actor_id)?.clone();
        let plan = self.require_plan(user_id, week_of)?;
        let outcome = self.engine().approve(plan, &actor)?;
        self.plans.upsert(outcome.plan)?;
        Ok(outcome.notifications)
    }

    pub fn reject(
        &mut self,
        user_id: &str,
        week_of: NaiveDate,
        actor_id: &str,
    ) -> Result<Vec<Notification>, PlanError> {
        let actor = self.directory.require_user(actor_id)?.clone();
        let plan = self.require_plan(user_id, week_of)?;
        let outcome = self.engine().reject(plan, &actor)?;
        self.plans.upsert(outcome.plan)?;
        Ok(outcome.notifications)
    }

    /// Reopen a rejected plan for editing.
    pub fn reopen(
        &mut self,
        user_id: &str,
        week_of: NaiveDate,
        actor_id: &str,
    ) -> Result<Vec<Notification>, PlanError> {
        let actor = self.directory.require_user(actor_id)?.clone();
        let plan = self.require_plan(user_id, week_of)?;
        let outcome = self.engine().reopen(plan, &actor)?;
        self.plans.upsert(outcome.plan)?;
        Ok(outcome.notifications)
    }

    fn require_plan(
        &self,
        user_id: &str,
        week_of: NaiveDate,
    ) -> Result<models::PresencePlan, PlanError> {
        self.plans.get(user_id, week_of).ok_or_else(|| {
            PlanError::not_found(format!("plan for user {user_id} week {week_of}"))
        })
    }
}
