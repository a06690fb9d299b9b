use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use super::directory::Directory;
use crate::error::PlanError;
use crate::models::{ApprovalStatus, PresencePlan};

/// One presence plan per (user, week). Plans are never deleted in
/// normal operation; history is retained for reporting.
#[derive(Debug, Default, Clone)]
pub struct PlanStore {
    plans: HashMap<(String, NaiveDate), PresencePlan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time snapshot of the plan for a (user, week) key.
    pub fn get(&self, user_id: &str, week_of: NaiveDate) -> Option<PresencePlan> {
        self.plans.get(&(user_id.to_string(), week_of)).cloned()
    }

    /// The stored plan for a week, or a fresh Not Submitted draft if the
    /// week has never been viewed. The draft is not persisted until it
    /// is written back via `upsert`.
    pub fn get_or_template(&self, user_id: &str, week_of: NaiveDate) -> PresencePlan {
        self.get(user_id, week_of)
            .unwrap_or_else(|| PresencePlan::template(user_id, week_of))
    }

    /// Insert or replace the plan for its (user, week) key.
    pub fn upsert(&mut self, plan: PresencePlan) -> Result<(), PlanError> {
        if !plan.has_valid_week() {
            return Err(PlanError::validation(format!(
                "Plan days must be the {} consecutive days starting at {}",
                crate::models::WORK_WEEK_DAYS,
                plan.week_of
            )));
        }
        self.plans
            .insert((plan.user_id.clone(), plan.week_of), plan);
        Ok(())
    }

    pub fn list_for_user(&self, user_id: &str) -> Vec<PresencePlan> {
        let mut plans: Vec<PresencePlan> = self
            .plans
            .values()
            .filter(|plan| plan.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.week_of.cmp(&a.week_of));
        plans
    }

    pub fn list_for_team(&self, directory: &Directory, team_id: &str) -> Vec<PresencePlan> {
        let mut plans: Vec<PresencePlan> = self
            .plans
            .values()
            .filter(|plan| {
                directory
                    .get_user(&plan.user_id)
                    .is_some_and(|user| user.team_id.as_deref() == Some(team_id))
            })
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.week_of.cmp(&a.week_of).then(a.user_id.cmp(&b.user_id)));
        plans
    }

    pub fn list_all(&self) -> Vec<PresencePlan> {
        let mut plans: Vec<PresencePlan> = self.plans.values().cloned().collect();
        plans.sort_by(|a, b| b.week_of.cmp(&a.week_of).then(a.user_id.cmp(&b.user_id)));
        plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Draft for `week_of` carrying over the day statuses of the user's
    /// previous week, if one exists.
    pub fn copy_previous_week(&self, user_id: &str, week_of: NaiveDate) -> Option<PresencePlan> {
        let source = self.get(user_id, week_of - Duration::days(7))?;
        let mut draft = PresencePlan::template(user_id, week_of);
        for (day, source_day) in draft.days.iter_mut().zip(source.days.iter()) {
            day.status = source_day.status.clone();
        }
        draft.status = ApprovalStatus::NotSubmitted;
        Some(draft)
    }
}
