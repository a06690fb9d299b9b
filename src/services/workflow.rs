use chrono::Utc;

use super::validator::{PolicyCheck, PolicyValidator};
use crate::error::PlanError;
use crate::models::{
    ApprovalStatus, Notification, NotificationCategory, PresencePlan, User,
};
use crate::store::{Directory, SettingsStore};

/// Result of a workflow transition: the updated plan plus the events it
/// emitted. Delivery of the events is an external collaborator's job.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub plan: PresencePlan,
    pub notifications: Vec<Notification>,
}

impl TransitionOutcome {
    fn new(plan: PresencePlan) -> Self {
        Self {
            plan,
            notifications: Vec::new(),
        }
    }

    fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }
}

/// Advances a plan's approval status through its state machine:
/// Not Submitted → Pending → Approved/Rejected, with Rejected reopening
/// to Not Submitted. Approved is terminal for the week.
pub struct WorkflowEngine<'a> {
    directory: &'a Directory,
    settings: &'a SettingsStore,
}

impl<'a> WorkflowEngine<'a> {
    pub fn new(directory: &'a Directory, settings: &'a SettingsStore) -> Self {
        Self {
            directory,
            settings,
        }
    }

    /// Employee "submit": Not Submitted → Pending.
    ///
    /// Requires a complete week of known status values. Mandatory-date
    /// overrides are applied before the policy check; a policy violation
    /// aborts with `PolicyViolation` unless `override_confirmed` is set,
    /// in which case the violation reason is recorded on the plan.
    pub fn submit(
        &self,
        mut plan: PresencePlan,
        actor: &User,
        override_confirmed: bool,
    ) -> Result<TransitionOutcome, PlanError> {
        if actor.id != plan.user_id {
            return Err(PlanError::permission_denied(
                "Plans can only be submitted by their owner",
            ));
        }
        if plan.status != ApprovalStatus::NotSubmitted {
            return Err(PlanError::validation(format!(
                "Cannot submit a plan that is {}",
                plan.status
            )));
        }
        if !plan.is_complete() {
            return Err(PlanError::validation(
                "Incomplete plan: every day needs a status before submitting",
            ));
        }
        for day in &plan.days {
            if let Some(status) = day.status.as_deref() {
                if !self.settings.status_exists(status) {
                    return Err(PlanError::validation(format!(
                        "Unknown status value: {status}"
                    )));
                }
            }
        }

        let owner = self.directory.require_user(&plan.user_id)?;
        let validator = PolicyValidator::new(
            self.settings.work_policy(),
            self.settings.mandatory_dates(),
        );
        match validator.validate(&mut plan.days, owner.team_id.as_deref()) {
            PolicyCheck::Ok => plan.violation_reason = None,
            PolicyCheck::Violation(reason) => {
                if !override_confirmed {
                    log::warn!(
                        "Plan for user {} week {} violates policy: {}",
                        plan.user_id,
                        plan.week_of,
                        reason
                    );
                    return Err(PlanError::PolicyViolation(reason));
                }
                plan.violation_reason = Some(reason);
            }
        }

        plan.status = ApprovalStatus::Pending;
        plan.submitted_at = Some(Utc::now());
        log::info!(
            "Plan submitted: user {} week {}",
            plan.user_id,
            plan.week_of
        );

        let mut outcome = TransitionOutcome::new(plan);
        if let Some(leader) = owner
            .team_id
            .as_deref()
            .and_then(|team_id| self.directory.team_leader(team_id))
        {
            if leader.id != owner.id {
                let week_of = outcome.plan.week_of;
                outcome = outcome.with_notification(Notification::new(
                    &leader.id,
                    format!(
                        "{} submitted a plan for week {}",
                        owner.name, week_of
                    ),
                    NotificationCategory::Info,
                    Some("/team-view"),
                ));
            }
        }
        Ok(outcome)
    }

    /// Lead/admin "approve": Pending → Approved.
    pub fn approve(&self, plan: PresencePlan, actor: &User) -> Result<TransitionOutcome, PlanError> {
        self.review(plan, actor, ApprovalStatus::Approved)
    }

    /// Lead/admin "reject": Pending → Rejected.
    pub fn reject(&self, plan: PresencePlan, actor: &User) -> Result<TransitionOutcome, PlanError> {
        self.review(plan, actor, ApprovalStatus::Rejected)
    }

    fn review(
        &self,
        mut plan: PresencePlan,
        actor: &User,
        decision: ApprovalStatus,
    ) -> Result<TransitionOutcome, PlanError> {
        debug_assert!(matches!(
            decision,
            ApprovalStatus::Approved | ApprovalStatus::Rejected
        ));

        if plan.status != ApprovalStatus::Pending {
            return Err(PlanError::validation(format!(
                "Only pending plans can be reviewed; this one is {}",
                plan.status
            )));
        }
        let owner = self.directory.require_user(&plan.user_id)?;
        if !self.directory.manages(actor, owner) {
            return Err(PlanError::permission_denied(
                "Only the owner's team lead or an admin can review this plan",
            ));
        }

        plan.status = decision;
        log::info!(
            "Plan {}: user {} week {} by {}",
            decision.as_str().to_lowercase(),
            plan.user_id,
            plan.week_of,
            actor.id
        );

        let category = if decision == ApprovalStatus::Approved {
            NotificationCategory::Success
        } else {
            NotificationCategory::Warning
        };
        let message = format!(
            "Your presence plan for week {} was {}",
            plan.week_of, decision
        );
        let recipient = plan.user_id.clone();
        Ok(TransitionOutcome::new(plan).with_notification(Notification::new(
            recipient,
            message,
            category,
            Some("/dashboard"),
        )))
    }

    /// Employee "edit and resubmit": Rejected → Not Submitted. Prior day
    /// selections are preserved as the new draft.
    pub fn reopen(&self, mut plan: PresencePlan, actor: &User) -> Result<TransitionOutcome, PlanError> {
        if actor.id != plan.user_id {
            return Err(PlanError::permission_denied(
                "Plans can only be reopened by their owner",
            ));
        }
        if plan.status != ApprovalStatus::Rejected {
            return Err(PlanError::validation(format!(
                "Only rejected plans can be reopened; this one is {}",
                plan.status
            )));
        }

        plan.status = ApprovalStatus::NotSubmitted;
        plan.submitted_at = None;
        plan.violation_reason = None;
        log::info!(
            "Plan reopened for editing: user {} week {}",
            plan.user_id,
            plan.week_of
        );
        Ok(TransitionOutcome::new(plan))
    }
}
