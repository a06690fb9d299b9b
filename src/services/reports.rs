use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{ApprovalStatus, BuiltinStatus, PresencePlan};
use crate::store::Directory;

/// Denominator policy for the compliance rate: either the plans in
/// scope, or the number of users expected to have planned (useful when
/// some users have no record yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    PlanCount,
    ExpectedUsers(usize),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_plans: usize,
    pub submitted: usize,
    pub approved: usize,
    /// Percentages are unrounded; presentation layers round for display.
    pub compliance_rate: f64,
    pub approval_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamComplianceRow {
    pub team_id: String,
    pub team_name: String,
    pub submitted: usize,
    pub compliance_rate: f64,
}

/// Predicate composition for scoping a plan collection by team, user,
/// and/or week range.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub team_id: Option<String>,
    pub user_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PlanFilter {
    pub fn matches(&self, plan: &PresencePlan, directory: &Directory) -> bool {
        if let Some(team_id) = self.team_id.as_deref() {
            let in_team = directory
                .get_user(&plan.user_id)
                .is_some_and(|user| user.team_id.as_deref() == Some(team_id));
            if !in_team {
                return false;
            }
        }
        if let Some(user_id) = self.user_id.as_deref() {
            if plan.user_id != user_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if plan.week_of < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if plan.week_of > to {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, plans: &[PresencePlan], directory: &Directory) -> Vec<PresencePlan> {
        plans
            .iter()
            .filter(|plan| self.matches(plan, directory))
            .cloned()
            .collect()
    }
}

fn rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Round an unrounded percentage for display.
pub fn percent_rounded(value: f64) -> i64 {
    value.round() as i64
}

/// Compliance and approval rates over a plan collection.
pub fn dashboard_stats(plans: &[PresencePlan], denominator: Denominator) -> DashboardStats {
    let submitted = plans
        .iter()
        .filter(|plan| plan.status.is_submitted())
        .count();
    let approved = plans
        .iter()
        .filter(|plan| plan.status == ApprovalStatus::Approved)
        .count();
    let expected = match denominator {
        Denominator::PlanCount => plans.len(),
        Denominator::ExpectedUsers(count) => count,
    };

    DashboardStats {
        total_plans: plans.len(),
        submitted,
        approved,
        compliance_rate: rate(submitted, expected),
        approval_rate: rate(approved, submitted),
    }
}

/// Status value → count of days across all Approved plans in scope.
pub fn status_distribution(plans: &[PresencePlan]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for plan in plans {
        if plan.status != ApprovalStatus::Approved {
            continue;
        }
        for day in &plan.days {
            if let Some(status) = day.status.as_deref() {
                *distribution.entry(status.to_string()).or_insert(0) += 1;
            }
        }
    }
    distribution
}

/// Users partitioned by the status recorded on a specific date, across
/// Approved plans only.
pub fn daily_grouping(plans: &[PresencePlan], date: NaiveDate) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for plan in plans {
        if plan.status != ApprovalStatus::Approved {
            continue;
        }
        if let Some(status) = plan.status_on(date) {
            grouped
                .entry(status.to_string())
                .or_default()
                .push(plan.user_id.clone());
        }
    }
    for users in grouped.values_mut() {
        users.sort();
    }
    grouped
}

/// Per-team submission rates. When a team has no plans in scope, its
/// member count serves as the denominator (0% until someone submits).
pub fn team_compliance(directory: &Directory, plans: &[PresencePlan]) -> Vec<TeamComplianceRow> {
    let mut rows: Vec<TeamComplianceRow> = directory
        .teams()
        .map(|team| {
            let team_plans: Vec<&PresencePlan> = plans
                .iter()
                .filter(|plan| {
                    directory
                        .get_user(&plan.user_id)
                        .is_some_and(|user| user.team_id.as_deref() == Some(team.id.as_str()))
                })
                .collect();
            let submitted = team_plans
                .iter()
                .filter(|plan| plan.status.is_submitted())
                .count();
            let expected = if team_plans.is_empty() {
                directory.team_members(&team.id).len()
            } else {
                team_plans.len()
            };
            TeamComplianceRow {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                submitted,
                compliance_rate: rate(submitted, expected),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.team_name.cmp(&b.team_name));
    rows
}

/// Coverage: whether anyone is scheduled in-office on the date, per the
/// Approved plans in scope. Reported, not enforced.
pub fn office_coverage(plans: &[PresencePlan], date: NaiveDate) -> bool {
    plans.iter().any(|plan| {
        plan.status == ApprovalStatus::Approved
            && plan.status_on(date) == Some(BuiltinStatus::Office.as_str())
    })
}
