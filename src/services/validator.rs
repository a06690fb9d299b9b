use crate::models::{BuiltinStatus, DailyPlan, MandatoryDate, WorkPolicy};

/// Outcome of checking a candidate week against the work policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyCheck {
    Ok,
    /// A warning, not a hard failure: submission may proceed after the
    /// user explicitly confirms the override.
    Violation(String),
}

impl PolicyCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, PolicyCheck::Ok)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            PolicyCheck::Ok => None,
            PolicyCheck::Violation(reason) => Some(reason),
        }
    }
}

/// Checks a candidate week against the configured work policy and the
/// mandatory-date overrides applicable to the user's team.
pub struct PolicyValidator<'a> {
    policy: WorkPolicy,
    mandatory_dates: &'a [MandatoryDate],
}

impl<'a> PolicyValidator<'a> {
    pub fn new(policy: WorkPolicy, mandatory_dates: &'a [MandatoryDate]) -> Self {
        Self {
            policy,
            mandatory_dates,
        }
    }

    /// Force statuses for days matched by an applicable mandatory-date
    /// rule, irrespective of the user's input. Returns how many days
    /// were overridden.
    pub fn apply_mandatory_overrides(&self, days: &mut [DailyPlan], team_id: Option<&str>) -> usize {
        let mut overridden = 0;
        for day in days.iter_mut() {
            for rule in self.mandatory_dates {
                if rule.date == day.date && rule.applies_to(team_id) {
                    if day.status.as_deref() != Some(rule.status.as_str()) {
                        log::debug!(
                            "Mandatory date {} forces status {} ({})",
                            rule.date,
                            rule.status,
                            rule.description
                        );
                        day.status = Some(rule.status.clone());
                        overridden += 1;
                    }
                    break;
                }
            }
        }
        overridden
    }

    /// Tally office/home days (exact match on the status value).
    pub fn tally(days: &[DailyPlan]) -> (usize, usize) {
        let count = |value: &str| {
            days.iter()
                .filter(|day| day.status.as_deref() == Some(value))
                .count()
        };
        (
            count(BuiltinStatus::Office.as_str()),
            count(BuiltinStatus::Home.as_str()),
        )
    }

    /// Evaluate the tallies against the policy. Only one violation is
    /// surfaced at a time; the office-count check takes precedence.
    pub fn check(&self, days: &[DailyPlan]) -> PolicyCheck {
        let (office, home) = Self::tally(days);

        if (office as u32) < self.policy.min_office_days {
            return PolicyCheck::Violation(format!(
                "Plan has {office} office day(s); policy requires at least {}",
                self.policy.min_office_days
            ));
        }
        if (home as u32) > self.policy.max_home_days {
            return PolicyCheck::Violation(format!(
                "Plan has {home} home day(s); policy allows at most {}",
                self.policy.max_home_days
            ));
        }
        PolicyCheck::Ok
    }

    /// Full validation pass: apply mandatory overrides in place, then
    /// check the resulting tallies.
    pub fn validate(&self, days: &mut [DailyPlan], team_id: Option<&str>) -> PolicyCheck {
        self.apply_mandatory_overrides(days, team_id);
        self.check(days)
    }
}
