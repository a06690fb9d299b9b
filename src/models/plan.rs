use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;
use super::status::BuiltinStatus;

/// Length of the planned work week (Sunday through Thursday).
pub const WORK_WEEK_DAYS: usize = 5;

pub const DAY_NAMES: [&str; WORK_WEEK_DAYS] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ApprovalStatus {
        NotSubmitted => "Not Submitted",
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::NotSubmitted
    }
}

impl ApprovalStatus {
    pub fn is_submitted(&self) -> bool {
        !matches!(self, ApprovalStatus::NotSubmitted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Day-of-week label, e.g. "Sunday".
    pub day: String,
    pub date: NaiveDate,
    /// References a `StatusOption::value`; `None` until the user picks one.
    pub status: Option<String>,
    /// Free-text detail, used with open-ended statuses like "Other".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresencePlan {
    pub user_id: String,
    /// ISO date of the week's first day; natural key together with `user_id`.
    pub week_of: NaiveDate,
    pub status: ApprovalStatus,
    pub days: Vec<DailyPlan>,
    pub submitted_at: Option<DateTime<Utc>>,
    /// Recorded when the user confirms submission despite a policy warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation_reason: Option<String>,
}

impl PresencePlan {
    /// Fresh draft for a week: Not Submitted, all days blank.
    pub fn template(user_id: impl Into<String>, week_of: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            week_of,
            status: ApprovalStatus::NotSubmitted,
            days: week_days(week_of),
            submitted_at: None,
            violation_reason: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.days.iter().all(|day| day.status.is_some())
    }

    /// Count of days carrying the given status value (exact match).
    pub fn count_status(&self, value: &str) -> usize {
        self.days
            .iter()
            .filter(|day| day.status.as_deref() == Some(value))
            .count()
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<&str> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .and_then(|day| day.status.as_deref())
    }

    pub fn office_days(&self) -> usize {
        self.count_status(BuiltinStatus::Office.as_str())
    }

    pub fn home_days(&self) -> usize {
        self.count_status(BuiltinStatus::Home.as_str())
    }

    /// Whether the day sequence is exactly the five consecutive days
    /// starting at `week_of`.
    pub fn has_valid_week(&self) -> bool {
        self.days.len() == WORK_WEEK_DAYS
            && self
                .days
                .iter()
                .enumerate()
                .all(|(i, day)| day.date == self.week_of + Duration::days(i as i64))
    }
}

/// Start of the work week (the previous or same Sunday) for a date.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The five planned days for a week, with blank statuses.
pub fn week_days(week_of: NaiveDate) -> Vec<DailyPlan> {
    DAY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| DailyPlan {
            day: name.to_string(),
            date: week_of + Duration::days(i as i64),
            status: None,
            note: None,
        })
        .collect()
}

/// Submission deadline for a week: Thursday at the configured hour.
pub fn submission_deadline(week_of: NaiveDate, hour: u32) -> NaiveDateTime {
    let thursday = week_of + Duration::days(WORK_WEEK_DAYS as i64 - 1);
    thursday.and_time(NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or_default())
}

pub fn is_overdue(week_of: NaiveDate, hour: u32, now: NaiveDateTime) -> bool {
    now > submission_deadline(week_of, hour)
}
