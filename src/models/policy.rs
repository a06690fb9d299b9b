use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Thresholds a submitted plan's office/home tallies are checked against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkPolicy {
    pub min_office_days: u32,
    pub max_home_days: u32,
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            min_office_days: 2,
            max_home_days: 3,
        }
    }
}

/// Admin-configured override forcing a status on a specific date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryDate {
    pub id: String,
    pub date: NaiveDate,
    /// Forced `StatusOption::value`.
    pub status: String,
    pub description: String,
    /// Empty means the rule applies to all teams.
    pub team_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryDateInput {
    pub date: NaiveDate,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub team_ids: Vec<String>,
}

impl MandatoryDate {
    pub fn new(input: MandatoryDateInput) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: input.date,
            status: input.status,
            description: input.description,
            team_ids: input.team_ids,
        }
    }

    /// Whether this rule covers a user with the given team membership.
    /// Team-scoped rules never apply to users without a team.
    pub fn applies_to(&self, team_id: Option<&str>) -> bool {
        if self.team_ids.is_empty() {
            return true;
        }
        team_id.is_some_and(|id| self.team_ids.iter().any(|scoped| scoped == id))
    }
}
