#![allow(dead_code)]

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;

use clockin::models::{PresencePlan, RoleSet, Team, User, UserRole};
use clockin::{Config, Directory, Planner, SettingsStore};

/// Initialize test logging (idempotent across tests).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A Sunday, matching the planner's week-start convention.
pub fn week() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}

pub fn previous_week() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
}

pub fn user_with(id: &str, roles: &[UserRole], team_id: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: Name().fake(),
        email: Some(SafeEmail().fake()),
        avatar_url: None,
        roles: RoleSet::new(roles.iter().copied()),
        team_id: team_id.map(|t| t.to_string()),
        phone_number: None,
    }
}

pub fn team_with(id: &str, leader_id: Option<&str>) -> Team {
    Team {
        id: id.to_string(),
        name: format!("{} Team", Name().fake::<String>()),
        leader_id: leader_id.map(|l| l.to_string()),
    }
}

/// Complete draft plan with one status per day (Sun–Thu).
pub fn draft(user_id: &str, week_of: NaiveDate, statuses: [&str; 5]) -> PresencePlan {
    let mut plan = PresencePlan::template(user_id, week_of);
    for (day, status) in plan.days.iter_mut().zip(statuses) {
        day.status = Some(status.to_string());
    }
    plan
}

/// One team ("t1") with a lead, a member, an outside employee, and an
/// admin — the cast most workflow scenarios need.
pub struct TestOrg {
    pub directory: Directory,
    pub settings: SettingsStore,
}

impl TestOrg {
    pub fn new() -> Self {
        init_logging();
        let mut directory = Directory::new();
        directory.upsert_team(team_with("t1", Some("lead1")));
        directory.upsert_team(team_with("t2", None));
        directory.upsert_user(user_with("lead1", &[UserRole::TeamLead], Some("t1")));
        directory.upsert_user(user_with("emp1", &[UserRole::Employee], Some("t1")));
        directory.upsert_user(user_with("emp2", &[UserRole::Employee], Some("t2")));
        directory.upsert_user(user_with("admin1", &[UserRole::Admin], None));

        Self {
            directory,
            settings: SettingsStore::default(),
        }
    }

    pub fn user(&self, id: &str) -> User {
        self.directory.get_user(id).expect("missing fixture user").clone()
    }
}

/// Fully wired planner with the same cast as `TestOrg`.
pub fn planner() -> Planner {
    let org = TestOrg::new();
    let mut planner = Planner::new(&Config::default());
    planner.directory = org.directory;
    planner.settings = org.settings;
    planner
}
