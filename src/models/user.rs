use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum UserRole {
        Employee => "Employee",
        TeamLead => "Team Lead",
        Hr => "HR",
        Admin => "Admin",
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Employee
    }
}

/// A user's assigned roles. Roles are non-exclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<UserRole>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    pub fn has_any_of(&self, roles: &[UserRole]) -> bool {
        roles.iter().any(|role| self.0.contains(role))
    }

    /// Returns true if the role was newly added.
    pub fn grant(&mut self, role: UserRole) -> bool {
        self.0.insert(role)
    }

    pub fn revoke(&mut self, role: UserRole) -> bool {
        self.0.remove(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = UserRole> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<UserRole> for RoleSet {
    fn from(role: UserRole) -> Self {
        Self::new([role])
    }
}

impl FromIterator<UserRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = UserRole>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub roles: RoleSet,
    pub team_id: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// User's full name
    pub name: String,
    /// User's email address
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub team_id: Option<String>,
}

impl User {
    pub fn new(input: UserInput) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            avatar_url: input.avatar_url,
            roles: RoleSet::from(UserRole::Employee),
            team_id: input.team_id,
            phone_number: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.has_role(UserRole::Admin)
    }

    pub fn is_team_lead(&self) -> bool {
        self.roles.has_role(UserRole::TeamLead)
    }

    pub fn is_hr(&self) -> bool {
        self.roles.has_role(UserRole::Hr)
    }

    /// Whether this user may act on submitted plans at all. Team
    /// membership is checked separately per plan.
    pub fn can_review_plans(&self) -> bool {
        self.roles.has_any_of(&[UserRole::TeamLead, UserRole::Admin])
    }
}
