use std::collections::HashMap;

use crate::error::PlanError;
use crate::models::{Team, TeamInput, User, UserInput, UserRole};

/// In-memory registry of users and teams. The persistence collaborator
/// owns durable storage; this is the core's working set.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    users: HashMap<String, User>,
    teams: HashMap<String, Team>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Users ---

    pub fn create_user(&mut self, input: UserInput) -> Result<User, PlanError> {
        if let Some(team_id) = input.team_id.as_deref() {
            self.require_team(team_id)?;
        }
        let user = User::new(input);
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    /// Insert or replace a fully-formed user record (seed data, records
    /// hydrated from the persistence collaborator).
    pub fn upsert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn require_user(&self, id: &str) -> Result<&User, PlanError> {
        self.users
            .get(id)
            .ok_or_else(|| PlanError::not_found(format!("user {id}")))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn set_user_roles(
        &mut self,
        id: &str,
        roles: impl IntoIterator<Item = UserRole>,
    ) -> Result<User, PlanError> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| PlanError::not_found(format!("user {id}")))?;
        user.roles = roles.into_iter().collect();
        Ok(user.clone())
    }

    pub fn assign_team(&mut self, user_id: &str, team_id: Option<&str>) -> Result<User, PlanError> {
        if let Some(team_id) = team_id {
            self.require_team(team_id)?;
        }
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| PlanError::not_found(format!("user {user_id}")))?;
        user.team_id = team_id.map(|id| id.to_string());
        Ok(user.clone())
    }

    pub fn remove_user(&mut self, id: &str) -> Result<User, PlanError> {
        let user = self
            .users
            .remove(id)
            .ok_or_else(|| PlanError::not_found(format!("user {id}")))?;
        // Drop any leadership the user held
        for team in self.teams.values_mut() {
            if team.leader_id.as_deref() == Some(id) {
                team.leader_id = None;
            }
        }
        Ok(user)
    }

    // --- Teams ---

    pub fn create_team(&mut self, input: TeamInput) -> Result<Team, PlanError> {
        let team = Team::new(input);
        if let Some(leader_id) = team.leader_id.clone() {
            self.require_user(&leader_id)?;
            self.teams.insert(team.id.clone(), team.clone());
            return self.set_team_leader(&team.id, &leader_id);
        }
        self.teams.insert(team.id.clone(), team.clone());
        Ok(team)
    }

    pub fn upsert_team(&mut self, team: Team) {
        self.teams.insert(team.id.clone(), team);
    }

    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    pub fn require_team(&self, id: &str) -> Result<&Team, PlanError> {
        self.teams
            .get(id)
            .ok_or_else(|| PlanError::not_found(format!("team {id}")))
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Assigning a leader moves them onto the team and grants the
    /// Team Lead role.
    pub fn set_team_leader(&mut self, team_id: &str, user_id: &str) -> Result<Team, PlanError> {
        self.require_team(team_id)?;
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| PlanError::not_found(format!("user {user_id}")))?;
        user.team_id = Some(team_id.to_string());
        user.roles.grant(UserRole::TeamLead);

        let team = self
            .teams
            .get_mut(team_id)
            .ok_or_else(|| PlanError::not_found(format!("team {team_id}")))?;
        team.leader_id = Some(user_id.to_string());
        Ok(team.clone())
    }

    /// Deleting a team unassigns its members.
    pub fn delete_team(&mut self, id: &str) -> Result<Team, PlanError> {
        let team = self
            .teams
            .remove(id)
            .ok_or_else(|| PlanError::not_found(format!("team {id}")))?;
        for user in self.users.values_mut() {
            if user.team_id.as_deref() == Some(id) {
                user.team_id = None;
            }
        }
        Ok(team)
    }

    pub fn team_members(&self, team_id: &str) -> Vec<&User> {
        let mut members: Vec<&User> = self
            .users
            .values()
            .filter(|user| user.team_id.as_deref() == Some(team_id))
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn team_leader(&self, team_id: &str) -> Option<&User> {
        self.teams
            .get(team_id)
            .and_then(|team| team.leader_id.as_deref())
            .and_then(|leader_id| self.users.get(leader_id))
    }

    /// Whether `actor` may act on plans owned by `owner`: admins manage
    /// everyone, team leads manage members of their own team.
    pub fn manages(&self, actor: &User, owner: &User) -> bool {
        if actor.is_admin() {
            return true;
        }
        if !actor.is_team_lead() {
            return false;
        }
        match (actor.team_id.as_deref(), owner.team_id.as_deref()) {
            (Some(lead_team), Some(owner_team)) => lead_team == owner_team,
            _ => false,
        }
    }
}
