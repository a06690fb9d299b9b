use crate::error::PlanError;
use crate::models::{
    BuiltinStatus, MandatoryDate, MandatoryDateInput, StatusOption, StatusOptionInput, WorkPolicy,
    default_status_options,
};

/// Singleton settings document: the work policy, mandatory-date rules,
/// and the presence-status taxonomy.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    work_policy: WorkPolicy,
    mandatory_dates: Vec<MandatoryDate>,
    status_options: Vec<StatusOption>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            work_policy: WorkPolicy::default(),
            mandatory_dates: Vec::new(),
            status_options: default_status_options(),
        }
    }
}

impl SettingsStore {
    pub fn new(work_policy: WorkPolicy) -> Self {
        Self {
            work_policy,
            ..Self::default()
        }
    }

    pub fn work_policy(&self) -> WorkPolicy {
        self.work_policy
    }

    pub fn set_work_policy(&mut self, policy: WorkPolicy) {
        log::info!(
            "Work policy updated: min office days {}, max home days {}",
            policy.min_office_days,
            policy.max_home_days
        );
        self.work_policy = policy;
    }

    // --- Mandatory dates ---

    pub fn mandatory_dates(&self) -> &[MandatoryDate] {
        &self.mandatory_dates
    }

    pub fn add_mandatory_date(&mut self, input: MandatoryDateInput) -> Result<MandatoryDate, PlanError> {
        if !self.status_exists(&input.status) {
            return Err(PlanError::validation(format!(
                "Unknown status value: {}",
                input.status
            )));
        }
        let rule = MandatoryDate::new(input);
        self.mandatory_dates.push(rule.clone());
        Ok(rule)
    }

    pub fn remove_mandatory_date(&mut self, id: &str) -> Result<MandatoryDate, PlanError> {
        let index = self
            .mandatory_dates
            .iter()
            .position(|rule| rule.id == id)
            .ok_or_else(|| PlanError::not_found(format!("mandatory date {id}")))?;
        Ok(self.mandatory_dates.remove(index))
    }

    // --- Status taxonomy ---

    pub fn status_options(&self) -> &[StatusOption] {
        &self.status_options
    }

    pub fn status_exists(&self, value: &str) -> bool {
        self.status_options.iter().any(|opt| opt.value == value)
    }

    pub fn status_by_value(&self, value: &str) -> Option<&StatusOption> {
        self.status_options.iter().find(|opt| opt.value == value)
    }

    /// Register an admin-defined status. Built-in keys are reserved and
    /// duplicates are rejected.
    pub fn add_status_option(&mut self, input: StatusOptionInput) -> Result<StatusOption, PlanError> {
        if BuiltinStatus::is_reserved(&input.value) {
            return Err(PlanError::validation(format!(
                "Status value {} is reserved",
                input.value
            )));
        }
        if self.status_exists(&input.value) {
            return Err(PlanError::validation(format!(
                "Status value {} already exists",
                input.value
            )));
        }
        let option = StatusOption::custom(input);
        self.status_options.push(option.clone());
        Ok(option)
    }

    /// Built-in options are protected from deletion.
    pub fn remove_status_option(&mut self, id: &str) -> Result<StatusOption, PlanError> {
        let index = self
            .status_options
            .iter()
            .position(|opt| opt.id == id)
            .ok_or_else(|| PlanError::not_found(format!("status option {id}")))?;
        if self.status_options[index].is_default {
            return Err(PlanError::validation(
                "Built-in status options cannot be deleted",
            ));
        }
        Ok(self.status_options.remove(index))
    }
}
