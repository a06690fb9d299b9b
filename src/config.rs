use anyhow::Result;
use std::env;

use crate::models::WorkPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub min_office_days: u32,
    pub max_home_days: u32,
    /// Hour of day (0-23) on Thursday when weekly submissions are due.
    pub submission_deadline_hour: u32,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            min_office_days: env::var("MIN_OFFICE_DAYS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
            max_home_days: env::var("MAX_HOME_DAYS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
            submission_deadline_hour: env::var("SUBMISSION_DEADLINE_HOUR")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn work_policy(&self) -> WorkPolicy {
        WorkPolicy {
            min_office_days: self.min_office_days,
            max_home_days: self.max_home_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_office_days: 2,
            max_home_days: 3,
            submission_deadline_hour: 15,
            environment: "development".to_string(),
        }
    }
}
