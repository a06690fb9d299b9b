pub(crate) mod macros;

pub mod notification;
pub mod plan;
pub mod policy;
pub mod status;
pub mod team;
pub mod user;

pub use notification::{Notification, NotificationCategory};
pub use plan::{
    ApprovalStatus, DailyPlan, PresencePlan, DAY_NAMES, WORK_WEEK_DAYS, is_overdue,
    submission_deadline, week_days, week_start_for,
};
pub use policy::{MandatoryDate, MandatoryDateInput, WorkPolicy};
pub use status::{BuiltinStatus, StatusOption, StatusOptionInput, default_status_options};
pub use team::{Team, TeamInput};
pub use user::{RoleSet, User, UserInput, UserRole};
