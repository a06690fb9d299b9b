pub mod reports;
pub mod validator;
pub mod workflow;

pub use validator::{PolicyCheck, PolicyValidator};
pub use workflow::{TransitionOutcome, WorkflowEngine};
