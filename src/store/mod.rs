pub mod directory;
pub mod plan_store;
pub mod settings;

pub use directory::Directory;
pub use plan_store::PlanStore;
pub use settings::SettingsStore;
