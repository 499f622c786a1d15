mod error;
mod loader;
mod report;
mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{ValidatedConfig, load_config};
pub use report::{Severity, ValidationIssue, ValidationReport};
pub use types::{AliasSpec, ConfigFile, SettingsSpec, TermSpec};
pub use validate::validate;
