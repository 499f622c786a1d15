use std::fs;
use std::path::Path;

use crate::conf::error::ConfigError;
use crate::conf::report::ValidationIssue;
use crate::conf::types::ConfigFile;
use crate::conf::validate::validate;
use crate::engine::NormalizationSettings;
use crate::lookup::{StaticAliases, StaticTermPaths};

/// A config file that survived parsing and semantic validation, lowered into
/// the engine's input types. Warnings are carried along for the caller to
/// surface; errors never get this far.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub settings: NormalizationSettings,
    pub aliases: StaticAliases,
    pub terms: StaticTermPaths,
    pub warnings: Vec<ValidationIssue>,
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: ConfigFile = toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all semantic errors)
    //--------------------------------------------------------------------------
    let report = validate(&config);
    if report.has_errors() {
        return Err(ConfigError::Validation { report });
    }

    //--------------------------------------------------------------------------
    // Lower into engine inputs
    //--------------------------------------------------------------------------
    let mut aliases = StaticAliases::new();
    for entry in &config.alias {
        aliases.insert_scoped(entry.alias.as_str(), entry.path.as_str(), entry.lang.clone());
    }

    let mut terms = StaticTermPaths::new();
    for entry in &config.term {
        terms.insert(entry.id, entry.path.as_str());
    }

    Ok(ValidatedConfig {
        settings: config.settings.build(),
        aliases,
        terms,
        warnings: report.warnings,
    })
}
