use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    fn error(&mut self, message: String, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            help,
        });
    }

    fn warning(&mut self, message: String, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            help,
        });
    }

    pub fn render_json(&self) {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        println!(
            "{}",
            serde_json::to_string_pretty(&json).expect("failed to serialize validation report")
        );
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!("{}: {}", severity, issue.message);

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.has_violations() {
            println!(
                "configuration validation failed ({} errors, {} warnings)\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        for issue in self.errors.iter().chain(self.warnings.iter()) {
            match issue.severity {
                Severity::Error => {
                    println!("  {}: {}", "error".red().bold(), issue.message);
                }
                Severity::Warning => {
                    println!("  {}: {}", "warning".yellow().bold(), issue.message);
                }
            }

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }

            println!();
        }
    }
}

/// Alias entry validation
impl ValidationReport {
    pub fn empty_alias(&mut self, path: &str) {
        self.error(format!("alias for path '{}' is empty", path), None);
    }

    pub fn empty_alias_path(&mut self, alias: &str) {
        self.error(format!("alias '{}' has an empty path", alias), None);
    }

    pub fn alias_is_not_relative(&mut self, alias: &str) {
        self.error(
            format!("alias '{}' is not a relative path", alias),
            Some("Aliases are host-relative, e.g. `about-us`, not full URLs.".to_string()),
        );
    }

    pub fn duplicate_alias(&mut self, alias: &str) {
        self.error(
            format!("duplicate alias '{}'", alias),
            Some("Each alias may be defined once per language.".to_string()),
        );
    }

    pub fn alias_matches_its_path(&mut self, alias: &str) {
        self.warning(
            format!("alias '{}' is identical to its system path", alias),
            None,
        );
    }

    pub fn alias_has_surrounding_slashes(&mut self, alias: &str) {
        self.warning(
            format!("alias '{}' has surrounding slashes; it is stored trimmed", alias),
            None,
        );
    }
}

/// Term entry validation
impl ValidationReport {
    pub fn empty_term_path(&mut self, term_id: u64) {
        self.error(format!("term {} has an empty path", term_id), None);
    }

    pub fn duplicate_term(&mut self, term_id: u64) {
        self.error(format!("duplicate term id {}", term_id), None);
    }
}

/// Settings validation
impl ValidationReport {
    pub fn trailing_zero_out_of_range(&mut self, raw: u64) {
        self.warning(
            format!("trailing_zero = {} is out of range; treated as disabled", raw),
            Some("Valid values: 0 (disabled), 1 (all pages), 2 (taxonomy only).".to_string()),
        );
    }
}
