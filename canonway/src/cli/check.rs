use std::path::Path;

use canonway_core::conf::{ConfigError, load_config};

pub fn run(path: &Path, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(config) => {
            println!("✔ Config loaded successfully");
            println!("✔ {} aliases", config.aliases.len());
            println!("✔ {} term paths", config.terms.len());

            for warning in &config.warnings {
                println!("⚠ {}", warning.message);
            }

            Ok(())
        }
        Err(ConfigError::Validation { report }) => {
            if plain {
                report.render_plain();
            } else {
                report.render_pretty();
            }
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
