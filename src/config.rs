use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;

/// Configuration loaded from `graph-schema.toml` in the working directory.
#[derive(Debug, Deserialize, Default)]
pub struct SchemaConfig {
    /// Default output format for list commands when `--format` is not given.
    pub format: Option<OutputFormat>,
}

impl SchemaConfig {
    /// Load configuration from `graph-schema.toml` in the given directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or
    /// cannot be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join("graph-schema.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse graph-schema.toml: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read graph-schema.toml: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
