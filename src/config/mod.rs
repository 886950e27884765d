pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{FragmentRole, DEFAULT_OUTPUT_FILE, RESPONSE_SUFFIX};
use crate::utils::error::{Result, SchemaError};
use crate::utils::validation::{
    validate_bare_file_name, validate_file_extensions, validate_non_empty_string, validate_path,
    Validate,
};
use std::collections::BTreeMap;
use toml_config::SchemaConfig;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dao-voting-schema")]
#[command(about = "Merge contract schema fragments into a single full schema file")]
pub struct CliConfig {
    /// Directory holding the schema fragments [default: .]
    #[arg(long)]
    pub schema_dir: Option<String>,

    /// Output file name inside the schema directory
    /// [default: dao_voting_adapter_full_schema.json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write through a temporary file and rename it into place
    #[arg(long, conflicts_with = "no_atomic")]
    pub atomic: bool,

    /// Plain overwrite even when the config file enables atomic writes
    #[arg(long)]
    pub no_atomic: bool,

    /// Compose the schema and report the result without writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub schema_dir: String,
    pub output_file: String,
    pub responses: Option<BTreeMap<String, String>>,
    pub atomic: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_dir: ".".to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            responses: None,
            atomic: false,
        }
    }
}

impl Settings {
    pub fn from_file_config(config: Option<&SchemaConfig>) -> Self {
        let mut settings = Self::default();
        if let Some(config) = config {
            if let Some(dir) = &config.input.schema_dir {
                settings.schema_dir = dir.clone();
            }
            if let Some(file) = &config.output.file {
                settings.output_file = file.clone();
            }
            settings.atomic = config.output.atomic.unwrap_or(false);
            settings.responses = config.responses.clone();
        }
        settings
    }

    /// Flags given on the command line win over the config file.
    #[cfg(feature = "cli")]
    pub fn override_with(mut self, cli: &CliConfig) -> Self {
        if let Some(dir) = &cli.schema_dir {
            self.schema_dir = dir.clone();
        }
        if let Some(output) = &cli.output {
            self.output_file = output.clone();
        }
        if cli.atomic {
            self.atomic = true;
        } else if cli.no_atomic {
            self.atomic = false;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn schema_dir(&self) -> &str {
        &self.schema_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn response_manifest(&self) -> Option<&BTreeMap<String, String>> {
        self.responses.as_ref()
    }

    fn atomic_write(&self) -> bool {
        self.atomic
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("schema_dir", &self.schema_dir)?;

        validate_bare_file_name("output", &self.output_file)?;
        validate_file_extensions("output", &[self.output_file.as_str()], &["json"])?;
        if self.output_file.ends_with(RESPONSE_SUFFIX)
            || FragmentRole::ALL
                .iter()
                .any(|role| role.file_name() == self.output_file)
        {
            return Err(SchemaError::InvalidConfigValueError {
                field: "output".to_string(),
                value: self.output_file.clone(),
                reason: "Output would overwrite or be read back as an input fragment".to_string(),
            });
        }

        if let Some(responses) = &self.responses {
            for (query, file) in responses {
                validate_non_empty_string("responses", query)?;
                validate_bare_file_name(&format!("responses.{}", query), file)?;
                validate_file_extensions(&format!("responses.{}", query), &[file.as_str()], &["json"])?;
            }
        }

        Ok(())
    }
}
