pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use config::{cli::LocalStorage, toml_config::SchemaConfig, Settings};
pub use core::{engine::SchemaEngine, pipeline::SchemaPipeline};
pub use domain::model::{ComposedSchema, DEFAULT_OUTPUT_FILE};
pub use utils::error::{Result, SchemaError};
pub use utils::reporter::{ConsoleReporter, TracingReporter};
