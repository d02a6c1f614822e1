pub mod cli;
pub mod toml_config;

use crate::core::formatter::InvalidDatePolicy;
use crate::core::normalizer::FieldConvention;
use crate::core::persister::FileNameStrategy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPORT_DIR: &str = "/shared";

/// Resolved exporter settings, from a TOML `[export]` table and/or CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub output_path: String,
    pub file_naming: FileNameStrategy,
    pub field_convention: FieldConvention,
    pub invalid_dates: InvalidDatePolicy,
    pub trim_values: bool,
    pub require_fields: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_EXPORT_DIR.to_string(),
            file_naming: FileNameStrategy::default(),
            field_convention: FieldConvention::default(),
            invalid_dates: InvalidDatePolicy::default(),
            trim_values: false,
            require_fields: false,
        }
    }
}

impl ConfigProvider for ExportSettings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn file_naming(&self) -> FileNameStrategy {
        self.file_naming
    }

    fn field_convention(&self) -> FieldConvention {
        self.field_convention
    }

    fn invalid_dates(&self) -> InvalidDatePolicy {
        self.invalid_dates
    }

    fn trim_values(&self) -> bool {
        self.trim_values
    }

    fn require_fields(&self) -> bool {
        self.require_fields
    }
}

impl Validate for ExportSettings {
    fn validate(&self) -> Result<()> {
        validate_path("export.output_path", &self.output_path)
    }
}

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command, ExportArgs, LogFormat};

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use super::ExportSettings;
    use crate::core::formatter::InvalidDatePolicy;
    use crate::core::normalizer::FieldConvention;
    use crate::core::persister::FileNameStrategy;
    use crate::utils::error::Result;
    use clap::{Args, Parser, Subcommand, ValueEnum};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "student-csv-export")]
    #[command(about = "Export student records to CSV files in a shared directory")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum LogFormat {
        Compact,
        Json,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Convert student JSON into a CSV file and print the export result
        Export(ExportArgs),
        /// Check whether NAME is a valid intent name (exit code 1 when not)
        CheckIntent { name: String },
    }

    #[derive(Debug, Clone, Default, Args)]
    pub struct ExportArgs {
        /// JSON input file; stdin when omitted or "-"
        #[arg(long, short)]
        pub input: Option<PathBuf>,

        /// Treat the input as a list of students
        #[arg(long)]
        pub batch: bool,

        /// TOML file with an [export] table
        #[arg(long)]
        pub config: Option<PathBuf>,

        #[arg(long)]
        pub output_path: Option<String>,

        #[arg(long, value_enum)]
        pub file_naming: Option<FileNameStrategy>,

        #[arg(long, value_enum)]
        pub field_convention: Option<FieldConvention>,

        #[arg(long, value_enum)]
        pub invalid_dates: Option<InvalidDatePolicy>,

        #[arg(long)]
        pub trim_values: bool,

        #[arg(long)]
        pub require_fields: bool,
    }

    impl ExportArgs {
        /// Config file (or defaults) first, then explicit flags on top.
        pub fn resolve_settings(&self) -> Result<ExportSettings> {
            let mut settings = match &self.config {
                Some(path) => TomlConfig::from_file(path)?.export,
                None => ExportSettings::default(),
            };

            if let Some(output_path) = &self.output_path {
                settings.output_path = output_path.clone();
            }
            if let Some(naming) = self.file_naming {
                settings.file_naming = naming;
            }
            if let Some(convention) = self.field_convention {
                settings.field_convention = convention;
            }
            if let Some(policy) = self.invalid_dates {
                settings.invalid_dates = policy;
            }
            settings.trim_values |= self.trim_values;
            settings.require_fields |= self.require_fields;

            Ok(settings)
        }
    }

}
