pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, ExportArgs, LogFormat};

pub use config::{cli::LocalStorage, toml_config::TomlConfig, ExportSettings};
pub use crate::core::{
    encoder::{escape_csv, CsvEncoder, HEADERS},
    exporter::StudentCsvExporter,
    formatter::{format_date, format_date_time, InvalidDatePolicy},
    normalizer::{collect_records, normalize, unwrap_record, FieldConvention},
    persister::FileNameStrategy,
};
pub use domain::model::{ExportResult, StudentRecord, StudentValidation};
pub use utils::error::{ExportError, Result};
pub use utils::validation::{is_valid_intent_name, validate_student};
