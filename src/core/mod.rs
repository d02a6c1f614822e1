pub mod encoder;
pub mod exporter;
pub mod formatter;
pub mod normalizer;
pub mod persister;

pub use crate::domain::model::{ExportResult, StudentRecord, StudentValidation};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
