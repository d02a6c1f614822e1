use crate::core::formatter::InvalidDatePolicy;
use crate::core::normalizer::FieldConvention;
use crate::core::persister::FileNameStrategy;
use crate::utils::error::Result;

pub trait Storage {
    /// Writes `data` under `path`, replacing any existing file, and returns
    /// the full location that was written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn file_naming(&self) -> FileNameStrategy;
    fn field_convention(&self) -> FieldConvention;
    fn invalid_dates(&self) -> InvalidDatePolicy;
    fn trim_values(&self) -> bool;
    fn require_fields(&self) -> bool;
}
