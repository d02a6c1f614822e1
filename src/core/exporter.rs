use crate::core::encoder::CsvEncoder;
use crate::core::normalizer::{collect_records, normalize, unwrap_record};
use crate::core::persister::Persister;
use crate::core::{ConfigProvider, ExportResult, StudentRecord, Storage};
use crate::utils::validation::validate_student;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Normalize → format → encode → persist, for one student or a batch.
///
/// Every outcome comes back as an [`ExportResult`]; failures never escape as
/// errors or panics, and the CSV text is kept whenever it could be built.
pub struct StudentCsvExporter<S: Storage, C: ConfigProvider> {
    persister: Persister<S>,
    config: C,
    clock: fn() -> DateTime<Utc>,
}

impl<S: Storage, C: ConfigProvider> StudentCsvExporter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            persister: Persister::new(storage),
            config,
            clock: Utc::now,
        }
    }

    /// Replaces the time source used for timestamped file names.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Exports a bare record or a `{ "data": { ... } }` wrapper.
    pub fn export_student(&self, input: &Value) -> ExportResult {
        match unwrap_record(input) {
            Some(raw) => self.export_records(vec![raw]),
            None => {
                tracing::warn!("❌ No student data provided");
                ExportResult::failure(String::new(), 0, "No student data provided")
            }
        }
    }

    /// Exports an array, a `{ "data": [...] }` wrapper, or a single record.
    pub fn export_students(&self, input: &Value) -> ExportResult {
        let raw = collect_records(input);
        if raw.is_empty() {
            tracing::warn!("❌ No student records provided");
            return ExportResult::failure(String::new(), 0, "No student records provided");
        }
        self.export_records(raw)
    }

    fn export_records(&self, raw: Vec<&Value>) -> ExportResult {
        let convention = self.config.field_convention();
        let records: Vec<StudentRecord> = raw.iter().map(|r| normalize(r, convention)).collect();
        let row_count = records.len();
        tracing::debug!("Normalized {} student records ({:?})", row_count, convention);

        let encoder = CsvEncoder::new(self.config.invalid_dates(), self.config.trim_values());
        let csv_text = encoder.encode(&records);

        if self.config.require_fields() {
            if let Some(message) = missing_fields_message(&records) {
                tracing::warn!("❌ Student validation failed: {}", message);
                return ExportResult::failure(csv_text, row_count, message);
            }
        }

        let file_name = self
            .config
            .file_naming()
            .file_name(&records, (self.clock)());

        match self.persister.persist(&file_name, &csv_text) {
            Ok(file_path) => {
                tracing::info!("✅ Exported {} student rows", row_count);
                tracing::info!("📁 CSV saved to: {}", file_path);
                ExportResult {
                    csv_text,
                    row_count,
                    success: true,
                    file_path: Some(file_path),
                    file_name: Some(file_name),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("❌ Error saving CSV file {}: {}", file_name, e);
                ExportResult::failure(csv_text, row_count, format!("Failed to save CSV file: {}", e))
            }
        }
    }
}

fn missing_fields_message(records: &[StudentRecord]) -> Option<String> {
    let problems: Vec<String> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let validation = validate_student(Some(record));
            if validation.is_valid {
                return None;
            }
            let fields = validation.missing_fields.join(", ");
            Some(if records.len() == 1 {
                fields
            } else {
                format!("record {}: {}", index + 1, fields)
            })
        })
        .collect();

    if problems.is_empty() {
        None
    } else {
        Some(format!("Missing required fields: {}", problems.join("; ")))
    }
}
