use crate::core::normalizer::cell_text;
use crate::domain::model::StudentRecord;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How exported files are named inside the shared directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum FileNameStrategy {
    /// `student_<email>_<timestamp>.csv`
    #[default]
    TimestampedPerRecord,
    /// `students_export_<timestamp>.csv`
    TimestampedBatch,
    /// `<id>.csv`, so re-exporting a student overwrites the previous file
    IdentityBased,
}

const UNKNOWN: &str = "unknown";

/// ISO-8601 UTC with milliseconds, `:` and `.` swapped for `-`.
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

fn identity_text(value: Option<&serde_json::Value>) -> String {
    let text = cell_text(value);
    if text.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        text
    }
}

fn sanitize_email(email: &str) -> String {
    email.replace(['@', '.'], "_")
}

// 避免 id 中的路徑分隔符把檔案寫到目錄外
fn sanitize_stem(stem: &str) -> String {
    stem.replace(['/', '\\'], "_")
}

impl FileNameStrategy {
    /// Record-based names apply only when exactly one record is exported.
    pub fn file_name(self, records: &[StudentRecord], now: DateTime<Utc>) -> String {
        let batch_name = || format!("students_export_{}.csv", file_timestamp(now));

        match (self, records) {
            (FileNameStrategy::TimestampedPerRecord, [record]) => {
                let email = identity_text(record.email.as_ref());
                format!(
                    "student_{}_{}.csv",
                    sanitize_stem(&sanitize_email(&email)),
                    file_timestamp(now)
                )
            }
            (FileNameStrategy::IdentityBased, [record]) => {
                format!("{}.csv", sanitize_stem(&identity_text(record.id.as_ref())))
            }
            _ => batch_name(),
        }
    }
}

/// Writes CSV text to the shared directory through a [`Storage`] backend.
pub struct Persister<S: Storage> {
    storage: S,
}

impl<S: Storage> Persister<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the full path that was written.
    pub fn persist(&self, file_name: &str, csv_text: &str) -> Result<String> {
        tracing::debug!("Writing {} bytes to {}", csv_text.len(), file_name);
        self.storage.write_file(file_name, csv_text.as_bytes())
    }
}
