use crate::core::formatter::{format_date, format_date_time, InvalidDatePolicy};
use crate::core::normalizer::cell_text;
use crate::domain::model::StudentRecord;

pub const HEADERS: [&str; 11] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Date of Birth",
    "Gender",
    "Enrollment Date",
    "Status",
    "Created At",
    "Updated At",
];

/// RFC 4180 quoting: wrap in double quotes and double embedded quotes when the
/// text holds a comma, a double quote, `\n` or `\r`. Everything else passes through.
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder {
    pub invalid_dates: InvalidDatePolicy,
    pub trim_values: bool,
}

impl CsvEncoder {
    pub fn new(invalid_dates: InvalidDatePolicy, trim_values: bool) -> Self {
        Self {
            invalid_dates,
            trim_values,
        }
    }

    pub fn header_line(&self) -> String {
        HEADERS.join(",")
    }

    fn text(&self, value: Option<&serde_json::Value>) -> String {
        let text = cell_text(value);
        if self.trim_values {
            text.trim().to_string()
        } else {
            text
        }
    }

    pub fn encode_row(&self, record: &StudentRecord) -> String {
        let policy = self.invalid_dates;
        let cells = [
            self.text(record.id.as_ref()),
            self.text(record.first_name.as_ref()),
            self.text(record.last_name.as_ref()),
            self.text(record.email.as_ref()),
            self.text(record.phone.as_ref()),
            format_date(record.date_of_birth.as_ref(), policy),
            self.text(record.gender.as_ref()),
            format_date(record.enrollment_date.as_ref(), policy),
            self.text(record.status.as_ref()),
            format_date_time(record.created_at.as_ref(), policy),
            format_date_time(record.updated_at.as_ref(), policy),
        ];

        cells
            .iter()
            .map(|cell| escape_csv(cell))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Header plus one line per record, in input order, joined by `\n`.
    pub fn encode(&self, records: &[StudentRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(self.header_line());
        lines.extend(records.iter().map(|r| self.encode_row(r)));
        lines.join("\n")
    }
}
