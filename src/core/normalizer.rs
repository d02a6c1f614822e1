use crate::domain::model::StudentRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key naming used by the upstream service that supplies student records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum FieldConvention {
    SnakeCase,
    CamelCase,
    /// snake_case key first, camelCase key as fallback, per field
    #[default]
    Auto,
}

/// (snake_case, camelCase) key pairs for the fields whose name differs.
const FIRST_NAME: (&str, &str) = ("first_name", "firstName");
const LAST_NAME: (&str, &str) = ("last_name", "lastName");
const DATE_OF_BIRTH: (&str, &str) = ("date_of_birth", "dateOfBirth");
const ENROLLMENT_DATE: (&str, &str) = ("enrollment_date", "enrollmentDate");
const CREATED_AT: (&str, &str) = ("created_at", "createdAt");
const UPDATED_AT: (&str, &str) = ("updated_at", "updatedAt");

impl FieldConvention {
    fn lookup(self, record: &serde_json::Map<String, Value>, keys: (&str, &str)) -> Option<Value> {
        let (snake, camel) = keys;
        let found = match self {
            FieldConvention::SnakeCase => record.get(snake),
            FieldConvention::CamelCase => record.get(camel),
            FieldConvention::Auto => record
                .get(snake)
                .filter(|v| !v.is_null())
                .or_else(|| record.get(camel)),
        };
        found.filter(|v| !v.is_null()).cloned()
    }
}

/// Turns whatever the caller handed over into the list of raw records to export.
///
/// Accepts a bare array, a wrapper whose `data` is an array or an object,
/// or a bare record. Order is preserved.
pub fn collect_records(input: &Value) -> Vec<&Value> {
    match input {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().collect(),
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(data @ Value::Object(_)) => vec![data],
            _ => vec![input],
        },
        other => vec![other],
    }
}

/// Single-record form of [`collect_records`]: `data` wins when it is an object.
pub fn unwrap_record(input: &Value) -> Option<&Value> {
    match input {
        Value::Object(obj) => match obj.get("data") {
            Some(data @ Value::Object(_)) => Some(data),
            _ => Some(input),
        },
        _ => None,
    }
}

pub fn normalize(record: &Value, convention: FieldConvention) -> StudentRecord {
    let Value::Object(obj) = record else {
        tracing::warn!("Skipping non-object student entry, exporting it as an empty row");
        return StudentRecord::default();
    };

    let plain = |key: &str| obj.get(key).filter(|v| !v.is_null()).cloned();

    StudentRecord {
        id: plain("id"),
        first_name: convention.lookup(obj, FIRST_NAME),
        last_name: convention.lookup(obj, LAST_NAME),
        email: plain("email"),
        phone: plain("phone"),
        date_of_birth: convention.lookup(obj, DATE_OF_BIRTH),
        gender: plain("gender"),
        enrollment_date: convention.lookup(obj, ENROLLMENT_DATE),
        status: plain("status"),
        created_at: convention.lookup(obj, CREATED_AT),
        updated_at: convention.lookup(obj, UPDATED_AT),
    }
}

/// Text form of a plain (non-date) field value. Absent renders as empty.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
