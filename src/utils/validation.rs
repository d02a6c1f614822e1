use crate::core::normalizer::cell_text;
use crate::domain::model::{StudentRecord, StudentValidation};
use crate::utils::error::{ExportError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static INTENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    // 任何 unicode 字母、數字或底線
    Regex::new(r"^[\p{L}\p{N}_]+$").expect("intent name pattern is valid")
});

/// True when `name` is non-empty and made only of unicode letters, numbers
/// and underscores.
pub fn is_valid_intent_name(name: Option<&str>) -> bool {
    match name {
        Some(name) => INTENT_NAME.is_match(name),
        None => false,
    }
}

const REQUIRED_STUDENT_FIELDS: [&str; 4] = ["first_name", "last_name", "email", "enrollment_date"];

pub fn validate_student(student: Option<&StudentRecord>) -> StudentValidation {
    let Some(student) = student else {
        return StudentValidation {
            is_valid: false,
            missing_fields: vec!["all fields".to_string()],
        };
    };

    let values = [
        student.first_name.as_ref(),
        student.last_name.as_ref(),
        student.email.as_ref(),
        student.enrollment_date.as_ref(),
    ];

    let missing_fields: Vec<String> = REQUIRED_STUDENT_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| cell_text(*value).trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();

    StudentValidation {
        is_valid: missing_fields.is_empty(),
        missing_fields,
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
