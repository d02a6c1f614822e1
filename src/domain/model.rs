use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One student's attributes after field normalization.
///
/// Values stay as raw JSON so numeric ids and epoch-millisecond dates
/// reach the formatter untouched. `None` means the key was absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: Option<Value>,
    pub first_name: Option<Value>,
    pub last_name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub date_of_birth: Option<Value>,
    pub gender: Option<Value>,
    pub enrollment_date: Option<Value>,
    pub status: Option<Value>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
}

/// Outcome of one export call, handed back to the caller as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub csv_text: String,
    pub row_count: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ExportResult {
    pub fn failure(csv_text: String, row_count: usize, error: impl Into<String>) -> Self {
        Self {
            csv_text,
            row_count,
            success: false,
            file_path: None,
            file_name: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentValidation {
    pub is_valid: bool,
    pub missing_fields: Vec<String>,
}
