use anyhow::Result;
use serde_json::json;
use student_csv_export::{
    ExportSettings, FieldConvention, FileNameStrategy, LocalStorage, StudentCsvExporter,
};
use tempfile::TempDir;

const HEADER: &str = "ID,First Name,Last Name,Email,Phone,Date of Birth,Gender,Enrollment Date,Status,Created At,Updated At";

fn exporter_in(
    dir: &std::path::Path,
    naming: FileNameStrategy,
) -> StudentCsvExporter<LocalStorage, ExportSettings> {
    let output_path = dir.to_string_lossy().into_owned();
    let settings = ExportSettings {
        output_path: output_path.clone(),
        file_naming: naming,
        ..Default::default()
    };
    StudentCsvExporter::new(LocalStorage::new(output_path), settings)
}

#[test]
fn test_single_camel_case_student_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = exporter_in(temp_dir.path(), FileNameStrategy::IdentityBased);

    let result = exporter.export_student(&json!({
        "id": "s1",
        "email": "a@b.com",
        "firstName": "A",
        "lastName": "B",
        "enrollmentDate": "2024-01-01"
    }));

    assert!(result.success);
    assert_eq!(result.row_count, 1);
    assert_eq!(
        result.csv_text,
        format!("{}\ns1,A,B,a@b.com,,,,2024-01-01,,,", HEADER)
    );

    let file_path = temp_dir.path().join("s1.csv");
    assert_eq!(result.file_path, Some(file_path.to_string_lossy().into_owned()));
    assert_eq!(std::fs::read_to_string(&file_path)?, result.csv_text);
    Ok(())
}

#[test]
fn test_single_snake_case_student_with_dates() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = exporter_in(temp_dir.path(), FileNameStrategy::TimestampedPerRecord);

    let result = exporter.export_student(&json!({
        "data": {
            "id": 1042,
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace.hopper@navy.mil",
            "phone": "+1 555 0100",
            "date_of_birth": "1906-12-09",
            "gender": "female",
            "enrollment_date": "2024-09-01T08:00:00Z",
            "status": "active",
            "created_at": "2024-03-15T10:30:00.456Z",
            "updated_at": "2024-03-16T11:00:00+02:00"
        }
    }));

    assert!(result.success);
    let lines: Vec<&str> = result.csv_text.split('\n').collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        "1042,Grace,Hopper,grace.hopper@navy.mil,+1 555 0100,1906-12-09,female,2024-09-01,active,2024-03-15 10:30:00,2024-03-16 09:00:00"
    );

    let file_name = result.file_name.unwrap();
    assert!(file_name.starts_with("student_grace_hopper_navy_mil_"));
    assert!(file_name.ends_with("Z.csv"));
    assert!(!file_name.contains(':'));
    assert!(temp_dir.path().join(&file_name).exists());
    Ok(())
}

#[test]
fn test_batch_export_preserves_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = exporter_in(temp_dir.path(), FileNameStrategy::TimestampedBatch);

    let students: Vec<_> = (1..=5)
        .rev()
        .map(|i| json!({"id": format!("s{}", i), "first_name": format!("Student {}", i)}))
        .collect();

    let result = exporter.export_students(&json!({ "data": students }));

    assert!(result.success);
    assert_eq!(result.row_count, 5);

    let lines: Vec<&str> = result.csv_text.split('\n').collect();
    assert_eq!(lines.len(), 6);
    let ids: Vec<&str> = lines[1..]
        .iter()
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["s5", "s4", "s3", "s2", "s1"]);

    let file_name = result.file_name.unwrap();
    assert!(file_name.starts_with("students_export_"));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join(file_name))?,
        result.csv_text
    );
    Ok(())
}

#[test]
fn test_export_creates_missing_shared_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let shared = temp_dir.path().join("mnt").join("shared");
    let exporter = exporter_in(&shared, FileNameStrategy::IdentityBased);

    let result = exporter.export_student(&json!({"id": "s9"}));

    assert!(result.success);
    assert!(shared.join("s9.csv").exists());
    Ok(())
}

#[test]
fn test_identity_export_overwrites_previous_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = exporter_in(temp_dir.path(), FileNameStrategy::IdentityBased);

    exporter.export_student(&json!({"id": "s1", "status": "active"}));
    let second = exporter.export_student(&json!({"id": "s1", "status": "graduated"}));

    let content = std::fs::read_to_string(temp_dir.path().join("s1.csv"))?;
    assert_eq!(content, second.csv_text);
    assert!(content.contains("graduated"));
    assert!(!content.contains("active"));
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_unwritable_directory_reports_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("shared");
    std::fs::write(&blocker, "not a directory")?;

    let input = json!({"id": "s1", "email": "a@b.com", "firstName": "A"});

    let broken = exporter_in(&blocker, FileNameStrategy::IdentityBased).export_student(&input);
    let working = exporter_in(temp_dir.path(), FileNameStrategy::IdentityBased).export_student(&input);

    assert!(working.success);
    assert!(!broken.success);
    assert!(!broken.error.clone().unwrap_or_default().is_empty());
    assert_eq!(broken.csv_text, working.csv_text);
    assert!(broken.file_path.is_none());
    assert!(broken.file_name.is_none());
    Ok(())
}

#[test]
fn test_strict_snake_case_convention_ignores_camel_keys() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();
    let settings = ExportSettings {
        output_path: output_path.clone(),
        file_naming: FileNameStrategy::IdentityBased,
        field_convention: FieldConvention::SnakeCase,
        ..Default::default()
    };
    let exporter = StudentCsvExporter::new(LocalStorage::new(output_path), settings);

    let result = exporter.export_student(&json!({"id": "s1", "firstName": "A", "first_name": "Z"}));

    assert!(result.csv_text.ends_with("\ns1,Z,,,,,,,,,"));
    Ok(())
}

#[test]
fn test_result_json_shape() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let exporter = exporter_in(temp_dir.path(), FileNameStrategy::IdentityBased);

    let result = exporter.export_student(&json!({"id": "s1"}));
    let value = serde_json::to_value(&result)?;

    assert_eq!(value["success"], true);
    assert_eq!(value["rowCount"], 1);
    assert_eq!(value["fileName"], "s1.csv");
    assert!(value["csvText"].as_str().unwrap().starts_with("ID,First Name"));
    assert!(value.get("error").is_none());
    Ok(())
}
