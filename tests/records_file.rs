//! Loading records from JSON files

use csv_uploader::{read_records, records_to_csv, UploadError};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_read_records_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("generated.json");

    let mut file = File::create(&path)?;
    file.write_all(
        br#"[
            {"Anon Student Id": "student_002", "Problem Name": "ER_Problem_2", "Attempts": 3},
            {"Anon Student Id": "student_003", "Problem Name": "ER_Problem_2", "Attempts": null}
        ]"#,
    )?;
    file.sync_all()?;

    let records = read_records(&path)?;
    assert_eq!(records.len(), 2);
    assert_eq!(
        records_to_csv(&records)?,
        "Anon Student Id,Problem Name,Attempts\r\nstudent_002,ER_Problem_2,3\r\nstudent_003,ER_Problem_2,\r\n"
    );

    Ok(())
}

#[test]
fn test_read_records_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    let missing = read_records(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, UploadError::Io(_)));

    let path = temp_dir.path().join("object.json");
    std::fs::write(&path, r#"{"not": "an array"}"#)?;
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, UploadError::Json(_)));

    Ok(())
}
