use std::fs;

use roster_tools::ToolError;
use roster_tools::config::Config;
use roster_tools::io::json_write::JsonOrient;
use tempfile::tempdir;

#[test]
fn minimal_config_uses_defaults_relative_to_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"end_date": "2024-05-31", "term": "Spring 2024"}"#).unwrap();

    let config = Config::load(&path).expect("config loads");

    assert_eq!(config.end_date, "2024-05-31");
    assert_eq!(config.term, "Spring 2024");
    assert_eq!(config.data_dir, temp_dir.path().join("data"));
    assert_eq!(config.output_dir, temp_dir.path().join("output"));
    assert_eq!(config.comment_column, "Unnamed: 14");
    assert_eq!(config.json_orient, JsonOrient::Records);
    assert!(!config.excel_reports);
    assert_eq!(
        config.participation_data_path(),
        temp_dir.path().join("output").join("participation_data_2024-05-31.json")
    );
    assert_eq!(
        config.masterlist_addition_path("json"),
        temp_dir
            .path()
            .join("output")
            .join("reports")
            .join("masterlist_addition_2024-05-31.json")
    );
}

#[test]
fn optional_settings_are_read() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    let absolute_data = temp_dir.path().join("rosters");
    let source = serde_json::json!({
        "end_date": "2024-12-20",
        "term": "Fall 2024",
        "data_dir": absolute_data,
        "comment_column": "Notes",
        "json_orient": "columns",
        "domains": {"final_status": ["Pass", "No Pass", "Withdraw"]},
        "excel_reports": true
    });
    fs::write(&path, source.to_string()).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.data_dir, absolute_data);
    assert_eq!(config.comment_column, "Notes");
    assert_eq!(config.json_orient, JsonOrient::Columns);
    assert_eq!(config.domains.final_status.as_ref().map(Vec::len), Some(3));
    assert!(config.domains.college_or_school.is_none());
    assert!(config.excel_reports);
}

#[test]
fn missing_term_is_a_config_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"end_date": "2024-05-31"}"#).unwrap();

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, ToolError::Config { ref message, .. } if message.contains("term")));
}

#[test]
fn end_date_with_path_separator_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"end_date": "05/31/2024", "term": "Spring 2024"}"#).unwrap();

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, ToolError::Config { .. }));
}

#[test]
fn absent_config_file_is_missing_input() {
    let temp_dir = tempdir().unwrap();

    let error = Config::load(&temp_dir.path().join("config.json")).unwrap_err();

    assert!(matches!(error, ToolError::MissingInput(_)));
}
