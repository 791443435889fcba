use super::{github_widget, gitlab_widget};
use crate::report::{format_row, report_file_name, Report};
use crate::response::{ArchivalResult, SaveResponse};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::fs;

#[test]
fn test_report_file_name_has_second_precision_utc_suffix() {
    let started_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
    assert_eq!(
        report_file_name("results.txt", started_at),
        "results.txt-2024-03-01T12:30:05"
    );
}

#[test]
fn test_format_row_for_successful_request() {
    let body = r#"{"id": 7, "save_request_status": "accepted", "save_task_status": "pending", "save_request_date": "2024-03-01T12:30:05+00:00"}"#;
    let result =
        ArchivalResult::from_response(&github_widget(), 200, body, SaveResponse::Requested);

    assert_eq!(
        format_row(&result),
        "7,https://github.com/acme/widget,github,accepted,pending,2024-03-01T12:30:05+00:00"
    );
}

#[test]
fn test_format_row_renders_missing_values_as_none() {
    let result = ArchivalResult::transport_failure(&gitlab_widget(), "timed out");
    assert_eq!(
        format_row(&result),
        "None,https://gitlab.com/acme/widget,gitlab,timed out,None,None"
    );
}

#[test]
fn test_report_writes_one_line_per_result() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(report_file_name("results.txt", Utc::now()));

    let mut report = Report::create(&path)?;
    report.write(&ArchivalResult::transport_failure(&github_widget(), "boom"))?;
    report.write(&ArchivalResult::transport_failure(&gitlab_widget(), "boom"))?;
    assert_eq!(report.rows(), 2);

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("github.com"));
    assert!(lines[1].contains("gitlab.com"));
    assert!(contents.ends_with('\n'));
    Ok(())
}

#[test]
fn test_create_truncates_existing_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("results.txt-old");
    fs::write(&path, "stale,row\n")?;

    let report = Report::create(&path)?;
    drop(report);
    assert_eq!(fs::read_to_string(&path)?, "");
    Ok(())
}
