use std::fs;
use std::process::Command;

#[test]
fn test_in_out_options_create_report() {
    let dir = tempfile::tempdir().unwrap();
    let repos = dir.path().join("repos.txt");
    fs::write(&repos, "").unwrap();
    let prefix = dir.path().join("myreport");

    let output = Command::new(env!("CARGO_BIN_EXE_repositories_archive"))
        .arg("-in")
        .arg(&repos)
        .arg("-out")
        .arg(&prefix)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let reports: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("myreport-"))
        .collect();
    assert_eq!(reports.len(), 1, "reports: {:?}", reports);
    assert_eq!(fs::read_to_string(dir.path().join(&reports[0])).unwrap(), "");
}

#[test]
fn test_missing_repositories_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_repositories_archive"))
        .arg("-in")
        .arg(dir.path().join("missing.txt"))
        .arg("-out")
        .arg(dir.path().join("results.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}
