//! Integration tests for the check pipeline.

use std::fs;

use bpdup_cli::pipeline::{ExportTargets, export_check, match_file};
use bpdup_cli::settings::Settings;
use bpdup_report::ExportFormat;
use chrono::NaiveDate;
use tempfile::TempDir;

fn generated() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 4)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

#[test]
fn rejected_rows_reach_the_json_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("partners.csv");
    fs::write(
        &input,
        "BP_Number,Name1,Name2\n\
         BP1,Acme Trading,\n\
         BP1,Acme Trading Ltd,\n\
         ,Acme,\n\
         BP2,Acme Trading,\n",
    )
    .unwrap();
    let config = Settings::default().to_match_config().unwrap();

    let check = match_file(&input, config, |_| {}).unwrap();

    assert_eq!(check.records.len(), 2);
    assert_eq!(check.rejected.len(), 2);
    assert_eq!(check.summary.total_records, 4);
    assert_eq!(check.summary.skipped_records, 2);
    assert_eq!(check.summary.total_pairs, 1);

    let output = dir.path().join("results.json");
    let targets = ExportTargets {
        output: Some(output.clone()),
        format: ExportFormat::Json,
        summary_output: None,
    };
    export_check(&check, 3, &targets, generated()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["summary"]["skipped_records"], 2);
    let rejected = value["rejected"].as_array().unwrap();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0]["line"], 3);
    assert_eq!(rejected[0]["bp_number"], "BP1");
    assert_eq!(rejected[1]["line"], 4);
    assert_eq!(rejected[1]["bp_number"], serde_json::Value::Null);
}

#[test]
fn summary_sheet_counts_rejected_rows() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("partners.csv");
    fs::write(&input, "BP_Number,Name1,Name2\nBP1,Acme,\n,Acme,\n").unwrap();
    let config = Settings::default().to_match_config().unwrap();

    let check = match_file(&input, config, |_| {}).unwrap();
    let summary_path = dir.path().join("summary.csv");
    let targets = ExportTargets {
        summary_output: Some(summary_path.clone()),
        ..ExportTargets::default()
    };
    export_check(&check, 3, &targets, generated()).unwrap();

    let text = fs::read_to_string(&summary_path).unwrap();
    assert!(text.contains("Total Records Analyzed,2\n"));
    assert!(text.contains("Records Skipped,1\n"));
}

#[test]
fn missing_input_names_the_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let config = Settings::default().to_match_config().unwrap();

    let error = match_file(&input, config, |_| {}).unwrap_err();

    assert!(error.to_string().contains("absent.csv"));
}
