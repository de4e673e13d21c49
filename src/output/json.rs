//! JSON report rendering

use crate::consts::DATETIME_FORMAT;
use crate::core::{Record, Report};

fn record_json(record: &Record) -> serde_json::Value {
    serde_json::json!({
        "file_name": record.file_name,
        "participant": record.participant,
        "test": record.test,
        "date": record.date.format(DATETIME_FORMAT).to_string(),
    })
}

pub(crate) fn output_report_json(report: &Report, invalid_files: &[String]) {
    let records: Vec<serde_json::Value> = report.records.iter().map(record_json).collect();
    let json = serde_json::json!({
        "records": records,
        "missing_tests": report.missing_tests,
        "invalid_files": invalid_files,
    });
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}

pub(crate) fn output_missing_json(missing: &[String]) {
    let json = serde_json::json!(missing);
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}

pub(crate) fn output_invalid_json(files: &[String]) {
    let json = serde_json::json!(files);
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}
