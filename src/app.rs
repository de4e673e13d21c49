//! Command dispatch: scan the directory, build the report, print it.

use std::path::Path;

use crate::cli::Cli;
use crate::core::{DateFilter, ReportFilter, TestUniverse, build_report};
use crate::error::AppError;
use crate::output::{
    TableOptions, output_invalid_json, output_missing_json, output_report_json,
    print_invalid_files, print_missing_tests, print_report,
};
use crate::scan::{ScanOptions, ValidityPolicy, scan_directory};
use crate::utils::parse_date;

fn date_range(cli: &Cli) -> Option<(&str, &str)> {
    match cli.date_range.as_deref() {
        Some([start, end]) => Some((start.as_str(), end.as_str())),
        _ => None,
    }
}

fn report_filter(cli: &Cli) -> Result<ReportFilter, AppError> {
    let dates = match date_range(cli) {
        Some((start, end)) => DateFilter::new(Some(parse_date(start)?), Some(parse_date(end)?)),
        None => DateFilter::default(),
    };
    Ok(ReportFilter {
        dates,
        participant: cli.participant.clone(),
        test: cli.test.clone(),
    })
}

/// Heading line describing the active filters, echoing the date strings
/// the way the user wrote them.
fn heading(cli: &Cli) -> String {
    match (date_range(cli), cli.participant.as_deref()) {
        (Some((start, end)), Some(participant)) => format!(
            "Here are the tests for participant {participant} between dates {start} {end}"
        ),
        (Some((start, end)), None) => {
            format!("Here are all the tests between dates {start} {end}")
        }
        (None, Some(participant)) => {
            format!("Here are all the tests for participant {participant}")
        }
        (None, None) => "Here are all the tests.".to_string(),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let filter = report_filter(cli)?;

    let opts = ScanOptions {
        policy: if cli.strict {
            ValidityPolicy::Strict
        } else {
            ValidityPolicy::Lenient
        },
        normalize_separators: cli.strict,
        fail_fast: cli.fail_fast,
    };
    let scan = scan_directory(Path::new(&cli.directory), &opts)?;

    let universe = if cli.observed_only {
        TestUniverse::ObservedOnly
    } else {
        TestUniverse::KnownAndObserved
    };
    let report = build_report(scan.records, &filter, universe, cli.order);

    if cli.missing_tests {
        if cli.json {
            output_missing_json(&report.missing_tests);
        } else {
            print_missing_tests(&report.missing_tests);
        }
        return Ok(());
    }

    if cli.list_invalid_files {
        if cli.json {
            output_invalid_json(&scan.invalid_files);
        } else {
            print_invalid_files(&scan.invalid_files);
        }
        return Ok(());
    }

    if cli.json {
        output_report_json(&report, &scan.invalid_files);
    } else {
        print_report(
            &report,
            &scan.invalid_files,
            &heading(cli),
            TableOptions {
                use_color: cli.use_color(),
            },
        );
    }

    Ok(())
}
