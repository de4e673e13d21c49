//! Report computation: filter predicates and the missing-test set.

use std::collections::BTreeSet;

use crate::cli::SortOrder;
use crate::consts::KNOWN_TESTS;
use crate::core::types::{DateFilter, Record};

/// Independent, AND-composed report predicates.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReportFilter {
    pub(crate) dates: DateFilter,
    pub(crate) participant: Option<String>,
    pub(crate) test: Option<String>,
}

/// Baseline universe the missing-test set is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TestUniverse {
    /// The built-in expected-test table plus every observed test name.
    KnownAndObserved,
    /// Only the test names observed in the scanned directory.
    ObservedOnly,
}

#[derive(Debug, Default)]
pub(crate) struct Report {
    pub(crate) records: Vec<Record>,
    pub(crate) missing_tests: Vec<String>,
}

/// Apply the report filters and compute the missing-test list.
///
/// The universe is seeded before any filtering, and the missing set is the
/// difference against the records surviving the date and participant
/// filters. The test filter narrows the printed table only, so asking for
/// one test does not mark every other test missing.
pub(crate) fn build_report(
    records: Vec<Record>,
    filter: &ReportFilter,
    universe: TestUniverse,
    order: SortOrder,
) -> Report {
    let mut remaining: BTreeSet<String> = match universe {
        TestUniverse::KnownAndObserved => KNOWN_TESTS.iter().map(|t| t.to_string()).collect(),
        TestUniverse::ObservedOnly => BTreeSet::new(),
    };
    remaining.extend(records.iter().map(|r| r.test.clone()));

    let narrowed: Vec<Record> = records
        .into_iter()
        .filter(|r| {
            filter.dates.contains(r.date.date())
                && filter
                    .participant
                    .as_deref()
                    .is_none_or(|p| r.participant == p)
        })
        .collect();

    for record in &narrowed {
        remaining.remove(&record.test);
    }
    let missing_tests: Vec<String> = remaining.into_iter().collect();

    let mut records: Vec<Record> = match filter.test.as_deref() {
        Some(test) => narrowed.into_iter().filter(|r| r.test == test).collect(),
        None => narrowed,
    };
    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    if order == SortOrder::Desc {
        records.reverse();
    }

    Report {
        records,
        missing_tests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(file_name: &str, participant: &str, test: &str, day: u32) -> Record {
        Record {
            file_name: file_name.to_string(),
            participant: participant.to_string(),
            test: test.to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, day)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            record("b_Reading(2)_15Jan20_1430.txt", "MCWA004", "Reading(2)", 15),
            record("a_CTP_16Jan20_1430.txt", "MCWA004", "CTP", 16),
            record("c_WPMAud_20Jan20_1430.txt", "MCWB011", "WPMAud", 20),
        ]
    }

    #[test]
    fn unfiltered_report_keeps_all_records_sorted_by_file_name() {
        let report = build_report(
            sample_records(),
            &ReportFilter::default(),
            TestUniverse::KnownAndObserved,
            SortOrder::Asc,
        );
        let names: Vec<&str> = report.records.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "a_CTP_16Jan20_1430.txt",
                "b_Reading(2)_15Jan20_1430.txt",
                "c_WPMAud_20Jan20_1430.txt"
            ]
        );
    }

    #[test]
    fn descending_order_reverses_the_table() {
        let report = build_report(
            sample_records(),
            &ReportFilter::default(),
            TestUniverse::KnownAndObserved,
            SortOrder::Desc,
        );
        assert_eq!(report.records[0].file_name, "c_WPMAud_20Jan20_1430.txt");
    }

    #[test]
    fn missing_is_universe_minus_observed() {
        let report = build_report(
            sample_records(),
            &ReportFilter::default(),
            TestUniverse::KnownAndObserved,
            SortOrder::Asc,
        );
        assert!(!report.missing_tests.iter().any(|t| t == "Reading(2)"));
        assert!(!report.missing_tests.iter().any(|t| t == "CTP"));
        assert!(!report.missing_tests.iter().any(|t| t == "WPMAud"));
        assert!(report.missing_tests.iter().any(|t| t == "Reading(1)"));
        assert!(report.missing_tests.iter().any(|t| t == "s-WSenComp"));
        // sorted output
        let mut sorted = report.missing_tests.clone();
        sorted.sort();
        assert_eq!(report.missing_tests, sorted);
    }

    #[test]
    fn participant_filter_restores_other_participants_tests_as_missing() {
        let filter = ReportFilter {
            participant: Some("MCWA004".to_string()),
            ..Default::default()
        };
        let report = build_report(
            sample_records(),
            &filter,
            TestUniverse::KnownAndObserved,
            SortOrder::Asc,
        );
        assert_eq!(report.records.len(), 2);
        // WPMAud was observed, but not for this participant
        assert!(report.missing_tests.iter().any(|t| t == "WPMAud"));
    }

    #[test]
    fn date_filter_is_applied_before_missing_computation() {
        let filter = ReportFilter {
            dates: DateFilter::new(
                NaiveDate::from_ymd_opt(2020, 1, 15),
                NaiveDate::from_ymd_opt(2020, 1, 16),
            ),
            ..Default::default()
        };
        let report = build_report(
            sample_records(),
            &filter,
            TestUniverse::KnownAndObserved,
            SortOrder::Asc,
        );
        assert_eq!(report.records.len(), 2);
        assert!(report.missing_tests.iter().any(|t| t == "WPMAud"));
    }

    #[test]
    fn test_filter_narrows_table_but_not_missing_set() {
        let filter = ReportFilter {
            test: Some("Reading(2)".to_string()),
            ..Default::default()
        };
        let report = build_report(
            sample_records(),
            &filter,
            TestUniverse::KnownAndObserved,
            SortOrder::Asc,
        );
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].test, "Reading(2)");
        // CTP still counts as observed, so it is not missing
        assert!(!report.missing_tests.iter().any(|t| t == "CTP"));
    }

    #[test]
    fn observed_only_universe_ignores_the_known_table() {
        let filter = ReportFilter {
            participant: Some("MCWA004".to_string()),
            ..Default::default()
        };
        let report = build_report(
            sample_records(),
            &filter,
            TestUniverse::ObservedOnly,
            SortOrder::Asc,
        );
        assert_eq!(report.missing_tests, ["WPMAud"]);
    }
}
