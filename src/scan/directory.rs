//! Directory scanner
//!
//! Lists the regular files of one directory (non-recursive) and partitions
//! them into parsed records and invalid names.

use std::path::Path;

use crate::core::Record;
use crate::error::AppError;
use crate::scan::parser::{ValidityPolicy, is_valid_name, parse_filename};
use crate::utils::scan_debug_enabled;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanOptions {
    pub(crate) policy: ValidityPolicy,
    /// Rewrite hyphens to underscores before validation and parsing.
    pub(crate) normalize_separators: bool,
    /// Abort the scan on the first undetectable timestamp instead of
    /// collecting the file into the invalid list.
    pub(crate) fail_fast: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            policy: ValidityPolicy::Lenient,
            normalize_separators: false,
            fail_fast: false,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScanResult {
    pub(crate) records: Vec<Record>,
    pub(crate) invalid_files: Vec<String>,
}

fn find_session_files(dir: &Path) -> Result<Vec<String>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::NotADirectory {
            path: dir.display().to_string(),
        });
    }

    let mut names = Vec::new();
    if let Ok(entries) = glob::glob(&format!("{}/*", dir.display())) {
        for entry in entries.flatten() {
            if entry.is_file()
                && let Some(name) = entry.file_name().and_then(|n| n.to_str())
            {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Scan one directory and partition its files by the filename contract.
pub(crate) fn scan_directory(dir: &Path, opts: &ScanOptions) -> Result<ScanResult, AppError> {
    let mut result = ScanResult::default();

    for name in find_session_files(dir)? {
        let name = if opts.normalize_separators {
            name.replace('-', "_")
        } else {
            name
        };

        if !is_valid_name(&name, opts.policy) {
            if scan_debug_enabled() {
                eprintln!("{name}: rejected by validity pre-check");
            }
            result.invalid_files.push(name);
            continue;
        }

        match parse_filename(&name) {
            Ok(parsed) => result.records.push(Record {
                file_name: name,
                participant: parsed.participant,
                test: parsed.test_name,
                date: parsed.timestamp,
            }),
            Err(err) if opts.fail_fast => return Err(err.into()),
            Err(err) => {
                if scan_debug_enabled() {
                    eprintln!("{err}");
                }
                result.invalid_files.push(name);
            }
        }
    }

    Ok(result)
}
