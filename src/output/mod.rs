mod format;
mod json;
mod table;

pub(crate) use json::{output_invalid_json, output_missing_json, output_report_json};
pub(crate) use table::{TableOptions, print_invalid_files, print_missing_tests, print_report};
