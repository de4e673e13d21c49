//! Plain-text report rendering

use comfy_table::Cell;

use crate::consts::DATETIME_FORMAT;
use crate::core::Report;
use crate::output::format::{create_styled_table, header_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
}

/// Print the full report: heading, record table, missing tests, invalid files.
pub(crate) fn print_report(
    report: &Report,
    invalid_files: &[String],
    heading: &str,
    opts: TableOptions,
) {
    println!("\n{heading}");

    if report.records.is_empty() {
        println!("No matching test files found.");
    } else {
        let c = opts.use_color;
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell("File", c),
            header_cell("Participant", c),
            header_cell("Test", c),
            header_cell("Date", c),
        ]);
        for record in &report.records {
            table.add_row(vec![
                Cell::new(&record.file_name),
                Cell::new(&record.participant),
                Cell::new(&record.test),
                Cell::new(record.date.format(DATETIME_FORMAT)),
            ]);
        }
        println!("{table}");
    }

    print_missing_tests(&report.missing_tests);
    print_invalid_files(invalid_files);
}

pub(crate) fn print_missing_tests(missing: &[String]) {
    println!("\nHere are the missing tests:");
    for test in missing {
        println!("\t{test}");
    }
}

pub(crate) fn print_invalid_files(files: &[String]) {
    println!("\nHere are the invalid files:");
    for file in files {
        println!("\t{file}");
    }
}
