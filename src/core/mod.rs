//! Core module - records, filters, and report computation

mod report;
mod types;

pub(crate) use report::{Report, ReportFilter, TestUniverse, build_report};
pub(crate) use types::{DateFilter, Record};
