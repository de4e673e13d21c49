//! Record and filter types shared across the scanner and report layers.

use chrono::{NaiveDate, NaiveDateTime};

/// One parsed session file. Built once during the scan, immutable after.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    pub(crate) file_name: String,
    pub(crate) participant: String,
    pub(crate) test: String,
    pub(crate) date: NaiveDateTime,
}

/// Inclusive calendar-date range filter.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}
