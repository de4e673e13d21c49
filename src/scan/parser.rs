//! Session filename parser
//!
//! File names follow `{participant}_{test_name}_{date}` with one of two
//! date encodings: `15Jan20_1430` (abbreviated month, 24-hour time) or
//! `01-15-20-0230PM` (month-day-year, 12-hour time with meridiem).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::utils::scan_debug_enabled;

/// Full month names, matched by prefix against the token in a filename.
/// An abbreviated token like "Jan" or "Sept" resolves to the first name
/// it prefixes in calendar order.
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"( \([0-9]+\))?\.txt$").unwrap());

static PARTICIPANT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)_").unwrap());

/// `15Jan20_1430`: day, month name, 2-digit year, 24-hour HHMM.
static MONTH_NAME_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9]?)([A-Z][a-z]+)([0-9]{2})_([0-9]{4})$").unwrap());

/// `01-15-20-0230PM`: month, day, 2-digit year, 3-or-4-digit 12-hour time.
static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9][0-9]?)[-_]([0-9][0-9]?)[-_]([0-9]{2})[-_]([0-9]?[0-9]{3})([AP]M)$")
        .unwrap()
});

/// Suffix shapes a well-formed filename must end in, with or without the
/// `.txt` extension and an optional `(n)` copy marker.
static VALID_TAIL_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"[0-9]{4}(\.txt)?$").unwrap(),
        Regex::new(r"[0-9] \([0-9]\)(\.txt)?$").unwrap(),
        Regex::new(r"[0-9]?[0-9]{3}[AP]M(\.txt)?$").unwrap(),
        Regex::new(r"[0-9]?[0-9]{3}[AP]M \([0-9]\)(\.txt)?$").unwrap(),
    ]
});

/// Minimum-separator policy applied by [`is_valid_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidityPolicy {
    /// At least one underscore.
    Lenient,
    /// More than two underscores.
    Strict,
}

/// Result of a successful [`parse_filename`] call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedName {
    pub(crate) participant: String,
    pub(crate) test_name: String,
    pub(crate) timestamp: NaiveDateTime,
}

/// A date span located inside a filename stem. `start` is the byte offset
/// where the span begins; everything before it (minus the separator) is
/// the participant and test name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DateMatch {
    pub(crate) start: usize,
    pub(crate) timestamp: NaiveDateTime,
}

type MatcherFn = fn(&str) -> Option<DateMatch>;

/// Date encodings tried in order; the month-name form is the common one.
const DATE_MATCHERS: [(&str, MatcherFn); 2] = [
    ("month-name", match_month_name_date),
    ("numeric-meridiem", match_numeric_date),
];

/// Strip a trailing `" (n)"` copy marker plus `.txt` extension.
pub(crate) fn remove_extension(name: &str) -> Cow<'_, str> {
    EXTENSION_RE.replace(name, "")
}

/// Resolve a lowercase month-name prefix to its 1-based month number.
pub(crate) fn convert_month(prefix: &str) -> Option<u32> {
    if prefix.is_empty() {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(prefix))
        .map(|index| index as u32 + 1)
}

/// Convert a 3-or-4-digit 12-hour clock reading plus meridiem to 24-hour
/// hour and minute. PM hours other than 12 add 12 mod 24; AM readings and
/// 12 o'clock pass through unchanged.
pub(crate) fn convert_twelve_hour(digits: &str, meridiem: &str) -> Option<(u32, u32)> {
    if !(3..=4).contains(&digits.len()) {
        return None;
    }
    let split = digits.len() - 2;
    let mut hour: u32 = digits[..split].parse().ok()?;
    let minute: u32 = digits[split..].parse().ok()?;
    if meridiem == "PM" && hour != 12 {
        hour = (hour + 12) % 24;
    }
    Some((hour, minute))
}

fn make_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

fn match_month_name_date(stem: &str) -> Option<DateMatch> {
    let caps = MONTH_NAME_DATE_RE.captures(stem)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = convert_month(&caps[2].to_lowercase())?;
    let year = 2000 + caps[3].parse::<i32>().ok()?;
    let clock = &caps[4];
    let hour: u32 = clock[..2].parse().ok()?;
    let minute: u32 = clock[2..].parse().ok()?;
    Some(DateMatch {
        start: caps.get(0)?.start(),
        timestamp: make_timestamp(year, month, day, hour, minute)?,
    })
}

fn match_numeric_date(stem: &str) -> Option<DateMatch> {
    let caps = NUMERIC_DATE_RE.captures(stem)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year = 2000 + caps[3].parse::<i32>().ok()?;
    let (hour, minute) = convert_twelve_hour(&caps[4], &caps[5])?;
    Some(DateMatch {
        start: caps.get(0)?.start(),
        timestamp: make_timestamp(year, month, day, hour, minute)?,
    })
}

/// Locate the date span in a filename stem, trying each encoding in order.
pub(crate) fn detect_timestamp(stem: &str) -> Option<DateMatch> {
    for (name, matcher) in DATE_MATCHERS {
        if let Some(found) = matcher(stem) {
            if scan_debug_enabled() {
                eprintln!("{stem}: matched {name} date form");
            }
            return Some(found);
        }
    }
    None
}

/// Split a filename into participant, test name, and timestamp.
///
/// The leading alphanumeric token up to the first underscore is the
/// participant; the date span is located from the end of the stem; the
/// test name is everything in between, minus the single separator
/// character before the date.
pub(crate) fn parse_filename(name: &str) -> Result<ParsedName, ParseError> {
    let stem = remove_extension(name);
    let caps = PARTICIPANT_RE
        .captures(&stem)
        .ok_or_else(|| ParseError::MissingParticipant(name.to_string()))?;
    let participant = caps[1].to_string();
    let test_begin = caps.get(0).map_or(0, |m| m.end());

    let date = detect_timestamp(&stem)
        .ok_or_else(|| ParseError::UnableToDetectTime(name.to_string()))?;

    let test_name = if date.start > test_begin {
        stem.get(test_begin..date.start - 1).unwrap_or("").to_string()
    } else {
        String::new()
    };

    Ok(ParsedName {
        participant,
        test_name,
        timestamp: date.timestamp,
    })
}

/// Pre-check that a filename looks like a session file: the tail must
/// match one of the accepted suffix shapes and the name must carry enough
/// underscores for the active policy.
pub(crate) fn is_valid_name(name: &str, policy: ValidityPolicy) -> bool {
    let shape_ok = VALID_TAIL_RES.iter().any(|re| re.is_match(name));
    let underscores = name.matches('_').count();
    let count_ok = match policy {
        ValidityPolicy::Lenient => underscores >= 1,
        ValidityPolicy::Strict => underscores > 2,
    };
    shape_ok && count_ok
}
