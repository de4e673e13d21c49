/// Timestamp display format used in reports: "2020-01-15 14:30"
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Tests every participant is expected to complete. Observed test names
/// are merged into this baseline when computing the missing-test list.
pub(crate) const KNOWN_TESTS: [&str; 24] = [
    "AVM_N(1)",
    "AVM_N(2)",
    "AVM_W(1)",
    "AVM_W(2)",
    "CTP",
    "DefName(1)",
    "DefName(2)",
    "PhonSTM5(a)",
    "PhonSTM5(b)",
    "Reading(1)",
    "Reading(2)",
    "RepeatNon",
    "RhymeNon",
    "RhymeWord",
    "SVPicName(1)",
    "SVPicName(2)",
    "SemPic(1)",
    "SemPic(2)",
    "SemText(1)",
    "SemText(2)",
    "WPMAud",
    "WPMVis",
    "f-ASenComp",
    "s-WSenComp",
];
