use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD (chrono accepts unpadded month and day)
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(parse_date("2020-01-15").unwrap(), expected);
        assert_eq!(parse_date("20200115").unwrap(), expected);
    }

    #[test]
    fn accepts_unpadded_components() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert_eq!(parse_date("2020-1-5").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2020-13-40").is_err());
    }
}
