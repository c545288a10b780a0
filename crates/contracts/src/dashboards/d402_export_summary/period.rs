use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

/// Validation failures of the selected period, displayed to the user as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Ngày không hợp lệ")]
    InvalidDate,
    #[error("Ngày bắt đầu phải trước ngày kết thúc")]
    StartAfterEnd,
    #[error("Không được chọn ngày trong tương lai")]
    EndInFuture,
}

/// Inclusive date range of the export summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parse the values of two `<input type="date">` controls (yyyy-mm-dd).
    pub fn parse(from: &str, to: &str) -> Result<Self, DateRangeError> {
        Ok(Self {
            from: parse_input_date(from)?,
            to: parse_input_date(to)?,
        })
    }

    /// Check the range against the current date.
    ///
    /// The start must not be after the end, and the end must not be in the
    /// future. The start-after-end rule wins when both are broken.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DateRangeError> {
        if self.from > self.to {
            return Err(DateRangeError::StartAfterEnd);
        }
        if self.to > today {
            return Err(DateRangeError::EndInFuture);
        }
        Ok(())
    }

    /// First day of the current month up to today
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            from: first_day_of_month(today.year(), today.month()).unwrap_or(today),
            to: today,
        }
    }

    /// The whole calendar month preceding the month of `anchor`
    pub fn previous_month(anchor: NaiveDate) -> Self {
        let (year, month) = if anchor.month() == 1 {
            (anchor.year() - 1, 12)
        } else {
            (anchor.year(), anchor.month() - 1)
        };
        let from = first_day_of_month(year, month).unwrap_or(anchor);
        let to = first_day_of_month(anchor.year(), anchor.month())
            .map(|d| d - Duration::days(1))
            .unwrap_or(anchor);
        Self { from, to }
    }

    /// The last `days` days, today included
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            from: today - Duration::days(span),
            to: today,
        }
    }

    pub fn from_input(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn to_input(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

fn parse_input_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DateRangeError::InvalidDate)
}

fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_start_after_end() {
        let range = DateRange::new(d(2024, 3, 10), d(2024, 3, 1));
        let err = range.validate(d(2024, 3, 31)).unwrap_err();
        assert_eq!(err, DateRangeError::StartAfterEnd);
        assert_eq!(err.to_string(), "Ngày bắt đầu phải trước ngày kết thúc");
    }

    #[test]
    fn test_end_in_future() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 16));
        let err = range.validate(d(2024, 3, 15)).unwrap_err();
        assert_eq!(err, DateRangeError::EndInFuture);
        assert_eq!(err.to_string(), "Không được chọn ngày trong tương lai");
    }

    #[test]
    fn test_start_after_end_checked_first() {
        let range = DateRange::new(d(2024, 4, 10), d(2024, 4, 1));
        assert_eq!(
            range.validate(d(2024, 3, 15)),
            Err(DateRangeError::StartAfterEnd)
        );
    }

    #[test]
    fn test_single_day_and_today_are_valid() {
        let today = d(2024, 3, 15);
        assert_eq!(DateRange::new(today, today).validate(today), Ok(()));
        assert_eq!(DateRange::new(d(2024, 3, 1), today).validate(today), Ok(()));
    }

    #[test]
    fn test_parse_inputs() {
        let range = DateRange::parse("2024-03-01", " 2024-03-15 ").unwrap();
        assert_eq!(range, DateRange::new(d(2024, 3, 1), d(2024, 3, 15)));
        assert_eq!(range.from_input(), "2024-03-01");
        assert_eq!(range.to_input(), "2024-03-15");

        assert_eq!(
            DateRange::parse("", "2024-03-15"),
            Err(DateRangeError::InvalidDate)
        );
        assert_eq!(
            DateRange::parse("2024-02-30", "2024-03-15"),
            Err(DateRangeError::InvalidDate)
        );
    }

    #[test]
    fn test_month_to_date() {
        let range = DateRange::month_to_date(d(2024, 3, 15));
        assert_eq!(range, DateRange::new(d(2024, 3, 1), d(2024, 3, 15)));
    }

    #[test]
    fn test_previous_month_wraps_year() {
        assert_eq!(
            DateRange::previous_month(d(2024, 1, 20)),
            DateRange::new(d(2023, 12, 1), d(2023, 12, 31))
        );
        assert_eq!(
            DateRange::previous_month(d(2024, 3, 5)),
            DateRange::new(d(2024, 2, 1), d(2024, 2, 29))
        );
    }

    #[test]
    fn test_last_days_includes_today() {
        let range = DateRange::last_days(d(2024, 3, 15), 7);
        assert_eq!(range, DateRange::new(d(2024, 3, 9), d(2024, 3, 15)));
        assert_eq!(
            DateRange::last_days(d(2024, 3, 15), 0),
            DateRange::new(d(2024, 3, 15), d(2024, 3, 15))
        );
    }
}
