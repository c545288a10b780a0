/// Utilities for date formatting
///
/// Dates are shown the Vietnamese way: day first, slash separated.
use chrono::NaiveDate;

/// Format a date as dd/MM/yyyy
/// Example: 2024-03-05 -> "05/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Short label for chart axes
/// Example: 2024-03-05 -> "05/03"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Month/year pair as shipped with every daily record
/// Example: (3, 2024) -> "03/2024"
pub fn format_month_year(month: u32, year: i32) -> String {
    format!("{:02}/{}", month, year)
}
