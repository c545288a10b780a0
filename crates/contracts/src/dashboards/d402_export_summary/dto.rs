use chrono::NaiveDate;
use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Query parameters of `GET /api/WarehouseExport/dashboard/export-summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummaryQuery {
    /// Start date in format "YYYY-MM-DD"
    pub from_date: String,
    /// End date in format "YYYY-MM-DD"
    pub to_date: String,
}

impl ExportSummaryQuery {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from_date: from.format("%Y-%m-%d").to_string(),
            to_date: to.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Response envelope of the export summary endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<WarehouseExportSummary>,
    /// Server-side explanation, usually present when `success` is false
    #[serde(default)]
    pub message: Option<String>,
}

impl ExportSummaryResponse {
    /// Unwrap the envelope into the summary, or the reason there is none.
    pub fn into_result(self) -> Result<WarehouseExportSummary, ExportSummaryError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ExportSummaryError::MissingData),
            (false, _) => Err(ExportSummaryError::Rejected(
                self.message.filter(|m| !m.trim().is_empty()),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportSummaryError {
    #[error("{}", rejected_message(.0))]
    Rejected(Option<String>),
    #[error("Phản hồi không chứa dữ liệu")]
    MissingData,
}

fn rejected_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("Không thể tải dữ liệu xuất kho")
}

/// Export summary for the selected date range
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseExportSummary {
    #[serde(default)]
    pub daily_summaries: Vec<DailyExportSummary>,
    #[serde(default)]
    pub total_exports: i64,
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_amount: f64,
}

impl WarehouseExportSummary {
    /// Range totals as reported by the server.
    pub fn totals(&self) -> ExportTotals {
        ExportTotals {
            total_exports: self.total_exports,
            total_quantity: self.total_quantity,
            total_amount: self.total_amount,
        }
    }
}

/// One day of export activity
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyExportSummary {
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    /// 0 when the server omitted it, see [`DailyExportSummary::month_year`]
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    /// Number of export documents issued that day
    #[serde(default)]
    pub total_exports: i64,
    #[serde(default)]
    pub total_quantity: f64,
    #[serde(default)]
    pub total_amount: f64,
}

impl DailyExportSummary {
    /// Month and year of the record, taken from `date` when the server sent none.
    pub fn month_year(&self) -> (u32, i32) {
        if self.month == 0 || self.year == 0 {
            (self.date.month(), self.date.year())
        } else {
            (self.month, self.year)
        }
    }
}

/// Totals handed to the host page after every successful load
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExportTotals {
    pub total_exports: i64,
    pub total_quantity: f64,
    pub total_amount: f64,
}

/// Accepts "YYYY-MM-DD" as well as ISO datetimes like "2024-03-15T00:00:00".
fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.split('T').next().unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "success": true,
        "data": {
            "dailySummaries": [
                { "date": "2024-03-01T00:00:00", "month": 3, "year": 2024,
                  "totalExports": 2, "totalQuantity": 15.5, "totalAmount": 1250000 },
                { "date": "2024-03-02", "month": 3, "year": 2024,
                  "totalExports": 1, "totalQuantity": 4, "totalAmount": 300000 }
            ],
            "totalExports": 3,
            "totalQuantity": 19.5,
            "totalAmount": 1550000
        }
    }"#;

    #[test]
    fn test_parse_successful_envelope() {
        let response: ExportSummaryResponse = serde_json::from_str(OK_BODY).unwrap();
        let summary = response.into_result().unwrap();

        assert_eq!(summary.daily_summaries.len(), 2);
        assert_eq!(
            summary.daily_summaries[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(summary.daily_summaries[1].total_quantity, 4.0);
        assert_eq!(
            summary.totals(),
            ExportTotals {
                total_exports: 3,
                total_quantity: 19.5,
                total_amount: 1_550_000.0,
            }
        );
    }

    #[test]
    fn test_rejected_envelope_uses_server_message() {
        let response: ExportSummaryResponse =
            serde_json::from_str(r#"{ "success": false, "message": "Hết phiên đăng nhập" }"#)
                .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Hết phiên đăng nhập");
    }

    #[test]
    fn test_rejected_envelope_without_message() {
        let response: ExportSummaryResponse =
            serde_json::from_str(r#"{ "success": false, "data": null }"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err, ExportSummaryError::Rejected(None));
        assert_eq!(err.to_string(), "Không thể tải dữ liệu xuất kho");
    }

    #[test]
    fn test_success_without_data() {
        let response: ExportSummaryResponse =
            serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            ExportSummaryError::MissingData
        );
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let body = r#"{ "date": "01/03/2024", "month": 3, "year": 2024 }"#;
        assert!(serde_json::from_str::<DailyExportSummary>(body).is_err());
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let body = r#"{ "date": "2024-03-01", "totalExports": 2 }"#;
        let day: DailyExportSummary = serde_json::from_str(body).unwrap();

        assert_eq!(day.month, 0);
        assert_eq!(day.year, 0);
        assert_eq!(day.total_exports, 2);
        assert_eq!(day.total_quantity, 0.0);
        assert_eq!(day.total_amount, 0.0);
        assert_eq!(day.month_year(), (3, 2024));
    }

    #[test]
    fn test_envelope_survives_record_without_month() {
        let body = r#"{
            "success": true,
            "data": {
                "dailySummaries": [ { "date": "2024-03-05", "totalAmount": 500000 } ],
                "totalExports": 1,
                "totalAmount": 500000
            }
        }"#;
        let response: ExportSummaryResponse = serde_json::from_str(body).unwrap();
        let summary = response.into_result().unwrap();
        assert_eq!(summary.daily_summaries.len(), 1);
        assert_eq!(summary.daily_summaries[0].month_year(), (3, 2024));
    }

    #[test]
    fn test_query_uses_iso_dates() {
        let query = ExportSummaryQuery::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        assert_eq!(query.from_date, "2024-03-01");
        assert_eq!(query.to_date, "2024-03-31");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["fromDate"], "2024-03-01");
    }
}
