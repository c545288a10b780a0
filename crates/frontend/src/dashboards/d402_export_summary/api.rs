use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::dashboards::d402_export_summary::{
    DateRange, ExportSummaryQuery, ExportSummaryResponse, WarehouseExportSummary,
};
use gloo_net::http::Request;

const SUMMARY_PATH: &str = "/api/WarehouseExport/dashboard/export-summary";

/// Build the endpoint URL for a range, e.g.
/// `/api/WarehouseExport/dashboard/export-summary?fromDate=2024-03-01&toDate=2024-03-15`
pub fn summary_path(range: &DateRange) -> Result<String, String> {
    let query = serde_qs::to_string(&ExportSummaryQuery::new(range.from, range.to))
        .map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("{}?{}", SUMMARY_PATH, query))
}

/// Получить сводку отгрузок со склада за период
pub async fn get_export_summary(range: &DateRange) -> Result<WarehouseExportSummary, String> {
    let auth_header = storage::auth_header().ok_or("Chưa đăng nhập")?;
    let url = api_url(&summary_path(range)?);

    let response = Request::get(&url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Không thể kết nối máy chủ: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi HTTP: {}", response.status()));
    }

    let body: ExportSummaryResponse = response
        .json()
        .await
        .map_err(|e| format!("Dữ liệu trả về không hợp lệ: {}", e))?;

    body.into_result().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_path() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );
        assert_eq!(
            summary_path(&range).unwrap(),
            "/api/WarehouseExport/dashboard/export-summary?fromDate=2024-03-01&toDate=2024-03-15"
        );
    }
}
