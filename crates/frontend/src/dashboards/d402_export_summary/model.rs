//! State of the export summary widget, kept free of DOM access.
//!
//! Every fetch gets a generation number. Only the response of the pending
//! generation is applied, and only once, so a slow response for an old range
//! can never overwrite the data of a newer one.

use chrono::NaiveDate;
use contracts::dashboards::d402_export_summary::{
    DateRange, DateRangeError, ExportTotals, WarehouseExportSummary,
};

/// Handle of an accepted fetch, handed back to [`ExportSummaryModel::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct ExportSummaryModel {
    /// Last successfully loaded summary, kept while reloading or on error
    pub summary: Option<WarehouseExportSummary>,
    /// Range `summary` was loaded for
    pub loaded_range: Option<DateRange>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
    pending: Option<u64>,
}

impl ExportSummaryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the range and register a new fetch.
    ///
    /// A rejected range cancels whatever is in flight and leaves the
    /// previous summary on screen together with the message.
    pub fn begin_fetch(
        &mut self,
        range: DateRange,
        today: NaiveDate,
    ) -> Result<FetchTicket, DateRangeError> {
        self.generation += 1;

        if let Err(err) = range.validate(today) {
            self.pending = None;
            self.loading = false;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.pending = Some(self.generation);
        self.loading = true;
        self.error = None;
        Ok(FetchTicket {
            generation: self.generation,
            range,
        })
    }

    /// Reject input that could not even be parsed into a range.
    pub fn reject(&mut self, err: DateRangeError) {
        self.generation += 1;
        self.pending = None;
        self.loading = false;
        self.error = Some(err.to_string());
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns the new totals when a summary was accepted; `None` for
    /// failures and for responses that were superseded.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<WarehouseExportSummary, String>,
    ) -> Option<ExportTotals> {
        if self.pending != Some(ticket.generation) {
            log::debug!(
                "Dropping stale export summary for {}..{}",
                ticket.range.from,
                ticket.range.to
            );
            return None;
        }

        self.pending = None;
        self.loading = false;
        match result {
            Ok(summary) => {
                let totals = summary.totals();
                self.summary = Some(summary);
                self.loaded_range = Some(ticket.range);
                self.error = None;
                Some(totals)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// First load still pending, nothing to show yet
    pub fn shows_skeleton(&self) -> bool {
        self.loading && self.summary.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use contracts::dashboards::d402_export_summary::{
        chart_series, table_rows, DailyExportSummary, ExportSummaryResponse, SortState,
    };

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2024, 3, 15)
    }

    fn summary(days: &[u32]) -> WarehouseExportSummary {
        let daily_summaries: Vec<DailyExportSummary> = days
            .iter()
            .map(|&day| DailyExportSummary {
                date: d(2024, 3, day),
                month: 3,
                year: 2024,
                total_exports: 1,
                total_quantity: 10.0,
                total_amount: 100_000.0,
            })
            .collect();
        WarehouseExportSummary {
            total_exports: daily_summaries.len() as i64,
            total_quantity: 10.0 * daily_summaries.len() as f64,
            total_amount: 100_000.0 * daily_summaries.len() as f64,
            daily_summaries,
        }
    }

    fn loaded_model() -> ExportSummaryModel {
        let mut model = ExportSummaryModel::new();
        let ticket = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 10)), today())
            .unwrap();
        model.complete(ticket, Ok(summary(&[1, 2])));
        model
    }

    #[test]
    fn test_first_load_shows_skeleton() {
        let mut model = ExportSummaryModel::new();
        model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 10)), today())
            .unwrap();
        assert!(model.loading);
        assert!(model.shows_skeleton());
    }

    #[test]
    fn test_start_after_end_blocks_fetch() {
        let mut model = loaded_model();
        let result = model.begin_fetch(DateRange::new(d(2024, 3, 10), d(2024, 3, 1)), today());

        assert_eq!(result, Err(DateRangeError::StartAfterEnd));
        assert_eq!(
            model.error.as_deref(),
            Some("Ngày bắt đầu phải trước ngày kết thúc")
        );
        assert!(!model.loading);
        assert_eq!(model.summary, Some(summary(&[1, 2])));
    }

    #[test]
    fn test_future_end_blocks_fetch() {
        let mut model = loaded_model();
        let result = model.begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 20)), today());

        assert_eq!(result, Err(DateRangeError::EndInFuture));
        assert_eq!(
            model.error.as_deref(),
            Some("Không được chọn ngày trong tương lai")
        );
        assert_eq!(model.summary, Some(summary(&[1, 2])));
    }

    #[test]
    fn test_success_orders_rows_and_series() {
        let mut model = ExportSummaryModel::new();
        let ticket = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 10)), today())
            .unwrap();
        model.complete(ticket, Ok(summary(&[4, 1, 9, 6, 2])));

        let loaded = model.summary.as_ref().unwrap();
        let rows: Vec<u32> = table_rows(loaded, SortState::default())
            .iter()
            .map(|r| r.date.day())
            .collect();
        let series: Vec<u32> = chart_series(loaded).iter().map(|r| r.date.day()).collect();

        assert_eq!(rows, vec![9, 6, 4, 2, 1]);
        assert_eq!(series, vec![1, 2, 4, 6, 9]);
        assert!(!model.shows_skeleton());
    }

    #[test]
    fn test_failure_keeps_previous_data_and_clears_loading() {
        let mut model = loaded_model();
        let ticket = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 12)), today())
            .unwrap();
        let totals = model.complete(ticket, Err("Không thể tải dữ liệu xuất kho".to_string()));

        assert_eq!(totals, None);
        assert!(!model.loading);
        assert_eq!(model.error.as_deref(), Some("Không thể tải dữ liệu xuất kho"));
        assert_eq!(model.summary, Some(summary(&[1, 2])));
    }

    #[test]
    fn test_rejected_envelope_surfaces_message() {
        let mut model = loaded_model();
        let ticket = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 12)), today())
            .unwrap();
        assert!(model.loading);

        let response = ExportSummaryResponse {
            success: false,
            data: None,
            message: Some("Kho đang bảo trì".to_string()),
        };
        let totals = model.complete(ticket, response.into_result().map_err(|e| e.to_string()));

        assert_eq!(totals, None);
        assert!(!model.loading);
        assert_eq!(model.error.as_deref(), Some("Kho đang bảo trì"));
        assert_eq!(model.summary, Some(summary(&[1, 2])));
    }

    #[test]
    fn test_totals_emitted_once_per_success() {
        let mut model = ExportSummaryModel::new();
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 10));
        let ticket = model.begin_fetch(range, today()).unwrap();

        let totals = model.complete(ticket, Ok(summary(&[1, 2, 3])));
        assert_eq!(
            totals,
            Some(ExportTotals {
                total_exports: 3,
                total_quantity: 30.0,
                total_amount: 300_000.0,
            })
        );

        // The same ticket delivered twice must not emit again
        assert_eq!(model.complete(ticket, Ok(summary(&[1, 2, 3]))), None);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut model = ExportSummaryModel::new();
        let old = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 5)), today())
            .unwrap();
        let new = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 10)), today())
            .unwrap();

        assert_eq!(model.complete(new, Ok(summary(&[7, 8]))), Some(summary(&[7, 8]).totals()));
        assert_eq!(model.complete(old, Ok(summary(&[1]))), None);
        assert_eq!(model.summary, Some(summary(&[7, 8])));
        assert_eq!(
            model.loaded_range,
            Some(DateRange::new(d(2024, 3, 1), d(2024, 3, 10)))
        );
    }

    #[test]
    fn test_invalid_range_cancels_in_flight_request() {
        let mut model = ExportSummaryModel::new();
        let pending = model
            .begin_fetch(DateRange::new(d(2024, 3, 1), d(2024, 3, 5)), today())
            .unwrap();
        model.reject(DateRangeError::InvalidDate);

        assert_eq!(model.complete(pending, Ok(summary(&[1]))), None);
        assert!(model.summary.is_none());
        assert_eq!(model.error.as_deref(), Some("Ngày không hợp lệ"));
        assert!(!model.loading);
    }
}
