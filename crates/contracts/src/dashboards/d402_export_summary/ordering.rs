use super::dto::{DailyExportSummary, WarehouseExportSummary};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable columns of the daily table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Date,
    Exports,
    Quantity,
    Amount,
}

impl SortField {
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Exports => "exports",
            SortField::Quantity => "quantity",
            SortField::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortState {
    /// Newest day first
    fn default() -> Self {
        Self {
            field: SortField::Date,
            ascending: false,
        }
    }
}

impl SortState {
    /// Header click: flip the direction of the active column, or switch to a
    /// new column starting with the largest values.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = false;
        }
    }
}

fn compare_by_field(a: &DailyExportSummary, b: &DailyExportSummary, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Exports => a.total_exports.cmp(&b.total_exports),
        SortField::Quantity => a.total_quantity.total_cmp(&b.total_quantity),
        SortField::Amount => a.total_amount.total_cmp(&b.total_amount),
    }
}

/// Rows of the daily table in display order.
///
/// Equal values keep the newest day on top regardless of direction.
pub fn table_rows(summary: &WarehouseExportSummary, sort: SortState) -> Vec<DailyExportSummary> {
    let mut rows = summary.daily_summaries.clone();
    rows.sort_by(|a, b| {
        let cmp = compare_by_field(a, b, sort.field);
        let cmp = if sort.ascending { cmp } else { cmp.reverse() };
        cmp.then_with(|| b.date.cmp(&a.date))
    });
    rows
}

/// Points of the chart, oldest day first.
pub fn chart_series(summary: &WarehouseExportSummary) -> Vec<DailyExportSummary> {
    let mut points = summary.daily_summaries.clone();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}
