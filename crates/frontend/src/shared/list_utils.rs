/// Sorting helpers shared by table headers
use contracts::dashboards::d402_export_summary::{SortField, SortState};

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: SortState, field: SortField) -> &'static str {
    if sort.field == field {
        if sort.ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator (active column is highlighted)
pub fn get_sort_class(sort: SortState, field: SortField) -> &'static str {
    if sort.field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
