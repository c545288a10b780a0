//! Sortable table header cell
//!
//! # Example
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Thành tiền"
//!     field=SortField::Amount
//!     sort=Signal::derive(move || sort.get())
//!     on_sort=Callback::new(move |field| sort.update(|s| s.toggle(field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::dashboards::d402_export_summary::{SortField, SortState};
use leptos::prelude::*;
use thaw::*;

/// Header cell with a sort indicator (▲▼⇅) that reports clicks to `on_sort`
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Column this header sorts by
    field: SortField,

    /// Current sort state of the table
    #[prop(into)]
    sort: Signal<SortState>,

    /// Called with `field` on click
    on_sort: Callback<SortField>,

    /// Minimal column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; display: flex; justify-content: flex-end; width: 100%;"
    } else {
        "cursor: pointer; display: flex; width: 100%;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                data-sort-key=field.key()
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || get_sort_class(sort.get(), field)>
                    {move || get_sort_indicator(sort.get(), field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
