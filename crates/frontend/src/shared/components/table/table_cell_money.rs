//! Table cell for amounts in đồng
//!
//! # Example
//!
//! ```rust,ignore
//! <TableCellMoney value=row.total_amount />
//! <TableCellMoney value=totals.total_amount bold=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned amount with thousands grouping and the ₫ suffix
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    /// Bold font (totals row)
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let cell_style = if bold {
        "font-weight: 600; font-variant-numeric: tabular-nums;"
    } else {
        "font-variant-numeric: tabular-nums;"
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {move || format_money(value.get())}
            </span>
        </TableCell>
    }
}
