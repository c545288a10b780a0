use crate::shared::components::table::{
    format_number_int, format_quantity, SortableHeaderCell, TableCellMoney,
};
use crate::shared::date_utils::{format_date, format_month_year};
use contracts::dashboards::d402_export_summary::{
    DailyExportSummary, ExportTotals, SortField, SortState,
};
use leptos::prelude::*;
use thaw::*;

/// Daily breakdown with sortable headers and a totals row
#[component]
pub fn ExportTable(
    /// Rows in display order
    #[prop(into)]
    rows: Signal<Vec<DailyExportSummary>>,
    /// Range totals as reported by the server
    #[prop(into)]
    totals: Signal<ExportTotals>,
    #[prop(into)]
    sort: Signal<SortState>,
    on_sort: Callback<SortField>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="Ngày" field=SortField::Date sort=sort on_sort=on_sort min_width=110.0 />
                        <TableHeaderCell min_width=90.0>"Tháng"</TableHeaderCell>
                        <SortableHeaderCell label="Số phiếu xuất" field=SortField::Exports sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Số lượng" field=SortField::Quantity sort=sort on_sort=on_sort align="right" />
                        <SortableHeaderCell label="Thành tiền" field=SortField::Amount sort=sort on_sort=on_sort align="right" min_width=140.0 />
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="5">
                                        <div class="export-table__empty">
                                            "Không có dữ liệu xuất kho trong khoảng thời gian đã chọn"
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }

                        rows.into_iter().map(|row| {
                            let (month, year) = row.month_year();
                            view! {
                            <TableRow>
                                <TableCell>{format_date(row.date)}</TableCell>
                                <TableCell>{format_month_year(month, year)}</TableCell>
                                <TableCell class="text-right">{format_number_int(row.total_exports as f64)}</TableCell>
                                <TableCell class="text-right">{format_quantity(row.total_quantity)}</TableCell>
                                <TableCellMoney value=row.total_amount />
                            </TableRow>
                            }
                        }).collect_view().into_any()
                    }}

                    <TableRow class:export-table__totals=true>
                        <TableCell><strong>"Tổng cộng"</strong></TableCell>
                        <TableCell>""</TableCell>
                        <TableCell class="text-right">
                            <strong>{move || format_number_int(totals.get().total_exports as f64)}</strong>
                        </TableCell>
                        <TableCell class="text-right">
                            <strong>{move || format_quantity(totals.get().total_quantity)}</strong>
                        </TableCell>
                        <TableCellMoney value=Signal::derive(move || totals.get().total_amount) bold=true />
                    </TableRow>
                </TableBody>
            </Table>
        </div>
    }
}
