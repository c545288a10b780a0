use crate::shared::components::stat_card::{StatCard, StatFormat};
use contracts::dashboards::d402_export_summary::ExportTotals;
use leptos::prelude::*;

/// Range totals as three cards
#[component]
pub fn SummaryCards(
    #[prop(into)]
    totals: Signal<Option<ExportTotals>>,
    /// Human readable period, e.g. "01/03/2024 - 15/03/2024"
    #[prop(into)]
    period: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="export-summary__cards">
            <StatCard
                label="Số phiếu xuất"
                icon_name="export-docs"
                value=Signal::derive(move || totals.get().map(|t| t.total_exports as f64))
                format=StatFormat::Integer
                subtitle=period
            />
            <StatCard
                label="Tổng số lượng"
                icon_name="quantity"
                value=Signal::derive(move || totals.get().map(|t| t.total_quantity))
                format=StatFormat::Quantity
            />
            <StatCard
                label="Tổng giá trị"
                icon_name="amount"
                value=Signal::derive(move || totals.get().map(|t| t.total_amount))
                format=StatFormat::Money
            />
        </div>
    }
}
