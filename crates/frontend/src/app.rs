use crate::dashboards::ExportSummaryWidget;
use crate::shared::components::table::{format_money, format_number_int};
use contracts::dashboards::d402_export_summary::ExportTotals;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Totals reported by the widget, shown in the page header
    let latest_totals = RwSignal::new(None::<ExportTotals>);

    let on_data_change = Callback::new(move |totals: ExportTotals| {
        log::info!(
            "Export summary updated: {} documents, amount {}",
            totals.total_exports,
            totals.total_amount
        );
        latest_totals.set(Some(totals));
    });

    view! {
        <ConfigProvider>
            <div class="app-page" style="padding: 16px 24px; max-width: 1280px; margin: 0 auto;">
                <header class="app-page__header" style="display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 16px;">
                    <h1 style="margin: 0; font-size: 1.5rem;">"Quản lý kho"</h1>
                    {move || latest_totals.get().map(|t| view! {
                        <span class="app-page__totals" style="color: #4b5563;">
                            {format!(
                                "{} phiếu xuất · {}",
                                format_number_int(t.total_exports as f64),
                                format_money(t.total_amount)
                            )}
                        </span>
                    })}
                </header>
                <main>
                    <ExportSummaryWidget on_data_change=on_data_change />
                </main>
            </div>
        </ConfigProvider>
    }
}
