use super::chart::ExportChart;
use super::skeleton::ExportSummarySkeleton;
use super::summary_cards::SummaryCards;
use super::table::ExportTable;
use crate::dashboards::d402_export_summary::api;
use crate::dashboards::d402_export_summary::model::ExportSummaryModel;
use crate::dashboards::d402_export_summary::state::{load_state, save_state, PersistedState};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::dashboards::d402_export_summary::{
    chart_series, table_rows, DateRange, ExportTotals, SortField,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const WIDGET_CSS: &str = "
@keyframes card-appear {
    from { opacity: 0; transform: translateY(6px); }
    to { opacity: 1; transform: none; }
}
@keyframes skeleton-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.45; }
}
.export-summary { display: flex; flex-direction: column; gap: 16px; }
.export-summary__header { display: flex; justify-content: space-between; align-items: flex-end; flex-wrap: wrap; gap: 12px; }
.export-summary__title { margin: 0; font-size: 1.25rem; font-weight: 600; }
.export-summary__cards { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 12px; }
.stat-card { display: flex; gap: 12px; align-items: center; padding: 8px 4px; }
.stat-card__icon { color: var(--colorBrandForeground1, #2563eb); }
.stat-card__label { font-size: 0.8rem; color: var(--colorNeutralForeground3, #6b7280); }
.stat-card__value { font-size: 1.35rem; font-weight: 600; font-variant-numeric: tabular-nums; }
.stat-card__subtitle { font-size: 0.75rem; color: var(--colorNeutralForeground3, #6b7280); }
.card__title { font-weight: 600; margin-bottom: 8px; }
.export-chart__legend { display: flex; gap: 16px; align-items: center; font-size: 0.85rem; margin-bottom: 8px; flex-wrap: wrap; }
.export-chart__legend-item { display: inline-flex; align-items: center; gap: 6px; }
.export-chart__swatch { width: 12px; height: 3px; display: inline-block; }
.export-chart__hint { margin-left: auto; color: var(--colorNeutralForeground2, #374151); }
.export-chart__point { cursor: pointer; }
.export-chart__empty, .export-table__empty { padding: 24px; text-align: center; color: var(--colorNeutralForeground3, #6b7280); }
.export-table__totals { background: var(--colorNeutralBackground3, #f5f5f5); }
.table__sortable-header { user-select: none; gap: 4px; }
.sort-icon { color: var(--colorNeutralForeground4, #9ca3af); }
.sort-icon.active { color: var(--colorBrandForeground1, #2563eb); }
.text-right { text-align: right; }
.alert--error { padding: 8px 12px; border-radius: 4px; background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; }
.export-summary__skeleton { display: flex; flex-direction: column; gap: 12px; }
.export-summary__skeleton-cards { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 12px; }
.skeleton-block { background: var(--colorNeutralBackground4, #e5e7eb); border-radius: 6px; animation: skeleton-pulse 1.4s ease-in-out infinite; }
.skeleton-block--card { height: 72px; }
.skeleton-block--chart { height: 260px; }
.skeleton-block--row { height: 28px; }
";

/// Warehouse export summary for a selectable date range.
///
/// Loads whenever the range changes or the reload button is pressed and
/// reports the range totals to `on_data_change` after each successful load.
#[component]
pub fn ExportSummaryWidget(
    /// Receives the totals of every newly loaded summary
    #[prop(optional)]
    on_data_change: Option<Callback<ExportTotals>>,
) -> impl IntoView {
    let initial = load_state(Local::now().date_naive());
    let date_from = RwSignal::new(initial.date_from);
    let date_to = RwSignal::new(initial.date_to);
    let sort = RwSignal::new(initial.sort);
    let model = RwSignal::new(ExportSummaryModel::new());

    let persist = move || {
        save_state(&PersistedState {
            date_from: date_from.get_untracked(),
            date_to: date_to.get_untracked(),
            sort: sort.get_untracked(),
        });
    };

    let load = move || {
        let today = Local::now().date_naive();
        let range = match DateRange::parse(&date_from.get_untracked(), &date_to.get_untracked()) {
            Ok(range) => range,
            Err(err) => {
                log::warn!("Export summary range rejected: {}", err);
                model.update(|m| m.reject(err));
                return;
            }
        };

        let ticket = match model.try_update(|m| m.begin_fetch(range, today)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                log::warn!("Export summary range {}..{} rejected: {}", range.from, range.to, err);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            log::debug!("Loading export summary {}..{}", ticket.range.from, ticket.range.to);
            let result = api::get_export_summary(&ticket.range).await;
            if let Err(e) = &result {
                log::error!("Failed to load export summary: {}", e);
            }

            let totals = model.try_update(|m| m.complete(ticket, result)).flatten();
            if let (Some(totals), Some(callback)) = (totals, on_data_change) {
                callback.run(totals);
            }
        });
    };

    // Reload on every range change, including the initial one
    Effect::new(move |_| {
        date_from.track();
        date_to.track();
        load();
    });

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
        persist();
    });

    let on_sort = Callback::new(move |field: SortField| {
        sort.update(|s| s.toggle(field));
        persist();
    });

    let is_loading = Signal::derive(move || model.with(|m| m.loading));
    let has_summary = move || model.with(|m| m.summary.is_some());

    let rows = Memo::new(move |_| {
        let sort = sort.get();
        model.with(|m| {
            m.summary
                .as_ref()
                .map(|s| table_rows(s, sort))
                .unwrap_or_default()
        })
    });
    let series = Memo::new(move |_| {
        model.with(|m| m.summary.as_ref().map(chart_series).unwrap_or_default())
    });
    let totals = Signal::derive(move || model.with(|m| m.summary.as_ref().map(|s| s.totals())));
    let period = Signal::derive(move || {
        model.with(|m| {
            m.loaded_range
                .map(|r| format!("{} - {}", format_date(r.from), format_date(r.to)))
        })
    });

    view! {
        <style>{WIDGET_CSS}</style>
        <div id="d402_export_summary--widget" class="export-summary">
            <div class="export-summary__header">
                <h2 class="export-summary__title">"Tổng quan xuất kho"</h2>
                <Flex align=FlexAlign::End gap=FlexGap::Medium>
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range_change
                        label="Khoảng thời gian:".to_string()
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Đang tải..." } else { " Tải lại" }}
                    </Button>
                </Flex>
            </div>

            {move || {
                model.with(|m| m.error.clone()).map(|e| view! {
                    <div class="alert alert--error" role="alert">
                        {format!("Lỗi: {}", e)}
                    </div>
                })
            }}

            <Show when=move || model.with(|m| m.shows_skeleton())>
                <ExportSummarySkeleton />
            </Show>

            <Show when=has_summary>
                <CardAnimated delay_ms=0>
                    <SummaryCards
                        totals=totals
                        period=period
                    />
                </CardAnimated>

                <CardAnimated delay_ms=80 title="Biểu đồ xuất kho theo ngày">
                    <ExportChart series=series />
                </CardAnimated>

                <CardAnimated delay_ms=160 title="Chi tiết theo ngày">
                    <ExportTable
                        rows=rows
                        totals=Signal::derive(move || totals.get().unwrap_or_default())
                        sort=sort
                        on_sort=on_sort
                    />
                </CardAnimated>
            </Show>
        </div>
    }
}
