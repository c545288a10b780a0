use leptos::prelude::*;

/// Placeholder shown until the first summary arrives
#[component]
pub fn ExportSummarySkeleton() -> impl IntoView {
    view! {
        <div class="export-summary__skeleton" aria-busy="true" aria-label="Đang tải dữ liệu">
            <div class="export-summary__skeleton-cards">
                {(0..3).map(|_| view! { <div class="skeleton-block skeleton-block--card"></div> }).collect_view()}
            </div>
            <div class="skeleton-block skeleton-block--chart"></div>
            {(0..5).map(|_| view! { <div class="skeleton-block skeleton-block--row"></div> }).collect_view()}
        </div>
    }
}
