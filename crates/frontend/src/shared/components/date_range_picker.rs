use chrono::{Local, NaiveDate};
use contracts::dashboards::d402_export_summary::DateRange;
use leptos::prelude::*;
use thaw::*;

/// Two native date inputs plus quick period buttons.
///
/// Values are passed around as yyyy-mm-dd strings, exactly what
/// `<input type="date">` produces. The picker does not validate: an invalid
/// combination is reported by the consumer.
#[component]
pub fn DateRangePicker(
    /// Start date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// End date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Called with (from, to) whenever either side changes
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let today = move || Local::now().date_naive();

    let emit = move |range: DateRange| {
        on_change.run((range.from_input(), range.to_input()));
    };

    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    // Steps back one month from the currently selected start date
    let on_previous_month = move |_| {
        let anchor = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d")
            .unwrap_or_else(|_| today());
        emit(DateRange::previous_month(anchor));
    };

    let on_month_to_date = move |_| emit(DateRange::month_to_date(today()));

    let on_last_30_days = move |_| emit(DateRange::last_days(today(), 30));

    let max_date = move || today().format("%Y-%m-%d").to_string();

    view! {
        <style>
            "
            .date-range-picker {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                height: 32px;
                padding: 0 4px;
            }
            .date-range-picker:focus-within {
                border-color: var(--colorBrandStroke1, #3b82f6);
                box-shadow: 0 0 0 2px var(--colorBrandStroke2, rgba(59, 130, 246, 0.20));
            }
            .date-range-picker input[type=\"date\"] {
                border: none;
                background: transparent;
                font-size: 0.875rem;
                width: 130px;
                cursor: pointer;
            }
            .date-range-picker input[type=\"date\"]:focus {
                outline: none;
            }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                    <input
                        type="date"
                        aria-label="Từ ngày"
                        prop:value=date_from
                        prop:max=max_date
                        on:input=move |ev| on_from_change(event_target_value(&ev))
                    />
                    <div>"—"</div>
                    <input
                        type="date"
                        aria-label="Đến ngày"
                        prop:value=date_to
                        prop:max=max_date
                        on:input=move |ev| on_to_change(event_target_value(&ev))
                    />
                </Flex>

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_previous_month
                    >
                        "Tháng trước"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_month_to_date
                    >
                        "Tháng này"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=on_last_30_days
                    >
                        "30 ngày"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
