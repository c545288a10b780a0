use crate::shared::components::table::{format_money, format_number_int, format_quantity};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a card renders its number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Integer,
    Quantity,
    Money,
}

fn format_value(val: f64, fmt: StatFormat) -> String {
    match fmt {
        StatFormat::Integer => format_number_int(val),
        StatFormat::Quantity => format_quantity(val),
        StatFormat::Money => format_money(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: StatFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1250.0, StatFormat::Integer), "1.250");
        assert_eq!(format_value(19.5, StatFormat::Quantity), "19,5");
        assert_eq!(format_value(1_550_000.0, StatFormat::Money), "1.550.000 ₫");
    }
}
