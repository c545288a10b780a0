//! Daily line chart with two Y axes: quantity on the left, amount on the right.
//!
//! Geometry is computed in plain Rust and rendered as inline SVG.

use crate::shared::components::table::{format_compact, format_money, format_quantity};
use crate::shared::date_utils::{format_date, format_day_month};
use contracts::dashboards::d402_export_summary::DailyExportSummary;
use leptos::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 72.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const TICK_COUNT: usize = 4;
const MAX_X_LABELS: usize = 8;

const QUANTITY_COLOR: &str = "#2563eb";
const AMOUNT_COLOR: &str = "#16a34a";

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y_quantity: f64,
    pub y_amount: f64,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub x_labels: Vec<(f64, String)>,
    pub quantity_ticks: Vec<AxisTick>,
    pub amount_ticks: Vec<AxisTick>,
}

impl ChartGeometry {
    /// Lay out `series`, which must already be ordered oldest first.
    pub fn build(series: &[DailyExportSummary]) -> Self {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        let quantity_max = nice_max(series.iter().map(|p| p.total_quantity).fold(0.0, f64::max));
        let amount_max = nice_max(series.iter().map(|p| p.total_amount).fold(0.0, f64::max));

        let x_at = |i: usize| {
            if series.len() <= 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + plot_width * i as f64 / (series.len() - 1) as f64
            }
        };
        let y_at = |value: f64, max: f64| {
            MARGIN_TOP + plot_height * (1.0 - (value.max(0.0) / max).min(1.0))
        };

        let points = series
            .iter()
            .enumerate()
            .map(|(i, p)| ChartPoint {
                x: x_at(i),
                y_quantity: y_at(p.total_quantity, quantity_max),
                y_amount: y_at(p.total_amount, amount_max),
                hint: format!(
                    "{}: {} / {}",
                    format_date(p.date),
                    format_quantity(p.total_quantity),
                    format_money(p.total_amount)
                ),
            })
            .collect();

        let step = series.len().div_ceil(MAX_X_LABELS).max(1);
        let x_labels = series
            .iter()
            .enumerate()
            .filter(|(i, _)| i % step == 0)
            .map(|(i, p)| (x_at(i), format_day_month(p.date)))
            .collect();

        let ticks = |max: f64| {
            (0..=TICK_COUNT)
                .map(|i| {
                    let value = max * i as f64 / TICK_COUNT as f64;
                    AxisTick {
                        y: y_at(value, max),
                        label: format_compact(value),
                    }
                })
                .collect::<Vec<_>>()
        };

        Self {
            points,
            x_labels,
            quantity_ticks: ticks(quantity_max),
            amount_ticks: ticks(amount_max),
        }
    }

    pub fn quantity_polyline(&self) -> String {
        polyline(self.points.iter().map(|p| (p.x, p.y_quantity)))
    }

    pub fn amount_polyline(&self) -> String {
        polyline(self.points.iter().map(|p| (p.x, p.y_amount)))
    }
}

/// Round the axis maximum up to 1, 2 or 5 times a power of ten.
fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn polyline(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ExportChart(
    /// Daily records, oldest first
    #[prop(into)]
    series: Signal<Vec<DailyExportSummary>>,
) -> impl IntoView {
    let geometry = Memo::new(move |_| ChartGeometry::build(&series.get()));
    let hovered = RwSignal::new(None::<String>);

    view! {
        <div class="export-chart">
            <div class="export-chart__legend">
                <span class="export-chart__legend-item">
                    <span class="export-chart__swatch" style=format!("background: {};", QUANTITY_COLOR)></span>
                    "Số lượng"
                </span>
                <span class="export-chart__legend-item">
                    <span class="export-chart__swatch" style=format!("background: {};", AMOUNT_COLOR)></span>
                    "Thành tiền (₫)"
                </span>
                {move || hovered.get().map(|hint| view! {
                    <span class="export-chart__hint">{hint}</span>
                })}
            </div>

            {move || {
                let g = geometry.get();
                if g.points.is_empty() {
                    return view! {
                        <div class="export-chart__empty">"Không có dữ liệu để hiển thị biểu đồ"</div>
                    }.into_any();
                }

                let grid = g.quantity_ticks.iter().map(|t| {
                    let y = format!("{:.1}", t.y);
                    view! {
                        <line
                            x1=format!("{:.1}", MARGIN_LEFT)
                            x2=format!("{:.1}", WIDTH - MARGIN_RIGHT)
                            y1=y.clone()
                            y2=y
                            stroke="#e5e7eb"
                            stroke-width="1"
                        />
                    }
                }).collect_view();

                let left_labels = g.quantity_ticks.iter().map(|t| view! {
                    <text
                        x=format!("{:.1}", MARGIN_LEFT - 8.0)
                        y=format!("{:.1}", t.y + 4.0)
                        text-anchor="end"
                        font-size="11"
                        fill=QUANTITY_COLOR
                    >
                        {t.label.clone()}
                    </text>
                }).collect_view();

                let right_labels = g.amount_ticks.iter().map(|t| view! {
                    <text
                        x=format!("{:.1}", WIDTH - MARGIN_RIGHT + 8.0)
                        y=format!("{:.1}", t.y + 4.0)
                        text-anchor="start"
                        font-size="11"
                        fill=AMOUNT_COLOR
                    >
                        {t.label.clone()}
                    </text>
                }).collect_view();

                let x_labels = g.x_labels.iter().map(|(x, label)| view! {
                    <text
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", HEIGHT - 10.0)
                        text-anchor="middle"
                        font-size="11"
                        fill="#6b7280"
                    >
                        {label.clone()}
                    </text>
                }).collect_view();

                let markers = g.points.iter().map(|p| {
                    let x = format!("{:.1}", p.x);
                    let hint = p.hint.clone();
                    view! {
                        <g
                            class="export-chart__point"
                            on:mouseenter=move |_| hovered.set(Some(hint.clone()))
                            on:mouseleave=move |_| hovered.set(None)
                        >
                            <circle cx=x.clone() cy=format!("{:.1}", p.y_quantity) r="4" fill=QUANTITY_COLOR />
                            <circle cx=x cy=format!("{:.1}", p.y_amount) r="4" fill=AMOUNT_COLOR />
                        </g>
                    }
                }).collect_view();

                view! {
                    <svg
                        viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                        width="100%"
                        preserveAspectRatio="xMidYMid meet"
                        role="img"
                        aria-label="Biểu đồ xuất kho theo ngày"
                    >
                        {grid}
                        {left_labels}
                        {right_labels}
                        {x_labels}
                        <polyline
                            points=g.quantity_polyline()
                            fill="none"
                            stroke=QUANTITY_COLOR
                            stroke-width="2"
                        />
                        <polyline
                            points=g.amount_polyline()
                            fill="none"
                            stroke=AMOUNT_COLOR
                            stroke-width="2"
                        />
                        {markers}
                    </svg>
                }.into_any()
            }}
        </div>
    }
}
