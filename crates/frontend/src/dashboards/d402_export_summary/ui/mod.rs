mod chart;
mod skeleton;
mod summary_cards;
mod table;
mod widget;

pub use chart::{ChartGeometry, ExportChart};
pub use widget::ExportSummaryWidget;
