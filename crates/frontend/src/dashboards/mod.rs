pub mod d402_export_summary;

pub use d402_export_summary::ui::ExportSummaryWidget;
