pub mod d402_export_summary;
