pub mod api;
pub mod model;
pub mod state;
pub mod ui;
