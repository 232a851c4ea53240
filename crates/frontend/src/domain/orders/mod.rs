pub mod api;
pub mod filters;
pub mod ui;
