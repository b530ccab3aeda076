pub mod ai;
pub mod types;
pub mod ui;
pub mod views;
