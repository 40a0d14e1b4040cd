// src/components/mod.rs
pub mod action_sheet;
pub mod error_panel;
pub mod progress_bar;
pub mod tooltip;
pub mod viewer;
