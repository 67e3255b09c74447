//! UI module for StructCalc GUI
//!
//! # Layout
//! - `toolbar` - Title, "add element" button, unit price input
//! - `element_rows` - One editable row per element
//! - `summary_panel` - Element count, total weight, cost, report download
//! - `empty_state` - Shown while the list is empty
//! - `status_bar` - Bottom status messages

pub mod element_rows;
pub mod empty_state;
pub mod status_bar;
pub mod summary_panel;
pub mod toolbar;
