//! # calc_core - Steel Structure Estimation Engine
//!
//! `calc_core` is the computational heart of StructCalc: it estimates the
//! weight and cost of metal structural elements from a fixed table of
//! standard profile weights (kg/m).
//!
//! ## Design Philosophy
//!
//! - **Fail soft**: Estimate operations never error. Lookup misses weigh 0,
//!   bad numbers become 0, unknown ids are ignored.
//! - **Always current**: Element weights are recomputed on every change and
//!   totals are derived on read.
//! - **JSON-Friendly**: Elements, summaries and settings serialize with serde.
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::estimate::{ElementField, Estimate};
//!
//! let mut estimate = Estimate::new();
//! let id = estimate.add_element(); // IPR 100x50, 1 m, 1 pc
//! estimate.update_element(id, ElementField::Quantity(4));
//!
//! let report = estimate.generate_report();
//! assert!(report.contents.contains("1. IPR 100x50 - 1m x4 = 38.6kg"));
//! ```
//!
//! ## Modules
//!
//! - [`profiles`] - Reference table of profile weights
//! - [`estimate`] - Element list, updates and totals
//! - [`input`] - Lenient parsing for form fields
//! - [`format`] - Weight, length and money formatting
//! - [`report`] - Text report generation and saving
//! - [`settings`] - Estimator defaults
//! - [`errors`] - Structured error types

pub mod errors;
pub mod estimate;
pub mod format;
pub mod input;
pub mod profiles;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use estimate::{Element, ElementField, Estimate, EstimateSummary, Totals};
pub use profiles::{reference_table, ReferenceTable};
pub use report::{save_report, save_report_as, Report};
pub use settings::EstimatorSettings;
pub use uuid::Uuid;
