//! `category-totals` loads a delimited text table, checks that it has a category column and a
//! numeric measure column, drops rows whose measure is not a number, and sums the measure per
//! category. The result (or a structured error) is rendered as exactly one JSON document.
//!
//! The primary entrypoint is [`pipeline::run`], or [`pipeline::run_to_json`] when you want the
//! rendered document directly.
//!
//! ## Output shape
//!
//! On success, an array with one object per category, in first-occurrence order:
//!
//! ```text
//! [{"Category":"A","Value":15},{"Category":"B","Value":3}]
//! ```
//!
//! On failure, a single error object whose `error` is one of `FileNotFound`, `MissingColumns` or
//! `UnexpectedError`:
//!
//! ```text
//! {"error":"MissingColumns","message":"Missing required columns: Value"}
//! ```
//!
//! ## Quick example
//!
//! ```no_run
//! use category_totals::pipeline::{run_to_json, PipelineOptions};
//!
//! let (outcome, json) = run_to_json("data/data.csv", &PipelineOptions::default(), false);
//! println!("{json}");
//! assert!(outcome.is_success() || json.contains("\"error\""));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: the delimited-text loader and observer hooks
//! - [`processing`]: validation, numeric coercion/cleaning, aggregation
//! - [`pipeline`]: options, the end-to-end run and JSON rendering
//! - [`types`]: table and result types
//! - [`error`]: error types and the error report

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{ErrorKind, ErrorReport, PipelineError, PipelineResult};
