//! Loading and run observability.
//!
//! - [`csv`]: reads a delimited text file into an in-memory [`crate::types::Table`]
//! - [`observability`]: observer hooks reporting load/clean/success/failure events

pub mod csv;
pub mod observability;

pub use self::csv::{load_table_from_path, load_table_from_reader};
pub use observability::{
    PipelineContext, PipelineObserver, PipelineSeverity, PipelineStats, TracingObserver,
};
