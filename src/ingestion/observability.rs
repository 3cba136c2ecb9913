use std::path::PathBuf;

use crate::error::PipelineError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (run failed).
    Error,
    /// Critical error (missing input or other I/O failures).
    Critical,
}

impl PipelineSeverity {
    /// Severity assigned to a failed run.
    pub fn for_error(e: &PipelineError) -> Self {
        match e {
            PipelineError::FileNotFound { .. } | PipelineError::Io(_) => PipelineSeverity::Critical,
            PipelineError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => PipelineSeverity::Critical,
                _ => PipelineSeverity::Error,
            },
            PipelineError::MissingColumns { .. }
            | PipelineError::EmptyInput { .. }
            | PipelineError::Serialize(_) => PipelineSeverity::Error,
        }
    }
}

/// Context about a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The input path.
    pub path: PathBuf,
}

/// Counters reported as the run progresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Rows read from the input.
    pub rows_loaded: usize,
    /// Rows dropped because the measure or key was missing.
    pub rows_dropped: usize,
    /// Distinct categories in the result.
    pub groups: usize,
}

/// Observer interface for pipeline outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PipelineObserver: Send + Sync {
    /// Called after the input has been loaded.
    fn on_loaded(&self, _ctx: &PipelineContext, _rows: usize) {}

    /// Called after cleaning, with the number of kept and dropped rows.
    fn on_cleaned(&self, _ctx: &PipelineContext, _kept: usize, _dropped: usize) {}

    /// Called when the run produced an aggregated result.
    fn on_success(&self, _ctx: &PipelineContext, _stats: PipelineStats) {}

    /// Called when the run fails.
    fn on_failure(&self, _ctx: &PipelineContext, _severity: PipelineSeverity, _error: &PipelineError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Emits pipeline events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_loaded(&self, ctx: &PipelineContext, rows: usize) {
        tracing::info!(path = %ctx.path.display(), rows, "input loaded");
    }

    fn on_cleaned(&self, ctx: &PipelineContext, kept: usize, dropped: usize) {
        if dropped > 0 {
            tracing::warn!(path = %ctx.path.display(), kept, dropped, "dropped rows with missing values");
        } else {
            tracing::info!(path = %ctx.path.display(), kept, "all rows kept");
        }
    }

    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        tracing::info!(
            path = %ctx.path.display(),
            rows_loaded = stats.rows_loaded,
            rows_dropped = stats.rows_dropped,
            groups = stats.groups,
            "aggregation finished"
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        tracing::error!(path = %ctx.path.display(), ?severity, kind = ?error.kind(), %error, "pipeline failed");
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        tracing::error!(alert = true, path = %ctx.path.display(), ?severity, %error, "pipeline alert");
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineSeverity;
    use crate::error::PipelineError;

    #[test]
    fn missing_file_is_critical() {
        let e = PipelineError::FileNotFound { path: "x.csv".into() };
        assert_eq!(PipelineSeverity::for_error(&e), PipelineSeverity::Critical);
    }

    #[test]
    fn schema_problems_are_errors() {
        let e = PipelineError::MissingColumns { missing: vec!["Value".to_string()] };
        assert_eq!(PipelineSeverity::for_error(&e), PipelineSeverity::Error);
        assert!(PipelineSeverity::Error < PipelineSeverity::Critical);
    }
}
