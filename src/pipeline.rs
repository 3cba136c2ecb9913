//! The end-to-end run: load → validate → clean → aggregate → render.
//!
//! [`run`] threads a [`PipelineResult`] through every stage; the first failure short-circuits the
//! rest. [`Outcome`] is what gets written out: either the aggregated entries or an
//! [`ErrorReport`], never both.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{ErrorReport, PipelineResult};
use crate::ingestion::{
    load_table_from_path, PipelineContext, PipelineObserver, PipelineSeverity, PipelineStats,
};
use crate::processing::{aggregate_by_category, clean_rows, validate_required_columns, OutputOrder};
use crate::types::AggregateEntry;

/// Conventional input location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/data.csv";

/// Options controlling a pipeline run.
///
/// Use [`Default`] for the standard `Category`/`Value` comma-separated layout.
#[derive(Clone)]
pub struct PipelineOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Name of the grouping column.
    pub category_column: String,
    /// Name of the numeric measure column.
    pub value_column: String,
    /// Ordering of the aggregated entries.
    pub order: OutputOrder,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PipelineSeverity,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("category_column", &self.category_column)
            .field("value_column", &self.value_column)
            .field("order", &self.order)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            category_column: "Category".to_string(),
            value_column: "Value".to_string(),
            order: OutputOrder::default(),
            observer: None,
            alert_at_or_above: PipelineSeverity::Critical,
        }
    }
}

/// Aggregated entries, serialized as `[{"<category_column>": .., "<value_column>": ..}, ..]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub category_column: String,
    pub value_column: String,
    pub entries: Vec<AggregateEntry>,
}

/// What a run produces: aggregated totals or an error report.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Totals(Totals),
    Failed(ErrorReport),
}

impl Outcome {
    pub fn from_result(result: &PipelineResult<Totals>) -> Self {
        match result {
            Ok(totals) => Outcome::Totals(totals.clone()),
            Err(e) => Outcome::Failed(ErrorReport::from(e)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Totals(_))
    }
}

/// Run the pipeline over the file at `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_loaded` / `on_cleaned` as the stages complete
/// - `on_success` with row/group stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn run(path: impl AsRef<Path>, options: &PipelineOptions) -> PipelineResult<Totals> {
    let ctx = PipelineContext {
        path: path.as_ref().to_path_buf(),
    };

    let result = run_stages(&ctx, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => obs.on_success(&ctx, *stats),
            Err(e) => {
                let sev = PipelineSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(totals, _)| totals)
}

fn run_stages(ctx: &PipelineContext, options: &PipelineOptions) -> PipelineResult<(Totals, PipelineStats)> {
    let observer = options.observer.as_deref();

    let table = load_table_from_path(&ctx.path, options.delimiter)?;
    if let Some(obs) = observer {
        obs.on_loaded(ctx, table.row_count());
    }

    let idx = validate_required_columns(&table, &options.category_column, &options.value_column)?;

    let cleaned = clean_rows(&table, idx);
    if let Some(obs) = observer {
        obs.on_cleaned(ctx, cleaned.rows.len(), cleaned.dropped);
    }

    let entries = aggregate_by_category(&cleaned.rows, options.order);
    let stats = PipelineStats {
        rows_loaded: table.row_count(),
        rows_dropped: cleaned.dropped,
        groups: entries.len(),
    };

    Ok((
        Totals {
            category_column: options.category_column.clone(),
            value_column: options.value_column.clone(),
            entries,
        },
        stats,
    ))
}

/// Run the pipeline and render its outcome as a single JSON document.
pub fn run_to_json(path: impl AsRef<Path>, options: &PipelineOptions, pretty: bool) -> (Outcome, String) {
    let outcome = Outcome::from_result(&run(path, options));
    let json = render_json(&outcome, pretty);
    (outcome, json)
}

/// Render an outcome as JSON.
///
/// Never fails: an encoding error (e.g. a non-finite total) is rendered as an `UnexpectedError`
/// report instead.
pub fn render_json(outcome: &Outcome, pretty: bool) -> String {
    match encode(outcome, pretty) {
        Ok(json) => json,
        Err(e) => {
            let report = ErrorReport::from(&e);
            encode(&report, pretty).unwrap_or_else(|_| FALLBACK_REPORT.to_string())
        }
    }
}

const FALLBACK_REPORT: &str =
    r#"{"error":"UnexpectedError","message":"failed to encode error report"}"#;

fn encode<T: Serialize>(value: &T, pretty: bool) -> PipelineResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Totals(totals) => totals.serialize(serializer),
            Outcome::Failed(report) => report.serialize(serializer),
        }
    }
}

impl Serialize for Totals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&EntryRef {
                totals: self,
                entry,
            })?;
        }
        seq.end()
    }
}

struct EntryRef<'a> {
    totals: &'a Totals,
    entry: &'a AggregateEntry,
}

impl Serialize for EntryRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let total = self.entry.total;
        if !total.is_finite() {
            return Err(S::Error::custom(format!(
                "total for category '{}' is not finite",
                self.entry.category
            )));
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.totals.category_column, &self.entry.category)?;
        match whole_number(total) {
            Some(n) => map.serialize_entry(&self.totals.value_column, &n)?,
            None => map.serialize_entry(&self.totals.value_column, &total)?,
        }
        map.end()
    }
}

/// Integral totals within the exactly-representable range render without a fractional part.
fn whole_number(v: f64) -> Option<i64> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    (v.fract() == 0.0 && v.abs() <= MAX_EXACT).then_some(v as i64)
}
