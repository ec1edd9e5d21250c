//! Raw entry → render record projection.

use crate::config::engine_config::{EngineConfig, LabelStyle};
use crate::config::layout::GridLayout;
use crate::model::entry::RawEntry;
use crate::model::record::RenderRecord;
use crate::projection::labels::{day_label, label_kind, month_label, parse_entry_date, year_label};
use crate::projection::metric::MetricMode;
use log::debug;
use std::sync::Arc;

/// Per-projection knobs beyond grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionOptions {
    pub metric_mode: MetricMode,
    pub label_style: LabelStyle,
}

impl From<&EngineConfig> for ProjectionOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            metric_mode: config.metric_mode,
            label_style: config.label_style,
        }
    }
}

/// Wraps owned entries into shared handles for projection.
pub fn share_entries(entries: Vec<RawEntry>) -> Vec<Arc<RawEntry>> {
    entries.into_iter().map(Arc::new).collect()
}

/// Projects entries into render records.
///
/// # Contract
/// - One record per entry, in input order; the input is never re-sorted.
/// - Grid position depends only on the sequence index and column count.
/// - Unparseable dates produce `parsed_date = None` and a day label.
pub fn project_entries(
    entries: &[Arc<RawEntry>],
    layout: &GridLayout,
    options: ProjectionOptions,
) -> Vec<RenderRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| project_one(index, entry, layout, options))
        .collect()
}

fn project_one(
    index: usize,
    entry: &Arc<RawEntry>,
    layout: &GridLayout,
    options: ProjectionOptions,
) -> RenderRecord {
    let entry_number = index + 1;
    let parsed_date = parse_entry_date(entry.date.as_str());
    if parsed_date.is_none() {
        debug!(
            "event=date_parse_failed module=projection status=recovered index={} chars={}",
            index,
            entry.date.chars().count()
        );
    }
    let (row, col) = layout.position(index);

    RenderRecord {
        entry: Arc::clone(entry),
        index,
        entry_number,
        parsed_date,
        month_label: parsed_date.map(month_label),
        day_label: day_label(parsed_date, entry_number, options.label_style),
        year_label: parsed_date.map(year_label),
        label_kind: label_kind(parsed_date),
        row,
        col,
        metric: options.metric_mode.extract(entry),
    }
}
