//! Render-ready projection of one journal entry.
//!
//! # Responsibility
//! - Carry everything the engine needs to place, color and label one cell.
//!
//! # Invariants
//! - `row == index / columns` and `col == index % columns` for the layout
//!   that produced the record.
//! - `metric` is always within `[0, 1]`.
//! - Records are never mutated after projection; a new sequence replaces them.

use crate::model::entry::RawEntry;
use chrono::NaiveDate;
use std::sync::Arc;

/// Which label variant a cell shows when detail is not disclosed.
///
/// Ordered by disclosure priority: `Year > Month > Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelKind {
    Day,
    Month,
    Year,
}

/// Derived per-entry record consumed by the rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    /// Source entry, shared with the caller's input slice.
    pub entry: Arc<RawEntry>,
    /// Zero-based sequence position.
    pub index: usize,
    /// One-based position, used for entry-number labels.
    pub entry_number: usize,
    /// `None` when `entry.date` is not a valid `YYYY-MM-DD` date.
    pub parsed_date: Option<NaiveDate>,
    /// `Oct '22` style label. `None` for unparsed dates.
    pub month_label: Option<String>,
    /// `Oct 2` style label, or the entry number for unparsed dates.
    pub day_label: String,
    /// Four-digit year. `None` for unparsed dates.
    pub year_label: Option<String>,
    pub label_kind: LabelKind,
    pub row: usize,
    pub col: usize,
    /// Clamped color metric in `[0, 1]`.
    pub metric: f64,
}

impl RenderRecord {
    pub fn is_month_start(&self) -> bool {
        self.label_kind >= LabelKind::Month
    }

    /// Returns the compact label selected by the disclosure priority.
    pub fn primary_label(&self) -> &str {
        match self.label_kind {
            LabelKind::Year => self
                .year_label
                .as_deref()
                .unwrap_or(self.day_label.as_str()),
            LabelKind::Month => self
                .month_label
                .as_deref()
                .unwrap_or(self.day_label.as_str()),
            LabelKind::Day => self.day_label.as_str(),
        }
    }
}
