//! Date parsing and label derivation.

use crate::config::engine_config::LabelStyle;
use crate::model::record::LabelKind;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Parses a strict `YYYY-MM-DD` date.
///
/// Returns `None` for anything else, including impossible calendar dates.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ENTRY_DATE_FORMAT).ok()
}

/// Selects the label variant for a parsed date.
///
/// Unparsed dates always fall back to the day label.
pub fn label_kind(date: Option<NaiveDate>) -> LabelKind {
    match date {
        Some(date) if date.day() == 1 && date.month() == 1 => LabelKind::Year,
        Some(date) if date.day() == 1 => LabelKind::Month,
        _ => LabelKind::Day,
    }
}

/// `Oct '22`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b '%y").to_string()
}

/// `2023`
pub fn year_label(date: NaiveDate) -> String {
    date.format("%Y").to_string()
}

/// Day-cell label for the configured style.
///
/// `MonthDay` renders `Oct 2`; unparsed dates and `EntryNumber` use the
/// one-based entry number.
pub fn day_label(date: Option<NaiveDate>, entry_number: usize, style: LabelStyle) -> String {
    match (style, date) {
        (LabelStyle::MonthDay, Some(date)) => format!("{} {}", date.format("%b"), date.day()),
        _ => entry_number.to_string(),
    }
}
