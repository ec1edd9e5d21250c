//! Detail panel content for zoomed-in cells.
//!
//! # Invariants
//! - A section is only emitted when it has at least one line.
//! - Section order is fixed so panels read the same across cells.

use crate::config::engine_config::DetailMode;
use crate::model::entry::RawEntry;
use crate::model::record::RenderRecord;

pub const SECTION_SUMMARY: &str = "Summary";
pub const SECTION_SENTIMENT: &str = "Sentiment";
pub const SECTION_EMOTIONS: &str = "Emotions";
pub const SECTION_SIGNIFICANCE: &str = "Significance";
pub const SECTION_REFLECTION: &str = "Self-reflection";
pub const SECTION_SOCIAL: &str = "Social";
pub const SECTION_ENTITIES: &str = "Entities";
pub const SECTION_THOUGHTS: &str = "Thoughts";
pub const SECTION_EVENTS: &str = "Events";
pub const SECTION_TRENDS: &str = "Trends";
pub const SECTION_MEDIA: &str = "Media";
pub const SECTION_CONTENT: &str = "Entry";

/// One titled block of text lines inside a detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

/// Expanded per-cell content shown past the zoom threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub sections: Vec<DetailSection>,
    /// Toggled by the engine in lock-step with the cell label.
    pub visible: bool,
}

impl DetailPanel {
    pub fn section(&self, heading: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|section| section.heading == heading)
    }

    pub fn has_section(&self, heading: &str) -> bool {
        self.section(heading).is_some()
    }
}

/// Builds the hidden detail panel for one record, or `None` for
/// `DetailMode::None`.
pub fn build_detail_panel(record: &RenderRecord, mode: DetailMode) -> Option<DetailPanel> {
    let sections = match mode {
        DetailMode::None => return None,
        DetailMode::Summary => summary_sections(&record.entry),
        DetailMode::Content => content_sections(&record.entry),
    };

    Some(DetailPanel {
        title: panel_title(record),
        sections: sections
            .into_iter()
            .filter(|section| !section.lines.is_empty())
            .collect(),
        visible: false,
    })
}

fn panel_title(record: &RenderRecord) -> String {
    match record.parsed_date {
        Some(date) => date.format("%a, %b %-d %Y").to_string(),
        None => format!("#{} {}", record.entry_number, record.entry.date.trim()),
    }
}

fn summary_sections(entry: &RawEntry) -> Vec<DetailSection> {
    vec![
        section(SECTION_SUMMARY, non_empty(&entry.entry_summary)),
        section(SECTION_SENTIMENT, sentiment_lines(entry)),
        section(SECTION_EMOTIONS, emotion_lines(entry)),
        section(SECTION_SIGNIFICANCE, significance_lines(entry)),
        section(SECTION_REFLECTION, reflection_lines(entry)),
        section(SECTION_SOCIAL, social_lines(entry)),
        section(SECTION_ENTITIES, entity_lines(entry)),
        section(
            SECTION_THOUGHTS,
            entry
                .thoughts
                .iter()
                .map(|thought| labeled(&thought.name, &thought.description))
                .collect(),
        ),
        section(
            SECTION_EVENTS,
            entry
                .events
                .iter()
                .map(|event| match event.date_time.trim() {
                    "" => event.event_name.clone(),
                    when => format!("{} ({when})", event.event_name),
                })
                .collect(),
        ),
        section(
            SECTION_TRENDS,
            entry
                .trend_analysis
                .iter()
                .map(|trend| labeled(&trend.name, &trend.description))
                .collect(),
        ),
        section(
            SECTION_MEDIA,
            entry
                .media_references
                .iter()
                .map(|media| {
                    let name = match media.kind.trim() {
                        "" => media.name.clone(),
                        kind => format!("{} [{kind}]", media.name),
                    };
                    labeled(&name, &media.description)
                })
                .collect(),
        ),
    ]
}

fn content_sections(entry: &RawEntry) -> Vec<DetailSection> {
    let mut lines: Vec<String> = entry
        .content
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if let (Some(count), false) = (entry.char_count, lines.is_empty()) {
        lines.push(format!("{count} characters"));
    }
    vec![section(SECTION_CONTENT, lines)]
}

fn sentiment_lines(entry: &RawEntry) -> Vec<String> {
    let sentiment = &entry.sentiment;
    if sentiment.category.trim().is_empty() && sentiment.emotional_rationale.trim().is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "{} ({:+.2})",
        sentiment.category.trim(),
        sentiment.sentiment_score
    )];
    lines.extend(non_empty(&sentiment.emotional_rationale));
    lines
}

fn emotion_lines(entry: &RawEntry) -> Vec<String> {
    let Some((dominant, _)) = entry.emotions.dominant() else {
        return Vec::new();
    };
    std::iter::once(format!("mostly {dominant}"))
        .chain(
            entry
                .emotions
                .components()
                .into_iter()
                .filter(|(_, value)| *value > 0.0)
                .map(|(name, value)| format!("{name}: {value:.2}")),
        )
        .collect()
}

fn significance_lines(entry: &RawEntry) -> Vec<String> {
    let significance = &entry.significance;
    if significance.level.trim().is_empty() && significance.reason.trim().is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "{} ({:.2})",
        significance.level.trim(),
        significance.score
    )];
    lines.extend(non_empty(&significance.reason));
    lines
}

fn reflection_lines(entry: &RawEntry) -> Vec<String> {
    let reflection = &entry.self_reflection;
    if reflection.reason.trim().is_empty() {
        return Vec::new();
    }
    vec![
        format!("score {:.2}", reflection.reflection_score),
        reflection.reason.trim().to_string(),
    ]
}

fn social_lines(entry: &RawEntry) -> Vec<String> {
    let social = &entry.social_interaction;
    non_empty(&social.intensity)
        .into_iter()
        .chain(non_empty(&social.reason))
        .collect()
}

fn entity_lines(entry: &RawEntry) -> Vec<String> {
    let entities = &entry.entities;
    [
        ("People", &entities.people),
        ("Organizations", &entities.organizations),
        ("Topics", &entities.topics_concepts),
    ]
    .into_iter()
    .filter(|(_, values)| !values.is_empty())
    .map(|(label, values)| format!("{label}: {}", values.join(", ")))
    .collect()
}

fn section(heading: &'static str, lines: Vec<String>) -> DetailSection {
    DetailSection { heading, lines }
}

fn non_empty(value: &str) -> Vec<String> {
    match value.trim() {
        "" => Vec::new(),
        trimmed => vec![trimmed.to_string()],
    }
}

fn labeled(name: &str, description: &str) -> String {
    match description.trim() {
        "" => name.trim().to_string(),
        description => format!("{}: {description}", name.trim()),
    }
}
