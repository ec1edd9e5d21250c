//! Journal entry input model.
//!
//! # Responsibility
//! - Define the raw per-day record exactly as the dataset ships it.
//! - Keep optional sub-blocks tolerant so partial entries still deserialize.
//!
//! # Invariants
//! - Entries are immutable once loaded; the engine never edits them.
//! - Sequence order of a `Vec<RawEntry>` is chronological and load-bearing.

use serde::{Deserialize, Serialize};

/// Sentiment classification for one entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub category: String,
    /// Expected in `[-1, 1]`; out-of-range values are clamped downstream.
    pub sentiment_score: f64,
    #[serde(default)]
    pub emotional_rationale: String,
}

/// Fixed-shape emotion vector. All components are non-negative.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Emotions {
    #[serde(default)]
    pub anger: f64,
    #[serde(default)]
    pub disgust: f64,
    #[serde(default)]
    pub fear: f64,
    #[serde(default)]
    pub happiness: f64,
    #[serde(default)]
    pub sadness: f64,
    #[serde(default)]
    pub surprise: f64,
}

impl Emotions {
    /// Returns `(name, value)` pairs in declaration order.
    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("anger", self.anger),
            ("disgust", self.disgust),
            ("fear", self.fear),
            ("happiness", self.happiness),
            ("sadness", self.sadness),
            ("surprise", self.surprise),
        ]
    }

    /// Returns the strongest emotion, or `None` when every component is zero.
    ///
    /// Ties resolve to the earliest component in declaration order.
    pub fn dominant(&self) -> Option<(&'static str, f64)> {
        self.components()
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .fold(None, |best, current| match best {
                Some((_, best_value)) if best_value >= current.1 => best,
                _ => Some(current),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelfReflection {
    pub reflection_score: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Significance {
    /// Expected in `[0, 1]`.
    pub score: f64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SocialInteraction {
    #[serde(default)]
    pub intensity: String,
    #[serde(default)]
    pub reason: String,
}

/// Named entities mentioned by an entry, in first-mention order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub topics_concepts: Vec<String>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.topics_concepts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thought {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryEvent {
    pub event_name: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub refers_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendObservation {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaReference {
    pub name: String,
    /// Serialized as `type` to match the dataset schema.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

/// One journal day as delivered by the dataset.
///
/// Only `date` is strictly required; every analysis block falls back to its
/// default so that sparse entries still project and render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEntry {
    /// Calendar date, expected as `YYYY-MM-DD`. Not validated here.
    pub date: String,
    #[serde(default)]
    pub entry_summary: String,
    /// Raw body text, when the dataset variant carries it.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub char_count: Option<u32>,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub emotions: Emotions,
    #[serde(default)]
    pub self_reflection: SelfReflection,
    #[serde(default)]
    pub significance: Significance,
    #[serde(default)]
    pub social_interaction: SocialInteraction,
    #[serde(default)]
    pub entities: Entities,
    #[serde(default)]
    pub thoughts: Vec<Thought>,
    #[serde(default)]
    pub events: Vec<EntryEvent>,
    #[serde(default)]
    pub trend_analysis: Vec<TrendObservation>,
    #[serde(default)]
    pub media_references: Vec<MediaReference>,
}

impl RawEntry {
    /// Creates a bare entry with only a date and summary.
    pub fn new(date: impl Into<String>, entry_summary: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            entry_summary: entry_summary.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the sentiment score.
    pub fn with_sentiment_score(mut self, score: f64) -> Self {
        self.sentiment.sentiment_score = score;
        self
    }

    /// Builder-style setter for the significance score.
    pub fn with_significance_score(mut self, score: f64) -> Self {
        self.significance.score = score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Emotions, Entities, RawEntry};

    #[test]
    fn dominant_emotion_prefers_largest_component() {
        let emotions = Emotions {
            happiness: 0.6,
            sadness: 0.2,
            surprise: 0.6,
            ..Emotions::default()
        };
        assert_eq!(emotions.dominant(), Some(("happiness", 0.6)));
    }

    #[test]
    fn dominant_emotion_is_none_for_zero_vector() {
        assert_eq!(Emotions::default().dominant(), None);
    }

    #[test]
    fn entities_empty_only_when_all_lists_empty() {
        let mut entities = Entities::default();
        assert!(entities.is_empty());
        entities.topics_concepts.push("running".to_string());
        assert!(!entities.is_empty());
    }

    #[test]
    fn builder_setters_only_touch_scores() {
        let entry = RawEntry::new("2022-10-01", "first day")
            .with_sentiment_score(0.4)
            .with_significance_score(0.9);
        assert_eq!(entry.date, "2022-10-01");
        assert_eq!(entry.sentiment.sentiment_score, 0.4);
        assert_eq!(entry.significance.score, 0.9);
        assert!(entry.thoughts.is_empty());
    }
}
