//! Aggregates over a user's stored detections.
//!
//! Persistence is the caller's concern: these functions take the stored
//! `(emotion, timestamp)` pairs and return chart-ready summaries.

use crate::stress::StressLevel;
use chrono::{DateTime, Utc};
use heartline_catalog::Category;
use serde::{Deserialize, Serialize};

/// Mood index for labels the chart does not know.
pub const UNKNOWN_MOOD_INDEX: u8 = 5;

/// Stress weight for labels the profile does not know.
pub const UNKNOWN_STRESS_WEIGHT: u8 = 3;

/// One stored detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Category label as returned in `DetectionResult::emotion`.
    pub emotion: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationRecord {
    pub fn new(emotion: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            emotion: emotion.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

/// Mood-tracker chart data, oldest record first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTimeline {
    /// `"%b %d"` per record, e.g. `"Mar 04"`.
    pub dates: Vec<String>,
    /// [`mood_index`] per record.
    pub emotion_data: Vec<u8>,
    pub emotion_counts: Vec<EmotionCount>,
    pub total_chats: usize,
    pub unique_emotions: usize,
    pub most_common: Option<String>,
}

/// Profile page statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub total_conversations: usize,
    pub unique_emotions: usize,
    /// `"%b %d, %Y"` of the newest record, or `"Never"`.
    pub last_active: String,
    pub emotion_counts: Vec<EmotionCount>,
    /// Mean [`stress_weight`], one decimal place.
    pub avg_stress: f64,
    pub stress_icon: String,
}

/// Chart position of a category label, 1 (exam stress) to 9 (happiness).
pub fn mood_index(label: &str) -> u8 {
    match Category::from_label(label) {
        Some(Category::ExamStress) => 1,
        Some(Category::WorkPressure) => 2,
        Some(Category::Sadness) => 3,
        Some(Category::Anxiety) => 4,
        Some(Category::Anger) => 5,
        Some(Category::Burnout) => 6,
        Some(Category::Relationship) => 7,
        Some(Category::GentleConversation) => 8,
        Some(Category::Happiness) => 9,
        None => UNKNOWN_MOOD_INDEX,
    }
}

/// Typical stress weight of a category label, used for profile averages.
pub fn stress_weight(label: &str) -> u8 {
    match Category::from_label(label) {
        Some(Category::ExamStress | Category::WorkPressure) => 7,
        Some(Category::Anxiety | Category::Burnout) => 8,
        Some(Category::Anger | Category::Relationship) => 6,
        Some(Category::Sadness) => 5,
        Some(Category::GentleConversation) => 2,
        Some(Category::Happiness) => 1,
        None => UNKNOWN_STRESS_WEIGHT,
    }
}

/// Per-label counts in first-seen order.
pub fn emotion_counts(records: &[ConversationRecord]) -> Vec<EmotionCount> {
    let mut counts: Vec<EmotionCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.emotion == record.emotion) {
            Some(entry) => entry.count += 1,
            None => counts.push(EmotionCount {
                emotion: record.emotion.clone(),
                count: 1,
            }),
        }
    }
    counts
}

fn most_common_of(counts: &[EmotionCount]) -> Option<String> {
    // First maximum wins; `max_by_key` would return the last.
    let mut best: Option<&EmotionCount> = None;
    for entry in counts {
        if best.is_none_or(|b| entry.count > b.count) {
            best = Some(entry);
        }
    }
    best.map(|b| b.emotion.clone())
}

/// Label with the highest count. Ties go to the label seen first.
pub fn most_common_emotion(records: &[ConversationRecord]) -> Option<String> {
    most_common_of(&emotion_counts(records))
}

/// Chart data for `records`, sorted by timestamp (stable for equal times).
pub fn mood_timeline(records: &[ConversationRecord]) -> MoodTimeline {
    let mut ordered: Vec<&ConversationRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    let dates = ordered
        .iter()
        .map(|r| r.timestamp.format("%b %d").to_string())
        .collect();
    let emotion_data = ordered.iter().map(|r| mood_index(&r.emotion)).collect();
    let sorted: Vec<ConversationRecord> = ordered.into_iter().cloned().collect();
    let counts = emotion_counts(&sorted);

    MoodTimeline {
        dates,
        emotion_data,
        total_chats: sorted.len(),
        unique_emotions: counts.len(),
        most_common: most_common_of(&counts),
        emotion_counts: counts,
    }
}

/// Profile statistics for `records`.
pub fn profile_summary(records: &[ConversationRecord]) -> ProfileSummary {
    let counts = emotion_counts(records);
    let last_active = records
        .iter()
        .map(|r| r.timestamp)
        .max()
        .map_or_else(|| "Never".to_owned(), |t| t.format("%b %d, %Y").to_string());

    let avg_stress = if records.is_empty() {
        0.0
    } else {
        let total: u32 = records
            .iter()
            .map(|r| u32::from(stress_weight(&r.emotion)))
            .sum();
        round_one_decimal(f64::from(total) / records.len() as f64)
    };

    ProfileSummary {
        total_conversations: records.len(),
        unique_emotions: counts.len(),
        last_active,
        emotion_counts: counts,
        avg_stress,
        stress_icon: StressLevel::from_average(avg_stress).icon().to_owned(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use chrono::TimeZone;

    fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, month, day, hour, 0, 0).unwrap()
    }

    fn rec(emotion: &str, month: u32, day: u32) -> ConversationRecord {
        ConversationRecord::new(emotion, at(month, day, 12))
    }

    #[test]
    fn mood_index_covers_every_category() {
        let indices: Vec<u8> = Category::all().iter().map(|c| mood_index(c.label())).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), Category::all().len());
        assert_eq!(mood_index("Happiness"), 9);
        assert_eq!(mood_index("Exam Stress"), 1);
        assert_eq!(mood_index("Something Else"), UNKNOWN_MOOD_INDEX);
    }

    #[test]
    fn stress_weights() {
        assert_eq!(stress_weight("Anxiety"), 8);
        assert_eq!(stress_weight("Gentle Conversation"), 2);
        assert_eq!(stress_weight("Happiness"), 1);
        assert_eq!(stress_weight(""), UNKNOWN_STRESS_WEIGHT);
    }

    #[test]
    fn counts_keep_first_seen_order() {
        let records = vec![
            rec("Sadness", 1, 1),
            rec("Anxiety", 1, 2),
            rec("Sadness", 1, 3),
        ];
        let counts = emotion_counts(&records);
        assert_eq!(counts[0].emotion, "Sadness");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].emotion, "Anxiety");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn most_common_tie_goes_to_first_seen() {
        let records = vec![
            rec("Anxiety", 1, 1),
            rec("Sadness", 1, 2),
            rec("Sadness", 1, 3),
            rec("Anxiety", 1, 4),
        ];
        assert_eq!(most_common_emotion(&records).as_deref(), Some("Anxiety"));
        assert_eq!(most_common_emotion(&[]), None);
    }

    #[test]
    fn timeline_sorts_by_timestamp() {
        let records = vec![
            rec("Happiness", 3, 4),
            rec("Exam Stress", 2, 14),
            rec("Work Pressure", 3, 1),
        ];
        let timeline = mood_timeline(&records);
        assert_eq!(timeline.dates, vec!["Feb 14", "Mar 01", "Mar 04"]);
        assert_eq!(timeline.emotion_data, vec![1, 2, 9]);
        assert_eq!(timeline.total_chats, 3);
        assert_eq!(timeline.unique_emotions, 3);
        assert_eq!(timeline.most_common.as_deref(), Some("Exam Stress"));
    }

    #[test]
    fn empty_timeline() {
        let timeline = mood_timeline(&[]);
        assert!(timeline.dates.is_empty());
        assert!(timeline.emotion_counts.is_empty());
        assert_eq!(timeline.total_chats, 0);
        assert_eq!(timeline.most_common, None);
    }

    #[test]
    fn empty_profile() {
        let profile = profile_summary(&[]);
        assert_eq!(profile.total_conversations, 0);
        assert_eq!(profile.last_active, "Never");
        assert_eq!(profile.avg_stress, 0.0);
        assert_eq!(profile.stress_icon, "🟢");
    }

    #[test]
    fn profile_average_and_icon() {
        // (8 + 7 + 2) / 3 = 5.666… → 5.7, medium.
        let records = vec![
            rec("Anxiety", 5, 2),
            rec("Work Pressure", 5, 9),
            rec("Gentle Conversation", 4, 30),
        ];
        let profile = profile_summary(&records);
        assert_eq!(profile.total_conversations, 3);
        assert_eq!(profile.unique_emotions, 3);
        assert_eq!(profile.last_active, "May 09, 2025");
        assert!((profile.avg_stress - 5.7).abs() < f64::EPSILON);
        assert_eq!(profile.stress_icon, "🟡");
    }

    #[test]
    fn profile_high_stress() {
        let records = vec![rec("Burnout/Exhaustion", 1, 1), rec("Anxiety", 1, 2)];
        let profile = profile_summary(&records);
        assert!((profile.avg_stress - 8.0).abs() < f64::EPSILON);
        assert_eq!(profile.stress_icon, "🔴");
    }

    #[test]
    fn record_deserializes_from_rfc3339() {
        let record: ConversationRecord = serde_json::from_str(
            r#"{"emotion":"Sadness","timestamp":"2025-06-01T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.timestamp, at(6, 1, 8) + chrono::Duration::minutes(30));
    }
}
