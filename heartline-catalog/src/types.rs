//! Core keys and records for the response catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Youngest age accepted as a real age value.
pub const MIN_AGE: i64 = 0;

/// Oldest age accepted as a real age value. Anything above is treated as a
/// typo and resolved to the default group.
pub const MAX_AGE: i64 = 120;

/// One discrete emotion label the classifier can output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Exams, tests, grades, study load.
    ExamStress,
    /// Deadlines, bosses, workload.
    WorkPressure,
    /// Sadness and loneliness.
    Sadness,
    /// Anger and frustration.
    Anger,
    /// Worry, nerves, panic.
    Anxiety,
    /// Tiredness and exhaustion.
    Burnout,
    /// Partners, friends, arguments.
    Relationship,
    /// Positive mood.
    Happiness,
    /// Nothing specific detected.
    GentleConversation,
}

impl Category {
    /// Canonical output label, as stored by callers and shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExamStress => "Exam Stress",
            Self::WorkPressure => "Work Pressure",
            Self::Sadness => "Sadness",
            Self::Anger => "Anger/Frustration",
            Self::Anxiety => "Anxiety",
            Self::Burnout => "Burnout/Exhaustion",
            Self::Relationship => "Relationship Concern",
            Self::Happiness => "Happiness",
            Self::GentleConversation => "Gentle Conversation",
        }
    }

    /// Parse a canonical label back into a category.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// Returns every category.
    pub fn all() -> &'static [Category] {
        &[
            Self::ExamStress,
            Self::WorkPressure,
            Self::Sadness,
            Self::Anger,
            Self::Anxiety,
            Self::Burnout,
            Self::Relationship,
            Self::Happiness,
            Self::GentleConversation,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse age bucket used to pick a response register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Under 18.
    Teen,
    /// 18 to 29.
    YoungAdult,
    /// 30 to 49.
    Adult,
    /// 50 and over.
    Senior,
}

impl AgeGroup {
    /// Group used when no usable age is supplied.
    pub const DEFAULT: AgeGroup = AgeGroup::Adult;

    /// Bucket a numeric age. Pure threshold mapping, no range check.
    pub fn from_age(age: i64) -> Self {
        match age {
            a if a < 18 => Self::Teen,
            a if a < 30 => Self::YoungAdult,
            a if a < 50 => Self::Adult,
            _ => Self::Senior,
        }
    }

    /// Bucket an optional age, falling back to [`AgeGroup::DEFAULT`] when the
    /// age is absent or outside `MIN_AGE..=MAX_AGE`.
    pub fn resolve(age: Option<i64>) -> Self {
        match age {
            Some(a) if (MIN_AGE..=MAX_AGE).contains(&a) => Self::from_age(a),
            Some(a) => {
                tracing::debug!(age = a, "age out of range; using default age group");
                Self::DEFAULT
            }
            None => Self::DEFAULT,
        }
    }

    /// Wire name of this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teen => "teen",
            Self::YoungAdult => "young_adult",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    /// Returns every age group.
    pub fn all() -> &'static [AgeGroup] {
        &[Self::Teen, Self::YoungAdult, Self::Adult, Self::Senior]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Second key dimension. Only [`Category::Sadness`] has a `Negated` bucket,
/// reached when a happiness word is negated ("not happy").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    #[default]
    General,
    Negated,
}

impl Reason {
    /// Wire name of this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Negated => "negated",
        }
    }
}

/// Index into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BucketKey {
    pub category: Category,
    pub age_group: AgeGroup,
    #[serde(default)]
    pub reason: Reason,
}

impl BucketKey {
    /// Key with the `General` reason.
    pub fn new(category: Category, age_group: AgeGroup) -> Self {
        Self {
            category,
            age_group,
            reason: Reason::General,
        }
    }

    /// Key for the negated-happiness sadness bucket.
    pub fn negated_sadness(age_group: AgeGroup) -> Self {
        Self {
            category: Category::Sadness,
            age_group,
            reason: Reason::Negated,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.category.label(),
            self.age_group,
            self.reason.as_str()
        )
    }
}

/// One authored (message, tips) alternative within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// The caring reply shown to the user.
    pub message: String,
    /// Ordered coping tips. Never empty in a validated catalog.
    pub tips: Vec<String>,
}

impl Variant {
    pub fn new(message: impl Into<String>, tips: &[&str]) -> Self {
        Self {
            message: message.into(),
            tips: tips.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}
