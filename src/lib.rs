//! Heartline: rule-based emotion classification with caring, age-aware replies.
//!
//! A message goes through two independent passes:
//!
//! - **Stress scoring** ([`stress`]): weighted keyword substrings, clamped
//!   to `0..=10` and bucketed into Low/Medium/High.
//! - **Category classification** ([`classifier`]): exact-token keywords
//!   checked in a fixed priority order ([`rules`]) with a two-token negation
//!   lookback ([`negation`]). The winning category and the caller's age
//!   group select a bucket in the response catalog, and one variant is drawn
//!   uniformly at random.
//!
//! [`insights`] aggregates stored detections for mood charts and profile
//! statistics. [`host`] exposes everything over a JSON-lines stdio bridge.
//!
//! ```
//! let result = heartline::detect("I failed my exam and I'm so stressed", Some(17))?;
//! assert_eq!(result.emotion, "Exam Stress");
//! assert_eq!(result.stress_level, heartline::StressLevel::High);
//! # Ok::<(), heartline::HeartlineError>(())
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod host;
pub mod insights;
pub mod negation;
pub mod rules;
pub mod stress;

pub use classifier::{Detection, DetectionResult, EmotionDetector};
pub use config::HeartlineConfig;
pub use error::{HeartlineError, Result};
pub use heartline_catalog::{AgeGroup, BucketKey, Category, Reason, ResponseCatalog, Variant};
pub use stress::StressLevel;

/// Classify `message` with the built-in catalog and the thread-local RNG.
///
/// # Errors
///
/// Returns [`HeartlineError::Catalog`] if the built-in catalog fails
/// validation. The check runs once per process.
pub fn detect(message: &str, age: Option<i64>) -> Result<DetectionResult> {
    EmotionDetector::builtin()?
        .detect(message, age)
        .map(|d| d.result)
}
