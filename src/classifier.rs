//! Category classification and reply selection.
//!
//! A call runs two independent computations over the same raw message:
//!
//! 1. [`crate::stress::assess`] for the score, level and icon.
//! 2. Tokenisation plus one pass over [`CATEGORY_RULES`] for the category,
//!    then a uniformly random variant from the matching catalog bucket.
//!
//! The only non-determinism is the variant draw, which uses the caller's
//! random source in [`EmotionDetector::detect_with_rng`].

use crate::config::DetectorConfig;
use crate::error::Result;
use crate::rules::{CATEGORY_RULES, Route};
use crate::stress::{self, StressLevel};
use heartline_catalog::{AgeGroup, BucketKey, CatalogError, ResponseCatalog};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// The built-in catalog, built and validated once on first use.
static BUILTIN: OnceLock<std::result::Result<Arc<ResponseCatalog>, CatalogError>> =
    OnceLock::new();

fn builtin_catalog() -> Result<Arc<ResponseCatalog>> {
    let slot = BUILTIN.get_or_init(|| {
        let catalog = ResponseCatalog::builtin();
        match catalog.validate() {
            Ok(()) => Ok(Arc::new(catalog)),
            Err(e) => {
                tracing::error!(error = %e, "built-in response catalog failed validation");
                Err(e)
            }
        }
    });
    match slot {
        Ok(catalog) => Ok(Arc::clone(catalog)),
        Err(e) => Err(e.clone().into()),
    }
}

/// The record handed back to the caller for storage and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Canonical category label, e.g. `"Exam Stress"`.
    pub emotion: String,
    /// Lexical stress score, `0..=10`.
    pub stress_score: u8,
    pub stress_level: StressLevel,
    /// Marker matching `stress_level`.
    pub stress_icon: String,
    pub caring_response: String,
    /// Ordered coping tips; never empty.
    pub tips: Vec<String>,
}

/// A [`DetectionResult`] plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub route: Route,
    pub age_group: AgeGroup,
    pub result: DetectionResult,
}

impl Detection {
    /// The catalog bucket the reply was drawn from.
    pub fn key(&self) -> BucketKey {
        self.route.key(self.age_group)
    }
}

/// Lowercase and split on whitespace. Punctuation stays attached, so
/// "sad." is a different token from "sad".
pub fn tokenize(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Route already-tokenised input through the rule table.
pub fn classify_tokens(tokens: &[String]) -> Route {
    CATEGORY_RULES
        .iter()
        .find_map(|rule| rule.evaluate(tokens))
        .unwrap_or(Route::FALLBACK)
}

/// Tokenise `message` and route it.
pub fn classify_message(message: &str) -> Route {
    classify_tokens(&tokenize(message))
}

/// Classifier bound to a validated response catalog.
///
/// Cheap to clone; clones share the catalog.
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    catalog: Arc<ResponseCatalog>,
}

impl EmotionDetector {
    /// Wrap `catalog` after checking every reachable bucket is populated.
    ///
    /// # Errors
    ///
    /// Returns [`HeartlineError::Catalog`](crate::HeartlineError::Catalog) if
    /// the catalog has a configuration gap or a blank variant.
    pub fn new(catalog: ResponseCatalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Detector over the built-in catalog. The catalog is validated once,
    /// on first use; every later call shares it.
    ///
    /// # Errors
    ///
    /// Returns [`HeartlineError::Catalog`](crate::HeartlineError::Catalog) if
    /// the built-in catalog has a gap.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            catalog: builtin_catalog()?,
        })
    }

    /// Detector over the built-in catalog merged with the overlay named in
    /// `config`, if any.
    ///
    /// # Errors
    ///
    /// Fails if the overlay cannot be read or parsed, or if the merged
    /// catalog does not validate.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        let Some(path) = config.catalog_path.as_deref() else {
            return Self::builtin();
        };
        let overlay = ResponseCatalog::from_file(path)?;
        tracing::info!(
            path = %path.display(),
            buckets = overlay.len(),
            "loaded catalog overlay"
        );
        let merged = builtin_catalog()?.as_ref().clone().merge(overlay);
        Self::new(merged)
    }

    /// The catalog replies are drawn from.
    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Classify `message` and draw a reply with `rng`.
    ///
    /// `age` outside `0..=120` or absent resolves to the adult group. Any
    /// string is accepted, including the empty string.
    ///
    /// # Errors
    ///
    /// Only on a catalog gap, which a detector built through [`Self::new`]
    /// or [`Self::from_config`] rules out.
    pub fn detect_with_rng<R: Rng + ?Sized>(
        &self,
        message: &str,
        age: Option<i64>,
        rng: &mut R,
    ) -> Result<Detection> {
        let stress = stress::assess(message);
        let route = classify_message(message);
        let age_group = AgeGroup::resolve(age);
        let key = route.key(age_group);
        let variant = self.catalog.choose(&key, rng)?;

        tracing::debug!(
            category = %route.category,
            reason = route.reason.as_str(),
            age_group = %age_group,
            matched = route.matched.unwrap_or("-"),
            stress_score = stress.score,
            "classified message"
        );

        Ok(Detection {
            route,
            age_group,
            result: DetectionResult {
                emotion: route.category.label().to_owned(),
                stress_score: stress.score,
                stress_level: stress.level,
                stress_icon: stress.icon().to_owned(),
                caring_response: variant.message.clone(),
                tips: variant.tips.clone(),
            },
        })
    }

    /// [`Self::detect_with_rng`] with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Same as [`Self::detect_with_rng`].
    pub fn detect(&self, message: &str, age: Option<i64>) -> Result<Detection> {
        self.detect_with_rng(message, age, &mut rand::thread_rng())
    }
}
