//! The response catalog: `(category, age group, reason)` → variants.
//!
//! The catalog is immutable once built. The built-in content lives in
//! the private `builtin` module; deployments may replace individual buckets with a
//! TOML overlay file and must call [`ResponseCatalog::validate`] before
//! serving.

use crate::builtin;
use crate::error::{CatalogError, Result};
use crate::types::{AgeGroup, BucketKey, Category, Reason, Variant};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable mapping from bucket key to its authored variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCatalog {
    buckets: BTreeMap<BucketKey, Vec<Variant>>,
}

impl ResponseCatalog {
    /// Build a catalog from explicit buckets. No validation is performed.
    pub fn from_buckets(buckets: impl IntoIterator<Item = (BucketKey, Vec<Variant>)>) -> Self {
        Self {
            buckets: buckets.into_iter().collect(),
        }
    }

    /// The authored catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_buckets(builtin::buckets())
    }

    /// Every key the classifier can route to.
    ///
    /// All categories are reachable in every age group with the `General`
    /// reason; sadness is additionally reachable with `Negated`.
    pub fn reachable_keys() -> Vec<BucketKey> {
        let mut keys = Vec::with_capacity(Category::all().len() * AgeGroup::all().len() + 4);
        for &category in Category::all() {
            for &age_group in AgeGroup::all() {
                keys.push(BucketKey::new(category, age_group));
            }
        }
        for &age_group in AgeGroup::all() {
            keys.push(BucketKey::negated_sadness(age_group));
        }
        keys
    }

    /// Checks that every reachable bucket has at least one variant and that
    /// every variant has a message and tips.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ConfigurationGap`] for the first reachable key
    /// without variants, or [`CatalogError::EmptyVariant`] for the first
    /// blank variant.
    pub fn validate(&self) -> Result<()> {
        for key in Self::reachable_keys() {
            match self.buckets.get(&key) {
                Some(variants) if !variants.is_empty() => {}
                _ => return Err(CatalogError::ConfigurationGap(key)),
            }
        }
        for (key, variants) in &self.buckets {
            for (index, variant) in variants.iter().enumerate() {
                let blank_tip = variant.tips.iter().any(|t| t.trim().is_empty());
                if variant.message.trim().is_empty() || variant.tips.is_empty() || blank_tip {
                    return Err(CatalogError::EmptyVariant { key: *key, index });
                }
            }
        }
        Ok(())
    }

    /// The variants authored for `key`; empty when the bucket is missing.
    pub fn variants(&self, key: &BucketKey) -> &[Variant] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draw one variant uniformly at random from the bucket for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ConfigurationGap`] if the bucket is missing or
    /// empty. A validated catalog never takes this path.
    pub fn choose<R: Rng + ?Sized>(&self, key: &BucketKey, rng: &mut R) -> Result<&Variant> {
        self.variants(key)
            .choose(rng)
            .ok_or(CatalogError::ConfigurationGap(*key))
    }

    /// Number of buckets present.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the catalog has no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over all buckets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, &[Variant])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Replace buckets with those from `overlay`. Buckets absent from the
    /// overlay keep their current content.
    #[must_use]
    pub fn merge(mut self, overlay: ResponseCatalog) -> Self {
        for (key, variants) in overlay.buckets {
            self.buckets.insert(key, variants);
        }
        self
    }

    /// Parse an overlay from TOML text.
    ///
    /// ```toml
    /// [[bucket]]
    /// category = "exam_stress"
    /// age_group = "teen"
    ///
    /// [[bucket.variant]]
    /// message = "Exams are a lot. Let's breathe first."
    /// tips = ["Take a 5-minute break"]
    /// ```
    ///
    /// Repeated tables for the same key are concatenated in file order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: OverlayFile =
            toml::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let mut buckets: BTreeMap<BucketKey, Vec<Variant>> = BTreeMap::new();
        for bucket in file.bucket {
            let key = BucketKey {
                category: bucket.category,
                age_group: bucket.age_group,
                reason: bucket.reason,
            };
            buckets.entry(key).or_default().extend(bucket.variant);
        }
        tracing::debug!(buckets = buckets.len(), "parsed catalog overlay");
        Ok(Self { buckets })
    }

    /// Read and parse an overlay file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Parse`] if it is not a valid overlay.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlayFile {
    #[serde(default)]
    bucket: Vec<OverlayBucket>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlayBucket {
    category: Category,
    age_group: AgeGroup,
    #[serde(default)]
    reason: Reason,
    #[serde(default)]
    variant: Vec<Variant>,
}
