//! Built-in authored content, one module per category.
//!
//! Each module exposes `table(AgeGroup)` returning `(message, tips)` pairs.
//! Edit the text here; the classifier never needs to change for content
//! updates.

mod anger;
mod anxiety;
mod burnout;
mod exam;
mod gentle;
mod happiness;
mod relationship;
mod sadness;
mod work;

use crate::types::{AgeGroup, BucketKey, Category, Variant};

/// `(message, tips)` pairs for one bucket.
pub(crate) type Table = &'static [(&'static str, &'static [&'static str])];

fn to_variants(table: Table) -> Vec<Variant> {
    table
        .iter()
        .map(|&(message, tips)| Variant::new(message, tips))
        .collect()
}

fn table_for(category: Category, age: AgeGroup) -> Table {
    match category {
        Category::ExamStress => exam::table(age),
        Category::WorkPressure => work::table(age),
        Category::Sadness => sadness::general(age),
        Category::Anger => anger::table(age),
        Category::Anxiety => anxiety::table(age),
        Category::Burnout => burnout::table(age),
        Category::Relationship => relationship::table(age),
        Category::Happiness => happiness::table(age),
        Category::GentleConversation => gentle::table(age),
    }
}

/// Every built-in bucket.
pub(crate) fn buckets() -> Vec<(BucketKey, Vec<Variant>)> {
    let mut out = Vec::new();
    for &category in Category::all() {
        for &age in AgeGroup::all() {
            out.push((
                BucketKey::new(category, age),
                to_variants(table_for(category, age)),
            ));
        }
    }
    for &age in AgeGroup::all() {
        out.push((
            BucketKey::negated_sadness(age),
            to_variants(sadness::negated(age)),
        ));
    }
    out
}
