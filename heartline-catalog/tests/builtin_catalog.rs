//! Integration tests for the built-in catalog content.

use heartline_catalog::{AgeGroup, BucketKey, Category, Reason, ResponseCatalog};
use std::collections::HashSet;

#[test]
fn builtin_catalog_validates() {
    let catalog = ResponseCatalog::builtin();
    assert!(catalog.validate().is_ok());
}

#[test]
fn builtin_has_exactly_the_reachable_buckets() {
    let catalog = ResponseCatalog::builtin();
    let reachable: HashSet<_> = ResponseCatalog::reachable_keys().into_iter().collect();
    let present: HashSet<_> = catalog.iter().map(|(k, _)| *k).collect();
    assert_eq!(present, reachable);
}

#[test]
fn every_bucket_offers_a_choice() {
    let catalog = ResponseCatalog::builtin();
    for (key, variants) in catalog.iter() {
        assert!(variants.len() >= 2, "{key} has fewer than two variants");
        for variant in variants {
            assert!(variant.tips.len() >= 3, "{key} has a variant with few tips");
        }
    }
}

#[test]
fn gentle_conversation_has_three_variants_per_age_group() {
    let catalog = ResponseCatalog::builtin();
    for &age in AgeGroup::all() {
        let key = BucketKey::new(Category::GentleConversation, age);
        assert_eq!(catalog.variants(&key).len(), 3, "{key}");
    }
}

#[test]
fn negated_sadness_differs_from_general_sadness() {
    let catalog = ResponseCatalog::builtin();
    for &age in AgeGroup::all() {
        let general = catalog.variants(&BucketKey::new(Category::Sadness, age));
        let negated = catalog.variants(&BucketKey::negated_sadness(age));
        assert_ne!(general, negated, "{age}");
    }
}

#[test]
fn age_groups_use_distinct_registers() {
    let catalog = ResponseCatalog::builtin();
    for &category in Category::all() {
        let teen = catalog.variants(&BucketKey::new(category, AgeGroup::Teen));
        let senior = catalog.variants(&BucketKey::new(category, AgeGroup::Senior));
        assert_ne!(teen, senior, "{category}");
    }
}

#[test]
fn overlay_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("overlay.toml");
    std::fs::write(
        &path,
        r#"
[[bucket]]
category = "work_pressure"
age_group = "adult"

[[bucket.variant]]
message = "Work is a lot right now. Let's take it one step at a time."
tips = ["Pick one task", "Take a walk"]
"#,
    )
    .expect("write overlay");

    let overlay = ResponseCatalog::from_file(&path).expect("load overlay");
    let catalog = ResponseCatalog::builtin().merge(overlay);
    assert!(catalog.validate().is_ok());

    let key = BucketKey {
        category: Category::WorkPressure,
        age_group: AgeGroup::Adult,
        reason: Reason::General,
    };
    assert_eq!(catalog.variants(&key).len(), 1);
    assert_eq!(catalog.variants(&key)[0].tips, vec!["Pick one task", "Take a walk"]);
}

#[test]
fn missing_overlay_file_is_io_error() {
    let err = ResponseCatalog::from_file(std::path::Path::new("/nonexistent/overlay.toml"))
        .expect_err("missing file");
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn keys_serialize_in_snake_case() {
    let key = BucketKey::negated_sadness(AgeGroup::YoungAdult);
    let json = serde_json::to_string(&key).expect("serialize");
    assert_eq!(
        json,
        r#"{"category":"sadness","age_group":"young_adult","reason":"negated"}"#
    );
}
