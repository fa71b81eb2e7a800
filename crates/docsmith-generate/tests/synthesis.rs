use chrono::{DateTime, Datelike, TimeZone, Utc};
use docsmith_core::IndexMapping;
use docsmith_generate::{EngineOptions, ResolvedOverrides, SynthesisEngine};
use serde_json::Value;

const ARTICLE_MAPPING: &str = r#"{
    "mappings": {
        "properties": {
            "title": {"type": "text"},
            "views": {"type": "integer"},
            "active": {"type": "boolean"},
            "published_at": {"type": "date"}
        }
    }
}"#;

const PROFILE_MAPPING: &str = r#"{
    "mappings": {
        "properties": {
            "id": {"type": "keyword"},
            "comments": {
                "type": "nested",
                "properties": {
                    "author": {"type": "text"},
                    "email": {"type": "keyword"}
                }
            }
        }
    }
}"#;

fn mapping_from(text: &str) -> IndexMapping {
    IndexMapping::parse(text).expect("parse mapping")
}

fn fixed_engine(seed: u64) -> SynthesisEngine {
    SynthesisEngine::new(EngineOptions {
        seed: Some(seed),
        reference_time: Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single(),
    })
}

#[test]
fn documents_follow_mapping_order() {
    let mapping = mapping_from(ARTICLE_MAPPING);
    let engine = fixed_engine(7);
    let batch = engine.generate(&mapping, &ResolvedOverrides::default(), 5);

    assert_eq!(batch.len(), 5);
    for document in &batch {
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "views", "active", "published_at"]);
    }
}

#[test]
fn nested_fields_become_bounded_arrays() {
    let mapping = mapping_from(PROFILE_MAPPING);
    let engine = fixed_engine(11);
    let batch = engine.generate(&mapping, &ResolvedOverrides::default(), 20);

    for document in &batch {
        let comments = document
            .get("comments")
            .and_then(Value::as_array)
            .expect("comments array");
        assert!(
            (1..=3).contains(&comments.len()),
            "nested length out of range: {}",
            comments.len()
        );
        for comment in comments {
            let comment = comment.as_object().expect("comment object");
            let keys: Vec<&str> = comment.keys().map(String::as_str).collect();
            assert_eq!(keys, ["author", "email"]);
            let email = comment
                .get("email")
                .and_then(Value::as_str)
                .expect("comment email");
            assert!(email.contains('@'), "field-name table should apply at depth");
        }
    }
}

#[test]
fn override_count_is_exact() {
    let mapping = mapping_from(PROFILE_MAPPING);
    let engine = fixed_engine(13);

    let mut overrides = ResolvedOverrides::default();
    overrides.set_count("comments", 5);
    for document in engine.generate(&mapping, &overrides, 10) {
        let comments = document
            .get("comments")
            .and_then(Value::as_array)
            .expect("comments array");
        assert_eq!(comments.len(), 5);
    }

    let mut overrides = ResolvedOverrides::default();
    overrides.set_count("comments", 0);
    for document in engine.generate(&mapping, &overrides, 10) {
        let comments = document
            .get("comments")
            .and_then(Value::as_array)
            .expect("comments array");
        assert!(comments.is_empty(), "count 0 should yield an empty array");
    }
}

#[test]
fn user_override_beats_field_name_table() {
    let mapping = mapping_from(r#"{"mappings": {"properties": {"email": {"type": "keyword"}}}}"#);
    let engine = fixed_engine(17);

    let default_batch = engine.generate(&mapping, &ResolvedOverrides::default(), 5);
    for document in &default_batch {
        let email = document
            .get("email")
            .and_then(Value::as_str)
            .expect("email string");
        assert!(email.contains('@'));
    }

    let mut overrides = ResolvedOverrides::default();
    overrides.set_generator("email", "word");
    for document in engine.generate(&mapping, &overrides, 5) {
        let email = document
            .get("email")
            .and_then(Value::as_str)
            .expect("email string");
        assert!(!email.contains('@'), "override should replace the email value");
    }
}

#[test]
fn count_override_on_scalar_is_ignored() {
    let mapping = mapping_from(r#"{"mappings": {"properties": {"title": {"type": "text"}}}}"#);
    let engine = fixed_engine(19);

    let mut overrides = ResolvedOverrides::default();
    overrides.set_count("title", 4);
    for document in engine.generate(&mapping, &overrides, 5) {
        assert!(
            document.get("title").map(Value::is_string).unwrap_or(false),
            "scalar field should stay scalar under a count override"
        );
    }
}

#[test]
fn numeric_types_stay_in_domain() {
    let mapping = mapping_from(
        r#"{
            "mappings": {
                "properties": {
                    "views": {"type": "integer"},
                    "total": {"type": "long"},
                    "score": {"type": "float"}
                }
            }
        }"#,
    );
    let engine = fixed_engine(23);

    for document in engine.generate(&mapping, &ResolvedOverrides::default(), 50) {
        let views = document
            .get("views")
            .and_then(Value::as_i64)
            .expect("views integer");
        assert!((18..=99).contains(&views), "views out of range: {views}");

        let total = document
            .get("total")
            .and_then(Value::as_i64)
            .expect("total long");
        assert!((1000..=100_000).contains(&total), "total out of range: {total}");

        let score = document
            .get("score")
            .and_then(Value::as_f64)
            .expect("score float");
        assert!((1.0..=1000.0).contains(&score), "score out of range: {score}");
        let cents = score * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-6,
            "score should carry at most two decimals: {score}"
        );
    }
}

#[test]
fn seeded_runs_reproduce() {
    let mapping = mapping_from(PROFILE_MAPPING);

    let batch_a = fixed_engine(42).generate(&mapping, &ResolvedOverrides::default(), 25);
    let batch_b = fixed_engine(42).generate(&mapping, &ResolvedOverrides::default(), 25);

    let text_a = serde_json::to_string(&batch_a).expect("serialize batch A");
    let text_b = serde_json::to_string(&batch_b).expect("serialize batch B");
    assert_eq!(text_a, text_b, "equal seeds should reproduce the batch");
}

#[test]
fn seeds_change_output() {
    let mapping = mapping_from(PROFILE_MAPPING);

    let batch_a = fixed_engine(1).generate(&mapping, &ResolvedOverrides::default(), 10);
    let batch_b = fixed_engine(2).generate(&mapping, &ResolvedOverrides::default(), 10);

    let text_a = serde_json::to_string(&batch_a).expect("serialize batch A");
    let text_b = serde_json::to_string(&batch_b).expect("serialize batch B");
    assert_ne!(text_a, text_b, "different seeds should change the batch");
}

#[test]
fn zero_count_yields_empty_batch() {
    let mapping = mapping_from(ARTICLE_MAPPING);
    let engine = fixed_engine(29);
    let batch = engine.generate(&mapping, &ResolvedOverrides::default(), 0);
    assert!(batch.is_empty());
}

#[test]
fn created_at_defaults_to_current_decade() {
    let mapping =
        mapping_from(r#"{"mappings": {"properties": {"created_at": {"type": "date"}}}}"#);
    let engine = fixed_engine(31);

    for document in engine.generate(&mapping, &ResolvedOverrides::default(), 30) {
        let text = document
            .get("created_at")
            .and_then(Value::as_str)
            .expect("created_at string");
        let parsed = DateTime::parse_from_rfc3339(text).expect("rfc3339 timestamp");
        assert!(
            (2020..=2025).contains(&parsed.year()),
            "created_at outside the reference decade: {text}"
        );
    }
}

#[test]
fn unknown_type_falls_back_to_word() {
    let mapping =
        mapping_from(r#"{"mappings": {"properties": {"region": {"type": "geo_shape"}}}}"#);
    let engine = fixed_engine(37);

    for document in engine.generate(&mapping, &ResolvedOverrides::default(), 5) {
        let region = document
            .get("region")
            .and_then(Value::as_str)
            .expect("region string");
        assert!(!region.is_empty());
        assert!(!region.contains(' '), "fallback should be a single word");
    }
}

#[test]
fn untyped_group_acts_as_object() {
    let mapping = mapping_from(
        r#"{
            "mappings": {
                "properties": {
                    "author": {
                        "properties": {
                            "first_name": {"type": "keyword"},
                            "last_name": {"type": "keyword"}
                        }
                    }
                }
            }
        }"#,
    );
    let engine = fixed_engine(41);

    for document in engine.generate(&mapping, &ResolvedOverrides::default(), 5) {
        let author = document
            .get("author")
            .and_then(Value::as_object)
            .expect("author object");
        let keys: Vec<&str> = author.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first_name", "last_name"]);
    }
}
