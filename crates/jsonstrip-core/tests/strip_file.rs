use jsonstrip_core::{strip_field_from_file, strip_file, StripError, StripOptions, StripStats};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIELD: &str = "local_image_raw";

fn seed(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("anime.json");
    fs::write(&path, content).expect("seed file");
    (dir, path)
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read back");
    serde_json::from_str(&text).expect("valid json on disk")
}

#[test]
fn strips_the_field_from_matching_records() {
    let (_dir, path) = seed(r#"[{"id":1,"local_image_raw":"x","title":"A"},{"id":2,"title":"B"}]"#);

    let stats = strip_field_from_file(&path, FIELD).expect("strip");

    assert_eq!(stats.removed, 1);
    assert_eq!(stats.records, 2);
    assert_eq!(
        read_json(&path),
        json!([{"id": 1, "title": "A"}, {"id": 2, "title": "B"}])
    );
}

#[test]
fn output_is_four_space_pretty_json() {
    let (_dir, path) = seed(r#"[{"id":1,"local_image_raw":"x","title":"A"},{"id":2,"title":"B"}]"#);

    strip_field_from_file(&path, FIELD).expect("strip");

    let expected = r#"[
    {
        "id": 1,
        "title": "A"
    },
    {
        "id": 2,
        "title": "B"
    }
]"#;
    assert_eq!(fs::read_to_string(&path).expect("read"), expected);
}

#[test]
fn no_matches_means_zero_count_and_same_structure() {
    let input = json!([
        {"id": 1, "title": "A", "meta": {"local_image_raw": "nested"}},
        {"id": 2, "title": "B", "score": 8.5}
    ]);
    let (_dir, path) = seed(&input.to_string());

    let stats = strip_field_from_file(&path, FIELD).expect("strip");

    assert_eq!(stats.removed, 0);
    assert_eq!(read_json(&path), input);
}

#[test]
fn counts_every_matching_record_and_keeps_other_keys() {
    let records: Vec<Value> = (0..10)
        .map(|i| {
            if i % 3 == 0 {
                json!({"id": i, "local_image_raw": format!("blob-{i}"), "title": format!("T{i}")})
            } else {
                json!({"id": i, "title": format!("T{i}")})
            }
        })
        .collect();
    let (_dir, path) = seed(&Value::Array(records).to_string());

    let stats = strip_field_from_file(&path, FIELD).expect("strip");

    assert_eq!(stats.removed, 4);
    let out = read_json(&path);
    for (i, record) in out.as_array().expect("array").iter().enumerate() {
        assert_eq!(record, &json!({"id": i, "title": format!("T{i}")}));
    }
}

#[test]
fn second_run_is_a_no_op() {
    let (_dir, path) = seed(r#"[{"id":1,"local_image_raw":"x"},{"id":2,"local_image_raw":"y"}]"#);

    let first = strip_field_from_file(&path, FIELD).expect("first run");
    let after_first = fs::read_to_string(&path).expect("read");
    let second = strip_field_from_file(&path, FIELD).expect("second run");
    let after_second = fs::read_to_string(&path).expect("read");

    assert_eq!(first.removed, 2);
    assert_eq!(second.removed, 0);
    assert_eq!(after_first, after_second);
}

#[test]
fn object_document_is_written_back_unchanged() {
    let (_dir, path) = seed(r#"{"local_image_raw":"x","id":1}"#);

    let stats = strip_field_from_file(&path, FIELD).expect("strip");

    assert_eq!(stats, StripStats::default());
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "{\n    \"local_image_raw\": \"x\",\n    \"id\": 1\n}"
    );
}

#[test]
fn scalar_document_is_written_back_unchanged() {
    let (_dir, path) = seed("  42\n");

    let stats = strip_field_from_file(&path, FIELD).expect("strip");

    assert!(!stats.is_array);
    assert_eq!(stats.removed, 0);
    assert_eq!(fs::read_to_string(&path).expect("read"), "42");
}

#[test]
fn non_ascii_survives_unescaped() {
    let (_dir, path) = seed(r#"[{"title":"日本語","alt":"café","local_image_raw":"x"}]"#);

    strip_field_from_file(&path, FIELD).expect("strip");

    let text = fs::read_to_string(&path).expect("read");
    assert!(text.contains("\"日本語\""), "{text}");
    assert!(text.contains("\"café\""), "{text}");
    assert!(!text.contains("\\u"), "{text}");
}

#[test]
fn untouched_numbers_keep_their_spelling() {
    let (_dir, path) = seed(r#"[{"id":123456789012345678901234567890,"local_image_raw":1}]"#);

    strip_field_from_file(&path, FIELD).expect("strip");

    let text = fs::read_to_string(&path).expect("read");
    assert!(text.contains("123456789012345678901234567890"), "{text}");
}

#[test]
fn malformed_input_is_a_read_error_and_file_is_untouched() {
    let truncated = r#"[{"id":1,"local_image_raw":"x""#;
    let (_dir, path) = seed(truncated);

    let err = strip_field_from_file(&path, FIELD).unwrap_err();

    assert!(matches!(err, StripError::ReadOrParse { .. }), "{err:?}");
    assert!(!err.is_not_found());
    assert_eq!(fs::read_to_string(&path).expect("read"), truncated);
}

#[test]
fn missing_file_is_a_read_error_and_nothing_is_created() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    let err = strip_field_from_file(&path, FIELD).unwrap_err();

    assert!(matches!(err, StripError::ReadOrParse { .. }), "{err:?}");
    assert!(err.is_not_found());
    assert_eq!(err.path(), path);
    assert!(err.to_string().contains("missing.json"), "{err}");
    assert!(!path.exists());
}

#[test]
fn dry_run_reports_without_writing() {
    let input = r#"[{"id":1,"local_image_raw":"x"}]"#;
    let (_dir, path) = seed(input);

    let stats = strip_file(&path, &StripOptions::default().dry_run(true)).expect("dry run");

    assert_eq!(stats.removed, 1);
    assert_eq!(fs::read_to_string(&path).expect("read"), input);
}

#[test]
fn custom_field_and_indent() {
    let (_dir, path) = seed(r#"[{"id":1,"thumb":"t","local_image_raw":"x"}]"#);

    let opts = StripOptions::new("thumb").with_indent(2);
    let stats = strip_file(&path, &opts).expect("strip");

    assert_eq!(stats.removed, 1);
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "[\n  {\n    \"id\": 1,\n    \"local_image_raw\": \"x\"\n  }\n]"
    );
}
