use std::io::Write;
use tsptree_types::{Error, ROOT_PARENT_ID, TreeDocument};

#[test]
fn test_bare_entry_array() {
    let doc = TreeDocument::from_json_str(
        r#"[{"id": 1, "labels": ["A"]}, {"id": 2, "parent_id": 1, "labels": ["B"]}]"#,
    )
    .unwrap();

    assert_eq!(doc.entries.len(), 2);
    assert!(doc.descriptors.is_none());
    assert!(doc.trace.is_none());
    assert_eq!(doc.entries[0].parent_id, ROOT_PARENT_ID);
    assert_eq!(doc.entries[1].parent_id, 1);
}

#[test]
fn test_full_document_with_descriptors() {
    let doc = TreeDocument::from_json_str(
        r#"{
            "trace": "kernel-trace",
            "descriptors": [{"text": "Process"}, {"name": "TID"}],
            "entries": [{"id": 10, "parentId": -1, "labels": ["init", "1"]}]
        }"#,
    )
    .unwrap();

    assert_eq!(doc.trace.as_deref(), Some("kernel-trace"));
    let texts: Vec<_> = doc
        .descriptors
        .as_ref()
        .unwrap()
        .iter()
        .map(|d| d.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Process", "TID"]);
    assert_eq!(doc.entries[0].labels, vec!["init", "1"]);
}

#[test]
fn test_headers_alias_for_descriptors() {
    let doc = TreeDocument::from_json_str(
        r#"{"headers": [{"name": "Name"}], "entries": []}"#,
    )
    .unwrap();

    assert_eq!(doc.descriptors.unwrap().len(), 1);
    assert!(doc.entries.is_empty());
}

#[test]
fn test_invalid_document_is_json_error() {
    let err = TreeDocument::from_json_str(r#"{"entries": 3}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("Invalid tree document"));
}

#[test]
fn test_from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"[{{"id": 7, "labels": ["only"]}}]"#).unwrap();

    let doc = TreeDocument::from_path(&path).unwrap();
    assert_eq!(doc.entries.len(), 1);
    assert_eq!(doc.entries[0].id, 7);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TreeDocument::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
