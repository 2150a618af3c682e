use tsptree_engine::{PrintMode, TablePreset, TreeModel, build_tree, render_text};
use tsptree_testing::fixtures::{self, entry, row_entry};

fn print(model: &TreeModel) -> String {
    let mut out = Vec::new();
    model.print_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_thread_tree_text() {
    let model = build_tree(fixtures::thread_tree(), None);
    insta::assert_snapshot!(render_text(&model), @r"
    systemd (systemd, 10) -1  (pid, 1)
      |____journald (journald, 11) 10  (pid, 312)
      | |____worker (worker, 12) 11  (tid, 313)
      |____sshd (sshd, 13) 10  (pid, 540)
    kthreadd (kthreadd, 20) -1  (pid, 2)
    ");
}

#[test]
fn test_table_uses_descriptor_headers_and_label_rows() {
    let model = TreeModel::from_document(fixtures::process_table());
    assert_eq!(
        model.print_mode(),
        PrintMode::Table(vec![
            "Process".to_string(),
            "TID".to_string(),
            "State".to_string()
        ])
    );

    assert_eq!(
        model.rows(),
        vec![
            vec!["init", "1", "S"],
            vec!["  |____bash", "204", "S"],
            vec!["  | |____vim", "977", "R"],
        ]
    );

    let output = print(&model);
    let lines: Vec<_> = output.lines().collect();

    // top border, header, separator, then rows split by dividers
    assert!(lines[0].starts_with('┌'));
    let header = lines[1];
    let process = header.find("Process").unwrap();
    let tid = header.find("TID").unwrap();
    let state = header.find("State").unwrap();
    assert!(process < tid && tid < state);
    assert!(lines[2].starts_with('╞'));

    let body: Vec<_> = lines.iter().filter(|l| l.starts_with('│')).skip(1).collect();
    assert_eq!(body.len(), 3);
    assert!(body[0].contains("init") && body[0].contains(" 1 ") && body[0].contains(" S "));
    assert!(body[1].contains("  |____bash") && body[1].contains("204"));
    assert!(body[2].contains("  | |____vim") && body[2].contains("977"));
    assert!(lines.last().unwrap().starts_with('└'));
}

#[test]
fn test_table_row_count_mismatch_uses_positional_headers() {
    let model = build_tree(
        vec![
            row_entry(1, -1, &["init", "1"]),
            row_entry(2, 1, &["bash", "204"]),
            row_entry(3, 2, &["vim", "977", "R"]),
        ],
        Some(fixtures::descriptors(&["Process", "TID"])),
    );

    let output = print(&model);
    let header = output.lines().nth(1).unwrap();
    assert!(!header.contains("Process"));
    assert!(header.contains(" 0 ") && header.contains(" 1 ") && header.contains(" 2 "));
    assert!(output.contains("bash"));
}

#[test]
fn test_table_row_count_match_keeps_descriptor_headers() {
    let model = build_tree(
        vec![
            row_entry(1, -1, &["init", "1", "S"]),
            row_entry(2, 1, &["bash", "204", "S"]),
        ],
        Some(fixtures::descriptors(&["Process", "TID"])),
    );

    let output = print(&model);
    let header = output.lines().nth(1).unwrap();
    assert!(header.contains("Process") && header.contains("TID"));
    assert!(output.contains("204"));
}

#[test]
fn test_table_mode_prints_lines_before_grid() {
    let model = build_tree(
        vec![
            entry(1, -1, "trace-root"),
            row_entry(2, 1, &["bash", "204"]),
        ],
        Some(fixtures::descriptors(&["Process", "TID"])),
    );

    let output = print(&model);
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("trace-root (trace-root, 1) -1 "));
    assert!(lines.next().unwrap().starts_with('┌'));
    assert!(output.contains("  |____bash"));
}

#[test]
fn test_explicit_text_mode_ignores_descriptors() {
    let model = TreeModel::from_document(fixtures::process_table());
    let mut out = Vec::new();
    model
        .print_as(&mut out, &PrintMode::Text, TablePreset::Utf8)
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_snapshot_json() {
    let model = build_tree(fixtures::two_level(), None);
    insta::assert_json_snapshot!(model.snapshot(), @r#"
    {
      "nodes": [
        {
          "id": 1,
          "parent_id": -1,
          "depth": 0,
          "labels": [
            "A"
          ]
        },
        {
          "id": 2,
          "parent_id": 1,
          "depth": 1,
          "labels": [
            "B"
          ]
        }
      ],
      "orphans": []
    }
    "#);
}

#[test]
fn test_snapshot_of_deep_chain_serializes() {
    let mut entries = vec![entry(0, -1, "n0")];
    for i in 1..200_000 {
        entries.push(entry(i, i - 1, "n"));
    }
    let model = build_tree(entries, None);

    let snapshot = model.snapshot();
    assert_eq!(snapshot.nodes.len(), 200_000);
    assert_eq!(snapshot.nodes[199_999].depth, 199_999);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.ends_with(r#""orphans":[]}"#));
}

#[test]
fn test_snapshot_lists_orphans_and_headers() {
    let model = build_tree(
        fixtures::forward_reference(),
        Some(fixtures::descriptors(&["Name"])),
    )
    .with_trace("ust");

    let snapshot = model.snapshot();
    assert_eq!(snapshot.trace.as_deref(), Some("ust"));
    assert_eq!(snapshot.headers, Some(vec!["Name".to_string()]));
    assert_eq!(snapshot.orphans, vec![2]);
    let top: Vec<_> = snapshot.nodes.iter().map(|n| (n.id, n.depth)).collect();
    assert_eq!(top, vec![(1, 0), (3, 0)]);
}
