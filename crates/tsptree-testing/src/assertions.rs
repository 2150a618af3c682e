//! Custom assertions for tsptree JSON output.
//!
//! Work on the `--format json` snapshot emitted by `tsptree show`.

use anyhow::{Context, Result};
use serde_json::Value;

fn nodes(json: &Value) -> Result<&Vec<Value>> {
    json["nodes"]
        .as_array()
        .context("Expected 'nodes' array in JSON")
}

/// Ids of the top-level nodes, in order.
pub fn top_level_ids(json: &Value) -> Result<Vec<i64>> {
    let mut ids = Vec::new();
    for node in nodes(json)? {
        let depth = node["depth"].as_u64().context("Node missing integer 'depth'")?;
        if depth == 0 {
            ids.push(node["id"].as_i64().context("Node missing integer 'id'")?);
        }
    }
    Ok(ids)
}

/// Count every node reachable in the snapshot.
pub fn count_nodes(json: &Value) -> Result<usize> {
    Ok(nodes(json)?.len())
}

/// Deepest `depth` in the snapshot, if it has any nodes.
pub fn max_depth(json: &Value) -> Result<Option<u64>> {
    let mut max = None;
    for node in nodes(json)? {
        let depth = node["depth"].as_u64().context("Node missing integer 'depth'")?;
        max = max.max(Some(depth));
    }
    Ok(max)
}

/// Assert the snapshot lists exactly these orphan ids.
pub fn assert_orphans(json: &Value, expected: &[i64]) -> Result<()> {
    let orphans: Vec<i64> = json["orphans"]
        .as_array()
        .context("Expected 'orphans' array in JSON")?
        .iter()
        .filter_map(Value::as_i64)
        .collect();

    if orphans != expected {
        anyhow::bail!("Expected orphans {:?}, got {:?}", expected, orphans);
    }

    Ok(())
}
