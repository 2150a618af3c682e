use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use tsptree_engine::TreeModel;

#[derive(Debug, Clone, Serialize)]
pub struct OrphanEntry {
    pub id: i64,
    pub parent_id: i64,
    pub label: String,
}

/// What `check` found about how entries attached.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    pub entries: usize,
    pub reachable: usize,
    pub top_level: usize,
    /// Orphans plus everything below them.
    pub unreachable: usize,
    pub orphans: Vec<OrphanEntry>,
}

impl CheckReport {
    pub fn from_model(model: &TreeModel) -> Self {
        let unreachable = model.unreachable().len();
        Self {
            trace: model.trace().map(str::to_string),
            entries: model.len(),
            reachable: model.len() - unreachable,
            top_level: model.root().children().len(),
            unreachable,
            orphans: model
                .orphans()
                .into_iter()
                .map(|entry| OrphanEntry {
                    id: entry.id,
                    parent_id: entry.parent_id,
                    label: entry.labels.first().cloned().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

pub struct CheckView<'a> {
    report: &'a CheckReport,
    color: bool,
}

impl<'a> CheckView<'a> {
    pub fn new(report: &'a CheckReport, color: bool) -> Self {
        Self { report, color }
    }
}

impl fmt::Display for CheckView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;

        if let Some(trace) = &report.trace {
            writeln!(f, "Trace:     {}", trace)?;
        }
        writeln!(
            f,
            "Entries:   {} ({} in tree, {} left out)",
            report.entries, report.reachable, report.unreachable
        )?;
        writeln!(f, "Top-level: {}", report.top_level)?;
        writeln!(f)?;

        if report.orphans.is_empty() {
            let msg = "All entries attached.";
            if self.color {
                writeln!(f, "{}", msg.green())?;
            } else {
                writeln!(f, "{}", msg)?;
            }
            return Ok(());
        }

        let heading = "Orphaned entries (parent not seen before them):";
        if self.color {
            writeln!(f, "{}", heading.yellow())?;
        } else {
            writeln!(f, "{}", heading)?;
        }
        writeln!(f, "  {:>8}  {:>8}  LABEL", "ID", "PARENT")?;
        for orphan in &report.orphans {
            writeln!(
                f,
                "  {:>8}  {:>8}  {}",
                orphan.id, orphan.parent_id, orphan.label
            )?;
        }
        Ok(())
    }
}
