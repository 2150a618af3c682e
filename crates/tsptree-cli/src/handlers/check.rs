use super::HandlerContext;
use crate::presentation::{CheckReport, CheckView};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, input: &str, strict: bool) -> Result<()> {
    let model = ctx.load_model(input)?;
    let report = CheckReport::from_model(&model);

    for orphan in &report.orphans {
        tracing::debug!(id = orphan.id, parent_id = orphan.parent_id, "orphaned entry");
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print!("{}", CheckView::new(&report, ctx.color)),
    }

    if strict && !report.orphans.is_empty() {
        anyhow::bail!(
            "{} entries could not be attached to the tree",
            report.unreachable
        );
    }

    Ok(())
}
