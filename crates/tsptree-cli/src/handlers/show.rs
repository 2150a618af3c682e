use super::HandlerContext;
use crate::presentation::TreeView;
use crate::types::{OutputFormat, ViewMode};
use anyhow::Result;
use std::io::Write;
use tsptree_engine::{PrintMode, TreeModel};

pub fn handle(ctx: &HandlerContext, input: &str, mode: ViewMode) -> Result<()> {
    let model = ctx.load_model(input)?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&model.snapshot())?);
        }
        OutputFormat::Plain => {
            let print_mode = resolve_print_mode(&model, mode);
            let view = TreeView::new(&model, &print_mode, ctx.table_preset, ctx.color);
            let mut out = std::io::stdout().lock();
            view.write_to(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// `table` without descriptors still draws a grid, with positional headers.
fn resolve_print_mode(model: &TreeModel, mode: ViewMode) -> PrintMode {
    match mode {
        ViewMode::Auto => model.print_mode(),
        ViewMode::Text => PrintMode::Text,
        ViewMode::Table => match model.print_mode() {
            PrintMode::Table(headers) => PrintMode::Table(headers),
            PrintMode::Text => PrintMode::Table(Vec::new()),
        },
    }
}
