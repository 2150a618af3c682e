use crate::config::Config;
use crate::types::{ColorChoice, OutputFormat};
use anyhow::{Context, Result};
use std::path::Path;
use tsptree_engine::{TablePreset, TreeModel};
use tsptree_types::TreeDocument;

/// Context for handler execution with consistent presentation settings
pub struct HandlerContext {
    pub format: OutputFormat,
    pub color: bool,
    pub table_preset: TablePreset,
}

impl HandlerContext {
    /// `color` from the command line wins over the config file.
    pub fn new(format: OutputFormat, color: Option<ColorChoice>, config: &Config) -> Self {
        Self {
            format,
            color: color.unwrap_or(config.display.color).enabled(),
            table_preset: config.display.table_preset,
        }
    }

    /// Read a tree document from a path, or from stdin when `input` is `-`.
    pub fn load_document(&self, input: &str) -> Result<TreeDocument> {
        let document = if input == "-" {
            TreeDocument::from_reader(std::io::stdin().lock())
                .map_err(crate::error::Error::from)
                .context("Failed to read tree document from stdin")?
        } else {
            TreeDocument::from_path(Path::new(input))
                .map_err(crate::error::Error::from)
                .with_context(|| format!("Failed to load tree document: {}", input))?
        };

        tracing::debug!(
            entries = document.entries.len(),
            descriptors = document.descriptors.as_ref().map_or(0, Vec::len),
            "document loaded"
        );
        Ok(document)
    }

    pub fn load_model(&self, input: &str) -> Result<TreeModel> {
        let model = TreeModel::from_document(self.load_document(input)?);
        if let Some(trace) = model.trace() {
            tracing::debug!(trace, entries = model.len(), "tree ready");
        }
        Ok(model)
    }
}
