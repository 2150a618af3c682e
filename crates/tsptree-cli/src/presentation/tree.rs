use owo_colors::OwoColorize;
use std::io::{self, Write};
use tsptree_engine::{PrintMode, TablePreset, TreeLine, TreeModel};

// --------------------------------------------------------
// Tree View
// --------------------------------------------------------

/// Streams a tree in text or table layout.
///
/// Layout is the engine's; with color on, hierarchy guides are dimmed.
pub struct TreeView<'a> {
    model: &'a TreeModel,
    mode: &'a PrintMode,
    preset: TablePreset,
    color: bool,
}

impl<'a> TreeView<'a> {
    pub fn new(model: &'a TreeModel, mode: &'a PrintMode, preset: TablePreset, color: bool) -> Self {
        Self {
            model,
            mode,
            preset,
            color,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let color = self.color;
        self.model
            .print_with(out, self.mode, self.preset, |out, line: &TreeLine| {
                if color && !line.guide.is_empty() {
                    writeln!(out, "{}{}", line.guide.dimmed(), line.text)
                } else {
                    writeln!(out, "{line}")
                }
            })
    }
}
