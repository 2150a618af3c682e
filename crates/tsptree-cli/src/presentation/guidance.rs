use std::fmt;

/// Printed when tsptree runs without a subcommand.
pub struct GuidanceView;

impl fmt::Display for GuidanceView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "tsptree - Trace entry tree printer\n")?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  tsptree show tree.json              # Indented text, or a table with descriptors")?;
        writeln!(f, "  tsptree show tree.json --mode text  # Force indented text")?;
        writeln!(f, "  tsptree show - --format json        # Read stdin, print nested JSON")?;
        writeln!(f, "  tsptree check tree.json --strict    # Fail if entries are left out\n")?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  tsptree --help")
    }
}
