use crate::types::ViewMode;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Build the tree from a document and print it")]
    Show {
        #[arg(help = "Tree document (JSON), or '-' for stdin")]
        input: String,

        #[arg(long, help = "Layout [default: from config, else auto]")]
        mode: Option<ViewMode>,
    },

    #[command(about = "Report entries that cannot be attached to the tree")]
    Check {
        #[arg(help = "Tree document (JSON), or '-' for stdin")]
        input: String,

        #[arg(long, help = "Fail when any entry is left out of the tree")]
        strict: bool,
    },
}
