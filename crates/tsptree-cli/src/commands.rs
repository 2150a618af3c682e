use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use crate::presentation::GuidanceView;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        print!("{}", GuidanceView);
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;
    let ctx = HandlerContext::new(cli.format, cli.color, &config);

    match command {
        Commands::Show { input, mode } => {
            handlers::show::handle(&ctx, &input, mode.unwrap_or(config.display.mode))
        }
        Commands::Check { input, strict } => handlers::check::handle(&ctx, &input, strict),
    }
}
