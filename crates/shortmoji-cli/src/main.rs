mod codec_mode;
mod commands;
mod input_output;
mod logging;
mod registry_source;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// shortmoji: `:shortcode:` to emoji, and back.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(1)?;

    args.command.run()
}
