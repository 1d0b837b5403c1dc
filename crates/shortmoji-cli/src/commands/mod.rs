use crate::commands::{cat::CatArgs, list::ListArgs, lookup::LookupArgs};

pub mod cat;
pub mod list;
pub mod lookup;

/// Subcommands for shortmoji-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming shortcode decoder (or encoder).
    Cat(CatArgs),

    /// List registry entries.
    List(ListArgs),

    /// Resolve a single alias.
    Lookup(LookupArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Lookup(cmd) => cmd.run(),
        }
    }
}
