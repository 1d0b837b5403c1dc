use std::io::Write;

use crate::registry_source::RegistrySourceArgs;

/// Args for the list command.
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    registry: RegistrySourceArgs,
}

impl ListArgs {
    /// Run the list command.
    ///
    /// One entry per line: `value<TAB>:alias: ...<TAB>name`.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let registry = self.registry.load_registry()?;

        let mut out = std::io::stdout().lock();
        for entry in registry.entries() {
            let codes = entry
                .aliases()
                .iter()
                .map(|alias| format!(":{alias}:"))
                .collect::<Vec<_>>();
            writeln!(
                out,
                "{}\t{}\t{}",
                entry.value(),
                codes.join(" "),
                entry.name().unwrap_or_default()
            )?;
        }

        Ok(())
    }
}
