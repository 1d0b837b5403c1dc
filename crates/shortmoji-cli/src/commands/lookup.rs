use crate::registry_source::RegistrySourceArgs;

/// Args for the lookup command.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    registry: RegistrySourceArgs,

    /// The alias to resolve; surrounding `:` delimiters are optional.
    alias: String,
}

/// Strip one pair of `:` delimiters, if present.
fn strip_delimiters(alias: &str) -> &str {
    alias
        .strip_prefix(':')
        .and_then(|a| a.strip_suffix(':'))
        .unwrap_or(alias)
}

impl LookupArgs {
    /// Run the lookup command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let registry = self.registry.load_registry()?;
        let alias = strip_delimiters(&self.alias);

        match registry.lookup(alias) {
            Some(emoji) => {
                println!("{emoji}");
                Ok(())
            }
            None => Err(format!("unknown alias: {alias:?}").into()),
        }
    }
}
