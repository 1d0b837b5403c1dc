use std::{fs::File, io::BufReader, path::PathBuf, sync::Arc};

use shortmoji::{
    builtin::builtin_registry,
    registry::{Emoji, EmojiRegistry},
};

/// Registry source argument group.
#[derive(clap::Args, Debug)]
pub struct RegistrySourceArgs {
    /// Optional JSON source list (`[{"value": .., "aliases": [..], "name": ..}]`);
    /// the built-in table is used when absent.
    #[clap(long, default_value = None)]
    pub registry: Option<PathBuf>,
}

impl RegistrySourceArgs {
    /// Build the selected registry.
    pub fn load_registry(&self) -> Result<Arc<EmojiRegistry>, Box<dyn std::error::Error>> {
        let registry = match &self.registry {
            None => builtin_registry()?,
            Some(path) => {
                log::info!("loading registry source list: {}", path.display());
                let entries: Vec<Emoji> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
                EmojiRegistry::build(entries)?
            }
        };
        Ok(Arc::new(registry))
    }
}
