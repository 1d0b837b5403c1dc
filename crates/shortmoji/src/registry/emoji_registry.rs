//! # Emoji Registry

use crate::{
    errors::{SMResult, ShortmojiError},
    registry::{Emoji, validators::is_valid_alias},
    types::{SMHashMap, hash_map_with_capacity},
};

/// The immutable `{ alias -> entry }` lookup table.
///
/// Built once by [`EmojiRegistry::build`]; there is no insert or remove.
/// Lookups are read-only, so a registry may be shared across threads
/// (typically behind an `Arc`) without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmojiRegistry {
    /// Entries, in source order.
    entries: Vec<Emoji>,

    /// Alias to index into `entries`.
    alias_map: SMHashMap<String, usize>,
}

impl EmojiRegistry {
    /// Build a registry from a source list of entries.
    ///
    /// Every alias of every entry is inserted once; this is the only
    /// indexing cost, [`Self::lookup`] is a single hash probe.
    ///
    /// ## Arguments
    /// * `entries` - the source list, in priority-free order.
    ///
    /// ## Returns
    /// The registry; or the first error in source order:
    /// * [`ShortmojiError::EmptyAliases`] - an entry has no aliases.
    /// * [`ShortmojiError::InvalidAlias`] - an alias can never match the token grammar.
    /// * [`ShortmojiError::DuplicateAlias`] - an alias is listed twice,
    ///   in two entries or within one.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(entries)))]
    pub fn build<I>(entries: I) -> SMResult<Self>
    where
        I: IntoIterator<Item = Emoji>,
    {
        let entries = entries.into_iter().collect::<Vec<_>>();

        let alias_count = entries.iter().map(|e| e.aliases().len()).sum();
        let mut alias_map: SMHashMap<String, usize> = hash_map_with_capacity(alias_count);

        for (idx, entry) in entries.iter().enumerate() {
            if entry.aliases().is_empty() {
                return Err(ShortmojiError::EmptyAliases {
                    value: entry.value().to_string(),
                });
            }

            for alias in entry.aliases() {
                if !is_valid_alias(alias) {
                    return Err(ShortmojiError::InvalidAlias {
                        alias: alias.clone(),
                    });
                }

                if let Some(&prev) = alias_map.get(alias.as_str()) {
                    return Err(ShortmojiError::DuplicateAlias {
                        alias: alias.clone(),
                        first: entries[prev].value().to_string(),
                        second: entry.value().to_string(),
                    });
                }
                alias_map.insert(alias.clone(), idx);
            }
        }

        log::debug!(
            "built emoji registry: {} entries, {} aliases",
            entries.len(),
            alias_map.len()
        );

        Ok(Self { entries, alias_map })
    }

    /// Look up the entry for an alias.
    ///
    /// `alias` is the token body, without `:` delimiters.
    /// Absence is the normal outcome for unrecognized tokens.
    #[inline]
    pub fn lookup(
        &self,
        alias: &str,
    ) -> Option<&Emoji> {
        self.alias_map.get(alias).map(|&idx| &self.entries[idx])
    }

    /// Is `alias` registered?
    pub fn contains_alias(
        &self,
        alias: &str,
    ) -> bool {
        self.alias_map.contains_key(alias)
    }

    /// The entries, in source order.
    pub fn entries(&self) -> &[Emoji] {
        &self.entries
    }

    /// Iterate over every registered alias, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.alias_map.keys().map(String::as_str)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of registered aliases.
    pub fn alias_count(&self) -> usize {
        self.alias_map.len()
    }
}
