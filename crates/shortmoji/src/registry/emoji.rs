//! # Emoji Entry

use core::fmt::{Display, Formatter};

/// An immutable registry entry.
///
/// Pairs one substitution `value` with every alias which resolves to it.
/// The first alias is the canonical one, used when encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emoji {
    value: String,

    aliases: Vec<String>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    name: Option<String>,
}

impl Emoji {
    /// Create a new entry.
    ///
    /// Aliases are not validated here; see [`crate::registry::EmojiRegistry::build`].
    ///
    /// ## Arguments
    /// * `value` - the string substituted for a resolved token.
    /// * `aliases` - the token bodies which resolve to this entry.
    pub fn new<V, I, S>(
        value: V,
        aliases: I,
    ) -> Self
    where
        V: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    /// Set the human-readable name.
    pub fn with_name<N: Into<String>>(
        mut self,
        name: N,
    ) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The substitution value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// All aliases, canonical first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The human-readable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The canonical (first) alias.
    ///
    /// Always `Some` for entries held by a registry.
    pub fn canonical_alias(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }

    /// The canonical `:alias:` shortcode.
    pub fn code(&self) -> Option<String> {
        self.canonical_alias().map(|alias| format!(":{alias}:"))
    }

    /// Does this entry list `alias`?
    pub fn has_alias(
        &self,
        alias: &str,
    ) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

impl Display for Emoji {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        let emoji = Emoji::new("\u{1f44d}", ["+1", "thumbsup"]).with_name("thumbs up sign");

        assert_eq!(emoji.value(), "\u{1f44d}");
        assert_eq!(emoji.aliases(), &["+1".to_string(), "thumbsup".to_string()]);
        assert_eq!(emoji.name(), Some("thumbs up sign"));
        assert_eq!(emoji.canonical_alias(), Some("+1"));
        assert_eq!(emoji.code(), Some(":+1:".to_string()));
        assert_eq!(emoji.to_string(), "\u{1f44d}");

        assert!(emoji.has_alias("thumbsup"));
        assert!(!emoji.has_alias(":thumbsup:"));
    }

    #[test]
    fn test_no_aliases() {
        let emoji = Emoji::new("x", Vec::<String>::new());
        assert_eq!(emoji.name(), None);
        assert_eq!(emoji.canonical_alias(), None);
        assert_eq!(emoji.code(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let emoji: Emoji =
            serde_json::from_str(r#"{"value": "💥", "aliases": ["boom", "collision"]}"#)
                .unwrap();
        assert_eq!(emoji, Emoji::new("\u{1f4a5}", ["boom", "collision"]));

        let json = serde_json::to_string(&emoji.clone().with_name("collision symbol")).unwrap();
        let back: Emoji = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), Some("collision symbol"));
        assert!(!serde_json::to_string(&emoji).unwrap().contains("name"));
    }
}
