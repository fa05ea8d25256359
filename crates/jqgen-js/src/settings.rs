//! Writer settings for generated JavaScript

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    #[default]
    Single,
    /// Double quotes: `"hello"`
    Double,
}

impl QuoteStyle {
    /// The quote character
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Indentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Tabs
    Tabs,
    /// Spaces with specified width
    Spaces(u8),
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl IndentStyle {
    /// One indentation step as text
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(usize::from(n)),
        }
    }
}

/// Settings consulted while rendering expressions to source text
///
/// The default is the compact form: no line breaks, no indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterSettings {
    /// Emit line breaks and indentation
    pub indent_and_align: bool,
    /// Indentation style (only used with `indent_and_align`)
    pub indent: IndentStyle,
    /// Line separator (only used with `indent_and_align`)
    pub newline: String,
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
    /// Render-time replacements for alias symbols, keyed by alias key
    pub aliases: BTreeMap<String, String>,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            indent_and_align: false,
            indent: IndentStyle::default(),
            newline: "\n".to_string(),
            quote_style: QuoteStyle::default(),
            aliases: BTreeMap::new(),
        }
    }
}

impl WriterSettings {
    /// Compact output (same as default)
    pub fn compact() -> Self {
        Self::default()
    }

    /// Human readable output with line breaks and indentation
    pub fn pretty() -> Self {
        Self {
            indent_and_align: true,
            ..Self::default()
        }
    }

    /// Set the quote style
    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    /// Override the rendered name of an alias symbol
    pub fn with_alias(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(key.into(), name.into());
        self
    }

    /// Resolve an alias, falling back to `fallback` when not overridden
    pub fn resolve_alias<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.aliases.get(key).map(String::as_str).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WriterSettings::default();
        assert!(!settings.indent_and_align);
        assert_eq!(settings.indent, IndentStyle::Spaces(2));
        assert_eq!(settings.quote_style, QuoteStyle::Single);
        assert_eq!(settings.newline, "\n");
        assert!(settings.aliases.is_empty());
    }

    #[test]
    fn test_alias_resolution() {
        let settings = WriterSettings::default().with_alias("jquery", "jQuery");
        assert_eq!(settings.resolve_alias("jquery", "$"), "jQuery");
        assert_eq!(settings.resolve_alias("other", "x"), "x");
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
        assert_eq!(IndentStyle::Spaces(4).unit(), "    ");
        assert_eq!(IndentStyle::Spaces(0).unit(), "");
    }
}
