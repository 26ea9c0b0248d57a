//! Language services.

use std::collections::HashMap;

use moped_plugin::plugin;

/// Keyword recognition for Rust sources.
#[plugin]
#[derive(Debug, Default, Clone, Copy)]
pub struct RustGrammar;

impl RustGrammar {
    const KEYWORDS: &'static [&'static str] = &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while",
    ];

    /// Whether `word` is a reserved word.
    pub fn is_keyword(&self, word: &str) -> bool {
        Self::KEYWORDS.contains(&word)
    }
}

/// Indentation style applied on new lines.
#[plugin]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    /// One tab per level.
    Tabs,
    /// The given number of spaces per level.
    Spaces(u8),
}

impl IndentMode {
    /// Indentation text for `level`.
    pub fn indent(&self, level: usize) -> String {
        match self {
            Self::Tabs => "\t".repeat(level),
            Self::Spaces(n) => " ".repeat(level * usize::from(*n)),
        }
    }
}

/// Per-buffer token counts. Not a plugin.
#[derive(Debug, Default)]
pub struct TokenCache {
    counts: HashMap<String, usize>,
}

impl TokenCache {
    /// Counts whitespace-separated tokens of `text`.
    pub fn ingest(&mut self, text: &str) {
        for token in text.split_whitespace() {
            *self.counts.entry(token.to_string()).or_default() += 1;
        }
    }

    /// How often `token` was seen.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }
}
