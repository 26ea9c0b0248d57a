//! Editing services.

use moped_plugin::plugin;

/// Counts edits applied to a buffer.
#[plugin]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FooService {
    edits: u64,
}

impl FooService {
    /// Creates a service with no recorded edits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one edit and returns the running total.
    pub fn record_edit(&mut self) -> u64 {
        self.edits += 1;
        tracing::trace!(edits = self.edits, "Edit recorded");
        self.edits
    }

    /// Edits recorded so far.
    pub fn edits(&self) -> u64 {
        self.edits
    }
}

/// String helpers shared by editing services. Not a plugin.
#[derive(Debug, Default, Clone, Copy)]
pub struct BarUtil;

impl BarUtil {
    /// Number of leading spaces or tabs.
    pub fn indent_width(line: &str) -> usize {
        line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
    }
}

/// Greedy word wrapping at a fixed column.
#[plugin]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWrapService {
    /// Wrap column, at least 1.
    pub width: usize,
}

impl WordWrapService {
    /// Creates a wrapper for `width` columns.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Wraps `text` on whitespace. Words longer than the width get a line
    /// of their own.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for word in text.split_whitespace() {
            let word_width = word.chars().count();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > self.width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}
