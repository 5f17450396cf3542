//! ANSI palette for tree and token dumps.
//!
//! Three roles plus reset: operators, literal values, and structural labels.
//! Standard 16-color codes only, readable on light and dark themes.

/// Palette handed to printers; `OFF` makes every field empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub op: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        op: "\x1b[34m",
        value: "\x1b[32m",
        label: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        op: "",
        value: "",
        label: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if colors are enabled.
    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
