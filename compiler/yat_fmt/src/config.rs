//! Printer configuration.

/// Default indentation: four spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Layout options for [`PrettyPrinter`](crate::PrettyPrinter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Text prepended once per nesting level.
    pub indent: String,
}

impl PrinterConfig {
    /// Indent with `width` spaces per level.
    pub fn with_indent_width(width: usize) -> Self {
        PrinterConfig {
            indent: " ".repeat(width),
        }
    }

    /// Indent with one tab per level.
    pub fn tabs() -> Self {
        PrinterConfig {
            indent: "\t".to_string(),
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }
}
