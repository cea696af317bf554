/// Knobs shared by every serialization that goes through one registry.
///
/// ```
/// use csx_script::SerializerOptions;
///
/// let options = SerializerOptions::new()
///     .with_line_break_threshold(80)
///     .with_indent("\t");
/// assert_eq!(options.line_break_threshold(), 80);
/// assert_eq!(options.max_depth(), 256);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializerOptions {
    line_break_threshold: usize,
    max_depth: usize,
    indent: &'static str,
}

impl SerializerOptions {
    pub const DEFAULT_LINE_BREAK_THRESHOLD: usize = 120;
    pub const DEFAULT_MAX_DEPTH: usize = 256;
    pub const DEFAULT_INDENT: &'static str = "    ";

    #[inline]
    pub const fn new() -> Self {
        Self {
            line_break_threshold: Self::DEFAULT_LINE_BREAK_THRESHOLD,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            indent: Self::DEFAULT_INDENT,
        }
    }

    /// Initializers and argument lists whose compact rendering is longer
    /// than this are printed one element per line.
    #[inline]
    pub const fn with_line_break_threshold(mut self, threshold: usize) -> Self {
        self.line_break_threshold = threshold;
        self
    }

    /// Nesting depth after which serialization fails with
    /// [`SerializeError::DepthLimit`](crate::SerializeError::DepthLimit).
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    #[inline]
    pub const fn line_break_threshold(&self) -> usize {
        self.line_break_threshold
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub const fn indent(&self) -> &'static str {
        self.indent
    }
}

impl Default for SerializerOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
