/// Options for configuring the cursor behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest value nesting the cursor descends into; the document root is at depth 1
    pub max_depth: u32,
}

impl Options {
    pub const DEFAULT_MAX_DEPTH: u32 = 1024;

    #[allow(clippy::must_use_candidate)]
    /// Creates new default options
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
