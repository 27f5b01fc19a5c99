// src/models.rs

/// Result of rewriting one host file's text.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// True if at least one reference's serialized form differs from the original.
    pub changed: bool,
    /// The full mutated text, identical to the input when `changed` is false.
    pub text: String,
}

#[derive(Debug, Default)]
pub struct RewriteSummary {
    pub markup_files: u64,
    pub script_files: u64,
}

impl RewriteSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            markup_files: 0,
            script_files: 0,
        }
    }

    pub fn record_markup(&mut self) {
        self.markup_files = self.markup_files.saturating_add(1);
    }

    pub fn record_script(&mut self) {
        self.script_files = self.script_files.saturating_add(1);
    }
}
