// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Name of the optional per-project exclusion file at the root.
pub const IGNORE_FILE: &str = ".cbignore";

/// Gitignore-style exclusion patterns for the tree walk.
///
/// Each entry is a compiled glob plus a negation flag; negation patterns
/// (`!` prefix) re-include paths a later pattern would otherwise exclude.
#[derive(Debug, Default)]
pub struct Patterns {
    patterns: Vec<(Pattern, bool)>,
}

impl Patterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds one pattern line.
    ///
    /// Blank lines and `#` comments are skipped. A trailing `/` marks a
    /// directory pattern and matches everything beneath it; a bare name
    /// (no separators, no glob metacharacters) matches at any depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid glob syntax.
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (line, is_negation) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));

        // Patterns are compiled both as written and with a recursive
        // prefix so they match at the root and at any depth
        let variants = if let Some(dir) = line.strip_suffix('/') {
            vec![format!("{dir}/**"), format!("**/{dir}/**")]
        } else if line.contains('/') {
            vec![line.to_owned()]
        } else {
            vec![line.to_owned(), format!("**/{line}")]
        };

        for variant in variants {
            let compiled = Pattern::new(&variant)
                .with_context(|| format!("Invalid ignore pattern: {line}"))?;
            self.patterns.push((compiled, is_negation));
        }
        Ok(())
    }

    /// Returns true if the path is excluded by the loaded patterns.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        // Negations win over everything else
        for (pattern, is_neg) in &self.patterns {
            if *is_neg && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return false;
            }
        }

        for (pattern, is_neg) in &self.patterns {
            if !is_neg && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return true;
            }
        }

        false
    }
}

/// Loads exclusion patterns from the root's ignore file, if present.
///
/// A missing file yields an empty pattern set; this is the common case.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if it
/// contains a line with invalid glob syntax.
pub fn load_ignore_patterns(root: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();
    let path = root.join(IGNORE_FILE);
    if !path.is_file() {
        return Ok(patterns);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;
    for line in content.lines() {
        patterns.add_pattern(line)?;
    }
    Ok(patterns)
}
