// src/core/rewrite/markup.rs
use anyhow::{Context as _, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::rewrite::stamp_target;
use crate::core::walker::{SCRIPT_EXT, STYLE_EXT};
use crate::models::RewriteOutcome;

/// `href`/`src` attributes with a single- or double-quoted value. The
/// spacing around `=` and the quote style are captured so unchanged
/// references survive byte-for-byte.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?P<attr>href|src)(?P<eq>\s*=\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#)
        .expect("attribute pattern is valid")
});

/// Rewrites stylesheet and script references inside one markup file's text.
///
/// Root-relative targets (leading `/`) resolve against `root`; everything
/// else resolves against `host_dir`. External and unreadable targets are
/// left untouched.
#[must_use]
pub fn rewrite_markup(content: &str, host_dir: &Path, root: &Path) -> RewriteOutcome {
    let text = ATTR_RE.replace_all(content, |caps: &Captures| {
        let (raw, quote) = match (caps.name("dq"), caps.name("sq")) {
            (Some(m), _) => (m.as_str(), '"'),
            (_, Some(m)) => (m.as_str(), '\''),
            _ => return caps[0].to_owned(),
        };

        match stamp_target(raw, host_dir, Some(root), &[STYLE_EXT, SCRIPT_EXT]) {
            Some(target) => format!("{}{}{quote}{target}{quote}", &caps["attr"], &caps["eq"]),
            None => caps[0].to_owned(),
        }
    });

    RewriteOutcome {
        changed: text != content,
        text: text.into_owned(),
    }
}

/// Reads, rewrites and (unless `dry_run`) writes back one markup file.
///
/// Returns whether the file changed.
///
/// # Errors
///
/// Returns an error if the host file itself cannot be read or written.
/// Unreadable reference targets are not errors.
pub fn process_file(path: &Path, root: &Path, dry_run: bool) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markup file: {}", path.display()))?;
    let host_dir = path.parent().unwrap_or(root);

    let outcome = rewrite_markup(&content, host_dir, root);
    if outcome.changed {
        debug!(path = %path.display(), "rewriting markup file");
        if !dry_run {
            fs::write(path, &outcome.text)
                .with_context(|| format!("Failed to write markup file: {}", path.display()))?;
        }
    }
    Ok(outcome.changed)
}
