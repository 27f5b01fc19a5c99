// src/core/rewrite/script.rs
use anyhow::{Context as _, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::rewrite::stamp_target;
use crate::core::walker::SCRIPT_EXT;
use crate::models::RewriteOutcome;

/// Static `import`/`export … from` specifiers, plus side-effect imports.
/// The quoted specifier cannot contain a quote, so the character class
/// between the keyword and `from` can never jump across another string.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<prefix>\b(?:import|export)\b[^'";]*?\bfrom\s*|\bimport\s*)(?:"(?P<dq>[^"]+)"|'(?P<sq>[^']+)')"#,
    )
    .expect("import pattern is valid")
});

/// Rewrites relative module references inside one build-output script.
///
/// Only specifiers beginning with `./` or `../` are candidates; bare
/// package names and absolute paths pass through untouched. Resolution
/// is always relative to the host file's directory.
#[must_use]
pub fn rewrite_script(content: &str, host_dir: &Path) -> RewriteOutcome {
    let text = IMPORT_RE.replace_all(content, |caps: &Captures| {
        let (raw, quote) = match (caps.name("dq"), caps.name("sq")) {
            (Some(m), _) => (m.as_str(), '"'),
            (_, Some(m)) => (m.as_str(), '\''),
            _ => return caps[0].to_owned(),
        };

        if !raw.starts_with("./") && !raw.starts_with("../") {
            return caps[0].to_owned();
        }

        match stamp_target(raw, host_dir, None, &[SCRIPT_EXT]) {
            Some(target) => format!("{}{quote}{target}{quote}", &caps["prefix"]),
            None => caps[0].to_owned(),
        }
    });

    RewriteOutcome {
        changed: text != content,
        text: text.into_owned(),
    }
}

/// Reads, rewrites and (unless `dry_run`) writes back one script file.
///
/// Returns whether the file changed.
///
/// # Errors
///
/// Returns an error if the host file itself cannot be read or written.
pub fn process_file(path: &Path, dry_run: bool) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    let host_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let outcome = rewrite_script(&content, host_dir);
    if outcome.changed {
        debug!(path = %path.display(), "rewriting script file");
        if !dry_run {
            fs::write(path, &outcome.text)
                .with_context(|| format!("Failed to write script file: {}", path.display()))?;
        }
    }
    Ok(outcome.changed)
}
