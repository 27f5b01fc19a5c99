// src/core/rewrite.rs
pub mod markup;
pub mod query;
pub mod script;

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::fingerprint::fingerprint;

/// Computes the rewritten form of one reference target, or `None` when
/// the reference must be left untouched.
///
/// `None` covers every non-candidate case: external targets, unexpected
/// extensions, root-relative targets when no root applies (the script
/// pass), and targets whose bytes cannot be read. The last case is a
/// silent skip by contract, not a failure.
pub(crate) fn stamp_target(
    raw: &str,
    host_dir: &Path,
    root: Option<&Path>,
    exts: &[&str],
) -> Option<String> {
    if query::is_external(raw) {
        return None;
    }

    let target = query::split_target(raw);
    if !exts.iter().any(|ext| target.path.ends_with(ext)) {
        return None;
    }

    let resolved = if let Some(rest) = target.path.strip_prefix('/') {
        root?.join(rest)
    } else {
        host_dir.join(target.path)
    };

    let bytes = match fs::read(&resolved) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(reference = raw, path = %resolved.display(), %err, "skipping unreadable target");
            return None;
        }
    };

    let token = fingerprint(&bytes);
    let merged = query::merge_version(target.query, &token);

    let mut rewritten = format!("{}?{merged}", target.path);
    if let Some(fragment) = target.fragment {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }
    Some(rewritten)
}
