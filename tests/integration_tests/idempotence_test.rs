// tests/integration_tests/idempotence_test.rs
use super::common::setup_site;
use anyhow::Result;
use cachebust::core::ignore::Patterns;
use cachebust::core::rewrite::{markup, script};
use cachebust::core::walker::{collect_markup_files, collect_script_files};

/// Running the rewriter twice over the same tree must change nothing on
/// the second pass: every token is already current.
#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let site = setup_site()?;
    let root = site.path();
    let patterns = Patterns::new();

    let markup_files = collect_markup_files(root, &["dist"], &patterns)?;
    let script_files = collect_script_files(&root.join("dist"))?;
    assert!(!markup_files.is_empty());
    assert!(!script_files.is_empty());

    let mut first_changed = 0_u64;
    for path in &markup_files {
        if markup::process_file(path, root, false)? {
            first_changed += 1;
        }
    }
    for path in &script_files {
        if script::process_file(path, false)? {
            first_changed += 1;
        }
    }
    assert!(first_changed > 0, "First run should rewrite something");

    for path in &markup_files {
        assert!(
            !markup::process_file(path, root, false)?,
            "Second run should leave {} unchanged",
            path.display()
        );
    }
    for path in &script_files {
        assert!(
            !script::process_file(path, false)?,
            "Second run should leave {} unchanged",
            path.display()
        );
    }
    Ok(())
}
