// tests/integration_tests/markup_test.rs
use super::common::setup_site;
use anyhow::Result;
use cachebust::core::rewrite::markup::process_file;
use cachebust::fingerprint;
use std::fs;

#[test]
fn test_rewrites_all_local_references() -> Result<()> {
    let site = setup_site()?;
    let root = site.path();

    let page = root.join("index.html");
    assert!(process_file(&page, root, false)?);

    let css_token = fingerprint(&fs::read(root.join("style.css"))?);
    let js_token = fingerprint(&fs::read(root.join("app.js"))?);
    let rewritten = fs::read_to_string(&page)?;

    assert!(
        rewritten.contains(&format!("href=\"style.css?version={css_token}\"")),
        "Stylesheet reference should carry the content token"
    );
    assert!(rewritten.contains(&format!("src=\"app.js?version={js_token}\"")));
    assert!(
        rewritten.contains("src=\"https://cdn.example.com/lib.js\""),
        "External reference must stay untouched"
    );
    Ok(())
}

#[test]
fn test_resolves_root_relative_and_parent_relative() -> Result<()> {
    let site = setup_site()?;
    let root = site.path();

    let page = root.join("pages/about.html");
    assert!(process_file(&page, root, false)?);

    let site_token = fingerprint(&fs::read(root.join("css/site.css"))?);
    let app_token = fingerprint(&fs::read(root.join("app.js"))?);
    let rewritten = fs::read_to_string(&page)?;

    assert!(
        rewritten.contains(&format!("href=\"/css/site.css?version={site_token}\"")),
        "Leading slash should resolve against the project root"
    );
    assert!(
        rewritten.contains(&format!("src=\"../app.js?version={app_token}\"")),
        "Plain paths should resolve against the host file's directory"
    );
    Ok(())
}

#[test]
fn test_asset_change_updates_token() -> Result<()> {
    let site = setup_site()?;
    let root = site.path();
    let page = root.join("index.html");

    process_file(&page, root, false)?;
    let first_token = fingerprint(&fs::read(root.join("style.css"))?);

    fs::write(root.join("style.css"), "body { margin: 1px }")?;
    assert!(
        process_file(&page, root, false)?,
        "Changed asset bytes should force a rewrite"
    );

    let second_token = fingerprint(&fs::read(root.join("style.css"))?);
    assert_ne!(first_token, second_token);

    let rewritten = fs::read_to_string(&page)?;
    assert!(rewritten.contains(&format!("style.css?version={second_token}")));
    assert!(
        !rewritten.contains(&format!("version={first_token}&version")),
        "Old token must be replaced, never duplicated"
    );
    Ok(())
}
