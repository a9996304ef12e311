use super::Config;
use crate::error::Error;
use crate::formats::FormatKind;
use crate::template::{Criticality, Template};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.file_extensions, vec!["md"]);
    assert_eq!(config.full_document_label, "Full Document");
    assert!(config.backup);
    assert_eq!(config.format(), FormatKind::Markdown);
    assert_eq!(config.template(), Template::prd());
}

#[test]
fn test_settings_override_defaults() {
    let config = Config::parse(
        r#"
file_extensions = ["md", "markdown"]
full_document_label = "Whole Draft"
fence_aware = true
backup = false
"#,
    )
    .unwrap();
    assert_eq!(config.file_extensions, vec!["md", "markdown"]);
    assert_eq!(config.full_document_label, "Whole Draft");
    assert_eq!(config.format(), FormatKind::Fenced);
    assert!(!config.backup);
}

#[test]
fn test_template_tables_replace_builtin() {
    let config = Config::parse(
        r#"
[[template]]
token = "Summary"
label = "Summary section"
level = 2

[[template]]
token = "Risks"
label = "Risks"
required = false
icon = "⚠"
"#,
    )
    .unwrap();
    let template = config.template();
    assert_eq!(template.sections.len(), 2);
    assert_eq!(template.sections[0].level, Some(2));
    assert_eq!(template.sections[0].criticality, Criticality::Required);
    assert_eq!(template.sections[1].criticality, Criticality::Recommended);
    assert_eq!(template.sections[1].heading_line(), "## ⚠ Risks");
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prdpatch.toml");
    fs::write(&path, "file_extensions = [").unwrap();

    match Config::load_from(&path) {
        Err(Error::Config { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a config error, got {other:?}"),
    }
}
