use super::{parse, parse_with, Document};
use crate::formats::FormatKind;
use crate::patch::{apply_section_patch, PatchResult};

const PRD: &str = "# Title\n## 🎯 Overview\nHello\n## 📎 Appendix\nBye";

#[test]
fn test_tree_matches_free_parse() {
    let doc = Document::new(PRD);
    assert_eq!(doc.tree(), &parse(PRD));
    assert_eq!(doc.total_lines(), 5);
    assert_eq!(doc.headers().len(), 3);
}

#[test]
fn test_tree_is_computed_once() {
    let doc = Document::new(PRD);
    let first: *const _ = doc.tree();
    let second: *const _ = doc.tree();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_extract_section_content() {
    let doc = Document::new(PRD);
    assert_eq!(doc.extract_section_content("Overview").as_deref(), Some("Hello"));
    assert_eq!(doc.extract_section_content("📎 appendix").as_deref(), Some("Bye"));
    assert_eq!(doc.extract_section_content("Missing"), None);
    assert_eq!(
        doc.extract_section_content("Full Document").as_deref(),
        Some(PRD)
    );
}

#[test]
fn test_title_section_includes_subsections() {
    let doc = Document::new(PRD);
    assert_eq!(
        doc.extract_section_content("Title").as_deref(),
        Some("## 🎯 Overview\nHello\n## 📎 Appendix\nBye")
    );
}

#[test]
fn test_matching_headers_reports_ambiguity() {
    let doc = Document::new("# Plan\n## Operational Targets Overview\nx\n## Overview\ny");
    let matches = doc.matching_headers("Overview");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].raw_text, "Operational Targets Overview");
}

#[test]
fn test_patch_result_becomes_new_document() {
    let doc = Document::new(PRD);
    let result: PatchResult = apply_section_patch(doc.content(), &doc.locate("Overview"), "World");
    let next = Document::from(result);
    assert_eq!(next.extract_section_content("Overview").as_deref(), Some("World"));
    // The original snapshot is untouched
    assert_eq!(doc.extract_section_content("Overview").as_deref(), Some("Hello"));
}

#[test]
fn test_successor_keeps_format() {
    let doc = Document::with_format("# A\n```\n# b\n```", FormatKind::Fenced);
    let next = doc.successor("# A\n```\n# c\n```".to_string());
    assert_eq!(next.format(), FormatKind::Fenced);
    assert_eq!(next.headers().len(), 1);
}

#[test]
fn test_clone_is_independent_snapshot() {
    let doc = Document::new(PRD);
    let _ = doc.tree();
    let copy = doc.clone();
    assert_eq!(copy.content(), doc.content());
    assert_eq!(copy.tree(), doc.tree());
}

#[test]
fn test_parse_with_markdown_matches_parse() {
    assert_eq!(parse_with(PRD, FormatKind::Markdown), parse(PRD));
}

#[test]
fn test_patch_result_conversion_uses_default_format() {
    let doc = Document::with_format("# A\n```\n# b\n```\n## C\nold", FormatKind::Fenced);
    let result = apply_section_patch(doc.content(), &doc.locate("C"), "new");

    let kept = doc.successor(result.new_content.clone());
    assert_eq!(kept.format(), FormatKind::Fenced);
    assert_eq!(kept.headers().len(), 2);

    let converted = Document::from(result);
    assert_eq!(converted.format(), FormatKind::Markdown);
    assert_eq!(converted.headers().len(), 3);
}
