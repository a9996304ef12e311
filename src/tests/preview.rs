use super::{build_preview, preview_generated};
use crate::document::Document;
use crate::locate::{locate, FULL_DOCUMENT};
use crate::patch::{GenerationTarget, PatchTarget, Selection};

const PRD: &str = "# Title\n## 🎯 Overview\nHello\n## 📎 Appendix\nBye";

#[test]
fn test_preview_pairs_original_and_modified() {
    let target = PatchTarget::Section(locate(PRD, "Overview"));
    let preview = build_preview(PRD, &target, "World");
    assert_eq!(preview.original, PRD);
    assert_eq!(
        preview.modified,
        "# Title\n## 🎯 Overview\nWorld\n## 📎 Appendix\nBye"
    );
    assert!(!preview.is_unchanged());
}

#[test]
fn test_preview_of_identical_content_is_unchanged() {
    let target = PatchTarget::Section(locate(PRD, "Appendix"));
    assert!(build_preview(PRD, &target, "Bye").is_unchanged());
}

#[test]
fn test_preview_cursor_selection() {
    let target = PatchTarget::Cursor { start: 0, end: 7 };
    let preview = build_preview(PRD, &target, "# Renamed");
    assert!(preview.modified.starts_with("# Renamed\n## 🎯 Overview"));
}

#[test]
fn test_preview_generated_reports_fallback() {
    let doc = Document::new(PRD);
    let request = GenerationTarget {
        section: "UX & Branding".to_string(),
        selection: Selection::cursor(0),
        ..GenerationTarget::default()
    };
    let preview = preview_generated(&doc, &request, "Intro\n", FULL_DOCUMENT);
    assert!(preview.fell_back);
    assert_eq!(preview.modified, format!("Intro\n{PRD}"));
    assert_eq!(preview.original, PRD);
}

#[test]
fn test_preview_full_document() {
    let doc = Document::new(PRD);
    let request = GenerationTarget {
        section: FULL_DOCUMENT.to_string(),
        ..GenerationTarget::default()
    };
    let preview = preview_generated(&doc, &request, "# Fresh", FULL_DOCUMENT);
    assert!(!preview.fell_back);
    assert_eq!(preview.modified, "# Fresh");
}
