use super::SectionTree;
use crate::document::parse;
use crate::formats::fenced::FencedMarkdownFormat;
use crate::formats::markdown::{parse_heading_line, MarkdownFormat};
use crate::formats::Format;

const PRD: &str = "# Title\n## 🎯 Overview\nHello\n## 📎 Appendix\nBye";

const NESTED: &str = "intro\n# One\nA\n## Two\nB\n### Three\nC\n## Four\nD\n# Five\nE";

#[test]
fn test_header_nodes_in_document_order() {
    let tree = parse(PRD);
    let titles: Vec<&str> = tree.nodes.iter().map(|n| n.raw_text.as_str()).collect();
    assert_eq!(titles, vec!["Title", "🎯 Overview", "📎 Appendix"]);
    assert_eq!(tree.total_lines, 5);
}

#[test]
fn test_normalized_text_strips_icons() {
    let tree = parse(PRD);
    assert_eq!(tree.nodes[1].normalized_text, "Overview");
    assert_eq!(tree.nodes[1].raw_text, "🎯 Overview");
    assert_eq!(tree.nodes[2].normalized_text, "Appendix");
}

#[test]
fn test_section_ends_at_equal_or_higher_level() {
    let tree = parse(PRD);
    // Title runs to end of document, Overview stops at Appendix
    assert_eq!((tree.nodes[0].start_line, tree.nodes[0].end_line), (0, 5));
    assert_eq!((tree.nodes[1].start_line, tree.nodes[1].end_line), (1, 3));
    assert_eq!((tree.nodes[2].start_line, tree.nodes[2].end_line), (3, 5));
}

#[test]
fn test_nested_boundaries() {
    let tree = parse(NESTED);
    let ranges: Vec<(u8, usize, usize)> = tree
        .nodes
        .iter()
        .map(|n| (n.level, n.start_line, n.end_line))
        .collect();
    assert_eq!(
        ranges,
        vec![(1, 1, 9), (2, 3, 7), (3, 5, 7), (2, 7, 9), (1, 9, 11)]
    );
}

#[test]
fn test_parent_and_children() {
    let tree = parse(NESTED);
    assert_eq!(tree.parent(0), None);
    assert_eq!(tree.parent(1), Some(0));
    assert_eq!(tree.parent(2), Some(1));
    assert_eq!(tree.parent(3), Some(0));
    assert_eq!(tree.children(0), &[1, 3]);
    assert_eq!(tree.children(1), &[2]);
    assert!(tree.children(4).is_empty());
    assert!(tree.children(99).is_empty());
}

#[test]
fn test_siblings() {
    let tree = parse(NESTED);
    assert_eq!(tree.next_sibling(1), Some(3));
    assert_eq!(tree.prev_sibling(3), Some(1));
    assert_eq!(tree.next_sibling(3), None, "Five is an uncle, not a sibling");
    assert_eq!(tree.next_sibling(0), Some(4));
    assert_eq!(tree.prev_sibling(0), None);
}

#[test]
fn test_no_headers_is_one_implicit_section() {
    let tree = parse("just text\nmore text");
    assert!(tree.is_empty());
    assert_eq!(tree.total_lines, 2);
    assert_eq!(tree.segments(), vec![(0, 2)]);
}

#[test]
fn test_empty_document() {
    let tree = parse("");
    assert!(tree.is_empty());
    assert_eq!(tree.total_lines, 1);
}

#[test]
fn test_malformed_headers_are_body_text() {
    let tree = parse("#NoSpace\n####### Seven\n#\n# \n## Real");
    assert_eq!(tree.nodes.len(), 1);
    assert_eq!(tree.nodes[0].raw_text, "Real");
    assert_eq!(tree.nodes[0].start_line, 4);
}

#[test]
fn test_duplicate_headers_not_deduplicated() {
    let tree = parse("## Notes\na\n## Notes\nb");
    assert_eq!(tree.nodes.len(), 2);
    assert_eq!(tree.nodes[0].end_line, 2);
    assert_eq!(tree.nodes[1].end_line, 4);
}

#[test]
fn test_parse_heading_line() {
    assert_eq!(parse_heading_line("### 🔴 P0"), Some((3, "🔴 P0")));
    assert_eq!(parse_heading_line("##\tTabbed  "), Some((2, "Tabbed")));
    assert_eq!(parse_heading_line("## Windows\r"), Some((2, "Windows")));
    assert_eq!(parse_heading_line(" # indented"), None);
    assert_eq!(parse_heading_line("text # not"), None);
}

#[test]
fn test_parser_is_deterministic() {
    for doc in [PRD, NESTED, "", "# a\n# a\n# a"] {
        assert_eq!(parse(doc), parse(doc));
    }
}

#[test]
fn test_segments_tile_document() {
    for doc in [PRD, NESTED, "", "no headers", "# only", "x\n\n# a\n\n## b\n\n"] {
        let tree = parse(doc);
        let segments = tree.segments();
        let mut cursor = 0;
        for (start, end) in &segments {
            assert_eq!(*start, cursor, "gap or overlap in {doc:?}: {segments:?}");
            assert!(start < end, "empty segment in {doc:?}: {segments:?}");
            cursor = *end;
        }
        assert_eq!(cursor, tree.total_lines, "segments must reach the end of {doc:?}");
    }
}

#[test]
fn test_node_invariant_start_before_end() {
    for doc in [PRD, NESTED, "# a\n# b\n# c", "# trailing\n"] {
        let tree = parse(doc);
        for node in &tree.nodes {
            assert!(node.start_line < node.end_line);
            assert!(node.end_line <= tree.total_lines);
        }
    }
}

#[test]
fn test_fenced_format_skips_code_blocks() {
    let doc = "# Setup\n```sh\n# install deps\nnpm ci\n```\n## Usage\nrun it\n";
    let line_based = MarkdownFormat.headings(doc);
    assert_eq!(line_based.len(), 3, "line scan sees the shell comment");

    let fenced = FencedMarkdownFormat.headings(doc);
    let found: Vec<(usize, u8, &str)> = fenced
        .iter()
        .map(|h| (h.line, h.level, h.raw_text.as_str()))
        .collect();
    assert_eq!(found, vec![(0, 1, "Setup"), (5, 2, "Usage")]);
}

#[test]
fn test_fenced_tree_keeps_sections_whole() {
    let doc = "# Setup\n```sh\n# install deps\n```\n# Next";
    let headings = FencedMarkdownFormat.headings(doc);
    let tree = SectionTree::build(headings, doc.split('\n').count());
    assert_eq!(tree.nodes.len(), 2);
    assert_eq!((tree.nodes[0].start_line, tree.nodes[0].end_line), (0, 4));
}
