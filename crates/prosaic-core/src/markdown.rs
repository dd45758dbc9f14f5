//! Markdown flattening.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Each block (paragraph, heading, list item, table row) comes
//! out as its own blank-line separated paragraph so the document engine
//! sees the same structure a reader does.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Flatten markdown into plain text paragraphs.
///
/// Drops:
/// - Code blocks (fenced and indented) and inline code
/// - HTML blocks and inline HTML
/// - YAML frontmatter
/// - Image alt text
///
/// Keeps headings (as their own paragraphs), link text, block quotes,
/// list items and table cells.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn flatten(text: &str) -> String {
    let text = strip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut out = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. } | Tag::HtmlBlock) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Image | TagEnd::HtmlBlock) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => out.push(' '),
            Event::End(TagEnd::TableCell) if skip_depth == 0 => out.push(' '),
            // a list item's own text ends when a nested list starts
            Event::Start(Tag::List(_)) => end_block(&mut out),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableRow
                | TagEnd::TableHead
                | TagEnd::BlockQuote(_),
            ) => end_block(&mut out),
            _ => {}
        }
    }

    end_block(&mut out);
    out.truncate(out.trim_end().len());
    out
}

fn end_block(out: &mut String) {
    out.truncate(out.trim_end_matches([' ', '\t']).len());
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
}

/// The text after YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };
    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_code_blocks() {
        let result = flatten("Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.");
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn drops_frontmatter() {
        let result = flatten("---\nstatus: accepted\ndate: 2026-02-07\n---\n\nSome text.");
        assert_eq!(result, "Some text.");
    }

    #[test]
    fn headings_become_paragraphs() {
        let result = flatten("# Title\n\nBody text here.\n\n## Next\n\nMore.");
        assert_eq!(result, "Title\n\nBody text here.\n\nNext\n\nMore.");
    }

    #[test]
    fn list_items_are_separate() {
        let result = flatten("Shopping:\n\n- eggs\n- milk\n  - skimmed\n- bread");
        assert_eq!(result, "Shopping:\n\neggs\n\nmilk\n\nskimmed\n\nbread");
    }

    #[test]
    fn drops_inline_code_and_html() {
        let result = flatten("Call `foo()` now.\n\n<div>hidden</div>\n\nText with <b>bold</b> tag.");
        assert!(!result.contains("foo"));
        assert!(!result.contains("hidden"));
        assert!(result.contains("Text with bold tag."));
    }

    #[test]
    fn keeps_link_text() {
        let result = flatten("See [the docs](https://example.com) for more.");
        assert_eq!(result, "See the docs for more.");
    }

    #[test]
    fn soft_breaks_join_lines() {
        let result = flatten("One line\nand the next.");
        assert_eq!(result, "One line and the next.");
    }

    #[test]
    fn unclosed_frontmatter_is_text() {
        assert_eq!(strip_frontmatter("---\nno end"), "---\nno end");
    }
}
