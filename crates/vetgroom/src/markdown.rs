//! Best-effort Markdown to HTML for blog posts
//!
//! Only the subset the blog content uses is supported. Rendering runs in
//! three fixed stages:
//!
//! 1. every line is classified into a [`Block`],
//! 2. inline spans are substituted (bold+italic, bold, italic, links),
//! 3. the block wrapper with its fixed classes is applied.
//!
//! Paragraph wrapping is decided after stage 2: a line whose substituted
//! text opens with a tag, such as one starting with `**bold**` or a link, is
//! emitted as is.
//!
//! Nothing is escaped: post content is trusted site copy.

use once_cell::sync::Lazy;
use regex::Regex;

const H1_CLASS: &str = "text-3xl font-bold text-gray-900 mt-10 mb-6";
const H2_CLASS: &str = "text-2xl font-bold text-gray-900 mt-10 mb-4";
const H3_CLASS: &str = "text-xl font-bold text-gray-900 mt-8 mb-4";
const STRONG_CLASS: &str = "font-semibold text-gray-900";
const LINK_CLASS: &str = "text-primary-600 hover:text-primary-700 underline";
const LIST_ITEM_CLASS: &str = "ml-4";
const PARAGRAPH_CLASS: &str = "text-gray-600 leading-relaxed mb-4";
const RULE: &str = r#"<hr class="my-8 border-gray-200" />"#;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("list item pattern"));
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").expect("ordered pattern"));

/// Inline substitutions, applied in this order to every line
static INLINE_RULES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\*\*\*(.*?)\*\*\*").expect("bold italic pattern"),
            "<strong><em>$1</em></strong>".to_string(),
        ),
        (
            Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"),
            format!(r#"<strong class="{STRONG_CLASS}">$1</strong>"#),
        ),
        (
            Regex::new(r"\*(.*?)\*").expect("italic pattern"),
            "<em>$1</em>".to_string(),
        ),
        (
            Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"),
            format!(r#"<a href="$2" class="{LINK_CLASS}">$1</a>"#),
        ),
    ]
});

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`, `##` or `###` at column zero
    Heading { level: u8, text: &'a str },
    /// `-` or `*` bullet, optionally indented
    ListItem(&'a str),
    /// `---` on its own
    Rule,
    /// `1.` style line, left unwrapped
    OrderedItem(&'a str),
    /// Already markup, or a dash line that is not a bullet
    Raw(&'a str),
    Blank(&'a str),
    /// Plain text; wrapped in `<p>` unless its inline markup opens with a tag
    Paragraph(&'a str),
}

/// Classify one line (after hashtag stripping)
pub fn classify(line: &str) -> Block<'_> {
    for (prefix, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading { level, text };
        }
    }

    if let Some(caps) = LIST_ITEM.captures(line) {
        if let Some(text) = caps.get(1) {
            return Block::ListItem(text.as_str());
        }
    }

    if line == "---" {
        return Block::Rule;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Block::Blank(line)
    } else if trimmed.starts_with('<') || trimmed.starts_with('-') {
        Block::Raw(line)
    } else if ORDERED_ITEM.is_match(trimmed) {
        Block::OrderedItem(line)
    } else {
        Block::Paragraph(line)
    }
}

/// Apply the inline span rules to a fragment of text
pub fn render_inline(text: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, replacement.as_str()).into_owned()
        })
}

fn render_block(block: Block<'_>) -> String {
    match block {
        Block::Heading { level, text } => {
            let class = match level {
                1 => H1_CLASS,
                2 => H2_CLASS,
                _ => H3_CLASS,
            };
            format!(
                r#"<h{level} class="{class}">{}</h{level}>"#,
                render_inline(text)
            )
        }
        Block::ListItem(text) => {
            format!(r#"<li class="{LIST_ITEM_CLASS}">{}</li>"#, render_inline(text))
        }
        Block::Rule => RULE.to_string(),
        Block::OrderedItem(line) | Block::Raw(line) => render_inline(line),
        Block::Blank(line) => line.to_string(),
        Block::Paragraph(line) => {
            let rendered = render_inline(line);
            let inner = rendered.trim();
            if inner.starts_with('<') {
                rendered
            } else {
                format!(r#"<p class="{PARAGRAPH_CLASS}">{inner}</p>"#)
            }
        }
    }
}

/// Render blog Markdown to HTML fragments
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let stripped = HASHTAG.replace_all(markdown, "$1");
    stripped
        .split('\n')
        .map(|line| render_block(classify(line)))
        .collect::<Vec<_>>()
        .join("\n")
}
