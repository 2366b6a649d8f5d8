//! Output formats for a rendered article.

use crate::entity::{BlockNode, InlineSpan};
use crate::error::Error;
use crate::parser::tokenize;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn translate_span(span: &InlineSpan) -> String {
    match span {
        InlineSpan::PlainText(text) => escape(text),
        InlineSpan::Code(text) => format!("<code>{}</code>", escape(text)),
        InlineSpan::Bold(text) => format!("<strong>{}</strong>", escape(text)),
        InlineSpan::Italic(text) => format!("<em>{}</em>", escape(text)),
        InlineSpan::Link(text, href) => {
            format!("<a href=\"{}\">{}</a>", escape(href), escape(text))
        }
    }
}

fn translate_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(translate_span).collect()
}

fn translate_cells(cells: &[String], tag: &str) -> String {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{0}>{1}</{0}>", tag, translate_text(&tokenize(cell))))
        .collect();
    format!("<tr>{}</tr>", cells)
}

fn translate_table(header: &[String], rows: &[Vec<String>]) -> String {
    let body: String = rows.iter().map(|row| translate_cells(row, "td")).collect();
    format!(
        "<table><thead>{}</thead><tbody>{}</tbody></table>",
        translate_cells(header, "th"),
        body
    )
}

fn translate_codeblock(language: &str, lines: &[String]) -> String {
    let code = escape(&lines.join("\n"));
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>", code)
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape(language),
            code
        )
    }
}

fn translate_block(node: &BlockNode) -> String {
    match node {
        BlockNode::Heading { level, spans } => {
            format!("<h{0}>{1}</h{0}>", level, translate_text(spans))
        }
        BlockNode::Blockquote { spans } => {
            format!("<blockquote>{}</blockquote>", translate_text(spans))
        }
        BlockNode::OrderedListItem { index, spans } => format!(
            "<li value=\"{}\">{}</li>",
            escape(index),
            translate_text(spans)
        ),
        BlockNode::UnorderedListItem { spans } => format!("<li>{}</li>", translate_text(spans)),
        BlockNode::Paragraph { spans } => format!("<p>{}</p>", translate_text(spans)),
        BlockNode::CodeBlock { language, lines } => translate_codeblock(language, lines),
        BlockNode::Table { header, rows } => translate_table(header, rows),
    }
}

fn list_tag(node: &BlockNode) -> Option<&'static str> {
    match node {
        BlockNode::OrderedListItem { .. } => Some("ol"),
        BlockNode::UnorderedListItem { .. } => Some("ul"),
        _ => None,
    }
}

/// HTML fragment for the tree. Adjacent list items of the same kind share
/// one `<ol>`/`<ul>`; ordered items keep their source index as `value`.
pub fn to_html(tree: &[BlockNode]) -> String {
    let mut html = String::new();
    let mut open_list: Option<&'static str> = None;
    for node in tree {
        let list = list_tag(node);
        if list != open_list {
            if let Some(tag) = open_list {
                html.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list {
                html.push_str(&format!("<{}>", tag));
            }
            open_list = list;
        }
        html.push_str(&translate_block(node));
    }
    if let Some(tag) = open_list {
        html.push_str(&format!("</{}>", tag));
    }
    html
}

fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}

/// Visible text only, one line per node. Used for search snippets.
pub fn to_plain_text(tree: &[BlockNode]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for node in tree {
        match node {
            BlockNode::Heading { spans, .. }
            | BlockNode::Blockquote { spans }
            | BlockNode::Paragraph { spans } => lines.push(plain_text(spans)),
            BlockNode::OrderedListItem { index, spans } => {
                lines.push(format!("{}. {}", index, plain_text(spans)))
            }
            BlockNode::UnorderedListItem { spans } => {
                lines.push(format!("• {}", plain_text(spans)))
            }
            BlockNode::CodeBlock { lines: code, .. } => lines.extend(code.iter().cloned()),
            BlockNode::Table { header, rows } => {
                for row in std::iter::once(header).chain(rows) {
                    let cells: Vec<String> =
                        row.iter().map(|cell| plain_text(&tokenize(cell))).collect();
                    lines.push(cells.join("\t"));
                }
            }
        }
    }
    lines.join("\n")
}

pub fn to_json(tree: &[BlockNode]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(tree)?)
}
