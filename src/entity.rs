use serde::Serialize;

/// Fully tokenized content of one line.
pub type InlineText = Vec<InlineSpan>;

/// Ordered output of one render call, in document order.
pub type RenderTree = Vec<BlockNode>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    PlainText(String),
    Code(String),
    Bold(String),
    Italic(String),
    /// Display text, href.
    Link(String, String),
}

impl InlineSpan {
    /// Visible text of the span with its markup removed.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText(s)
            | InlineSpan::Code(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Link(s, _) => s,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockNode {
    /// `##`, `###` or `####`; level is the number of hashes.
    Heading { level: u8, spans: InlineText },
    Blockquote { spans: InlineText },
    /// `index` is the digit string exactly as written in the source.
    OrderedListItem { index: String, spans: InlineText },
    UnorderedListItem { spans: InlineText },
    Paragraph { spans: InlineText },
    CodeBlock { language: String, lines: Vec<String> },
    /// Cells are trimmed source text; rows may be ragged.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}
