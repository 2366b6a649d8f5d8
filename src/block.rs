//! Single-line block grammar.
//!
//! Lines are tested against these rules in order, and the first match wins:
//!
//! 1. a fence (```` ``` ````), handled by the assembler
//! 2. any line inside an open fence, handled by the assembler
//! 3. a table row (`|...|`), handled by the assembler
//! 4. a blank line, skipped
//! 5. `## `, `### `, `#### ` headings
//! 6. `> ` blockquote
//! 7. `1. ` ordered list item
//! 8. `- ` unordered list item
//! 9. anything else is a paragraph
//!
//! Rules 5 to 9 live in [`classify_line`]. A single `# ` is not a heading.

use crate::entity::BlockNode;
use crate::parser::tokenize;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, satisfy},
    combinator::{map, rest},
    sequence::{pair, preceded, terminated},
    IResult,
};

fn parse_fence(i: &str) -> IResult<&str, &str> {
    preceded(tag("```"), rest)(i)
}

/// Returns the trimmed language tag when `trimmed` is a fence line.
///
/// A closing fence yields whatever follows its backticks, which callers ignore.
pub fn fence_language(trimmed: &str) -> Option<&str> {
    parse_fence(trimmed).ok().map(|(_, language)| language.trim())
}

pub fn is_table_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// `|---|---|` and friends: pipes, dashes and whitespace only.
pub fn is_separator_row(trimmed: &str) -> bool {
    trimmed.len() >= 3
        && is_table_row(trimmed)
        && trimmed
            .chars()
            .all(|c| c == '|' || c == '-' || c.is_whitespace())
}

/// Splits a table row into trimmed cells, dropping the empty fragments
/// produced by the outer pipes.
pub fn split_cells(trimmed: &str) -> Vec<String> {
    let mut cells: Vec<&str> = trimmed.split('|').collect();
    if cells.first().map_or(false, |c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().map_or(false, |c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

fn parse_heading(i: &str) -> IResult<&str, (u8, &str)> {
    alt((
        map(preceded(tag("## "), rest), |s| (2, s)),
        map(preceded(tag("### "), rest), |s| (3, s)),
        map(preceded(tag("#### "), rest), |s| (4, s)),
    ))(i)
}

fn parse_blockquote(i: &str) -> IResult<&str, &str> {
    preceded(tag("> "), rest)(i)
}

fn parse_ordered_list_tag(i: &str) -> IResult<&str, &str> {
    terminated(digit1, pair(tag("."), satisfy(|c: char| c.is_whitespace())))(i)
}

fn parse_ordered_list_element(i: &str) -> IResult<&str, (&str, &str)> {
    pair(parse_ordered_list_tag, rest)(i)
}

fn parse_unordered_list_element(i: &str) -> IResult<&str, &str> {
    preceded(tag("- "), rest)(i)
}

fn parse_block_line(i: &str) -> IResult<&str, BlockNode> {
    alt((
        map(parse_heading, |(level, s)| BlockNode::Heading {
            level,
            spans: tokenize(s),
        }),
        map(parse_blockquote, |s| BlockNode::Blockquote { spans: tokenize(s) }),
        map(parse_ordered_list_element, |(index, s)| {
            BlockNode::OrderedListItem {
                index: index.to_string(),
                spans: tokenize(s),
            }
        }),
        map(parse_unordered_list_element, |s| BlockNode::UnorderedListItem {
            spans: tokenize(s),
        }),
        map(rest, |s: &str| BlockNode::Paragraph { spans: tokenize(s) }),
    ))(i)
}

/// Classifies a trimmed, non-blank line that is neither a fence nor a table row.
pub fn classify_line(trimmed: &str) -> BlockNode {
    parse_block_line(trimmed).map_or_else(
        |_| BlockNode::Paragraph {
            spans: tokenize(trimmed),
        },
        |(_, node)| node,
    )
}
