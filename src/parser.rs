use crate::entity::InlineSpan;
use crate::entity::InlineText;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    combinator::{map, not, verify},
    sequence::{delimited, pair, terminated},
    IResult,
};

fn parse_inline_code(i: &str) -> IResult<&str, &str> {
    delimited(tag("`"), is_not("`"), tag("`"))(i)
}

// Content runs to the first closing `**` and may hold single asterisks.
fn parse_boldtext(i: &str) -> IResult<&str, &str> {
    delimited(
        tag("**"),
        verify(take_until("**"), |s: &str| !s.is_empty()),
        tag("**"),
    )(i)
}

// The closing asterisk must not be the start of another delimiter.
// The opening side is checked by the caller, which knows what precedes `i`.
fn parse_italics(i: &str) -> IResult<&str, &str> {
    terminated(delimited(tag("*"), is_not("*"), tag("*")), not(tag("*")))(i)
}

fn parse_link(i: &str) -> IResult<&str, (&str, &str)> {
    pair(
        delimited(tag("["), is_not("]"), tag("]")),
        delimited(tag("("), is_not(")"), tag(")")),
    )(i)
}

// Order matters only as a tie-break; no two of these can start on the same character.
fn parse_markdown_inline(i: &str) -> IResult<&str, InlineSpan> {
    alt((
        map(parse_inline_code, |s: &str| InlineSpan::Code(s.to_string())),
        map(parse_boldtext, |s: &str| InlineSpan::Bold(s.to_string())),
        map(parse_italics, |s: &str| InlineSpan::Italic(s.to_string())),
        map(parse_link, |(text, href): (&str, &str)| {
            InlineSpan::Link(text.to_string(), href.to_string())
        }),
    ))(i)
}

// (offset, rest, span) of the construct starting earliest in `text`
fn find_earliest_span(text: &str) -> Option<(usize, &str, InlineSpan)> {
    for (offset, c) in text.char_indices() {
        if !matches!(c, '`' | '*' | '[') {
            continue;
        }
        let Ok((rest, span)) = parse_markdown_inline(&text[offset..]) else {
            continue;
        };
        // `*` directly after another `*` never opens italics
        if matches!(span, InlineSpan::Italic(_)) && text[..offset].ends_with('*') {
            continue;
        }
        return Some((offset, rest, span));
    }
    None
}

/// Splits one line into inline spans covering the whole line, left to right.
/// Unmatched delimiters stay in the surrounding plain text.
pub fn tokenize(line: &str) -> InlineText {
    let mut spans = Vec::new();
    let mut remaining = line;
    while let Some((offset, rest, span)) = find_earliest_span(remaining) {
        if offset > 0 {
            spans.push(InlineSpan::PlainText(remaining[..offset].to_string()));
        }
        spans.push(span);
        remaining = rest;
    }
    if !remaining.is_empty() {
        spans.push(InlineSpan::PlainText(remaining.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use crate::parser::*;
    use nom::error::ErrorKind;

    macro_rules! err {
        ($x:expr, $y:expr) => {
            Err(nom::Err::Error(nom::error::Error::new($x, $y)))
        };
    }

    fn plain(s: &str) -> InlineSpan {
        InlineSpan::PlainText(String::from(s))
    }

    #[test]
    fn test_parse_inline_code() {
        assert_eq!(parse_inline_code("`ls -la`"), Ok(("", "ls -la")));
        assert_eq!(parse_inline_code("`a` rest"), Ok((" rest", "a")));
        assert_eq!(parse_inline_code(""), err!("", ErrorKind::Tag));
        assert_eq!(parse_inline_code("`"), err!("", ErrorKind::IsNot));
        assert!(parse_inline_code("`unclosed").is_err());
    }

    #[test]
    fn test_parse_boldtext() {
        assert_eq!(parse_boldtext("**strong**"), Ok(("", "strong")));
        assert_eq!(parse_boldtext("*x*"), err!("*x*", ErrorKind::Tag));
        assert_eq!(parse_boldtext("**open"), err!("open", ErrorKind::TakeUntil));
        assert_eq!(parse_boldtext("****"), err!("**", ErrorKind::Verify));
        assert_eq!(parse_boldtext("**a*b**"), Ok(("", "a*b")));
        assert_eq!(parse_boldtext("**a** **b**"), Ok((" **b**", "a")));
    }

    #[test]
    fn test_parse_italics() {
        assert_eq!(parse_italics("*soft*"), Ok(("", "soft")));
        assert_eq!(parse_italics("*soft*."), Ok((".", "soft")));
        assert_eq!(parse_italics("**x**"), err!("*x**", ErrorKind::IsNot));
        assert_eq!(parse_italics("*a**"), err!("*", ErrorKind::Not));
        assert!(parse_italics("*").is_err());
    }

    #[test]
    fn test_parse_link() {
        assert_eq!(
            parse_link("[Docs](https://example.com/docs)"),
            Ok(("", ("Docs", "https://example.com/docs")))
        );
        assert_eq!(parse_link("[a]b"), err!("b", ErrorKind::Tag));
        assert!(parse_link("[]()").is_err());
    }

    #[test]
    fn test_tokenize_plain() {
        assert!(tokenize("").is_empty());
        assert_eq!(tokenize("just words"), vec![plain("just words")]);
    }

    #[test]
    fn test_tokenize_mixed() {
        assert_eq!(
            tokenize("This is **bold** and *italic*."),
            vec![
                plain("This is "),
                InlineSpan::Bold(String::from("bold")),
                plain(" and "),
                InlineSpan::Italic(String::from("italic")),
                plain("."),
            ]
        );
        assert_eq!(
            tokenize("Run `npm i` then see [the guide](/help/setup)"),
            vec![
                plain("Run "),
                InlineSpan::Code(String::from("npm i")),
                plain(" then see "),
                InlineSpan::Link(String::from("the guide"), String::from("/help/setup")),
            ]
        );
    }

    #[test]
    fn test_tokenize_earliest_wins() {
        // the link starts first, so the backticks inside it are link text
        assert_eq!(
            tokenize("[`cfg`](x) and `y`"),
            vec![
                InlineSpan::Link(String::from("`cfg`"), String::from("x")),
                plain(" and "),
                InlineSpan::Code(String::from("y")),
            ]
        );
        assert_eq!(
            tokenize("`**not bold**`"),
            vec![InlineSpan::Code(String::from("**not bold**"))]
        );
    }

    #[test]
    fn test_tokenize_stray_delimiters() {
        assert_eq!(tokenize("5 * 3 = 15"), vec![plain("5 * 3 = 15")]);
        assert_eq!(tokenize("`"), vec![plain("`")]);
        assert_eq!(tokenize("[x]"), vec![plain("[x]")]);
        assert_eq!(tokenize("**"), vec![plain("**")]);
        assert_eq!(tokenize("*a**"), vec![plain("*a**")]);
    }

    #[test]
    fn test_tokenize_italic_after_asterisk() {
        // the second `*` of `**` cannot open italics
        assert_eq!(tokenize("**a*"), vec![plain("**a*")]);
        assert_eq!(tokenize("***b**"), vec![InlineSpan::Bold(String::from("*b"))]);
    }

    #[test]
    fn test_tokenize_bold_with_asterisks() {
        assert_eq!(tokenize("**a*b**"), vec![InlineSpan::Bold(String::from("a*b"))]);
        assert_eq!(
            tokenize("**bold *with* italic**"),
            vec![InlineSpan::Bold(String::from("bold *with* italic"))]
        );
        assert_eq!(
            tokenize("Press **Save *now*** please"),
            vec![
                plain("Press "),
                InlineSpan::Bold(String::from("Save *now")),
                plain("* please"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(
            tokenize("Précis *été* ✓"),
            vec![
                plain("Précis "),
                InlineSpan::Italic(String::from("été")),
                plain(" ✓"),
            ]
        );
    }

    // writes the spans back out with their delimiters
    fn untokenize(spans: &[InlineSpan]) -> String {
        spans
            .iter()
            .map(|span| match span {
                InlineSpan::PlainText(s) => s.clone(),
                InlineSpan::Code(s) => format!("`{}`", s),
                InlineSpan::Bold(s) => format!("**{}**", s),
                InlineSpan::Italic(s) => format!("*{}*", s),
                InlineSpan::Link(text, href) => format!("[{}]({})", text, href),
            })
            .collect()
    }

    #[test]
    fn test_tokenize_fragment_combinations() {
        let fragments = [
            "", " ", "a", "é", "*", "**", "`", "[", "]", "(", ")", "*i*", "**b**", "`c`",
            "[t](h)", "***",
        ];
        for a in fragments {
            for b in fragments {
                for c in fragments {
                    let line = format!("{}{}{}", a, b, c);
                    let spans = tokenize(&line);
                    assert_eq!(untokenize(&spans), line, "line {:?}", line);
                    assert!(
                        spans.windows(2).all(|w| !matches!(
                            w,
                            [InlineSpan::PlainText(_), InlineSpan::PlainText(_)]
                        )),
                        "adjacent plain text in {:?}",
                        spans
                    );
                    assert!(
                        spans.iter().all(|s| !s.text().is_empty()),
                        "empty span in {:?}",
                        spans
                    );
                }
            }
        }
    }

    #[test]
    fn test_tokenize_covers_every_character() {
        let line = "a `b` **c** *d* [e](f) g";
        let text: String = tokenize(line).iter().map(|s| s.text()).collect();
        assert_eq!(text, "a b c d e g");
    }
}
