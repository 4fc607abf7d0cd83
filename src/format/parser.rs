//! Template parsing for the `{index[,type[,style]]}` placeholder syntax.

use super::FormatError;
use super::date::DateStyle;
use super::number::NumberPattern;

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Segment {
    Literal(String),
    Argument { index: usize, spec: ArgSpec },
}

/// How an argument placeholder renders its value.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ArgSpec {
    /// `{0}`: default rendering per argument type.
    Default,
    /// `{0,number}` / `{0,number,#.##}`.
    Number(NumberPattern),
    /// `{0,date}` / `{0,date,short}`.
    Date(DateStyle),
}

/// Split a template into literal and argument segments.
///
/// Quoting follows the `MessageFormat` convention: `''` is a literal quote,
/// and `'...'` quotes a run of literal text (so `'{0}'` renders as `{0}`).
/// An unmatched trailing quote quotes the remainder of the template.
pub(super) fn parse(template: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\'' => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                // Quoted run: copy verbatim until the closing quote.
                loop {
                    match chars.next() {
                        None => break,
                        Some((_, '\'')) => {
                            if matches!(chars.peek(), Some((_, '\''))) {
                                chars.next();
                                literal.push('\'');
                            } else {
                                break;
                            }
                        }
                        Some((_, quoted)) => literal.push(quoted),
                    }
                }
            }
            '{' => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut body = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(FormatError::UnterminatedArgument(offset));
                }
                segments.push(parse_argument(&body)?);
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_argument(body: &str) -> Result<Segment, FormatError> {
    let (index_part, rest) = match body.split_once(',') {
        Some((index_part, rest)) => (index_part, Some(rest)),
        None => (body, None),
    };

    let index_part = index_part.trim();
    let index: usize = index_part
        .parse()
        .map_err(|_| FormatError::InvalidIndex(index_part.to_string()))?;

    let spec = match rest {
        None => ArgSpec::Default,
        Some(rest) => {
            // The style itself may contain commas (`#,##0.00`), so only the
            // first comma separates type from style.
            let (kind, style) = match rest.split_once(',') {
                Some((kind, style)) => (kind, Some(style)),
                None => (rest, None),
            };
            match kind.trim() {
                "number" => match style {
                    None => ArgSpec::Number(NumberPattern::default()),
                    Some(pattern) => ArgSpec::Number(NumberPattern::parse(pattern.trim())?),
                },
                "date" => match style {
                    None => ArgSpec::Date(DateStyle::Medium),
                    Some(style) => ArgSpec::Date(DateStyle::parse(style.trim())?),
                },
                other => return Err(FormatError::UnknownType(other.to_string())),
            }
        }
    };

    Ok(Segment::Argument { index, spec })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_parse_literal_only() {
        let segments = parse("plain text").unwrap();

        assert_that!(segments, elements_are![eq(&Segment::Literal("plain text".to_string()))]);
    }

    #[googletest::test]
    fn test_parse_mixed_segments() {
        let segments = parse("a {0} b {1,number} c").unwrap();

        assert_that!(segments.len(), eq(5));
        expect_that!(
            segments.first(),
            some(eq(&Segment::Literal("a ".to_string())))
        );
        expect_that!(
            segments.get(1),
            some(eq(&Segment::Argument { index: 0, spec: ArgSpec::Default }))
        );
        expect_that!(
            segments.get(3),
            some(eq(&Segment::Argument {
                index: 1,
                spec: ArgSpec::Number(NumberPattern::default()),
            }))
        );
    }

    #[googletest::test]
    fn test_parse_allows_whitespace_around_index_and_type() {
        let segments = parse("{ 0 , number }").unwrap();

        assert_that!(
            segments,
            elements_are![eq(&Segment::Argument {
                index: 0,
                spec: ArgSpec::Number(NumberPattern::default()),
            })]
        );
    }

    #[googletest::test]
    fn test_parse_date_styles() {
        let segments = parse("{0,date,short}{1,date}").unwrap();

        expect_that!(
            segments.first(),
            some(eq(&Segment::Argument { index: 0, spec: ArgSpec::Date(DateStyle::Short) }))
        );
        expect_that!(
            segments.get(1),
            some(eq(&Segment::Argument { index: 1, spec: ArgSpec::Date(DateStyle::Medium) }))
        );
    }

    #[googletest::test]
    fn test_quoted_braces_are_literal() {
        let segments = parse("'{0}' and {0}").unwrap();

        expect_that!(
            segments.first(),
            some(eq(&Segment::Literal("{0} and ".to_string())))
        );
        expect_that!(
            segments.get(1),
            some(eq(&Segment::Argument { index: 0, spec: ArgSpec::Default }))
        );
    }

    #[googletest::test]
    fn test_doubled_quote_is_literal_quote() {
        let segments = parse("it''s").unwrap();

        assert_that!(segments, elements_are![eq(&Segment::Literal("it's".to_string()))]);
    }

    #[googletest::test]
    fn test_unmatched_quote_quotes_the_rest() {
        let segments = parse("a 'rest {0}").unwrap();

        assert_that!(segments, elements_are![eq(&Segment::Literal("a rest {0}".to_string()))]);
    }

    #[googletest::test]
    fn test_lone_closing_brace_is_literal() {
        let segments = parse("a } b").unwrap();

        assert_that!(segments, elements_are![eq(&Segment::Literal("a } b".to_string()))]);
    }

    #[rstest]
    #[case::unterminated("{0", FormatError::UnterminatedArgument(0))]
    #[case::unterminated_offset("ab {0", FormatError::UnterminatedArgument(3))]
    #[case::bad_index("{nope}", FormatError::InvalidIndex("nope".to_string()))]
    #[case::negative_index("{-1}", FormatError::InvalidIndex("-1".to_string()))]
    #[case::unknown_type("{0,choice}", FormatError::UnknownType("choice".to_string()))]
    fn test_parse_errors(#[case] template: &str, #[case] expected: FormatError) {
        assert_eq!(parse(template).unwrap_err(), expected);
    }
}
