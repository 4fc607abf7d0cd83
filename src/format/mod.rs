//! Locale-aware message formatting.
//!
//! Renders translation templates with positional arguments using the
//! `{index[,type[,style]]}` placeholder syntax, e.g. `{0}`,
//! `{0,number,#.##}` or `{1,date,short}`. Numbers pick up the target
//! locale's decimal and grouping separators, dates the locale's date
//! patterns.

mod date;
mod number;
mod parser;

use chrono::NaiveDate;
use thiserror::Error;

use crate::locale::Locale;

use self::date::DateStyle;
use self::number::NumberPattern;
use self::parser::{
    ArgSpec,
    Segment,
};

/// Errors from parsing or applying a translation template.
///
/// All of these are caught at the formatting boundary by the provider and
/// degrade to the untranslated key; none reach the UI path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unterminated argument starting at offset {0}")]
    UnterminatedArgument(usize),

    #[error("invalid argument index '{0}'")]
    InvalidIndex(String),

    #[error("unknown format type '{0}'")]
    UnknownType(String),

    #[error("invalid number pattern '{0}'")]
    InvalidNumberPattern(String),

    #[error("unknown date style '{0}'")]
    UnknownDateStyle(String),

    #[error("argument index {index} out of range for {supplied} supplied argument(s)")]
    MissingArgument { index: usize, supplied: usize },

    #[error("argument {index} cannot be formatted as {expected}")]
    TypeMismatch { index: usize, expected: &'static str },
}

/// A positional formatting argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Text(String),
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FormatArg {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Render `template` under `locale` with positional `args`.
///
/// An empty `args` slice returns the template verbatim; no parse pass runs,
/// so placeholder-looking text in an argument-free translation is never an
/// error.
///
/// # Errors
/// [`FormatError`] on malformed templates, out-of-range indices, or
/// argument/type mismatches.
pub fn format_message(
    template: &str,
    locale: &Locale,
    args: &[FormatArg],
) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let segments = parser::parse(template)?;
    let symbols = number::symbols_for(locale);

    let mut out = String::with_capacity(template.len());
    for segment in &segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Argument { index, spec } => {
                let arg = args.get(*index).ok_or(FormatError::MissingArgument {
                    index: *index,
                    supplied: args.len(),
                })?;
                out.push_str(&render_argument(*index, spec, arg, locale, &symbols)?);
            }
        }
    }
    Ok(out)
}

fn render_argument(
    index: usize,
    spec: &ArgSpec,
    arg: &FormatArg,
    locale: &Locale,
    symbols: &number::NumberSymbols,
) -> Result<String, FormatError> {
    match (spec, arg) {
        (ArgSpec::Default, FormatArg::Text(text)) => Ok(text.clone()),
        (ArgSpec::Default, FormatArg::Integer(value)) => {
            Ok(number::format_i64(*value, &NumberPattern::default(), symbols))
        }
        (ArgSpec::Default, FormatArg::Number(value)) => {
            Ok(number::format_f64(*value, &NumberPattern::default(), symbols))
        }
        (ArgSpec::Default, FormatArg::Date(value)) => {
            Ok(date::format_date(*value, DateStyle::Medium, locale))
        }
        (ArgSpec::Date(style), FormatArg::Date(value)) => {
            Ok(date::format_date(*value, *style, locale))
        }
        (ArgSpec::Number(pattern), FormatArg::Integer(value)) => {
            Ok(number::format_i64(*value, pattern, symbols))
        }
        (ArgSpec::Number(pattern), FormatArg::Number(value)) => {
            Ok(number::format_f64(*value, pattern, symbols))
        }
        (ArgSpec::Number(_), _) => Err(FormatError::TypeMismatch { index, expected: "number" }),
        (ArgSpec::Date(_), _) => Err(FormatError::TypeMismatch { index, expected: "date" }),
    }
}
