//! Locale-aware decimal rendering for `DecimalFormat`-style patterns.

use crate::locale::Locale;

use super::FormatError;

/// Decimal and grouping separators for one language.
///
/// Granularity is the base language subtag; regional variations (such as the
/// Swiss apostrophe grouping) are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NumberSymbols {
    pub(super) decimal: char,
    pub(super) group: char,
}

const POINT_DECIMAL: NumberSymbols = NumberSymbols { decimal: '.', group: ',' };
const COMMA_DECIMAL: NumberSymbols = NumberSymbols { decimal: ',', group: '.' };
const COMMA_DECIMAL_SPACE_GROUP: NumberSymbols = NumberSymbols { decimal: ',', group: '\u{a0}' };

/// Number separators for a locale, keyed by base language.
pub(super) fn symbols_for(locale: &Locale) -> NumberSymbols {
    match locale.language() {
        "de" | "es" | "it" | "nl" | "pt" | "da" | "el" | "id" | "tr" | "ro" | "hr" | "sl"
        | "sr" | "vi" => COMMA_DECIMAL,
        "fr" | "sv" | "fi" | "nb" | "nn" | "pl" | "cs" | "sk" | "ru" | "uk" | "hu" | "bg"
        | "lv" | "lt" | "et" => COMMA_DECIMAL_SPACE_GROUP,
        _ => POINT_DECIMAL,
    }
}

/// A parsed subset of the `DecimalFormat` pattern language: `#`/`0` digits,
/// one optional grouping comma and one optional fraction part, e.g. `#.##`,
/// `0.00`, `#,##0.###`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct NumberPattern {
    grouping: bool,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
}

impl Default for NumberPattern {
    /// The untyped-placeholder default: grouped, up to three fraction digits.
    fn default() -> Self {
        Self {
            grouping: true,
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
        }
    }
}

impl NumberPattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    /// [`FormatError::InvalidNumberPattern`] on characters outside `#0,.`,
    /// multiple decimal points, grouping commas in the fraction part, or
    /// digit placeholders in an order `DecimalFormat` would reject
    /// (`0#` integer, `#0` fraction).
    pub(super) fn parse(pattern: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidNumberPattern(pattern.to_string());

        if pattern.is_empty() || pattern.chars().any(|c| !matches!(c, '#' | '0' | ',' | '.')) {
            return Err(invalid());
        }

        let (integer_part, fraction_part) = match pattern.split_once('.') {
            Some((integer_part, fraction_part)) => {
                if fraction_part.contains('.') || fraction_part.contains(',') {
                    return Err(invalid());
                }
                (integer_part, fraction_part)
            }
            None => (pattern, ""),
        };

        // Integer part: optional `#`s, then optional `0`s, grouping commas
        // strictly between digits.
        let digits: String = integer_part.chars().filter(|c| *c != ',').collect();
        if digits.is_empty()
            || integer_part.starts_with(',')
            || integer_part.ends_with(',')
            || is_out_of_order(&digits, '#', '0')
        {
            return Err(invalid());
        }
        // Fraction part: `0`s before `#`s.
        if is_out_of_order(fraction_part, '0', '#') {
            return Err(invalid());
        }

        Ok(Self {
            grouping: integer_part.contains(','),
            min_integer_digits: digits.chars().filter(|c| *c == '0').count(),
            min_fraction_digits: fraction_part.chars().filter(|c| *c == '0').count(),
            max_fraction_digits: fraction_part.len(),
        })
    }
}

/// Whether `second` appears before `first` has finished, e.g. `0#` when the
/// valid order is all `#`s then all `0`s.
fn is_out_of_order(digits: &str, first: char, second: char) -> bool {
    let mut seen_second = false;
    for c in digits.chars() {
        if c == second {
            seen_second = true;
        } else if c == first && seen_second {
            return true;
        }
    }
    false
}

/// Render a float under `pattern` with the given separators.
///
/// Rounding matches the float-formatting default (round to nearest, which
/// `DecimalFormat` calls HALF_EVEN).
pub(super) fn format_f64(value: f64, pattern: &NumberPattern, symbols: &NumberSymbols) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-\u{221e}".to_string() } else { "\u{221e}".to_string() };
    }

    let rounded = format!("{:.*}", pattern.max_fraction_digits, value.abs());
    let (integer_digits, fraction_digits) =
        rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    assemble(value < 0.0, integer_digits, fraction_digits, pattern, symbols)
}

/// Render an integer under `pattern` with the given separators.
pub(super) fn format_i64(value: i64, pattern: &NumberPattern, symbols: &NumberSymbols) -> String {
    let digits = value.unsigned_abs().to_string();
    assemble(value < 0, &digits, "", pattern, symbols)
}

fn assemble(
    negative: bool,
    integer_digits: &str,
    fraction_digits: &str,
    pattern: &NumberPattern,
    symbols: &NumberSymbols,
) -> String {
    let mut fraction = fraction_digits.to_string();
    while fraction.len() > pattern.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < pattern.min_fraction_digits {
        fraction.push('0');
    }

    let mut integer = integer_digits.to_string();
    while integer.len() < pattern.min_integer_digits {
        integer.insert(0, '0');
    }
    // `#.##` formats 0.25 as ".25" (DecimalFormat drops the zero when the
    // pattern has no mandatory integer digit), but a bare zero still prints.
    if integer == "0" && pattern.min_integer_digits == 0 && !fraction.is_empty() {
        integer.clear();
    }

    if pattern.grouping {
        integer = group_digits(&integer, symbols.group);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push(symbols.decimal);
        out.push_str(&fraction);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
