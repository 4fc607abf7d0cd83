//! Locale-aware date rendering.

use chrono::{
    Datelike,
    NaiveDate,
};

use crate::locale::Locale;

use super::FormatError;

/// Date rendering style, mirroring the `short` / `medium` / `long` style
/// names of the placeholder syntax. `{0,date}` means medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DateStyle {
    Short,
    Medium,
    Long,
}

impl DateStyle {
    pub(super) fn parse(style: &str) -> Result<Self, FormatError> {
        match style {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(FormatError::UnknownDateStyle(other.to_string())),
        }
    }
}

/// Render a date for the locale's base language.
///
/// Languages without explicit patterns fall back to ISO `YYYY-MM-DD`, which
/// is unambiguous everywhere.
pub(super) fn format_date(date: NaiveDate, style: DateStyle, locale: &Locale) -> String {
    let language = locale.language();
    match language {
        "en" => match style {
            DateStyle::Short => date.format("%-m/%-d/%y").to_string(),
            DateStyle::Medium => date.format("%b %-d, %Y").to_string(),
            DateStyle::Long => date.format("%B %-d, %Y").to_string(),
        },
        "de" => match style {
            DateStyle::Short => date.format("%d.%m.%y").to_string(),
            DateStyle::Medium => date.format("%d.%m.%Y").to_string(),
            DateStyle::Long => {
                format!("{}. {} {}", date.day(), month_name(language, date), date.year())
            }
        },
        "fr" => match style {
            DateStyle::Short => date.format("%d/%m/%y").to_string(),
            DateStyle::Medium => date.format("%d/%m/%Y").to_string(),
            DateStyle::Long => {
                format!("{} {} {}", date.day(), month_name(language, date), date.year())
            }
        },
        "es" => match style {
            DateStyle::Short => date.format("%-d/%-m/%y").to_string(),
            DateStyle::Medium => date.format("%-d/%-m/%Y").to_string(),
            DateStyle::Long => {
                format!("{} de {} de {}", date.day(), month_name(language, date), date.year())
            }
        },
        "it" => match style {
            DateStyle::Short => date.format("%d/%m/%y").to_string(),
            DateStyle::Medium => date.format("%d/%m/%Y").to_string(),
            DateStyle::Long => {
                format!("{} {} {}", date.day(), month_name(language, date), date.year())
            }
        },
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Full month names for the languages with long-style patterns above.
fn month_name(language: &str, date: NaiveDate) -> &'static str {
    const DE: [&str; 12] = [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ];
    const FR: [&str; 12] = [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ];
    const ES: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    const IT: [&str; 12] = [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ];

    let names = match language {
        "de" => &DE,
        "fr" => &FR,
        "es" => &ES,
        _ => &IT,
    };
    names.get(date.month0() as usize).copied().unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case::en_short("en-US", DateStyle::Short, "8/7/26")]
    #[case::en_medium("en-US", DateStyle::Medium, "Aug 7, 2026")]
    #[case::en_long("en", DateStyle::Long, "August 7, 2026")]
    #[case::de_short("de", DateStyle::Short, "07.08.26")]
    #[case::de_medium("de-DE", DateStyle::Medium, "07.08.2026")]
    #[case::de_long("de", DateStyle::Long, "7. August 2026")]
    #[case::fr_medium("fr", DateStyle::Medium, "07/08/2026")]
    #[case::fr_long("fr", DateStyle::Long, "7 août 2026")]
    #[case::es_long("es", DateStyle::Long, "7 de agosto de 2026")]
    #[case::it_long("it", DateStyle::Long, "7 agosto 2026")]
    #[case::fallback_is_iso("ja", DateStyle::Medium, "2026-08-07")]
    fn test_format_date(#[case] tag: &str, #[case] style: DateStyle, #[case] expected: &str) {
        let result = format_date(date(2026, 8, 7), style, &Locale::from_tag(tag));

        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("short", DateStyle::Short)]
    #[case("medium", DateStyle::Medium)]
    #[case("long", DateStyle::Long)]
    fn test_style_parse(#[case] input: &str, #[case] expected: DateStyle) {
        assert_eq!(DateStyle::parse(input).unwrap(), expected);
    }

    #[rstest]
    fn test_style_parse_rejects_unknown() {
        assert!(DateStyle::parse("full").is_err());
    }
}
