//! Locale-aware rendering of parameter values
//!
//! These helpers turn the typed values an issue carries into the text
//! fragments catalog templates interpolate. Type names are deliberately
//! not handled here: they live in each locale's catalog alongside the
//! rest of its vocabulary.

use crate::locale::Locale;
use chrono::{Datelike, NaiveDate};
use verdict_issues::LiteralValue;

/// Punctuation conventions a locale uses when rendering lists of values
#[derive(Debug, Clone, Copy)]
pub struct Conventions {
    /// Quote character wrapped around string literals and object keys
    pub quote: char,
    /// Separator between alternatives ("or"-equivalent)
    pub disjunction: &'static str,
    /// Separator between plain list members
    pub list_separator: &'static str,
}

/// The rendering conventions for a locale
pub fn conventions(locale: Locale) -> Conventions {
    match locale {
        Locale::English | Locale::Thai => Conventions {
            quote: '\'',
            disjunction: " | ",
            list_separator: ", ",
        },
    }
}

/// Render a number the way it was supplied: integers without a fraction,
/// decimals with the shortest representation that round-trips
pub fn number(value: f64) -> String {
    value.to_string()
}

/// Render a size (length/count) parameter
pub fn size(value: usize) -> String {
    value.to_string()
}

/// Render a date following the locale's calendar convention
///
/// English uses month/day/year. Thai uses day/month/year with the year in
/// the Buddhist Era (CE + 543), matching everyday Thai date notation.
pub fn date(locale: Locale, value: NaiveDate) -> String {
    match locale {
        Locale::English => format!("{}/{}/{}", value.month(), value.day(), value.year()),
        Locale::Thai => format!("{}/{}/{}", value.day(), value.month(), value.year() + 543),
    }
}

/// Render a single literal value: strings carry the locale's quotes,
/// numbers and booleans do not
pub fn literal(locale: Locale, value: &LiteralValue) -> String {
    let conventions = conventions(locale);
    match value {
        LiteralValue::Str(text) => format!("{0}{text}{0}", conventions.quote),
        LiteralValue::Int(number) => number.to_string(),
        LiteralValue::Float(number) => number.to_string(),
        LiteralValue::Bool(flag) => flag.to_string(),
    }
}

/// Render a set of expected literals joined with the locale's disjunction
///
/// A single member renders bare, with no separator.
pub fn literal_list(locale: Locale, values: &[LiteralValue]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| literal(locale, value)).collect();
    rendered.join(conventions(locale).disjunction)
}

/// Render object keys, quoted, in exactly the order supplied
pub fn key_list(locale: Locale, keys: &[String]) -> String {
    let conventions = conventions(locale);
    let rendered: Vec<String> = keys
        .iter()
        .map(|key| format!("{0}{key}{0}", conventions.quote))
        .collect();
    rendered.join(conventions.list_separator)
}
