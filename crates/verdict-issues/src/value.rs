//! Typed parameter values carried by issues

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Runtime type of a value as observed by the type checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedType {
    String,
    Number,
    Integer,
    Float,
    Boolean,
    Date,
    Array,
    Object,
    Function,
    Null,
    Undefined,
    Nan,
    Unknown,
}

impl ParsedType {
    /// All parsed types, in declaration order
    pub const ALL: [ParsedType; 13] = [
        Self::String,
        Self::Number,
        Self::Integer,
        Self::Float,
        Self::Boolean,
        Self::Date,
        Self::Array,
        Self::Object,
        Self::Function,
        Self::Null,
        Self::Undefined,
        Self::Nan,
        Self::Unknown,
    ];

    /// Stable identifier used to look up the localized type name
    pub fn code(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Nan => "nan",
            Self::Unknown => "unknown",
        }
    }
}

/// A literal value a schema expected or the input supplied
///
/// Rendering is owned by the locale formatters: string literals are quoted
/// with the locale's quote convention, numbers and booleans are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Size constraint on a string or array that the input violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBound {
    /// At least this many characters/elements
    Min(usize),
    /// At most this many characters/elements
    Max(usize),
    /// Exactly this many characters/elements
    Exactly(usize),
}

impl SizeBound {
    /// Selector identifier used by catalog templates
    pub fn code(&self) -> &'static str {
        match self {
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Exactly(_) => "exact",
        }
    }

    /// The constrained size itself
    pub fn value(&self) -> usize {
        match self {
            Self::Min(n) | Self::Max(n) | Self::Exactly(n) => *n,
        }
    }
}

/// Direction and inclusivity of a violated range check
///
/// Inclusive and exclusive comparisons route to distinct templates; the
/// wording is never shared between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    /// Selector identifier used by catalog templates
    pub fn code(&self) -> &'static str {
        match self {
            Self::LessThan => "lt",
            Self::LessThanOrEqual => "lte",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEqual => "gte",
        }
    }

    pub fn is_inclusive(&self) -> bool {
        matches!(self, Self::LessThanOrEqual | Self::GreaterThanOrEqual)
    }
}

/// The bound a range check compared against
///
/// Numeric and date ranges share one issue kind; the catalog template
/// chooses the subject wording from the bound's type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundValue {
    Number(f64),
    Date(NaiveDate),
}

impl From<f64> for BoundValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for BoundValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_type_codes_are_unique() {
        let mut codes: Vec<&str> = ParsedType::ALL.iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ParsedType::ALL.len());
    }

    #[test]
    fn size_bound_exposes_value_and_code() {
        assert_eq!(SizeBound::Min(5).code(), "min");
        assert_eq!(SizeBound::Max(2).value(), 2);
        assert_eq!(SizeBound::Exactly(7).code(), "exact");
    }

    #[test]
    fn comparison_inclusivity() {
        assert!(Comparison::LessThanOrEqual.is_inclusive());
        assert!(Comparison::GreaterThanOrEqual.is_inclusive());
        assert!(!Comparison::LessThan.is_inclusive());
        assert!(!Comparison::GreaterThan.is_inclusive());
    }
}
