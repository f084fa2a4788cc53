//! The atomic unit of validation failure

use crate::path::{Path, PathSegment};
use crate::value::{BoundValue, Comparison, LiteralValue, ParsedType, SizeBound};
use serde::{Deserialize, Serialize};

/// What went wrong, with exactly the parameters its message needs
///
/// This enumeration is closed: every kind's parameters are variant fields,
/// so an issue with the wrong parameter shape for its kind cannot be
/// constructed. Adding a kind is a compile-time event for every consumer
/// that matches on it, including each locale catalog's completeness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    /// The input's runtime type does not match the schema's
    TypeMismatch {
        expected: ParsedType,
        actual: ParsedType,
    },
    /// A required value was absent
    Required,
    InvalidEmail,
    InvalidUrl,
    /// A string failed a schema-supplied pattern
    InvalidRegex,
    /// A string violated a length constraint
    InvalidStringBounds { bound: SizeBound },
    /// A string did not start with the required prefix
    InvalidStringPrefix { prefix: String },
    /// A string did not end with the required suffix
    InvalidStringSuffix { suffix: String },
    InvalidDateTimeFormat,
    /// A number was not a multiple of the schema's step
    NotMultipleOf { multiple: f64 },
    /// A number or date fell outside a range bound
    OutOfRange {
        comparison: Comparison,
        bound: BoundValue,
    },
    /// A number was infinite
    NotFinite,
    /// An array violated a length constraint
    InvalidArrayBounds { bound: SizeBound },
    InvalidFunctionArgs,
    InvalidFunctionReturn,
    /// The results of an intersection schema could not be merged
    UnmergableIntersection,
    /// The input did not equal the schema's literal value
    InvalidLiteral { expected: LiteralValue },
    /// The input was not one of the enumeration's members
    InvalidEnumValue {
        expected: Vec<LiteralValue>,
        received: LiteralValue,
    },
    /// A strict object received keys its schema does not declare, in
    /// input-encounter order
    UnrecognizedKeys { keys: Vec<String> },
    /// A discriminated union's tag field held none of the declared values
    InvalidDiscriminator { expected: Vec<LiteralValue> },
    /// No branch of a plain union accepted the input
    ///
    /// Branch sub-issues are kept for programmatic inspection; the composer
    /// never renders them into the parent message.
    InvalidUnion { branches: Vec<Vec<Issue>> },
    /// A custom refinement rejected the input
    ///
    /// A producer-supplied message, when present, overrides the catalog's
    /// generic wording verbatim.
    CustomRefinementFailed { message: Option<String> },
    /// A date value was not a valid date
    InvalidDate,
}

impl IssueKind {
    /// Stable codes of every kind, in declaration order
    ///
    /// Catalog completeness is checked against this list; `codes_complete`
    /// below keeps it in sync with the enumeration.
    pub const ALL_CODES: [&'static str; 23] = [
        "type_mismatch",
        "required",
        "invalid_email",
        "invalid_url",
        "invalid_regex",
        "invalid_string_bounds",
        "invalid_string_prefix",
        "invalid_string_suffix",
        "invalid_date_time_format",
        "not_multiple_of",
        "out_of_range",
        "not_finite",
        "invalid_array_bounds",
        "invalid_function_args",
        "invalid_function_return",
        "unmergable_intersection",
        "invalid_literal",
        "invalid_enum_value",
        "unrecognized_keys",
        "invalid_discriminator",
        "invalid_union",
        "custom_refinement_failed",
        "invalid_date",
    ];

    /// Stable snake_case identifier for this kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Required => "required",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidUrl => "invalid_url",
            Self::InvalidRegex => "invalid_regex",
            Self::InvalidStringBounds { .. } => "invalid_string_bounds",
            Self::InvalidStringPrefix { .. } => "invalid_string_prefix",
            Self::InvalidStringSuffix { .. } => "invalid_string_suffix",
            Self::InvalidDateTimeFormat => "invalid_date_time_format",
            Self::NotMultipleOf { .. } => "not_multiple_of",
            Self::OutOfRange { .. } => "out_of_range",
            Self::NotFinite => "not_finite",
            Self::InvalidArrayBounds { .. } => "invalid_array_bounds",
            Self::InvalidFunctionArgs => "invalid_function_args",
            Self::InvalidFunctionReturn => "invalid_function_return",
            Self::UnmergableIntersection => "unmergable_intersection",
            Self::InvalidLiteral { .. } => "invalid_literal",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::UnrecognizedKeys { .. } => "unrecognized_keys",
            Self::InvalidDiscriminator { .. } => "invalid_discriminator",
            Self::InvalidUnion { .. } => "invalid_union",
            Self::CustomRefinementFailed { .. } => "custom_refinement_failed",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// A single validation failure: a kind plus the path to the failing value
///
/// Issues are created by the type checker during one validation pass and
/// are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(flatten)]
    kind: IssueKind,
    #[serde(default, skip_serializing_if = "Path::is_root")]
    path: Path,
}

impl Issue {
    /// Create an issue at the root of the input
    pub fn new(kind: IssueKind) -> Self {
        Self {
            kind,
            path: Path::root(),
        }
    }

    /// Attach the path to the failing value, consuming the issue
    pub fn at<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathSegment>,
    {
        self.path = Path::new(segments);
        self
    }

    /// Append one segment to the path, consuming the issue
    pub fn push_path(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.push(segment);
        self
    }

    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stable snake_case identifier for this issue's kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One representative of every variant. The exhaustive list doubles as
    // the guard that ALL_CODES tracks the enumeration.
    fn one_of_each() -> Vec<IssueKind> {
        vec![
            IssueKind::TypeMismatch {
                expected: ParsedType::String,
                actual: ParsedType::Number,
            },
            IssueKind::Required,
            IssueKind::InvalidEmail,
            IssueKind::InvalidUrl,
            IssueKind::InvalidRegex,
            IssueKind::InvalidStringBounds {
                bound: SizeBound::Min(5),
            },
            IssueKind::InvalidStringPrefix {
                prefix: "foo".into(),
            },
            IssueKind::InvalidStringSuffix {
                suffix: "bar".into(),
            },
            IssueKind::InvalidDateTimeFormat,
            IssueKind::NotMultipleOf { multiple: 5.0 },
            IssueKind::OutOfRange {
                comparison: Comparison::LessThan,
                bound: BoundValue::Number(5.0),
            },
            IssueKind::NotFinite,
            IssueKind::InvalidArrayBounds {
                bound: SizeBound::Max(2),
            },
            IssueKind::InvalidFunctionArgs,
            IssueKind::InvalidFunctionReturn,
            IssueKind::UnmergableIntersection,
            IssueKind::InvalidLiteral {
                expected: LiteralValue::Int(12),
            },
            IssueKind::InvalidEnumValue {
                expected: vec!["A".into(), "B".into()],
                received: "D".into(),
            },
            IssueKind::UnrecognizedKeys {
                keys: vec!["cat".into(), "rat".into()],
            },
            IssueKind::InvalidDiscriminator {
                expected: vec!["a".into(), "b".into()],
            },
            IssueKind::InvalidUnion { branches: vec![] },
            IssueKind::CustomRefinementFailed { message: None },
            IssueKind::InvalidDate,
        ]
    }

    #[test]
    fn codes_complete() {
        let codes: Vec<&str> = one_of_each().iter().map(|kind| kind.code()).collect();
        assert_eq!(codes, IssueKind::ALL_CODES);
    }

    #[test]
    fn issue_starts_at_root() {
        let issue = Issue::new(IssueKind::Required);
        assert!(issue.path().is_root());
        assert_eq!(issue.code(), "required");
    }

    #[test]
    fn at_replaces_the_path() {
        let issue = Issue::new(IssueKind::Required).at(["user", "name"]);
        assert_eq!(issue.path().to_string(), "user.name");
    }

    #[test]
    fn push_path_appends_segments() {
        let issue = Issue::new(IssueKind::Required)
            .push_path("pets")
            .push_path(0)
            .push_path("name");
        assert_eq!(issue.path().to_string(), "pets[0].name");
    }

    #[test]
    fn union_branches_are_inspectable() {
        let branch = vec![Issue::new(IssueKind::TypeMismatch {
            expected: ParsedType::String,
            actual: ParsedType::Boolean,
        })];
        let issue = Issue::new(IssueKind::InvalidUnion {
            branches: vec![branch.clone()],
        });
        match issue.kind() {
            IssueKind::InvalidUnion { branches } => assert_eq!(branches[0], branch),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
