//! Aggregate failure value for one validation pass

use crate::issue::Issue;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validation failure must carry at least one issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a validation failure must contain at least one issue")]
pub struct EmptyFailure;

/// Every issue raised during a single validation pass, finalized before
/// any formatting begins
///
/// `Display` shows issue codes and paths only; localized text comes from
/// the `verdict-i18n` composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Issue>", into = "Vec<Issue>")]
pub struct ValidationFailure {
    issues: Vec<Issue>,
}

impl ValidationFailure {
    pub fn new(issues: Vec<Issue>) -> Result<Self, EmptyFailure> {
        if issues.is_empty() {
            return Err(EmptyFailure);
        }
        Ok(Self { issues })
    }

    /// The first issue raised, for single-error reporting
    pub fn first(&self) -> &Issue {
        &self.issues[0]
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }
}

impl TryFrom<Vec<Issue>> for ValidationFailure {
    type Error = EmptyFailure;

    fn try_from(issues: Vec<Issue>) -> Result<Self, EmptyFailure> {
        Self::new(issues)
    }
}

impl From<ValidationFailure> for Vec<Issue> {
    fn from(failure: ValidationFailure) -> Self {
        failure.issues
    }
}

impl<'a> IntoIterator for &'a ValidationFailure {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (position, issue) in self.issues.iter().enumerate() {
            if position > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue.code())?;
            if !issue.path().is_root() {
                write!(f, " at {}", issue.path())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueKind;
    use crate::value::ParsedType;

    fn type_mismatch() -> Issue {
        Issue::new(IssueKind::TypeMismatch {
            expected: ParsedType::Number,
            actual: ParsedType::String,
        })
    }

    #[test]
    fn rejects_empty_issue_lists() {
        assert_eq!(ValidationFailure::new(Vec::new()), Err(EmptyFailure));
    }

    #[test]
    fn first_returns_the_first_issue() {
        let failure = ValidationFailure::new(vec![
            type_mismatch().at(["age"]),
            Issue::new(IssueKind::Required).at(["name"]),
        ])
        .unwrap();
        assert_eq!(failure.first().code(), "type_mismatch");
        assert_eq!(failure.len(), 2);
    }

    #[test]
    fn display_lists_codes_and_paths() {
        let failure = ValidationFailure::new(vec![
            type_mismatch().at(["age"]),
            Issue::new(IssueKind::Required),
        ])
        .unwrap();
        assert_eq!(
            failure.to_string(),
            "validation failed: type_mismatch at age; required"
        );
    }
}
