//! Structured validation issue model for the verdict workspace
//!
//! This crate defines the data side of validation failure reporting:
//!
//! - A closed enumeration of issue kinds, each carrying its own typed
//!   parameters
//! - Path information locating a failing value inside the root input
//! - An aggregate failure type collecting every issue from one validation
//!   pass
//!
//! Nothing in this crate renders text. Issues are plain, immutable data
//! produced by a type checker and consumed by the `verdict-i18n` composer,
//! which turns them into localized messages.
//!
//! # Example
//!
//! ```rust
//! use verdict_issues::{Issue, IssueKind, ParsedType, PathSegment};
//!
//! let issue = Issue::new(IssueKind::TypeMismatch {
//!     expected: ParsedType::String,
//!     actual: ParsedType::Number,
//! })
//! .at([PathSegment::key("user"), PathSegment::key("name")]);
//!
//! assert_eq!(issue.code(), "type_mismatch");
//! assert_eq!(issue.path().to_string(), "user.name");
//! ```

pub mod failure;
pub mod issue;
pub mod path;
pub mod value;

pub use failure::{EmptyFailure, ValidationFailure};
pub use issue::{Issue, IssueKind};
pub use path::{Path, PathSegment};
pub use value::{BoundValue, Comparison, LiteralValue, ParsedType, SizeBound};
