//! Localized rendering of validation issues
//!
//! This crate turns the structured issues of `verdict-issues` into
//! human-readable text using the Fluent localization system. It includes:
//!
//! - Locale management with explicit unsupported-locale errors
//! - Immutable per-locale message catalogs, verified total over the issue
//!   kinds at construction
//! - Locale-aware parameter formatting (numbers, dates, literal sets)
//! - A composer performing exhaustive issue-kind dispatch
//! - A lazy, thread-safe, process-wide catalog registry
//!
//! Each locale file owns its full phrase structure; templates are never a
//! shared skeleton with words swapped in. Unions and custom refinements
//! deliberately render a generic message instead of enumerating branch
//! failures.
//!
//! # Example
//!
//! ```rust
//! use verdict_i18n::Composer;
//! use verdict_issues::{Issue, IssueKind, ParsedType};
//!
//! # fn main() -> Result<(), verdict_i18n::LocaleError> {
//! let composer = Composer::for_locale("th")?;
//! let issue = Issue::new(IssueKind::TypeMismatch {
//!     expected: ParsedType::String,
//!     actual: ParsedType::Number,
//! });
//!
//! let message = composer.compose(&issue);
//! assert_eq!(message.text(), "คาดว่า สตริง แต่ได้รับ ตัวเลข");
//! assert_eq!(message.code(), "type_mismatch");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod compose;
pub mod error;
pub mod format;
pub mod locale;
pub mod registry;

pub use catalog::Catalog;
pub use compose::{compose, Composer, FormattedMessage};
pub use error::{LocaleError, LocaleResult};
pub use locale::Locale;
pub use registry::catalog;
