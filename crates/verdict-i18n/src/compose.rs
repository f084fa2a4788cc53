//! Turning issues into localized text

use crate::catalog::{message_id, Catalog};
use crate::error::LocaleResult;
use crate::format;
use crate::locale::Locale;
use crate::registry;
use fluent::FluentArgs;
use std::fmt;
use verdict_issues::{BoundValue, Issue, IssueKind, ValidationFailure};

/// Localized text plus the stable code of the issue it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    text: String,
    code: &'static str,
}

impl FormattedMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stable snake_case identifier of the originating issue kind
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders issues into one locale's messages
///
/// A composer borrows the process-wide catalog for its locale, so it is
/// cheap to construct and copy around. Composition is pure: the same
/// issue always yields the same text.
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    locale: Locale,
    catalog: &'static Catalog,
}

impl Composer {
    /// Composer for a known locale
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            catalog: registry::catalog(locale),
        }
    }

    /// Composer for a caller-supplied locale string
    ///
    /// An unknown string is the recoverable `UnsupportedLocale` error;
    /// there is no implicit fallback to another locale.
    pub fn for_locale(code: &str) -> LocaleResult<Self> {
        Ok(Self::new(Locale::resolve(code)?))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render one issue into this locale's message
    pub fn compose(&self, issue: &Issue) -> FormattedMessage {
        let text = match issue.kind() {
            IssueKind::TypeMismatch { expected, actual } => {
                let mut args = FluentArgs::new();
                args.set("expected", self.catalog.type_name(*expected));
                args.set("actual", self.catalog.type_name(*actual));
                self.catalog.format_message("type-mismatch", Some(&args))
            }
            IssueKind::InvalidStringBounds { bound } | IssueKind::InvalidArrayBounds { bound } => {
                let mut args = FluentArgs::new();
                args.set("bound", bound.code());
                args.set("n", format::size(bound.value()));
                self.catalog
                    .format_message(&message_id(issue.code()), Some(&args))
            }
            IssueKind::InvalidStringPrefix { prefix } => {
                let mut args = FluentArgs::new();
                args.set("prefix", prefix.as_str());
                self.catalog
                    .format_message("invalid-string-prefix", Some(&args))
            }
            IssueKind::InvalidStringSuffix { suffix } => {
                let mut args = FluentArgs::new();
                args.set("suffix", suffix.as_str());
                self.catalog
                    .format_message("invalid-string-suffix", Some(&args))
            }
            IssueKind::NotMultipleOf { multiple } => {
                let mut args = FluentArgs::new();
                args.set("multiple", format::number(*multiple));
                self.catalog.format_message("not-multiple-of", Some(&args))
            }
            IssueKind::OutOfRange { comparison, bound } => {
                let mut args = FluentArgs::new();
                args.set("comparison", comparison.code());
                match bound {
                    BoundValue::Number(value) => {
                        args.set("subject", "number");
                        args.set("bound", format::number(*value));
                    }
                    BoundValue::Date(value) => {
                        args.set("subject", "date");
                        args.set("bound", format::date(self.locale, *value));
                    }
                }
                self.catalog.format_message("out-of-range", Some(&args))
            }
            IssueKind::InvalidLiteral { expected } => {
                let mut args = FluentArgs::new();
                args.set("expected", format::literal(self.locale, expected));
                self.catalog.format_message("invalid-literal", Some(&args))
            }
            IssueKind::InvalidEnumValue { expected, received } => {
                let mut args = FluentArgs::new();
                args.set("expected", format::literal_list(self.locale, expected));
                args.set("received", format::literal(self.locale, received));
                self.catalog
                    .format_message("invalid-enum-value", Some(&args))
            }
            IssueKind::UnrecognizedKeys { keys } => {
                let mut args = FluentArgs::new();
                args.set("keys", format::key_list(self.locale, keys));
                self.catalog
                    .format_message("unrecognized-keys", Some(&args))
            }
            IssueKind::InvalidDiscriminator { expected } => {
                let mut args = FluentArgs::new();
                args.set("expected", format::literal_list(self.locale, expected));
                self.catalog
                    .format_message("invalid-discriminator", Some(&args))
            }
            // The branch sub-issues stay on the issue for programmatic
            // inspection; the rendered message is the generic one.
            IssueKind::InvalidUnion { branches: _ } => {
                self.catalog.format_message("invalid-union", None)
            }
            IssueKind::CustomRefinementFailed { message } => match message {
                Some(custom) => custom.clone(),
                None => self
                    .catalog
                    .format_message("custom-refinement-failed", None),
            },
            IssueKind::Required
            | IssueKind::InvalidEmail
            | IssueKind::InvalidUrl
            | IssueKind::InvalidRegex
            | IssueKind::InvalidDateTimeFormat
            | IssueKind::NotFinite
            | IssueKind::InvalidFunctionArgs
            | IssueKind::InvalidFunctionReturn
            | IssueKind::UnmergableIntersection
            | IssueKind::InvalidDate => self.catalog.format_message(&message_id(issue.code()), None),
        };

        FormattedMessage {
            text,
            code: issue.code(),
        }
    }

    /// Render only the first issue of a failure, the common
    /// single-error presentation
    pub fn compose_first(&self, failure: &ValidationFailure) -> FormattedMessage {
        self.compose(failure.first())
    }

    /// Render every issue of a failure, in order
    pub fn compose_all(&self, failure: &ValidationFailure) -> Vec<FormattedMessage> {
        failure.iter().map(|issue| self.compose(issue)).collect()
    }
}

/// Render one issue for a caller-supplied locale string
pub fn compose(issue: &Issue, locale_code: &str) -> LocaleResult<FormattedMessage> {
    Ok(Composer::for_locale(locale_code)?.compose(issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_issues::ParsedType;

    #[test]
    fn custom_refinement_message_overrides_the_catalog() {
        let composer = Composer::new(Locale::Thai);
        let issue = Issue::new(IssueKind::CustomRefinementFailed {
            message: Some("รหัสผ่านอ่อนเกินไป".to_string()),
        });
        assert_eq!(composer.compose(&issue).text(), "รหัสผ่านอ่อนเกินไป");
    }

    #[test]
    fn formatted_message_carries_the_kind_code() {
        let composer = Composer::new(Locale::English);
        let issue = Issue::new(IssueKind::TypeMismatch {
            expected: ParsedType::Number,
            actual: ParsedType::String,
        });
        let message = composer.compose(&issue);
        assert_eq!(message.code(), "type_mismatch");
        assert_eq!(message.text(), "Expected number, received string");
    }

    #[test]
    fn union_branches_are_not_rendered() {
        let composer = Composer::new(Locale::English);
        let branch = vec![Issue::new(IssueKind::Required)];
        let issue = Issue::new(IssueKind::InvalidUnion {
            branches: vec![branch],
        });
        assert_eq!(composer.compose(&issue).text(), "Invalid input");
    }
}
