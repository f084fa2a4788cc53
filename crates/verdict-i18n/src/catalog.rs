//! Per-locale message catalogs backed by FluentBundle

use crate::error::{LocaleError, LocaleResult};
use crate::locale::Locale;
use fluent::{FluentArgs, FluentResource};
use fluent_bundle::concurrent::FluentBundle;
use tracing::debug;
use verdict_issues::{IssueKind, ParsedType};

/// Fluent message id for an issue kind code
pub(crate) fn message_id(code: &str) -> String {
    code.replace('_', "-")
}

/// An immutable, fully populated message catalog for one locale
///
/// Construction verifies totality: the bundle must hold a message for
/// every issue kind and every localized type name, so a missing entry is
/// a construction-time error and can never surface mid-format. Once built
/// a catalog is read-only and safe to share across threads.
pub struct Catalog {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Build the catalog for a locale from its embedded Fluent resource
    pub fn build(locale: Locale) -> LocaleResult<Self> {
        Self::from_source(locale, locale.embedded_source())
    }

    /// Build a catalog from Fluent source, applying the same totality
    /// check as the embedded catalogs
    pub fn from_source(locale: Locale, source: &str) -> LocaleResult<Self> {
        let resource = FluentResource::try_new(source.to_owned()).map_err(|(_, errors)| {
            LocaleError::CatalogParse {
                locale: locale.code().to_string(),
                errors: errors.iter().map(|error| format!("{error:?}")).collect(),
            }
        })?;

        let language = locale.to_language_identifier()?;
        let mut bundle = FluentBundle::new_concurrent(vec![language]);
        // Isolation marks would leak into the rendered text
        bundle.set_use_isolating(false);

        bundle
            .add_resource(resource)
            .map_err(|errors| LocaleError::CatalogParse {
                locale: locale.code().to_string(),
                errors: errors.iter().map(|error| format!("{error:?}")).collect(),
            })?;

        let catalog = Self { locale, bundle };
        catalog.check_totality()?;

        debug!(locale = locale.code(), "catalog built");
        Ok(catalog)
    }

    /// Verify one message per issue kind plus one per localized type name
    fn check_totality(&self) -> LocaleResult<()> {
        let mut missing = Vec::new();

        for code in IssueKind::ALL_CODES {
            let id = message_id(code);
            if !self.has_message(&id) {
                missing.push(id);
            }
        }
        for parsed_type in ParsedType::ALL {
            let id = format!("type-name-{}", parsed_type.code());
            if !self.has_message(&id) {
                missing.push(id);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LocaleError::CatalogIncomplete {
                locale: self.locale.code().to_string(),
                missing,
            })
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn has_message(&self, id: &str) -> bool {
        self.bundle
            .get_message(id)
            .and_then(|message| message.value())
            .is_some()
    }

    /// Format a message from this catalog
    ///
    /// The catalog is total by construction, so a missing message or a
    /// formatting error here means the catalog and the composer disagree
    /// about a message's parameters. That is a defect in this crate, not
    /// a runtime condition, and it panics rather than shipping a
    /// half-substituted template.
    pub(crate) fn format_message(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let message = self
            .bundle
            .get_message(id)
            .unwrap_or_else(|| panic!("catalog {} has no message '{id}'", self.locale.code()));
        let pattern = message
            .value()
            .unwrap_or_else(|| panic!("catalog {} message '{id}' has no value", self.locale.code()));

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            panic!(
                "catalog {} failed to format message '{id}': {errors:?}",
                self.locale.code()
            );
        }

        formatted.into_owned()
    }

    /// The locale's name for a runtime type
    pub fn type_name(&self, parsed_type: ParsedType) -> String {
        self.format_message(&format!("type-name-{}", parsed_type.code()), None)
    }
}
