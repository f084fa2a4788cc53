//! Error types for localization operations

use thiserror::Error;

/// Errors that can occur while resolving locales or building catalogs
///
/// Only `UnsupportedLocale` is expected at runtime: it is a configuration
/// question the caller can answer (fall back, or propagate). The remaining
/// variants describe defective catalog data; they surface from the explicit
/// [`Catalog::build`](crate::Catalog::build) path so tests and build
/// tooling can inspect them, while the process-wide registry treats them
/// as fatal.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The caller requested a locale with no registered catalog
    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for locale {locale}: {errors:?}")]
    CatalogParse { locale: String, errors: Vec<String> },

    /// A supported locale's catalog is missing required messages
    #[error("Catalog for locale {locale} is missing messages: {missing:?}")]
    CatalogIncomplete {
        locale: String,
        missing: Vec<String>,
    },
}

/// Result type for localization operations
pub type LocaleResult<T> = Result<T, LocaleError>;
