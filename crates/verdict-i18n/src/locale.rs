//! Locale management and utilities

use crate::error::{LocaleError, LocaleResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported locales
///
/// The enumeration is closed; a caller-supplied locale string that does
/// not resolve here is the recoverable `UnsupportedLocale` condition. The
/// core never infers a locale from the environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Thai,
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Thai => "th-TH",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Thai => "th",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "th" | "th-TH" => Some(Self::Thai),
            _ => None,
        }
    }

    /// Resolve a caller-supplied locale string, surfacing the unsupported
    /// case as a typed error
    pub fn resolve(code: &str) -> LocaleResult<Self> {
        Self::from_code(code).ok_or_else(|| LocaleError::UnsupportedLocale {
            locale: code.to_string(),
        })
    }

    /// Convert to a Fluent LanguageIdentifier
    pub fn to_language_identifier(&self) -> LocaleResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| LocaleError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::English, Self::Thai]
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Thai => "ไทย",
        }
    }

    /// Embedded Fluent source for this locale's catalog
    pub(crate) fn embedded_source(&self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en/main.ftl"),
            Self::Thai => include_str!("../locales/th/main.ftl"),
        }
    }
}
