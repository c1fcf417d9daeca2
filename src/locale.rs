//! Locale support for number formatting.
//!
//! The locale table is embedded as TOML and loaded once into a process-wide
//! read-only registry. Only the symbols that matter to matrix text are kept:
//! the decimal separator and the minus sign. Grouping separators are absent
//! on purpose; matrix text never contains them.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Locale used by [`LocaleSymbols::default`] and the default matrix format.
pub const DEFAULT_LOCALE: &str = "en_US";

static LOCALES: OnceLock<IndexMap<String, LocaleSymbols>> = OnceLock::new();

/// Number symbols for one locale.
///
/// # Examples
///
/// ```rust
/// use matrix_format::LocaleSymbols;
///
/// let german = LocaleSymbols::for_locale("de-DE").unwrap();
/// assert_eq!(german.decimal_separator, ',');
///
/// // Regional identifiers fall back to their language entry
/// let austrian = LocaleSymbols::for_locale("de_AT").unwrap();
/// assert_eq!(austrian, german);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSymbols {
    #[serde(rename = "decimal")]
    pub decimal_separator: char,
    #[serde(rename = "minus", default = "default_minus_sign")]
    pub minus_sign: char,
}

fn default_minus_sign() -> char {
    '-'
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        LocaleSymbols {
            decimal_separator: '.',
            minus_sign: default_minus_sign(),
        }
    }
}

impl LocaleSymbols {
    /// Looks up the symbols for a locale identifier such as `en_US` or `fr-FR`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] when neither the identifier nor its
    /// language part is in the locale table.
    pub fn for_locale(locale: &str) -> Result<Self> {
        let normalized = locale.trim().replace('-', "_");
        let table = registry();

        if let Some(symbols) = table.get(&normalized) {
            return Ok(*symbols);
        }

        let language = normalized.split('_').next().unwrap_or_default();
        table
            .get(language)
            .copied()
            .ok_or_else(|| Error::unknown_locale(locale))
    }
}

/// Lists the locale identifiers available to [`LocaleSymbols::for_locale`].
pub fn available_locales() -> Vec<String> {
    registry().keys().cloned().collect()
}

fn registry() -> &'static IndexMap<String, LocaleSymbols> {
    LOCALES.get_or_init(load_embedded)
}

fn load_embedded() -> IndexMap<String, LocaleSymbols> {
    let data = include_str!("locale/locales.toml");
    match toml::from_str::<IndexMap<String, LocaleSymbols>>(data) {
        Ok(table) => {
            tracing::debug!(count = table.len(), "loaded locale table");
            table
        }
        Err(e) => {
            // Keep the default locale usable even if the table is broken
            tracing::error!("failed to load embedded locale data: {e}");
            let mut table = IndexMap::new();
            table.insert(DEFAULT_LOCALE.to_string(), LocaleSymbols::default());
            table
        }
    }
}
