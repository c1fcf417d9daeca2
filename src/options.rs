//! Configuration options for matrix text.
//!
//! This module provides the types used to describe a matrix text layout:
//!
//! - [`MatrixFormatOptions`]: the six delimiter strings and the locale
//! - [`Delimiter`]: a trimmed delimiter as used while parsing
//!
//! Options are plain data. They become an immutable, validated
//! [`MatrixFormat`](crate::MatrixFormat) through
//! [`MatrixFormat::new`](crate::MatrixFormat::new).
//!
//! ## Examples
//!
//! ```rust
//! use matrix_format::{MatrixFormat, MatrixFormatOptions};
//!
//! let options = MatrixFormatOptions::new()
//!     .with_prefix("[")
//!     .with_suffix("]")
//!     .with_row_separator(";")
//!     .with_column_separator(", ");
//!
//! let format = MatrixFormat::new(options).unwrap();
//! assert_eq!(format.format(&vec![vec![1.0, 2.0], vec![3.0, 4.0]]), "[{1, 2};{3, 4}]");
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::DEFAULT_LOCALE;

/// The default prefix: "{".
pub const DEFAULT_PREFIX: &str = "{";
/// The default suffix: "}".
pub const DEFAULT_SUFFIX: &str = "}";
/// The default row prefix: "{".
pub const DEFAULT_ROW_PREFIX: &str = "{";
/// The default row suffix: "}".
pub const DEFAULT_ROW_SUFFIX: &str = "}";
/// The default row separator: ",".
pub const DEFAULT_ROW_SEPARATOR: &str = ",";
/// The default column separator: ",".
pub const DEFAULT_COLUMN_SEPARATOR: &str = ",";

/// A delimiter token as matched by the parser.
///
/// Configured delimiters are trimmed before matching. A delimiter that
/// trims to nothing is [`Delimiter::None`]: it is always present and never
/// consumes input.
///
/// # Examples
///
/// ```rust
/// use matrix_format::Delimiter;
///
/// assert_eq!(Delimiter::trimmed(" , "), Delimiter::Literal(",".to_string()));
/// assert_eq!(Delimiter::trimmed("  "), Delimiter::None);
/// assert_eq!(Delimiter::trimmed(";").as_str(), ";");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    None,
    Literal(String),
}

impl Delimiter {
    /// Builds the matching form of a configured delimiter string.
    #[must_use]
    pub fn trimmed(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Delimiter::None
        } else {
            Delimiter::Literal(trimmed.to_string())
        }
    }

    /// Returns the literal text, or `""` for [`Delimiter::None`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::None => "",
            Delimiter::Literal(text) => text,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Delimiter::None)
    }
}

/// Delimiters and locale of a matrix text layout.
///
/// Every field has a default, so partial documents deserialize cleanly:
///
/// ```rust
/// use matrix_format::MatrixFormatOptions;
///
/// let options: MatrixFormatOptions =
///     serde_json::from_str(r#"{ "prefix": "[", "suffix": "]" }"#).unwrap();
/// assert_eq!(options.prefix, "[");
/// assert_eq!(options.row_prefix, "{");
/// assert_eq!(options.locale, "en_US");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixFormatOptions {
    pub prefix: String,
    pub suffix: String,
    pub row_prefix: String,
    pub row_suffix: String,
    pub row_separator: String,
    pub column_separator: String,
    /// Locale of the number format, e.g. `en_US` or `de-DE`
    pub locale: String,
    /// Fraction digits kept when formatting entries, at most
    /// [`MAX_FRACTION_DIGITS`](crate::number::MAX_FRACTION_DIGITS)
    pub max_fraction_digits: usize,
}

impl Default for MatrixFormatOptions {
    fn default() -> Self {
        MatrixFormatOptions {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            row_prefix: DEFAULT_ROW_PREFIX.to_string(),
            row_suffix: DEFAULT_ROW_SUFFIX.to_string(),
            row_separator: DEFAULT_ROW_SEPARATOR.to_string(),
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            max_fraction_digits: crate::number::DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

impl MatrixFormatOptions {
    /// Creates the default options: `{{a,b},{c,d}}` in the `en_US` locale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_format::MatrixFormatOptions;
    ///
    /// let options = MatrixFormatOptions::new();
    /// assert_eq!(options.column_separator, ",");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default delimiters with the number format of another locale.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        Self::new().with_locale(locale)
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the row prefix. An empty string means rows are not opened.
    #[must_use]
    pub fn with_row_prefix(mut self, row_prefix: impl Into<String>) -> Self {
        self.row_prefix = row_prefix.into();
        self
    }

    /// Sets the row suffix. An empty string means rows are not closed.
    #[must_use]
    pub fn with_row_suffix(mut self, row_suffix: impl Into<String>) -> Self {
        self.row_suffix = row_suffix.into();
        self
    }

    #[must_use]
    pub fn with_row_separator(mut self, row_separator: impl Into<String>) -> Self {
        self.row_separator = row_separator.into();
        self
    }

    /// Sets the column separator.
    ///
    /// Whitespace around the separator is emitted when formatting and
    /// ignored when parsing:
    ///
    /// ```rust
    /// use matrix_format::{MatrixFormat, MatrixFormatOptions};
    ///
    /// let format = MatrixFormat::new(MatrixFormatOptions::new().with_column_separator(" , ")).unwrap();
    /// assert_eq!(format.format(&vec![vec![1.0, 2.0]]), "{{1 , 2}}");
    /// assert_eq!(format.parse("{{1,2}}").unwrap(), vec![vec![1.0, 2.0]]);
    /// ```
    #[must_use]
    pub fn with_column_separator(mut self, column_separator: impl Into<String>) -> Self {
        self.column_separator = column_separator.into();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }
}
