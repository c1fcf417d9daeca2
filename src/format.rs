//! The immutable matrix text layout shared by the formatter and the parser.

use crate::locale::{self, LocaleSymbols};
use crate::number::NumberFormat;
use crate::options::{Delimiter, MatrixFormatOptions};
use crate::{Error, Result};

/// A validated, immutable matrix text layout.
///
/// Holds the six configured delimiter strings, their trimmed forms used for
/// whitespace-insensitive matching, and the [`NumberFormat`] for entries.
/// A `MatrixFormat` is built once and shared freely; formatting and parsing
/// take `&self` only.
///
/// # Examples
///
/// ```rust
/// use matrix_format::MatrixFormat;
///
/// let format = MatrixFormat::default();
/// let text = format.format(&vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
/// assert_eq!(text, "{{1,2,3},{4,5,6}}");
///
/// let rows = format.parse(" { {1 , 2 , 3} , {4,5,6} } ").unwrap();
/// assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixFormat {
    prefix: String,
    suffix: String,
    row_prefix: String,
    row_suffix: String,
    row_separator: String,
    column_separator: String,
    trimmed_prefix: Delimiter,
    trimmed_suffix: Delimiter,
    trimmed_row_prefix: Delimiter,
    trimmed_row_suffix: Delimiter,
    trimmed_row_separator: Delimiter,
    trimmed_column_separator: Delimiter,
    number_format: NumberFormat,
}

impl Default for MatrixFormat {
    /// `{{a,b},{c,d}}` with the `en_US` number format.
    fn default() -> Self {
        MatrixFormat::assemble(&MatrixFormatOptions::default(), NumberFormat::default())
    }
}

impl MatrixFormat {
    /// Builds a format from options, resolving the locale's number format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] for an unknown locale and
    /// [`Error::InvalidConfig`] for delimiters that cannot be parsed back.
    pub fn new(options: MatrixFormatOptions) -> Result<Self> {
        let number_format = NumberFormat::for_locale(&options.locale)?
            .with_max_fraction_digits(options.max_fraction_digits);
        Self::with_number_format(&options, number_format)
    }

    /// Builds a format from the delimiters in `options` and an explicit
    /// number format. The locale fields of `options` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for delimiters that cannot be parsed back.
    pub fn with_number_format(
        options: &MatrixFormatOptions,
        number_format: NumberFormat,
    ) -> Result<Self> {
        let format = MatrixFormat::assemble(options, number_format);
        format.validate()?;

        tracing::debug!(
            prefix = %format.prefix,
            suffix = %format.suffix,
            column_separator = %format.column_separator,
            "built matrix format"
        );
        Ok(format)
    }

    /// The default delimiters with the number format of `locale`.
    ///
    /// # Errors
    ///
    /// Fails for unknown locales, and for locales whose decimal separator is
    /// `,`, which collides with the default column separator:
    ///
    /// ```rust
    /// use matrix_format::{Error, MatrixFormat, MatrixFormatOptions};
    ///
    /// assert!(MatrixFormat::for_locale("en_GB").is_ok());
    /// assert!(matches!(MatrixFormat::for_locale("de_DE"), Err(Error::InvalidConfig(_))));
    ///
    /// let german = MatrixFormatOptions::for_locale("de_DE").with_column_separator("; ");
    /// assert!(MatrixFormat::new(german).is_ok());
    /// ```
    pub fn for_locale(locale: &str) -> Result<Self> {
        Self::new(MatrixFormatOptions::for_locale(locale))
    }

    /// Lists the locales accepted by [`MatrixFormat::for_locale`].
    pub fn available_locales() -> Vec<String> {
        locale::available_locales()
    }

    fn assemble(options: &MatrixFormatOptions, number_format: NumberFormat) -> Self {
        MatrixFormat {
            prefix: options.prefix.clone(),
            suffix: options.suffix.clone(),
            row_prefix: options.row_prefix.clone(),
            row_suffix: options.row_suffix.clone(),
            row_separator: options.row_separator.clone(),
            column_separator: options.column_separator.clone(),
            trimmed_prefix: Delimiter::trimmed(&options.prefix),
            trimmed_suffix: Delimiter::trimmed(&options.suffix),
            trimmed_row_prefix: Delimiter::trimmed(&options.row_prefix),
            trimmed_row_suffix: Delimiter::trimmed(&options.row_suffix),
            trimmed_row_separator: Delimiter::trimmed(&options.row_separator),
            trimmed_column_separator: Delimiter::trimmed(&options.column_separator),
            number_format,
        }
    }

    fn validate(&self) -> Result<()> {
        let symbols = self.number_format.symbols();

        let Delimiter::Literal(column_separator) = &self.trimmed_column_separator else {
            return Err(Error::invalid_config("column separator must not be blank"));
        };
        check_number_boundary("column separator", column_separator, symbols)?;

        match &self.trimmed_row_suffix {
            Delimiter::Literal(row_suffix) => {
                check_number_boundary("row suffix", row_suffix, symbols)?;
            }
            // Without a row suffix the row separator and the suffix follow a number
            Delimiter::None => {
                if let Delimiter::Literal(row_separator) = &self.trimmed_row_separator {
                    check_number_boundary("row separator", row_separator, symbols)?;
                }
                if let Delimiter::Literal(suffix) = &self.trimmed_suffix {
                    check_number_boundary("suffix", suffix, symbols)?;
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn row_prefix(&self) -> &str {
        &self.row_prefix
    }

    #[must_use]
    pub fn row_suffix(&self) -> &str {
        &self.row_suffix
    }

    #[must_use]
    pub fn row_separator(&self) -> &str {
        &self.row_separator
    }

    #[must_use]
    pub fn column_separator(&self) -> &str {
        &self.column_separator
    }

    #[must_use]
    pub fn trimmed_prefix(&self) -> &Delimiter {
        &self.trimmed_prefix
    }

    #[must_use]
    pub fn trimmed_suffix(&self) -> &Delimiter {
        &self.trimmed_suffix
    }

    #[must_use]
    pub fn trimmed_row_prefix(&self) -> &Delimiter {
        &self.trimmed_row_prefix
    }

    #[must_use]
    pub fn trimmed_row_suffix(&self) -> &Delimiter {
        &self.trimmed_row_suffix
    }

    #[must_use]
    pub fn trimmed_row_separator(&self) -> &Delimiter {
        &self.trimmed_row_separator
    }

    #[must_use]
    pub fn trimmed_column_separator(&self) -> &Delimiter {
        &self.trimmed_column_separator
    }

    #[must_use]
    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }
}

/// Rejects separators that the number parser would read as part of the
/// preceding number.
fn check_number_boundary(name: &str, token: &str, symbols: LocaleSymbols) -> Result<()> {
    let Some(first) = token.chars().next() else {
        return Ok(());
    };

    if first == symbols.decimal_separator {
        return Err(Error::invalid_config(format!(
            "{name} {token:?} starts with the decimal separator {first:?}"
        )));
    }
    if first.is_ascii_digit() || first == 'E' || first == 'e' {
        return Err(Error::invalid_config(format!(
            "{name} {token:?} starts with {first:?}, which continues a number"
        )));
    }
    Ok(())
}
