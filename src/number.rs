//! Locale-aware formatting and parsing of single matrix entries.
//!
//! [`NumberFormat`] never groups digits. Grouping would make `1,345` ambiguous
//! against the default `,` column separator, so the type has no grouping
//! setting at all instead of one that has to be switched off.
//!
//! Non-finite values use a parenthesised form so that they can never be
//! confused with delimiters or with a truncated number:
//!
//! | Value | Text |
//! |-------|------|
//! | NaN | `(NaN)` |
//! | +∞ | `(Infinity)` |
//! | -∞ | `(-Infinity)` |

use crate::locale::LocaleSymbols;
use crate::position::ParsePosition;
use crate::Result;

/// Fraction digits kept when formatting, unless configured otherwise.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 10;

/// Upper bound for [`NumberFormat::with_max_fraction_digits`]. No `f64` has
/// more significant fraction digits than this.
pub const MAX_FRACTION_DIGITS: usize = 340;

const SPECIAL_VALUES: [(&str, f64); 3] = [
    ("(NaN)", f64::NAN),
    ("(Infinity)", f64::INFINITY),
    ("(-Infinity)", f64::NEG_INFINITY),
];

/// Formats and parses matrix entries for one locale.
///
/// # Examples
///
/// ```rust
/// use matrix_format::{NumberFormat, ParsePosition};
///
/// let format = NumberFormat::for_locale("de_DE").unwrap();
/// assert_eq!(format.format_to_string(-1.25), "-1,25");
///
/// let mut pos = ParsePosition::new(1);
/// assert_eq!(format.parse("[3,5]", &mut pos), Some(3.5));
/// assert_eq!(pos.index(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    symbols: LocaleSymbols,
    max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::new(LocaleSymbols::default())
    }
}

impl NumberFormat {
    #[must_use]
    pub fn new(symbols: LocaleSymbols) -> Self {
        NumberFormat {
            symbols,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }

    /// Creates the number format of a locale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownLocale`] if the locale is not known.
    pub fn for_locale(locale: &str) -> Result<Self> {
        Ok(NumberFormat::new(LocaleSymbols::for_locale(locale)?))
    }

    /// Sets how many fraction digits are kept when formatting, capped at
    /// [`MAX_FRACTION_DIGITS`].
    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits.min(MAX_FRACTION_DIGITS);
        self
    }

    #[must_use]
    pub fn symbols(&self) -> LocaleSymbols {
        self.symbols
    }

    #[must_use]
    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// Appends the text of `value` to `out`.
    pub fn format(&self, value: f64, out: &mut String) {
        if !value.is_finite() {
            let special = if value.is_nan() {
                "(NaN)"
            } else if value > 0.0 {
                "(Infinity)"
            } else {
                "(-Infinity)"
            };
            out.push_str(special);
            return;
        }

        if value.is_sign_negative() {
            out.push(self.symbols.minus_sign);
        }

        let digits = format!("{:.*}", self.max_fraction_digits, value.abs());
        let digits = trim_fraction(&digits);
        match digits.split_once('.') {
            Some((integer, fraction)) => {
                out.push_str(integer);
                out.push(self.symbols.decimal_separator);
                out.push_str(fraction);
            }
            None => out.push_str(digits),
        }
    }

    /// Formats `value` into a new string.
    #[must_use]
    pub fn format_to_string(&self, value: f64) -> String {
        let mut out = String::new();
        self.format(value, &mut out);
        out
    }

    /// Parses one number starting at the cursor.
    ///
    /// On success the cursor moves past the number. On failure the index is
    /// left untouched and the error index is set to the cursor position.
    pub fn parse(&self, text: &str, pos: &mut ParsePosition) -> Option<f64> {
        let start = pos.index();
        let Some(rest) = text.get(start..) else {
            pos.set_error_index(start);
            return None;
        };

        let parsed = parse_special(rest).or_else(|| self.parse_decimal(rest));
        match parsed {
            Some((value, len)) => {
                pos.advance(len);
                Some(value)
            }
            None => {
                pos.set_error_index(start);
                None
            }
        }
    }

    /// Scans `[minus] digits [sep digits] [E [sign] digits]` and returns the
    /// value with the number of bytes consumed.
    fn parse_decimal(&self, input: &str) -> Option<(f64, usize)> {
        let mut literal = String::with_capacity(24);
        let mut consumed = 0;

        let mut rest = input;
        if let Some(after) = strip_minus(rest, self.symbols.minus_sign) {
            literal.push('-');
            consumed += rest.len() - after.len();
            rest = after;
        }

        let integer_len = leading_digits(rest);
        literal.push_str(&rest[..integer_len]);
        consumed += integer_len;
        rest = &rest[integer_len..];

        let mut fraction_len = 0;
        if let Some(after) = rest.strip_prefix(self.symbols.decimal_separator) {
            fraction_len = leading_digits(after);
            if integer_len + fraction_len > 0 {
                literal.push('.');
                literal.push_str(&after[..fraction_len]);
                consumed += rest.len() - after.len() + fraction_len;
                rest = &after[fraction_len..];
            }
        }

        if integer_len + fraction_len == 0 {
            return None;
        }

        if let Some((exponent, len)) = self.parse_exponent(rest) {
            literal.push('e');
            literal.push_str(&exponent);
            consumed += len;
        }

        let value = literal.parse::<f64>().ok()?;
        Some((value, consumed))
    }

    /// Exponents are consumed only when at least one digit follows the marker.
    fn parse_exponent(&self, input: &str) -> Option<(String, usize)> {
        let after_marker = input.strip_prefix(['E', 'e'])?;
        let mut exponent = String::new();

        let digits_start = if let Some(after) = after_marker.strip_prefix('+') {
            after
        } else if let Some(after) = strip_minus(after_marker, self.symbols.minus_sign) {
            exponent.push('-');
            after
        } else {
            after_marker
        };

        let digits = leading_digits(digits_start);
        if digits == 0 {
            return None;
        }
        exponent.push_str(&digits_start[..digits]);

        let consumed = input.len() - digits_start.len() + digits;
        Some((exponent, consumed))
    }
}

fn parse_special(input: &str) -> Option<(f64, usize)> {
    SPECIAL_VALUES
        .iter()
        .find(|(text, _)| input.starts_with(text))
        .map(|(text, value)| (*value, text.len()))
}

/// Accepts the locale minus sign as well as an ASCII hyphen.
fn strip_minus(input: &str, minus_sign: char) -> Option<&str> {
    input
        .strip_prefix(minus_sign)
        .or_else(|| input.strip_prefix('-'))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
