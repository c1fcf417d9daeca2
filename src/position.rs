//! Parse cursor shared by the number and matrix parsers.

/// Tracks how far the input has been consumed and where parsing diverged.
///
/// Offsets are byte offsets into the UTF-8 input and always fall on a
/// `char` boundary. The index only moves forward on successful matches;
/// failed attempts record [`error_index`](Self::error_index) instead.
///
/// # Examples
///
/// ```rust
/// use matrix_format::{MatrixFormat, ParsePosition};
///
/// let format = MatrixFormat::default();
/// let mut pos = ParsePosition::new(0);
/// let rows = format.parse_at("{{1,2}} trailing text", &mut pos).unwrap();
///
/// assert_eq!(rows, vec![vec![1.0, 2.0]]);
/// assert_eq!(pos.index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsePosition {
    index: usize,
    error_index: Option<usize>,
}

impl ParsePosition {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        ParsePosition {
            index,
            error_index: None,
        }
    }

    /// Offset of the next unconsumed byte.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Offset at which the last failed parse diverged, if any.
    #[must_use]
    pub const fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set_error_index(&mut self, index: usize) {
        self.error_index = Some(index);
    }

    pub fn clear_error(&mut self) {
        self.error_index = None;
    }

    pub(crate) fn advance(&mut self, len: usize) {
        self.index += len;
    }
}
