//! Serde adapter that stores a [`Matrix`] as matrix text in the default layout.
//!
//! Useful in configuration files, where `"{{1,0},{0,1}}"` reads better than
//! nested arrays:
//!
//! ```rust
//! use matrix_format::Matrix;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Transform {
//!     name: String,
//!     #[serde(with = "matrix_format::text")]
//!     weights: Matrix,
//! }
//!
//! let json = r#"{"name":"identity","weights":"{{1,0},{0,1}}"}"#;
//! let transform: Transform = serde_json::from_str(json).unwrap();
//! assert_eq!(transform.weights.get(1, 1), Some(1.0));
//! assert_eq!(serde_json::to_string(&transform).unwrap(), json);
//! ```

use serde::{de, Deserialize, Deserializer, Serializer};

use crate::{default_format, Matrix};

/// Serializes `matrix` as a string.
///
/// # Errors
///
/// Only fails if the serializer does.
pub fn serialize<S>(matrix: &Matrix, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&default_format().display(matrix))
}

/// Deserializes a string into a rectangular `Matrix`.
///
/// # Errors
///
/// Fails for non-string input, unparseable text and ragged rows.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Matrix, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    default_format()
        .parse_matrix(&text)
        .map_err(de::Error::custom)
}
