//! Formatting and parsing with the default `{{a,b},{c,d}}` layout.
//!
//! Run with: cargo run --example simple

use matrix_format::{from_str, to_string, Matrix};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rotation = Matrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]])?;

    // Format with the default layout
    let text = to_string(&rotation);
    println!("Matrix text: {}\n", text);

    // Parse back, tolerating whitespace anywhere between tokens
    let rows = from_str(" { {0, -1} ,\n  {1, 0} } ")?;
    let parsed = Matrix::from_rows(rows)?;
    assert_eq!(rotation, parsed);
    println!("✓ Round-trip successful");

    // Failures carry the offset where the text diverged
    match from_str("{{1,2,x}}") {
        Ok(_) => unreachable!("text is malformed"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
