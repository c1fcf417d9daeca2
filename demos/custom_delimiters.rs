//! Custom delimiter layouts and locale-specific numbers.
//!
//! Run with: cargo run --example custom_delimiters

use matrix_format::{MatrixFormat, MatrixFormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let m = [[1.5, -2.0, 0.25], [3.0, 4.0, -0.125]];

    // Bracket notation
    let brackets = MatrixFormat::new(
        MatrixFormatOptions::new()
            .with_prefix("[")
            .with_suffix("]")
            .with_row_separator("; ")
            .with_column_separator(", "),
    )?;
    println!("Brackets:   {}", brackets.display(&m));

    // MATLAB-style rows without row delimiters
    let matlab = MatrixFormat::new(
        MatrixFormatOptions::new()
            .with_prefix("[")
            .with_suffix("]")
            .with_row_prefix("")
            .with_row_suffix("")
            .with_row_separator("; ")
            .with_column_separator(" , "),
    )?;
    let text = matlab.format(&m);
    println!("MATLAB:     {}", text);
    assert_eq!(matlab.parse(&text)?, m.iter().map(|r| r.to_vec()).collect::<Vec<_>>());

    // A comma decimal separator needs a different column separator
    match MatrixFormat::for_locale("de_DE") {
        Ok(_) => unreachable!("',' is ambiguous with the default separators"),
        Err(e) => println!("de_DE:      {}", e),
    }
    let german =
        MatrixFormat::new(MatrixFormatOptions::for_locale("de_DE").with_column_separator("; "))?;
    println!("German:     {}", german.display(&m));

    // Layouts can be loaded from configuration
    let options: MatrixFormatOptions = toml::from_str(
        r#"
        prefix = "matrix("
        suffix = ")"
        row_separator = " "
        column_separator = " | "
        "#,
    )?;
    let from_config = MatrixFormat::new(options)?;
    println!("From TOML:  {}", from_config.display(&m));

    println!("\nAvailable locales: {}", MatrixFormat::available_locales().join(", "));

    Ok(())
}
