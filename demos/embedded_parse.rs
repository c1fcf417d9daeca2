//! Reading matrices out of a larger document with `parse_at`.
//!
//! Run with: cargo run --example embedded_parse

use matrix_format::{MatrixFormat, ParsePosition};

fn main() {
    let format = MatrixFormat::default();
    let document = "A = {{1, 2}, {3, 4}}\nB = {{5}}\nC = {{6, oops}}\nD = {{7, 8, 9}}\n";

    let mut pos = ParsePosition::new(0);
    while let Some(offset) = document[pos.index()..].find('=') {
        let label = document[..pos.index() + offset].trim_end();
        let name = label.rsplit('\n').next().unwrap_or(label);
        pos.set_index(pos.index() + offset + 1);

        match format.parse_at(document, &mut pos) {
            Some(rows) => println!("{name}: {rows:?} (next offset {})", pos.index()),
            None => println!(
                "{name}: not a matrix, error at offset {}",
                pos.error_index().unwrap_or(pos.index())
            ),
        }
    }
}
