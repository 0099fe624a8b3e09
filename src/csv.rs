// src/csv.rs
// Just enough CSV for the local colour store: `color,frequency` rows, where a
// colour name may itself contain the separator or quotes.

use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Reading ---------------- */

#[derive(Default)]
struct RowBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
}

impl RowBuilder {
    fn end_field(&mut self) {
        self.row.push(take(&mut self.field));
    }

    /// Close the current row. A line holding nothing at all is not a row.
    fn end_row(&mut self) {
        self.end_field();
        let row = take(&mut self.row);
        if !matches!(row.as_slice(), [only] if only.is_empty()) {
            self.rows.push(row);
        }
    }
}

/// Split `text` into rows of fields. Handles `""` escapes inside quoted
/// fields and both LF and CRLF line ends; blank lines are dropped. An
/// unterminated quote runs to the end of the input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut b = RowBuilder::default();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' if chars.next_if_eq(&'"').is_some() => b.field.push('"'),
                '"' => quoted = false,
                _ => b.field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '\r' => {
                let _ = chars.next_if_eq(&'\n');
                b.end_row();
            }
            '\n' => b.end_row(),
            c if c == sep => b.end_field(),
            _ => b.field.push(ch),
        }
    }
    b.end_row();
    b.rows
}

/* ---------------- Writing ---------------- */

/// `field` as it must appear on disk. Empty fields are quoted too, so an
/// empty colour name stays visible in the file.
fn quote(field: &str, sep: char) -> Cow<'_, str> {
    let special = field.is_empty() || field.contains(|c: char| c == sep || matches!(c, '"' | '\n' | '\r'));
    if special {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write one row, newline-terminated.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        w.write_all(quote(cell, sep).as_bytes())?;
    }
    writeln!(w)
}
