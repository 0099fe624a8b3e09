// src/specs/shirt_table.rs
//! Spec for the shirt-colour table.
//!
//! Every `<tr>` in the document is a row. Cells are the row's `<td>` elements;
//! `<th>` cells are only counted so a pure header row can be recognised. The
//! second cell holds the colours worn, as a `", "`-separated list.

use crate::core::html::Tags;
use crate::core::visible_text;

/// Column holding the colour list.
pub const COLORS_COL: usize = 1;

/// End tags that also end an open row.
const SECTION_ENDS: [&str; 5] = ["tr", "table", "tbody", "thead", "tfoot"];

/// One table row: its 1-based position in the document and the visible text
/// of each `<td>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub number: usize,
    pub cells: Vec<String>,
    pub header_cells: usize,
}

impl Row {
    /// `<th>` cells only, e.g. `<tr><th>DAY</th><th>COLOURS</th></tr>`.
    pub fn is_header(&self) -> bool {
        self.cells.is_empty() && self.header_cells > 0
    }

    /// Raw text of the colour cell, if the row has one.
    pub fn colors_cell(&self) -> Option<&str> {
        self.cells.get(COLORS_COL).map(String::as_str)
    }
}

/// Row and cell currently open while walking the tags.
#[derive(Default)]
struct Cursor {
    rows: Vec<Row>,
    row: Option<Row>,
    /// `(is_td, content start)` of the open cell
    cell: Option<(bool, usize)>,
}

impl Cursor {
    fn close_cell(&mut self, doc: &str, at: usize) {
        let Some((is_td, from)) = self.cell.take() else { return };
        let Some(row) = self.row.as_mut() else { return };
        if is_td {
            row.cells.push(visible_text(&doc[from..at]));
        } else {
            row.header_cells += 1;
        }
    }

    fn close_row(&mut self, doc: &str, at: usize) {
        self.close_cell(doc, at);
        if let Some(row) = self.row.take() {
            self.rows.push(row);
        }
    }
}

/// Parse every table row in `doc`, in one forward pass over its tags.
///
/// A missing `</td>`/`</th>` ends at the next cell or row boundary; a
/// missing `</tr>` ends at the next `<tr>` or at the end of its table
/// section. Rows inside comments or `<script>`/`<style>` are not rows.
pub fn parse_rows(doc: &str) -> Vec<Row> {
    let mut c = Cursor::default();

    for tag in Tags::new(doc) {
        if tag.is_open("tr") {
            c.close_row(doc, tag.start);
            c.row = Some(Row { number: c.rows.len() + 1, cells: Vec::new(), header_cells: 0 });
        } else if tag.is_open("td") || tag.is_open("th") {
            if c.row.is_some() {
                c.close_cell(doc, tag.start);
                c.cell = Some((tag.is_open("td"), tag.end));
            }
        } else if tag.is_close("td") || tag.is_close("th") {
            c.close_cell(doc, tag.start);
        } else if SECTION_ENDS.iter().any(|name| tag.is_close(name)) {
            c.close_row(doc, tag.start);
        }
    }
    c.close_row(doc, doc.len());
    c.rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
<html><body>
<table>
  <thead><tr><th>DAY</th><th>COLOURS</th></tr></thead>
  <tbody>
    <tr>
      <td>MONDAY</td>
      <td>GREEN, YELLOW, GREEN, BROWN, BLUE, PINK, BLUE, YELLOW, ORANGE, CREAM, ORANGE, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, GREEN</td>
    </tr>
    <tr>
      <td>TUESDAY</td>
      <td>ARSH, BROWN, GREEN, BROWN, BLUE, BLUE, BLEW, PINK, PINK, ORANGE, ORANGE, RED, WHITE, BLUE, WHITE, WHITE, BLUE, BLUE, BLUE</td>
    </tr>
  </tbody>
</table>
</body></html>
"#;

    #[test]
    fn reads_header_and_body_rows() {
        let rows = parse_rows(SAMPLE);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_header());
        assert_eq!(rows[0].header_cells, 2);
        assert!(!rows[1].is_header());
        assert_eq!(rows[1].cells[0], "MONDAY");
        assert!(rows[1].colors_cell().unwrap().starts_with("GREEN, YELLOW"));
        assert_eq!(rows[2].number, 3);
    }

    #[test]
    fn nested_markup_in_cells_is_flattened() {
        let doc = "<tr><td>WED</td><td><b>RED</b>, <span class='c'>BLUE</span></td></tr>";
        let rows = parse_rows(doc);
        assert_eq!(rows[0].colors_cell(), Some("RED, BLUE"));
    }

    #[test]
    fn single_cell_row_has_no_colors_cell() {
        let rows = parse_rows("<tr><td>ONLY</td></tr>");
        assert_eq!(rows[0].cells.len(), 1);
        assert_eq!(rows[0].colors_cell(), None);
        assert!(!rows[0].is_header());
    }

    #[test]
    fn empty_document_has_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("<html><body><p>nothing</p></body></html>").is_empty());
    }

    #[test]
    fn unclosed_cells_and_rows_end_at_next_sibling() {
        let rows = parse_rows("<table><tr><td>Mon<td>RED, BLUE<tr><td>Tue<td>GREEN</table>");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["Mon", "RED, BLUE"]);
        assert_eq!(rows[1].cells, vec!["Tue", "GREEN"]);
    }

    #[test]
    fn commented_and_scripted_rows_are_ignored() {
        let doc = "<table><!-- <tr><td>OLD</td></tr> -->\
            <script>var t = '<tr><td>X</td></tr>';</script>\
            <tr><td>MON</td><td>RED</td></tr></table>";
        let rows = parse_rows(doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].colors_cell(), Some("RED"));
    }

    #[test]
    fn comment_inside_cell_does_not_end_it() {
        let rows = parse_rows("<tr><td>A</td><td>RED<!-- </td> -->, BLUE</td></tr>");
        assert_eq!(rows[0].colors_cell(), Some("RED, BLUE"));
    }
}
