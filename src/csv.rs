// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim { Csv, Tsv }

impl Delim {
    pub fn char(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    pub fn ext(self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }

    /// Tabs in the header line win; otherwise comma.
    pub fn sniff(text: &str) -> Delim {
        let first = text.lines().next().unwrap_or("");
        if first.contains('\t') { Delim::Tsv } else { Delim::Csv }
    }
}

/* ---------------- Parsing ---------------- */

/// One parsed row plus the 1-based line it started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Quote-aware CSV/TSV parser, CRLF tolerant. Blank lines are dropped but
/// still counted, so `Row::line` matches what an editor shows.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Row> {
    let sep = delim.char();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut cells = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut row_start = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => cells.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                cells.push(take(&mut field));
                if !(cells.len() == 1 && cells[0].trim().is_empty()) {
                    rows.push(Row { line: row_start, cells: take(&mut cells) });
                } else {
                    cells.clear();
                }
                line += 1;
                row_start = line;
            }
            '\n' => { line += 1; field.push(ch); }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline, even if quotes were unterminated.
    cells.push(field);
    if !(cells.len() == 1 && cells[0].trim().is_empty()) {
        rows.push(Row { line: row_start, cells });
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render a full table to a string (Copy/Export).
pub fn to_export_string<S: AsRef<str>>(
    headers: &[S],
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, headers, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[Row]) -> Vec<Vec<&str>> {
        rows.iter().map(|r| r.cells.iter().map(|c| c.as_str()).collect()).collect()
    }

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "a,b\r\n\"x, y\",\"say \"\"hi\"\"\"\r\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["x, y", "say \"hi\""]]);
    }

    #[test]
    fn blank_lines_keep_line_numbers() {
        let rows = parse_rows("h\n\n1\n  \n2", Delim::Csv);
        let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn sniff_prefers_tabs_in_header() {
        assert_eq!(Delim::sniff("Region\tCategory\n11\tMJR"), Delim::Tsv);
        assert_eq!(Delim::sniff("Region,Category"), Delim::Csv);
    }

    #[test]
    fn export_string_quotes_when_needed() {
        let rows = vec![vec![s!("11"), s!("A,B")]];
        let out = to_export_string(&["R", "C"], &rows, true, Delim::Csv);
        assert_eq!(out, "R,C\n11,\"A,B\"\n");
        let out = to_export_string(&["R", "C"], &rows, false, Delim::Tsv);
        assert_eq!(out, "11\tA,B\n");
    }
}
