//! Box-drawn tables.

use console::measure_text_width;

/// A table with a header row, sized to its widest cells.
///
/// Widths are measured on display width, so styled cells line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            widths: headers.iter().map(|h| measure_text_width(h)).collect(),
        }
    }

    /// Add a row; cells beyond the header count are dropped.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            self.border('┌', '┬', '┐'),
            self.line(&self.headers),
            self.border('├', '┼', '┤'),
        ];
        lines.extend(self.rows.iter().map(|row| self.line(row)));
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn line(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - measure_text_width(cell);
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let mut table = Table::new(&["Active", "Quintuplet"]);
        table.add_row(["*", "cpython-3.11-linux-x86_64-0123abcd"]);
        table.add_row(["", "pypy-3.9-linux-x86_64-89abcdef"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Quintuplet"));
        assert!(lines[3].contains("cpython-3.11"));
        assert!(lines[5].ends_with('┘'));
    }

    #[test]
    fn rows_line_up() {
        let mut table = Table::new(&["A"]);
        table.add_row(["longer_value"]);
        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn missing_cells_are_blank() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(["only"]);
        assert!(table.render().contains("│ only │"));
    }

    #[test]
    fn empty_table() {
        let table = Table::new(&["Quintuplet"]);
        assert_eq!(table.render().lines().count(), 4);
    }
}
