//! Template, cursor and expansion result values

use serde::Serialize;

/// A trigger key paired with its multi-line body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Short trigger word (case-sensitive)
    pub key: String,
    /// Body text; tabs are indentation units, `|` marks the caret rest position
    pub body: String,
}

impl Template {
    pub fn new(key: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
        }
    }

    /// Body split on newline
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }

    /// Single-line rendering for pickers: tabs as `indent_unit`, line breaks as `\n`
    pub fn preview(&self, indent_unit: &str) -> String {
        self.lines()
            .map(|line| line.replace('\t', indent_unit))
            .collect::<Vec<_>>()
            .join("\\n")
    }
}

/// Zero-based caret position relative to the start of an inserted block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Rendered lines plus where the caret should land afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionResult {
    pub lines: Vec<String>,
    pub cursor: Cursor,
}

impl ExpansionResult {
    /// Lines joined with newline, ready for insertion
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_split_on_newline() {
        let t = Template::new("be", "BEGIN\n\n\t|\n\nEND");
        let lines: Vec<_> = t.lines().collect();
        assert_eq!(lines, vec!["BEGIN", "", "\t|", "", "END"]);
    }

    #[test]
    fn test_single_line_body_has_one_line() {
        let t = Template::new("s", "SELECT |");
        assert_eq!(t.lines().count(), 1);
    }

    #[test]
    fn test_preview_keeps_marker_and_renders_tabs() {
        let t = Template::new("be", "BEGIN\n\t|\nEND");
        assert_eq!(t.preview("    "), "BEGIN\\n    |\\nEND");
    }

    #[test]
    fn test_result_text_joins_lines() {
        let result = ExpansionResult {
            lines: vec!["SELECT *".to_string(), "  FROM ".to_string()],
            cursor: Cursor::new(1, 5),
        };
        assert_eq!(result.text(), "SELECT *\n  FROM ");
    }
}
