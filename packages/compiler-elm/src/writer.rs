const INDENT: &str = "    ";

/// Line-oriented buffer for generated Elm source
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    indent_level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.indent_level {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write an elm-format style list: `[ a`, `, b`, `]`.
    /// Items may span several lines; continuation lines are indented past
    /// the list separator.
    pub fn add_list<S: AsRef<str>>(&mut self, items: &[S]) {
        self.add_delimited('[', ']', items);
    }

    /// Same layout as `add_list` with other delimiters, e.g. `( a`, `, b`, `)`
    /// for an exposing list.
    pub fn add_delimited<S: AsRef<str>>(&mut self, open: char, close: char, items: &[S]) {
        if items.is_empty() {
            self.add_line(&format!("{}{}", open, close));
            return;
        }

        for (i, item) in items.iter().enumerate() {
            let separator = if i == 0 { format!("{} ", open) } else { ", ".to_string() };
            let mut lines = item.as_ref().lines();
            if let Some(first) = lines.next() {
                self.add_line(&format!("{}{}", separator, first));
            }
            for line in lines {
                self.add_line(&format!("  {}", line));
            }
        }
        self.add_line(&close.to_string());
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
