//! A minimal terminal emulator for the sequences menukit emits.
//!
//! Understood: cursor home (`CSI r;c H`), erase display (`CSI 2 J`),
//! erase line (`CSI 2 K`), cursor to previous line (`CSI n F`), CR and LF.
//! SGR styling and cursor show/hide are consumed and ignored, apart from
//! tracking cursor visibility.

#[derive(Debug, Default, Clone)]
pub struct VirtualScreen {
    rows: Vec<Vec<char>>,
    row: usize,
    col: usize,
    cursor_visible: bool,
}

impl VirtualScreen {
    pub fn new() -> Self {
        Self {
            cursor_visible: true,
            ..Self::default()
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut screen = Self::new();
        screen.feed(&String::from_utf8_lossy(bytes));
        screen
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn feed(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\x1b' => {
                    if chars.peek() != Some(&'[') {
                        continue;
                    }
                    chars.next();
                    let mut params = String::new();
                    let mut last = None;
                    for p in chars.by_ref() {
                        if ('@'..='~').contains(&p) {
                            last = Some(p);
                            break;
                        }
                        params.push(p);
                    }
                    if let Some(final_byte) = last {
                        self.csi(&params, final_byte);
                    }
                }
                '\r' => self.col = 0,
                '\n' => self.row += 1,
                c => self.put(c),
            }
        }
    }

    fn csi(&mut self, params: &str, final_byte: char) {
        let number = |default: usize| params.parse::<usize>().unwrap_or(default);
        match final_byte {
            'H' => {
                let mut parts = params.split(';').map(|p| p.parse::<usize>().unwrap_or(1));
                self.row = parts.next().unwrap_or(1).saturating_sub(1);
                self.col = parts.next().unwrap_or(1).saturating_sub(1);
            }
            'J' if number(0) == 2 => self.rows.clear(),
            'K' if number(0) == 2 => {
                if let Some(line) = self.rows.get_mut(self.row) {
                    line.clear();
                }
            }
            'F' => {
                self.row = self.row.saturating_sub(number(1));
                self.col = 0;
            }
            'l' if params == "?25" => self.cursor_visible = false,
            'h' if params == "?25" => self.cursor_visible = true,
            _ => {}
        }
    }

    fn put(&mut self, c: char) {
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
        let line = &mut self.rows[self.row];
        while line.len() < self.col {
            line.push(' ');
        }
        if self.col < line.len() {
            line[self.col] = c;
        } else {
            line.push(c);
        }
        self.col += 1;
    }

    /// Screen content, trailing blanks trimmed from every line and from the end.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}
