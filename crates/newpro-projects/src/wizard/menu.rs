//! "Choose one of N" menu shared by the template step and every flag step

/// Labels of a yes/no menu; index 0 means `true`
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// Prompt, options and a cursor that never leaves the option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    prompt: String,
    options: Vec<String>,
    cursor: usize,
}

impl Menu {
    pub fn new(prompt: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            cursor: 0,
        }
    }

    /// Two-option menu with "Yes" first
    pub fn yes_no(prompt: impl Into<String>) -> Self {
        Self::new(prompt, YES_NO.iter().map(|s| s.to_string()).collect())
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move up one entry; stops at the first
    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move down one entry; stops at the last
    pub fn down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    /// Option under the cursor, `None` for an empty menu
    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.cursor).map(String::as_str)
    }
}
