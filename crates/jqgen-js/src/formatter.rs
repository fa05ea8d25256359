//! Source text accumulator that tracks indentation

use crate::settings::WriterSettings;

/// Writes generated source into a `String`, honouring [`WriterSettings`].
///
/// Line breaks and indentation requested through [`nl`](Self::nl),
/// [`indent`](Self::indent) and [`outdent`](Self::outdent) are only emitted
/// when `indent_and_align` is enabled.
pub struct JsFormatter<'s> {
    out: String,
    settings: &'s WriterSettings,
    indent_unit: String,
    indent_level: usize,
    at_line_start: bool,
}

impl<'s> JsFormatter<'s> {
    /// Create a formatter writing with the given settings
    pub fn new(settings: &'s WriterSettings) -> Self {
        Self {
            out: String::new(),
            settings,
            indent_unit: settings.indent.unit(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Settings in effect
    pub fn settings(&self) -> &'s WriterSettings {
        self.settings
    }

    fn indent_if_needed(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.out.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
    }

    /// Append text as is
    pub fn plain(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.indent_if_needed();
            self.out.push_str(text);
        }
        self
    }

    /// Append a single character
    pub fn plain_char(&mut self, c: char) -> &mut Self {
        self.indent_if_needed();
        self.out.push(c);
        self
    }

    /// Line break, only in aligned mode
    pub fn nl(&mut self) -> &mut Self {
        if self.settings.indent_and_align {
            self.out.push_str(&self.settings.newline);
            self.at_line_start = true;
        }
        self
    }

    /// Increase indentation, only in aligned mode
    pub fn indent(&mut self) -> &mut Self {
        if self.settings.indent_and_align {
            self.indent_level += 1;
        }
        self
    }

    /// Decrease indentation, only in aligned mode
    pub fn outdent(&mut self) -> &mut Self {
        if self.settings.indent_and_align {
            debug_assert!(self.indent_level > 0, "nothing left to outdent");
            self.indent_level = self.indent_level.saturating_sub(1);
        }
        self
    }

    /// Consume the formatter and return the generated text
    pub fn finish(self) -> String {
        self.out
    }
}
