//! String literal escaping

use crate::settings::QuoteStyle;
use std::borrow::Cow;

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\'' | '\\' | '/' | '\t' | '\n' | '\r' | '\u{000C}')
}

/// Escape `input` for use inside a JavaScript string literal.
///
/// Both quote characters, backslash and slash are masked with a backslash.
/// Tab becomes `\t`, form feed `\f`, and CR, LF and CRLF all become a single
/// `\n`. Input without any such character is returned borrowed.
pub fn escape_js_string(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() * 2);
    let mut prev = '\0';
    for c in input.chars() {
        match c {
            '"' | '\'' | '\\' | '/' => {
                out.push('\\');
                out.push(c);
            }
            '\t' => out.push_str("\\t"),
            '\n' => {
                if prev != '\r' {
                    out.push_str("\\n");
                }
            }
            '\r' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            _ => out.push(c),
        }
        prev = c;
    }
    Cow::Owned(out)
}

/// Render `input` as a complete, quoted string literal
pub fn quote_js_string(input: &str, style: QuoteStyle) -> String {
    let escaped = escape_js_string(input);
    let q = style.as_char();
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push(q);
    out.push_str(&escaped);
    out.push(q);
    out
}
