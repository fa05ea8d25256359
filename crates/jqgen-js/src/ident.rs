//! JavaScript identifier checks

use crate::error::{GenError, Result};
use oxc_syntax::identifier::is_identifier_name;

const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield", "let", "static", "implements", "interface",
    "package", "private", "protected", "public", "await",
];

/// Whether `name` may be used as a variable or parameter name
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && is_identifier_name(name) && !RESERVED.contains(&name)
}

/// Whether `name` may follow a `.` in a member expression
///
/// Reserved words are allowed here (`promise.catch`, `$.fn.extend`).
pub fn is_valid_property_name(name: &str) -> bool {
    !name.is_empty() && is_identifier_name(name)
}

fn suggest(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) || RESERVED.contains(&out.as_str()) {
        out.insert(0, '_');
    }
    out
}

/// Fail with [`GenError::InvalidIdentifier`] unless `name` is a usable identifier
pub fn ensure_identifier(name: &str) -> Result<&str> {
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(GenError::invalid_identifier_with_suggestion(
            name,
            format!("try '{}'", suggest(name)),
        ))
    }
}

/// Fail with [`GenError::InvalidIdentifier`] unless `name` is a usable property name
pub fn ensure_property_name(name: &str) -> Result<&str> {
    if is_valid_property_name(name) {
        Ok(name)
    } else {
        Err(GenError::invalid_identifier_with_suggestion(
            name,
            format!("try '{}'", suggest(name)),
        ))
    }
}
