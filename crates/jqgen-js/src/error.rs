//! Error types for JavaScript source generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while building or rendering JavaScript source
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A required argument was empty
    #[error("Empty argument: '{name}' must not be empty")]
    #[diagnostic(code(jqgen::empty_argument))]
    EmptyArgument { name: String },

    /// An operation was attempted on a value in a state that cannot produce output
    #[error("Invalid state: {context}")]
    #[diagnostic(code(jqgen::invalid_state))]
    InvalidState { context: String },

    /// Invalid identifier name
    #[error("Invalid identifier: '{identifier}'{}", suggestion.as_ref().map(|s| format!(" - {}", s)).unwrap_or_default())]
    #[diagnostic(code(jqgen::invalid_identifier))]
    InvalidIdentifier {
        identifier: String,
        suggestion: Option<String>,
    },

    /// Code generation failed
    #[error("Code generation failed: {context}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(jqgen::codegen_failed))]
    CodegenFailed {
        context: String,
        reason: Option<String>,
    },
}

impl GenError {
    /// Create an EmptyArgument error
    pub fn empty_argument(name: impl Into<String>) -> Self {
        Self::EmptyArgument { name: name.into() }
    }

    /// Create an InvalidState error
    pub fn invalid_state(context: impl Into<String>) -> Self {
        Self::InvalidState {
            context: context.into(),
        }
    }

    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: None,
        }
    }

    /// Create an InvalidIdentifier error with a suggested replacement
    pub fn invalid_identifier_with_suggestion(
        identifier: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a CodegenFailed error
    pub fn codegen_failed(context: impl Into<String>) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: None,
        }
    }

    /// Create a CodegenFailed error with reason
    pub fn codegen_failed_with_reason(
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Fail with [`GenError::EmptyArgument`] when `value` is empty
pub fn ensure_not_empty<'s>(value: &'s str, name: &str) -> Result<&'s str> {
    if value.is_empty() {
        return Err(GenError::empty_argument(name));
    }
    Ok(value)
}
