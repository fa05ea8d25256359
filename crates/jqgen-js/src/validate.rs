//! Syntax validation of generated source

#[cfg(feature = "validate")]
mod validate_impl {
    use crate::error::{GenError, Result};
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::{GetSpan, SourceType};

    fn join_messages<E: std::fmt::Debug>(errors: &[E]) -> String {
        errors
            .iter()
            .map(|e| format!("{:?}", e))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse `source` as a script and fail on any syntax error
    pub fn validate_script(source: &str) -> Result<()> {
        let allocator = Allocator::default();
        let result = Parser::new(&allocator, source, SourceType::mjs()).parse();

        if result.panicked || !result.errors.is_empty() {
            tracing::debug!(errors = result.errors.len(), "generated script failed to parse");
            return Err(GenError::codegen_failed_with_reason(
                "Parse errors",
                join_messages(&result.errors),
            ));
        }
        Ok(())
    }

    /// Parse `source` as a single expression and fail on any syntax error
    ///
    /// Anything after the expression other than whitespace is an error.
    pub fn validate_expression(source: &str) -> Result<()> {
        let allocator = Allocator::default();
        let expr = Parser::new(&allocator, source, SourceType::mjs())
            .parse_expression()
            .map_err(|errors| {
                tracing::debug!(errors = errors.len(), "generated expression failed to parse");
                GenError::codegen_failed_with_reason("Parse errors", join_messages(&errors))
            })?;

        let end = expr.span().end as usize;
        let rest = source.get(end..).unwrap_or_default().trim();
        if !rest.is_empty() {
            tracing::debug!(offset = end, "generated expression has trailing input");
            return Err(GenError::codegen_failed_with_reason(
                "Parse errors",
                format!("unexpected input after expression: {}", rest),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "validate")]
pub use validate_impl::*;
