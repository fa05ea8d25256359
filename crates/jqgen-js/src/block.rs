//! Statement blocks

use crate::code::HasJsCode;
use crate::error::{GenError, Result};
use crate::expr::JsExpr;
use crate::formatter::JsFormatter;
use crate::ident::ensure_identifier;
use crate::invocation::{JsInvocation, generate_statement};
use crate::settings::WriterSettings;
use std::borrow::Cow;
use std::io::Write;

/// A single statement
#[derive(Debug, Clone, PartialEq)]
pub enum JsStatement {
    /// `expr;`
    Expr(JsExpr),
    /// `var name=init;`
    Var { name: String, init: Option<JsExpr> },
    /// `return expr;`
    Return(Option<JsExpr>),
    /// Verbatim code, emitted as is
    Raw(Cow<'static, str>),
}

impl JsStatement {
    /// `var name=init;`, validating the variable name
    pub fn var(name: impl Into<String>, init: Option<JsExpr>) -> Result<Self> {
        let name = name.into();
        ensure_identifier(&name)?;
        Ok(JsStatement::Var { name, init })
    }
}

impl From<JsExpr> for JsStatement {
    fn from(value: JsExpr) -> Self {
        JsStatement::Expr(value)
    }
}

impl From<JsInvocation> for JsStatement {
    fn from(value: JsInvocation) -> Self {
        JsStatement::Expr(value.into())
    }
}

impl HasJsCode for JsStatement {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        match self {
            JsStatement::Expr(expr) => {
                generate_statement(f, expr, expr.needs_parens_as_statement());
            }
            JsStatement::Var { name, init } => {
                f.plain("var ").plain(name);
                if let Some(init) = init {
                    f.plain_char('=');
                    init.generate(f);
                }
                f.plain_char(';');
            }
            JsStatement::Return(value) => {
                f.plain("return");
                if let Some(value) = value {
                    f.plain_char(' ');
                    value.generate(f);
                }
                f.plain_char(';');
            }
            JsStatement::Raw(code) => {
                f.plain(code);
            }
        }
    }
}

/// Ordered list of statements
///
/// Statements follow each other directly in compact mode and are placed on
/// separate lines when `indent_and_align` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsBlock {
    statements: Vec<JsStatement>,
}

impl JsBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement to the block
    pub fn push(&mut self, stmt: impl Into<JsStatement>) -> &mut Self {
        self.statements.push(stmt.into());
        self
    }

    /// Add multiple statements to the block
    pub fn extend<I, S>(&mut self, stmts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<JsStatement>,
    {
        self.statements.extend(stmts.into_iter().map(Into::into));
        self
    }

    /// Add `var name=init;`
    pub fn var(&mut self, name: impl Into<String>, init: impl Into<JsExpr>) -> Result<&mut Self> {
        let stmt = JsStatement::var(name, Some(init.into()))?;
        self.statements.push(stmt);
        Ok(self)
    }

    /// Add `return value;`
    pub fn return_value(&mut self, value: impl Into<JsExpr>) -> &mut Self {
        self.statements.push(JsStatement::Return(Some(value.into())));
        self
    }

    /// Add verbatim code
    pub fn raw(&mut self, code: impl Into<Cow<'static, str>>) -> &mut Self {
        self.statements.push(JsStatement::Raw(code.into()));
        self
    }

    pub fn statements(&self) -> &[JsStatement] {
        &self.statements
    }

    /// Get the current number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the block is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Write the rendered block to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W, settings: &WriterSettings) -> Result<()> {
        let code = self.to_js_code(settings);
        writer
            .write_all(code.as_bytes())
            .map_err(|e| GenError::codegen_failed_with_reason("Write error", e.to_string()))
    }
}

impl<S: Into<JsStatement>> FromIterator<S> for JsBlock {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl HasJsCode for JsBlock {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.nl();
            }
            stmt.generate(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements() {
        let mut block = JsBlock::new();
        block
            .var("x", 1)
            .unwrap()
            .push(JsExpr::global("x").invoke("toString"))
            .return_value(JsExpr::global("x"));
        assert_eq!(block.len(), 3);
        assert_eq!(
            block.to_js_code(&WriterSettings::default()),
            "var x=1;x.toString();return x;"
        );
        assert_eq!(
            block.to_js_code(&WriterSettings::pretty()),
            "var x=1;\nx.toString();\nreturn x;"
        );
    }

    #[test]
    fn test_leading_object_or_function_is_wrapped() {
        let obj = JsExpr::from(crate::JsAssocArray::new().add("a", 1)).field("a");
        let stmt = JsStatement::from(obj);
        assert_eq!(stmt.to_js_code(&WriterSettings::default()), "({'a':1}.a);");

        let fallback = JsExpr::from(crate::JsAssocArray::new()).binary(crate::BinaryOp::Or, JsExpr::Null);
        assert_eq!(
            JsStatement::from(fallback).to_js_code(&WriterSettings::default()),
            "({}||null);"
        );

        let func = JsExpr::from(crate::JsFunction::new()).binary(crate::BinaryOp::Or, JsExpr::Null);
        assert_eq!(
            JsStatement::from(func).to_js_code(&WriterSettings::default()),
            "(function(){})||null;"
        );
    }

    #[test]
    fn test_var_rejects_keyword() {
        assert!(JsStatement::var("new", None).is_err());
    }

    #[test]
    fn test_write_to() {
        let block: JsBlock = [JsStatement::Return(None)].into_iter().collect();
        let mut buf = Vec::new();
        block.write_to(&mut buf, &WriterSettings::default()).unwrap();
        assert_eq!(buf, b"return;");
    }
}
