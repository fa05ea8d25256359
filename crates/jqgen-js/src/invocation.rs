//! Function and method calls

use crate::code::{HasJsCode, generate_list};
use crate::error::Result;
use crate::expr::JsExpr;
use crate::formatter::JsFormatter;
use crate::ident::ensure_property_name;
use crate::settings::WriterSettings;
use std::borrow::Cow;

/// What is being called
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    /// A function value: `f(...)`, `$(...)`
    Function(JsExpr),
    /// A method on an object: `obj.name(...)`
    Method {
        object: JsExpr,
        name: Cow<'static, str>,
    },
}

/// A call expression with arguments appended left to right
#[derive(Debug, Clone, PartialEq)]
pub struct JsInvocation {
    callee: Callee,
    args: Vec<JsExpr>,
}

impl JsInvocation {
    /// Call a function value
    pub fn function(function: impl Into<JsExpr>) -> Self {
        Self {
            callee: Callee::Function(function.into()),
            args: Vec::new(),
        }
    }

    /// Call `name` on `object`
    pub fn method(object: impl Into<JsExpr>, name: &'static str) -> Self {
        Self {
            callee: Callee::Method {
                object: object.into(),
                name: Cow::Borrowed(name),
            },
            args: Vec::new(),
        }
    }

    /// Call `name` on `object`, validating the method name
    pub fn try_method(object: impl Into<JsExpr>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        ensure_property_name(&name)?;
        Ok(Self {
            callee: Callee::Method {
                object: object.into(),
                name: Cow::Owned(name),
            },
            args: Vec::new(),
        })
    }

    /// Append one argument
    pub fn arg(mut self, value: impl Into<JsExpr>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append one argument in place
    pub fn push_arg(&mut self, value: impl Into<JsExpr>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    /// Append several arguments
    pub fn args<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<JsExpr>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Arguments appended so far
    pub fn arguments(&self) -> &[JsExpr] {
        &self.args
    }

    /// Mutable access to the last argument, if any
    pub fn last_arg_mut(&mut self) -> Option<&mut JsExpr> {
        self.args.last_mut()
    }

    /// `self.name(...)`, chaining a call on the result of this one
    pub fn invoke(self, name: &'static str) -> JsInvocation {
        JsInvocation::method(self, name)
    }

    /// `self.name`
    pub fn field(self, name: &'static str) -> JsExpr {
        JsExpr::from(self).field(name)
    }

    pub fn callee(&self) -> &Callee {
        &self.callee
    }

    /// Render as an expression statement: `a.b(c,d);`
    pub fn to_statement_code(&self, settings: &WriterSettings) -> String {
        let mut f = JsFormatter::new(settings);
        generate_statement(&mut f, self, self.needs_parens_as_statement());
        f.finish()
    }

    pub(crate) fn needs_parens_as_statement(&self) -> bool {
        match &self.callee {
            Callee::Function(function) => {
                !Self::callee_needs_parens(function) && function.needs_parens_as_statement()
            }
            Callee::Method { object, .. } => {
                !object.needs_parens_as_object() && object.needs_parens_as_statement()
            }
        }
    }

    fn callee_needs_parens(function: &JsExpr) -> bool {
        matches!(function, JsExpr::Function(_) | JsExpr::Binary { .. })
    }
}

/// Write `node;`, wrapped as `(node);` when `wrap` is set
pub(crate) fn generate_statement(f: &mut JsFormatter<'_>, node: &impl HasJsCode, wrap: bool) {
    if wrap {
        f.plain_char('(');
        node.generate(f);
        f.plain_char(')');
    } else {
        node.generate(f);
    }
    f.plain_char(';');
}

impl HasJsCode for JsInvocation {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        match &self.callee {
            Callee::Function(function) => {
                if Self::callee_needs_parens(function) {
                    f.plain_char('(');
                    function.generate(f);
                    f.plain_char(')');
                } else {
                    function.generate(f);
                }
            }
            Callee::Method { object, name } => {
                object.generate_as_object(f);
                f.plain_char('.').plain(name);
            }
        }
        f.plain_char('(');
        generate_list(f, &self.args);
        f.plain_char(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assoc::JsAssocArray;
    use crate::function::JsFunction;

    #[test]
    fn test_function_call() {
        let inv = JsInvocation::function(JsExpr::global("alert")).arg("hi");
        assert_eq!(inv.to_js_code(&WriterSettings::default()), "alert('hi')");
        assert_eq!(
            inv.to_statement_code(&WriterSettings::default()),
            "alert('hi');"
        );
    }

    #[test]
    fn test_method_chain() {
        let inner = JsInvocation::function(JsExpr::global("f")).arg(JsExpr::DOCUMENT);
        let outer = inner.invoke("add").args([1, 2]);
        assert_eq!(
            outer.to_js_code(&WriterSettings::default()),
            "f(document).add(1,2)"
        );
        assert_eq!(outer.arguments().len(), 2);
    }

    #[test]
    fn test_try_method_validates() {
        assert!(JsInvocation::try_method(JsExpr::WINDOW, "scrollTo").is_ok());
        assert!(JsInvocation::try_method(JsExpr::WINDOW, "scroll to").is_err());
    }

    #[test]
    fn test_statement_on_object_literal() {
        let inv = JsInvocation::method(JsAssocArray::new().add("a", 1), "hasOwnProperty").arg("a");
        assert_eq!(
            inv.to_statement_code(&WriterSettings::default()),
            "({'a':1}.hasOwnProperty('a'));"
        );
        let iife = JsInvocation::function(JsFunction::new());
        assert_eq!(
            iife.to_statement_code(&WriterSettings::default()),
            "(function(){})();"
        );
    }

    #[test]
    fn test_push_arg() {
        let mut inv = JsInvocation::method(JsExpr::This, "x");
        inv.push_arg(true).push_arg(JsExpr::Null);
        assert_eq!(inv.to_js_code(&WriterSettings::default()), "this.x(true,null)");
    }
}
