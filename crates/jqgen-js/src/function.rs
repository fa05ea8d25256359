//! Anonymous functions

use crate::block::{JsBlock, JsStatement};
use crate::code::HasJsCode;
use crate::error::Result;
use crate::formatter::JsFormatter;
use crate::ident::ensure_identifier;

/// `function(a,b){...}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsFunction {
    params: Vec<String>,
    body: JsBlock,
}

impl JsFunction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Function with the given body and no parameters
    pub fn with_body(body: JsBlock) -> Self {
        Self {
            params: Vec::new(),
            body,
        }
    }

    /// Append a parameter; fails unless `name` is a valid identifier
    pub fn param(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        ensure_identifier(&name)?;
        self.params.push(name);
        Ok(self)
    }

    /// Append a statement to the body
    pub fn statement(mut self, stmt: impl Into<JsStatement>) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &JsBlock {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut JsBlock {
        &mut self.body
    }
}

impl HasJsCode for JsFunction {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        f.plain("function(");
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.plain_char(',');
            }
            f.plain(param);
        }
        f.plain("){");
        if !self.body.is_empty() {
            f.nl().indent();
            self.body.generate(f);
            f.nl().outdent();
        }
        f.plain_char('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::JsExpr;
    use crate::settings::WriterSettings;

    #[test]
    fn test_empty_function() {
        assert_eq!(JsFunction::new().to_js_code(&WriterSettings::pretty()), "function(){}");
    }

    #[test]
    fn test_params_and_body() {
        let func = JsFunction::new()
            .param("e")
            .unwrap()
            .param("data")
            .unwrap()
            .statement(JsExpr::global("e").invoke("preventDefault"));
        assert_eq!(
            func.to_js_code(&WriterSettings::default()),
            "function(e,data){e.preventDefault();}"
        );
        assert_eq!(
            func.to_js_code(&WriterSettings::pretty()),
            "function(e,data){\n  e.preventDefault();\n}"
        );
    }

    #[test]
    fn test_invalid_param() {
        assert!(JsFunction::new().param("1x").is_err());
    }
}
