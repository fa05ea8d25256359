//! Settings object for `$.ajax`

use crate::invocation::JQueryInvocation;
use crate::jquery::JQuery;
use jqgen_js::{JsAssocArray, JsExpr, JsFunction};

/// Builder for the settings passed to `$.ajax({...})`
///
/// Only fields that are set are rendered, always in the same order. Caching
/// is disabled unless `cache` is set explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct JQueryAjaxBuilder {
    pub async_: Option<JsExpr>,
    pub cache: Option<JsExpr>,
    pub data: Option<JsExpr>,
    pub data_type: Option<JsExpr>,
    pub global: Option<JsExpr>,
    pub process_data: Option<JsExpr>,
    pub traditional: Option<JsExpr>,
    pub method: Option<JsExpr>,
    pub url: Option<JsExpr>,
    /// `this` inside the callbacks
    pub context: Option<JsExpr>,
    pub before_send: Option<JsFunction>,
    pub complete: Option<JsFunction>,
    pub error: Option<JsFunction>,
    pub success: Option<JsFunction>,
}

impl Default for JQueryAjaxBuilder {
    fn default() -> Self {
        Self {
            async_: None,
            cache: Some(JsExpr::Bool(false)),
            data: None,
            data_type: None,
            global: None,
            process_data: None,
            traditional: None,
            method: None,
            url: None,
            context: None,
            before_send: None,
            complete: None,
            error: None,
            success: None,
        }
    }
}

macro_rules! expr_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<JsExpr>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

macro_rules! callback_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, callback: JsFunction) -> Self {
                self.$field = Some(callback);
                self
            }
        )*
    };
}

impl JQueryAjaxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    expr_setters!(
        async_,
        cache,
        data,
        data_type,
        global,
        process_data,
        traditional,
        method,
        url,
        context,
    );

    callback_setters!(before_send, complete, error, success);

    /// The settings object literal
    pub fn js_settings(&self) -> JsAssocArray {
        let mut settings = JsAssocArray::new();
        let values = [
            ("async", &self.async_),
            ("cache", &self.cache),
            ("data", &self.data),
            ("dataType", &self.data_type),
            ("global", &self.global),
            ("processData", &self.process_data),
            ("traditional", &self.traditional),
            ("method", &self.method),
            ("url", &self.url),
            ("context", &self.context),
        ];
        for (key, value) in values {
            if let Some(value) = value {
                settings.insert(key, value.clone());
            }
        }
        let callbacks = [
            ("beforeSend", &self.before_send),
            ("complete", &self.complete),
            ("error", &self.error),
            ("success", &self.success),
        ];
        for (key, callback) in callbacks {
            if let Some(callback) = callback {
                settings.insert(key, callback.clone());
            }
        }
        settings
    }

    /// `$.ajax({...})`
    pub fn build(&self) -> JQueryInvocation {
        tracing::debug!(url = self.url.is_some(), "building ajax invocation");
        JQuery::ajax().arg(self.js_settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jqgen_js::{HasJsCode, WriterSettings};

    #[test]
    fn test_default_disables_cache() {
        let builder = JQueryAjaxBuilder::new();
        assert_eq!(
            builder.build().to_js_code(&WriterSettings::default()),
            "$.ajax({'cache':false});"
        );
    }

    #[test]
    fn test_field_order_is_fixed() {
        let success = JsFunction::new()
            .param("data")
            .unwrap()
            .statement(JsExpr::global("render").call().arg(JsExpr::global("data")));
        let builder = JQueryAjaxBuilder::new()
            .success(success)
            .url("/items")
            .method("POST")
            .data_type("json")
            .async_(true);
        assert_eq!(
            builder.js_settings().to_js_code(&WriterSettings::default()),
            "{'async':true,'cache':false,'dataType':'json','method':'POST','url':'\\/items','success':function(data){render(data);}}"
        );
    }

    #[test]
    fn test_unset_cache() {
        let mut builder = JQueryAjaxBuilder::new().url("x");
        builder.cache = None;
        assert_eq!(
            builder.js_settings().to_js_code(&WriterSettings::default()),
            "{'url':'x'}"
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = JQueryAjaxBuilder::new().url("a");
        let copy = original.clone().url("b");
        assert_eq!(original.url, Some(JsExpr::from("a")));
        assert_eq!(copy.url, Some(JsExpr::from("b")));
    }
}
