//! Name under which generated code refers to the jQuery function

use jqgen_js::{Alias, JsExpr, WriterSettings};

/// Key of the jQuery alias in [`WriterSettings::aliases`]
pub const JQUERY_ALIAS_KEY: &str = "jquery";

/// The jQuery function symbol, rendered as `$` unless overridden
pub const JQUERY: Alias = Alias::new(JQUERY_ALIAS_KEY, "$");

/// `$` or `jQuery`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JQueryAlias {
    #[default]
    Dollar,
    JQuery,
}

impl JQueryAlias {
    pub fn from_use_dollar(use_dollar: bool) -> Self {
        if use_dollar {
            JQueryAlias::Dollar
        } else {
            JQueryAlias::JQuery
        }
    }

    /// Identifier emitted for the jQuery function
    pub fn name(self) -> &'static str {
        match self {
            JQueryAlias::Dollar => "$",
            JQueryAlias::JQuery => "jQuery",
        }
    }

    /// Register this alias in `settings`
    pub fn apply(self, settings: WriterSettings) -> WriterSettings {
        settings.with_alias(JQUERY_ALIAS_KEY, self.name())
    }

    /// Alias currently selected by `settings`
    pub fn of(settings: &WriterSettings) -> Self {
        match settings.resolve_alias(JQUERY_ALIAS_KEY, "$") {
            "jQuery" => JQueryAlias::JQuery,
            _ => JQueryAlias::Dollar,
        }
    }
}

/// The jQuery function as an expression
pub fn jquery_function() -> JsExpr {
    JsExpr::alias(JQUERY)
}
