//! Typed jQuery source generation
//!
//! Build jQuery calls, selectors and ajax settings as Rust values and render
//! them to JavaScript source text. Nothing is executed; the crate only
//! assembles text.
//!
//! # Examples
//!
//! ```rust
//! use jqgen::{JQueryAlias, selector};
//! use jqgen_js::WriterSettings;
//!
//! let inv = jqgen::jquery_document()
//!     .on()
//!     .arg("click")
//!     .arg(selector::id("save")?);
//!
//! let settings = WriterSettings::default();
//! assert_eq!(inv.to_js_code(&settings), "$(document).on('click','#save');");
//!
//! let settings = JQueryAlias::JQuery.apply(settings);
//! assert_eq!(inv.to_js_code(&settings), "jQuery(document).on('click','#save');");
//! # Ok::<(), jqgen_js::GenError>(())
//! ```

mod ajax;
mod alias;
mod collab;
mod invocation;
mod jquery;
pub mod selector;
mod selector_list;

pub use ajax::JQueryAjaxBuilder;
pub use alias::{JQUERY, JQUERY_ALIAS_KEY, JQueryAlias, jquery_function};
pub use collab::{CssClassProvider, HasId, HtmlElement, HtmlNode};
pub use invocation::JQueryInvocation;
pub use jquery::{
    JQuery, OnDocumentReady, ajax_with, class_ref, class_ref_multiple, element_name_ref,
    element_name_ref_str, element_name_ref_str_with, element_name_ref_with,
    element_name_with_class_ref, element_name_with_class_ref_str, element_name_with_id_ref,
    element_name_with_id_ref_str, global_eval, id_ref, id_ref_expr, id_ref_multiple,
    id_ref_multiple_expr, id_ref_of,
    jquery, jquery_document, jquery_html, jquery_str, jquery_this, jquery_window, name_attr_ref,
    on_document_ready, on_document_ready_builder, parse_html, parse_html_node, parse_json,
    parse_json_value, parse_xml,
};
pub use selector::Selector;
pub use selector_list::SelectorList;

// Re-export the expression layer so callers need only one import
pub use jqgen_js::{
    GenError, HasJsCode, JsAssocArray, JsBlock, JsExpr, JsFunction, JsStatement, Result,
    WriterSettings,
};
