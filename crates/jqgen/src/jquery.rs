//! Entry points: `$(...)` factories and the `$.xxx` utility functions

use crate::alias::jquery_function;
use crate::collab::{CssClassProvider, HasId, HtmlElement, HtmlNode};
use crate::invocation::JQueryInvocation;
use crate::selector::{self, Selector};
use jqgen_js::{GenError, JsAssocArray, JsBlock, JsExpr, JsFunction, Result};

/// `$(expr)`
pub fn jquery(expr: impl Into<JsExpr>) -> JQueryInvocation {
    JQueryInvocation::call(jquery_function()).arg(expr)
}

/// `$('<html>')`
pub fn jquery_str(html: &str) -> JQueryInvocation {
    jquery(html)
}

/// `$('<html>')` for a rendered HTML node
pub fn jquery_html(node: &(impl HtmlNode + ?Sized)) -> JQueryInvocation {
    jquery(node.to_html())
}

/// `$(document)`
pub fn jquery_document() -> JQueryInvocation {
    jquery(JsExpr::DOCUMENT)
}

/// `$(window)`
pub fn jquery_window() -> JQueryInvocation {
    jquery(JsExpr::WINDOW)
}

/// `$(this)`
pub fn jquery_this() -> JQueryInvocation {
    jquery(JsExpr::This)
}

/// `$('#id')`
pub fn id_ref(id: &str) -> Result<JQueryInvocation> {
    Ok(selector::id(id)?.invoke())
}

/// `$('#'+expr)`, without escaping the value of `expr`
pub fn id_ref_expr(expr: impl Into<JsExpr>) -> JQueryInvocation {
    selector::id_expr(expr).invoke()
}

/// `$('#id')` for the ID of `provider`
pub fn id_ref_of(provider: &(impl HasId + ?Sized)) -> Result<JQueryInvocation> {
    Ok(selector::id_of(provider)?.invoke())
}

/// `$('#a,#b')`
pub fn id_ref_multiple<I, S>(ids: I) -> Result<JQueryInvocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selectors = ids
        .into_iter()
        .map(|id| selector::id(id.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    if selectors.is_empty() {
        return Err(GenError::empty_argument("IDs"));
    }
    Ok(selector::multiple(selectors)?.invoke())
}

/// `$('#'+a+',#'+b)` for IDs computed at runtime, without escaping
pub fn id_ref_multiple_expr<I, E>(ids: I) -> Result<JQueryInvocation>
where
    I: IntoIterator<Item = E>,
    E: Into<JsExpr>,
{
    let selectors: Vec<Selector> = ids.into_iter().map(selector::id_expr).collect();
    if selectors.is_empty() {
        return Err(GenError::empty_argument("IDs"));
    }
    Ok(selector::multiple(selectors)?.invoke())
}

/// `$('.class')`
pub fn class_ref(css_class: &(impl CssClassProvider + ?Sized)) -> Result<JQueryInvocation> {
    Ok(selector::clazz(css_class)?.invoke())
}

/// `$('.a,.b')`
pub fn class_ref_multiple<I, C>(css_classes: I) -> Result<JQueryInvocation>
where
    I: IntoIterator<Item = C>,
    C: CssClassProvider,
{
    let selectors = css_classes
        .into_iter()
        .map(|c| selector::clazz(&c))
        .collect::<Result<Vec<_>>>()?;
    if selectors.is_empty() {
        return Err(GenError::empty_argument("CSSClasses"));
    }
    Ok(selector::multiple(selectors)?.invoke())
}

/// `$('div')`
pub fn element_name_ref(element: HtmlElement) -> JQueryInvocation {
    selector::element_of(element).invoke()
}

/// `$('div')` by tag name
pub fn element_name_ref_str(name: &str) -> Result<JQueryInvocation> {
    Ok(selector::element(name)?.invoke())
}

/// `$('div<selector>')`
pub fn element_name_ref_with(element: HtmlElement, rhs: Selector) -> JQueryInvocation {
    selector::element_of(element).chain(rhs).invoke()
}

/// `$('div#id')`
pub fn element_name_with_id_ref(element: HtmlElement, id: &str) -> Result<JQueryInvocation> {
    Ok(element_name_ref_with(element, selector::id(id)?))
}

/// `$('div.class')`
pub fn element_name_with_class_ref(
    element: HtmlElement,
    css_class: &(impl CssClassProvider + ?Sized),
) -> Result<JQueryInvocation> {
    Ok(element_name_ref_with(element, selector::clazz(css_class)?))
}

/// `$('name<selector>')` by tag name
pub fn element_name_ref_str_with(name: &str, rhs: Selector) -> Result<JQueryInvocation> {
    Ok(selector::element(name)?.chain(rhs).invoke())
}

/// `$('name#id')` by tag name
pub fn element_name_with_id_ref_str(name: &str, id: &str) -> Result<JQueryInvocation> {
    element_name_ref_str_with(name, selector::id(id)?)
}

/// `$('name.class')` by tag name
pub fn element_name_with_class_ref_str(
    name: &str,
    css_class: &(impl CssClassProvider + ?Sized),
) -> Result<JQueryInvocation> {
    element_name_ref_str_with(name, selector::clazz(css_class)?)
}

/// `$('[name=\'value\']')`
pub fn name_attr_ref(value: &str) -> Result<JQueryInvocation> {
    Ok(selector::name_attr(value)?.invoke())
}

/// `$(document).ready(function(){<body>})`
pub fn on_document_ready(body: JsBlock) -> JQueryInvocation {
    tracing::debug!(statements = body.len(), "building document ready handler");
    jquery_document().ready().arg(JsFunction::with_body(body))
}

/// A document ready handler whose body is filled in before building
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnDocumentReady {
    function: JsFunction,
}

impl OnDocumentReady {
    pub fn function(&self) -> &JsFunction {
        &self.function
    }

    /// The anonymous function passed to `.ready()`
    pub fn function_mut(&mut self) -> &mut JsFunction {
        &mut self.function
    }

    pub fn body_mut(&mut self) -> &mut JsBlock {
        self.function.body_mut()
    }

    /// `$(document).ready(function(){...})`
    pub fn into_invocation(self) -> JQueryInvocation {
        jquery_document().ready().arg(self.function)
    }
}

/// Start a document ready handler with an empty body
pub fn on_document_ready_builder() -> OnDocumentReady {
    OnDocumentReady::default()
}

/// `$.ajax(url,settings)`; a missing URL is passed as `null`
pub fn ajax_with(url: impl Into<JsExpr>, settings: Option<JsAssocArray>) -> JQueryInvocation {
    let inv = JQuery::ajax().arg(url);
    match settings {
        Some(settings) => inv.arg(settings),
        None => inv,
    }
}

/// `$.globalEval(code)`
pub fn global_eval(code: impl Into<JsExpr>) -> JQueryInvocation {
    JQuery::global_eval().arg(code)
}

/// `$.parseHTML(html)`
pub fn parse_html(html: impl Into<JsExpr>) -> JQueryInvocation {
    JQuery::parse_html().arg(html)
}

/// `$.parseHTML('<html>')` for a rendered HTML node
pub fn parse_html_node(node: &(impl HtmlNode + ?Sized)) -> JQueryInvocation {
    parse_html(node.to_html())
}

/// `$.parseJSON(json)`
pub fn parse_json(json: impl Into<JsExpr>) -> JQueryInvocation {
    JQuery::parse_json().arg(json)
}

/// `$.parseJSON('<json>')` with `value` serialized to a string literal
pub fn parse_json_value(value: &serde_json::Value) -> JQueryInvocation {
    parse_json(value.to_string())
}

/// `$.parseXML(xml)`
pub fn parse_xml(xml: impl Into<JsExpr>) -> JQueryInvocation {
    JQuery::parse_xml().arg(xml)
}

/// Utility functions on the jQuery function object (`$.each`, `$.extend`, ...)
pub struct JQuery;

macro_rules! jquery_statics {
    ($($func:ident => $js:literal),* $(,)?) => {
        impl JQuery {
            $(
                #[doc = concat!("`$.", $js, "()`")]
                pub fn $func() -> JQueryInvocation {
                    JQueryInvocation::method(jquery_function(), $js)
                }
            )*
        }
    };
}

jquery_statics! {
    callbacks => "Callbacks",
    deferred => "Deferred",
    ajax => "ajax",
    ajax_prefilter => "ajaxPrefilter",
    ajax_setup => "ajaxSetup",
    ajax_transport => "ajaxTransport",
    contains => "contains",
    data => "data",
    dequeue => "dequeue",
    each => "each",
    error => "error",
    extend => "extend",
    get => "get",
    get_json => "getJSON",
    get_script => "getScript",
    global_eval => "globalEval",
    grep => "grep",
    has_data => "hasData",
    hold_ready => "holdReady",
    in_array => "inArray",
    is_array => "isArray",
    is_empty_object => "isEmptyObject",
    is_function => "isFunction",
    is_numeric => "isNumeric",
    is_plain_object => "isPlainObject",
    is_window => "isWindow",
    is_xml_doc => "isXMLDoc",
    make_array => "makeArray",
    map => "map",
    merge => "merge",
    no_conflict => "noConflict",
    noop => "noop",
    now => "now",
    param => "param",
    parse_html => "parseHTML",
    parse_json => "parseJSON",
    parse_xml => "parseXML",
    post => "post",
    proxy => "proxy",
    queue => "queue",
    remove_data => "removeData",
    trim => "trim",
    type_ => "type",
    unique => "unique",
    when => "when",
}

impl JQuery {
    /// The jQuery function itself: `$`
    pub fn function() -> JsExpr {
        jquery_function()
    }

    /// `$.fn`
    pub fn fn_() -> JsExpr {
        jquery_function().field("fn")
    }

    /// `$.fn.extend()`
    pub fn fn_extend() -> JQueryInvocation {
        JQueryInvocation::method(Self::fn_(), "extend")
    }
}
