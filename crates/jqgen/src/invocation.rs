//! jQuery method invocations

use crate::collab::CssClassProvider;
use jqgen_js::{GenError, HasJsCode, JsExpr, JsInvocation, JsStatement, Result, WriterSettings};

/// A call on a jQuery object, such as `$(document).addClass('x')`
///
/// Every catalog method consumes the invocation and returns a new one that
/// calls the method on the result, so chains read like the JavaScript they
/// produce. Arguments are appended with [`arg`](Self::arg).
#[derive(Debug, Clone, PartialEq)]
pub struct JQueryInvocation {
    inner: JsInvocation,
}

impl JQueryInvocation {
    /// Call the function value `function`, e.g. `$(...)`
    pub fn call(function: impl Into<JsExpr>) -> Self {
        Self {
            inner: JsInvocation::function(function),
        }
    }

    /// Call `name` on `object`
    pub fn method(object: impl Into<JsExpr>, name: &'static str) -> Self {
        Self {
            inner: JsInvocation::method(object, name),
        }
    }

    /// Call a method not in the catalog, e.g. one added by a plugin
    pub fn invoke(self, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: JsInvocation::try_method(self, name)?,
        })
    }

    fn jq_invoke(self, name: &'static str) -> Self {
        Self::method(self, name)
    }

    /// Append an argument
    pub fn arg(mut self, value: impl Into<JsExpr>) -> Self {
        self.inner.push_arg(value);
        self
    }

    /// Append an argument, or `null` when absent
    pub fn arg_opt<T: Into<JsExpr>>(self, value: Option<T>) -> Self {
        self.arg(value)
    }

    /// Append the name of a CSS class as a string
    pub fn arg_class(self, css_class: &(impl CssClassProvider + ?Sized)) -> Self {
        self.arg(css_class.css_class())
    }

    /// Append an argument whose conversion can fail, such as a `SelectorList`
    pub fn try_arg<T>(self, value: T) -> Result<Self>
    where
        T: TryInto<JsExpr, Error = GenError>,
    {
        Ok(self.arg(value.try_into()?))
    }

    /// Append several arguments
    pub fn args<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<JsExpr>,
    {
        for value in values {
            self.inner.push_arg(value);
        }
        self
    }

    /// Append an argument in place
    pub fn push_arg(&mut self, value: impl Into<JsExpr>) -> &mut Self {
        self.inner.push_arg(value);
        self
    }

    pub fn arguments(&self) -> &[JsExpr] {
        self.inner.arguments()
    }

    pub fn as_js_invocation(&self) -> &JsInvocation {
        &self.inner
    }

    /// `self.name` as an expression
    fn field(self, name: &'static str) -> JsExpr {
        JsExpr::from(self).field(name)
    }

    /// The `.jquery` property: the jQuery version string
    pub fn jquery(self) -> JsExpr {
        self.field("jquery")
    }

    /// The `.length` property
    pub fn length(self) -> JsExpr {
        self.field("length")
    }

    /// The `.context` property
    #[deprecated(note = "removed in jQuery 3.0")]
    pub fn context(self) -> JsExpr {
        self.field("context")
    }

    /// Render as a statement: `a.b(c,d);`
    pub fn to_js_code(&self, settings: &WriterSettings) -> String {
        tracing::debug!(args = self.inner.arguments().len(), "rendering jQuery invocation");
        self.inner.to_statement_code(settings)
    }

    /// Render as an expression, without the trailing `;`
    pub fn to_expression_code(&self, settings: &WriterSettings) -> String {
        self.inner.to_js_code(settings)
    }

    pub fn to_expression(self) -> JsExpr {
        self.into()
    }
}

impl From<JQueryInvocation> for JsExpr {
    fn from(value: JQueryInvocation) -> Self {
        JsExpr::from(value.inner)
    }
}

impl From<JQueryInvocation> for JsInvocation {
    fn from(value: JQueryInvocation) -> Self {
        value.inner
    }
}

impl From<JQueryInvocation> for JsStatement {
    fn from(value: JQueryInvocation) -> Self {
        JsStatement::Expr(value.into())
    }
}

macro_rules! jquery_methods {
    ($($method:ident => $js:literal),* $(,)?) => {
        impl JQueryInvocation {
            $(
                #[doc = concat!("`.", $js, "()`")]
                pub fn $method(self) -> JQueryInvocation {
                    self.jq_invoke($js)
                }
            )*
        }
    };
}

jquery_methods! {
    add => "add",
    add_back => "addBack",
    add_class => "addClass",
    after => "after",
    ajax_complete => "ajaxComplete",
    ajax_error => "ajaxError",
    ajax_send => "ajaxSend",
    ajax_start => "ajaxStart",
    ajax_stop => "ajaxStop",
    ajax_success => "ajaxSuccess",
    and_self => "andSelf",
    animate => "animate",
    append => "append",
    append_to => "appendTo",
    attr => "attr",
    before => "before",
    bind => "bind",
    blur => "blur",
    callbacks_add => "add",
    callbacks_disable => "disable",
    callbacks_disabled => "disabled",
    callbacks_empty => "empty",
    callbacks_fire => "fire",
    callbacks_fire_with => "fireWith",
    callbacks_fired => "fired",
    callbacks_has => "has",
    callbacks_lock => "lock",
    callbacks_locked => "locked",
    callbacks_remove => "remove",
    change => "change",
    children => "children",
    clear_queue => "clearQueue",
    click => "click",
    clone_ => "clone",
    closest => "closest",
    contents => "contents",
    contextmenu => "contextmenu",
    css => "css",
    data => "data",
    dblclick => "dblclick",
    deferred_always => "always",
    deferred_done => "done",
    deferred_fail => "fail",
    deferred_is_rejected => "isRejected",
    deferred_is_resolved => "isResolved",
    deferred_notify => "notify",
    deferred_notify_with => "notifyWith",
    deferred_pipe => "pipe",
    deferred_progress => "progress",
    deferred_promise => "promise",
    deferred_reject => "reject",
    deferred_reject_with => "rejectWith",
    deferred_resolve => "resolve",
    deferred_resolve_with => "resolveWith",
    deferred_state => "state",
    deferred_then => "then",
    delay => "delay",
    delegate => "delegate",
    dequeue => "dequeue",
    detach => "detach",
    die => "die",
    each => "each",
    empty => "empty",
    end => "end",
    eq_ => "eq",
    error => "error",
    event_is_default_prevented => "isDefaultPrevented",
    event_is_immediate_propagation_stopped => "isImmediatePropagationStopped",
    event_is_propagation_stopped => "isPropagationStopped",
    event_prevent_default => "preventDefault",
    event_stop_immediate_propagation => "stopImmediatePropagation",
    event_stop_propagation => "stopPropagation",
    fade_in => "fadeIn",
    fade_out => "fadeOut",
    fade_to => "fadeTo",
    fade_toggle => "fadeToggle",
    filter => "filter",
    find => "find",
    finish => "finish",
    first => "first",
    focus => "focus",
    focusin => "focusin",
    focusout => "focusout",
    get => "get",
    has => "has",
    has_class => "hasClass",
    height => "height",
    hide => "hide",
    hover => "hover",
    html => "html",
    index => "index",
    inner_height => "innerHeight",
    inner_width => "innerWidth",
    insert_after => "insertAfter",
    insert_before => "insertBefore",
    is => "is",
    keydown => "keydown",
    keypress => "keypress",
    keyup => "keyup",
    last => "last",
    live => "live",
    load => "load",
    map => "map",
    mousedown => "mousedown",
    mouseenter => "mouseenter",
    mouseleave => "mouseleave",
    mousemove => "mousemove",
    mouseout => "mouseout",
    mouseover => "mouseover",
    mouseup => "mouseup",
    next => "next",
    next_all => "nextAll",
    next_until => "nextUntil",
    not_ => "not",
    off => "off",
    offset => "offset",
    offset_parent => "offsetParent",
    on => "on",
    one => "one",
    outer_height => "outerHeight",
    outer_width => "outerWidth",
    parent => "parent",
    parents => "parents",
    parents_until => "parentsUntil",
    position => "position",
    prepend => "prepend",
    prepend_to => "prependTo",
    prev => "prev",
    prev_all => "prevAll",
    prev_until => "prevUntil",
    promise => "promise",
    prop => "prop",
    push_stack => "pushStack",
    queue => "queue",
    ready => "ready",
    remove => "remove",
    remove_attr => "removeAttr",
    remove_class => "removeClass",
    remove_data => "removeData",
    remove_prop => "removeProp",
    replace_all => "replaceAll",
    replace_with => "replaceWith",
    resize => "resize",
    scroll => "scroll",
    scroll_left => "scrollLeft",
    scroll_top => "scrollTop",
    select => "select",
    serialize => "serialize",
    serialize_array => "serializeArray",
    show => "show",
    siblings => "siblings",
    size => "size",
    slice => "slice",
    slide_down => "slideDown",
    slide_toggle => "slideToggle",
    slide_up => "slideUp",
    stop => "stop",
    submit => "submit",
    text => "text",
    to_array => "toArray",
    toggle => "toggle",
    toggle_class => "toggleClass",
    trigger => "trigger",
    trigger_handler => "triggerHandler",
    unbind => "unbind",
    undelegate => "undelegate",
    unload => "unload",
    unwrap => "unwrap",
    val => "val",
    width => "width",
    wrap => "wrap",
    wrap_all => "wrapAll",
    wrap_inner => "wrapInner",
}

// Plugin methods commonly registered on `$.fn`
jquery_methods! {
    enable => "enable",
    disable => "disable",
    check => "check",
    uncheck => "uncheck",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jquery::jquery_document;

    #[test]
    fn test_statement_and_expression() {
        let inv = jquery_document().add_class().arg("active");
        let settings = WriterSettings::default();
        assert_eq!(inv.to_js_code(&settings), "$(document).addClass('active');");
        assert_eq!(
            inv.to_expression_code(&settings),
            "$(document).addClass('active')"
        );
    }

    #[test]
    fn test_arg_opt_and_class() {
        let none: Option<&str> = None;
        let inv = jquery_document()
            .css()
            .arg_opt(none)
            .arg_opt(Some(3))
            .arg_class("hl");
        assert_eq!(
            inv.to_js_code(&WriterSettings::default()),
            "$(document).css(null,3,'hl');"
        );
        assert_eq!(inv.arguments().len(), 3);
    }

    #[test]
    fn test_custom_method() {
        let inv = jquery_document().invoke("tooltip").unwrap().arg("show");
        assert_eq!(
            inv.to_js_code(&WriterSettings::default()),
            "$(document).tooltip('show');"
        );
        assert!(jquery_document().invoke("bad name").is_err());
    }

    #[test]
    fn test_namespaced_methods_use_plain_js_names() {
        let settings = WriterSettings::default();
        let cb = JQueryInvocation::call(JsExpr::global("cb"));
        assert_eq!(cb.callbacks_fire_with().to_js_code(&settings), "cb().fireWith();");
        let d = JQueryInvocation::call(JsExpr::global("d"));
        assert_eq!(d.deferred_then().to_js_code(&settings), "d().then();");
    }
}
