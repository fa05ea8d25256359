//! jQuery selectors
//!
//! A [`Selector`] wraps one JavaScript expression that evaluates to selector
//! text. Constructors and combinators live at module level and always return
//! a new value:
//!
//! ```rust
//! use jqgen::selector::{self, Selector};
//! use jqgen_js::{HasJsCode, WriterSettings};
//!
//! let rows = selector::descendant(selector::id("grid")?, selector::element("tr")?.odd());
//! assert_eq!(rows.to_js_code(&WriterSettings::default()), "'#grid tr:odd'");
//! assert_eq!(Selector::CHECKED.to_js_code(&WriterSettings::default()), "':checked'");
//! # Ok::<(), jqgen_js::GenError>(())
//! ```
//!
//! No CSS validation happens here; the combinators only insert punctuation.

use crate::collab::{CssClassProvider, HasId, HtmlElement};
use crate::invocation::JQueryInvocation;
use crate::jquery::jquery;
use jqgen_js::{GenError, HasJsCode, JsExpr, JsFormatter, Result, WriterSettings, ensure_not_empty, quote_js_string};
use std::borrow::Cow;

/// One selector fragment such as `#id`, `.class`, `:first` or `[attr=val]`
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    expr: JsExpr,
}

macro_rules! selector_constants {
    ($($konst:ident, $method:ident => $text:literal;)*) => {
        impl Selector {
            $(
                #[doc = concat!("`", $text, "`")]
                pub const $konst: Selector = Selector::from_static($text);
            )*

            $(
                #[doc = concat!("Append `", $text, "` to this selector")]
                pub fn $method(self) -> Selector {
                    chain(self, Self::$konst)
                }
            )*
        }
    };
}

selector_constants! {
    ANIMATED, animated => ":animated";
    BUTTON, button => ":button";
    CHECKBOX, checkbox => ":checkbox";
    CHECKED, checked => ":checked";
    DISABLED, disabled => ":disabled";
    EMPTY, empty => ":empty";
    ENABLED, enabled => ":enabled";
    EVEN, even => ":even";
    FILE, file => ":file";
    FIRST, first => ":first";
    FIRST_CHILD, first_child => ":first-child";
    FIRST_OF_TYPE, first_of_type => ":first-of-type";
    FOCUS, focus => ":focus";
    HEADER, header => ":header";
    HIDDEN, hidden => ":hidden";
    IMAGE, image => ":image";
    INPUT, input => ":input";
    LAST, last => ":last";
    LAST_CHILD, last_child => ":last-child";
    LAST_OF_TYPE, last_of_type => ":last-of-type";
    ODD, odd => ":odd";
    ONLY_CHILD, only_child => ":only-child";
    ONLY_OF_TYPE, only_of_type => ":only-of-type";
    PARENT, parent => ":parent";
    PASSWORD, password => ":password";
    RADIO, radio => ":radio";
    RESET, reset => ":reset";
    ROOT, root => ":root";
    SELECTED, selected => ":selected";
    SUBMIT, submit => ":submit";
    TARGET, target => ":target";
    TEXT, text => ":text";
    VISIBLE, visible => ":visible";
}

impl Selector {
    /// `*`
    pub const ALL: Selector = Selector::from_static("*");

    const fn from_static(text: &'static str) -> Self {
        Self {
            expr: JsExpr::str_static(text),
        }
    }

    /// Wrap an arbitrary expression
    pub fn new(expr: impl Into<JsExpr>) -> Self {
        Self { expr: expr.into() }
    }

    /// Selector from literal text; fails when `text` is empty
    pub fn literal(text: &str) -> Result<Self> {
        ensure_not_empty(text, "SelectorName")?;
        Ok(Self::new(text))
    }

    fn pseudo(name: &str, arg: JsExpr) -> Self {
        // The argument is frozen into the literal using default writer settings
        let code = arg.to_js_code(&WriterSettings::default());
        tracing::trace!(pseudo = name, "wrapping selector argument");
        Self::new(format!("{}({})", name, code))
    }

    /// The wrapped expression
    pub fn expression(&self) -> &JsExpr {
        &self.expr
    }

    /// Unwrap into the underlying expression
    pub fn into_expression(self) -> JsExpr {
        self.expr
    }

    /// `$(<selector>)`
    pub fn invoke(self) -> JQueryInvocation {
        jquery(self.expr)
    }

    /// `self` immediately followed by `rhs`
    pub fn chain(self, rhs: Selector) -> Selector {
        chain(self, rhs)
    }

    /// `self,rhs`
    pub fn multiple(self, rhs: Selector) -> Selector {
        combine(self, ",", rhs, "multiple")
    }

    /// `self > rhs`
    pub fn child(self, rhs: Selector) -> Selector {
        child(self, rhs)
    }

    /// `self rhs`
    pub fn descendant(self, rhs: Selector) -> Selector {
        descendant(self, rhs)
    }

    /// `self + rhs`
    pub fn next_adjacent(self, rhs: Selector) -> Selector {
        next_adjacent(self, rhs)
    }

    /// `self ~ rhs`
    pub fn next_siblings(self, rhs: Selector) -> Selector {
        next_siblings(self, rhs)
    }
}

impl HasJsCode for Selector {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        self.expr.generate(f);
    }
}

impl From<Selector> for JsExpr {
    fn from(value: Selector) -> Self {
        value.expr
    }
}

impl From<&Selector> for JsExpr {
    fn from(value: &Selector) -> Self {
        value.expr.clone()
    }
}

fn combine(lhs: Selector, separator: &'static str, rhs: Selector, combinator: &'static str) -> Selector {
    tracing::trace!(combinator, "composing selectors");
    let expr = if separator.is_empty() {
        lhs.expr.plus(rhs.expr)
    } else {
        lhs.expr.plus(JsExpr::str_static(separator)).plus(rhs.expr)
    };
    Selector { expr }
}

/// Escape `:` and `.` in an element ID with a backslash
///
/// IDs without these characters are returned borrowed. An empty ID fails
/// with [`GenError::EmptyArgument`].
pub fn valid_jquery_id(id: &str) -> Result<Cow<'_, str>> {
    ensure_not_empty(id, "ID")?;
    if !id.contains([':', '.']) {
        return Ok(Cow::Borrowed(id));
    }
    let mut out = String::with_capacity(id.len() + 4);
    for c in id.chars() {
        if c == ':' || c == '.' {
            out.push('\\');
        }
        out.push(c);
    }
    Ok(Cow::Owned(out))
}

/// Element selector by tag name
pub fn element(name: &str) -> Result<Selector> {
    ensure_not_empty(name, "ElementName")?;
    Ok(Selector::new(name))
}

/// Element selector for a known HTML element
pub fn element_of(element: HtmlElement) -> Selector {
    Selector::new(JsExpr::str_static(element.name()))
}

/// `#id`, with `:` and `.` escaped
pub fn id(id: &str) -> Result<Selector> {
    Ok(Selector::new(format!("#{}", valid_jquery_id(id)?)))
}

/// `#` followed by the value of `expr`
///
/// Unlike [`id`], the value is not escaped: an expression that may contain
/// `:` or `.` must be escaped by the caller.
pub fn id_expr(expr: impl Into<JsExpr>) -> Selector {
    Selector::new(JsExpr::from('#').plus(expr))
}

/// `#id` for the ID of `provider`
pub fn id_of(provider: &(impl HasId + ?Sized)) -> Result<Selector> {
    id(provider.id())
}

/// `.class`
pub fn clazz(css_class: &(impl CssClassProvider + ?Sized)) -> Result<Selector> {
    let name = ensure_not_empty(css_class.css_class(), "CSSClass")?;
    Ok(Selector::new(format!(".{}", name)))
}

fn attribute(name: &str, op: &str, value: &str) -> Result<Selector> {
    ensure_not_empty(name, "AttrName")?;
    let quoted = quote_js_string(value, WriterSettings::default().quote_style);
    Ok(Selector::new(format!("[{}{}{}]", name, op, quoted)))
}

/// `[name]`
pub fn attribute_has(name: &str) -> Result<Selector> {
    ensure_not_empty(name, "AttrName")?;
    Ok(Selector::new(format!("[{}]", name)))
}

/// `[name='value']`
pub fn attribute_equals(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "=", value)
}

/// `[name*='value']`
pub fn attribute_contains(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "*=", value)
}

/// `[name|='value']`
pub fn attribute_contains_prefix(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "|=", value)
}

/// `[name~='value']`
pub fn attribute_contains_word(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "~=", value)
}

/// `[name$='value']`
pub fn attribute_ends_with(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "$=", value)
}

/// `[name^='value']`
pub fn attribute_starts_with(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "^=", value)
}

/// `[name!='value']`
pub fn attribute_not_equal(name: &str, value: &str) -> Result<Selector> {
    attribute(name, "!=", value)
}

/// `[name='value']` for the `name` attribute
pub fn name_attr(value: &str) -> Result<Selector> {
    ensure_not_empty(value, "NameAttrValue")?;
    attribute_equals("name", value)
}

/// `first` immediately followed by `second`, e.g. `div` and `#x` give `div#x`
pub fn chain(first: Selector, second: Selector) -> Selector {
    combine(first, "", second, "chain")
}

/// Join selectors with `,`
///
/// A single selector is returned unchanged; an empty input is an error.
pub fn multiple(selectors: impl IntoIterator<Item = Selector>) -> Result<Selector> {
    let mut iter = selectors.into_iter();
    let first = iter.next().ok_or_else(|| GenError::empty_argument("selectors"))?;
    Ok(iter.fold(first, |acc, next| acc.multiple(next)))
}

/// `parent > child`
pub fn child(parent: Selector, child: Selector) -> Selector {
    combine(parent, " > ", child, "child")
}

/// `ancestor descendant`
pub fn descendant(ancestor: Selector, descendant: Selector) -> Selector {
    combine(ancestor, " ", descendant, "descendant")
}

/// `prev + next`
pub fn next_adjacent(prev: Selector, next: Selector) -> Selector {
    combine(prev, " + ", next, "next_adjacent")
}

/// `prev ~ siblings`
pub fn next_siblings(prev: Selector, siblings: Selector) -> Selector {
    combine(prev, " ~ ", siblings, "next_siblings")
}

macro_rules! pseudo_wrappers {
    ($($func:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $name, "(arg)`")]
            pub fn $func(arg: impl Into<JsExpr>) -> Selector {
                Selector::pseudo($name, arg.into())
            }
        )*
    };
}

pseudo_wrappers! {
    not => ":not",
    has => ":has",
    contains => ":contains",
    lang => ":lang",
    eq => ":eq",
    gt => ":gt",
    lt => ":lt",
    nth_child => ":nth-child",
    nth_last_child => ":nth-last-child",
    nth_of_type => ":nth-of-type",
    nth_last_of_type => ":nth-last-of-type",
}
