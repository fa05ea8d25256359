//! The JavaScript expression tree

use crate::assoc::JsAssocArray;
use crate::code::{HasJsCode, generate_list};
use crate::error::Result;
use crate::escape::quote_js_string;
use crate::formatter::JsFormatter;
use crate::function::JsFunction;
use crate::ident::{ensure_identifier, ensure_property_name};
use crate::invocation::JsInvocation;
use std::borrow::Cow;

/// A name resolved through [`WriterSettings`](crate::WriterSettings) at render time.
///
/// Renders as the override registered under `key`, or as `fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alias {
    key: &'static str,
    fallback: &'static str,
}

impl Alias {
    /// Create an alias symbol
    pub const fn new(key: &'static str, fallback: &'static str) -> Self {
        Self { key, fallback }
    }

    /// Lookup key in the settings' alias table
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Name used when the settings carry no override
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Operator token
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// An immutable fragment of JavaScript source
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    /// `null`
    Null,
    /// `this`
    This,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Number(f64),
    /// String literal, stored unescaped
    Str(Cow<'static, str>),
    /// Reference to a global or variable
    Ident(Cow<'static, str>),
    /// Name chosen at render time
    Alias(Alias),
    /// `object.name`
    Field {
        object: Box<JsExpr>,
        name: Cow<'static, str>,
    },
    /// `lhs op rhs`
    Binary {
        op: BinaryOp,
        lhs: Box<JsExpr>,
        rhs: Box<JsExpr>,
    },
    /// Function or method call
    Invocation(Box<JsInvocation>),
    /// `[a,b]`
    Array(Vec<JsExpr>),
    /// `{'k':v}`
    Object(JsAssocArray),
    /// `function(a){...}`
    Function(Box<JsFunction>),
    /// Verbatim source, emitted unchanged
    Raw(Cow<'static, str>),
}

impl JsExpr {
    /// `document`
    pub const DOCUMENT: JsExpr = JsExpr::Ident(Cow::Borrowed("document"));
    /// `window`
    pub const WINDOW: JsExpr = JsExpr::Ident(Cow::Borrowed("window"));
    /// `undefined`
    pub const UNDEFINED: JsExpr = JsExpr::Ident(Cow::Borrowed("undefined"));

    /// String literal from a static string
    pub const fn str_static(value: &'static str) -> Self {
        JsExpr::Str(Cow::Borrowed(value))
    }

    /// String literal
    pub fn string(value: impl Into<String>) -> Self {
        JsExpr::Str(Cow::Owned(value.into()))
    }

    /// Reference to a well-known global, not validated
    pub const fn global(name: &'static str) -> Self {
        JsExpr::Ident(Cow::Borrowed(name))
    }

    /// Reference to a variable; fails unless `name` is a valid identifier
    pub fn ident(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        ensure_identifier(&name)?;
        Ok(JsExpr::Ident(Cow::Owned(name)))
    }

    /// Alias symbol
    pub const fn alias(alias: Alias) -> Self {
        JsExpr::Alias(alias)
    }

    /// Verbatim source
    pub fn raw(code: impl Into<Cow<'static, str>>) -> Self {
        JsExpr::Raw(code.into())
    }

    /// Array literal
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<JsExpr>,
    {
        JsExpr::Array(items.into_iter().map(Into::into).collect())
    }

    /// `self + rhs`
    ///
    /// Two string literals fold into one string literal and two numeric
    /// literals fold into one numeric literal.
    pub fn plus(self, rhs: impl Into<JsExpr>) -> JsExpr {
        let rhs = rhs.into();
        match (self, rhs) {
            (JsExpr::Str(a), JsExpr::Str(b)) => {
                let mut joined = a.into_owned();
                joined.push_str(&b);
                JsExpr::Str(Cow::Owned(joined))
            }
            (JsExpr::Int(a), JsExpr::Int(b)) => match a.checked_add(b) {
                Some(sum) => JsExpr::Int(sum),
                None => JsExpr::Number(a as f64 + b as f64),
            },
            (JsExpr::Int(a), JsExpr::Number(b)) => JsExpr::Number(a as f64 + b),
            (JsExpr::Number(a), JsExpr::Int(b)) => JsExpr::Number(a + b as f64),
            (JsExpr::Number(a), JsExpr::Number(b)) => JsExpr::Number(a + b),
            (lhs, rhs) => JsExpr::Binary {
                op: BinaryOp::Plus,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
        }
    }

    /// `self op rhs` without folding
    pub fn binary(self, op: BinaryOp, rhs: impl Into<JsExpr>) -> JsExpr {
        JsExpr::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs.into()),
        }
    }

    /// `self.name` for a name known to be valid
    pub fn field(self, name: &'static str) -> JsExpr {
        JsExpr::Field {
            object: Box::new(self),
            name: Cow::Borrowed(name),
        }
    }

    /// `self.name`; fails unless `name` is a valid property name
    pub fn try_field(self, name: impl Into<String>) -> Result<JsExpr> {
        let name = name.into();
        ensure_property_name(&name)?;
        Ok(JsExpr::Field {
            object: Box::new(self),
            name: Cow::Owned(name),
        })
    }

    /// `self.name(...)`
    pub fn invoke(self, name: &'static str) -> JsInvocation {
        JsInvocation::method(self, name)
    }

    /// `self(...)`
    pub fn call(self) -> JsInvocation {
        JsInvocation::function(self)
    }

    /// The contained text if this is a string literal
    pub fn as_str_literal(&self) -> Option<&str> {
        match self {
            JsExpr::Str(s) => Some(&**s),
            _ => None,
        }
    }

    fn is_negative_literal(&self) -> bool {
        match self {
            JsExpr::Int(i) => *i < 0,
            JsExpr::Number(n) => n.is_sign_negative(),
            _ => false,
        }
    }

    fn lhs_needs_parens(op: BinaryOp, lhs: &JsExpr) -> bool {
        matches!(lhs, JsExpr::Binary { op: inner, .. } if *inner != op)
            || matches!(lhs, JsExpr::Function(_))
    }

    // `a--5` would lex as a decrement
    fn rhs_needs_parens(rhs: &JsExpr) -> bool {
        matches!(rhs, JsExpr::Binary { .. } | JsExpr::Function(_)) || rhs.is_negative_literal()
    }

    /// Whether the rendered text starts with `{` or `function`, which a
    /// statement would read as a block or a declaration
    pub(crate) fn needs_parens_as_statement(&self) -> bool {
        match self {
            JsExpr::Object(_) | JsExpr::Function(_) => true,
            JsExpr::Field { object, .. } => {
                !object.needs_parens_as_object() && object.needs_parens_as_statement()
            }
            JsExpr::Binary { op, lhs, .. } => {
                !Self::lhs_needs_parens(*op, lhs) && lhs.needs_parens_as_statement()
            }
            JsExpr::Invocation(inv) => inv.needs_parens_as_statement(),
            _ => false,
        }
    }

    /// Whether this expression must be parenthesised before `.member`
    pub(crate) fn needs_parens_as_object(&self) -> bool {
        matches!(
            self,
            JsExpr::Binary { .. } | JsExpr::Function(_) | JsExpr::Int(_) | JsExpr::Number(_)
        )
    }

    pub(crate) fn generate_as_object(&self, f: &mut JsFormatter<'_>) {
        if self.needs_parens_as_object() {
            f.plain_char('(');
            self.generate(f);
            f.plain_char(')');
        } else {
            self.generate(f);
        }
    }
}

fn generate_number(f: &mut JsFormatter<'_>, value: f64) {
    if value.is_nan() {
        f.plain("NaN");
    } else if value.is_infinite() {
        f.plain(if value > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        f.plain(&value.to_string());
    }
}

impl HasJsCode for JsExpr {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        match self {
            JsExpr::Null => {
                f.plain("null");
            }
            JsExpr::This => {
                f.plain("this");
            }
            JsExpr::Bool(b) => {
                f.plain(if *b { "true" } else { "false" });
            }
            JsExpr::Int(i) => {
                f.plain(&i.to_string());
            }
            JsExpr::Number(n) => generate_number(f, *n),
            JsExpr::Str(s) => {
                let quoted = quote_js_string(s, f.settings().quote_style);
                f.plain(&quoted);
            }
            JsExpr::Ident(name) => {
                f.plain(name);
            }
            JsExpr::Alias(alias) => {
                let name = f.settings().resolve_alias(alias.key(), alias.fallback());
                f.plain(name);
            }
            JsExpr::Field { object, name } => {
                object.generate_as_object(f);
                f.plain_char('.').plain(name);
            }
            JsExpr::Binary { op, lhs, rhs } => {
                if Self::lhs_needs_parens(*op, lhs) {
                    f.plain_char('(');
                    lhs.generate(f);
                    f.plain_char(')');
                } else {
                    lhs.generate(f);
                }
                f.plain(op.as_str());
                if Self::rhs_needs_parens(rhs) {
                    f.plain_char('(');
                    rhs.generate(f);
                    f.plain_char(')');
                } else {
                    rhs.generate(f);
                }
            }
            JsExpr::Invocation(inv) => inv.generate(f),
            JsExpr::Array(items) => {
                f.plain_char('[');
                generate_list(f, items);
                f.plain_char(']');
            }
            JsExpr::Object(obj) => obj.generate(f),
            JsExpr::Function(func) => func.generate(f),
            JsExpr::Raw(code) => {
                f.plain(code);
            }
        }
    }
}

impl From<&str> for JsExpr {
    fn from(value: &str) -> Self {
        JsExpr::Str(Cow::Owned(value.to_owned()))
    }
}

impl From<String> for JsExpr {
    fn from(value: String) -> Self {
        JsExpr::Str(Cow::Owned(value))
    }
}

impl From<&String> for JsExpr {
    fn from(value: &String) -> Self {
        JsExpr::Str(Cow::Owned(value.clone()))
    }
}

impl From<char> for JsExpr {
    fn from(value: char) -> Self {
        JsExpr::Str(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for JsExpr {
    fn from(value: bool) -> Self {
        JsExpr::Bool(value)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for JsExpr {
                fn from(value: $t) -> Self {
                    JsExpr::Int(i64::from(value))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for JsExpr {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(JsExpr::Int)
            .unwrap_or(JsExpr::Number(value as f64))
    }
}

impl From<usize> for JsExpr {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(JsExpr::Int)
            .unwrap_or(JsExpr::Number(value as f64))
    }
}

impl From<f32> for JsExpr {
    fn from(value: f32) -> Self {
        JsExpr::Number(f64::from(value))
    }
}

impl From<f64> for JsExpr {
    fn from(value: f64) -> Self {
        JsExpr::Number(value)
    }
}

impl From<JsInvocation> for JsExpr {
    fn from(value: JsInvocation) -> Self {
        JsExpr::Invocation(Box::new(value))
    }
}

impl From<JsAssocArray> for JsExpr {
    fn from(value: JsAssocArray) -> Self {
        JsExpr::Object(value)
    }
}

impl From<JsFunction> for JsExpr {
    fn from(value: JsFunction) -> Self {
        JsExpr::Function(Box::new(value))
    }
}

impl From<Vec<JsExpr>> for JsExpr {
    fn from(value: Vec<JsExpr>) -> Self {
        JsExpr::Array(value)
    }
}

impl From<Alias> for JsExpr {
    fn from(value: Alias) -> Self {
        JsExpr::Alias(value)
    }
}

impl<T: Into<JsExpr>> From<Option<T>> for JsExpr {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(JsExpr::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WriterSettings;

    fn code(expr: &JsExpr) -> String {
        expr.to_js_code(&WriterSettings::default())
    }

    #[test]
    fn test_literals() {
        assert_eq!(code(&JsExpr::Null), "null");
        assert_eq!(code(&JsExpr::This), "this");
        assert_eq!(code(&true.into()), "true");
        assert_eq!(code(&5.into()), "5");
        assert_eq!(code(&3.1234.into()), "3.1234");
        assert_eq!(code(&47.5f32.into()), "47.5");
        assert_eq!(code(&"Ha llo".into()), "'Ha llo'");
        assert_eq!(code(&JsExpr::Number(f64::NAN)), "NaN");
        assert_eq!(code(&JsExpr::Number(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn test_plus_folds_strings() {
        let e = JsExpr::from("a").plus("b").plus('c');
        assert_eq!(e, JsExpr::from("abc"));
        assert_eq!(code(&e), "'abc'");
    }

    #[test]
    fn test_plus_folds_numbers() {
        assert_eq!(JsExpr::from(2).plus(3), JsExpr::Int(5));
        assert_eq!(JsExpr::from(2).plus(0.5), JsExpr::Number(2.5));
        assert_eq!(JsExpr::from(i64::MAX).plus(1), JsExpr::Number(i64::MAX as f64 + 1.0));
    }

    #[test]
    fn test_plus_mixed_builds_binary() {
        let id = JsExpr::ident("id").unwrap();
        let e = JsExpr::from('#').plus(id);
        assert_eq!(code(&e), "'#'+id");
    }

    #[test]
    fn test_binary_parens() {
        let a = JsExpr::ident("a").unwrap();
        let b = JsExpr::ident("b").unwrap();
        let c = JsExpr::ident("c").unwrap();
        let left = a.clone().plus(b.clone()).plus(c.clone());
        assert_eq!(code(&left), "a+b+c");
        let right = a.clone().plus(b.clone().plus(c.clone()));
        assert_eq!(code(&right), "a+(b+c)");
        let mixed = a.binary(BinaryOp::Mul, b).plus(c);
        assert_eq!(code(&mixed), "(a*b)+c");
    }

    #[test]
    fn test_negative_rhs_is_parenthesised() {
        let a = JsExpr::ident("a").unwrap();
        assert_eq!(code(&a.clone().binary(BinaryOp::Minus, -5)), "a-(-5)");
        assert_eq!(code(&a.clone().binary(BinaryOp::Plus, -0.5)), "a+(-0.5)");
        assert_eq!(code(&a.clone().binary(BinaryOp::Minus, 5)), "a-5");
        assert_eq!(code(&JsExpr::from(-5).binary(BinaryOp::Minus, a)), "-5-a");
    }

    #[test]
    fn test_statement_position() {
        let obj = JsExpr::from(JsAssocArray::new().add("a", 1));
        assert!(obj.clone().field("a").needs_parens_as_statement());
        // Functions are already wrapped as member objects and callees
        assert!(!JsExpr::from(JsFunction::new()).field("call").needs_parens_as_statement());
        assert!(!JsExpr::from(JsInvocation::function(JsFunction::new())).needs_parens_as_statement());
        assert!(!JsExpr::DOCUMENT.field("body").needs_parens_as_statement());
        assert!(obj.plus(JsExpr::global("x")).needs_parens_as_statement());
    }

    #[test]
    fn test_fields_and_alias() {
        let e = JsExpr::alias(Alias::new("jquery", "$")).field("fn");
        assert_eq!(code(&e), "$.fn");
        let settings = WriterSettings::default().with_alias("jquery", "jQuery");
        assert_eq!(e.to_js_code(&settings), "jQuery.fn");
        assert_eq!(code(&JsExpr::from(5).field("x")), "(5).x");
    }

    #[test]
    fn test_try_field_rejects_bad_names() {
        assert!(JsExpr::DOCUMENT.try_field("body").is_ok());
        assert!(JsExpr::DOCUMENT.try_field("a-b").is_err());
    }

    #[test]
    fn test_option_and_array() {
        let none: Option<i32> = None;
        assert_eq!(code(&none.into()), "null");
        assert_eq!(code(&JsExpr::array([1, 2, 3])), "[1,2,3]");
        assert_eq!(code(&JsExpr::array(Vec::<JsExpr>::new())), "[]");
    }

    #[test]
    fn test_double_quotes() {
        let settings = WriterSettings::default().with_quote_style(crate::QuoteStyle::Double);
        assert_eq!(JsExpr::from("it's").to_js_code(&settings), "\"it\\'s\"");
    }
}
