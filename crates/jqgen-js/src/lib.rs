//! JavaScript expression model and source writer
//!
//! This crate provides a small, owned model of JavaScript source fragments
//! that can be composed as values and rendered to text on demand.
//!
//! # Features
//!
//! - **Immutable expressions** - [`JsExpr`] trees are plain values, `Send + Sync`
//! - **Literal folding** - `plus` merges adjacent string or number literals
//! - **Render-time aliases** - names such as `$` are resolved from [`WriterSettings`]
//! - **Compact or aligned output** - one line by default, indented on request
//! - **Optional validation** - parse generated code with oxc (feature `validate`)
//!
//! # Examples
//!
//! ```rust
//! use jqgen_js::{HasJsCode, JsAssocArray, JsExpr, WriterSettings};
//!
//! let settings = WriterSettings::default();
//!
//! // Build: console.log('Hello, '+name)
//! let name = JsExpr::ident("name")?;
//! let call = JsExpr::global("console")
//!     .invoke("log")
//!     .arg(JsExpr::from("Hello, ").plus(name));
//! assert_eq!(call.to_js_code(&settings), "console.log('Hello, '+name)");
//!
//! // Build: {'cache':false}
//! let obj = JsAssocArray::new().add("cache", false);
//! assert_eq!(obj.to_js_code(&settings), "{'cache':false}");
//! # Ok::<(), jqgen_js::GenError>(())
//! ```

mod assoc;
mod block;
mod code;
mod error;
mod escape;
mod expr;
mod formatter;
mod function;
mod ident;
mod invocation;
mod json;
mod settings;
mod validate;

pub use assoc::JsAssocArray;
pub use block::{JsBlock, JsStatement};
pub use code::HasJsCode;
pub use error::{GenError, Result, ensure_not_empty};
pub use escape::{escape_js_string, quote_js_string};
pub use expr::{Alias, BinaryOp, JsExpr};
pub use formatter::JsFormatter;
pub use function::JsFunction;
pub use ident::{ensure_identifier, ensure_property_name, is_valid_identifier, is_valid_property_name};
pub use invocation::{Callee, JsInvocation};
pub use settings::{IndentStyle, QuoteStyle, WriterSettings};

#[cfg(feature = "validate")]
pub use validate::{validate_expression, validate_script};
