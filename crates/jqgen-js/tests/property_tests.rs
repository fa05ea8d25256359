//! Property-based tests for escaping and literal folding

use jqgen_js::{HasJsCode, JsAssocArray, JsExpr, WriterSettings, escape_js_string, validate_expression};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~\t\r\n\u{00e4}\u{20ac}]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every escaped string forms a parsable literal
    #[test]
    fn prop_string_literal_parses(s in text_strategy()) {
        let code = JsExpr::from(s.as_str()).to_js_code(&WriterSettings::default());
        prop_assert!(validate_expression(&code).is_ok(), "not parsable: {}", code);
    }

    /// Escaped output never contains a raw line break
    #[test]
    fn prop_escape_has_no_line_breaks(s in text_strategy()) {
        let escaped = escape_js_string(&s);
        prop_assert!(!escaped.contains('\n') && !escaped.contains('\r'));
    }

    /// Plus on two string literals is string concatenation
    #[test]
    fn prop_plus_folds_strings(a in text_strategy(), b in text_strategy()) {
        let folded = JsExpr::from(a.as_str()).plus(b.as_str());
        let expected = format!("{}{}", a, b);
        prop_assert_eq!(folded.as_str_literal(), Some(expected.as_str()));
    }

    /// Plus on two integer literals is addition
    #[test]
    fn prop_plus_folds_ints(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(JsExpr::from(a).plus(b), JsExpr::Int(a + b));
    }

    /// Rendering is pure: the same value renders to the same text
    #[test]
    fn prop_render_is_stable(keys in prop::collection::vec("[a-z]{1,8}", 0..8)) {
        let obj: JsAssocArray = keys.iter().map(|k| (k.as_str(), k.len())).collect();
        let settings = WriterSettings::pretty();
        prop_assert_eq!(obj.to_js_code(&settings), obj.to_js_code(&settings));
        let code = format!("({})", obj.to_js_code(&WriterSettings::default()));
        prop_assert!(validate_expression(&code).is_ok());
    }
}
