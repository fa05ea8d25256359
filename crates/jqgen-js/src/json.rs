//! JSON values as JavaScript literals

use crate::assoc::JsAssocArray;
use crate::expr::JsExpr;
use serde_json::{Number, Value};

fn number_to_expr(n: &Number) -> JsExpr {
    if let Some(i) = n.as_i64() {
        JsExpr::Int(i)
    } else if let Some(u) = n.as_u64() {
        JsExpr::from(u)
    } else {
        n.as_f64().map(JsExpr::Number).unwrap_or(JsExpr::Null)
    }
}

impl From<&Value> for JsExpr {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsExpr::Null,
            Value::Bool(b) => JsExpr::Bool(*b),
            Value::Number(n) => number_to_expr(n),
            Value::String(s) => JsExpr::from(s.as_str()),
            Value::Array(items) => JsExpr::Array(items.iter().map(JsExpr::from).collect()),
            Value::Object(map) => JsExpr::Object(
                map.iter()
                    .map(|(k, v)| (k.as_str(), JsExpr::from(v)))
                    .collect::<JsAssocArray>(),
            ),
        }
    }
}

impl From<Value> for JsExpr {
    fn from(value: Value) -> Self {
        JsExpr::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::HasJsCode;
    use crate::settings::WriterSettings;
    use serde_json::json;

    #[test]
    fn test_json_object() {
        let value = json!({"a": [1, 2.5, null], "b": {"c": "it's"}, "d": true});
        let expr = JsExpr::from(&value);
        assert_eq!(
            expr.to_js_code(&WriterSettings::default()),
            "{'a':[1,2.5,null],'b':{'c':'it\\'s'},'d':true}"
        );
    }

    #[test]
    fn test_large_unsigned() {
        let value = json!(u64::MAX);
        assert!(matches!(JsExpr::from(value), JsExpr::Number(_)));
    }
}
