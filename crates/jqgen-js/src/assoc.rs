//! Object literals

use crate::code::HasJsCode;
use crate::escape::quote_js_string;
use crate::expr::JsExpr;
use crate::formatter::JsFormatter;
use indexmap::IndexMap;

/// Insertion-ordered object literal, rendered as `{'key':value}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsAssocArray {
    entries: IndexMap<String, JsExpr>,
}

impl JsAssocArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn add(mut self, key: impl Into<String>, value: impl Into<JsExpr>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert or replace, keeping the original position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsExpr>) -> Option<JsExpr> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&JsExpr> {
        self.entries.get(key)
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<JsExpr> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsExpr)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<JsExpr>> FromIterator<(K, V)> for JsAssocArray {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl HasJsCode for JsAssocArray {
    fn generate(&self, f: &mut JsFormatter<'_>) {
        f.plain_char('{');
        if self.entries.is_empty() {
            f.plain_char('}');
            return;
        }
        f.nl().indent();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.plain_char(',').nl();
            }
            let quoted = quote_js_string(key, f.settings().quote_style);
            f.plain(&quoted).plain_char(':');
            value.generate(f);
        }
        f.nl().outdent().plain_char('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WriterSettings;

    #[test]
    fn test_compact() {
        let obj = JsAssocArray::new().add("cache", false).add("url", "/x");
        assert_eq!(
            obj.to_js_code(&WriterSettings::default()),
            "{'cache':false,'url':'\\/x'}"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(JsAssocArray::new().to_js_code(&WriterSettings::pretty()), "{}");
    }

    #[test]
    fn test_pretty() {
        let obj = JsAssocArray::new().add("a", 1).add("b", 2);
        assert_eq!(
            obj.to_js_code(&WriterSettings::pretty()),
            "{\n  'a':1,\n  'b':2\n}"
        );
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut obj: JsAssocArray = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(obj.insert("a", 3), Some(JsExpr::Int(1)));
        let keys: Vec<_> = obj.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(obj.remove("a"), Some(JsExpr::Int(3)));
        assert_eq!(obj.len(), 1);
    }
}
