//! Ordered list of selectors joined as descendants

use crate::selector::Selector;
use jqgen_js::{GenError, JsExpr, Result};

/// Mutable, ordered collection of [`Selector`]s
///
/// Rendered by joining all selectors with a single space, so `[A, B, C]`
/// selects `C` inside `B` inside `A`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selector
    pub fn add(&mut self, selector: Selector) -> &mut Self {
        self.selectors.push(selector);
        self
    }

    /// Remove the selector at `index`, or `None` when out of range
    pub fn remove_at(&mut self, index: usize) -> Option<Selector> {
        if index < self.selectors.len() {
            Some(self.selectors.remove(index))
        } else {
            None
        }
    }

    /// Remove the first selector equal to `selector`; returns whether one was found
    pub fn remove(&mut self, selector: &Selector) -> bool {
        match self.selectors.iter().position(|s| s == selector) {
            Some(index) => {
                self.selectors.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy of all selectors in insertion order
    pub fn all(&self) -> Vec<Selector> {
        self.selectors.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.selectors.iter()
    }

    pub fn clear(&mut self) {
        self.selectors.clear();
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// All selectors joined with a space
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidState`] when the list is empty.
    pub fn to_expression(&self) -> Result<JsExpr> {
        let mut iter = self.selectors.iter();
        let first = iter
            .next()
            .ok_or_else(|| GenError::invalid_state("selector list is empty"))?;
        Ok(iter.fold(first.expression().clone(), |acc, next| {
            acc.plus(JsExpr::str_static(" ")).plus(next.expression().clone())
        }))
    }
}

impl FromIterator<Selector> for SelectorList {
    fn from_iter<I: IntoIterator<Item = Selector>>(iter: I) -> Self {
        Self {
            selectors: iter.into_iter().collect(),
        }
    }
}

impl Extend<Selector> for SelectorList {
    fn extend<I: IntoIterator<Item = Selector>>(&mut self, iter: I) {
        self.selectors.extend(iter);
    }
}

impl TryFrom<&SelectorList> for JsExpr {
    type Error = GenError;

    fn try_from(value: &SelectorList) -> Result<Self> {
        value.to_expression()
    }
}

impl TryFrom<SelectorList> for JsExpr {
    type Error = GenError;

    fn try_from(value: SelectorList) -> Result<Self> {
        value.to_expression()
    }
}
