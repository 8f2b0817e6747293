//! Enumerated value domains.

use std::borrow::Borrow;
use std::collections::BTreeSet;

/// An ordered set of permitted values.
///
/// Keeps the order the values were declared in (for display and for
/// violation messages) alongside a sorted index for membership checks.
/// Duplicates are collapsed to their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain<T: Ord> {
    values: Vec<T>,
    index: BTreeSet<T>,
}

impl<T: Ord> Domain<T> {
    pub const fn empty() -> Self {
        Self {
            values: Vec::new(),
            index: BTreeSet::new(),
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.contains(value)
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Ord + Clone> FromIterator<T> for Domain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut domain = Self::empty();
        for value in iter {
            if domain.index.insert(value.clone()) {
                domain.values.push(value);
            }
        }
        domain
    }
}

impl<T: Ord> Default for Domain<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declaration_order_and_drops_duplicates() {
        let domain: Domain<String> = ["Male", "Female", "Male"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(domain.values(), ["Male".to_string(), "Female".to_string()]);
        assert!(domain.contains("Female"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let domain: Domain<String> = std::iter::once("Nausea".to_string()).collect();
        assert!(!domain.contains("nausea"));
    }
}
