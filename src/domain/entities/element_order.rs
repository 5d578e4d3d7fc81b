use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementId {
    Logo,
    Search,
    Bookmarks,
}

impl ElementId {
    pub const ALL: [ElementId; 3] = [ElementId::Logo, ElementId::Search, ElementId::Bookmarks];

    pub fn label(self) -> &'static str {
        match self {
            ElementId::Logo => "Logo",
            ElementId::Search => "Search",
            ElementId::Bookmarks => "Bookmarks",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementOrderError {
    #[error("element order must list logo, search and bookmarks exactly once, got {0:?}")]
    NotAPermutation(Vec<ElementId>),
}

/// Display order of the page elements. Always a permutation of `ElementId::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ElementId>", into = "Vec<ElementId>")]
pub struct ElementOrder([ElementId; 3]);

impl ElementOrder {
    pub fn as_slice(&self) -> &[ElementId] {
        &self.0
    }

    /// Swaps `position` with its successor. No-op at the last position.
    pub fn move_down(&mut self, position: usize) {
        if position + 1 < self.0.len() {
            self.0.swap(position, position + 1);
        }
    }

    /// Button captions, e.g. `"1. Logo"`.
    pub fn labels(&self) -> Vec<String> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, element)| format!("{}. {}", index + 1, element.label()))
            .collect()
    }
}

impl Default for ElementOrder {
    fn default() -> Self {
        Self(ElementId::ALL)
    }
}

impl TryFrom<Vec<ElementId>> for ElementOrder {
    type Error = ElementOrderError;

    fn try_from(elements: Vec<ElementId>) -> Result<Self, Self::Error> {
        let complete = elements.len() == ElementId::ALL.len()
            && ElementId::ALL.iter().all(|id| elements.contains(id));
        match <[ElementId; 3]>::try_from(elements.as_slice()) {
            Ok(order) if complete => Ok(Self(order)),
            _ => Err(ElementOrderError::NotAPermutation(elements)),
        }
    }
}

impl From<ElementOrder> for Vec<ElementId> {
    fn from(order: ElementOrder) -> Self {
        order.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementId::*;

    #[test]
    fn moving_down_walks_to_a_fixed_point() {
        let mut order = ElementOrder::default();

        order.move_down(1);
        assert_eq!(order.as_slice(), &[Logo, Bookmarks, Search]);

        order.move_down(0);
        assert_eq!(order.as_slice(), &[Bookmarks, Logo, Search]);

        order.move_down(2);
        assert_eq!(order.as_slice(), &[Bookmarks, Logo, Search]);
    }

    #[test]
    fn every_permutation_is_reachable() {
        let mut seen = std::collections::HashSet::new();
        let mut order = ElementOrder::default();
        for position in [0, 1, 0, 1, 0, 1] {
            seen.insert(order);
            order.move_down(position);
        }
        seen.insert(order);
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn duplicates_and_omissions_are_rejected() {
        assert!(ElementOrder::try_from(vec![Logo, Logo, Search]).is_err());
        assert!(ElementOrder::try_from(vec![Logo, Search]).is_err());
        assert!(ElementOrder::try_from(vec![Search, Bookmarks, Logo]).is_ok());
        assert!(serde_json::from_str::<ElementOrder>(r#"["logo","search","search"]"#).is_err());
    }

    #[test]
    fn labels_are_numbered_from_one() {
        assert_eq!(
            ElementOrder::default().labels(),
            vec!["1. Logo", "2. Search", "3. Bookmarks"]
        );
    }
}
