//! Name - a first/family name pair with a family-first natural order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    first_name: String,
    family_name: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// First and family name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
        trace!(first_name = %self.first_name, "first name updated");
    }

    pub fn set_family_name(&mut self, family_name: impl Into<String>) {
        self.family_name = family_name.into();
        trace!(family_name = %self.family_name, "family name updated");
    }
}

impl Ord for Name {
    /// Family name first, first name breaks ties
    fn cmp(&self, other: &Self) -> Ordering {
        self.family_name
            .cmp(&other.family_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.family_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut name = Name::new("Sarah", "Ball");
        assert_eq!(name.full_name(), "Sarah Ball");

        name.set_family_name("Hall");
        assert_eq!(name.full_name(), "Sarah Hall");
        assert_eq!(Name::default().full_name(), " ");
    }

    #[test]
    fn test_family_name_orders_first() {
        let adams = Name::new("Zoe", "Adams");
        let baker = Name::new("Anna", "Baker");
        assert_eq!(adams.cmp(&baker), Ordering::Less);

        // Same family name: first name decides
        let anna = Name::new("Anna", "Ball");
        let sarah = Name::new("Sarah", "Ball");
        assert!(anna < sarah);
        assert_eq!(sarah.cmp(&sarah.clone()), Ordering::Equal);
    }

    #[test]
    fn test_order_consistent_with_eq() {
        let a = Name::new("Sarah", "Ball");
        let b = Name::new("sarah", "Ball");
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
    }
}
