use serde::Serialize;

use crate::error::{MenuError, Result};
use crate::models::{Category, Item};

/// Item names available per category, reported when a bucket is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvailableItems {
    pub mains: Vec<String>,
    pub sides: Vec<String>,
    pub drinks: Vec<String>,
}

/// The menu partitioned into main, side, and drink buckets.
///
/// Bucket order follows load order and is used to break ties.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    mains: Vec<Item>,
    sides: Vec<Item>,
    drinks: Vec<Item>,
}

impl Catalog {
    /// Partition items into buckets, rejecting duplicate names.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut catalog = Self::default();
        for item in items {
            if catalog.get(&item.name).is_some() {
                return Err(MenuError::DuplicateItem(item.name));
            }
            match item.category {
                Category::Main => catalog.mains.push(item),
                Category::Side => catalog.sides.push(item),
                Category::Drink => catalog.drinks.push(item),
            }
        }
        Ok(catalog)
    }

    pub fn mains(&self) -> &[Item] {
        &self.mains
    }

    pub fn sides(&self) -> &[Item] {
        &self.sides
    }

    pub fn drinks(&self) -> &[Item] {
        &self.drinks
    }

    /// Look up an item by exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items().find(|item| item.name == name)
    }

    /// All items, mains first, then sides, then drinks.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.mains.iter().chain(&self.sides).chain(&self.drinks)
    }

    /// Number of distinct main/side/drink triples.
    pub fn cross_product_size(&self) -> usize {
        self.mains.len() * self.sides.len() * self.drinks.len()
    }

    /// True when every bucket has at least one item.
    pub fn is_complete(&self) -> bool {
        !self.mains.is_empty() && !self.sides.is_empty() && !self.drinks.is_empty()
    }

    /// Fail with [`MenuError::EmptyCategory`] unless every bucket is filled.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(MenuError::EmptyCategory(self.available_items()))
        }
    }

    pub fn available_items(&self) -> AvailableItems {
        let names =
            |items: &[Item]| -> Vec<String> { items.iter().map(|i| i.name.clone()).collect() };
        AvailableItems {
            mains: names(&self.mains),
            sides: names(&self.sides),
            drinks: names(&self.drinks),
        }
    }

    pub fn len(&self) -> usize {
        self.mains.len() + self.sides.len() + self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("Burger", Category::Main, 650.0, "savory", 0.9),
            Item::new("Tacos", Category::Main, 550.0, "spicy", 0.8),
            Item::new("Fries", Category::Side, 350.0, "savory", 0.7),
            Item::new("Cola", Category::Drink, 150.0, "sweet", 0.6),
        ]
    }

    #[test]
    fn test_partition_keeps_load_order() {
        let catalog = Catalog::new(sample_items()).unwrap();
        assert_eq!(catalog.mains().len(), 2);
        assert_eq!(catalog.mains()[0].name, "Burger");
        assert_eq!(catalog.mains()[1].name, "Tacos");
        assert_eq!(catalog.sides().len(), 1);
        assert_eq!(catalog.drinks().len(), 1);
        assert_eq!(catalog.cross_product_size(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut items = sample_items();
        items.push(Item::new("Fries", Category::Side, 300.0, "salty", 0.5));
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, MenuError::DuplicateItem(name) if name == "Fries"));
    }

    #[test]
    fn test_ensure_complete_lists_available() {
        let items = vec![Item::new("Burger", Category::Main, 650.0, "savory", 0.9)];
        let catalog = Catalog::new(items).unwrap();

        match catalog.ensure_complete() {
            Err(MenuError::EmptyCategory(available)) => {
                assert_eq!(available.mains, vec!["Burger".to_string()]);
                assert!(available.sides.is_empty());
                assert!(available.drinks.is_empty());
            }
            other => panic!("expected EmptyCategory, got {:?}", other),
        }
    }
}
