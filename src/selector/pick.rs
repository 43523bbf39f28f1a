use crate::models::{ComboKey, Item, calorie_total};

/// A candidate triple borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Pick<'a> {
    pub main: &'a Item,
    pub side: &'a Item,
    pub drink: &'a Item,
}

impl<'a> Pick<'a> {
    pub fn new(main: &'a Item, side: &'a Item, drink: &'a Item) -> Self {
        Self { main, side, drink }
    }

    pub fn key(&self) -> ComboKey {
        ComboKey::new(self.main, self.side, self.drink)
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        calorie_total(self.main, self.side, self.drink)
    }
}
