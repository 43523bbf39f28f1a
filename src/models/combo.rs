use crate::models::Item;

/// Summed calories of a main, side, and drink.
#[inline]
pub fn calorie_total(main: &Item, side: &Item, drink: &Item) -> f64 {
    main.calories + side.calories + drink.calories
}

/// Identity of a combination: the ordered (main, side, drink) name triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboKey {
    pub main: String,
    pub side: String,
    pub drink: String,
}

impl ComboKey {
    pub fn new(main: &Item, side: &Item, drink: &Item) -> Self {
        Self {
            main: main.name.clone(),
            side: side.name.clone(),
            drink: drink.name.clone(),
        }
    }

    pub fn names(&self) -> [&str; 3] {
        [&self.main, &self.side, &self.drink]
    }
}

/// A selected main + side + drink with its remark.
#[derive(Debug, Clone)]
pub struct Combo {
    pub main: Item,
    pub side: Item,
    pub drink: Item,
    pub remark: String,
}

impl Combo {
    pub fn new(main: Item, side: Item, drink: Item, remark: String) -> Self {
        Self {
            main,
            side,
            drink,
            remark,
        }
    }

    /// Summed calories of all three items.
    #[inline]
    pub fn total_calories(&self) -> f64 {
        calorie_total(&self.main, &self.side, &self.drink)
    }

    pub fn key(&self) -> ComboKey {
        ComboKey::new(&self.main, &self.side, &self.drink)
    }
}
