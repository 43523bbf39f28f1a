pub mod catalog;
pub mod combo;
pub mod item;

pub use catalog::{AvailableItems, Catalog};
pub use combo::{Combo, ComboKey, calorie_total};
pub use item::{Category, Item};
