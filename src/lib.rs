pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod selector;
pub mod server;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{Catalog, Combo, Item};
pub use selector::{ComboSelector, Policy, RemarkStyle, SelectorConfig};
