pub mod render;

pub use render::{display_catalog, display_combos, display_item_list};
