mod loader;
mod tracker;

pub use loader::{load_catalog, read_catalog};
pub use tracker::UsageTracker;
