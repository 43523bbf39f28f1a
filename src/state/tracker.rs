use std::collections::{HashMap, HashSet};

use crate::models::{Catalog, ComboKey};

/// Tracks how often each item has been served and which combos were emitted.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    /// Usage count keyed by item name.
    counts: HashMap<String, u32>,
    /// Combos emitted since the last reset.
    used: HashSet<ComboKey>,
}

impl UsageTracker {
    /// Track every catalog item, all at zero usage.
    pub fn new(catalog: &Catalog) -> Self {
        let counts = catalog.items().map(|item| (item.name.clone(), 0)).collect();
        Self {
            counts,
            used: HashSet::new(),
        }
    }

    /// Record an emitted combo: bump each item's count and remember the key.
    ///
    /// Returns `false` without touching any counter if the key is already used.
    pub fn record(&mut self, key: &ComboKey) -> bool {
        if !self.used.insert(key.clone()) {
            return false;
        }
        for name in key.names() {
            *self.counts.entry(name.to_string()).or_insert(0) += 1;
        }
        true
    }

    /// Zero every count and forget all emitted combos.
    pub fn reset(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
        self.used.clear();
    }

    /// Forget emitted combos but keep usage counts.
    pub fn clear_used(&mut self) {
        self.used.clear();
    }

    /// Whether every tracked item has been served at least once.
    pub fn all_used_at_least_once(&self) -> bool {
        self.counts.values().all(|&count| count > 0)
    }

    /// Whether the used-set covers all `total_combos` possible triples.
    pub fn is_exhausted(&self, total_combos: usize) -> bool {
        self.used.len() >= total_combos
    }

    /// Usage count for an item; untracked names count as zero.
    pub fn usage(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn is_used(&self, key: &ComboKey) -> bool {
        self.used.contains(key)
    }

    /// Number of combos emitted since the last reset.
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    /// Number of tracked items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
