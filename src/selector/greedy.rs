use tracing::debug;

use crate::models::{Catalog, Item};
use crate::selector::constants::BATCH_SIZE;
use crate::selector::pick::Pick;
use crate::state::UsageTracker;

/// Bucket items ordered by usage count, ties kept in catalog order.
fn by_usage<'a>(items: &'a [Item], tracker: &UsageTracker) -> Vec<&'a Item> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by_key(|item| tracker.usage(&item.name));
    ordered
}

/// Least-used unused triple.
///
/// The first candidate pairs the least-used item of each bucket. When that
/// key is already used, walks the usage-ordered cross-product (main outer,
/// drink inner) for the next unused key. `None` means every key is used.
pub fn least_used_unused<'a>(catalog: &'a Catalog, tracker: &UsageTracker) -> Option<Pick<'a>> {
    let mains = by_usage(catalog.mains(), tracker);
    let sides = by_usage(catalog.sides(), tracker);
    let drinks = by_usage(catalog.drinks(), tracker);

    for &main in &mains {
        for &side in &sides {
            for &drink in &drinks {
                let pick = Pick::new(main, side, drink);
                if !tracker.is_used(&pick.key()) {
                    return Some(pick);
                }
            }
        }
    }
    None
}

/// Select a batch with the least-usage-first policy.
///
/// A full reset happens first if every item has been served. Within a slot,
/// exhausting the cross-product clears the used-set (counts kept) and the
/// slot is retried; a single-combo catalog gets a full reset instead.
pub fn select_batch<'a>(catalog: &'a Catalog, tracker: &mut UsageTracker) -> Vec<Pick<'a>> {
    let total = catalog.cross_product_size();
    let mut picks = Vec::with_capacity(BATCH_SIZE);
    if total == 0 {
        return picks;
    }

    if tracker.all_used_at_least_once() {
        debug!("every item served at least once, resetting usage");
        tracker.reset();
    }

    for _ in 0..BATCH_SIZE {
        let pick = match least_used_unused(catalog, tracker) {
            Some(pick) => pick,
            None => {
                debug_assert!(tracker.is_exhausted(total));
                if total == 1 {
                    debug!("single combo exhausted, resetting usage");
                    tracker.reset();
                } else {
                    debug!(total, "all combos served, clearing used set");
                    tracker.clear_used();
                }
                match least_used_unused(catalog, tracker) {
                    Some(pick) => pick,
                    None => break,
                }
            }
        };

        tracker.record(&pick.key());
        debug!(
            main = %pick.main.name,
            side = %pick.side.name,
            drink = %pick.drink.name,
            "picked combo"
        );
        picks.push(pick);
    }

    picks
}
