use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::models::{Catalog, Item};
use crate::selector::constants::{BATCH_SIZE, CALORIE_TOLERANCE};
use crate::selector::pick::Pick;
use crate::state::UsageTracker;

/// Item names already placed in the current batch, per category.
#[derive(Debug, Default)]
struct BatchUsage<'a> {
    mains: HashSet<&'a str>,
    sides: HashSet<&'a str>,
    drinks: HashSet<&'a str>,
}

impl<'a> BatchUsage<'a> {
    fn insert(&mut self, pick: &Pick<'a>) {
        self.mains.insert(pick.main.name.as_str());
        self.sides.insert(pick.side.name.as_str());
        self.drinks.insert(pick.drink.name.as_str());
    }

    fn overlaps(&self, pick: &Pick<'_>) -> bool {
        self.mains.contains(pick.main.name.as_str())
            || self.sides.contains(pick.side.name.as_str())
            || self.drinks.contains(pick.drink.name.as_str())
    }
}

fn shuffled<'a, R: Rng + ?Sized>(items: &'a [Item], rng: &mut R) -> Vec<&'a Item> {
    let mut order: Vec<&Item> = items.iter().collect();
    order.shuffle(rng);
    order
}

/// Select a batch of calorie-matched combos with no repeated item.
///
/// The first unused triple in shuffled order sets the calorie target. Up to
/// two more combos follow, each within [`CALORIE_TOLERANCE`] of the target
/// and sharing no main, side, or drink with the batch. Returns an empty batch
/// only when no unused triple exists.
pub fn select_batch<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    tracker: &mut UsageTracker,
    rng: &mut R,
) -> Vec<Pick<'a>> {
    if tracker.is_exhausted(catalog.cross_product_size()) {
        debug!("all combos served, resetting usage");
        tracker.reset();
    }

    let mains = &shuffled(catalog.mains(), rng);
    let sides = &shuffled(catalog.sides(), rng);
    let drinks = &shuffled(catalog.drinks(), rng);

    let candidates = move || {
        mains.iter().flat_map(move |&main| {
            sides.iter().flat_map(move |&side| {
                drinks
                    .iter()
                    .map(move |&drink| Pick::new(main, side, drink))
            })
        })
    };

    let Some(base) = candidates().find(|pick| !tracker.is_used(&pick.key())) else {
        debug!("no unused combos left");
        return Vec::new();
    };

    let target = base.calories();
    let mut batch = BatchUsage::default();
    let mut picks = Vec::with_capacity(BATCH_SIZE);

    tracker.record(&base.key());
    batch.insert(&base);
    picks.push(base);
    debug!(target_calories = target, main = %base.main.name, "base combo sets calorie target");

    for pick in candidates() {
        if picks.len() >= BATCH_SIZE {
            break;
        }
        if batch.overlaps(&pick) || (pick.calories() - target).abs() > CALORIE_TOLERANCE {
            continue;
        }
        if !tracker.record(&pick.key()) {
            continue;
        }
        batch.insert(&pick);
        picks.push(pick);
    }

    debug!(count = picks.len(), "diverse batch selected");
    picks
}
