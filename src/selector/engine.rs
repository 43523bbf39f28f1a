use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Catalog, Combo};
use crate::selector::remarks::{RemarkStyle, compose_remark};
use crate::selector::{diverse, greedy};
use crate::state::UsageTracker;

/// Which selection policy a selector runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Least-used items first, cycling through every triple.
    #[default]
    Greedy,
    /// Shuffled, calorie-matched batches with no repeated item.
    Diverse,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Greedy => "greedy",
            Policy::Diverse => "diverse",
        }
    }

    /// Remark style used when none is configured.
    pub fn default_remark_style(&self) -> RemarkStyle {
        match self {
            Policy::Greedy => RemarkStyle::Sentence,
            Policy::Diverse => RemarkStyle::TagList,
        }
    }
}

/// Selector settings.
#[derive(Debug, Clone, Default)]
pub struct SelectorConfig {
    pub policy: Policy,
    /// Overrides the policy's default remark style.
    pub remark_style: Option<RemarkStyle>,
    /// Seed for shuffling and sentence picks; entropy when unset.
    pub seed: Option<u64>,
}

/// Usage summary for a running selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorStats {
    pub policy: Policy,
    pub mains: usize,
    pub sides: usize,
    pub drinks: usize,
    /// Combos emitted since the last reset.
    pub combos_served: usize,
    /// Distinct main/side/drink triples in the catalog.
    pub total_combinations: usize,
}

/// Owns the catalog, usage state, and RNG for one stream of batches.
pub struct ComboSelector {
    catalog: Catalog,
    tracker: UsageTracker,
    policy: Policy,
    remark_style: RemarkStyle,
    rng: StdRng,
}

impl ComboSelector {
    pub fn new(catalog: Catalog, config: SelectorConfig) -> Self {
        let tracker = UsageTracker::new(&catalog);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let remark_style = config
            .remark_style
            .unwrap_or_else(|| config.policy.default_remark_style());

        info!(
            policy = config.policy.as_str(),
            remarks = ?remark_style,
            items = catalog.len(),
            "combo selector ready"
        );

        Self {
            catalog,
            tracker,
            policy: config.policy,
            remark_style,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tracker(&self) -> &UsageTracker {
        &self.tracker
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn remark_style(&self) -> RemarkStyle {
        self.remark_style
    }

    /// Produce the next batch of up to three combos.
    ///
    /// Fails with `EmptyCategory` when a bucket has no items. An empty batch
    /// means nothing new is left to offer.
    pub fn generate_combos(&mut self) -> Result<Vec<Combo>> {
        self.catalog.ensure_complete()?;

        let picks = match self.policy {
            Policy::Greedy => greedy::select_batch(&self.catalog, &mut self.tracker),
            Policy::Diverse => {
                diverse::select_batch(&self.catalog, &mut self.tracker, &mut self.rng)
            }
        };

        let mut combos = Vec::with_capacity(picks.len());
        for pick in picks {
            let remark = compose_remark(
                self.remark_style,
                pick.main,
                pick.side,
                pick.drink,
                &mut self.rng,
            );
            combos.push(Combo::new(
                pick.main.clone(),
                pick.side.clone(),
                pick.drink.clone(),
                remark,
            ));
        }

        debug!(
            count = combos.len(),
            served = self.tracker.used_len(),
            "generated combos"
        );
        Ok(combos)
    }

    /// Forget all usage and start a fresh cycle.
    pub fn reset(&mut self) {
        self.tracker.reset();
        info!("usage state reset");
    }

    pub fn stats(&self) -> SelectorStats {
        SelectorStats {
            policy: self.policy,
            mains: self.catalog.mains().len(),
            sides: self.catalog.sides().len(),
            drinks: self.catalog.drinks().len(),
            combos_served: self.tracker.used_len(),
            total_combinations: self.catalog.cross_product_size(),
        }
    }
}
