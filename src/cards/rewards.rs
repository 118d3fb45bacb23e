//! Reward card selection.
//!
//! A reward roll picks a slot uniformly, then a rarity from the configured
//! weights, then a card uniformly from that slot/rarity bucket. All draws come
//! from the same `RandomSource` used for combat targeting.
//!
//! An empty bucket falls back to every rollable card of the slot; if that is
//! empty too the roll fails with `EmptyCardPool`.

use crate::core::{CombatError, EngineConfig, RandomSource, Result};

use super::definition::{CardDescriptor, Rarity, Slot};
use super::loadout::Loadout;
use super::registry::CardCatalog;

/// Rejection-sampling budget per requested reward in [`RewardPicker::pick_distinct`].
const ATTEMPTS_PER_REWARD: usize = 64;

/// Draws reward cards from a catalog.
pub struct RewardPicker<'a> {
    catalog: &'a CardCatalog,
    config: &'a EngineConfig,
}

impl<'a> RewardPicker<'a> {
    #[must_use]
    pub const fn new(catalog: &'a CardCatalog, config: &'a EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Roll a rarity from the configured weights.
    pub fn roll_rarity(&self, rng: &mut dyn RandomSource) -> Rarity {
        self.config.rarity_for_roll(rng.next_unit())
    }

    /// True if a reward roll can ever produce this rarity.
    fn is_rollable(&self, rarity: Rarity) -> bool {
        self.config.rarity_weights.iter().any(|(r, _)| *r == rarity)
    }

    /// Draw a card for a slot.
    pub fn pick_for_slot(&self, slot: Slot, rng: &mut dyn RandomSource) -> Result<&'a CardDescriptor> {
        let rarity = self.roll_rarity(rng);
        let mut bucket: Vec<_> = if self.is_rollable(rarity) {
            self.catalog.bucket(slot, rarity).collect()
        } else {
            Vec::new()
        };

        if bucket.is_empty() {
            tracing::debug!(?slot, ?rarity, "empty reward bucket, falling back to any rarity");
            bucket = self
                .catalog
                .find(|c| c.slot() == slot && self.is_rollable(c.rarity()))
                .collect();
        }

        if bucket.is_empty() {
            return Err(CombatError::EmptyCardPool { slot });
        }
        Ok(bucket[rng.next_index(bucket.len())])
    }

    /// Draw a card for a uniformly chosen slot.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Result<&'a CardDescriptor> {
        let slot = Slot::ALL[rng.next_index(Slot::ALL.len())];
        self.pick_for_slot(slot, rng)
    }

    /// Draw `count` distinct cards, none of which is currently equipped.
    ///
    /// Fails up front with `NotEnoughRewards` when fewer eligible cards exist.
    /// If random draws keep colliding, the remainder is filled with eligible
    /// cards in catalog order.
    pub fn pick_distinct(
        &self,
        count: usize,
        loadout: &Loadout,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<&'a CardDescriptor>> {
        let eligible: Vec<&'a CardDescriptor> = self
            .catalog
            .find(|c| self.is_rollable(c.rarity()) && !loadout.is_equipped(c))
            .collect();
        if eligible.len() < count {
            return Err(CombatError::NotEnoughRewards {
                requested: count,
                available: eligible.len(),
            });
        }

        let mut picked: Vec<&'a CardDescriptor> = Vec::with_capacity(count);
        let mut attempts = 0;
        while picked.len() < count && attempts < count * ATTEMPTS_PER_REWARD {
            attempts += 1;
            let card = match self.pick(rng) {
                Ok(card) => card,
                Err(CombatError::EmptyCardPool { .. }) => continue,
                Err(err) => return Err(err),
            };
            if !loadout.is_equipped(card) && !picked.iter().any(|p| p.name() == card.name()) {
                picked.push(card);
            }
        }

        if picked.len() < count {
            tracing::warn!(attempts, "reward draws exhausted, filling in catalog order");
            for card in eligible {
                if picked.len() == count {
                    break;
                }
                if !picked.iter().any(|p| p.name() == card.name()) {
                    picked.push(card);
                }
            }
        }

        Ok(picked)
    }
}
