//! Engine configuration.
//!
//! Callers configure the engine at startup by providing:
//! - `PacingConfig`: presentation pauses attached to sequencer steps
//! - rarity weights for reward rolls
//! - `EngineConfig`: combines all configuration
//!
//! Pacing values are hints for a presentation layer. They never change the
//! outcome of a combat.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::Rarity;

/// Presentation pauses, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause before each action of a card.
    pub action_delay_ms: u64,
    /// Pause between repeat iterations of a multi-attack.
    pub attack_delay_ms: u64,
    /// Pause between a status effect firing and its damage landing.
    pub effect_trigger_delay_ms: u64,
    /// Pause between the burn tick and the poison tick.
    pub between_effects_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            action_delay_ms: 500,
            attack_delay_ms: 750,
            effect_trigger_delay_ms: 500,
            between_effects_delay_ms: 1000,
        }
    }
}

impl PacingConfig {
    /// No pauses at all (headless simulation).
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            action_delay_ms: 0,
            attack_delay_ms: 0,
            effect_trigger_delay_ms: 0,
            between_effects_delay_ms: 0,
        }
    }

    #[must_use]
    pub const fn action_delay(&self) -> Duration {
        Duration::from_millis(self.action_delay_ms)
    }

    #[must_use]
    pub const fn attack_delay(&self) -> Duration {
        Duration::from_millis(self.attack_delay_ms)
    }

    #[must_use]
    pub const fn effect_trigger_delay(&self) -> Duration {
        Duration::from_millis(self.effect_trigger_delay_ms)
    }

    #[must_use]
    pub const fn between_effects_delay(&self) -> Duration {
        Duration::from_millis(self.between_effects_delay_ms)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Presentation pacing hints.
    pub pacing: PacingConfig,

    /// Reward rarity weights, walked in order as a cumulative sum.
    ///
    /// Weights are expected to sum to 1.0. A roll past the running total
    /// falls back to the last configured rarity (`Rarity::Common` if none).
    pub rarity_weights: Vec<(Rarity, f32)>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pacing: PacingConfig::default(),
            rarity_weights: vec![(Rarity::Common, 0.75), (Rarity::Rare, 0.25)],
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace pacing (builder pattern).
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the weight for a rarity, appending it if absent (builder pattern).
    #[must_use]
    pub fn with_rarity_weight(mut self, rarity: Rarity, weight: f32) -> Self {
        match self.rarity_weights.iter_mut().find(|(r, _)| *r == rarity) {
            Some(entry) => entry.1 = weight,
            None => self.rarity_weights.push((rarity, weight)),
        }
        self
    }

    /// Pick a rarity from a uniform roll in `[0, 1)`.
    ///
    /// Common covers `[0, 0.75]` and Rare `(0.75, 1.0]` with the defaults.
    #[must_use]
    pub fn rarity_for_roll(&self, roll: f64) -> Rarity {
        let mut running = 0.0f64;
        for &(rarity, weight) in &self.rarity_weights {
            running += f64::from(weight);
            if roll <= running {
                return rarity;
            }
        }
        let fallback = self
            .rarity_weights
            .last()
            .map_or(Rarity::Common, |&(rarity, _)| rarity);
        tracing::warn!(roll, ?fallback, "rarity roll past configured weights");
        fallback
    }
}
