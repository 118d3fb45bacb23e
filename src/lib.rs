//! # card-combat
//!
//! Rules engine for a turn-based card combat game.
//!
//! ## Design Principles
//!
//! 1. **Text-Driven Cards**: Card behavior comes from parsing a short
//!    description ("Attack for 2, randomly, 3 times. Heal for 1"), compiled
//!    once when the catalog loads.
//!
//! 2. **Stepwise Resolution**: Actions are applied one step at a time with
//!    explicit boundaries, so a presentation layer can pause between steps
//!    without the rules engine knowing about timing.
//!
//! 3. **Deterministic**: All randomness flows through one seedable
//!    `RandomSource`. Same seed, same combat.
//!
//! ## Architecture
//!
//! - **Combat Units**: Plain `i64` state with explicit damage kinds. Damage
//!   from attacks reflects through spikes; burn, poison and spike damage
//!   never do.
//!
//! - **Context Collaborators**: Card draw and presentation cues are boxed
//!   closures on a `ResolverContext`, supplied by the game.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration
//! - `units`: Combat unit state machine
//! - `effects`: Description parser, target resolver, effect sequencer
//! - `cards`: Card definitions, catalog, loadout, rewards

pub mod cards;
pub mod core;
pub mod effects;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    CombatError, EngineConfig, GameRng, GameRngState, PacingConfig, RandomSource, Result,
    SequenceRng,
};

pub use crate::units::{Buffs, CombatUnit, DamageKind, DamageReport, StatusTicks};

pub use crate::effects::{
    parse_description, parse_lenient, ActionSequence, ActionSpec, AttackMode, BuffKind,
    Combatants, Cue, EffectSequencer, ResolverContext, StepBoundary, TargetResolver,
};

pub use crate::cards::{
    CardCatalog, CardDescriptor, CardEntry, Loadout, Rarity, RewardPicker, Slot, TargetMode,
};
