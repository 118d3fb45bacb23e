//! Combat participants.
//!
//! - `CombatUnit`: life, defense, status counters and buffs
//! - `DamageKind`: how incoming damage interacts with defense and spikes
//! - `DamageReport` / `StatusTicks`: what a mutation did, for cues and logs

mod unit;

pub use unit::{Buffs, CombatUnit, DamageKind, DamageReport, StatusTicks};
