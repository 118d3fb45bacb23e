//! Core engine types: errors, random source, configuration.
//!
//! These are shared by every other module and carry no combat rules of
//! their own.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, PacingConfig};
pub use error::{CombatError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceRng};
