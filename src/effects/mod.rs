//! Effect system for card actions.
//!
//! Card descriptions compile to `ActionSpec` lists, which the sequencer
//! applies to combat units:
//! - `parser`: description text to `ActionSpec`
//! - `TargetResolver`: which pool indices an attack iteration hits
//! - `ActionSequence` / `EffectSequencer`: ordered, stepwise execution
//!
//! ## Determinism
//!
//! The only randomness is random-target selection, drawn from the
//! `RandomSource` on the `ResolverContext`. The same seed and inputs always
//! produce the same outcome.

mod action;
mod parser;
mod sequencer;
mod targeting;

pub use action::{ActionSpec, BuffKind};
pub use parser::{parse_clause, parse_description, parse_lenient, ParsedDescription};
pub use sequencer::{ActionSequence, Combatants, Cue, EffectSequencer, ResolverContext, StepBoundary};
pub use targeting::{AttackMode, Recipients, TargetResolver};
