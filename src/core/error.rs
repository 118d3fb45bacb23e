//! Error types for parsing, targeting and catalog operations.
//!
//! Failures are scoped to a single action application or a single catalog
//! operation. Nothing in the engine is fatal to the process.

use crate::cards::Slot;

/// Errors produced by the combat engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A description clause could not be recognized.
    ///
    /// This is a content bug: every shipped catalog entry must parse cleanly.
    #[error("unparsable action: {clause:?}")]
    UnparsableAction { clause: String },

    /// A buff clause named a stat that does not exist.
    #[error("unknown buff kind: {kind:?}")]
    UnknownBuffKind { kind: String },

    /// A single-target action was applied without a target.
    #[error("no target supplied for single-target action")]
    NoTarget,

    /// An area or random attack was resolved against an empty pool.
    #[error("no valid targets in candidate pool")]
    NoValidTargets,

    /// Two catalog entries share a name.
    #[error("duplicate card name: {name:?}")]
    DuplicateCard { name: String },

    /// A catalog lookup missed.
    #[error("unknown card: {name:?}")]
    UnknownCard { name: String },

    /// Reward selection found no card for the slot.
    #[error("no reward candidates for slot {slot:?}")]
    EmptyCardPool { slot: Slot },

    /// A distinct reward draw asked for more cards than exist.
    #[error("requested {requested} distinct rewards but only {available} are available")]
    NotEnoughRewards { requested: usize, available: usize },
}

impl CombatError {
    /// Shorthand for an unparsable clause.
    pub fn unparsable(clause: impl Into<String>) -> Self {
        Self::UnparsableAction {
            clause: clause.into(),
        }
    }

    /// Returns true for errors the parser reports and skips in lenient mode.
    pub const fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::UnparsableAction { .. } | Self::UnknownBuffKind { .. }
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, CombatError>;
