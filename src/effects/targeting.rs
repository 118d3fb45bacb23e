//! Attack targeting.
//!
//! Defines how an attack picks its recipients from the candidate pool:
//! - `AttackMode`: area, random or single
//! - `TargetResolver`: turns a mode into pool indices
//!
//! Recipients are indices into the caller-owned pool, in the order damage is
//! applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CombatError, RandomSource, Result};

/// Recipient list for one attack iteration.
///
/// SmallVec keeps the common pool sizes (1-4 enemies) off the heap.
pub type Recipients = SmallVec<[usize; 4]>;

/// How an attack selects recipients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackMode {
    /// Every candidate, in pool order.
    Aoe,
    /// One candidate drawn uniformly, fresh for each iteration.
    Random,
    /// The declared target.
    Single,
}

impl AttackMode {
    /// Mode for an attack's modifier flags. Area wins over random.
    #[must_use]
    pub const fn select(aoe: bool, random: bool) -> Self {
        match (aoe, random) {
            (true, _) => Self::Aoe,
            (false, true) => Self::Random,
            (false, false) => Self::Single,
        }
    }
}

/// Resolves an attack mode against a candidate pool.
pub struct TargetResolver;

impl TargetResolver {
    /// Select recipients for one attack iteration.
    ///
    /// - `Aoe` / `Random` against an empty pool fail with `NoValidTargets`
    /// - `Single` without a declared target, or with one outside the pool,
    ///   fails with `NoTarget`
    pub fn resolve<T>(
        mode: AttackMode,
        pool: &[T],
        declared: Option<usize>,
        rng: &mut dyn RandomSource,
    ) -> Result<Recipients> {
        match mode {
            AttackMode::Aoe => {
                if pool.is_empty() {
                    return Err(CombatError::NoValidTargets);
                }
                Ok((0..pool.len()).collect())
            }
            AttackMode::Random => {
                if pool.is_empty() {
                    return Err(CombatError::NoValidTargets);
                }
                let index = rng.next_index(pool.len());
                Ok(SmallVec::from_slice(&[index]))
            }
            AttackMode::Single => match declared {
                Some(index) if index < pool.len() => Ok(SmallVec::from_slice(&[index])),
                _ => Err(CombatError::NoTarget),
            },
        }
    }
}
