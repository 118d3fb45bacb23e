//! Action specifications.
//!
//! An `ActionSpec` is one primitive step of a card's effect, produced once by
//! the parser and cached on the card. The sequencer matches on it
//! exhaustively, so adding a variant is a compile error until every
//! consumer handles it.

use serde::{Deserialize, Serialize};

use super::targeting::AttackMode;

/// Stat a buff accumulates into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    Attack,
    Defense,
    Healing,
    Burn,
    Poison,
    Spike,
}

impl BuffKind {
    /// Every buff kind, in declaration order.
    pub const ALL: [BuffKind; 6] = [
        BuffKind::Attack,
        BuffKind::Defense,
        BuffKind::Healing,
        BuffKind::Burn,
        BuffKind::Poison,
        BuffKind::Spike,
    ];

    /// Parse the authored stat name. `Attacks` is accepted for `Attack`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Attack" | "Attacks" => Some(Self::Attack),
            "Defense" => Some(Self::Defense),
            "Healing" => Some(Self::Healing),
            "Burn" => Some(Self::Burn),
            "Poison" => Some(Self::Poison),
            "Spike" => Some(Self::Spike),
            _ => None,
        }
    }
}

/// A primitive action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSpec {
    /// Deal attack damage, `repeat` times.
    Attack {
        amount: i64,
        aoe: bool,
        random: bool,
        repeat: u32,
    },
    Defend { amount: i64 },
    Heal { amount: i64 },
    Burn { amount: i64 },
    Poison { amount: i64 },
    Spike { amount: i64 },
    Draw { count: u32 },
    Cleanse,
    Buff { kind: BuffKind, amount: i64 },
}

impl ActionSpec {
    /// Single deterministic attack.
    #[must_use]
    pub const fn attack(amount: i64) -> Self {
        Self::Attack {
            amount,
            aoe: false,
            random: false,
            repeat: 1,
        }
    }

    /// Number of sequencer steps this action takes.
    #[must_use]
    pub const fn step_count(&self) -> u32 {
        match self {
            Self::Attack { repeat, .. } => *repeat,
            _ => 1,
        }
    }

    /// Targeting mode for an attack. `None` for every other action.
    #[must_use]
    pub const fn attack_mode(&self) -> Option<AttackMode> {
        match self {
            Self::Attack { aoe, random, .. } => Some(AttackMode::select(*aoe, *random)),
            _ => None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Attack { .. } => "Attack",
            Self::Defend { .. } => "Defend",
            Self::Heal { .. } => "Heal",
            Self::Burn { .. } => "Burn",
            Self::Poison { .. } => "Poison",
            Self::Spike { .. } => "Spike",
            Self::Draw { .. } => "Draw",
            Self::Cleanse => "Cleanse",
            Self::Buff { .. } => "Buff",
        }
    }
}
