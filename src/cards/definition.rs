//! Card definitions - static card data.
//!
//! `CardEntry` is the authored input (name, slot, rarity, target mode,
//! description text). `CardDescriptor` is the loaded form: the same data plus
//! the description compiled to `ActionSpec`s once, at load time.

use serde::{Deserialize, Serialize};

use crate::core::CombatError;
use crate::effects::{parse_lenient, ActionSpec};

/// Equipment slot a card occupies. One active card per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    MainHand,
    OffHand,
    Ally,
    Spirit,
    Spell,
    Drink,
}

impl Slot {
    /// Every slot, in declaration order.
    pub const ALL: [Slot; 6] = [
        Slot::MainHand,
        Slot::OffHand,
        Slot::Ally,
        Slot::Spirit,
        Slot::Spell,
        Slot::Drink,
    ];

    /// Position in `Slot::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card rarity.
///
/// Starter cards form the default loadout; Common and Rare are drawn by
/// weighted reward rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Starter,
    Common,
    Rare,
}

/// Target the card asks the player for when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetMode {
    /// No target chosen (random attacks, self effects).
    None,
    /// A single enemy.
    Unit,
    /// The player.
    Self_,
    /// Every enemy.
    Aoe,
}

/// Authored card data, before parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub slot: Slot,
    pub rarity: Rarity,
    pub target_mode: TargetMode,
    pub description: String,
}

impl CardEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        slot: Slot,
        rarity: Rarity,
        target_mode: TargetMode,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            rarity,
            target_mode,
            description: description.into(),
        }
    }
}

/// Loaded card: authored data plus its compiled actions.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardDescriptor, CardEntry, Rarity, Slot, TargetMode};
/// use card_combat::effects::ActionSpec;
///
/// let spear = CardDescriptor::from_entry(CardEntry::new(
///     "Spear", Slot::MainHand, Rarity::Rare, TargetMode::Unit, "Attack for 6",
/// ));
///
/// assert_eq!(spear.actions(), &[ActionSpec::attack(6)]);
/// assert!(spear.issues().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDescriptor {
    entry: CardEntry,
    actions: Vec<ActionSpec>,
    issues: Vec<CombatError>,
}

impl CardDescriptor {
    /// Parse the entry's description once, keeping any skipped clauses as
    /// issues.
    #[must_use]
    pub fn from_entry(entry: CardEntry) -> Self {
        let parsed = parse_lenient(&entry.description);
        if !parsed.is_clean() {
            tracing::warn!(
                card = %entry.name,
                skipped = parsed.errors.len(),
                "card description has unparsable clauses"
            );
        }
        Self {
            entry,
            actions: parsed.actions,
            issues: parsed.errors,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.entry.slot
    }

    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.entry.rarity
    }

    #[must_use]
    pub const fn target_mode(&self) -> TargetMode {
        self.entry.target_mode
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.entry.description
    }

    /// Compiled actions, in description order.
    #[must_use]
    pub fn actions(&self) -> &[ActionSpec] {
        &self.actions
    }

    /// Clauses skipped at load time.
    #[must_use]
    pub fn issues(&self) -> &[CombatError] {
        &self.issues
    }

    /// The authored entry.
    #[must_use]
    pub const fn entry(&self) -> &CardEntry {
        &self.entry
    }
}
