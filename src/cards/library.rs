//! Built-in card library.
//!
//! Authored content only: names, slots, rarities, target modes and
//! descriptions. Behavior comes from parsing the descriptions.

use super::definition::{CardEntry, Rarity, Slot, TargetMode};

use Rarity::{Common, Rare, Starter};
use TargetMode::{Aoe, None as NoTarget, Self_, Unit};

const LIBRARY: &[(&str, Slot, Rarity, TargetMode, &str)] = &[
    // Main hand
    ("Shortsword", Slot::MainHand, Starter, Unit, "Attack for 2"),
    ("Wand", Slot::MainHand, Common, Unit, "Burn for 1"),
    ("Staff", Slot::MainHand, Common, Unit, "Burn for 2"),
    ("Mace", Slot::MainHand, Common, Aoe, "Attack for 3, to all"),
    ("Flail", Slot::MainHand, Rare, NoTarget, "Attack for 2, randomly, 3 times"),
    ("Flaming Arrow", Slot::MainHand, Common, Unit, "Attack for 2. Burn for 2"),
    ("Spear", Slot::MainHand, Rare, Unit, "Attack for 6"),
    ("Trident", Slot::MainHand, Rare, Unit, "Attack for 4. Heal for 4"),
    ("Scythe", Slot::MainHand, Rare, Unit, "Attack for 3. Poison for 3"),
    // Off hand
    ("Wooden Shield", Slot::OffHand, Starter, Self_, "Defend for 1"),
    ("Buckler", Slot::OffHand, Common, Self_, "Defend for 2"),
    ("Dagger", Slot::OffHand, Common, Unit, "Attack for 1"),
    ("Quiver", Slot::OffHand, Common, Unit, "Attack for 1, randomly"),
    ("Spike Shield", Slot::OffHand, Common, Self_, "Defend for 3. Spike for 2"),
    ("Tower Shield", Slot::OffHand, Rare, Self_, "Defend for 5"),
    // Ally
    ("Squirrel", Slot::Ally, Starter, Unit, "Attack for 1"),
    ("Frog", Slot::Ally, Common, Self_, "Heal for 1"),
    ("Rat", Slot::Ally, Common, Unit, "Poison for 1"),
    ("Newt", Slot::Ally, Common, Unit, "Burn for 1"),
    ("Toad", Slot::Ally, Rare, Unit, "Heal for 1. Poison for 1"),
    ("Porcupine", Slot::Ally, Rare, NoTarget, "Spike for 1"),
    ("Hamster", Slot::Ally, Rare, Unit, "Draw 1 card"),
    // Spirit
    ("Earth Spirit", Slot::Spirit, Starter, Self_, "Buff Defense by 1"),
    ("Air Spirit", Slot::Spirit, Common, NoTarget, "Buff Attacks by 1"),
    ("Fire Spirit", Slot::Spirit, Common, Unit, "Buff Burn by 1"),
    ("Water Spirit", Slot::Spirit, Common, Self_, "Buff Poison by 1"),
    ("Light Spirit", Slot::Spirit, Rare, Unit, "Buff Healing by 1"),
    ("Dark Spirit", Slot::Spirit, Rare, Unit, "Buff Spike by 1"),
    // Spell
    ("Arcane Bolt", Slot::Spell, Starter, NoTarget, "Attack for 1, randomly"),
    ("Fireball", Slot::Spell, Common, Unit, "Burn for 3"),
    ("Life Drain", Slot::Spell, Common, Unit, "Attack for 2. Heal for 2"),
    ("Lightning Strike", Slot::Spell, Rare, NoTarget, "Attack for 4, randomly"),
    ("Heal", Slot::Spell, Rare, Self_, "Heal for 5"),
    ("Blizzard", Slot::Spell, Rare, Aoe, "Attack for 3, to all"),
    ("Curse", Slot::Spell, Rare, Unit, "Poison for 5"),
    // Drink
    ("Cup", Slot::Drink, Starter, Self_, "Heal for 1"),
    ("Pouch", Slot::Drink, Common, Self_, "Draw 1 card"),
    ("Tankard", Slot::Drink, Common, NoTarget, "Heal for 1. Attack for 1, randomly"),
    ("Goblet", Slot::Drink, Common, Self_, "Heal for 2"),
    ("Potion", Slot::Drink, Rare, Self_, "Heal for 4"),
    ("Flagon", Slot::Drink, Rare, Unit, "Heal for 1. Poison for 2"),
    ("Chalice", Slot::Drink, Rare, Self_, "Heal for 1. Cleanse"),
];

/// Entries of the built-in library, in authoring order.
pub fn builtin_entries() -> Vec<CardEntry> {
    LIBRARY
        .iter()
        .map(|&(name, slot, rarity, target_mode, description)| {
            CardEntry::new(name, slot, rarity, target_mode, description)
        })
        .collect()
}
