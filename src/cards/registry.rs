//! Card catalog.
//!
//! The `CardCatalog` stores every loaded card in authoring order and
//! provides lookup by name. It is read-only after load.

use rustc_hash::FxHashMap;

use crate::core::{CombatError, Result};

use super::definition::{CardDescriptor, CardEntry, Rarity, Slot};
use super::library;

/// Catalog of loaded cards.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardCatalog, CardEntry, Rarity, Slot, TargetMode};
///
/// let catalog = CardCatalog::load([
///     CardEntry::new("Dagger", Slot::OffHand, Rarity::Common, TargetMode::Unit, "Attack for 1"),
/// ]).unwrap();
///
/// let dagger = catalog.get("Dagger").unwrap();
/// assert_eq!(dagger.actions().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDescriptor>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Parse and index a list of entries.
    ///
    /// Fails on a duplicate name. Unparsable clauses do not fail the load;
    /// they are kept on the descriptor and reported by [`validate`](Self::validate).
    pub fn load(entries: impl IntoIterator<Item = CardEntry>) -> Result<Self> {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.by_name.contains_key(&entry.name) {
                return Err(CombatError::DuplicateCard { name: entry.name });
            }
            catalog.by_name.insert(entry.name.clone(), catalog.cards.len());
            catalog.cards.push(CardDescriptor::from_entry(entry));
        }
        tracing::debug!(cards = catalog.cards.len(), "card catalog loaded");
        Ok(catalog)
    }

    /// The built-in card library.
    pub fn builtin() -> Result<Self> {
        Self::load(library::builtin_entries())
    }

    /// Fail with the first unparsable clause in the catalog, if any.
    ///
    /// Every shipped catalog must pass this check.
    pub fn validate(&self) -> Result<()> {
        match self.issues().next() {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Every skipped clause, with the name of its card.
    pub fn issues(&self) -> impl Iterator<Item = (&str, &CombatError)> {
        self.cards
            .iter()
            .flat_map(|card| card.issues().iter().map(move |err| (card.name(), err)))
    }

    /// Get a card by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDescriptor> {
        self.by_name.get(name).map(|&i| &self.cards[i])
    }

    /// Get a card by name, failing with `UnknownCard`.
    pub fn require(&self, name: &str) -> Result<&CardDescriptor> {
        self.get(name).ok_or_else(|| CombatError::UnknownCard {
            name: name.to_string(),
        })
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
        self.cards.iter()
    }

    /// Find cards matching a predicate, in authoring order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDescriptor>
    where
        F: Fn(&CardDescriptor) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Cards of one slot and rarity, in authoring order.
    pub fn bucket(&self, slot: Slot, rarity: Rarity) -> impl Iterator<Item = &CardDescriptor> {
        self.find(move |c| c.slot() == slot && c.rarity() == rarity)
    }

    /// First starter card for a slot.
    #[must_use]
    pub fn starter(&self, slot: Slot) -> Option<&CardDescriptor> {
        self.bucket(slot, Rarity::Starter).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TargetMode;

    fn entry(name: &str, slot: Slot, rarity: Rarity, description: &str) -> CardEntry {
        CardEntry::new(name, slot, rarity, TargetMode::Unit, description)
    }

    #[test]
    fn test_load_and_get() {
        let catalog = CardCatalog::load([
            entry("Dagger", Slot::OffHand, Rarity::Common, "Attack for 1"),
            entry("Cup", Slot::Drink, Rarity::Starter, "Heal for 1"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Cup"));
        assert_eq!(catalog.get("Cup").unwrap().slot(), Slot::Drink);
        assert!(catalog.get("Mug").is_none());
        assert_eq!(
            catalog.require("Mug").unwrap_err(),
            CombatError::UnknownCard { name: "Mug".into() }
        );
    }

    #[test]
    fn test_duplicate_name_fails() {
        let result = CardCatalog::load([
            entry("Dagger", Slot::OffHand, Rarity::Common, "Attack for 1"),
            entry("Dagger", Slot::MainHand, Rarity::Rare, "Attack for 9"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CombatError::DuplicateCard { name: "Dagger".into() }
        );
    }

    #[test]
    fn test_validate_reports_first_issue() {
        let catalog = CardCatalog::load([
            entry("Good", Slot::Ally, Rarity::Common, "Heal for 1"),
            entry("Wand", Slot::MainHand, Rarity::Common, "Burn 1"),
            entry("Odd", Slot::Spirit, Rarity::Rare, "Buff Luck by 1"),
        ])
        .unwrap();

        assert_eq!(catalog.validate(), Err(CombatError::unparsable("Burn 1")));
        let names: Vec<_> = catalog.issues().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Wand", "Odd"]);
    }

    #[test]
    fn test_bucket_and_starter_keep_order() {
        let catalog = CardCatalog::load([
            entry("A", Slot::MainHand, Rarity::Common, "Attack for 1"),
            entry("S1", Slot::MainHand, Rarity::Starter, "Attack for 1"),
            entry("B", Slot::MainHand, Rarity::Common, "Attack for 2"),
            entry("S2", Slot::MainHand, Rarity::Starter, "Attack for 2"),
        ])
        .unwrap();

        let commons: Vec<_> = catalog.bucket(Slot::MainHand, Rarity::Common).map(|c| c.name()).collect();
        assert_eq!(commons, vec!["A", "B"]);
        assert_eq!(catalog.starter(Slot::MainHand).unwrap().name(), "S1");
        assert!(catalog.starter(Slot::Drink).is_none());
    }
}
