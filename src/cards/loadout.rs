//! Equipped cards, one per slot.

use serde::{Deserialize, Serialize};

use super::definition::{CardDescriptor, Slot};
use super::registry::CardCatalog;

/// The active card in each slot, by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    slots: [Option<String>; 6],
}

impl Loadout {
    /// Loadout of the catalog's starter cards.
    #[must_use]
    pub fn starter(catalog: &CardCatalog) -> Self {
        let mut loadout = Self::default();
        loadout.reset(catalog);
        loadout
    }

    /// Put every slot back to its starter card (or empty if none exists).
    pub fn reset(&mut self, catalog: &CardCatalog) {
        for slot in Slot::ALL {
            self.slots[slot.index()] = catalog.starter(slot).map(|c| c.name().to_string());
        }
    }

    /// Equip a card into its own slot, replacing the previous one.
    pub fn equip(&mut self, card: &CardDescriptor) {
        self.slots[card.slot().index()] = Some(card.name().to_string());
    }

    /// Name of the card in a slot.
    #[must_use]
    pub fn current(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// True if the card is the active one in its slot.
    #[must_use]
    pub fn is_equipped(&self, card: &CardDescriptor) -> bool {
        self.current(card.slot()) == Some(card.name())
    }

    /// Occupied slots with their card names.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.current(slot).map(|name| (slot, name)))
    }
}
