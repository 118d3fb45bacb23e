//! Card system: definitions, catalog, loadout and rewards.
//!
//! ## Key Types
//!
//! - `CardEntry`: Authored card data (name, slot, rarity, target mode, text)
//! - `CardDescriptor`: An entry plus its parsed actions
//! - `CardCatalog`: Name lookup over every loaded card
//! - `Loadout`: The active card per slot
//! - `RewardPicker`: Weighted reward rolls over the catalog

pub mod definition;
mod library;
pub mod loadout;
pub mod registry;
pub mod rewards;

pub use definition::{CardDescriptor, CardEntry, Rarity, Slot, TargetMode};
pub use library::builtin_entries;
pub use loadout::Loadout;
pub use registry::CardCatalog;
pub use rewards::RewardPicker;
