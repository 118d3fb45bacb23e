//! Combat unit state and the damage/heal/status API.
//!
//! A `CombatUnit` has no explicit state enum. Its "machine" is the set of
//! mutation operations below and the invariants they keep:
//!
//! - `current_life <= max_life` after any heal; damage may drive it below
//!   zero and nothing clamps it (defeat detection belongs to the caller)
//! - defense, burn, poison and spike never go negative
//! - buffs are unclamped and may be negative
//!
//! ## Reflection
//!
//! When a unit holding spikes is struck by `Attack` or `Spell` damage from a
//! present attacker, the attacker takes `spike + spike_buff` as `Spike`
//! damage with no attacker of its own. The reflected hit therefore can never
//! reflect again, which bounds the chain at depth one.

use serde::{Deserialize, Serialize};

use crate::effects::BuffKind;

/// Kind of incoming damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Attack,
    Spell,
    Burn,
    Poison,
    Spike,
}

impl DamageKind {
    /// Defense absorbs every kind except poison.
    #[must_use]
    pub const fn is_blockable(self) -> bool {
        !matches!(self, Self::Poison)
    }

    /// Only direct hits trigger spike reflection.
    #[must_use]
    pub const fn triggers_reflection(self) -> bool {
        matches!(self, Self::Attack | Self::Spell)
    }
}

/// What a single `take_damage` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage soaked by defense.
    pub absorbed: i64,
    /// Damage subtracted from life.
    pub life_lost: i64,
    /// Amount sent back to the attacker by spikes, if reflection fired.
    pub reflected: Option<i64>,
}

impl DamageReport {
    /// True if the call changed nothing on the struck unit.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.absorbed == 0 && self.life_lost == 0 && self.reflected.is_none()
    }
}

/// Result of one `process_effects` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTicks {
    /// Burn tick, if burn was active.
    pub burn: Option<DamageReport>,
    /// Poison tick, if poison was active.
    pub poison: Option<DamageReport>,
}

/// Additive modifiers, one per buffable stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buffs {
    pub attack: i64,
    pub defense: i64,
    pub healing: i64,
    pub burn: i64,
    pub poison: i64,
    pub spike: i64,
}

impl Buffs {
    /// Current value for a buff kind.
    #[must_use]
    pub const fn get(&self, kind: BuffKind) -> i64 {
        match kind {
            BuffKind::Attack => self.attack,
            BuffKind::Defense => self.defense,
            BuffKind::Healing => self.healing,
            BuffKind::Burn => self.burn,
            BuffKind::Poison => self.poison,
            BuffKind::Spike => self.spike,
        }
    }

    fn slot_mut(&mut self, kind: BuffKind) -> &mut i64 {
        match kind {
            BuffKind::Attack => &mut self.attack,
            BuffKind::Defense => &mut self.defense,
            BuffKind::Healing => &mut self.healing,
            BuffKind::Burn => &mut self.burn,
            BuffKind::Poison => &mut self.poison,
            BuffKind::Spike => &mut self.spike,
        }
    }
}

/// A combat participant.
///
/// Owned by its participant (player or enemy). The engine only borrows
/// units for the duration of a call.
///
/// ```
/// use card_combat::units::{CombatUnit, DamageKind};
///
/// let mut unit = CombatUnit::new(10);
/// unit.give_defense(3);
/// unit.take_damage(6, None, DamageKind::Attack);
///
/// assert_eq!(unit.defense(), 0);
/// assert_eq!(unit.life(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatUnit {
    max_life: i64,
    life: i64,
    defense: i64,
    burn: i64,
    poison: i64,
    spike: i64,
    buffs: Buffs,
}

impl CombatUnit {
    /// Create a unit at full life with no combat state.
    #[must_use]
    pub fn new(max_life: i64) -> Self {
        Self {
            max_life,
            life: max_life,
            defense: 0,
            burn: 0,
            poison: 0,
            spike: 0,
            buffs: Buffs::default(),
        }
    }

    /// Start at a lower life total (builder pattern). Clamped to `max_life`.
    #[must_use]
    pub fn with_life(mut self, life: i64) -> Self {
        self.life = life.min(self.max_life);
        self
    }

    // === Accessors ===

    #[must_use]
    pub const fn max_life(&self) -> i64 {
        self.max_life
    }

    #[must_use]
    pub const fn life(&self) -> i64 {
        self.life
    }

    #[must_use]
    pub const fn defense(&self) -> i64 {
        self.defense
    }

    #[must_use]
    pub const fn burn(&self) -> i64 {
        self.burn
    }

    #[must_use]
    pub const fn poison(&self) -> i64 {
        self.poison
    }

    #[must_use]
    pub const fn spike(&self) -> i64 {
        self.spike
    }

    #[must_use]
    pub const fn buffs(&self) -> &Buffs {
        &self.buffs
    }

    /// Life at or below zero. Callers decide when to check.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.life <= 0
    }

    // === Lifecycle ===

    /// Full reset for a new combat: full life plus `post_combat_reset`.
    pub fn reset(&mut self) {
        self.life = self.max_life;
        self.post_combat_reset();
    }

    /// Clear transient combat state, keeping life.
    pub fn post_combat_reset(&mut self) {
        self.defense = 0;
        self.burn = 0;
        self.poison = 0;
        self.spike = 0;
        self.buffs = Buffs::default();
    }

    // === Damage ===

    /// Apply damage, absorbing with defense unless the kind is poison.
    ///
    /// Amounts `<= 0` are ignored. See the module docs for reflection.
    pub fn take_damage(
        &mut self,
        amount: i64,
        attacker: Option<&mut CombatUnit>,
        kind: DamageKind,
    ) -> DamageReport {
        let mut report = DamageReport::default();
        if amount <= 0 {
            return report;
        }

        let absorbed = if kind.is_blockable() {
            amount.min(self.defense)
        } else {
            0
        };
        self.defense -= absorbed;
        self.life = self.life.saturating_sub(amount - absorbed);
        report.absorbed = absorbed;
        report.life_lost = amount - absorbed;

        if kind.triggers_reflection() && self.spike > 0 {
            if let Some(attacker) = attacker {
                let reflected = self.spike.saturating_add(self.buffs.spike);
                if reflected > 0 {
                    attacker.take_damage(reflected, None, DamageKind::Spike);
                    report.reflected = Some(reflected);
                }
            }
        }

        report
    }

    // === Restoration and status ===

    /// Restore life and cure poison.
    ///
    /// Life gain includes the healing buff; poison is reduced by the raw
    /// amount only.
    pub fn heal(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        self.life = self
            .life
            .saturating_add(amount)
            .saturating_add(self.buffs.healing)
            .min(self.max_life);
        self.poison = (self.poison - amount).max(0);
    }

    pub fn give_defense(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        self.defense = stack_counter(self.defense, amount, self.buffs.defense);
    }

    pub fn give_burn(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        self.burn = stack_counter(self.burn, amount, self.buffs.burn);
    }

    pub fn give_poison(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        self.poison = stack_counter(self.poison, amount, self.buffs.poison);
    }

    pub fn give_spike(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        self.spike = stack_counter(self.spike, amount, self.buffs.spike);
    }

    /// Remove burn and poison. Defense and spikes stay.
    pub fn cleanse(&mut self) {
        self.burn = 0;
        self.poison = 0;
    }

    /// Drop all defense. Called by the turn controller at turn boundaries.
    pub fn clear_defense(&mut self) {
        self.defense = 0;
    }

    // === Buffs ===

    /// Accumulate into a buff counter. Unclamped.
    pub fn buff(&mut self, kind: BuffKind, amount: i64) {
        let slot = self.buffs.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    pub fn buff_attack(&mut self, amount: i64) {
        self.buff(BuffKind::Attack, amount);
    }

    pub fn buff_defense(&mut self, amount: i64) {
        self.buff(BuffKind::Defense, amount);
    }

    pub fn buff_healing(&mut self, amount: i64) {
        self.buff(BuffKind::Healing, amount);
    }

    pub fn buff_burn(&mut self, amount: i64) {
        self.buff(BuffKind::Burn, amount);
    }

    pub fn buff_poison(&mut self, amount: i64) {
        self.buff(BuffKind::Poison, amount);
    }

    pub fn buff_spike(&mut self, amount: i64) {
        self.buff(BuffKind::Spike, amount);
    }

    // === Status decay ===

    /// True if a `process_effects` call would deal damage.
    #[must_use]
    pub const fn has_effects_to_process(&self) -> bool {
        self.burn > 0 || self.poison > 0
    }

    /// One burn tick: take `burn` as burn damage, then burn decays by one.
    pub fn tick_burn(&mut self) -> Option<DamageReport> {
        if self.burn <= 0 {
            return None;
        }
        let report = self.take_damage(self.burn, None, DamageKind::Burn);
        self.burn -= 1;
        Some(report)
    }

    /// One poison tick: take `poison` as poison damage, then poison decays by one.
    pub fn tick_poison(&mut self) -> Option<DamageReport> {
        if self.poison <= 0 {
            return None;
        }
        let report = self.take_damage(self.poison, None, DamageKind::Poison);
        self.poison -= 1;
        Some(report)
    }

    /// Burn tick, then poison tick. At most one of each per call.
    pub fn process_effects(&mut self) -> StatusTicks {
        let burn = self.tick_burn();
        let poison = self.tick_poison();
        tracing::debug!(?burn, ?poison, life = self.life, "processed status effects");
        StatusTicks { burn, poison }
    }
}

/// Add a gain and its buff to a counter. Counters never go below zero, even
/// under a negative buff.
fn stack_counter(current: i64, amount: i64, buff: i64) -> i64 {
    current.saturating_add(amount).saturating_add(buff).max(0)
}
