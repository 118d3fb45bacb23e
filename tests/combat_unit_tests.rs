//! Combat unit invariant tests.
//!
//! These tests verify the damage/heal/status rules hold for arbitrary
//! amounts:
//! - Non-positive amounts are no-ops
//! - Defense absorbs non-poison damage first
//! - Spike reflection fires at most once per hit
//! - Cleanse only touches burn and poison

use card_combat::units::{CombatUnit, DamageKind};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = DamageKind> {
    prop_oneof![
        Just(DamageKind::Attack),
        Just(DamageKind::Spell),
        Just(DamageKind::Burn),
        Just(DamageKind::Poison),
        Just(DamageKind::Spike),
    ]
}

/// A unit with some of every counter set.
fn loaded_unit(defense: i64, spike: i64) -> CombatUnit {
    let mut unit = CombatUnit::new(50).with_life(40);
    unit.give_defense(defense);
    unit.give_burn(2);
    unit.give_poison(3);
    unit.give_spike(spike);
    unit
}

proptest! {
    #[test]
    fn negative_amounts_leave_state_unchanged(amount in -1000i64..0, defense in 0i64..10) {
        let before = loaded_unit(defense, 1);

        let mut unit = before.clone();
        unit.heal(amount);
        unit.give_defense(amount);
        unit.give_burn(amount);
        unit.give_poison(amount);
        unit.give_spike(amount);
        prop_assert_eq!(&unit, &before);
    }

    #[test]
    fn non_positive_damage_is_ignored(amount in -1000i64..=0, kind in any_kind()) {
        let before = loaded_unit(3, 2);
        let mut unit = before.clone();
        let mut attacker = CombatUnit::new(20);

        let report = unit.take_damage(amount, Some(&mut attacker), kind);

        prop_assert!(report.is_noop());
        prop_assert_eq!(&unit, &before);
        prop_assert_eq!(attacker.life(), 20);
    }

    #[test]
    fn defense_absorbs_before_life(amount in 1i64..100, defense in 0i64..20, kind in any_kind()) {
        let mut unit = loaded_unit(defense, 0);
        let life = unit.life();

        let report = unit.take_damage(amount, None, kind);

        if kind == DamageKind::Poison {
            prop_assert_eq!(unit.defense(), defense);
            prop_assert_eq!(unit.life(), life - amount);
        } else {
            let absorbed = amount.min(defense);
            prop_assert_eq!(report.absorbed, absorbed);
            prop_assert_eq!(unit.defense(), defense - absorbed);
            prop_assert_eq!(unit.life(), life - (amount - absorbed));
        }
        prop_assert!(unit.defense() >= 0);
    }

    #[test]
    fn reflection_fires_once_for_strikes(
        amount in 1i64..50,
        spike in 0i64..6,
        spike_buff in 0i64..3,
        kind in any_kind(),
    ) {
        let mut target = CombatUnit::new(100);
        target.give_spike(spike);
        target.buff_spike(spike_buff);
        let mut attacker = CombatUnit::new(100);
        attacker.give_spike(4);

        let report = target.take_damage(amount, Some(&mut attacker), kind);

        let strikes = matches!(kind, DamageKind::Attack | DamageKind::Spell);
        if strikes && spike > 0 {
            prop_assert_eq!(report.reflected, Some(spike + spike_buff));
            prop_assert_eq!(attacker.life(), 100 - (spike + spike_buff));
            // The reflected hit never bounces back.
            prop_assert_eq!(target.life(), 100 - amount);
        } else {
            prop_assert_eq!(report.reflected, None);
            prop_assert_eq!(attacker.life(), 100);
        }
    }

    #[test]
    fn heal_never_exceeds_max(life in -20i64..=50, amount in 0i64..100, buff in -5i64..5) {
        let mut unit = CombatUnit::new(50).with_life(life);
        unit.buff_healing(buff);

        unit.heal(amount);

        prop_assert!(unit.life() <= unit.max_life());
    }

    #[test]
    fn cleanse_only_clears_statuses(defense in 0i64..10, spike in 0i64..10) {
        let mut unit = loaded_unit(defense, spike);

        unit.cleanse();

        prop_assert_eq!(unit.burn(), 0);
        prop_assert_eq!(unit.poison(), 0);
        prop_assert_eq!(unit.defense(), defense);
        prop_assert_eq!(unit.spike(), spike);
    }
}

/// Test a full status decay cycle.
#[test]
fn test_status_decays_to_zero() {
    let mut unit = CombatUnit::new(30);
    unit.give_defense(10);
    unit.give_burn(2);
    unit.give_poison(2);

    // Burn 2 and burn 1 hit defense; poison 2 and 1 go straight to life.
    while unit.has_effects_to_process() {
        unit.process_effects();
    }

    assert_eq!(unit.defense(), 7);
    assert_eq!(unit.life(), 27);
    assert_eq!(unit.burn(), 0);
    assert_eq!(unit.poison(), 0);
}

/// Test that life can go negative and reset restores it.
#[test]
fn test_defeat_and_reset() {
    let mut unit = CombatUnit::new(5);
    unit.take_damage(9, None, DamageKind::Attack);

    assert_eq!(unit.life(), -4);
    assert!(unit.is_defeated());

    unit.reset();
    assert_eq!(unit.life(), 5);
    assert!(!unit.is_defeated());
}
