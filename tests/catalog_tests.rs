//! Description parser and card catalog tests.
//!
//! These tests verify the built-in library end to end:
//! - Every shipped description compiles cleanly
//! - Representative cards compile to the expected actions
//! - Authoring mistakes surface as content errors, not panics

use card_combat::cards::{CardCatalog, CardEntry, Rarity, Slot, TargetMode};
use card_combat::core::CombatError;
use card_combat::effects::{parse_description, parse_lenient, ActionSpec, AttackMode, BuffKind};

/// Test that the built-in catalog validates with no skipped clauses.
#[test]
fn test_builtin_catalog_is_clean() {
    let catalog = CardCatalog::builtin().expect("built-in names are unique");

    assert_eq!(catalog.validate(), Ok(()));
    assert_eq!(catalog.issues().count(), 0);
    for card in catalog.iter() {
        assert!(!card.actions().is_empty(), "{} has no actions", card.name());
    }
}

/// Test the attack modifier grammar.
#[test]
fn test_attack_modifiers() {
    assert_eq!(
        parse_description("Attack for 2, randomly, 3 times").unwrap(),
        vec![ActionSpec::Attack { amount: 2, aoe: false, random: true, repeat: 3 }]
    );
    assert_eq!(
        parse_description("Attack for 3, to all").unwrap(),
        vec![ActionSpec::Attack { amount: 3, aoe: true, random: false, repeat: 1 }]
    );
    assert_eq!(parse_description("Attack for 6").unwrap(), vec![ActionSpec::attack(6)]);
}

/// Test buff clauses, including the plural attack spelling.
#[test]
fn test_buff_clauses() {
    assert_eq!(
        parse_description("Buff Defense by 1").unwrap(),
        vec![ActionSpec::Buff { kind: BuffKind::Defense, amount: 1 }]
    );
    assert_eq!(
        parse_description("Buff Attacks by 2").unwrap(),
        vec![ActionSpec::Buff { kind: BuffKind::Attack, amount: 2 }]
    );
    assert_eq!(
        parse_description("Buff Luck by 1"),
        Err(CombatError::UnknownBuffKind { kind: "Luck".into() })
    );
}

/// Test multi-clause descriptions keep their order.
#[test]
fn test_clause_order() {
    let actions = parse_description("Heal for 1. Attack for 1, randomly").unwrap();

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], ActionSpec::Heal { amount: 1 });
    assert_eq!(actions[1].attack_mode(), Some(AttackMode::Random));
}

/// Test that lenient parsing keeps good clauses around a bad one.
#[test]
fn test_lenient_parse_skips_bad_clause() {
    let parsed = parse_lenient("Heal for 1. Burn 1. Cleanse");

    assert_eq!(parsed.actions, vec![ActionSpec::Heal { amount: 1 }, ActionSpec::Cleanse]);
    assert_eq!(parsed.errors, vec![CombatError::unparsable("Burn 1")]);
    assert!(!parsed.is_clean());
}

/// Test a custom catalog with a typo loads but fails validation.
#[test]
fn test_custom_catalog_with_typo() {
    let catalog = CardCatalog::load([
        CardEntry::new("Lance", Slot::MainHand, Rarity::Rare, TargetMode::Unit, "Attack for 5"),
        CardEntry::new("Ember", Slot::Spell, Rarity::Common, TargetMode::Unit, "Burnn for 2"),
    ])
    .unwrap();

    let ember = catalog.require("Ember").unwrap();
    assert!(ember.actions().is_empty());
    assert_eq!(ember.issues().len(), 1);

    let err = catalog.validate().unwrap_err();
    assert!(err.is_content_error());
}

/// Test the representative built-in cards compile as authored.
#[test]
fn test_builtin_card_actions() {
    let catalog = CardCatalog::builtin().unwrap();

    let flail = catalog.require("Flail").unwrap();
    assert_eq!(flail.actions()[0].step_count(), 3);

    let wand = catalog.require("Wand").unwrap();
    assert_eq!(wand.actions(), &[ActionSpec::Burn { amount: 1 }]);
    assert_eq!(wand.target_mode(), TargetMode::Unit);

    let hamster = catalog.require("Hamster").unwrap();
    assert_eq!(hamster.actions(), &[ActionSpec::Draw { count: 1 }]);

    let chalice = catalog.require("Chalice").unwrap();
    assert_eq!(chalice.actions(), &[ActionSpec::Heal { amount: 1 }, ActionSpec::Cleanse]);
}
