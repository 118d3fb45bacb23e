//! Card description parser.
//!
//! Compiles the description mini-language into `ActionSpec`s:
//!
//! ```text
//! description        := clause ('. ' clause)*
//! clause             := attack | draw | buff | word_amount | 'Cleanse'
//! attack             := 'Attack for ' amount (', ' modifier)*
//! modifier           := 'to all' | 'randomly' | integer ' times'
//! draw               := 'Draw ' amount ' card' ['s']
//! buff               := 'Buff ' kind ' by ' amount
//! word_amount        := ('Defend' | 'Heal' | 'Burn' | 'Poison' | 'Spike') ' for ' amount
//! ```
//!
//! Two entry points:
//! - [`parse_description`]: strict, fails on the first bad clause
//! - [`parse_lenient`]: logs and skips bad clauses, keeps the rest
//!
//! ```
//! use card_combat::effects::{parse_description, ActionSpec};
//!
//! let actions = parse_description("Attack for 2, randomly, 3 times").unwrap();
//! assert_eq!(actions, vec![ActionSpec::Attack { amount: 2, aoe: false, random: true, repeat: 3 }]);
//! ```

use crate::core::{CombatError, Result};

use super::action::{ActionSpec, BuffKind};

const CLAUSE_SEPARATOR: &str = ". ";
const MODIFIER_SEPARATOR: &str = ", ";

/// Output of a best-effort parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDescription {
    /// Actions from every clause that parsed, in order.
    pub actions: Vec<ActionSpec>,
    /// One error per skipped clause, in order.
    pub errors: Vec<CombatError>,
}

impl ParsedDescription {
    /// True if every clause parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a description, failing on the first unrecognized clause.
pub fn parse_description(description: &str) -> Result<Vec<ActionSpec>> {
    clauses(description).map(parse_clause).collect()
}

/// Parse a description, skipping clauses that do not parse.
///
/// Every skipped clause is logged at `warn` and returned in `errors`.
#[must_use]
pub fn parse_lenient(description: &str) -> ParsedDescription {
    let mut parsed = ParsedDescription::default();
    for clause in clauses(description) {
        match parse_clause(clause) {
            Ok(action) => parsed.actions.push(action),
            Err(err) => {
                tracing::warn!(%err, description, "skipping clause");
                parsed.errors.push(err);
            }
        }
    }
    parsed
}

/// Split into clauses. An empty description has none; a single trailing
/// period is dropped.
fn clauses(description: &str) -> impl Iterator<Item = &str> {
    let body = description.trim();
    let body = body.strip_suffix('.').unwrap_or(body);
    body.split(CLAUSE_SEPARATOR).filter(move |_| !body.is_empty())
}

/// Parse one clause.
pub fn parse_clause(clause: &str) -> Result<ActionSpec> {
    let keyword = clause.split(' ').next().unwrap_or_default();

    match keyword {
        "Attack" => parse_attack(clause),
        "Draw" => parse_draw(clause),
        "Buff" => parse_buff(clause),
        "Cleanse" if clause == "Cleanse" => Ok(ActionSpec::Cleanse),
        "Defend" => word_amount(clause, "Defend").map(|amount| ActionSpec::Defend { amount }),
        "Heal" => word_amount(clause, "Heal").map(|amount| ActionSpec::Heal { amount }),
        "Burn" => word_amount(clause, "Burn").map(|amount| ActionSpec::Burn { amount }),
        "Poison" => word_amount(clause, "Poison").map(|amount| ActionSpec::Poison { amount }),
        "Spike" => word_amount(clause, "Spike").map(|amount| ActionSpec::Spike { amount }),
        _ => Err(CombatError::unparsable(clause)),
    }
}

fn parse_attack(clause: &str) -> Result<ActionSpec> {
    let mut parts = clause.split(MODIFIER_SEPARATOR);
    let head = parts.next().unwrap_or_default();

    let amount = head
        .strip_prefix("Attack for ")
        .and_then(parse_amount)
        .filter(|amount| *amount > 0)
        .ok_or_else(|| CombatError::unparsable(clause))?;

    let mut aoe = false;
    let mut random = false;
    let mut repeat = 1;

    // Containment order matters: "to all" wins over "randomly", which wins
    // over a repeat count. The last repeat count wins.
    for modifier in parts {
        if modifier.contains("to all") {
            aoe = true;
        } else if modifier.contains("randomly") {
            random = true;
        } else if modifier.contains("times") {
            repeat = modifier
                .split(' ')
                .next()
                .and_then(|count| count.parse::<u16>().ok())
                .filter(|count| *count >= 1)
                .map(u32::from)
                .ok_or_else(|| CombatError::unparsable(clause))?;
        } else {
            return Err(CombatError::unparsable(clause));
        }
    }

    Ok(ActionSpec::Attack {
        amount,
        aoe,
        random,
        repeat,
    })
}

fn parse_draw(clause: &str) -> Result<ActionSpec> {
    clause
        .strip_prefix("Draw ")
        .and_then(|rest| rest.split_once(' '))
        .filter(|(_, noun)| matches!(*noun, "card" | "cards"))
        .and_then(|(count, _)| count.parse::<u16>().ok())
        .map(u32::from)
        .map(|count| ActionSpec::Draw { count })
        .ok_or_else(|| CombatError::unparsable(clause))
}

fn parse_buff(clause: &str) -> Result<ActionSpec> {
    let (kind, amount) = clause
        .strip_prefix("Buff ")
        .and_then(|rest| rest.split_once(" by "))
        .ok_or_else(|| CombatError::unparsable(clause))?;

    // Buff amounts may be negative.
    let amount = amount
        .parse::<i16>()
        .map(i64::from)
        .map_err(|_| CombatError::unparsable(clause))?;
    let kind = BuffKind::from_name(kind).ok_or_else(|| CombatError::UnknownBuffKind {
        kind: kind.to_string(),
    })?;

    Ok(ActionSpec::Buff { kind, amount })
}

fn word_amount(clause: &str, keyword: &str) -> Result<i64> {
    clause
        .strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix(" for "))
        .and_then(parse_amount)
        .ok_or_else(|| CombatError::unparsable(clause))
}

/// Authored amounts are small non-negative numbers. Anything past `u16`
/// is rejected so unit arithmetic stays far from overflow.
fn parse_amount(text: &str) -> Option<i64> {
    text.parse::<u16>().ok().map(i64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_clauses() {
        assert_eq!(parse_clause("Defend for 3"), Ok(ActionSpec::Defend { amount: 3 }));
        assert_eq!(parse_clause("Heal for 0"), Ok(ActionSpec::Heal { amount: 0 }));
        assert_eq!(parse_clause("Burn for 2"), Ok(ActionSpec::Burn { amount: 2 }));
        assert_eq!(parse_clause("Poison for 5"), Ok(ActionSpec::Poison { amount: 5 }));
        assert_eq!(parse_clause("Spike for 1"), Ok(ActionSpec::Spike { amount: 1 }));
        assert_eq!(parse_clause("Cleanse"), Ok(ActionSpec::Cleanse));
    }

    #[test]
    fn test_draw_singular_and_plural() {
        assert_eq!(parse_clause("Draw 1 card"), Ok(ActionSpec::Draw { count: 1 }));
        assert_eq!(parse_clause("Draw 2 cards"), Ok(ActionSpec::Draw { count: 2 }));
        assert!(parse_clause("Draw 2 potions").is_err());
        assert!(parse_clause("Draw two cards").is_err());
    }

    #[test]
    fn test_attack_defaults() {
        assert_eq!(parse_clause("Attack for 6"), Ok(ActionSpec::attack(6)));
    }

    #[test]
    fn test_attack_modifiers() {
        assert_eq!(
            parse_clause("Attack for 3, to all"),
            Ok(ActionSpec::Attack { amount: 3, aoe: true, random: false, repeat: 1 })
        );
        assert_eq!(
            parse_clause("Attack for 1, randomly"),
            Ok(ActionSpec::Attack { amount: 1, aoe: false, random: true, repeat: 1 })
        );
        assert_eq!(
            parse_clause("Attack for 2, 4 times"),
            Ok(ActionSpec::Attack { amount: 2, aoe: false, random: false, repeat: 4 })
        );
    }

    #[test]
    fn test_last_repeat_wins() {
        assert_eq!(
            parse_clause("Attack for 1, 2 times, 5 times"),
            Ok(ActionSpec::Attack { amount: 1, aoe: false, random: false, repeat: 5 })
        );
    }

    #[test]
    fn test_attack_rejects_bad_values() {
        assert!(parse_clause("Attack for 0").is_err());
        assert!(parse_clause("Attack for -2").is_err());
        assert!(parse_clause("Attack for 2, 0 times").is_err());
        assert!(parse_clause("Attack for 2, twice").is_err());
        assert!(parse_clause("Attack 2").is_err());
    }

    #[test]
    fn test_word_amount_requires_for() {
        assert_eq!(parse_clause("Burn 1"), Err(CombatError::unparsable("Burn 1")));
        assert!(parse_clause("Heal for -1").is_err());
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        assert_eq!(parse_clause("Heal for 65535"), Ok(ActionSpec::Heal { amount: 65535 }));
        for clause in [
            "Heal for 9223372036854775807",
            "Defend for 65536",
            "Attack for 70000",
            "Attack for 1, 65536 times",
            "Draw 100000 cards",
            "Buff Attack by 40000",
            "Buff Attack by -40000",
        ] {
            assert_eq!(parse_clause(clause), Err(CombatError::unparsable(clause)));
        }
    }

    #[test]
    fn test_buff() {
        assert_eq!(
            parse_clause("Buff Defense by 1"),
            Ok(ActionSpec::Buff { kind: BuffKind::Defense, amount: 1 })
        );
        assert_eq!(
            parse_clause("Buff Attacks by 2"),
            Ok(ActionSpec::Buff { kind: BuffKind::Attack, amount: 2 })
        );
        assert_eq!(
            parse_clause("Buff Healing by -1"),
            Ok(ActionSpec::Buff { kind: BuffKind::Healing, amount: -1 })
        );
        assert_eq!(
            parse_clause("Buff Luck by 1"),
            Err(CombatError::UnknownBuffKind { kind: "Luck".into() })
        );
    }

    #[test]
    fn test_multi_clause_order() {
        let actions = parse_description("Heal for 1. Attack for 1, randomly").unwrap();
        assert_eq!(
            actions,
            vec![
                ActionSpec::Heal { amount: 1 },
                ActionSpec::Attack { amount: 1, aoe: false, random: true, repeat: 1 },
            ]
        );
    }

    #[test]
    fn test_trailing_period_and_empty() {
        assert_eq!(parse_description("Cleanse."), Ok(vec![ActionSpec::Cleanse]));
        assert_eq!(parse_description(""), Ok(vec![]));
        assert_eq!(parse_description("   "), Ok(vec![]));
    }

    #[test]
    fn test_strict_fails_on_first_bad_clause() {
        let err = parse_description("Heal for 1. Summon for 2. Dance").unwrap_err();
        assert_eq!(err, CombatError::unparsable("Summon for 2"));
    }

    #[test]
    fn test_lenient_skips_and_continues() {
        let parsed = parse_lenient("Heal for 1. Summon for 2. Buff Luck by 1. Cleanse");
        assert_eq!(parsed.actions, vec![ActionSpec::Heal { amount: 1 }, ActionSpec::Cleanse]);
        assert_eq!(
            parsed.errors,
            vec![
                CombatError::unparsable("Summon for 2"),
                CombatError::UnknownBuffKind { kind: "Luck".into() },
            ]
        );
        assert!(!parsed.is_clean());
    }
}
