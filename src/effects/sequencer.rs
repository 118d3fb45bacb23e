//! Effect sequencing - executing actions on combat units.
//!
//! An `ActionSequence` walks a card's action list one step at a time. A step
//! is either one non-attack action or one iteration of an attack. Each call
//! to [`ActionSequence::step`] commits exactly one step and returns a
//! `StepBoundary` that a presentation layer can pause on before asking for
//! the next one. State never changes between steps.
//!
//! Dropping a sequence early is the cancellation model: committed steps stay
//! applied, nothing is rolled back.
//!
//! ## Dispatch
//!
//! | Action  | Recipient |
//! |---------|-----------|
//! | Attack  | resolved from the pool each iteration |
//! | Defend  | the actor, or the declared target (required) for `Unit` cards |
//! | Heal / Spike / Cleanse / Buff | the actor |
//! | Burn / Poison | the declared target |
//! | Draw    | the draw collaborator |

use std::time::Duration;

use crate::cards::{CardDescriptor, Slot, TargetMode};
use crate::core::{CombatError, PacingConfig, RandomSource, Result};
use crate::units::{CombatUnit, DamageKind, StatusTicks};

use super::action::{ActionSpec, BuffKind};
use super::targeting::{AttackMode, Recipients, TargetResolver};

/// Presentation cue emitted while sequencing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// An attack iteration from a card in this slot.
    SlotAttack(Option<Slot>),
    Defend,
    Heal,
    Burn,
    Poison,
    /// Spikes gained, or spike damage reflected.
    Spikes,
    Cleanse,
    Buff(BuffKind),
    Draw(u32),
}

/// Collaborators the sequencer talks to.
///
/// Games provide this to supply randomness, card draw and presentation
/// hooks. Draw and cue hooks default to no-ops.
pub struct ResolverContext<'a> {
    /// Random source shared by targeting and reward rolls.
    pub rng: &'a mut dyn RandomSource,
    /// Draw `count` cards.
    pub draw_cards: Box<dyn FnMut(u32) + 'a>,
    /// Presentation cue sink.
    pub on_cue: Box<dyn FnMut(Cue) + 'a>,
    /// Pause hints attached to step boundaries.
    pub pacing: PacingConfig,
}

impl<'a> ResolverContext<'a> {
    /// Create a context with no-op draw and cue hooks.
    pub fn new(rng: &'a mut dyn RandomSource) -> Self {
        Self {
            rng,
            draw_cards: Box::new(|_| {}),
            on_cue: Box::new(|_| {}),
            pacing: PacingConfig::default(),
        }
    }

    /// Add a draw collaborator.
    #[must_use]
    pub fn with_draw(mut self, draw: impl FnMut(u32) + 'a) -> Self {
        self.draw_cards = Box::new(draw);
        self
    }

    /// Add a cue sink.
    #[must_use]
    pub fn with_cues(mut self, on_cue: impl FnMut(Cue) + 'a) -> Self {
        self.on_cue = Box::new(on_cue);
        self
    }

    /// Replace pacing hints.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    fn cue(&mut self, cue: Cue) {
        (self.on_cue)(cue);
    }
}

/// Participants of one card play.
///
/// The actor is never part of the pool. `target` is an index into `pool`.
pub struct Combatants<'u> {
    pub actor: &'u mut CombatUnit,
    pub target: Option<usize>,
    pub pool: &'u mut [CombatUnit],
}

impl<'u> Combatants<'u> {
    #[must_use]
    pub fn new(actor: &'u mut CombatUnit, target: Option<usize>, pool: &'u mut [CombatUnit]) -> Self {
        Self { actor, target, pool }
    }

    fn declared_target(&mut self) -> Result<&mut CombatUnit> {
        match self.target {
            Some(index) => self.pool.get_mut(index).ok_or(CombatError::NoTarget),
            None => Err(CombatError::NoTarget),
        }
    }
}

/// What one committed step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepBoundary {
    /// Index of the action in the card's list.
    pub action_index: usize,
    /// Attack iteration (0 for non-attack actions).
    pub iteration: u32,
    /// Pool indices hit by this step, for attacks.
    pub recipients: Recipients,
    /// Suggested pause before the next step. Zero when the sequence is done.
    pub pause: Duration,
    /// True if more steps remain.
    pub has_more: bool,
}

/// Cursor over an action list.
///
/// ## Example
///
/// ```
/// use card_combat::core::GameRng;
/// use card_combat::effects::{parse_description, ActionSequence, Combatants, ResolverContext};
/// use card_combat::units::CombatUnit;
///
/// let actions = parse_description("Attack for 2, randomly, 3 times").unwrap();
/// let mut player = CombatUnit::new(30);
/// let mut enemies = vec![CombatUnit::new(10), CombatUnit::new(10)];
/// let mut rng = GameRng::new(7);
/// let mut ctx = ResolverContext::new(&mut rng);
///
/// let mut sequence = ActionSequence::new(&actions);
/// let mut steps = 0;
/// while let Some(boundary) = sequence
///     .step(&mut ctx, &mut Combatants::new(&mut player, None, &mut enemies))
///     .unwrap()
/// {
///     steps += 1;
///     // A presentation layer would wait `boundary.pause` here.
///     let _ = boundary.pause;
/// }
///
/// assert_eq!(steps, 3);
/// assert_eq!(enemies.iter().map(|e| 10 - e.life()).sum::<i64>(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ActionSequence<'c> {
    actions: &'c [ActionSpec],
    slot: Option<Slot>,
    target_mode: TargetMode,
    action_index: usize,
    iteration: u32,
}

impl<'c> ActionSequence<'c> {
    /// Sequence a bare action list (no slot, `TargetMode::None`).
    #[must_use]
    pub fn new(actions: &'c [ActionSpec]) -> Self {
        Self {
            actions,
            slot: None,
            target_mode: TargetMode::None,
            action_index: 0,
            iteration: 0,
        }
    }

    /// Sequence a card's cached actions.
    #[must_use]
    pub fn for_card(card: &'c CardDescriptor) -> Self {
        Self {
            slot: Some(card.slot()),
            target_mode: card.target_mode(),
            ..Self::new(card.actions())
        }
    }

    /// True once every step has been committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.action_index >= self.actions.len()
    }

    /// Suggested pause before the first step.
    #[must_use]
    pub fn initial_pause(&self, pacing: &PacingConfig) -> Duration {
        if self.is_complete() {
            Duration::ZERO
        } else {
            pacing.action_delay()
        }
    }

    /// Commit the next step.
    ///
    /// Returns `Ok(None)` once the sequence is complete. On a structural
    /// error (`NoTarget`, `NoValidTargets`) the failing action is abandoned,
    /// the cursor moves to the next action and the error is returned.
    pub fn step(
        &mut self,
        ctx: &mut ResolverContext<'_>,
        units: &mut Combatants<'_>,
    ) -> Result<Option<StepBoundary>> {
        let Some(action) = self.actions.get(self.action_index) else {
            return Ok(None);
        };
        let action_index = self.action_index;
        let iteration = self.iteration;

        let outcome = apply_step(action, self.slot, self.target_mode, ctx, units);

        // Advance before surfacing errors so a failed action is never retried.
        let next_is_iteration = outcome.is_ok() && iteration + 1 < action.step_count();
        if next_is_iteration {
            self.iteration += 1;
        } else {
            self.action_index += 1;
            self.iteration = 0;
        }

        let recipients = outcome?;
        let has_more = !self.is_complete();
        let pause = match (has_more, next_is_iteration) {
            (false, _) => Duration::ZERO,
            (true, true) => ctx.pacing.attack_delay(),
            (true, false) => ctx.pacing.action_delay(),
        };

        tracing::debug!(
            action = action.keyword(),
            action_index,
            iteration,
            hits = recipients.len(),
            "step committed"
        );

        Ok(Some(StepBoundary {
            action_index,
            iteration,
            recipients,
            pause,
            has_more,
        }))
    }

    /// Commit every remaining step without pausing.
    ///
    /// Stops at the first structural error; steps before it stay applied.
    pub fn run_to_completion(
        &mut self,
        ctx: &mut ResolverContext<'_>,
        units: &mut Combatants<'_>,
    ) -> Result<usize> {
        let mut steps = 0;
        while self.step(ctx, units)?.is_some() {
            steps += 1;
        }
        Ok(steps)
    }
}

/// One-shot entry points.
pub struct EffectSequencer;

impl EffectSequencer {
    /// Apply an action list in order.
    pub fn apply(
        ctx: &mut ResolverContext<'_>,
        actions: &[ActionSpec],
        units: &mut Combatants<'_>,
    ) -> Result<usize> {
        ActionSequence::new(actions).run_to_completion(ctx, units)
    }

    /// Play a card: apply its cached actions with its slot and target mode.
    pub fn play_card(
        ctx: &mut ResolverContext<'_>,
        card: &CardDescriptor,
        units: &mut Combatants<'_>,
    ) -> Result<usize> {
        tracing::debug!(card = card.name(), target = ?units.target, "playing card");
        ActionSequence::for_card(card).run_to_completion(ctx, units)
    }

    /// Run one status decay phase on a unit, emitting burn and poison cues.
    pub fn process_effects(ctx: &mut ResolverContext<'_>, unit: &mut CombatUnit) -> StatusTicks {
        let ticks = unit.process_effects();
        if ticks.burn.is_some() {
            ctx.cue(Cue::Burn);
        }
        if ticks.poison.is_some() {
            ctx.cue(Cue::Poison);
        }
        ticks
    }
}

/// Apply one step of `action`. Returns the pool indices hit, for attacks.
fn apply_step(
    action: &ActionSpec,
    slot: Option<Slot>,
    target_mode: TargetMode,
    ctx: &mut ResolverContext<'_>,
    units: &mut Combatants<'_>,
) -> Result<Recipients> {
    match *action {
        ActionSpec::Attack {
            amount, aoe, random, ..
        } => attack_step(amount, AttackMode::select(aoe, random), slot, ctx, units),
        ActionSpec::Defend { amount } => {
            let recipient = match target_mode {
                TargetMode::Unit => units.declared_target()?,
                _ => &mut *units.actor,
            };
            recipient.give_defense(amount);
            ctx.cue(Cue::Defend);
            Ok(Recipients::new())
        }
        ActionSpec::Heal { amount } => {
            ctx.cue(Cue::Heal);
            units.actor.heal(amount);
            Ok(Recipients::new())
        }
        ActionSpec::Burn { amount } => {
            units.declared_target()?.give_burn(amount);
            ctx.cue(Cue::Burn);
            Ok(Recipients::new())
        }
        ActionSpec::Poison { amount } => {
            units.declared_target()?.give_poison(amount);
            ctx.cue(Cue::Poison);
            Ok(Recipients::new())
        }
        ActionSpec::Spike { amount } => {
            ctx.cue(Cue::Spikes);
            units.actor.give_spike(amount);
            Ok(Recipients::new())
        }
        ActionSpec::Draw { count } => {
            ctx.cue(Cue::Draw(count));
            (ctx.draw_cards)(count);
            Ok(Recipients::new())
        }
        ActionSpec::Cleanse => {
            ctx.cue(Cue::Cleanse);
            units.actor.cleanse();
            Ok(Recipients::new())
        }
        ActionSpec::Buff { kind, amount } => {
            ctx.cue(Cue::Buff(kind));
            units.actor.buff(kind, amount);
            Ok(Recipients::new())
        }
    }
}

/// One iteration of an attack: resolve recipients, then strike each in order.
fn attack_step(
    amount: i64,
    mode: AttackMode,
    slot: Option<Slot>,
    ctx: &mut ResolverContext<'_>,
    units: &mut Combatants<'_>,
) -> Result<Recipients> {
    let recipients = TargetResolver::resolve(mode, &*units.pool, units.target, &mut *ctx.rng)?;
    ctx.cue(Cue::SlotAttack(slot));

    let damage = amount.saturating_add(units.actor.buffs().attack);
    if damage < 1 {
        tracing::warn!(damage, "attack too weak to deal damage, skipping");
        return Ok(recipients);
    }
    for &index in &recipients {
        let report =
            units.pool[index].take_damage(damage, Some(&mut *units.actor), DamageKind::Attack);
        if report.reflected.is_some() {
            ctx.cue(Cue::Spikes);
        }
    }
    Ok(recipients)
}
