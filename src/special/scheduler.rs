//! Special-round scheduling.

use crate::core::{EngineConfig, RandomSource, SessionState, SpecialModifier, SpecialTrigger};

/// Decides when a special modifier becomes pending.
///
/// ## Invariants
///
/// - At most one modifier is outstanding (announced or pending) at a time
/// - An outstanding modifier is never overwritten
/// - The modifier is drawn uniformly from `SpecialModifier::SPECIALS`
#[derive(Clone, Copy, Debug)]
pub struct SpecialRoundScheduler {
    trigger: SpecialTrigger,
}

impl SpecialRoundScheduler {
    #[must_use]
    pub fn new(trigger: SpecialTrigger) -> Self {
        Self { trigger }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.special_trigger)
    }

    /// Has the round count reached an interval with nothing outstanding?
    #[must_use]
    pub fn is_due(&self, state: &SessionState) -> bool {
        let Some(every) = self.trigger.interval() else {
            return false;
        };
        let rounds = state.scores.rounds_played;
        every > 0 && rounds > 0 && rounds % every == 0 && !state.has_special_outstanding()
    }

    /// Uniform draw over the three specials.
    pub fn draw(rng: &mut dyn RandomSource) -> SpecialModifier {
        SpecialModifier::SPECIALS[rng.next_index(SpecialModifier::SPECIALS.len())]
    }

    /// Schedule a special round if one is due.
    ///
    /// Deferred triggers place the draw in `announced_special`; the others
    /// make it pending right away. Returns the drawn modifier.
    pub fn poll(&self, state: &mut SessionState, rng: &mut dyn RandomSource) -> Option<SpecialModifier> {
        if !self.is_due(state) {
            return None;
        }

        let modifier = Self::draw(rng);
        if self.trigger.is_deferred() {
            log::debug!("round {}: announcing {} round", state.scores.rounds_played, modifier);
            state.announced_special = Some(modifier);
        } else {
            log::debug!("round {}: {} round pending", state.scores.rounds_played, modifier);
            state.pending_special = Some(modifier);
        }
        Some(modifier)
    }

    /// Make an announced modifier pending.
    ///
    /// Does nothing if a modifier is already pending or none was announced.
    pub fn arm(state: &mut SessionState) -> Option<SpecialModifier> {
        if state.pending_special.is_some() {
            return None;
        }
        let modifier = state.announced_special.take()?;
        state.pending_special = Some(modifier);
        Some(modifier)
    }
}
