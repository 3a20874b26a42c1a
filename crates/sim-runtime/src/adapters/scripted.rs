//! Prepared actions for tests and non-interactive runs.

use std::collections::{HashMap, VecDeque};

use sdpa_01_account_ledger::LedgerError;
use shared_types::{Day, ParticipantId};

use crate::adapters::actions::{Action, ActionSource, TurnContext};
use crate::error::RuntimeError;

/// Actions queued per participant and day. A turn with nothing queued ends
/// immediately.
#[derive(Debug, Clone, Default)]
pub struct ScriptedActions {
    plans: HashMap<(String, Day), VecDeque<Action>>,
    rejections: Vec<(ParticipantId, LedgerError)>,
}

impl ScriptedActions {
    /// Empty script: every turn ends at once.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue actions for one participant on one day.
    pub fn plan(mut self, participant: &str, day: Day, actions: impl IntoIterator<Item = Action>) -> Self {
        self.plans
            .entry((key(participant), day))
            .or_default()
            .extend(actions);
        self
    }

    /// Every rejection reported so far.
    pub fn rejections(&self) -> &[(ParticipantId, LedgerError)] {
        &self.rejections
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, ctx: &TurnContext<'_>) -> Result<Action, RuntimeError> {
        let action = self
            .plans
            .get_mut(&(key(ctx.account.id().as_str()), ctx.day))
            .and_then(VecDeque::pop_front)
            .unwrap_or(Action::EndTurn);
        Ok(action)
    }

    fn on_rejected(
        &mut self,
        participant: &ParticipantId,
        error: &LedgerError,
    ) -> Result<(), RuntimeError> {
        self.rejections.push((participant.clone(), error.clone()));
        Ok(())
    }
}
