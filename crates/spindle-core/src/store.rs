use std::collections::VecDeque;

use log::debug;
use serde::Serialize;

use super::actions::Action;
use super::actions::Command;
use super::actions::Notification;
use super::error::JournalError;
use super::journal::ActionJournal;
use super::journal::JournalStage;
use super::reducer::reduce;
use super::router::Router;
use super::router::StoreHandle;
use super::state::StoreState;

/// Work left for the host once an action has settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Effect {
    /// Fetch or mutate on the streaming service, then dispatch the result back.
    Command(Command),
    /// Render to the user.
    Notify(Notification),
}

/// Owns the state snapshot and drives every action through router and reducer.
#[derive(Debug, Default)]
pub struct Store {
    state: StoreState,
    router: Router,
    journal: Option<ActionJournal>,
}

struct Dispatcher<'a> {
    state: &'a mut StoreState,
    queue: &'a mut VecDeque<Action>,
}

impl StoreHandle for Dispatcher<'_> {
    fn state(&self) -> &StoreState {
        self.state
    }

    fn dispatch(&mut self, action: Action) {
        self.queue.push_back(action);
    }
}

impl Store {
    pub fn new(state: StoreState, router: Router) -> Self {
        Self {
            state,
            router,
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: ActionJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn into_state(self) -> StoreState {
        self.state
    }

    /// Runs `action` and everything it dispatches, in order, to completion.
    ///
    /// Each action is journaled before it is routed. A journal failure stops
    /// the run there: the state reflects exactly the journaled actions and
    /// whatever was still queued is discarded.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>, JournalError> {
        let mut queue = VecDeque::from([action]);
        let mut effects = Vec::new();
        let mut stage = JournalStage::Received;

        while let Some(action) = queue.pop_front() {
            self.record(stage, &action)?;
            stage = JournalStage::Dispatched;

            let kind = action.kind().to_string();
            let mut handle = Dispatcher {
                state: &mut self.state,
                queue: &mut queue,
            };
            let routed = self.router.route(
                &mut handle,
                |handle, action| settle(&mut *handle.state, action),
                action,
            );
            debug!("settled {kind}; {} queued", queue.len());

            if let Some(Some(effect)) = routed.forwarded() {
                self.record(JournalStage::Effect, &effect.to_action())?;
                effects.push(effect);
            }
        }
        Ok(effects)
    }

    fn record(&mut self, stage: JournalStage, action: &Action) -> Result<(), JournalError> {
        if let Some(journal) = self.journal.as_mut() {
            journal.append(stage, action)?;
        }
        Ok(())
    }
}

impl Effect {
    pub fn to_action(&self) -> Action {
        match self {
            Self::Command(command) => Action::Command(command.clone()),
            Self::Notify(notification) => Action::Notify(notification.clone()),
        }
    }
}

fn settle(state: &mut StoreState, action: Action) -> Option<Effect> {
    match action {
        Action::Command(command) => Some(Effect::Command(command)),
        Action::Notify(notification) => Some(Effect::Notify(notification)),
        other => {
            reduce(state, other);
            None
        }
    }
}
