use serde_json::Value;

pub(super) use super::Router;
pub(super) use super::Routed;
pub(super) use super::StoreHandle;
pub(super) use crate::actions::Action;
pub(super) use crate::actions::Command;
pub(super) use crate::actions::Notification;
pub(super) use crate::actions::NotificationLevel;
pub(super) use crate::actions::StoreUpdate;
pub(super) use crate::error::Denied;
pub(super) use crate::payload::OwnerRef;
pub(super) use crate::state::CachedPlaylist;
pub(super) use crate::state::SessionState;
pub(super) use crate::state::StoreState;


#[derive(Debug, Clone, PartialEq)]
enum Event {
    Forwarded(Action),
    Dispatched(Action),
}

struct RecordingStore {
    state: StoreState,
    events: Vec<Event>,
}

impl StoreHandle for RecordingStore {
    fn state(&self) -> &StoreState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        self.events.push(Event::Dispatched(action));
    }
}

impl RecordingStore {
    fn new(session: SessionState) -> Self {
        Self {
            state: StoreState::with_session(session),
            events: Vec::new(),
        }
    }

    fn dispatched(&self) -> Vec<&Action> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Dispatched(action) => Some(action),
                Event::Forwarded(_) => None,
            })
            .collect()
    }

    fn forwarded(&self) -> Vec<&Action> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Forwarded(action) => Some(action),
                Event::Dispatched(_) => None,
            })
            .collect()
    }

    fn commands(&self) -> Vec<&Command> {
        self.dispatched()
            .into_iter()
            .filter_map(|action| match action {
                Action::Command(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    fn notifications(&self) -> Vec<&Notification> {
        self.dispatched()
            .into_iter()
            .filter_map(|action| match action {
                Action::Notify(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    fn updates(&self) -> Vec<&StoreUpdate> {
        self.dispatched()
            .into_iter()
            .filter_map(|action| match action {
                Action::Update(update) => Some(update),
                _ => None,
            })
            .collect()
    }

    fn cache_playlist(&mut self, uri: &str, owner_id: &str, snapshot_id: &str) {
        self.state.library.playlists.insert(
            uri.to_string(),
            CachedPlaylist {
                uri: uri.to_string(),
                owner: Some(OwnerRef {
                    id: owner_id.to_string(),
                    fields: Default::default(),
                }),
                snapshot_id: Some(snapshot_id.to_string()),
                ..CachedPlaylist::default()
            },
        );
    }
}

fn authorized(id: &str) -> RecordingStore {
    RecordingStore::new(SessionState::authorized_as(id))
}

fn anonymous() -> RecordingStore {
    RecordingStore::new(SessionState::default())
}

fn parse(value: Value) -> Action {
    Action::from_value(value).expect("valid action")
}

fn route(store: &mut RecordingStore, action: Action) -> Routed<usize> {
    Router::default().route(
        store,
        |store: &mut RecordingStore, action| {
            store.events.push(Event::Forwarded(action));
            store.events.len()
        },
        action,
    )
}

fn route_json(store: &mut RecordingStore, value: Value) -> Routed<usize> {
    route(store, parse(value))
}
