use serde_json::json;

pub(super) use super::reduce;
pub(super) use crate::actions::Action;
pub(super) use crate::actions::FollowingPatch;
pub(super) use crate::actions::SearchResultsPatch;
pub(super) use crate::actions::StoreUpdate;
pub(super) use crate::actions::UriSlice;
pub(super) use crate::payload::AlbumEntry;
pub(super) use crate::payload::Entity;
pub(super) use crate::payload::LibraryAlbum;
pub(super) use crate::payload::OwnerRef;
pub(super) use crate::payload::PlaylistSummary;
pub(super) use crate::state::CachedPlaylist;
pub(super) use crate::state::SessionState;
pub(super) use crate::state::StoreState;

mod slices;

fn state() -> StoreState {
    StoreState::with_session(SessionState::authorized_as("u1"))
}

fn run_update(state: &mut StoreState, update: StoreUpdate) {
    reduce(state, Action::Update(update));
}

fn owner(id: &str) -> OwnerRef {
    OwnerRef {
        id: id.to_string(),
        fields: Default::default(),
    }
}

fn summary(uri: &str, owner_id: &str, tracks_total: u64) -> PlaylistSummary {
    let mut fields = serde_json::Map::new();
    fields.insert("name".to_string(), json!(format!("name of {uri}")));
    PlaylistSummary {
        uri: uri.to_string(),
        owner: owner(owner_id),
        snapshot_id: None,
        can_edit: owner_id == "u1",
        tracks_total,
        fields,
    }
}

fn slice(uris: &[&str], more: Option<&str>, total: u64) -> UriSlice {
    UriSlice {
        uris: uris.iter().map(|uri| uri.to_string()).collect(),
        more: more.map(str::to_string),
        total,
    }
}

fn tracks(uris: &[&str]) -> Vec<Entity> {
    uris.iter().map(|uri| Entity::new(*uri)).collect()
}
