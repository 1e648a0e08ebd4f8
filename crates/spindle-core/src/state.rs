use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::actions::UriSlice;
use super::payload::Entity;
use super::payload::OwnerRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }
}

/// Client-held authorization state. Written by the auth flow, only read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub authorized: bool,
    pub me: Option<UserIdentity>,
}

impl SessionState {
    pub fn authorized_as(id: impl Into<String>) -> Self {
        Self {
            authorized: true,
            me: Some(UserIdentity::new(id)),
        }
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.me.as_ref().map(|me| me.id.as_str())
    }

    pub fn is_owner(&self, owner_id: &str) -> bool {
        self.authorized && self.current_user_id() == Some(owner_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedPlaylist {
    pub uri: String,
    pub owner: Option<OwnerRef>,
    pub snapshot_id: Option<String>,
    pub can_edit: bool,
    pub tracks_total: Option<u64>,
    /// Full track listing, only present once the playlist itself was loaded.
    pub tracks: Option<Vec<Entity>>,
    pub is_following: Option<bool>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedAlbum {
    pub uri: String,
    pub added_at: Option<String>,
    pub tracks: Option<Vec<Entity>>,
    pub tracks_more: Option<String>,
    pub tracks_total: Option<u64>,
    pub is_following: Option<bool>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedEntity {
    pub uri: String,
    pub is_following: Option<bool>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryState {
    pub playlists: BTreeMap<String, CachedPlaylist>,
    pub albums: BTreeMap<String, CachedAlbum>,
    pub artists: BTreeMap<String, CachedEntity>,
    pub users: BTreeMap<String, CachedEntity>,

    pub new_releases: Option<UriSlice>,
    pub library_playlists: Option<UriSlice>,
    pub library_artists: Option<UriSlice>,
    pub library_albums: Option<UriSlice>,
    pub artist_albums: BTreeMap<String, UriSlice>,
    pub user_playlists: BTreeMap<String, UriSlice>,
    pub category_playlists: BTreeMap<String, UriSlice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub tracks: Vec<Entity>,
    pub tracks_more: Option<String>,
    pub artists_uris: Vec<String>,
    pub artists_more: Option<String>,
    pub albums_uris: Vec<String>,
    pub albums_more: Option<String>,
    pub playlists_uris: Vec<String>,
    pub playlists_more: Option<String>,
}

/// Snapshot of everything the router and reducers read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreState {
    pub session: SessionState,
    pub library: LibraryState,
    pub search: SearchResults,
}

impl StoreState {
    pub fn with_session(session: SessionState) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn playlist(&self, key: &str) -> Option<&CachedPlaylist> {
        self.library.playlists.get(key)
    }

    pub fn playlist_owner_id(&self, key: &str) -> Option<&str> {
        self.playlist(key)
            .and_then(|playlist| playlist.owner.as_ref())
            .map(|owner| owner.id.as_str())
    }
}
