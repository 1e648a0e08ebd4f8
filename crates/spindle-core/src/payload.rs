use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::uri::HasUri;

/// One page of a paginated API listing: `items` plus the `next` cursor and
/// the collection `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    pub total: u64,
}

/// Any service record addressed by URI. Fields the router does not inspect
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub uri: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            fields: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerRef {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCount {
    pub total: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Playlist as listed by the API, with its nested track collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub uri: String,
    pub owner: OwnerRef,
    pub tracks: TrackCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Store-facing projection of a [`PlaylistRecord`].
///
/// Carries no `tracks` field. Reducers read the absence as "keep whatever
/// detailed track list is already cached".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub uri: String,
    pub owner: OwnerRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    pub can_edit: bool,
    pub tracks_total: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PlaylistSummary {
    pub fn project(record: PlaylistRecord, can_edit: bool) -> Self {
        let PlaylistRecord {
            uri,
            owner,
            tracks,
            snapshot_id,
            fields,
        } = record;
        Self {
            uri,
            owner,
            snapshot_id,
            can_edit,
            tracks_total: tracks.total,
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub uri: String,
    pub tracks: Page<Entity>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Library listing entry: the album plus the time it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub added_at: String,
    pub album: AlbumRecord,
}

/// Saved album flattened for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryAlbum {
    pub uri: String,
    pub added_at: String,
    pub tracks: Vec<Entity>,
    pub tracks_more: Option<String>,
    pub tracks_total: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<SavedAlbum> for LibraryAlbum {
    fn from(saved: SavedAlbum) -> Self {
        let SavedAlbum { added_at, album } = saved;
        Self {
            uri: album.uri,
            added_at,
            tracks: album.tracks.items,
            tracks_more: album.tracks.next,
            tracks_total: album.tracks.total,
            fields: album.fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlbumEntry {
    Library(LibraryAlbum),
    Plain(Entity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumsData {
    pub albums: Page<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistsData {
    pub artists: Page<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracksData {
    pub tracks: Page<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistsData {
    pub playlists: Page<PlaylistRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTrack {
    pub track: Entity,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioState {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_artists: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_tracks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_genres: Option<Vec<String>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioData {
    pub radio: RadioState,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HasUri for Entity {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl HasUri for PlaylistRecord {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl HasUri for PlaylistSummary {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl HasUri for LibraryAlbum {
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl HasUri for AlbumEntry {
    fn uri(&self) -> &str {
        match self {
            Self::Library(album) => &album.uri,
            Self::Plain(album) => &album.uri,
        }
    }
}
