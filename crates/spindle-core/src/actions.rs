use serde::Deserialize;
use serde::Deserializer;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;

use super::error::PayloadError;
use super::payload::AlbumEntry;
use super::payload::AlbumsData;
use super::payload::ArtistsData;
use super::payload::CurrentTrack;
use super::payload::Entity;
use super::payload::Page;
use super::payload::PlaylistRecord;
use super::payload::PlaylistSummary;
use super::payload::PlaylistsData;
use super::payload::RadioData;
use super::payload::RadioState;
use super::payload::SavedAlbum;
use super::payload::TracksData;

pub const NOTIFICATION_TAG: &str = "CREATE_NOTIFICATION";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Action {
    Inbound(InboundAction),
    Command(Command),
    Update(StoreUpdate),
    Notify(Notification),
    Other(RawAction),
}

/// Actions the router recognizes: UI requests, player events it observes,
/// and API responses it normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundAction {
    #[serde(rename = "SPOTIFY_CONNECT")]
    Connect,
    #[serde(rename = "SPOTIFY_DISCONNECTED")]
    Disconnected,
    #[serde(rename = "SPOTIFY_CREATE_PLAYLIST")]
    CreatePlaylist { name: String, is_private: bool },
    #[serde(rename = "SPOTIFY_REMOVE_PLAYLIST_TRACKS")]
    RemovePlaylistTracks {
        key: String,
        tracks_indexes: Vec<u32>,
    },
    #[serde(rename = "SPOTIFY_ADD_PLAYLIST_TRACKS")]
    AddPlaylistTracks {
        key: String,
        tracks_uris: Vec<String>,
    },
    #[serde(rename = "SPOTIFY_REORDER_PLAYLIST_TRACKS")]
    ReorderPlaylistTracks {
        key: String,
        range_start: u32,
        range_length: u32,
        insert_before: u32,
        snapshot_id: String,
    },
    #[serde(rename = "SPOTIFY_SAVE_PLAYLIST")]
    SavePlaylist {
        key: String,
        name: String,
        is_public: bool,
    },
    #[serde(rename = "MOPIDY_CURRENTTLTRACK")]
    CurrentTrackChanged {
        #[serde(default)]
        data: Option<CurrentTrack>,
        #[serde(flatten)]
        fields: Map<String, Value>,
    },
    #[serde(rename = "RADIO")]
    RadioChanged {
        data: RadioData,
        #[serde(flatten)]
        fields: Map<String, Value>,
    },
    #[serde(rename = "SPOTIFY_PLAYLIST_FOLLOWING_LOADED")]
    PlaylistFollowingLoaded { key: String, is_following: bool },
    #[serde(rename = "SPOTIFY_ALBUM_FOLLOWING_LOADED")]
    AlbumFollowingLoaded { key: String, is_following: bool },
    #[serde(rename = "SPOTIFY_ARTIST_FOLLOWING_LOADED")]
    ArtistFollowingLoaded { key: String, is_following: bool },
    #[serde(rename = "SPOTIFY_USER_FOLLOWING_LOADED")]
    UserFollowingLoaded { key: String, is_following: bool },
    #[serde(rename = "SPOTIFY_NEW_RELEASES_LOADED")]
    NewReleasesLoaded { data: AlbumsData },
    #[serde(rename = "SPOTIFY_ARTIST_ALBUMS_LOADED")]
    ArtistAlbumsLoaded { key: String, data: Page<Entity> },
    #[serde(rename = "SPOTIFY_USER_PLAYLISTS_LOADED")]
    UserPlaylistsLoaded {
        key: String,
        data: Page<PlaylistRecord>,
    },
    #[serde(rename = "SPOTIFY_CATEGORY_PLAYLISTS_LOADED")]
    CategoryPlaylistsLoaded { key: String, data: PlaylistsData },
    #[serde(rename = "SPOTIFY_LIBRARY_PLAYLISTS_LOADED")]
    LibraryPlaylistsLoaded { playlists: Vec<PlaylistRecord> },
    #[serde(rename = "SPOTIFY_LIBRARY_ARTISTS_LOADED")]
    LibraryArtistsLoaded { data: ArtistsData },
    #[serde(rename = "SPOTIFY_LIBRARY_ALBUMS_LOADED")]
    LibraryAlbumsLoaded { data: Page<SavedAlbum> },
    #[serde(rename = "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_TRACKS")]
    SearchMoreTracks { data: TracksData },
    #[serde(rename = "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ARTISTS")]
    SearchMoreArtists { data: ArtistsData },
    #[serde(rename = "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ALBUMS")]
    SearchMoreAlbums { data: AlbumsData },
    #[serde(rename = "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_PLAYLISTS")]
    SearchMorePlaylists { data: PlaylistsData },
}

impl InboundAction {
    pub const TAGS: [&'static str; 24] = [
        "SPOTIFY_CONNECT",
        "SPOTIFY_DISCONNECTED",
        "SPOTIFY_CREATE_PLAYLIST",
        "SPOTIFY_REMOVE_PLAYLIST_TRACKS",
        "SPOTIFY_ADD_PLAYLIST_TRACKS",
        "SPOTIFY_REORDER_PLAYLIST_TRACKS",
        "SPOTIFY_SAVE_PLAYLIST",
        "MOPIDY_CURRENTTLTRACK",
        "RADIO",
        "SPOTIFY_PLAYLIST_FOLLOWING_LOADED",
        "SPOTIFY_ALBUM_FOLLOWING_LOADED",
        "SPOTIFY_ARTIST_FOLLOWING_LOADED",
        "SPOTIFY_USER_FOLLOWING_LOADED",
        "SPOTIFY_NEW_RELEASES_LOADED",
        "SPOTIFY_ARTIST_ALBUMS_LOADED",
        "SPOTIFY_USER_PLAYLISTS_LOADED",
        "SPOTIFY_CATEGORY_PLAYLISTS_LOADED",
        "SPOTIFY_LIBRARY_PLAYLISTS_LOADED",
        "SPOTIFY_LIBRARY_ARTISTS_LOADED",
        "SPOTIFY_LIBRARY_ALBUMS_LOADED",
        "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_TRACKS",
        "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ARTISTS",
        "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ALBUMS",
        "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_PLAYLISTS",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connect => "SPOTIFY_CONNECT",
            Self::Disconnected => "SPOTIFY_DISCONNECTED",
            Self::CreatePlaylist { .. } => "SPOTIFY_CREATE_PLAYLIST",
            Self::RemovePlaylistTracks { .. } => "SPOTIFY_REMOVE_PLAYLIST_TRACKS",
            Self::AddPlaylistTracks { .. } => "SPOTIFY_ADD_PLAYLIST_TRACKS",
            Self::ReorderPlaylistTracks { .. } => "SPOTIFY_REORDER_PLAYLIST_TRACKS",
            Self::SavePlaylist { .. } => "SPOTIFY_SAVE_PLAYLIST",
            Self::CurrentTrackChanged { .. } => "MOPIDY_CURRENTTLTRACK",
            Self::RadioChanged { .. } => "RADIO",
            Self::PlaylistFollowingLoaded { .. } => "SPOTIFY_PLAYLIST_FOLLOWING_LOADED",
            Self::AlbumFollowingLoaded { .. } => "SPOTIFY_ALBUM_FOLLOWING_LOADED",
            Self::ArtistFollowingLoaded { .. } => "SPOTIFY_ARTIST_FOLLOWING_LOADED",
            Self::UserFollowingLoaded { .. } => "SPOTIFY_USER_FOLLOWING_LOADED",
            Self::NewReleasesLoaded { .. } => "SPOTIFY_NEW_RELEASES_LOADED",
            Self::ArtistAlbumsLoaded { .. } => "SPOTIFY_ARTIST_ALBUMS_LOADED",
            Self::UserPlaylistsLoaded { .. } => "SPOTIFY_USER_PLAYLISTS_LOADED",
            Self::CategoryPlaylistsLoaded { .. } => "SPOTIFY_CATEGORY_PLAYLISTS_LOADED",
            Self::LibraryPlaylistsLoaded { .. } => "SPOTIFY_LIBRARY_PLAYLISTS_LOADED",
            Self::LibraryArtistsLoaded { .. } => "SPOTIFY_LIBRARY_ARTISTS_LOADED",
            Self::LibraryAlbumsLoaded { .. } => "SPOTIFY_LIBRARY_ALBUMS_LOADED",
            Self::SearchMoreTracks { .. } => "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_TRACKS",
            Self::SearchMoreArtists { .. } => "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ARTISTS",
            Self::SearchMoreAlbums { .. } => "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ALBUMS",
            Self::SearchMorePlaylists { .. } => "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_PLAYLISTS",
        }
    }
}

/// Requests handed to the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "SPOTIFY_GET_ME")]
    GetMe,
    #[serde(rename = "SPOTIFY_CREATE_PLAYLIST_REQUEST")]
    CreatePlaylist { name: String, is_private: bool },
    #[serde(rename = "SPOTIFY_DELETE_PLAYLIST_TRACKS")]
    DeletePlaylistTracks {
        uri: String,
        snapshot_id: Option<String>,
        tracks_indexes: Vec<u32>,
    },
    #[serde(rename = "SPOTIFY_ADD_TRACKS_TO_PLAYLIST")]
    AddTracksToPlaylist {
        key: String,
        tracks_uris: Vec<String>,
    },
    #[serde(rename = "SPOTIFY_REORDER_PLAYLIST_TRACKS_REQUEST")]
    ReorderPlaylistTracks {
        key: String,
        range_start: u32,
        range_length: u32,
        insert_before: u32,
        snapshot_id: String,
    },
    #[serde(rename = "SPOTIFY_SAVE_PLAYLIST_REQUEST")]
    SavePlaylist {
        key: String,
        name: String,
        is_public: bool,
    },
    #[serde(rename = "SPOTIFY_GET_TRACK")]
    GetTrack { uri: String },
    #[serde(rename = "SPOTIFY_RESOLVE_RADIO_SEEDS")]
    ResolveRadioSeeds { radio: RadioState },
}

impl Command {
    pub const TAGS: [&'static str; 8] = [
        "SPOTIFY_GET_ME",
        "SPOTIFY_CREATE_PLAYLIST_REQUEST",
        "SPOTIFY_DELETE_PLAYLIST_TRACKS",
        "SPOTIFY_ADD_TRACKS_TO_PLAYLIST",
        "SPOTIFY_REORDER_PLAYLIST_TRACKS_REQUEST",
        "SPOTIFY_SAVE_PLAYLIST_REQUEST",
        "SPOTIFY_GET_TRACK",
        "SPOTIFY_RESOLVE_RADIO_SEEDS",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::GetMe => "SPOTIFY_GET_ME",
            Self::CreatePlaylist { .. } => "SPOTIFY_CREATE_PLAYLIST_REQUEST",
            Self::DeletePlaylistTracks { .. } => "SPOTIFY_DELETE_PLAYLIST_TRACKS",
            Self::AddTracksToPlaylist { .. } => "SPOTIFY_ADD_TRACKS_TO_PLAYLIST",
            Self::ReorderPlaylistTracks { .. } => "SPOTIFY_REORDER_PLAYLIST_TRACKS_REQUEST",
            Self::SavePlaylist { .. } => "SPOTIFY_SAVE_PLAYLIST_REQUEST",
            Self::GetTrack { .. } => "SPOTIFY_GET_TRACK",
            Self::ResolveRadioSeeds { .. } => "SPOTIFY_RESOLVE_RADIO_SEEDS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowingPatch {
    pub is_following: bool,
}

/// URIs-only view of one page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UriSlice {
    pub uris: Vec<String>,
    pub more: Option<String>,
    pub total: u64,
}

/// Partial search results; only the categories present are replaced.
///
/// Serializes each present category together with its cursor, `null` on the
/// last page, and leaves absent categories out entirely.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResultsPatch {
    #[serde(default)]
    pub tracks: Option<Vec<Entity>>,
    #[serde(default)]
    pub tracks_more: Option<String>,
    #[serde(default)]
    pub artists_uris: Option<Vec<String>>,
    #[serde(default)]
    pub artists_more: Option<String>,
    #[serde(default)]
    pub albums_uris: Option<Vec<String>>,
    #[serde(default)]
    pub albums_more: Option<String>,
    #[serde(default)]
    pub playlists_uris: Option<Vec<String>>,
    #[serde(default)]
    pub playlists_more: Option<String>,
}

impl Serialize for SearchResultsPatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(tracks) = &self.tracks {
            map.serialize_entry("tracks", tracks)?;
            map.serialize_entry("tracks_more", &self.tracks_more)?;
        }
        if let Some(uris) = &self.artists_uris {
            map.serialize_entry("artists_uris", uris)?;
            map.serialize_entry("artists_more", &self.artists_more)?;
        }
        if let Some(uris) = &self.albums_uris {
            map.serialize_entry("albums_uris", uris)?;
            map.serialize_entry("albums_more", &self.albums_more)?;
        }
        if let Some(uris) = &self.playlists_uris {
            map.serialize_entry("playlists_uris", uris)?;
            map.serialize_entry("playlists_more", &self.playlists_more)?;
        }
        map.end()
    }
}

/// Normalized actions consumed by the store reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreUpdate {
    #[serde(rename = "PLAYLIST_LOADED")]
    PlaylistLoaded { key: String, playlist: FollowingPatch },
    #[serde(rename = "ALBUM_LOADED")]
    AlbumLoaded { key: String, album: FollowingPatch },
    #[serde(rename = "ARTIST_LOADED")]
    ArtistLoaded { key: String, artist: FollowingPatch },
    #[serde(rename = "USER_LOADED")]
    UserLoaded { key: String, user: FollowingPatch },
    #[serde(rename = "ALBUMS_LOADED")]
    AlbumsLoaded { albums: Vec<AlbumEntry> },
    #[serde(rename = "ARTISTS_LOADED")]
    ArtistsLoaded { artists: Vec<Entity> },
    #[serde(rename = "PLAYLISTS_LOADED")]
    PlaylistsLoaded { playlists: Vec<PlaylistSummary> },
    #[serde(rename = "NEW_RELEASES_LOADED")]
    NewReleasesLoaded {
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "ARTIST_ALBUMS_LOADED")]
    ArtistAlbumsLoaded {
        key: String,
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "USER_PLAYLISTS_LOADED")]
    UserPlaylistsLoaded {
        key: String,
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "CATEGORY_PLAYLISTS_LOADED")]
    CategoryPlaylistsLoaded {
        key: String,
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "LIBRARY_PLAYLISTS_LOADED")]
    LibraryPlaylistsLoaded {
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "LIBRARY_ARTISTS_LOADED")]
    LibraryArtistsLoaded {
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "LIBRARY_ALBUMS_LOADED")]
    LibraryAlbumsLoaded {
        #[serde(flatten)]
        slice: UriSlice,
    },
    #[serde(rename = "SEARCH_RESULTS_LOADED")]
    SearchResultsLoaded(SearchResultsPatch),
}

impl StoreUpdate {
    pub const TAGS: [&'static str; 15] = [
        "PLAYLIST_LOADED",
        "ALBUM_LOADED",
        "ARTIST_LOADED",
        "USER_LOADED",
        "ALBUMS_LOADED",
        "ARTISTS_LOADED",
        "PLAYLISTS_LOADED",
        "NEW_RELEASES_LOADED",
        "ARTIST_ALBUMS_LOADED",
        "USER_PLAYLISTS_LOADED",
        "CATEGORY_PLAYLISTS_LOADED",
        "LIBRARY_PLAYLISTS_LOADED",
        "LIBRARY_ARTISTS_LOADED",
        "LIBRARY_ALBUMS_LOADED",
        "SEARCH_RESULTS_LOADED",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlaylistLoaded { .. } => "PLAYLIST_LOADED",
            Self::AlbumLoaded { .. } => "ALBUM_LOADED",
            Self::ArtistLoaded { .. } => "ARTIST_LOADED",
            Self::UserLoaded { .. } => "USER_LOADED",
            Self::AlbumsLoaded { .. } => "ALBUMS_LOADED",
            Self::ArtistsLoaded { .. } => "ARTISTS_LOADED",
            Self::PlaylistsLoaded { .. } => "PLAYLISTS_LOADED",
            Self::NewReleasesLoaded { .. } => "NEW_RELEASES_LOADED",
            Self::ArtistAlbumsLoaded { .. } => "ARTIST_ALBUMS_LOADED",
            Self::UserPlaylistsLoaded { .. } => "USER_PLAYLISTS_LOADED",
            Self::CategoryPlaylistsLoaded { .. } => "CATEGORY_PLAYLISTS_LOADED",
            Self::LibraryPlaylistsLoaded { .. } => "LIBRARY_PLAYLISTS_LOADED",
            Self::LibraryArtistsLoaded { .. } => "LIBRARY_ARTISTS_LOADED",
            Self::LibraryAlbumsLoaded { .. } => "LIBRARY_ALBUMS_LOADED",
            Self::SearchResultsLoaded(_) => "SEARCH_RESULTS_LOADED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "CREATE_NOTIFICATION")]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn bad(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Bad,
        }
    }
}

/// An action of a kind this crate has no schema for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }
}

impl Action {
    /// Parses a wire action. Known tags are validated against their schema
    /// and fail fast; unknown tags are kept verbatim as [`Action::Other`].
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        let kind = value
            .as_object()
            .ok_or(PayloadError::NotAnObject)?
            .get("type")
            .and_then(Value::as_str)
            .ok_or(PayloadError::MissingType)?
            .to_string();

        let malformed = |source| PayloadError::Malformed {
            kind: kind.clone(),
            source,
        };

        if InboundAction::TAGS.contains(&kind.as_str()) {
            serde_json::from_value(value)
                .map(Self::Inbound)
                .map_err(malformed)
        } else if Command::TAGS.contains(&kind.as_str()) {
            serde_json::from_value(value)
                .map(Self::Command)
                .map_err(malformed)
        } else if StoreUpdate::TAGS.contains(&kind.as_str()) {
            serde_json::from_value(value)
                .map(Self::Update)
                .map_err(malformed)
        } else if kind == NOTIFICATION_TAG {
            serde_json::from_value(value)
                .map(Self::Notify)
                .map_err(malformed)
        } else {
            serde_json::from_value(value)
                .map(Self::Other)
                .map_err(malformed)
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Inbound(action) => action.kind(),
            Self::Command(command) => command.kind(),
            Self::Update(update) => update.kind(),
            Self::Notify(_) => NOTIFICATION_TAG,
            Self::Other(raw) => raw.kind.as_str(),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<InboundAction> for Action {
    fn from(action: InboundAction) -> Self {
        Self::Inbound(action)
    }
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

impl From<StoreUpdate> for Action {
    fn from(update: StoreUpdate) -> Self {
        Self::Update(update)
    }
}

impl From<Notification> for Action {
    fn from(notification: Notification) -> Self {
        Self::Notify(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn last_search_page_sends_explicit_null_cursor() {
        let update = StoreUpdate::SearchResultsLoaded(SearchResultsPatch {
            tracks: Some(vec![Entity::new("spotify:track:t9")]),
            tracks_more: None,
            ..SearchResultsPatch::default()
        });

        let encoded = serde_json::to_value(Action::Update(update.clone())).expect("encode");

        assert_eq!(
            encoded,
            json!({
                "type": "SEARCH_RESULTS_LOADED",
                "tracks": [{"uri": "spotify:track:t9"}],
                "tracks_more": null
            })
        );
        assert_eq!(
            Action::from_value(encoded).expect("decode"),
            Action::Update(update)
        );
    }

    #[test]
    fn unknown_kind_is_kept_verbatim() {
        let value = json!({"type": "MOPIDY_VOLUME", "volume": 40});
        let action = Action::from_value(value.clone()).expect("parse");

        assert_eq!(action.kind(), "MOPIDY_VOLUME");
        assert!(matches!(action, Action::Other(_)));
        assert_eq!(serde_json::to_value(&action).expect("encode"), value);
    }

    #[test]
    fn known_kind_with_bad_shape_fails_fast() {
        let err = Action::from_value(json!({
            "type": "SPOTIFY_USER_PLAYLISTS_LOADED",
            "key": "spotify:user:u1",
            "data": {"items": [{"uri": "spotify:playlist:p1", "owner": {"id": "u1"}}], "total": 1}
        }))
        .expect_err("tracks.total is required");

        match err {
            PayloadError::Malformed { kind, .. } => {
                assert_eq!(kind, "SPOTIFY_USER_PLAYLISTS_LOADED")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn untyped_input_is_rejected() {
        assert!(matches!(
            Action::from_value(json!(["SPOTIFY_CONNECT"])),
            Err(PayloadError::NotAnObject)
        ));
        assert!(matches!(
            Action::from_value(json!({"kind": "SPOTIFY_CONNECT"})),
            Err(PayloadError::MissingType)
        ));
    }

    #[test]
    fn inbound_tags_round_trip_through_kind() {
        let samples = vec![
            json!({"type": "SPOTIFY_CONNECT"}),
            json!({"type": "SPOTIFY_DISCONNECTED"}),
            json!({"type": "SPOTIFY_CREATE_PLAYLIST", "name": "n", "is_private": true}),
            json!({"type": "SPOTIFY_REMOVE_PLAYLIST_TRACKS", "key": "k", "tracks_indexes": [1]}),
            json!({"type": "SPOTIFY_ADD_PLAYLIST_TRACKS", "key": "k", "tracks_uris": []}),
            json!({
                "type": "SPOTIFY_REORDER_PLAYLIST_TRACKS",
                "key": "k",
                "range_start": 0,
                "range_length": 1,
                "insert_before": 3,
                "snapshot_id": "s"
            }),
            json!({"type": "SPOTIFY_SAVE_PLAYLIST", "key": "k", "name": "n", "is_public": false}),
            json!({"type": "MOPIDY_CURRENTTLTRACK", "data": null}),
            json!({"type": "RADIO", "data": {"radio": {"enabled": false}}}),
            json!({"type": "SPOTIFY_PLAYLIST_FOLLOWING_LOADED", "key": "k", "is_following": true}),
            json!({"type": "SPOTIFY_ALBUM_FOLLOWING_LOADED", "key": "k", "is_following": true}),
            json!({"type": "SPOTIFY_ARTIST_FOLLOWING_LOADED", "key": "k", "is_following": true}),
            json!({"type": "SPOTIFY_USER_FOLLOWING_LOADED", "key": "k", "is_following": true}),
            json!({"type": "SPOTIFY_NEW_RELEASES_LOADED", "data": {"albums": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_ARTIST_ALBUMS_LOADED", "key": "k", "data": {"items": [], "total": 0}}),
            json!({"type": "SPOTIFY_USER_PLAYLISTS_LOADED", "key": "k", "data": {"items": [], "total": 0}}),
            json!({"type": "SPOTIFY_CATEGORY_PLAYLISTS_LOADED", "key": "k", "data": {"playlists": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_LIBRARY_PLAYLISTS_LOADED", "playlists": []}),
            json!({"type": "SPOTIFY_LIBRARY_ARTISTS_LOADED", "data": {"artists": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_LIBRARY_ALBUMS_LOADED", "data": {"items": [], "total": 0}}),
            json!({"type": "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_TRACKS", "data": {"tracks": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ARTISTS", "data": {"artists": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_ALBUMS", "data": {"albums": {"items": [], "total": 0}}}),
            json!({"type": "SPOTIFY_SEARCH_RESULTS_LOADED_MORE_PLAYLISTS", "data": {"playlists": {"items": [], "total": 0}}}),
        ];
        assert_eq!(samples.len(), InboundAction::TAGS.len());

        for sample in samples {
            let tag = sample["type"].as_str().expect("tag").to_string();
            let action = Action::from_value(sample).expect("parse");
            assert!(matches!(action, Action::Inbound(_)), "{tag} should be inbound");
            assert_eq!(action.kind(), tag);
            let encoded = serde_json::to_value(&action).expect("encode");
            assert_eq!(encoded["type"], json!(tag));
        }
    }

    #[test]
    fn outbound_actions_serialize_with_type_tag() {
        let notification = Action::from(Notification::bad("nope"));
        assert_eq!(
            serde_json::to_value(&notification).expect("encode"),
            json!({"type": "CREATE_NOTIFICATION", "message": "nope", "level": "bad"})
        );

        let slice = Action::from(StoreUpdate::ArtistAlbumsLoaded {
            key: "spotify:artist:a1".to_string(),
            slice: UriSlice {
                uris: vec!["spotify:album:x".to_string()],
                more: None,
                total: 1,
            },
        });
        assert_eq!(
            serde_json::to_value(&slice).expect("encode"),
            json!({
                "type": "ARTIST_ALBUMS_LOADED",
                "key": "spotify:artist:a1",
                "uris": ["spotify:album:x"],
                "more": null,
                "total": 1
            })
        );

        let reparsed = Action::from_value(serde_json::to_value(&slice).expect("encode")).expect("parse");
        assert_eq!(reparsed, slice);
    }
}
