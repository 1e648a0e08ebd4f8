use log::debug;
use log::info;
use log::trace;
use log::warn;

use super::actions::Action;
use super::actions::Command;
use super::actions::FollowingPatch;
use super::actions::InboundAction;
use super::actions::Notification;
use super::actions::SearchResultsPatch;
use super::actions::StoreUpdate;
use super::actions::UriSlice;
use super::config::RouterConfig;
use super::error::Denied;
use super::payload::AlbumEntry;
use super::payload::AlbumsData;
use super::payload::ArtistsData;
use super::payload::LibraryAlbum;
use super::payload::PlaylistRecord;
use super::payload::PlaylistSummary;
use super::payload::PlaylistsData;
use super::payload::TracksData;
use super::state::SessionState;
use super::state::StoreState;
use super::uri::as_uris;
use super::uri::get_from_uri;
use super::uri::is_track_uri;
use super::uri::HasUri;
use super::uri::UriElement;

/// Read access to the store snapshot plus the ability to dispatch into it.
pub trait StoreHandle {
    fn state(&self) -> &StoreState;
    fn dispatch(&mut self, action: Action);
}

/// What the router did with one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed<R> {
    /// Not a kind the router owns; `next` ran and nothing was dispatched.
    Forwarded(R),
    /// Observed kind; `next` ran first, then any follow-up was dispatched.
    Observed(R),
    /// Consumed; derived actions were dispatched instead of calling `next`.
    Handled,
    /// Refused; one bad notification was dispatched and nothing else.
    Denied(Denied),
}

impl<R> Routed<R> {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    pub fn forwarded(self) -> Option<R> {
        match self {
            Self::Forwarded(result) | Self::Observed(result) => Some(result),
            Self::Handled | Self::Denied(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn route<H, N, R>(&self, store: &mut H, next: N, action: Action) -> Routed<R>
    where
        H: StoreHandle + ?Sized,
        N: FnOnce(&mut H, Action) -> R,
    {
        let inbound = match action {
            Action::Inbound(inbound) => inbound,
            other => {
                trace!("forwarding {}", other.kind());
                return Routed::Forwarded(next(store, other));
            }
        };
        let kind = inbound.kind();
        debug!("routing {kind}");

        match inbound {
            InboundAction::Connect => {
                info!("streaming service connected, fetching current user");
                store.dispatch(Command::GetMe.into());
                Routed::Handled
            }
            InboundAction::Disconnected => {
                info!("streaming service disconnected");
                let message = self.config.disconnected_message.clone();
                store.dispatch(Notification::bad(message).into());
                Routed::Handled
            }
            InboundAction::CreatePlaylist { name, is_private } => {
                if let Err(denied) = require_authorized(&store.state().session) {
                    return deny(store, kind, denied);
                }
                store.dispatch(Command::CreatePlaylist { name, is_private }.into());
                Routed::Handled
            }
            InboundAction::RemovePlaylistTracks {
                key,
                tracks_indexes,
            } => {
                let target = removal_target(store.state(), &key);
                match target {
                    Ok((uri, snapshot_id)) => {
                        store.dispatch(
                            Command::DeletePlaylistTracks {
                                uri,
                                snapshot_id,
                                tracks_indexes,
                            }
                            .into(),
                        );
                        Routed::Handled
                    }
                    Err(denied) => deny(store, kind, denied),
                }
            }
            InboundAction::AddPlaylistTracks { key, tracks_uris } => {
                if let Err(denied) = require_authorized(&store.state().session) {
                    return deny(store, kind, denied);
                }
                store.dispatch(Command::AddTracksToPlaylist { key, tracks_uris }.into());
                Routed::Handled
            }
            InboundAction::ReorderPlaylistTracks {
                key,
                range_start,
                range_length,
                insert_before,
                snapshot_id,
            } => {
                let owner_id = reorder_owner_id(store.state(), &key);
                if let Err(denied) = require_owner(&store.state().session, owner_id.as_deref()) {
                    return deny(store, kind, denied);
                }
                store.dispatch(
                    Command::ReorderPlaylistTracks {
                        key,
                        range_start,
                        range_length,
                        insert_before,
                        snapshot_id,
                    }
                    .into(),
                );
                Routed::Handled
            }
            InboundAction::SavePlaylist {
                key,
                name,
                is_public,
            } => {
                if let Err(denied) = require_authorized(&store.state().session) {
                    return deny(store, kind, denied);
                }
                store.dispatch(
                    Command::SavePlaylist {
                        key,
                        name,
                        is_public,
                    }
                    .into(),
                );
                Routed::Handled
            }
            InboundAction::CurrentTrackChanged { data, fields } => {
                let track_uri = data.as_ref().map(|current| current.track.uri.clone());
                let result = next(
                    store,
                    Action::Inbound(InboundAction::CurrentTrackChanged { data, fields }),
                );
                if let Some(uri) =
                    track_uri.filter(|uri| is_track_uri(&self.config.track_uri_prefix, uri))
                {
                    store.dispatch(Command::GetTrack { uri }.into());
                }
                Routed::Observed(result)
            }
            InboundAction::RadioChanged { data, fields } => {
                let radio = data.radio.clone();
                let result = next(
                    store,
                    Action::Inbound(InboundAction::RadioChanged { data, fields }),
                );
                if radio.enabled {
                    store.dispatch(Command::ResolveRadioSeeds { radio }.into());
                }
                Routed::Observed(result)
            }
            InboundAction::PlaylistFollowingLoaded { key, is_following } => {
                let playlist = FollowingPatch { is_following };
                store.dispatch(StoreUpdate::PlaylistLoaded { key, playlist }.into());
                Routed::Handled
            }
            InboundAction::AlbumFollowingLoaded { key, is_following } => {
                let album = FollowingPatch { is_following };
                store.dispatch(StoreUpdate::AlbumLoaded { key, album }.into());
                Routed::Handled
            }
            InboundAction::ArtistFollowingLoaded { key, is_following } => {
                let artist = FollowingPatch { is_following };
                store.dispatch(StoreUpdate::ArtistLoaded { key, artist }.into());
                Routed::Handled
            }
            InboundAction::UserFollowingLoaded { key, is_following } => {
                let user = FollowingPatch { is_following };
                store.dispatch(StoreUpdate::UserLoaded { key, user }.into());
                Routed::Handled
            }
            InboundAction::NewReleasesLoaded {
                data: AlbumsData { albums },
            } => {
                let slice = slice_of(&albums.items, albums.next, albums.total);
                let albums = albums.items.into_iter().map(AlbumEntry::Plain).collect();
                store.dispatch(StoreUpdate::AlbumsLoaded { albums }.into());
                store.dispatch(StoreUpdate::NewReleasesLoaded { slice }.into());
                Routed::Handled
            }
            InboundAction::ArtistAlbumsLoaded { key, data } => {
                let slice = slice_of(&data.items, data.next, data.total);
                let albums = data.items.into_iter().map(AlbumEntry::Plain).collect();
                store.dispatch(StoreUpdate::AlbumsLoaded { albums }.into());
                store.dispatch(StoreUpdate::ArtistAlbumsLoaded { key, slice }.into());
                Routed::Handled
            }
            InboundAction::LibraryArtistsLoaded {
                data: ArtistsData { artists },
            } => {
                let slice = slice_of(&artists.items, artists.next, artists.total);
                store.dispatch(
                    StoreUpdate::ArtistsLoaded {
                        artists: artists.items,
                    }
                    .into(),
                );
                store.dispatch(StoreUpdate::LibraryArtistsLoaded { slice }.into());
                Routed::Handled
            }
            InboundAction::UserPlaylistsLoaded { key, data } => {
                let playlists = summarize(&store.state().session, data.items);
                let slice = slice_of(&playlists, data.next, data.total);
                store.dispatch(StoreUpdate::PlaylistsLoaded { playlists }.into());
                store.dispatch(StoreUpdate::UserPlaylistsLoaded { key, slice }.into());
                Routed::Handled
            }
            InboundAction::CategoryPlaylistsLoaded {
                key,
                data: PlaylistsData { playlists },
            } => {
                let summaries = summarize(&store.state().session, playlists.items);
                let slice = slice_of(&summaries, playlists.next, playlists.total);
                store.dispatch(
                    StoreUpdate::PlaylistsLoaded {
                        playlists: summaries,
                    }
                    .into(),
                );
                store.dispatch(StoreUpdate::CategoryPlaylistsLoaded { key, slice }.into());
                Routed::Handled
            }
            InboundAction::LibraryPlaylistsLoaded { playlists } => {
                let playlists = summarize(&store.state().session, playlists);
                let total = playlists.len() as u64;
                let slice = slice_of(&playlists, None, total);
                store.dispatch(StoreUpdate::PlaylistsLoaded { playlists }.into());
                store.dispatch(StoreUpdate::LibraryPlaylistsLoaded { slice }.into());
                Routed::Handled
            }
            InboundAction::LibraryAlbumsLoaded { data } => {
                let albums: Vec<LibraryAlbum> =
                    data.items.into_iter().map(LibraryAlbum::from).collect();
                let slice = slice_of(&albums, data.next, data.total);
                let albums = albums.into_iter().map(AlbumEntry::Library).collect();
                store.dispatch(StoreUpdate::AlbumsLoaded { albums }.into());
                store.dispatch(StoreUpdate::LibraryAlbumsLoaded { slice }.into());
                Routed::Handled
            }
            InboundAction::SearchMoreTracks {
                data: TracksData { tracks },
            } => {
                let patch = SearchResultsPatch {
                    tracks: Some(tracks.items),
                    tracks_more: tracks.next,
                    ..SearchResultsPatch::default()
                };
                store.dispatch(StoreUpdate::SearchResultsLoaded(patch).into());
                Routed::Handled
            }
            InboundAction::SearchMoreArtists {
                data: ArtistsData { artists },
            } => {
                let patch = SearchResultsPatch {
                    artists_uris: Some(as_uris(&artists.items)),
                    artists_more: artists.next,
                    ..SearchResultsPatch::default()
                };
                store.dispatch(
                    StoreUpdate::ArtistsLoaded {
                        artists: artists.items,
                    }
                    .into(),
                );
                store.dispatch(StoreUpdate::SearchResultsLoaded(patch).into());
                Routed::Handled
            }
            InboundAction::SearchMoreAlbums {
                data: AlbumsData { albums },
            } => {
                let patch = SearchResultsPatch {
                    albums_uris: Some(as_uris(&albums.items)),
                    albums_more: albums.next,
                    ..SearchResultsPatch::default()
                };
                let albums = albums.items.into_iter().map(AlbumEntry::Plain).collect();
                store.dispatch(StoreUpdate::AlbumsLoaded { albums }.into());
                store.dispatch(StoreUpdate::SearchResultsLoaded(patch).into());
                Routed::Handled
            }
            InboundAction::SearchMorePlaylists {
                data: PlaylistsData { playlists },
            } => {
                let summaries = summarize(&store.state().session, playlists.items);
                let patch = SearchResultsPatch {
                    playlists_uris: Some(as_uris(&summaries)),
                    playlists_more: playlists.next,
                    ..SearchResultsPatch::default()
                };
                store.dispatch(
                    StoreUpdate::PlaylistsLoaded {
                        playlists: summaries,
                    }
                    .into(),
                );
                store.dispatch(StoreUpdate::SearchResultsLoaded(patch).into());
                Routed::Handled
            }
        }
    }
}

fn deny<H, R>(store: &mut H, kind: &str, denied: Denied) -> Routed<R>
where
    H: StoreHandle + ?Sized,
{
    warn!("{kind} refused: {denied}");
    store.dispatch(Notification::bad(denied.to_string()).into());
    Routed::Denied(denied)
}

fn require_authorized(session: &SessionState) -> Result<(), Denied> {
    if session.authorized {
        Ok(())
    } else {
        Err(Denied::NotAuthorized)
    }
}

fn require_owner(session: &SessionState, owner_id: Option<&str>) -> Result<(), Denied> {
    require_authorized(session)?;
    match (session.current_user_id(), owner_id) {
        (Some(me), Some(owner)) if me == owner => Ok(()),
        _ => Err(Denied::NotOwner),
    }
}

/// Playlist URI and snapshot to delete from, if the session may edit it.
fn removal_target(state: &StoreState, key: &str) -> Result<(String, Option<String>), Denied> {
    require_owner(&state.session, state.playlist_owner_id(key))?;
    match state.playlist(key) {
        Some(playlist) => Ok((playlist.uri.clone(), playlist.snapshot_id.clone())),
        None => Err(Denied::NotOwner),
    }
}

/// Owner named in a `service:user:<owner>:playlist:<id>` key, else the owner of
/// the cached playlist.
fn reorder_owner_id(state: &StoreState, key: &str) -> Option<String> {
    get_from_uri(UriElement::UserId, key)
        .or_else(|| state.playlist_owner_id(key).map(str::to_string))
}

fn summarize(session: &SessionState, records: Vec<PlaylistRecord>) -> Vec<PlaylistSummary> {
    records
        .into_iter()
        .map(|record| {
            let can_edit = session.is_owner(&record.owner.id);
            PlaylistSummary::project(record, can_edit)
        })
        .collect()
}

fn slice_of<T: HasUri>(items: &[T], more: Option<String>, total: u64) -> UriSlice {
    UriSlice {
        uris: as_uris(items),
        more,
        total,
    }
}

#[cfg(test)]
mod tests;
