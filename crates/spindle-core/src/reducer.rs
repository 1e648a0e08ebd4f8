use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;

use super::actions::Action;
use super::actions::SearchResultsPatch;
use super::actions::StoreUpdate;
use super::actions::UriSlice;
use super::payload::AlbumEntry;
use super::payload::Entity;
use super::payload::LibraryAlbum;
use super::payload::PlaylistSummary;
use super::state::CachedAlbum;
use super::state::CachedEntity;
use super::state::CachedPlaylist;
use super::state::LibraryState;
use super::state::SearchResults;
use super::state::StoreState;

/// Applies a normalized store update. Every other action leaves the state
/// as it is.
pub fn reduce(state: &mut StoreState, action: Action) {
    if let Action::Update(update) = action {
        reduce_update(state, update);
    }
}

fn reduce_update(state: &mut StoreState, update: StoreUpdate) {
    let library = &mut state.library;
    match update {
        StoreUpdate::PlaylistLoaded { key, playlist } => {
            playlist_entry(library, &key).is_following = Some(playlist.is_following);
        }
        StoreUpdate::AlbumLoaded { key, album } => {
            album_entry(library, &key).is_following = Some(album.is_following);
        }
        StoreUpdate::ArtistLoaded { key, artist } => {
            entity_entry(&mut library.artists, &key).is_following = Some(artist.is_following);
        }
        StoreUpdate::UserLoaded { key, user } => {
            entity_entry(&mut library.users, &key).is_following = Some(user.is_following);
        }
        StoreUpdate::AlbumsLoaded { albums } => {
            for album in albums {
                merge_album(library, album);
            }
        }
        StoreUpdate::ArtistsLoaded { artists } => {
            for Entity { uri, fields } in artists {
                merge_fields(&mut entity_entry(&mut library.artists, &uri).fields, fields);
            }
        }
        StoreUpdate::PlaylistsLoaded { playlists } => {
            for playlist in playlists {
                merge_playlist(library, playlist);
            }
        }
        StoreUpdate::NewReleasesLoaded { slice } => {
            merge_slice(library.new_releases.get_or_insert_with(UriSlice::default), slice);
        }
        StoreUpdate::LibraryPlaylistsLoaded { slice } => {
            merge_slice(
                library.library_playlists.get_or_insert_with(UriSlice::default),
                slice,
            );
        }
        StoreUpdate::LibraryArtistsLoaded { slice } => {
            merge_slice(
                library.library_artists.get_or_insert_with(UriSlice::default),
                slice,
            );
        }
        StoreUpdate::LibraryAlbumsLoaded { slice } => {
            merge_slice(
                library.library_albums.get_or_insert_with(UriSlice::default),
                slice,
            );
        }
        StoreUpdate::ArtistAlbumsLoaded { key, slice } => {
            merge_slice(library.artist_albums.entry(key).or_default(), slice);
        }
        StoreUpdate::UserPlaylistsLoaded { key, slice } => {
            merge_slice(library.user_playlists.entry(key).or_default(), slice);
        }
        StoreUpdate::CategoryPlaylistsLoaded { key, slice } => {
            merge_slice(library.category_playlists.entry(key).or_default(), slice);
        }
        StoreUpdate::SearchResultsLoaded(patch) => merge_search(&mut state.search, patch),
    }
}

fn playlist_entry<'a>(library: &'a mut LibraryState, uri: &str) -> &'a mut CachedPlaylist {
    library
        .playlists
        .entry(uri.to_string())
        .or_insert_with(|| CachedPlaylist {
            uri: uri.to_string(),
            ..CachedPlaylist::default()
        })
}

fn album_entry<'a>(library: &'a mut LibraryState, uri: &str) -> &'a mut CachedAlbum {
    library
        .albums
        .entry(uri.to_string())
        .or_insert_with(|| CachedAlbum {
            uri: uri.to_string(),
            ..CachedAlbum::default()
        })
}

fn entity_entry<'a>(
    cache: &'a mut BTreeMap<String, CachedEntity>,
    uri: &str,
) -> &'a mut CachedEntity {
    cache
        .entry(uri.to_string())
        .or_insert_with(|| CachedEntity {
            uri: uri.to_string(),
            ..CachedEntity::default()
        })
}

fn merge_fields(existing: &mut Map<String, Value>, incoming: Map<String, Value>) {
    existing.extend(incoming);
}

fn merge_playlist(library: &mut LibraryState, summary: PlaylistSummary) {
    let PlaylistSummary {
        uri,
        owner,
        snapshot_id,
        can_edit,
        tracks_total,
        fields,
    } = summary;
    let cached = playlist_entry(library, &uri);
    cached.owner = Some(owner);
    if snapshot_id.is_some() {
        cached.snapshot_id = snapshot_id;
    }
    cached.can_edit = can_edit;
    cached.tracks_total = Some(tracks_total);
    merge_fields(&mut cached.fields, fields);
}

fn merge_album(library: &mut LibraryState, album: AlbumEntry) {
    match album {
        AlbumEntry::Plain(Entity { uri, fields }) => {
            merge_fields(&mut album_entry(library, &uri).fields, fields);
        }
        AlbumEntry::Library(LibraryAlbum {
            uri,
            added_at,
            tracks,
            tracks_more,
            tracks_total,
            fields,
        }) => {
            let cached = album_entry(library, &uri);
            cached.added_at = Some(added_at);
            cached.tracks = Some(tracks);
            cached.tracks_more = tracks_more;
            cached.tracks_total = Some(tracks_total);
            merge_fields(&mut cached.fields, fields);
        }
    }
}

fn append_unique(existing: &mut Vec<String>, incoming: Vec<String>) {
    for uri in incoming {
        if !existing.contains(&uri) {
            existing.push(uri);
        }
    }
}

fn merge_slice(existing: &mut UriSlice, incoming: UriSlice) {
    append_unique(&mut existing.uris, incoming.uris);
    existing.more = incoming.more;
    existing.total = incoming.total;
}

fn merge_search(search: &mut SearchResults, patch: SearchResultsPatch) {
    if let Some(tracks) = patch.tracks {
        for track in tracks {
            if !search.tracks.iter().any(|known| known.uri == track.uri) {
                search.tracks.push(track);
            }
        }
        search.tracks_more = patch.tracks_more;
    }
    if let Some(uris) = patch.artists_uris {
        append_unique(&mut search.artists_uris, uris);
        search.artists_more = patch.artists_more;
    }
    if let Some(uris) = patch.albums_uris {
        append_unique(&mut search.albums_uris, uris);
        search.albums_more = patch.albums_more;
    }
    if let Some(uris) = patch.playlists_uris {
        append_unique(&mut search.playlists_uris, uris);
        search.playlists_more = patch.playlists_more;
    }
}

#[cfg(test)]
mod tests;
