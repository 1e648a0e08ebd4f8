use super::*;
use pretty_assertions::assert_eq;

#[test]
fn slice_pages_append_without_duplicates() {
    let mut state = state();

    run_update(
        &mut state,
        StoreUpdate::NewReleasesLoaded {
            slice: slice(&["spotify:album:a", "spotify:album:b"], Some("page-2"), 4),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::NewReleasesLoaded {
            slice: slice(&["spotify:album:b", "spotify:album:c"], None, 4),
        },
    );

    assert_eq!(
        state.library.new_releases,
        Some(slice(
            &["spotify:album:a", "spotify:album:b", "spotify:album:c"],
            None,
            4
        ))
    );
}

#[test]
fn keyed_slices_are_independent() {
    let mut state = state();

    run_update(
        &mut state,
        StoreUpdate::ArtistAlbumsLoaded {
            key: "spotify:artist:one".to_string(),
            slice: slice(&["spotify:album:1"], None, 1),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::ArtistAlbumsLoaded {
            key: "spotify:artist:two".to_string(),
            slice: slice(&["spotify:album:2"], Some("more"), 9),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::UserPlaylistsLoaded {
            key: "spotify:user:u1".to_string(),
            slice: slice(&["spotify:playlist:p"], None, 1),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::CategoryPlaylistsLoaded {
            key: "party".to_string(),
            slice: slice(&["spotify:playlist:q"], None, 1),
        },
    );

    assert_eq!(
        state.library.artist_albums["spotify:artist:one"],
        slice(&["spotify:album:1"], None, 1)
    );
    assert_eq!(
        state.library.artist_albums["spotify:artist:two"],
        slice(&["spotify:album:2"], Some("more"), 9)
    );
    assert_eq!(state.library.user_playlists.len(), 1);
    assert_eq!(state.library.category_playlists.len(), 1);
}

#[test]
fn library_slices_land_in_their_own_fields() {
    let mut state = state();

    run_update(
        &mut state,
        StoreUpdate::LibraryPlaylistsLoaded {
            slice: slice(&["spotify:playlist:p"], None, 1),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::LibraryArtistsLoaded {
            slice: slice(&["spotify:artist:a"], Some("c"), 3),
        },
    );
    run_update(
        &mut state,
        StoreUpdate::LibraryAlbumsLoaded {
            slice: slice(&["spotify:album:x"], None, 1),
        },
    );

    assert_eq!(
        state.library.library_playlists,
        Some(slice(&["spotify:playlist:p"], None, 1))
    );
    assert_eq!(
        state.library.library_artists,
        Some(slice(&["spotify:artist:a"], Some("c"), 3))
    );
    assert_eq!(
        state.library.library_albums,
        Some(slice(&["spotify:album:x"], None, 1))
    );
    assert_eq!(state.library.new_releases, None);
}
