/// Default prefix of track URIs the streaming service can describe.
pub const SPOTIFY_TRACK_PREFIX: &str = "spotify:track:";

/// Records that carry a canonical `service:type:id` URI.
pub trait HasUri {
    fn uri(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriType {
    Track,
    Album,
    Artist,
    Playlist,
    User,
}

impl UriType {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "track" => Some(Self::Track),
            "album" => Some(Self::Album),
            "artist" => Some(Self::Artist),
            "playlist" => Some(Self::Playlist),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriElement {
    TrackId,
    AlbumId,
    ArtistId,
    PlaylistId,
    UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUri<'a> {
    pub service: &'a str,
    pub kind: UriType,
    pub id: &'a str,
    /// Owner segment of legacy `service:user:<owner>:playlist:<id>` URIs.
    pub owner: Option<&'a str>,
}

pub fn parse_uri(uri: &str) -> Option<ParsedUri<'_>> {
    let segments: Vec<&str> = uri.split(':').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    match segments[..] {
        [service, "user", owner, "playlist", id] => Some(ParsedUri {
            service,
            kind: UriType::Playlist,
            id,
            owner: Some(owner),
        }),
        [service, kind, id] => Some(ParsedUri {
            service,
            kind: UriType::from_segment(kind)?,
            id,
            owner: None,
        }),
        _ => None,
    }
}

pub fn uri_type(uri: &str) -> Option<UriType> {
    parse_uri(uri).map(|parsed| parsed.kind)
}

pub fn get_from_uri(element: UriElement, uri: &str) -> Option<String> {
    let parsed = parse_uri(uri)?;
    let value = match (element, parsed.kind) {
        (UriElement::TrackId, UriType::Track)
        | (UriElement::AlbumId, UriType::Album)
        | (UriElement::ArtistId, UriType::Artist)
        | (UriElement::PlaylistId, UriType::Playlist)
        | (UriElement::UserId, UriType::User) => parsed.id,
        (UriElement::UserId, UriType::Playlist) => parsed.owner?,
        _ => return None,
    };
    Some(value.to_string())
}

pub fn is_track_uri(prefix: &str, uri: &str) -> bool {
    !prefix.is_empty() && uri.starts_with(prefix)
}

pub fn as_uris<T: HasUri>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.uri().to_string()).collect()
}
