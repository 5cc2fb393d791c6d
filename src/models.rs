// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use url::Url;

/// Media kind requested from the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Album,
    Track,
}

impl Entity {
    /// Value sent as the `entity` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Album => "album",
            Entity::Track => "track",
        }
    }
}

/// Artist information from the catalog.
///
/// On the wire the artist fields live flattened inside each album/track
/// object rather than in a nested `artist` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Catalog artist identifier.
    #[serde(rename = "artistId")]
    pub identifier: String,
    /// Artist name.
    #[serde(rename = "artistName")]
    pub name: String,
    /// URL to an image of the artist.
    #[serde(rename = "artistImage")]
    pub image_url: Url,
    /// Catalog page for the artist.
    #[serde(rename = "artistUrl")]
    pub url: Url,
}

impl Artist {
    /// Catalog URL that opens in the Apple Music app.
    pub fn apple_music_url(&self) -> Url {
        apple_music_url(&self.url)
    }
}

/// Album information from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Catalog album identifier.
    #[serde(rename = "id")]
    pub identifier: String,
    /// Album name.
    pub name: String,
    /// Primary genre.
    #[serde(rename = "primaryGenreName")]
    pub genre: String,
    /// URL to an image of the album art.
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Url,
    /// Catalog page for the album.
    #[serde(rename = "trackViewUrl")]
    pub url: Url,
    /// Artist who made the album.
    #[serde(flatten)]
    pub artist: Artist,
}

impl Album {
    /// Catalog URL that opens in the Apple Music app.
    pub fn apple_music_url(&self) -> Url {
        apple_music_url(&self.url)
    }
}

/// Track information from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Catalog track identifier.
    #[serde(rename = "id")]
    pub identifier: String,
    /// Track name.
    pub name: String,
    /// Primary genre.
    #[serde(rename = "primaryGenreName")]
    pub genre: String,
    /// URL to an image of the album art.
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Url,
    /// Catalog page for the track.
    #[serde(rename = "trackViewUrl")]
    pub url: Url,
    /// Artist who made the track.
    #[serde(flatten)]
    pub artist: Artist,
}

impl Track {
    /// Catalog URL that opens in the Apple Music app.
    pub fn apple_music_url(&self) -> Url {
        apple_music_url(&self.url)
    }
}

/// Generic search response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    /// Decoded entries of the top-level `results` array.
    pub results: Vec<T>,
}

fn apple_music_url(url: &Url) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut().append_pair("app", "music");
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_query_values() {
        assert_eq!(Entity::Album.as_str(), "album");
        assert_eq!(Entity::Track.as_str(), "track");
    }

    #[test]
    fn apple_music_url_appends_to_existing_query() {
        let url = Url::parse("https://itunes.apple.com/de/album/x/id1?i=2").unwrap();
        assert_eq!(
            apple_music_url(&url).as_str(),
            "https://itunes.apple.com/de/album/x/id1?i=2&app=music"
        );
    }

    #[test]
    fn apple_music_url_without_existing_query() {
        let url = Url::parse("https://itunes.apple.com/de/artist/daft-punk/id5468295").unwrap();
        assert_eq!(
            apple_music_url(&url).as_str(),
            "https://itunes.apple.com/de/artist/daft-punk/id5468295?app=music"
        );
    }
}
