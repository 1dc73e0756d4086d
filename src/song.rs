use serde::{Deserialize, Serialize};

/// A recommended song as handed to the presentation layer.
///
/// Identity is not enforced: the same song may appear more than once in a
/// single playlist.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Display title.
    pub name: String,
    pub artist: String,
    /// Public URL of the song (streaming page or local file link).
    pub link: String,
    /// Track identifier, usually the same as `name`.
    pub track: String,
    /// Set for songs served from the local catalog. Omitted from JSON when
    /// false.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_local: bool,
}

impl Song {
    #[must_use]
    pub fn new(name: &str, artist: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
            link: link.to_string(),
            track: name.to_string(),
            is_local: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_song_omits_is_local() {
        let song = Song::new("Numb", "Linkin Park", "https://youtu.be/kXYiU_JCYtU");
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["track"], "Numb");
        assert!(json.get("is_local").is_none());
    }

    #[test]
    fn test_local_song_serializes_is_local() {
        let song = Song {
            is_local: true,
            ..Song::new("a.mp3", "Local Track", "http://localhost/a.mp3")
        };
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["is_local"], true);

        let back: Song = serde_json::from_value(json).unwrap();
        assert_eq!(back, song);
    }
}
