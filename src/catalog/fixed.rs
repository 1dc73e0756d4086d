//! Curated fallback playlists, seven songs for each emotion.
//!
//! Used whenever no local songs exist for an emotion. The table is part of the
//! public output surface and is reproduced exactly.

use crate::emotion::EmotionLabel;
use crate::song::Song;

/// Songs per emotion in the fixed catalog.
pub const PLAYLIST_LEN: usize = 7;

/// A statically known catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSong {
    pub name: &'static str,
    pub artist: &'static str,
    pub link: &'static str,
    pub track: &'static str,
}

impl FixedSong {
    #[must_use]
    pub fn to_song(&self) -> Song {
        Song {
            name: self.name.to_string(),
            artist: self.artist.to_string(),
            link: self.link.to_string(),
            track: self.track.to_string(),
            is_local: false,
        }
    }
}

const fn entry(name: &'static str, artist: &'static str, link: &'static str) -> FixedSong {
    FixedSong {
        name,
        artist,
        link,
        track: name,
    }
}

/// Fixed playlist for `emotion`, in curated order.
#[must_use]
pub fn playlist(emotion: EmotionLabel) -> &'static [FixedSong] {
    match emotion {
        EmotionLabel::Angry => &ANGRY,
        EmotionLabel::Disgusted => &DISGUSTED,
        EmotionLabel::Fearful => &FEARFUL,
        EmotionLabel::Happy => &HAPPY,
        EmotionLabel::Neutral => &NEUTRAL,
        EmotionLabel::Sad => &SAD,
        EmotionLabel::Surprised => &SURPRISED,
    }
}

/// Looks up a playlist by raw emotion name, falling back to `Neutral` for
/// names outside the closed set.
#[must_use]
pub fn playlist_by_name(name: &str) -> &'static [FixedSong] {
    match EmotionLabel::parse_label(name) {
        Ok(emotion) => playlist(emotion),
        Err(err) => {
            log::warn!("{err}; using the Neutral playlist");
            playlist(EmotionLabel::Neutral)
        }
    }
}

const ANGRY: [FixedSong; PLAYLIST_LEN] = [
    entry("Numb", "Linkin Park", "https://youtu.be/kXYiU_JCYtU"),
    entry("Break Stuff", "Limp Bizkit", "https://youtu.be/ZpUYjpKg9KY"),
    entry("Killing In The Name", "Rage Against The Machine", "https://youtu.be/bWXazVhlyxQ"),
    entry("Chop Suey!", "System Of A Down", "https://youtu.be/CSvFpBOe8eY"),
    entry("Du Hast", "Rammstein", "https://youtu.be/W3q8Od5qJio"),
    entry("Bodies", "Drowning Pool", "https://youtu.be/04F4xlWSFh0"),
    entry("Master of Puppets", "Metallica", "https://youtu.be/xnKhsTXoKCI"),
];

const DISGUSTED: [FixedSong; PLAYLIST_LEN] = [
    entry("Ugly", "The Exies", "https://youtu.be/O3M8g8lZgY4"),
    entry("Creep", "Radiohead", "https://youtu.be/XFkzRNyygfk"),
    entry("Bad Guy", "Billie Eilish", "https://youtu.be/DyDfgMOUjCI"),
    entry("Toxic", "Britney Spears", "https://youtu.be/LOZuxwVk7TU"),
    entry("Sick of It", "Skillet", "https://youtu.be/A2JGDyX018g"),
    entry("Hate Me", "Blue October", "https://youtu.be/dDxgSvJINlU"),
    entry("Complicated", "Avril Lavigne", "https://youtu.be/5NPBIwQyPWE"),
];

const FEARFUL: [FixedSong; PLAYLIST_LEN] = [
    entry("Demons", "Imagine Dragons", "https://youtu.be/mWRsgZuwf_8"),
    entry("Thriller", "Michael Jackson", "https://youtu.be/sOnqjkJTMaA"),
    entry("Somebody's Watching Me", "Rockwell", "https://youtu.be/7YvAYIJSSZY"),
    entry("Enter Sandman", "Metallica", "https://youtu.be/CD-E-LDc384"),
    entry("Disturbia", "Rihanna", "https://youtu.be/E1mU6h4Xdxc"),
    entry("In the End", "Linkin Park", "https://youtu.be/eVTXPUF4Oz4"),
    entry("Unthought Known", "Pearl Jam", "https://youtu.be/T224iY8rYyM"),
];

const HAPPY: [FixedSong; PLAYLIST_LEN] = [
    entry("Happy", "Pharrell Williams", "https://youtu.be/ZbZSe6N_BXs"),
    entry("Uptown Funk", "Mark Ronson ft. Bruno Mars", "https://youtu.be/OPf0YbXqDm0"),
    entry("Can't Stop the Feeling!", "Justin Timberlake", "https://youtu.be/ru0K8uYEZWw"),
    entry("Walking on Sunshine", "Katrina and the Waves", "https://youtu.be/iPUmE-tne5U"),
    entry("Shut Up and Dance", "WALK THE MOON", "https://youtu.be/6JCLY0Rlx6Q"),
    entry("I Gotta Feeling", "The Black Eyed Peas", "https://youtu.be/uSD4vsh1zDA"),
    entry("Best Day of My Life", "American Authors", "https://youtu.be/Y66j_BUCBMY"),
];

const NEUTRAL: [FixedSong; PLAYLIST_LEN] = [
    entry("Weightless", "Marconi Union", "https://youtu.be/UfcAVejslrU"),
    entry("Orinoco Flow", "Enya", "https://youtu.be/LTrk4X9ACTw"),
    entry("Put Your Records On", "Corinne Bailey Rae", "https://youtu.be/rjOhZZyn30k"),
    entry("Sunday Morning", "Maroon 5", "https://youtu.be/S2CTI12XBJA"),
    entry("Banana Pancakes", "Jack Johnson", "https://youtu.be/6Graa_Vm5eA"),
    entry("Three Little Birds", "Bob Marley", "https://youtu.be/LanCLS_hIo4"),
    entry("Upside Down", "Jack Johnson", "https://youtu.be/dqUdI4AIDF0"),
];

const SAD: [FixedSong; PLAYLIST_LEN] = [
    entry("Someone Like You", "Adele", "https://youtu.be/hLQl3WQQoQ0"),
    entry("Fix You", "Coldplay", "https://youtu.be/k4V3Mo61fJM"),
    entry("Let Her Go", "Passenger", "https://youtu.be/RBumgq5yVrA"),
    entry("The Night We Met", "Lord Huron", "https://youtu.be/KtlgYxa6BMU"),
    entry("All of Me", "John Legend", "https://youtu.be/450p7goxZqg"),
    entry("Say Something", "A Great Big World", "https://youtu.be/-2U0Ivkn2Ds"),
    entry("Skinny Love", "Birdy", "https://youtu.be/aNzCDt2eidg"),
];

const SURPRISED: [FixedSong; PLAYLIST_LEN] = [
    entry("Firework", "Katy Perry", "https://youtu.be/QGJuMBdaqUb"),
    entry("Bohemian Rhapsody", "Queen", "https://youtu.be/fJ9rUzIMcZQ"),
    entry("Sugar", "Maroon 5", "https://youtu.be/09R8_2nJtjg"),
    entry("Counting Stars", "OneRepublic", "https://youtu.be/hT_nvWreIhg"),
    entry("Viva La Vida", "Coldplay", "https://youtu.be/dvgZkm1xWPE"),
    entry("On Top of the World", "Imagine Dragons", "https://youtu.be/w5tWYmIOWGk"),
    entry("Starlight", "Muse", "https://youtu.be/Pgum6OT_VH8"),
];
