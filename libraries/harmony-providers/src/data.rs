//! Fixed mock catalog
//!
//! A small cross-service library: tracks from all three providers, a few
//! provider playlists and one harmonized playlist mixing them.

use chrono::{DateTime, Utc};
use harmony_core::{
    Album, Artist, Playlist, PlaylistId, PlaylistOrigin, Provider, Track,
};

fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: u32,
    provider: Provider,
) -> Track {
    Track::new(id, title, artist, provider, duration)
        .with_album(album)
        .with_cover_art(format!("covers/{id}.jpg"))
}

/// Every mock track, in catalog order
pub fn tracks() -> Vec<Track> {
    vec![
        track("sp-1", "Midnight City", "M83", "Hurry Up, We're Dreaming", 243, Provider::Spotify),
        track("sp-2", "Get Lucky", "Daft Punk", "Random Access Memories", 369, Provider::Spotify),
        track("sp-3", "Instant Crush", "Daft Punk", "Random Access Memories", 337, Provider::Spotify),
        track("sp-4", "Reckoner", "Radiohead", "In Rainbows", 290, Provider::Spotify),
        track("sc-1", "Nightcall", "Kavinsky", "OutRun", 258, Provider::SoundCloud),
        track("sc-2", "Intro", "The xx", "xx", 128, Provider::SoundCloud),
        track("sc-3", "Odessa", "Caribou", "Swim", 347, Provider::SoundCloud),
        track("sc-4", "Bloom", "Odesza", "In Return", 233, Provider::SoundCloud),
        track("dz-1", "Weird Fishes", "Radiohead", "In Rainbows", 318, Provider::Deezer),
        track("dz-2", "Genesis", "Justice", "Cross", 234, Provider::Deezer),
        track("dz-3", "Breathe", "Télépopmusik", "Genetic World", 278, Provider::Deezer),
        track("dz-4", "Innerbloom", "RÜFÜS DU SOL", "Bloom", 578, Provider::Deezer),
    ]
}

/// Look up a single mock track
pub fn track_by_id(id: &str) -> Option<Track> {
    tracks().into_iter().find(|t| t.id.as_str() == id)
}

pub fn artists() -> Vec<Artist> {
    [
        ("ar-m83", "M83", Provider::Spotify),
        ("ar-daft-punk", "Daft Punk", Provider::Spotify),
        ("ar-radiohead", "Radiohead", Provider::Deezer),
        ("ar-kavinsky", "Kavinsky", Provider::SoundCloud),
        ("ar-caribou", "Caribou", Provider::SoundCloud),
        ("ar-justice", "Justice", Provider::Deezer),
    ]
    .into_iter()
    .map(|(id, name, provider)| Artist {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(format!("artists/{id}.jpg")),
        provider,
    })
    .collect()
}

pub fn albums() -> Vec<Album> {
    let all = tracks();
    let album_tracks = |album: &str| -> Vec<Track> {
        all.iter()
            .filter(|t| t.album.as_deref() == Some(album))
            .cloned()
            .collect()
    };

    [
        ("al-ram", "Random Access Memories", "Daft Punk", 2013, Provider::Spotify),
        ("al-in-rainbows", "In Rainbows", "Radiohead", 2007, Provider::Deezer),
        ("al-outrun", "OutRun", "Kavinsky", 2013, Provider::SoundCloud),
        ("al-swim", "Swim", "Caribou", 2010, Provider::SoundCloud),
    ]
    .into_iter()
    .map(|(id, title, artist, year, provider)| Album {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        cover_art: format!("albums/{id}.jpg"),
        year: Some(year),
        tracks: album_tracks(title),
        provider,
    })
    .collect()
}

fn date(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

fn playlist(
    id: &str,
    name: &str,
    owner: &str,
    origin: PlaylistOrigin,
    track_ids: &[&str],
    created: i64,
) -> Playlist {
    let mut playlist = Playlist::new(id, name, owner, origin, date(created));
    playlist.cover_art = Some(format!("playlists/{id}.jpg"));
    playlist.is_public = origin != PlaylistOrigin::Harmonized;
    playlist.tracks = track_ids.iter().filter_map(|id| track_by_id(id)).collect();
    playlist.updated_at = date(created + 86_400);
    playlist
}

/// Library playlists shown after login
pub fn playlists() -> Vec<Playlist> {
    vec![
        playlist(
            "pl-night-drive",
            "Night Drive",
            "Spotify",
            PlaylistOrigin::Spotify,
            &["sp-1", "sc-1", "dz-2", "sp-2"],
            1_704_067_200,
        ),
        playlist(
            "pl-deep-focus",
            "Deep Focus",
            "SoundCloud",
            PlaylistOrigin::SoundCloud,
            &["sc-2", "sc-3", "sc-4"],
            1_706_745_600,
        ),
        playlist(
            "pl-radio-heads",
            "Radio Heads",
            "Deezer",
            PlaylistOrigin::Deezer,
            &["sp-4", "dz-1", "dz-3"],
            1_709_251_200,
        ),
        playlist(
            "pl-everything",
            "Everything Everywhere",
            "Demo User",
            PlaylistOrigin::Harmonized,
            &["sp-3", "sc-3", "dz-4", "sc-1", "sp-1"],
            1_711_929_600,
        ),
    ]
}

/// Look up a single mock playlist
pub fn playlist_by_id(id: &PlaylistId) -> Option<Playlist> {
    playlists().into_iter().find(|p| &p.id == id)
}
