//! Term ids used by the search endpoint.
//!
//! A search filter is sent as `term[<category id>][]=<option id>`. Option ids
//! come from the API's term tree and are fixed, so they live here as static
//! tables instead of being fetched before each search.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const SEASON_CATEGORY_ID: u32 = 45;
pub const EPISODE_CATEGORY_ID: u32 = 46;
pub const LANGUAGE_CATEGORY_ID: u32 = 51;
pub const QUALITY_CATEGORY_ID: u32 = 7;

/// "Série intégrale", requested with season 0.
pub const COMPLETE_SERIES_ID: u32 = 998;
/// "Saison complète", requested with episode 0.
pub const COMPLETE_SEASON_ID: u32 = 936;

const FIRST_SEASON_ID: u32 = 968;
const MAX_SEASON: i32 = 30;

const FIRST_EPISODE_ID: u32 = 937;
const MAX_EPISODE: i32 = 60;
/// Id 945 is not an episode: every episode after this one is shifted by one.
const EPISODE_GAP_AFTER: i32 = 8;
/// Episodes whose ids are swapped in the catalog.
const TRANSPOSED_EPISODES: (i32, i32) = (17, 18);

static SEASON_IDS: Lazy<HashMap<i32, u32>> = Lazy::new(|| {
    let mut ids: HashMap<i32, u32> = (1..=MAX_SEASON)
        .map(|n| (n, FIRST_SEASON_ID + (n - 1) as u32))
        .collect();
    ids.insert(0, COMPLETE_SERIES_ID);
    ids
});

static EPISODE_IDS: Lazy<HashMap<i32, u32>> = Lazy::new(|| {
    let mut ids: HashMap<i32, u32> = (1..=MAX_EPISODE)
        .map(|n| {
            let shift = if n > EPISODE_GAP_AFTER { 1 } else { 0 };
            (n, FIRST_EPISODE_ID + (n - 1) as u32 + shift)
        })
        .collect();
    ids.insert(0, COMPLETE_SEASON_ID);

    let (a, b) = TRANSPOSED_EPISODES;
    let (id_a, id_b) = (ids[&a], ids[&b]);
    ids.insert(a, id_b);
    ids.insert(b, id_a);
    ids
});

/// Language keys, lowercase. English and French spellings both work.
static LANGUAGE_IDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("english", 1209),
        ("anglais", 1209),
        ("french", 1210),
        ("français", 1210),
        ("mute", 1211),
        ("muet", 1211),
        ("multi-french", 1212),
        ("multi-fr", 1212),
        ("multi-quebecois", 1213),
        ("multi-qb", 1213),
        ("quebecois", 1214),
        ("québécois", 1214),
        ("vfstfr", 1215),
        ("vostfr", 1216),
        ("voasta", 1217),
    ])
});

/// Quality labels, exactly as the term tree spells them.
static QUALITY_IDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("BDrip/BRrip [Rip SD (non HD) depuis Bluray ou HDrip]", 8),
        ("Bluray 4K [Full ou Remux]", 1171),
        ("Bluray [Full]", 17),
        ("Bluray [Remux]", 1220),
        ("DVD-R 5 [DVD < 4.37GB]", 13),
        ("DVD-R 9 [DVD > 4.37GB]", 14),
        ("DVDrip [Rip depuis DVD-R]", 10),
        ("HDrip 1080 [Rip HD depuis Bluray]", 16),
        ("HDrip 4k [Rip HD 4k depuis source 4k]", 1219),
        ("HDrip 720 [Rip HD depuis Bluray]", 15),
        ("TVrip [Rip SD (non HD) depuis Source Tv HD/SD]", 11),
        ("TVripHD 1080 [Rip HD depuis Source Tv HD]", 1162),
        ("TVripHD 720 [Rip HD depuis Source Tv HD]", 12),
        ("VCD/SVCD/VHSrip", 18),
        ("Web-Dl", 1233),
        ("Web-Dl 1080", 1174),
        ("Web-Dl 720", 1175),
        ("WEBrip", 19),
    ])
});

/// Option id of a season, `None` for negative or unknown seasons.
pub fn season_id(season: i32) -> Option<u32> {
    SEASON_IDS.get(&season).copied()
}

/// Option id of an episode, `None` for negative or unknown episodes.
pub fn episode_id(episode: i32) -> Option<u32> {
    EPISODE_IDS.get(&episode).copied()
}

/// Option id of a language key, case-insensitive.
pub fn language_id(language: &str) -> Option<u32> {
    LANGUAGE_IDS.get(language.to_lowercase().as_str()).copied()
}

/// Option id of a quality label.
pub fn quality_id(quality: &str) -> Option<u32> {
    QUALITY_IDS.get(quality).copied()
}
