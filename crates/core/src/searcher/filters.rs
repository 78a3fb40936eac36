//! Sorting and filtering of search results before a download.

use chrono::{Duration, NaiveDateTime};

use super::types::{SearchRequest, Torrent};

const PART_MARKER: &str = "part";

/// Stable ascending sort on the seeders count.
pub fn sort_by_seeders(torrents: &mut [Torrent]) {
    torrents.sort_by_key(Torrent::seeders_count);
}

/// Keep torrents whose name contains every word of `title`, ignoring case.
///
/// Parentheses in the title count as separators, so "Castle (2009)" matches
/// "Castle.2009.S01E01".
pub fn filter_by_name(torrents: Vec<Torrent>, title: &str) -> Vec<Torrent> {
    let words: Vec<String> = title
        .replace(['(', ')'], " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    torrents
        .into_iter()
        .filter(|t| {
            let name = t.name.to_lowercase();
            words.iter().all(|w| name.contains(w.as_str()))
        })
        .collect()
}

/// Keep torrents added between `reference` and `max_delay_hours` after it.
///
/// Torrents added before `reference`, or with an unreadable date, are dropped.
pub fn filter_by_date(
    torrents: Vec<Torrent>,
    reference: NaiveDateTime,
    max_delay_hours: f64,
) -> Vec<Torrent> {
    let max_delay = Duration::milliseconds((max_delay_hours * 3_600_000.0) as i64);

    torrents
        .into_iter()
        .filter(|t| match t.added_at() {
            Some(added) => added >= reference && added - reference <= max_delay,
            None => false,
        })
        .collect()
}

/// Drop releases that only hold part of a season.
pub fn filter_partial_releases(torrents: Vec<Torrent>) -> Vec<Torrent> {
    torrents
        .into_iter()
        .filter(|t| !t.name.to_lowercase().contains(PART_MARKER))
        .collect()
}

/// Apply the filters relevant to `request` to a search result.
pub fn select_candidates(
    torrents: Vec<Torrent>,
    request: &SearchRequest,
    max_delay_hours: f64,
) -> Vec<Torrent> {
    let torrents: Vec<Torrent> = torrents
        .into_iter()
        .filter(|t| !t.is_placeholder())
        .collect();

    let mut torrents = filter_by_name(torrents, &request.title);
    if request.is_whole_season() {
        torrents = filter_partial_releases(torrents);
    }
    if let Some(aired) = request.aired {
        torrents = filter_by_date(torrents, aired, max_delay_hours);
    }
    torrents
}

/// The torrent with the most seeders. Ties go to the last one listed.
pub fn pick_best(mut torrents: Vec<Torrent>) -> Option<Torrent> {
    sort_by_seeders(&mut torrents);
    torrents.pop()
}
