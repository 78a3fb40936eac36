//! Types for torrent search and details.
//!
//! Numeric and boolean fields stay strings: that is how the API sends them.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// Format of the `added` field.
pub const ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A torrent as listed by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Torrent {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rewritename: String,
    pub seeders: String,
    pub leechers: String,
    pub comments: String,
    #[serde(rename = "isVerified")]
    pub is_verified: String,
    pub added: String,
    pub size: String,
    pub times_completed: String,
    pub owner: String,
    pub categoryname: String,
    pub categoryimage: String,
    pub username: String,
    pub privacy: String,
}

impl Torrent {
    /// Seeders as a number; anything unparsable counts as 0.
    pub fn seeders_count(&self) -> i64 {
        self.seeders.trim().parse().unwrap_or(0)
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified == "1"
    }

    /// Upload date, `None` when the field does not parse.
    pub fn added_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.added.trim(), ADDED_FORMAT).ok()
    }

    /// Size in bytes.
    pub fn size_bytes(&self) -> Result<f64, ClientError> {
        self.size
            .trim()
            .parse()
            .map_err(|_| ClientError::InvalidField {
                field: "size",
                value: self.size.clone(),
            })
    }

    /// Placeholder left by the response repair in place of a stray integer.
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for Torrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.id, self.name, self.seeders)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Torrents {
    /// The searched title, echoed back.
    pub query: String,
    pub total: String,
    pub offset: String,
    pub limit: String,
    pub torrents: Vec<Torrent>,
}

/// Full description of one torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentDetails {
    pub id: String,
    pub name: String,
    pub category: String,
    pub categoryname: String,
    pub categoryimage: String,
    pub rewritename: String,
    pub owner: String,
    pub username: String,
    pub privacy: String,
    pub description: String,
    /// Term label -> value, e.g. "Vidéo - Langue" -> "VOSTFR".
    pub terms: HashMap<String, String>,
}

/// Structured search filters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub title: String,
    /// Season number. 0 means the complete series, negative means no filter.
    pub season: i32,
    /// Episode number. 0 means the complete season, negative means no filter.
    pub episode: i32,
    /// Language key, e.g. "english" or "vostfr".
    pub language: Option<String>,
    /// Quality label, e.g. "HDrip 720 [Rip HD depuis Bluray]".
    pub quality: Option<String>,
    pub offset: u32,
    /// 0 means the API default (10).
    pub limit: u32,
    /// Air date of the episode. Only used when picking a torrent to download.
    pub aired: Option<NaiveDateTime>,
}

impl SearchRequest {
    /// Search by title only.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            season: -1,
            episode: -1,
            language: None,
            quality: None,
            offset: 0,
            limit: 0,
            aired: None,
        }
    }

    pub fn season(mut self, season: i32) -> Self {
        self.season = season;
        self
    }

    pub fn episode(mut self, episode: i32) -> Self {
        self.episode = episode;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn aired(mut self, aired: NaiveDateTime) -> Self {
        self.aired = Some(aired);
        self
    }

    /// A given season as a whole (episode 0).
    pub fn is_whole_season(&self) -> bool {
        self.season > 0 && self.episode == 0
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.season >= 0 {
            write!(f, " S{:02}", self.season)?;
        }
        if self.episode >= 0 {
            write!(f, "E{:02}", self.episode)?;
        }
        Ok(())
    }
}
