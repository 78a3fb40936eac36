//! Command line arguments.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};

use t411_core::SearchRequest;

#[derive(Debug, Parser)]
#[command(name = "t411", version, about = "Command line client for the t411 API")]
pub struct Cli {
    /// Configuration file
    #[arg(
        long,
        global = true,
        env = "T411_CONFIG",
        default_value = "t411.toml"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the session token, to be saved as `session.token`
    Token,
    /// Print the category tree
    Categories,
    /// Print the term tree, or the terms of one category
    Terms {
        #[arg(long)]
        category: Option<String>,
    },
    /// Search torrents
    Search {
        #[command(flatten)]
        terms: SearchArgs,
        /// Fetch every page instead of one
        #[arg(long)]
        all: bool,
    },
    /// Show the details of a torrent
    Details { id: String },
    /// Download a torrent by id
    Download {
        id: String,
        /// Write to a new temp file with this prefix instead of the
        /// upstream file name
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Search, pick the most seeded torrent and download it
    Fetch {
        #[command(flatten)]
        terms: SearchArgs,
        /// Air date of the episode (YYYY-MM-DD)
        #[arg(long)]
        aired: Option<NaiveDate>,
    },
    /// Show a user profile (default: the authenticated user)
    Profile { uid: Option<String> },
    /// Show the ratio after downloading `incoming` more bytes
    Ratio {
        #[arg(default_value_t = 0.0)]
        incoming: f64,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub title: String,
    /// Season number, 0 for the complete series
    #[arg(long, short)]
    pub season: Option<i32>,
    /// Episode number, 0 for the complete season
    #[arg(long, short)]
    pub episode: Option<i32>,
    /// Language key, e.g. english, french, vostfr
    #[arg(long, short)]
    pub language: Option<String>,
    /// Quality label as listed in the term tree
    #[arg(long, short)]
    pub quality: Option<String>,
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
    #[arg(long, default_value_t = 0)]
    pub limit: u32,
}

impl SearchArgs {
    pub fn to_request(&self) -> SearchRequest {
        let mut request = SearchRequest::new(self.title.clone())
            .offset(self.offset)
            .limit(self.limit);
        if let Some(season) = self.season {
            request = request.season(season);
        }
        if let Some(episode) = self.episode {
            request = request.episode(episode);
        }
        if let Some(language) = &self.language {
            request = request.language(language.clone());
        }
        if let Some(quality) = &self.quality {
            request = request.quality(quality.clone());
        }
        request
    }
}

/// Midnight of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
