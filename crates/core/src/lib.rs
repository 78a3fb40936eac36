pub mod catalog;
pub mod client;
pub mod config;
pub mod response;
pub mod searcher;
pub mod testing;
pub mod users;

pub use catalog::{ByTermId, Categories, Category, Term, TermsTree};
pub use client::{
    ApiError, ApiErrorKind, ClientError, FormatError, T411Client, Token, TOKEN_RETRY_HINT,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ClientConfig, Config, ConfigError,
    Credentials, SanitizedConfig, SessionConfig,
};
pub use searcher::{SearchRequest, Torrent, TorrentDetails, Torrents};
pub use users::User;
