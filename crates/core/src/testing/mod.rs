//! Testing utilities: canned API responses and builders.
//!
//! The JSON bodies mirror what the t411 API sends, quirks included (bare
//! integers where strings are expected, stray integers in lists).
//!
//! # Example
//!
//! ```rust,ignore
//! use t411_core::testing::fixtures;
//!
//! Mock::given(method("GET"))
//!     .and(path("/categories/tree"))
//!     .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::CATEGORIES_TREE))
//!     .mount(&server)
//!     .await;
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::searcher::Torrent;

    pub const UID: &str = "12345";
    pub const TOKEN: &str = "12345:123:abcdefghijklmnopqrstuvwxyz012345";

    /// Successful `/auth` response.
    pub const AUTH_OK: &str = r#"{"uid":"12345","token":"12345:123:abcdefghijklmnopqrstuvwxyz012345"}"#;

    pub const WRONG_PASSWORD: &str = r#"{"error":"Wrong password","code":107}"#;
    pub const ACCOUNT_DISABLED: &str = r#"{"error":"Account is disabled","code":103}"#;
    pub const USER_NOT_FOUND: &str = r#"{"error":"User not found","code":101}"#;
    pub const TOKEN_EXPIRED: &str = r#"{"error":"Token has expired. Please login","code":201}"#;
    pub const TORRENT_NOT_FOUND: &str = r#"{"error":"Torrent not found","code":1301}"#;
    /// Answer sometimes given to the first call made with a resumed token.
    pub const TOKEN_RETRIEVED: &str = r#"{"error":"User token retrieved, try again","code":202}"#;

    /// Two roots, five categories in total.
    pub const CATEGORIES_TREE: &str = r#"{
        "210": {
            "id": "210", "pid": "0", "name": "Film/Vidéo",
            "cats": {
                "433": {"id": "433", "pid": "210", "name": "Série TV"},
                "631": {"id": "631", "pid": "210", "name": "Film"}
            }
        },
        "395": {
            "id": "395", "pid": "0", "name": "Audio",
            "cats": {
                "623": {"id": "623", "pid": "395", "name": "Musique"}
            }
        }
    }"#;

    pub const TERMS_TREE: &str = r#"{
        "433": {
            "45": {
                "type": "SérieTV - Saison", "mode": "single",
                "terms": {"968": "Saison 01", "969": "Saison 02", "998": "Série intégrale"}
            },
            "46": {
                "type": "SérieTV - Episode", "mode": "single",
                "terms": {"936": "Saison complète", "937": "Episode 01", "938": "Episode 02"}
            },
            "51": {
                "type": "Vidéo - Langue", "mode": "multi",
                "terms": {"1209": "Anglais", "1210": "Français", "1216": "VOSTFR"}
            }
        },
        "631": {
            "7": {
                "type": "Vidéo - Qualité", "mode": "single",
                "terms": {"10": "DVDrip [Rip depuis DVD-R]", "15": "HDrip 720 [Rip HD depuis Bluray]"}
            }
        }
    }"#;

    /// Search result with a bare `offset` and a stray integer in the list.
    pub const SEARCH_VIKINGS: &str = r#"{"query":"vikings","total":"3","offset":0,"limit":"10","torrents":[{"id":"4831500","name":"Vikings.S01E01.HDTV.x264.2HD.VOSTFR","category":"433","rewritename":"vikings-s01e01-hdtv-x264-2hd-vostfr","seeders":"45","leechers":"2","comments":"3","isVerified":"1","added":"2013-03-04 06:51:03","size":"380116992","times_completed":"1500","owner":"97237274","categoryname":"Série TV","categoryimage":"series.png","username":"uploader","privacy":"normal"},{"id":"4831522","name":"Vikings.S01E01.REPACK.HDTV.x264-2HD","category":"433","rewritename":"vikings-s01e01-repack-hdtv-x264-2hd","seeders":"120","leechers":"8","comments":"10","isVerified":"0","added":"2013-03-04 09:12:40","size":"380116992","times_completed":"4200","owner":"97237274","categoryname":"Série TV","categoryimage":"series.png","username":"uploader","privacy":"normal"},7]}"#;

    /// An anonymous upload listed after a regular one: only the second owner
    /// is a bare integer.
    pub const SEARCH_ANONYMOUS_OWNER: &str = r#"{"query":"castle","total":"2","offset":"0","limit":"10","torrents":[{"id":"5120001","name":"Castle.S05E17.VOSTFR.HDTV","seeders":"30","owner":"97237274","username":"uploader"},{"id":"5120002","name":"Castle.S05E17.FRENCH.HDTV","seeders":"12","owner":0,"username":"anonymous"}]}"#;

    /// Search result whose first page holds one of two results.
    pub const SEARCH_FIRST_PAGE: &str = r#"{"query":"avatar","total":"2","offset":"0","limit":"1","torrents":[{"id":"1","name":"Avatar.2009.FRENCH","seeders":"3"}]}"#;
    pub const SEARCH_ALL_PAGES: &str = r#"{"query":"avatar","total":"2","offset":"0","limit":"2","torrents":[{"id":"1","name":"Avatar.2009.FRENCH","seeders":"3"},{"id":"2","name":"Avatar.2009.MULTI","seeders":"9"}]}"#;

    /// No result: every counter comes back as a bare integer.
    pub const SEARCH_EMPTY: &str = r#"{"query":"nothing","total":0,"offset":0,"limit":10,"torrents":[]}"#;

    pub const DETAILS: &str = r#"{"id":"4831500","name":"Vikings.S01E01.HDTV.x264.2HD.VOSTFR","category":"433","categoryname":"Série TV","categoryimage":"series.png","rewritename":"vikings-s01e01-hdtv-x264-2hd-vostfr","owner":0,"username":"uploader","privacy":"normal","description":"<p>Vikings</p>","terms":{"Vidéo - Langue":"VOSTFR","SérieTV - Saison":"Saison 01","SérieTV - Episode":"Episode 01"}}"#;

    /// Profile with a ratio of 2 (uploaded twice what was downloaded).
    pub const PROFILE: &str = r#"{"username":"alice","gender":"Female","age":"30","avatar":"http://avatar.t411.li/default.png","downloaded":"1000000000","uploaded":"2000000000"}"#;

    /// Profile with nothing downloaded yet.
    pub const PROFILE_FRESH: &str = r#"{"username":"bob","gender":"Male","age":"25","avatar":"","downloaded":"0","uploaded":"0"}"#;

    /// Profile with a ratio below 1.
    pub const PROFILE_LEECHER: &str = r#"{"username":"carol","gender":"","age":"","avatar":"","downloaded":"2000000000","uploaded":"1000000000"}"#;

    /// Bencoded body served by the download endpoint.
    pub const TORRENT_FILE: &[u8] = b"d8:announce30:http://tracker.t411.li/announce4:infod4:name7:vikingsee";

    /// A listed torrent with the given id, name and seeders.
    pub fn torrent(id: &str, name: &str, seeders: &str) -> Torrent {
        Torrent {
            id: id.to_string(),
            name: name.to_string(),
            category: "433".to_string(),
            seeders: seeders.to_string(),
            leechers: "0".to_string(),
            is_verified: "1".to_string(),
            added: "2013-03-04 06:51:03".to_string(),
            size: "1000".to_string(),
            ..Default::default()
        }
    }
}
