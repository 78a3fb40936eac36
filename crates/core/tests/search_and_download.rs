//! Search and download integration tests.
//!
//! These tests run searches and downloads against a mock t411 API:
//! - Query encoding and response repair
//! - Fetching every page of a search
//! - Candidate selection and the ratio/verified guards
//! - Writing the torrent file under its upstream name

use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use t411_core::testing::fixtures;
use t411_core::{ClientConfig, ClientError, Credentials, FormatError, SearchRequest, T411Client};

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json")
}

fn torrent_file(filename: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header(
            "content-disposition",
            format!("attachment; filename=\"{}\"", filename).as_str(),
        )
        .set_body_raw(fixtures::TORRENT_FILE, "application/x-bittorrent")
}

/// An authenticated client with the given settings.
async fn connected(server: &MockServer, config: ClientConfig) -> T411Client {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(json(fixtures::AUTH_OK))
        .mount(server)
        .await;

    T411Client::connect(config, Credentials::new("alice", "secret"))
        .await
        .unwrap()
}

async fn mount_profile(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/profile/{}", fixtures::UID)))
        .respond_with(json(body))
        .mount(server)
        .await;
}

fn without_guards(server: &MockServer) -> ClientConfig {
    ClientConfig {
        keep_ratio: false,
        only_verified: false,
        ..ClientConfig::with_base_url(server.uri())
    }
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_vikings_season_episode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/vikings"))
        .and(query_param("term[45][]", "968"))
        .and(query_param("term[46][]", "937"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(json(fixtures::SEARCH_VIKINGS))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let request = SearchRequest::new("vikings").season(1).episode(1);
    let result = client.search_torrents_by_terms(&request).await.unwrap();

    assert_eq!(result.offset, "0");
    assert_eq!(result.limit, "10");
    assert_eq!(result.total, "3");
    assert_eq!(result.torrents.len(), 3);
    assert_eq!(result.torrents[1].seeders, "120");
    assert!(result.torrents[2].is_placeholder());
}

#[tokio::test]
async fn test_search_repairs_bare_owner_after_string_owner() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/castle"))
        .respond_with(json(fixtures::SEARCH_ANONYMOUS_OWNER))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let result = client
        .search_torrents_by_terms(&SearchRequest::new("castle"))
        .await
        .unwrap();

    assert_eq!(result.torrents.len(), 2);
    assert_eq!(result.torrents[0].owner, "97237274");
    assert_eq!(result.torrents[1].owner, "0");
    assert_eq!(result.torrents[1].username, "anonymous");
}

#[tokio::test]
async fn test_search_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/nothing"))
        .respond_with(json(fixtures::SEARCH_EMPTY))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let result = client
        .search_all_torrents_by_terms(&SearchRequest::new("nothing"))
        .await
        .unwrap();

    assert_eq!(result.total, "0");
    assert_eq!(result.offset, "0");
    assert_eq!(result.limit, "10");
    assert!(result.torrents.is_empty());
}

#[tokio::test]
async fn test_search_all_fetches_remaining_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/avatar"))
        .and(query_param("limit", "10"))
        .respond_with(json(fixtures::SEARCH_FIRST_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/torrents/search/avatar"))
        .and(query_param("limit", "2"))
        .respond_with(json(fixtures::SEARCH_ALL_PAGES))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let result = client
        .search_all_torrents_by_terms(&SearchRequest::new("avatar"))
        .await
        .unwrap();

    let ids: Vec<&str> = result.torrents.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_torrents_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/details/4831500"))
        .respond_with(json(fixtures::DETAILS))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let details = client.torrents_details("4831500").await.unwrap();

    assert_eq!(details.name, "Vikings.S01E01.HDTV.x264.2HD.VOSTFR");
    assert_eq!(details.owner, "0");
    assert_eq!(details.terms["SérieTV - Saison"], "Saison 01");
}

#[tokio::test]
async fn test_torrents_details_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/details/1"))
        .respond_with(json(fixtures::TORRENT_NOT_FOUND))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let err = client.torrents_details("1").await.unwrap_err();
    assert!(err.is_torrent_not_found());
}

// =============================================================================
// Download
// =============================================================================

#[tokio::test]
async fn test_download_by_terms_picks_most_seeded() {
    let server = MockServer::start().await;
    let filename = "Vikings.S01E01.REPACK.HDTV.x264-2HD.torrent";

    Mock::given(method("GET"))
        .and(path("/torrents/search/vikings"))
        .respond_with(json(fixtures::SEARCH_VIKINGS))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/torrents/download/4831522"))
        .respond_with(torrent_file(filename))
        .expect(1)
        .mount(&server)
        .await;
    mount_profile(&server, fixtures::PROFILE).await;

    let client = connected(&server, ClientConfig::with_base_url(server.uri())).await;
    let request = SearchRequest::new("vikings").season(1).episode(1);
    let path = client.download_torrent_by_terms(&request).await.unwrap();

    assert_eq!(path, std::env::temp_dir().join(filename));
    assert_eq!(std::fs::read(&path).unwrap(), fixtures::TORRENT_FILE);
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_download_by_terms_respects_air_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/vikings"))
        .respond_with(json(fixtures::SEARCH_VIKINGS))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let aired = NaiveDate::from_ymd_opt(2014, 2, 27)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let request = SearchRequest::new("vikings")
        .season(1)
        .episode(1)
        .aired(aired);

    let err = client.download_torrent_by_terms(&request).await.unwrap_err();
    assert!(matches!(err, ClientError::TorrentNotFound(ref s) if s == "vikings S01E01"));
    assert!(err.is_torrent_not_found());
}

#[tokio::test]
async fn test_download_by_terms_nothing_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/search/nothing"))
        .respond_with(json(fixtures::SEARCH_EMPTY))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let err = client
        .download_torrent_by_terms(&SearchRequest::new("nothing"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::TorrentNotFound(_)));
}

#[tokio::test]
async fn test_download_refused_on_low_ratio() {
    let server = MockServer::start().await;
    mount_profile(&server, fixtures::PROFILE_LEECHER).await;

    Mock::given(method("GET"))
        .and(path("/torrents/download/42"))
        .respond_with(torrent_file("never.torrent"))
        .expect(0)
        .mount(&server)
        .await;

    let client = connected(&server, ClientConfig::with_base_url(server.uri())).await;
    let torrent = fixtures::torrent("42", "Leeched", "3");

    let err = client.download_torrent(&torrent).await.unwrap_err();
    match err {
        ClientError::RatioTooLow { ratio } => assert!(ratio < 1.0),
        other => panic!("Expected RatioTooLow error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_download_allowed_when_nothing_downloaded() {
    let server = MockServer::start().await;
    let filename = "t411-fresh-profile-43.torrent";
    mount_profile(&server, fixtures::PROFILE_FRESH).await;

    Mock::given(method("GET"))
        .and(path("/torrents/download/43"))
        .respond_with(torrent_file(filename))
        .expect(1)
        .mount(&server)
        .await;

    let client = connected(&server, ClientConfig::with_base_url(server.uri())).await;
    let torrent = fixtures::torrent("43", "Fresh", "3");

    let path = client.download_torrent(&torrent).await.unwrap();
    assert!(path.ends_with(filename));
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_download_refused_when_not_verified() {
    let server = MockServer::start().await;

    let config = ClientConfig {
        only_verified: true,
        ..without_guards(&server)
    };
    let client = connected(&server, config).await;
    let mut torrent = fixtures::torrent("44", "Unverified", "3");
    torrent.is_verified = "0".to_string();

    let err = client.download_torrent(&torrent).await.unwrap_err();
    assert!(matches!(err, ClientError::NotVerified(ref id) if id == "44"));
}

#[tokio::test]
async fn test_download_missing_content_disposition() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/download/45"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            fixtures::TORRENT_FILE,
            "application/x-bittorrent",
        ))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let err = client.download_torrent_by_id("45").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Format(FormatError::ContentDisposition(_))
    ));
}

#[tokio::test]
async fn test_download_torrent_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/download/46"))
        .respond_with(json(fixtures::TORRENT_NOT_FOUND))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let err = client.download_torrent_by_id("46").await.unwrap_err();
    assert!(err.is_torrent_not_found());
    assert_eq!(err.api_error().unwrap().code, 1301);
}

#[tokio::test]
async fn test_download_with_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torrents/download/47"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            fixtures::TORRENT_FILE,
            "application/x-bittorrent",
        ))
        .mount(&server)
        .await;

    let client = connected(&server, without_guards(&server)).await;
    let path = client
        .download_torrent_with_prefix("47", "t411-prefix-")
        .await
        .unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("t411-prefix-"));
    assert!(name.ends_with(".torrent"));
    assert_eq!(std::fs::read(&path).unwrap(), fixtures::TORRENT_FILE);
    std::fs::remove_file(&path).unwrap();
}
