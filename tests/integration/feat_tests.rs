use crate::{html, mount_feat_index, mount_root, test_config, FEAT_INDEX};
use prd_harvest::fetcher::cancel_pair;
use prd_harvest::model::{FeatKind, Source};
use prd_harvest::{BookCatalog, Entity, FeatExtractor, Fetcher, HarvestError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::{MockServer, ResponseTemplate};

fn extractor(server: &MockServer, fetcher: Fetcher) -> FeatExtractor {
    let config = test_config(server);
    let fetcher = Arc::new(fetcher);
    let catalog = Arc::new(BookCatalog::new(
        Arc::clone(&fetcher),
        config.site.menu_class.clone(),
    ));
    FeatExtractor::new(fetcher, catalog, config.site.feat_index)
}

fn default_extractor(server: &MockServer) -> FeatExtractor {
    let fetcher = Fetcher::from_config(&test_config(server)).expect("Failed to build fetcher");
    extractor(server, fetcher)
}

#[tokio::test]
async fn test_extract_feats_end_to_end() {
    let server = MockServer::start().await;
    mount_feat_index(&server, html(FEAT_INDEX)).await;

    let feats = default_extractor(&server)
        .extract_feats()
        .await
        .expect("Extraction failed");

    let lines: Vec<String> = feats.iter().map(|f| f.display_name()).collect();
    assert_eq!(
        lines,
        vec![
            "Dodge (Pathfinder Core Rulebook)",
            "Mobility (Pathfinder Core Rulebook)",
            "Coordinated Defense (Advanced Players Guide)",
            "Craft Cybernetics (Technology Guide)",
            "Awesome Blow (Bestiary)",
        ]
    );

    assert_eq!(feats[1].prerequisites(), Some("Dex 13, Dodge"));
    assert!(feats[1].has_type(FeatKind::Combat));
    assert_eq!(feats[2].prerequisites(), Some(""));
    assert!(feats[2].has_type(FeatKind::Teamwork));
    assert!(feats[3].has_type(FeatKind::ItemCreation));
    assert_eq!(feats[4].source(), Some(Source::Bestiary1));
    assert!(feats[4].types().is_empty());
}

#[tokio::test]
async fn test_malformed_row_reported_as_diagnostic() {
    let server = MockServer::start().await;
    mount_feat_index(&server, html(FEAT_INDEX)).await;

    let table = default_extractor(&server)
        .extract_table()
        .await
        .expect("Extraction failed");

    assert_eq!(table.feats.len(), 5);
    assert_eq!(table.stats.rows_skipped, 1);
    assert_eq!(table.stats.rows_ignored, 1);
    assert!(table
        .diagnostics
        .iter()
        .any(|d| matches!(d, HarvestError::MalformedRow { row: 4, .. })));
}

#[tokio::test]
async fn test_every_call_refetches() {
    let server = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/pathfinderRPG/prd/indices/feats.html"))
        .respond_with(html(FEAT_INDEX))
        .expect(2)
        .mount(&server)
        .await;

    let extractor = default_extractor(&server);
    let first = extractor.extract_feats().await.unwrap();
    let second = extractor.extract_feats().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;
    mount_feat_index(&server, ResponseTemplate::new(500)).await;

    let err = default_extractor(&server).extract_feats().await.unwrap_err();
    match err {
        HarvestError::Network { url, message } => {
            assert!(url.ends_with("/pathfinderRPG/prd/indices/feats.html"));
            assert!(message.contains("500"));
        }
        other => panic!("Expected network error, got {}", other),
    }
}

#[tokio::test]
async fn test_non_html_response_is_parse_error() {
    let server = MockServer::start().await;
    mount_feat_index(
        &server,
        ResponseTemplate::new(200).set_body_raw(r#"{"feats": []}"#, "application/json"),
    )
    .await;

    let err = default_extractor(&server).extract_feats().await.unwrap_err();
    assert!(matches!(err, HarvestError::Parse { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_empty_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_feat_index(&server, html("")).await;

    let err = default_extractor(&server).extract_feats().await.unwrap_err();
    assert!(matches!(err, HarvestError::Parse { .. }));
}

#[tokio::test]
async fn test_cancellation_aborts_slow_fetch() {
    let server = MockServer::start().await;
    mount_feat_index(&server, html(FEAT_INDEX).set_delay(Duration::from_secs(3))).await;

    let (handle, signal) = cancel_pair();
    let fetcher = Fetcher::from_config(&test_config(&server))
        .expect("Failed to build fetcher")
        .with_cancel_signal(signal);
    let extractor = extractor(&server, fetcher);

    let started = Instant::now();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    let err = extractor.extract_feats().await.unwrap_err();
    assert!(matches!(err, HarvestError::Cancelled { .. }));
    assert!(err.is_retryable());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_loader_initialize_warms_catalog_once() {
    use prd_harvest::Loader;

    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    let extractor = default_extractor(&server);
    extractor.initialize().await.expect("First initialize failed");
    extractor.initialize().await.expect("Second initialize failed");
}
