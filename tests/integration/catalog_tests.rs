use crate::{html, mount_root, test_config, BASE_PATH, ROOT_PAGE};
use prd_harvest::model::Source;
use prd_harvest::{BookCatalog, Fetcher, HarvestError};
use std::collections::BTreeSet;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog(server: &MockServer) -> BookCatalog {
    let config = test_config(server);
    let fetcher = Fetcher::from_config(&config).expect("Failed to build fetcher");
    BookCatalog::new(Arc::new(fetcher), config.site.menu_class)
}

#[tokio::test]
async fn test_list_books_from_navigation_menus() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    let catalog = catalog(&server);
    let books = catalog.list_books().await.expect("Failed to list books");

    let expected: BTreeSet<String> = [
        "advancedPlayersGuide",
        "bestiary",
        "coreRulebook",
        "technologyGuide",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(books, &expected);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_fetch() {
    let server = MockServer::start().await;
    // Slow root page so both callers are waiting at the same time
    Mock::given(method("GET"))
        .and(path(BASE_PATH))
        .respond_with(html(ROOT_PAGE).set_delay(std::time::Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = catalog(&server);
    let (first, second) = tokio::join!(catalog.list_books(), catalog.list_books());

    let first = first.expect("First caller failed");
    let second = second.expect("Second caller failed");
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);

    // Cached: no further request
    assert_eq!(catalog.list_books().await.unwrap().len(), 4);
    assert!(catalog.is_loaded());
}

#[tokio::test]
async fn test_failed_population_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BASE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_root(&server, 1).await;

    let catalog = catalog(&server);

    let err = catalog.list_books().await.unwrap_err();
    assert!(matches!(err, HarvestError::Network { .. }));
    assert!(err.is_retryable());
    assert!(!catalog.is_loaded());

    let books = catalog.list_books().await.expect("Retry should succeed");
    assert!(books.contains("coreRulebook"));
}

#[tokio::test]
async fn test_resolve_source_against_server_origin() {
    let server = MockServer::start().await;
    let catalog = catalog(&server);

    let absolute = format!("{}{}ultimateMagic/spells.html", server.uri(), BASE_PATH);
    assert_eq!(
        catalog.resolve_source(&absolute).unwrap(),
        Some(Source::UltimateMagic)
    );
    assert_eq!(
        catalog
            .resolve_source("/pathfinderRPG/prd/bestiary/monsterIndex.html")
            .unwrap(),
        Some(Source::Bestiary1)
    );
    assert_eq!(catalog.resolve_source("/other/page.html").unwrap(), None);
    assert!(matches!(
        catalog.resolve_source("/pathfinderRPG/prd/homebrew/feats.html"),
        Err(HarvestError::UnknownSource { .. })
    ));
}
