//! Integration tests for the scraper
//!
//! These tests use wiremock to serve small paginated listing sites and run
//! the full fetch, paginate and write cycle end-to-end.

use quote_scraper::config::Config;
use quote_scraper::crawler::{scrape_and_save, ExtractError, Paginator};
use quote_scraper::quote::{parse_tags, Quote};
use quote_scraper::ScrapeError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A quote as listed on a fixture page
struct Listed<'a> {
    text: &'a str,
    author: &'a str,
    tags: &'a [&'a str],
}

/// Renders a listing page in the markup layout of quotes.toscrape.com
fn listing_page(quotes: &[Listed<'_>], next: Option<&str>) -> String {
    let mut html = String::from("<html><head><title>Quotes</title></head><body><div class=\"col-md-8\">");
    for quote in quotes {
        html.push_str("<div class=\"quote\" itemscope>");
        html.push_str(&format!("<span class=\"text\" itemprop=\"text\">{}</span>", quote.text));
        html.push_str(&format!(
            "<span>by <small class=\"author\" itemprop=\"author\">{}</small></span>",
            quote.author
        ));
        html.push_str("<div class=\"tags\">Tags:");
        for tag in quote.tags {
            html.push_str(&format!("<a class=\"tag\" href=\"/tag/{0}/page/1/\">{0}</a>", tag));
        }
        html.push_str("</div></div>");
    }
    html.push_str("<nav><ul class=\"pager\">");
    if let Some(href) = next {
        html.push_str(&format!(
            "<li class=\"next\"><a href=\"{}\">Next <span aria-hidden=\"true\">&rarr;</span></a></li>",
            href
        ));
    }
    html.push_str("</ul></nav></div></body></html>");
    html
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, csv_path: &str) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = format!("{}/", base_url);
    config.output.csv_path = csv_path.to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: String, calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(calls)
        .mount(server)
        .await;
}

/// Page 1: two quotes and a next link. Page 2: one quote, no next link.
async fn mount_two_page_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        listing_page(
            &[
                Listed {
                    text: "“The world as we have created it is a process of our thinking.”",
                    author: "Albert Einstein",
                    tags: &["change", "deep-thoughts"],
                },
                Listed {
                    text: "“It is our choices, Harry, that show what we truly are.”",
                    author: "J.K. Rowling",
                    tags: &["abilities", "choices"],
                },
            ],
            Some("/page/2/"),
        ),
        1,
    )
    .await;

    mount_page(
        server,
        "/page/2/",
        listing_page(
            &[Listed {
                text: "“A day without sunshine is like, you know, night.”",
                author: "Steve Martin",
                tags: &["humor", "obvious", "simile"],
            }],
            None,
        ),
        1,
    )
    .await;
}

#[tokio::test]
async fn test_two_page_site_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_two_page_site(&mock_server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = dir.path().join("quotes.csv");
    let config = create_test_config(&mock_server.uri(), csv_path.to_str().unwrap());

    let stats = scrape_and_save(&config).await.expect("Scrape failed");
    assert_eq!(stats.pages_visited, 2);
    assert_eq!(stats.total_quotes, 3);
    assert_eq!(stats.unique_authors, 3);

    // Header plus three rows
    let content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert_eq!(content.lines().count(), 4);
    assert_eq!(content.lines().next(), Some("text,author,tags"));

    let mut reader = csv::Reader::from_path(&csv_path).expect("Failed to open CSV");
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("Failed to read records");

    let authors: Vec<&str> = records.iter().map(|r| &r[1]).collect();
    assert_eq!(authors, vec!["Albert Einstein", "J.K. Rowling", "Steve Martin"]);

    let last_tags = parse_tags(&records[2][2]).expect("Tags column should parse");
    assert_eq!(last_tags, vec!["humor", "obvious", "simile"]);
}

#[tokio::test]
async fn test_paginator_returns_quotes_in_page_order() {
    let mock_server = MockServer::start().await;
    mount_two_page_site(&mock_server).await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let paginator = Paginator::new(&config).expect("Failed to create paginator");
    let quotes = paginator.scrape_quotes().await.expect("Scrape failed");

    assert_eq!(
        quotes,
        vec![
            Quote::new(
                "“The world as we have created it is a process of our thinking.”",
                "Albert Einstein",
                vec!["change".to_string(), "deep-thoughts".to_string()],
            ),
            Quote::new(
                "“It is our choices, Harry, that show what we truly are.”",
                "J.K. Rowling",
                vec!["abilities".to_string(), "choices".to_string()],
            ),
            Quote::new(
                "“A day without sunshine is like, you know, night.”",
                "Steve Martin",
                vec!["humor".to_string(), "obvious".to_string(), "simile".to_string()],
            ),
        ]
    );
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[Listed {
                text: "first",
                author: "A",
                tags: &["x"],
            }],
            Some("/page/2/"),
        ),
        2,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(
            &[Listed {
                text: "second",
                author: "B",
                tags: &[],
            }],
            None,
        ),
        2,
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let paginator = Paginator::new(&config).expect("Failed to create paginator");

    let first = paginator.run().await.expect("First run failed");
    let second = paginator.run().await.expect("Second run failed");
    assert_eq!(first, second);
    assert_eq!(first.quotes.len(), 2);
}

#[tokio::test]
async fn test_single_page_without_next_link() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[
                Listed {
                    text: "only",
                    author: "One",
                    tags: &[],
                },
                Listed {
                    text: "page",
                    author: "Two",
                    tags: &["solo"],
                },
            ],
            None,
        ),
        1,
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let outcome = Paginator::new(&config)
        .expect("Failed to create paginator")
        .run()
        .await
        .expect("Scrape failed");

    assert_eq!(outcome.pages_visited, 1);
    assert_eq!(outcome.quotes.len(), 2);
    // Wiremock verifies the single request when mock_server drops
}

#[tokio::test]
async fn test_http_error_aborts_without_writing() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[Listed {
                text: "kept?",
                author: "Nobody",
                tags: &[],
            }],
            Some("/page/2/"),
        ),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = dir.path().join("quotes.csv");
    let config = create_test_config(&mock_server.uri(), csv_path.to_str().unwrap());

    let result = scrape_and_save(&config).await;
    match result {
        Err(ScrapeError::Status { url, status }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/page/2/"), "unexpected url {}", url);
        }
        other => panic!("Expected status error, got {:?}", other),
    }

    assert!(!csv_path.exists(), "No partial CSV should be written");
}

#[tokio::test]
async fn test_missing_base_page_is_status_error() {
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let result = Paginator::new(&config)
        .expect("Failed to create paginator")
        .run()
        .await;

    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_quote_missing_author_is_fatal() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <div class="quote"><span class="text">Anonymous words</span>
                <div class="tags"><a class="tag">mystery</a></div></div>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let result = Paginator::new(&config)
        .expect("Failed to create paginator")
        .run()
        .await;

    match result {
        Err(ScrapeError::Extract { source, .. }) => assert_eq!(
            source,
            ExtractError::MissingElement {
                selector: ".author".to_string()
            }
        ),
        other => panic!("Expected extract error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_max_pages_stops_early() {
    let mock_server = MockServer::start().await;
    for (route, next, calls) in [
        ("/", Some("/page/2/"), 1),
        ("/page/2/", Some("/page/3/"), 1),
        ("/page/3/", None, 0),
    ] {
        mount_page(
            &mock_server,
            route,
            listing_page(
                &[Listed {
                    text: route,
                    author: "Pager",
                    tags: &[],
                }],
                next,
            ),
            calls,
        )
        .await;
    }

    let mut config = create_test_config(&mock_server.uri(), "unused.csv");
    config.scraper.max_pages = Some(2);

    let outcome = Paginator::new(&config)
        .expect("Failed to create paginator")
        .run()
        .await
        .expect("Scrape failed");

    assert_eq!(outcome.pages_visited, 2);
    assert_eq!(outcome.quotes.len(), 2);
    // Wiremock verifies /page/3/ is never requested when mock_server drops
}

#[tokio::test]
async fn test_next_link_back_to_visited_page_is_cycle() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        listing_page(
            &[Listed {
                text: "loop",
                author: "Ouroboros",
                tags: &[],
            }],
            Some("/page/2/"),
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2/",
        listing_page(
            &[Listed {
                text: "back",
                author: "Ouroboros",
                tags: &[],
            }],
            Some("/"),
        ),
        1,
    )
    .await;

    let config = create_test_config(&mock_server.uri(), "unused.csv");
    let result = Paginator::new(&config)
        .expect("Failed to create paginator")
        .run()
        .await;

    assert!(matches!(result, Err(ScrapeError::PaginationCycle { .. })));
}
