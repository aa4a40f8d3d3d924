//! Integration tests for the crawler
//!
//! These tests run the full three-level crawl against wiremock servers and
//! check the CSV output, resume behavior, and failure isolation end-to-end.

use asap_scrape::config::Config;
use asap_scrape::crawler::crawl;
use asap_scrape::store::{CsvStore, Record, COLUMNS};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server_uri: &str, csv_path: &Path) -> Config {
    let mut config = Config::default();
    config.site.landing_url = format!("{}/showcat.php?id=2", server_uri);
    config.crawler.rate_limit_ms = 0;
    config.crawler.max_letters = Some(1);
    config.output.csv_path = csv_path.to_string_lossy().into_owned();
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

/// Mounts the letter-a index page listing the given players.
async fn mount_letter_page(server: &MockServer, players: &[(&str, &str)]) {
    let anchors: String = players
        .iter()
        .map(|(id, name)| format!(r#"<a href="show_player.php?id={}">{}</a>"#, id, name))
        .collect();
    let body = format!(
        r#"<a href="show_player.php?category=2&letter=b">B</a>{}"#,
        anchors
    );
    Mock::given(method("GET"))
        .and(path("/show_player.php"))
        .and(query_param("letter", "a"))
        .respond_with(html(&body))
        .mount(server)
        .await;
}

/// Mounts a player page with an interview table.
async fn mount_player_page(
    server: &MockServer,
    player_id: &str,
    name: &str,
    interviews: &[(&str, &str, &str)],
) {
    let rows: String = interviews
        .iter()
        .map(|(id, title, date)| {
            format!(
                r#"<tr><td><nobr>[{}]</nobr></td>
                <td><a href="show_interview.php?id={}">{}</a></td></tr>"#,
                date, id, title
            )
        })
        .collect();
    let body = format!("<h1>{}</h1><table>{}</table>", name, rows);
    Mock::given(method("GET"))
        .and(path("/show_player.php"))
        .and(query_param("id", player_id))
        .respond_with(html(&body))
        .mount(server)
        .await;
}

/// Mounts an interview page with a transcript and trailing boilerplate.
async fn mount_interview_page(server: &MockServer, id: &str, title: &str, paragraphs: &[&str]) {
    let body_paragraphs: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();
    let body = format!(
        r#"<table><tr><td>
        <h1>{}</h1>
        <h2>October 4, 2023</h2>
        <h3>In-Page Name</h3>
        <h3>Minnesota Twins</h3>
        <h3>Press Conference</h3>
        {}
        <p>FastScripts Transcript by ASAP Sports</p>
        <p>trailing boilerplate</p>
        </td></tr></table>"#,
        title, body_paragraphs
    );
    Mock::given(method("GET"))
        .and(path("/show_interview.php"))
        .and(query_param("id", id))
        .respond_with(html(&body))
        .mount(server)
        .await;
}

fn read_records(path: &Path) -> Vec<Record> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader.deserialize().map(|r| r.expect("row")).collect()
}

#[tokio::test]
async fn test_full_crawl_writes_records() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_letter_page(&server, &[("100", "Jane Doe"), ("101", "John Smith")]).await;
    mount_player_page(
        &server,
        "100",
        "Jane Doe",
        &[
            ("555", "World Series Game 1", "October 4, 2023"),
            ("556", "World Series Game 2", "October 5, 2023"),
        ],
    )
    .await;
    mount_player_page(
        &server,
        "101",
        "John Smith",
        &[("600", "NLCS Game 3", "October 18, 2023")],
    )
    .await;
    mount_interview_page(&server, "555", "World Series: Game 1", &["intro", "middle"]).await;
    mount_interview_page(&server, "556", "World Series: Game 2", &["only paragraph"]).await;
    mount_interview_page(&server, "600", "NLCS: Game 3", &["words"]).await;

    let stats = crawl(test_config(&server.uri(), &csv_path))
        .await
        .expect("crawl failed");

    assert_eq!(stats.new_records, 3);
    assert_eq!(stats.letters, 1);
    assert_eq!(stats.players, 2);

    let records = read_records(&csv_path);
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.interview_id, "555");
    assert_eq!(first.player_name, "Jane Doe");
    assert_eq!(first.interview_title, "World Series: Game 1");
    // Index-page inline date wins over the page's own h2.
    assert_eq!(first.date, "October 4, 2023");
    assert_eq!(first.team, "Minnesota Twins");
    assert_eq!(first.session_type, "Press Conference");
    // Boilerplate trailer excluded.
    assert_eq!(first.transcript, "intro\n\nmiddle");
    assert!(first.url.contains("show_interview.php?id=555"));

    // Header written exactly once, in fixed column order.
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with(&COLUMNS.join(",")));
    assert_eq!(content.matches("player_name").count(), 1);
}

#[tokio::test]
async fn test_second_run_appends_nothing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_letter_page(&server, &[("100", "Jane Doe")]).await;
    mount_player_page(
        &server,
        "100",
        "Jane Doe",
        &[("555", "World Series Game 1", "October 4, 2023")],
    )
    .await;
    mount_interview_page(&server, "555", "World Series: Game 1", &["text"]).await;

    let first = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(first.new_records, 1);

    let second = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(second.new_records, 0);
    assert_eq!(second.skipped_known, 1);

    assert_eq!(read_records(&csv_path).len(), 1);
}

#[tokio::test]
async fn test_resume_skips_seeded_id() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    // Seed the store with id X123 before the run.
    let store = CsvStore::new(&csv_path);
    store.ensure_header().unwrap();
    store
        .append(&Record {
            interview_id: "X123".into(),
            ..Record::default()
        })
        .unwrap();

    mount_letter_page(&server, &[("100", "Jane Doe")]).await;
    mount_player_page(
        &server,
        "100",
        "Jane Doe",
        &[
            ("X123", "Already scraped", "October 1, 2023"),
            ("Y456", "New interview", "October 2, 2023"),
        ],
    )
    .await;
    mount_interview_page(&server, "Y456", "New interview", &["fresh text"]).await;

    // The seeded interview must never be fetched.
    Mock::given(method("GET"))
        .and(path("/show_interview.php"))
        .and(query_param("id", "X123"))
        .respond_with(html("<p>should not be requested</p>"))
        .expect(0)
        .mount(&server)
        .await;

    let stats = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(stats.new_records, 1);
    assert_eq!(stats.skipped_known, 1);

    let records = read_records(&csv_path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].interview_id, "Y456");
}

#[tokio::test]
async fn test_fetch_failure_skips_subtree() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_letter_page(&server, &[("100", "Jane Doe"), ("101", "John Smith")]).await;

    // Jane's page errors; John's works.
    Mock::given(method("GET"))
        .and(path("/show_player.php"))
        .and(query_param("id", "100"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_player_page(
        &server,
        "101",
        "John Smith",
        &[("600", "NLCS Game 3", "October 18, 2023")],
    )
    .await;
    mount_interview_page(&server, "600", "NLCS: Game 3", &["words"]).await;

    let stats = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(stats.fetch_failures, 1);
    assert_eq!(stats.new_records, 1);

    let records = read_records(&csv_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].player_name, "John Smith");
}

#[tokio::test]
async fn test_malformed_store_degrades_to_full_crawl() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    // Garbage where the CSV should be: resume degrades to an empty known
    // set and the crawl proceeds.
    std::fs::write(&csv_path, "a,b\ngarbage without the right header\n").unwrap();

    mount_letter_page(&server, &[("100", "Jane Doe")]).await;
    mount_player_page(
        &server,
        "100",
        "Jane Doe",
        &[("555", "World Series Game 1", "October 4, 2023")],
    )
    .await;
    mount_interview_page(&server, "555", "World Series: Game 1", &["text"]).await;

    let stats = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(stats.new_records, 1);
}

#[tokio::test]
async fn test_links_without_ids_are_skipped() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("out.csv");

    mount_letter_page(&server, &[("100", "Jane Doe")]).await;

    // One well-formed interview link and one without an id parameter.
    let body = r#"<h1>Jane Doe</h1><table>
        <tr><td><a href="show_interview.php?id=555">Real</a></td></tr>
        <tr><td><a href="show_interview.php?id=">No id</a></td></tr>
        </table>"#;
    Mock::given(method("GET"))
        .and(path("/show_player.php"))
        .and(query_param("id", "100"))
        .respond_with(html(body))
        .mount(&server)
        .await;
    mount_interview_page(&server, "555", "Real", &["text"]).await;

    let stats = crawl(test_config(&server.uri(), &csv_path)).await.unwrap();
    assert_eq!(stats.new_records, 1);

    let records = read_records(&csv_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].interview_id, "555");
}
