use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use noid_config::Config;
use noid_config::export::ExportConfig;
use noid_config::search::{SearchConfig, parse_alphabet};
use serde::Deserialize;

use crate::harvest;

const ENTRY_A: &str = r#"{"hits": {"total": {"value": 1, "relation": "eq"}, "hits": [
    {"_source": {
        "fields": {"chronology": 1957, "word_class": "vb."},
        "title_headword": "a-",
        "headword_id": "a",
        "html_list": "<div><span class=\"defpar\">forstavelse</span></div>"
    }}
]}}"#;

const EMPTY: &str = r#"{"hits": {"hits": []}}"#;

#[derive(Debug, Deserialize)]
struct SearchParams {
    source: String,
    search: String,
    from: u32,
    size: u32,
}

type Responder = fn(&SearchParams) -> (StatusCode, String);

async fn search(
    State(respond): State<Responder>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let (status, body) = respond(&params);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Mock search API on an ephemeral port
async fn serve(respond: Responder) -> SocketAddr {
    let app = Router::new().route("/api/", get(search)).with_state(respond);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Serves ENTRY_A for "a", empty pages otherwise, and 400 on unexpected paging
fn dsn_like(params: &SearchParams) -> (StatusCode, String) {
    if params.source != "noid" || params.from != 0 || params.size != 10000 {
        return (StatusCode::BAD_REQUEST, "{}".to_string());
    }
    if params.search == "a" {
        (StatusCode::OK, ENTRY_A.to_string())
    } else {
        (StatusCode::OK, EMPTY.to_string())
    }
}

fn config(addr: SocketAddr, letters: &str, output: PathBuf) -> Config {
    Config {
        search: SearchConfig {
            base_url: format!("http://{addr}/api/"),
            alphabet: parse_alphabet(letters),
            timeout_seconds: Some(5),
            ..SearchConfig::default()
        },
        export: ExportConfig { output },
    }
}

#[tokio::test]
async fn test_harvest_writes_single_row() {
    let addr = serve(dsn_like).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("noid.tsv");

    let rows = harvest(&config(addr, "abæ", output.clone())).await.unwrap();
    assert_eq!(rows, 1);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "id\tlemma\tcategory\tdefinition");
    assert_eq!(lines[1], "a\ta-\tQ24905\tforstavelse");
    assert_eq!(lines[1].split('\t').next(), Some("a"));
}

#[tokio::test]
async fn test_http_error_aborts_run() {
    fn fail_on_b(params: &SearchParams) -> (StatusCode, String) {
        if params.search == "b" {
            (StatusCode::SERVICE_UNAVAILABLE, String::new())
        } else {
            dsn_like(params)
        }
    }

    let addr = serve(fail_on_b).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("noid.tsv");

    let err = harvest(&config(addr, "abc", output.clone())).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("'b'"), "{message}");
    assert!(message.contains("503"), "{message}");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_malformed_response_aborts_run() {
    fn broken(_: &SearchParams) -> (StatusCode, String) {
        (StatusCode::OK, r#"{"hits": {"hits": [{"_source": {"headword_id": "a"}}]}}"#.to_string())
    }

    let addr = serve(broken).await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("noid.tsv");

    let err = harvest(&config(addr, "a", output.clone())).await.unwrap_err();
    assert!(format!("{err:#}").contains("title_headword"));
    assert!(!output.exists());
}
