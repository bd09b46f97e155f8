//! Integration tests for the browser UI routes
//!
//! A real server is bound on a free port and driven with reqwest, with the
//! geolocation API mocked by wiremock.

mod helpers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ip_locator::app::server;
use ip_locator::Controller;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{location_body, new_york_body, test_client, API_PATH};

/// Starts the web UI for `controller` and returns its base URL.
async fn spawn_ui(controller: Arc<Controller>) -> String {
    let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(server::serve(listener, controller));
    format!("http://{}", addr)
}

async fn fetch_state(base: &str) -> serde_json::Value {
    let body = reqwest::get(format!("{}/state", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    serde_json::from_str(&body).expect("state is not JSON")
}

#[tokio::test]
async fn test_index_shows_startup_location() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(new_york_body()))
        .mount(&api)
        .await;

    let controller = Arc::new(Controller::new(test_client(&api)));
    controller.startup().await;
    let base = spawn_ui(controller).await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("id=\"searchbar\""));
    assert!(body.contains("<section class=\"details\">"));
    assert!(body.contains("New York"));
    assert!(body.contains("UTC -05:00"));
    assert!(body.contains("setView([40.7128, -74.006], 15)"));
}

#[tokio::test]
async fn test_search_redirects_to_updated_page() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(new_york_body()))
        .expect(1)
        .mount(&api)
        .await;

    let base = spawn_ui(Arc::new(Controller::new(test_client(&api)))).await;

    let no_redirect = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = no_redirect
        .get(format!("{}/search?q=example.com", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 303);
    assert_eq!(response.headers()["location"], "/");

    let body = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("New York"));
    assert!(body.contains("value=\"example.com\""));
}

#[tokio::test]
async fn test_invalid_search_shows_validation_error() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(new_york_body()))
        .expect(0)
        .mount(&api)
        .await;

    let base = spawn_ui(Arc::new(Controller::new(test_client(&api)))).await;

    // The default client follows the redirect back to the page
    let body = reqwest::get(format!("{}/search?q=not%20a%20host", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains(
        "<h2 class=\"error txt-center\">Please enter a valid IP address or domain name</h2>"
    ));
    assert!(body.contains("<section class=\"details hidden\">"));
    assert!(!body.contains("id=\"map\""));
}

#[tokio::test]
async fn test_state_endpoint_reports_error_state() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(422))
        .mount(&api)
        .await;

    let controller = Arc::new(Controller::new(test_client(&api)));
    let base = spawn_ui(controller.clone()).await;

    let state = fetch_state(&base).await;
    assert_eq!(state["state"], "loading");

    controller.submit("8.8.8.8").await;

    let state = fetch_state(&base).await;
    assert_eq!(state["state"], "error");
    assert_eq!(state["page"]["map_view"]["content"], "Problem fetching data");
    assert_eq!(state["page"]["details"]["hidden"], true);
}

#[tokio::test]
async fn test_marker_icon_is_served() {
    let api = MockServer::start().await;
    let base = spawn_ui(Arc::new(Controller::new(test_client(&api)))).await;

    let response = reqwest::get(format!("{}/images/icon-location.svg", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
    assert!(response.text().await.unwrap().starts_with("<svg"));
}

/// Starts the web UI the way `serve` does: startup lookup in the background.
async fn launch_ui(controller: Arc<Controller>) -> String {
    let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(server::launch(listener, controller));
    format!("http://{}", addr)
}

/// Polls `/state` until it reports `want`, giving up after five seconds.
async fn wait_for_state(base: &str, want: &str) -> serde_json::Value {
    let mut state = fetch_state(base).await;
    for _ in 0..50 {
        if state["state"] == want {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        state = fetch_state(base).await;
    }
    state
}

async fn mount_slow_startup(api: &MockServer) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param_is_missing("ipAddress"))
        .and(query_param_is_missing("domain"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(new_york_body())
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(api)
        .await;
}

#[tokio::test]
async fn test_ui_answers_while_startup_lookup_is_pending() {
    let api = MockServer::start().await;
    mount_slow_startup(&api).await;

    let base = launch_ui(Arc::new(Controller::new(test_client(&api)))).await;

    let quick = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let body = quick
        .get(format!("{}/state", base))
        .send()
        .await
        .expect("web UI did not answer during the startup lookup")
        .text()
        .await
        .unwrap();
    let state: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(state["state"], "loading");

    let state = wait_for_state(&base, "idle").await;
    assert_eq!(state["state"], "idle");
    assert_eq!(state["page"]["details"]["hidden"], false);
}

#[tokio::test]
async fn test_search_during_startup_is_not_overwritten() {
    let api = MockServer::start().await;
    mount_slow_startup(&api).await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("ipAddress", "8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_body(
            "8.8.8.8",
            "Mountain View",
            37.40599,
            -122.078514,
        )))
        .mount(&api)
        .await;

    let base = launch_ui(Arc::new(Controller::new(test_client(&api)))).await;

    let body = reqwest::get(format!("{}/search?q=8.8.8.8", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Mountain View"));

    // Outlast the startup response, which must be discarded
    tokio::time::sleep(Duration::from_millis(2500)).await;
    let state = fetch_state(&base).await;
    assert_eq!(state["state"], "idle");
    assert_eq!(state["page"]["search_text"], "8.8.8.8");
    assert_eq!(state["page"]["details"]["items"][0]["value"], "8.8.8.8");
}
