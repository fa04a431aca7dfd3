//! End-to-end tests driving the router in-process.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docrouter_resolver::catalog::builtin_profiles_with;
use docrouter_resolver::{DocFetcher, LibraryProfile, LibraryRegistry};
use docrouter_server::{AppState, app};
use docrouter_shared::{FetchOptions, LibraryEntry};

fn fetcher() -> DocFetcher {
    let opts = FetchOptions {
        timeout: Duration::from_secs(2),
        ..FetchOptions::default()
    };
    DocFetcher::new(&opts).unwrap()
}

/// Router whose agents SDK docs live at `agents_url`.
fn test_app_with(agents_url: &str, extra: Vec<LibraryProfile>) -> Router {
    let mut profiles = builtin_profiles_with(Url::parse(agents_url).unwrap());
    profiles.extend(extra);
    let registry = LibraryRegistry::new(profiles, fetcher()).unwrap();
    app(AppState::new(registry))
}

/// Router with no reachable documentation site.
fn offline_app() -> Router {
    test_app_with("http://127.0.0.1:9/", Vec::new())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get_raw(app: Router, uri: &str) -> String {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Library context endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_lists_context_endpoints() {
    let (status, body) = get(offline_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let endpoints: Vec<&str> = body["available_endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    for expected in [
        "/mcp/openai/context",
        "/mcp/firebase/context",
        "/mcp/aws/context",
        "/mcp/openai-agents/context",
        "/mcp/backend/context",
        "/mcp/frontend/context",
    ] {
        assert!(endpoints.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn openai_offline_uses_table_entry() {
    let (status, body) = get(
        offline_app(),
        "/mcp/openai/context?language=python&function=openai.ChatCompletion.create",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ctx = &body["context"];
    assert_eq!(ctx["language"], "python");
    assert_eq!(ctx["library"], "openai");
    assert_eq!(ctx["function"], "openai.ChatCompletion.create");
    assert!(
        ctx["documentation"]
            .as_str()
            .unwrap()
            .contains("Creates a chat completion for the provided messages.")
    );
}

#[tokio::test]
async fn aws_unknown_function_falls_back() {
    let (status, body) = get(
        offline_app(),
        "/mcp/aws/context?language=python&function=unknownfn",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let doc = body["context"]["documentation"].as_str().unwrap();
    assert!(doc.contains("not found"));
    assert!(doc.contains("unknownfn"));
}

#[tokio::test]
async fn aws_lookup_ignores_case() {
    let (_, upper) = get(
        offline_app(),
        "/mcp/aws/context?language=python&function=BOTO3.CLIENT",
    )
    .await;
    let (_, lower) = get(
        offline_app(),
        "/mcp/aws/context?language=python&function=boto3.client",
    )
    .await;

    assert_eq!(
        upper["context"]["documentation"],
        lower["context"]["documentation"]
    );
    assert_eq!(upper["context"]["function"], "BOTO3.CLIENT");
}

#[tokio::test]
async fn missing_parameter_is_422() {
    for uri in [
        "/mcp/firebase/context?language=python",
        "/mcp/firebase/context?function=initialize_app",
        "/mcp/firebase/context",
    ] {
        let (status, body) = get(offline_app(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["error_code"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["status"], 422);
    }
}

#[tokio::test]
async fn missing_parameter_never_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<main>docs</main>"))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app_with(&format!("{}/", server.uri()), Vec::new());
    let (status, _) = get(app, "/mcp/openai-agents/context?language=python").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_library_is_404() {
    let (status, body) = get(
        offline_app(),
        "/mcp/cobol/context?language=cobol&function=DISPLAY",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NOT_FOUND");

    let (status, _) = get(offline_app(), "/mcp/cobol/functions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn functions_listing_keeps_declaration_order() {
    let raw = get_raw(offline_app(), "/mcp/openai/functions").await;
    let chat = raw.find("\"ChatCompletion.create\"").unwrap();
    let legacy = raw.find("\"Completion.create\"").unwrap();
    assert!(chat < legacy);

    let (status, body) = get(offline_app(), "/mcp/firebase/functions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["functions"]["initialize_app"].is_string());
}

#[tokio::test]
async fn agents_scrapes_mocked_docs_site() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/handoffs/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><main>
                <h1>Handoffs</h1>
                <p>Handoffs allow an agent to delegate tasks to another agent.</p>
                <h2>Creating a handoff</h2>
                <p>Use the handoff() function to customise a Handoff.</p>
            </main></body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app_with(&format!("{}/", server.uri()), Vec::new());
    let (status, body) = get(
        app,
        "/mcp/openai-agents/context?language=python&function=agents.Handoff",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"]["library"], "openai-agents");
    assert_eq!(
        body["context"]["documentation"],
        "## Handoffs\n\nHandoffs allow an agent to delegate tasks to another agent."
    );
}

#[tokio::test]
async fn agents_offline_uses_table() {
    let (status, body) = get(
        offline_app(),
        "/mcp/openai-agents/context?language=python&function=openai.agents.Guardrails",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let doc = body["context"]["documentation"].as_str().unwrap();
    assert!(doc.starts_with("# Guardrails"));
}

#[tokio::test]
async fn reference_library_serves_raw_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reference"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Stripe API</html>"))
        .mount(&server)
        .await;

    let entry = LibraryEntry {
        id: "stripe".into(),
        display_name: Some("Stripe".into()),
        reference_url: format!("{}/reference", server.uri()),
        prefixes: vec![],
        error_text: None,
    };
    let profile = LibraryProfile::from_entry(&entry).unwrap();
    let app = test_app_with("http://127.0.0.1:9/", vec![profile]);

    let (status, body) = get(
        app,
        "/mcp/stripe/context?language=python&function=stripe.Charge.create",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"]["documentation"], "<html>Stripe API</html>");
}

// ---------------------------------------------------------------------------
// Backend and frontend catalogs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_endpoint_detail() {
    let (status, body) = get(
        offline_app(),
        "/mcp/backend/context?resource=users&endpoint=GET%20/api/users",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ctx = &body["context"];
    assert_eq!(ctx["library"], "backend");
    assert_eq!(ctx["resource"], "users");
    assert_eq!(ctx["endpoint"], "GET /api/users");
    let doc = ctx["documentation"].as_str().unwrap();
    assert!(doc.contains("GET /api/users (users)"));
    assert!(doc.contains("List all users in the system"));
}

#[tokio::test]
async fn backend_overview_without_parameters() {
    let (status, body) = get(offline_app(), "/mcp/backend/context").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["context"]["documentation"]
            .as_str()
            .unwrap()
            .starts_with("\n# Backend Resources")
    );
    assert!(body["context"].get("resource").is_none());
}

#[tokio::test]
async fn backend_listings() {
    let (_, apis) = get(offline_app(), "/mcp/backend/apis").await;
    assert_eq!(
        apis["apis"]["orders"]["DELETE /api/orders/{id}"],
        "Delete an order by ID"
    );

    let (_, schemas) = get(offline_app(), "/mcp/backend/schemas").await;
    assert_eq!(schemas["schemas"]["products"]["price"], "float");
}

#[tokio::test]
async fn frontend_component_and_listings() {
    let (status, body) = get(offline_app(), "/mcp/frontend/context?component=Button").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"]["library"], "frontend");
    assert_eq!(body["context"]["component"], "Button");
    assert_eq!(
        body["context"]["documentation"],
        "\n# Button\n\nA reusable button component with various styles and states.\n"
    );

    let (_, components) = get(offline_app(), "/mcp/frontend/components").await;
    assert!(components["components"]["Navigation"].is_string());

    let (_, pages) = get(offline_app(), "/mcp/frontend/pages").await;
    assert_eq!(pages["pages"]["Settings"], "User settings and preferences page.");
}

#[tokio::test]
async fn frontend_unknown_component_still_answers() {
    let (status, body) = get(offline_app(), "/mcp/frontend/context?component=Modal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"]["component"], "Modal");
    assert!(body["context"].get("page").is_none());
    assert_eq!(body["context"]["documentation"], "\n# Modal\n\nComponent not found\n");
}
