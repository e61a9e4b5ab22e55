//! Content negotiation through the HTTP stack.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use routekit::negotiation::Format;
use routekit::{AppServer, ServerConfig};

mod common;

fn status_request(accept: Option<&str>) -> Request<Body> {
    let mut builder = Request::get("/api/status");
    if let Some(accept) = accept {
        builder = builder.header("accept", accept);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_status_defaults_to_first_offered_format() {
    let res = common::send(common::default_router(), status_request(None)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type(), "application/json");

    let json = res.json();
    assert_eq!(json["status"], "operational");
    assert_eq!(json["base_path"], "/api");
}

#[tokio::test]
async fn test_status_as_xml() {
    let res = common::send(
        common::default_router(),
        status_request(Some("text/html;q=0.9, application/xml")),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type(), "application/xml");
    assert!(res.body.starts_with("<map><version>"));
    assert!(res.body.contains("<status>operational</status>"));
}

#[tokio::test]
async fn test_status_plain_uses_custom_data() {
    let res = common::send(common::default_router(), status_request(Some("text/plain"))).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.starts_with("routekit "));
    assert!(res.body.ends_with(" operational"));
}

#[tokio::test]
async fn test_status_not_acceptable() {
    let res = common::send(common::default_router(), status_request(Some("image/png"))).await;
    assert_eq!(res.status, StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_offered_formats_follow_config() {
    let mut config = ServerConfig::default();
    config.routes.base_path = "/v2/".to_string();
    config.negotiation.offered_formats = vec![Format::Plain.media_type().to_string()];
    let router = AppServer::new(&config).router();

    let res = common::send(
        router.clone(),
        Request::get("/v2/status").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type(), "text/plain");

    let res = common::send(
        router,
        Request::get("/v2/status")
            .header("accept", "application/json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_request_id_is_assigned_and_propagated() {
    let res = common::send(common::default_router(), status_request(None)).await;
    assert!(res.headers.contains_key("x-request-id"));

    let res = common::send(
        common::default_router(),
        Request::get("/api/status")
            .header("x-request-id", "client-42")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(res.headers["x-request-id"], "client-42");
}
