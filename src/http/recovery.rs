//! Per-request recovery boundary.
//!
//! # Responsibilities
//! - Map `RequestError` values to responses (4xx, or 500 for fatal)
//! - Catch handler panics and answer 500 instead of dropping the connection
//! - Log fatal failures once, with the request ID, method and path
//!
//! # Design Decisions
//! - Fatal errors never leave this boundary; clients only see a generic 500
//! - The response carries a private marker so logging happens in one place

use std::any::Any;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::FatalError;
use crate::http::request::request_id;
use crate::meta::Meta;
use crate::negotiation::{accepted_media_types, negotiate_format, Format};
use crate::render;
use crate::validation::{BindError, RequestError};

const INTERNAL_ERROR_BODY: &str = "Internal Server Error";
const ERROR_FORMATS: [Format; 3] = [Format::Json, Format::Xml, Format::Plain];

/// Why a request ended in a 500.
#[derive(Debug, Clone)]
enum Caught {
    Fatal(FatalError),
    Panic(String),
}

/// Format for error bodies: the client's choice when possible, else JSON.
pub fn error_format(headers: &HeaderMap) -> Format {
    negotiate_format(&accepted_media_types(headers), &ERROR_FORMATS)
        .ok()
        .flatten()
        .unwrap_or(Format::Json)
}

/// Build the response for a failed request.
pub fn error_response(err: RequestError, format: Format) -> Response {
    match err {
        RequestError::Bind(bind) => render::format(format, StatusCode::BAD_REQUEST, bind.meta()),
        RequestError::Other(other) => {
            let status = match other {
                BindError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                BindError::Decode(_) | BindError::Fields(_) => StatusCode::BAD_REQUEST,
            };
            let meta = Meta::new().with("message", other.to_string());
            render::format(format, status, &meta)
        }
        RequestError::Fatal(fatal) => internal_error(Caught::Fatal(fatal)),
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        error_response(self, Format::Json)
    }
}

fn internal_error(caught: Caught) -> Response {
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response();
    response.extensions_mut().insert(caught);
    response
}

/// Panic handler for `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    internal_error(Caught::Panic(detail))
}

/// Middleware that logs 500s produced by fatal errors or panics.
pub async fn boundary(request: Request<Body>, next: Next) -> Response {
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<Caught>() {
        Some(Caught::Fatal(err)) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %err,
                "Fatal precondition violation"
            );
        }
        Some(Caught::Panic(detail)) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                panic = %detail,
                "Handler panicked"
            );
        }
        None => {}
    }
    response
}

/// Wrap `router` in the recovery boundary.
pub fn with_recovery<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(boundary))
}
