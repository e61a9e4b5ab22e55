//! Request handlers for the API routes.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::http::recovery::{error_format, error_response};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::meta::Meta;
use crate::negotiation::{negotiate, Negotiation};
use crate::validation::{aggregate, bind_json, content_type_is_json, RequestError};

/// Fields a user body must carry.
pub const USER_FIELDS: [&str; 3] = ["Name", "Age", "Email"];

/// `GET {base}/status`, rendered in whichever offered format the client accepts.
pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, RequestError> {
    let data = Meta::new()
        .with("version", env!("CARGO_PKG_VERSION"))
        .with("status", "operational")
        .with("base_path", &*state.base_path);
    let plain = Meta::new().with(
        "message",
        format!("routekit {} operational", env!("CARGO_PKG_VERSION")),
    );

    let negotiation = Negotiation::new(state.offered.to_vec()).data(data).plain(plain);
    Ok(negotiate(&headers, &negotiation)?)
}

/// `POST {base}/users/`: bind and validate a user body.
pub async fn create_user(headers: HeaderMap, body: Bytes) -> Response {
    let bound = content_type_is_json(&headers).and_then(|()| bind_json(&body, &USER_FIELDS));
    match bound {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => {
            let err = aggregate(err);
            if !err.is_fatal() {
                tracing::info!(
                    request_id = %request_id(&headers),
                    error = %err,
                    "Rejected request body"
                );
            }
            error_response(err, error_format(&headers))
        }
    }
}
