use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

use crate::dtos::QrRequest;
use crate::error::QrServiceError;
use crate::models::QrParams;
use crate::services::metrics::{record_failure, record_render};
use crate::AppState;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
/// Output is a pure function of the parameters, so it never goes stale.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Renders the requested QR code as block-character text. Accepts any
/// method; parameters come from the query string, then a JSON or form body.
pub async fn render_qr(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, QrServiceError> {
    let request = QrRequest::from_parts(raw_query.as_deref(), &headers, &body);

    let result = QrParams::from_request(&request).and_then(|params| {
        let (mode, text) = state.qr.generate(&params)?;
        record_render(mode, &params.ecc);
        Ok(text)
    });

    match result {
        Ok(text) => Ok((
            [
                (header::CONTENT_TYPE, TEXT_CONTENT_TYPE),
                (header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL),
            ],
            text,
        )
            .into_response()),
        Err(err) => {
            tracing::warn!(kind = err.kind(), status = %err.status(), "QR request failed: {}", err);
            record_failure(err.kind());
            Err(err)
        }
    }
}
