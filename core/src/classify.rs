//! Success/failure classification shared by both connectors.

use tracing::error;

use crate::error::ConnectorError;
use crate::http::HttpResponse;

/// Pass a successful response through; log and convert a failed one.
///
/// Failure covers both network errors and HTTP error statuses, as flagged by
/// the transport.
pub(crate) fn check_response(response: HttpResponse, url: &str) -> Result<HttpResponse, ConnectorError> {
    if response.ok {
        return Ok(response);
    }
    error!(status = response.status, url, "web request response: {}", response.status);
    error!(url, "web request error: {}", response.error);
    Err(ConnectorError::from_response(&response))
}

pub(crate) fn into_text(response: HttpResponse) -> String {
    match String::from_utf8(response.body) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
