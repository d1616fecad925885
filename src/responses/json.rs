use astra::{Body, ResponseBuilder};
use serde::Serialize;

use crate::errors::{ResultResp, ServerError};

/// Serialize `value` into a JSON response with the given status.
pub fn json_response(status: u16, value: &impl Serialize) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
