use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

use crate::errors::ServerError;

/// Convert a ServerError into the JSON error response the API promises.
/// The out-of-range body carries exactly the fields a bid slider needs to
/// re-constrain itself; everything else is `{ error, message }`.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, body) = match &err {
        ServerError::NotFound => (
            404,
            json!({ "error": "NotFound", "message": "no such route" }),
        ),

        ServerError::BadRequest(msg) => (400, json!({ "error": "BadRequest", "message": msg })),

        ServerError::InvalidInterestSet(msg) => {
            (400, json!({ "error": "InvalidInterestSet", "message": msg }))
        }

        ServerError::OutOfRangeBid {
            minimum_bid_price,
            appraisal_price,
            received,
        } => (
            422,
            json!({
                "error": "OutOfRangeBid",
                "minimumBidPrice": minimum_bid_price,
                "appraisalPrice": appraisal_price,
                "received": received,
            }),
        ),

        ServerError::InternalError => (
            500,
            json!({ "error": "InternalError", "message": "internal server error" }),
        ),
    };

    json_error_response(status, &body)
}

/// Build a bare JSON error response
fn json_error_response(status: u16, body: &serde_json::Value) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("internal server error")))
}
