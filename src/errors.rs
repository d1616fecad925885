use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic (routing, malformed
/// requests) or the analysis boundary. `OutOfRangeBid` and
/// `InvalidInterestSet` carry enough detail for the caller to see the
/// offending value; nothing is silently corrected.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InvalidInterestSet(String),
    OutOfRangeBid {
        minimum_bid_price: i64,
        appraisal_price: i64,
        received: i64,
    },
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InvalidInterestSet(msg) => write!(f, "Invalid interest set: {msg}"),
            ServerError::OutOfRangeBid {
                minimum_bid_price,
                appraisal_price,
                received,
            } => write!(
                f,
                "Bid {received} outside permitted range [{minimum_bid_price}, {appraisal_price}]"
            ),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
