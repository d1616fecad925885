use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

use crate::responses::error_to_response;
use crate::router::handle;

/// Route a request exactly the way `main` does: handler result, or the
/// error mapped to its JSON response.
pub fn dispatch(req: Request) -> Response {
    match handle(req) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

/// Build a JSON POST against the router.
pub fn post_json(path: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Drain a response body into a string.
pub fn read_text(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Drain a response body and parse it as JSON.
pub fn read_json(resp: Response) -> serde_json::Value {
    let body = read_text(resp);
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("response was not JSON: {e}\n{body}"))
}
