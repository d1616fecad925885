use astra::Request;

use crate::analysis::handlers;
use crate::errors::{ResultResp, ServerError};
use crate::responses::html_response;
use crate::templates;

pub fn handle(req: Request) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("GET", "/analysis/sample") => handlers::sample_analysis(),

        ("POST", "/analysis/lien-priority") => handlers::lien_priority(req),
        ("POST", "/analysis/cost-projection") => handlers::cost_projection(req),

        _ => Err(ServerError::NotFound),
    }
}
