// src/analysis/handlers.rs

use std::io::Read;

use astra::Request;
use serde::de::DeserializeOwned;

use crate::analysis::models::{
    validate_interests, validate_tenants, AnalysisWarning, CostProjectionRequest,
    InterestClassification, LienPriorityRequest, LienPriorityResponse, TenantClassification,
};
use crate::domain::priority::{classify_interests, classify_tenant, find_baseline_right};
use crate::domain::projection::{project_cost, AuctionTerms, ProjectionError, MAX_AMOUNT_WON};
use crate::errors::{ResultResp, ServerError};
use crate::responses::json_response;

/// Worked example payload, also served by `GET /analysis/sample`.
const SAMPLE_REQUEST: &str = include_str!("../../demos/lien_priority_request.json");

pub fn lien_priority(req: Request) -> ResultResp {
    let body = read_body(req)?;
    let parsed: LienPriorityRequest = parse_json(&body)?;
    run_lien_priority(parsed)
}

/// The checked-in demo payload pushed through the exact same pipeline as the
/// POST endpoint. Handy as a live smoke test and as wire-format
/// documentation.
pub fn sample_analysis() -> ResultResp {
    let parsed: LienPriorityRequest =
        serde_json::from_str(SAMPLE_REQUEST).map_err(|_| ServerError::InternalError)?;
    run_lien_priority(parsed)
}

fn run_lien_priority(parsed: LienPriorityRequest) -> ResultResp {
    let interests =
        validate_interests(parsed.interests).map_err(ServerError::InvalidInterestSet)?;
    let tenants = validate_tenants(parsed.tenants).map_err(ServerError::InvalidInterestSet)?;

    let baseline = find_baseline_right(&interests);
    let baseline_right_id = baseline.map(|b| b.id.clone());

    let interest_classifications = classify_interests(&interests, baseline)
        .into_iter()
        .map(InterestClassification::from_domain)
        .collect();

    let tenant_classifications = tenants
        .iter()
        .map(|tenant| TenantClassification::from_domain(classify_tenant(tenant, baseline)))
        .collect();

    let warnings = if baseline.is_none() {
        vec![AnalysisWarning::ambiguous_baseline()]
    } else {
        Vec::new()
    };

    json_response(
        200,
        &LienPriorityResponse {
            baseline_right_id,
            interest_classifications,
            tenant_classifications,
            warnings,
        },
    )
}

pub fn cost_projection(req: Request) -> ResultResp {
    let body = read_body(req)?;
    let parsed: CostProjectionRequest = parse_json(&body)?;

    let bid_price = monetary(parsed.bid_price, "bidPrice")?;
    let tax_rate = require(parsed.tax_rate, "taxRate")?;
    if !(0.0..=1.0).contains(&tax_rate) {
        return Err(ServerError::BadRequest(format!(
            "taxRate must be a fraction between 0 and 1 (got {tax_rate})"
        )));
    }

    let terms = AuctionTerms {
        minimum_bid_price: monetary(parsed.minimum_bid_price, "minimumBidPrice")?,
        appraisal_price: monetary(parsed.appraisal_price, "appraisalPrice")?,
        market_price_estimate: monetary(parsed.market_price_estimate, "marketPriceEstimate")?,
        tax_rate,
        fixed_costs: monetary(parsed.fixed_costs, "fixedCosts")?,
    };
    let assumed_tenants =
        validate_tenants(parsed.assumed_tenants).map_err(ServerError::InvalidInterestSet)?;

    let projection = project_cost(bid_price, &assumed_tenants, &terms).map_err(|err| match err {
        ProjectionError::OutOfRangeBid {
            minimum_bid_price,
            appraisal_price,
            received,
        } => ServerError::OutOfRangeBid {
            minimum_bid_price,
            appraisal_price,
            received,
        },
        ProjectionError::AmountOverflow => {
            ServerError::BadRequest("projected amounts exceed the supported range".to_string())
        }
    })?;

    json_response(200, &projection)
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ServerError> {
    value.ok_or_else(|| ServerError::BadRequest(format!("missing required field: {field}")))
}

/// Required monetary field: present, non-negative and within the supported
/// amount bound.
fn monetary(value: Option<i64>, field: &str) -> Result<i64, ServerError> {
    let value = require(value, field)?;
    if value < 0 {
        return Err(ServerError::BadRequest(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    if value > MAX_AMOUNT_WON {
        return Err(ServerError::BadRequest(format!(
            "{field} exceeds the supported maximum of {MAX_AMOUNT_WON} won (got {value})"
        )));
    }
    Ok(value)
}

/// Largest accepted request body. Analysis payloads run a few KiB; anything
/// bigger is a client mistake.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest(format!(
            "request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }
    Ok(buf)
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServerError> {
    serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))
}
