// src/domain/projection.rs

use std::fmt;

use serde::Serialize;

use crate::domain::tenancy::TenantOccupancy;

/// Fixed facts of the sale a candidate bid is measured against.
#[derive(Debug, Clone)]
pub struct AuctionTerms {
    /// Lowest bid the court accepts in the current round.
    pub minimum_bid_price: i64,
    /// Court-appraised value; also the ceiling a bid may take here.
    pub appraisal_price: i64,
    /// Estimated open-market resale value.
    pub market_price_estimate: i64,
    /// Acquisition tax rate applied to the bid, e.g. 0.046.
    pub tax_rate: f64,
    /// Registration, brokerage, eviction and similar one-off costs, in won.
    pub fixed_costs: i64,
}

/// Projected economics of winning at a given bid. Monetary fields are whole
/// won; only the ROI ratio is fractional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProjection {
    pub bid_price: i64,
    pub assumed_deposit_total: i64,
    pub acquisition_tax: i64,
    pub other_fixed_costs: i64,
    pub total_investment: i64,
    pub market_price_estimate: i64,
    pub projected_profit: i64,
    /// `None` when there is no investment to measure against.
    pub projected_roi_percent: Option<f64>,
}

/// Largest single monetary figure handled, in won (10^15). Small enough
/// that every in-bound figure is an exact f64 integer.
pub const MAX_AMOUNT_WON: i64 = 1_000_000_000_000_000;

/// Rejections from `project_cost`. The bid range is never clamped and
/// amounts are never wrapped; the caller hears about both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Bid outside `[minimum_bid_price, appraisal_price]`.
    OutOfRangeBid {
        minimum_bid_price: i64,
        appraisal_price: i64,
        received: i64,
    },
    /// A sum left `i64`, or the rounded tax product left the supported
    /// amount bound.
    AmountOverflow,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::OutOfRangeBid {
                minimum_bid_price,
                appraisal_price,
                received,
            } => write!(
                f,
                "bid {received} outside permitted range [{minimum_bid_price}, {appraisal_price}]"
            ),
            ProjectionError::AmountOverflow => {
                write!(f, "projected amounts exceed the supported range")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Projects what winning at `bid_price` costs and returns.
///
/// The tenants passed here are the ones already classified assumed; their
/// deposits ride on top of the bid. Tax is the single rounding point, the
/// rest is checked integer addition:
/// bid + assumed deposits + round(bid * tax rate) + fixed costs.
/// A sum that cannot be represented is an `AmountOverflow`, never a wrapped
/// figure.
pub fn project_cost(
    bid_price: i64,
    assumed_tenants: &[TenantOccupancy],
    terms: &AuctionTerms,
) -> Result<CostProjection, ProjectionError> {
    if bid_price < terms.minimum_bid_price || bid_price > terms.appraisal_price {
        return Err(ProjectionError::OutOfRangeBid {
            minimum_bid_price: terms.minimum_bid_price,
            appraisal_price: terms.appraisal_price,
            received: bid_price,
        });
    }

    let assumed_deposit_total = assumed_tenants
        .iter()
        .try_fold(0i64, |acc, t| acc.checked_add(t.deposit_amount))
        .ok_or(ProjectionError::AmountOverflow)?;

    // The rounded product must stay within the supported amount bound
    // before the cast. The NaN check keeps a pathological rate out too.
    let tax = (bid_price as f64 * terms.tax_rate).round();
    if tax.is_nan() || tax.abs() > MAX_AMOUNT_WON as f64 {
        return Err(ProjectionError::AmountOverflow);
    }
    let acquisition_tax = tax as i64;

    let total_investment = bid_price
        .checked_add(assumed_deposit_total)
        .and_then(|sum| sum.checked_add(acquisition_tax))
        .and_then(|sum| sum.checked_add(terms.fixed_costs))
        .ok_or(ProjectionError::AmountOverflow)?;

    let projected_profit = terms
        .market_price_estimate
        .checked_sub(total_investment)
        .ok_or(ProjectionError::AmountOverflow)?;
    let projected_roi_percent = if total_investment == 0 {
        None
    } else {
        Some(projected_profit as f64 / total_investment as f64 * 100.0)
    };

    Ok(CostProjection {
        bid_price,
        assumed_deposit_total,
        acquisition_tax,
        other_fixed_costs: terms.fixed_costs,
        total_investment,
        market_price_estimate: terms.market_price_estimate,
        projected_profit,
        projected_roi_percent,
    })
}
