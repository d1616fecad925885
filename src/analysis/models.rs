use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::priority::{Classification, Disposition};
use crate::domain::projection::MAX_AMOUNT_WON;
use crate::domain::registry::{InterestKind, RegisteredInterest};
use crate::domain::tenancy::TenantOccupancy;

// lien-priority request
//  ├── interests[]
//  │    ├── id
//  │    ├── recordedDate    "YYYY-MM-DD"
//  │    ├── kind            ownership-transfer | mortgage | lease-registration
//  │    │                   | seizure | provisional-seizure | auction-commencement
//  │    ├── holder
//  │    └── amount          optional, won
//  └── tenants[]
//       ├── id
//       ├── moveInDate      "YYYY-MM-DD"
//       ├── confirmedDate   optional
//       └── depositAmount   won

/// Raw registry row as posted. Everything is optional here; `into_domain`
/// decides what is actually required. This keeps type-level errors
/// (bad JSON) apart from semantic ones (a row missing its date).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRow {
    pub id: Option<String>,
    pub recorded_date: Option<NaiveDate>,
    pub kind: Option<InterestKind>,
    pub holder: Option<String>,
    pub amount: Option<i64>,
}

/// Raw tenancy row as posted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRow {
    pub id: Option<String>,
    pub move_in_date: Option<NaiveDate>,
    pub confirmed_date: Option<NaiveDate>,
    pub deposit_amount: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LienPriorityRequest {
    #[serde(default)]
    pub interests: Vec<InterestRow>,
    #[serde(default)]
    pub tenants: Vec<TenantRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProjectionRequest {
    pub bid_price: Option<i64>,
    #[serde(default)]
    pub assumed_tenants: Vec<TenantRow>,
    pub minimum_bid_price: Option<i64>,
    pub appraisal_price: Option<i64>,
    pub market_price_estimate: Option<i64>,
    pub tax_rate: Option<f64>,
    pub fixed_costs: Option<i64>,
}

impl InterestRow {
    /// Validates one posted row into a domain entry. Error messages name the
    /// row by its posted id when it has one, by position otherwise.
    pub fn into_domain(self, position: usize) -> Result<RegisteredInterest, String> {
        let label = match self.id.as_deref() {
            Some(id) if !id.is_empty() => format!("interest \"{id}\""),
            _ => format!("interest[{position}]"),
        };

        let id = self
            .id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("{label}: missing id"))?;

        let recorded_date = self
            .recorded_date
            .ok_or_else(|| format!("{label}: missing recordedDate"))?;

        let kind = self.kind.ok_or_else(|| format!("{label}: missing kind"))?;

        let holder = self
            .holder
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("{label}: missing holder"))?;

        if let Some(amount) = self.amount {
            if amount < 0 {
                return Err(format!(
                    "{label}: amount must not be negative (got {amount})"
                ));
            }
            if amount > MAX_AMOUNT_WON {
                return Err(format!(
                    "{label}: amount exceeds the supported maximum of {MAX_AMOUNT_WON} won (got {amount})"
                ));
            }
        }

        Ok(RegisteredInterest {
            id,
            recorded_date,
            kind,
            holder,
            amount: self.amount,
        })
    }
}

impl TenantRow {
    pub fn into_domain(self, position: usize) -> Result<TenantOccupancy, String> {
        let label = match self.id.as_deref() {
            Some(id) if !id.is_empty() => format!("tenant \"{id}\""),
            _ => format!("tenant[{position}]"),
        };

        let id = self
            .id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("{label}: missing id"))?;

        let move_in_date = self
            .move_in_date
            .ok_or_else(|| format!("{label}: missing moveInDate"))?;

        let deposit_amount = self
            .deposit_amount
            .ok_or_else(|| format!("{label}: missing depositAmount"))?;
        if deposit_amount < 0 {
            return Err(format!(
                "{label}: depositAmount must not be negative (got {deposit_amount})"
            ));
        }
        if deposit_amount > MAX_AMOUNT_WON {
            return Err(format!(
                "{label}: depositAmount exceeds the supported maximum of {MAX_AMOUNT_WON} won (got {deposit_amount})"
            ));
        }

        Ok(TenantOccupancy {
            id,
            move_in_date,
            confirmed_date: self.confirmed_date,
            deposit_amount,
        })
    }
}

/// Validates the whole posted registry, enforcing unique ids across the set.
/// Fails on the first bad row so the caller sees one precise message.
pub fn validate_interests(rows: Vec<InterestRow>) -> Result<Vec<RegisteredInterest>, String> {
    let mut out: Vec<RegisteredInterest> = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        let entry = row.into_domain(position)?;
        if out.iter().any(|seen| seen.id == entry.id) {
            return Err(format!("duplicate interest id \"{}\"", entry.id));
        }
        out.push(entry);
    }
    Ok(out)
}

pub fn validate_tenants(rows: Vec<TenantRow>) -> Result<Vec<TenantOccupancy>, String> {
    let mut out: Vec<TenantOccupancy> = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        let tenant = row.into_domain(position)?;
        if out.iter().any(|seen| seen.id == tenant.id) {
            return Err(format!("duplicate tenant id \"{}\"", tenant.id));
        }
        out.push(tenant);
    }
    Ok(out)
}

/// Warning attached to an analysis response. Warnings never fail the
/// request; they flag results that need a human eye.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWarning {
    pub code: &'static str,
    pub message: &'static str,
}

impl AnalysisWarning {
    /// Emitted when no baseline candidate exists. Consumers should present
    /// "manual review required" instead of a confident answer.
    pub fn ambiguous_baseline() -> Self {
        AnalysisWarning {
            code: "AmbiguousBaseline",
            message: "no baseline right found among mortgage, seizure and \
                      provisional-seizure entries; every right is reported as \
                      assumed pending manual review",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestClassification {
    pub interest_id: String,
    pub disposition: Disposition,
    pub reason: &'static str,
}

impl InterestClassification {
    pub fn from_domain(c: Classification) -> Self {
        InterestClassification {
            interest_id: c.subject_id,
            disposition: c.disposition,
            reason: c.reason,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantClassification {
    pub tenant_id: String,
    pub disposition: Disposition,
    pub reason: &'static str,
}

impl TenantClassification {
    pub fn from_domain(c: Classification) -> Self {
        TenantClassification {
            tenant_id: c.subject_id,
            disposition: c.disposition,
            reason: c.reason,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LienPriorityResponse {
    pub baseline_right_id: Option<String>,
    pub interest_classifications: Vec<InterestClassification>,
    pub tenant_classifications: Vec<TenantClassification>,
    pub warnings: Vec<AnalysisWarning>,
}
