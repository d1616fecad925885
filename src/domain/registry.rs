// src/domain/registry.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kinds of entries recorded against a property's title. The serde names are
/// the wire vocabulary the analysis endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterestKind {
    OwnershipTransfer,
    Mortgage,
    LeaseRegistration,
    Seizure,
    ProvisionalSeizure,
    AuctionCommencement,
}

impl InterestKind {
    /// Kinds that can anchor the extinguish/assume boundary. Ownership
    /// transfers and lease registrations never qualify.
    pub fn is_baseline_candidate(self) -> bool {
        matches!(
            self,
            InterestKind::Mortgage | InterestKind::Seizure | InterestKind::ProvisionalSeizure
        )
    }

    /// Procedural entries: the title transfer chain and the commencement
    /// entry itself. They are neither extinguished nor assumed.
    pub fn is_procedural(self) -> bool {
        matches!(
            self,
            InterestKind::OwnershipTransfer | InterestKind::AuctionCommencement
        )
    }
}

/// One row recorded against a property's title, validated and ready for
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredInterest {
    pub id: String,
    /// Calendar date the entry was registered; the sole ordering key.
    /// Equal dates fall back to the order the rows arrived in.
    pub recorded_date: NaiveDate,
    pub kind: InterestKind,
    /// Rights-holder name. Display only, never consulted by classification.
    pub holder: String,
    /// Face value of the claim, in won. Absent on procedural entries.
    pub amount: Option<i64>,
}
