// src/domain/tenancy.rs

use chrono::NaiveDate;

/// A lease-holder's statutory protection facts. Kept apart from the registry
/// rows because protection hangs on possession plus public notice, not on a
/// registration date.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantOccupancy {
    pub id: String,
    /// Date the tenant took possession.
    pub move_in_date: NaiveDate,
    /// Date a confirmed (notarized) date was obtained, if any. It affects
    /// distribution order at payout, not the extinguish/assume status
    /// computed here.
    pub confirmed_date: Option<NaiveDate>,
    /// Deposit owed to the tenant, in won. Never negative.
    pub deposit_amount: i64,
}

impl TenantOccupancy {
    /// Statutory next-day rule: possession protects from the day after
    /// move-in. `None` only when move-in sits on the last representable
    /// date, which can never vest.
    pub fn protection_effective_date(&self) -> Option<NaiveDate> {
        self.move_in_date.succ_opt()
    }
}
