// src/domain/priority.rs

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::registry::RegisteredInterest;
use crate::domain::tenancy::TenantOccupancy;

/// What the winning bidder inherits for a given right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disposition {
    /// Wiped from the title at sale; satisfied, if at all, from proceeds.
    Extinguished,
    /// Survives the sale; the bidder takes the property subject to it.
    Assumed,
    /// Procedural entry, outside the extinguish/assume question.
    NotApplicable,
}

/// Outcome for a single right or tenancy.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub subject_id: String,
    pub disposition: Disposition,
    pub reason: &'static str,
}

pub const REASON_BASELINE: &str = "baseline right; satisfied from auction proceeds";
pub const REASON_SENIOR: &str = "recorded before baseline right; bidder must honor";
pub const REASON_JUNIOR: &str = "recorded after baseline right";
pub const REASON_NO_BASELINE: &str = "no baseline right found";
pub const REASON_PROCEDURAL: &str = "procedural entry; not an encumbrance";
pub const REASON_TENANT_SENIOR: &str =
    "tenant protection predates baseline right (senior, undefeated)";
pub const REASON_TENANT_JUNIOR: &str =
    "tenant protection postdates baseline right (junior); deposit recovered only from auction proceeds, not from the bidder";

/// Picks the baseline extinguishing right: the earliest-recorded entry whose
/// kind can anchor the boundary. Rows may arrive in any order. Equal dates
/// keep registry order (`min_by_key` returns the first of equal keys).
/// `None` when no candidate kind is present at all.
pub fn find_baseline_right(interests: &[RegisteredInterest]) -> Option<&RegisteredInterest> {
    interests
        .iter()
        .filter(|entry| entry.kind.is_baseline_candidate())
        .min_by_key(|entry| entry.recorded_date)
}

/// Classifies every registry entry against the baseline right.
///
/// Seniority is decided by recording date, with equal dates falling back to
/// registry order. That makes the relation a strict total order consistent
/// with `find_baseline_right`, so the baseline cleanly splits the remaining
/// entries into senior (assumed) and junior (extinguished). The baseline
/// itself is always extinguished: by statute it is satisfied out of the
/// auction proceeds and removed. Procedural entries sit outside the split.
///
/// `baseline` is expected to be one of `interests`, as returned by
/// `find_baseline_right` over the same slice. With no baseline, everything
/// classifiable is reported assumed so the case surfaces for manual review
/// instead of guessing.
pub fn classify_interests(
    interests: &[RegisteredInterest],
    baseline: Option<&RegisteredInterest>,
) -> Vec<Classification> {
    let baseline_pos = baseline.and_then(|b| interests.iter().position(|e| e.id == b.id));

    interests
        .iter()
        .enumerate()
        .map(|(pos, entry)| {
            if entry.kind.is_procedural() {
                return Classification {
                    subject_id: entry.id.clone(),
                    disposition: Disposition::NotApplicable,
                    reason: REASON_PROCEDURAL,
                };
            }

            let Some(base) = baseline else {
                return Classification {
                    subject_id: entry.id.clone(),
                    disposition: Disposition::Assumed,
                    reason: REASON_NO_BASELINE,
                };
            };

            if entry.id == base.id {
                return Classification {
                    subject_id: entry.id.clone(),
                    disposition: Disposition::Extinguished,
                    reason: REASON_BASELINE,
                };
            }

            let senior = match entry.recorded_date.cmp(&base.recorded_date) {
                Ordering::Less => true,
                Ordering::Greater => false,
                // Same date: registry order decides, as in baseline selection.
                Ordering::Equal => baseline_pos.map_or(false, |base_pos| pos < base_pos),
            };

            if senior {
                Classification {
                    subject_id: entry.id.clone(),
                    disposition: Disposition::Assumed,
                    reason: REASON_SENIOR,
                }
            } else {
                Classification {
                    subject_id: entry.id.clone(),
                    disposition: Disposition::Extinguished,
                    reason: REASON_JUNIOR,
                }
            }
        })
        .collect()
}

/// Classifies a tenancy against the baseline right.
///
/// Protection becomes effective the day after move-in. A tenant whose
/// effective date lands on or before the baseline's recording date is senior:
/// the deposit travels to the bidder with the property. A day later and the
/// tenant is junior, recovering the deposit only from auction proceeds. The
/// consequence of the next-day rule is that a tenant moving in on the
/// baseline's own recording date loses, while an effective date exactly on
/// the baseline date wins. No baseline means the conservative default:
/// assumed.
pub fn classify_tenant(
    tenant: &TenantOccupancy,
    baseline: Option<&RegisteredInterest>,
) -> Classification {
    let Some(base) = baseline else {
        return Classification {
            subject_id: tenant.id.clone(),
            disposition: Disposition::Assumed,
            reason: REASON_NO_BASELINE,
        };
    };

    let senior = tenant
        .protection_effective_date()
        .map_or(false, |effective| effective <= base.recorded_date);

    if senior {
        Classification {
            subject_id: tenant.id.clone(),
            disposition: Disposition::Assumed,
            reason: REASON_TENANT_SENIOR,
        }
    } else {
        Classification {
            subject_id: tenant.id.clone(),
            disposition: Disposition::Extinguished,
            reason: REASON_TENANT_JUNIOR,
        }
    }
}
