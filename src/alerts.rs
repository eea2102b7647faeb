//! Near-term alert bucketing: subscriptions due within the look-ahead
//! window, ranked into urgency tiers.

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::models::{CommitmentTerm, DerivedFields, Status, Subscription};

/// Look-ahead window for upcoming-due alerts, in days.
pub const ALERT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTier {
    /// Informational: the subscription renews automatically under its
    /// commitment term, so urgency ranking does not apply.
    AutoRenewing,
    /// Due within 2 days.
    Urgent,
    /// Due within 5 days.
    Soon,
    /// Due in 6-7 days.
    WatchClosely,
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AutoRenewing => "Auto-renewing",
            Self::Urgent => "Urgent",
            Self::Soon => "Soon",
            Self::WatchClosely => "Watch closely",
        };
        write!(f, "{label}")
    }
}

/// One upcoming-due entry. `index` points into the slices passed to
/// [`bucket_alerts`]; the presentation layer resolves it to the record.
#[derive(Debug, Clone)]
pub struct Alert {
    pub index: usize,
    pub next_due: NaiveDate,
    pub days_remaining: i64,
    pub tier: AlertTier,
}

/// Bucket subscriptions whose next due date falls within the next
/// [`ALERT_WINDOW_DAYS`] days. Incomplete and Finished subscriptions are
/// skipped. Output order follows input order; no further guarantee.
pub fn bucket_alerts(
    subs: &[Subscription],
    derived: &[DerivedFields],
    today: NaiveDate,
) -> Vec<Alert> {
    let horizon = today + Duration::days(ALERT_WINDOW_DAYS);

    subs.iter()
        .zip(derived)
        .enumerate()
        .filter_map(|(index, (sub, fields))| {
            if matches!(fields.status, Status::Incomplete | Status::Finished) {
                return None;
            }
            let due = fields.next_due?;
            if due < today || due > horizon {
                return None;
            }
            let days_remaining = (due - today).num_days();
            let tier = if sub.commitment != CommitmentTerm::None {
                AlertTier::AutoRenewing
            } else if days_remaining <= 2 {
                AlertTier::Urgent
            } else if days_remaining <= 5 {
                AlertTier::Soon
            } else {
                AlertTier::WatchClosely
            };
            Some(Alert {
                index,
                next_due: due,
                days_remaining,
                tier,
            })
        })
        .collect()
}
