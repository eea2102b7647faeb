//! Derivation of display fields from a raw subscription record: commitment
//! end, monthly-equivalent cost and the status classification. Everything
//! here is a pure function of the record plus a reference date.

use chrono::{Duration, NaiveDate};

use crate::models::{CommitmentTerm, DerivedFields, Frequency, Status, Subscription};
use crate::schedule;

/// Fixed end of the commitment term. Terms are contractually stated in
/// day-equivalent lengths, so this is a day count and not calendar-month
/// arithmetic.
pub fn commitment_end(start: Option<NaiveDate>, term: CommitmentTerm) -> Option<NaiveDate> {
    let days = match term {
        CommitmentTerm::None => return None,
        CommitmentTerm::TwelveMonths => 365,
        CommitmentTerm::TwentyFourMonths => 730,
    };
    start.map(|d| d + Duration::days(days))
}

/// Normalized per-month cost for comparing monthly and annual plans.
pub fn monthly_equivalent(price: f64, frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Monthly => price,
        Frequency::Annual => price / 12.0,
    }
}

/// Status decision table, evaluated top to bottom.
///
/// `next_due` is strictly future whenever the schedule engine computed it
/// against the same `today`, which makes DueToday and WatchClosely
/// unreachable on a fresh derivation. They are kept for callers that carry
/// a previously computed due date across a day boundary; do not fold them
/// into Active.
pub fn classify(
    today: NaiveDate,
    next_due: Option<NaiveDate>,
    commitment_end: Option<NaiveDate>,
    term: CommitmentTerm,
) -> Status {
    let due = match next_due {
        Some(d) => d,
        None => return Status::Incomplete,
    };

    if term != CommitmentTerm::None {
        if let Some(end) = commitment_end {
            if today > end {
                return Status::Finished;
            }
        }
        return Status::AutoRenewing;
    }

    if due > today {
        Status::Active
    } else if due == today {
        Status::DueToday
    } else {
        Status::WatchClosely
    }
}

/// Derive all display fields for one subscription against `today`.
///
/// A Finished subscription never reports a next due date: the classifier
/// result clears `next_due` and `days_remaining`.
pub fn derive_fields(sub: &Subscription, today: NaiveDate) -> DerivedFields {
    let mut next_due = schedule::next_due(sub.start_date, sub.frequency, today);
    let commitment_end = commitment_end(sub.start_date, sub.commitment);
    let status = classify(today, next_due, commitment_end, sub.commitment);

    if status == Status::Finished {
        next_due = None;
    }
    let days_remaining = next_due.map(|d| (d - today).num_days());

    DerivedFields {
        monthly_equivalent: monthly_equivalent(sub.price, sub.frequency),
        next_due,
        commitment_end,
        days_remaining,
        status,
    }
}

/// Pointwise [`derive_fields`] over a snapshot of the store.
pub fn derive_all(subs: &[Subscription], today: NaiveDate) -> Vec<DerivedFields> {
    subs.iter().map(|s| derive_fields(s, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sub(
        price: f64,
        frequency: Frequency,
        start: Option<NaiveDate>,
        commitment: CommitmentTerm,
    ) -> Subscription {
        Subscription {
            id: None,
            name: "Test".to_string(),
            price,
            frequency,
            start_date: start,
            category: "Other".to_string(),
            commitment,
        }
    }

    #[test]
    fn test_commitment_end_day_counts() {
        let start = date(2022, 1, 1);
        let twelve = commitment_end(Some(start), CommitmentTerm::TwelveMonths).unwrap();
        let twenty_four = commitment_end(Some(start), CommitmentTerm::TwentyFourMonths).unwrap();
        assert_eq!((twelve - start).num_days(), 365);
        assert_eq!(twelve, date(2023, 1, 1));
        assert_eq!((twenty_four - start).num_days(), 730);
    }

    #[test]
    fn test_commitment_end_absent_cases() {
        assert_eq!(commitment_end(Some(date(2022, 1, 1)), CommitmentTerm::None), None);
        assert_eq!(commitment_end(None, CommitmentTerm::TwelveMonths), None);
    }

    #[test]
    fn test_monthly_equivalent() {
        assert_eq!(monthly_equivalent(12.99, Frequency::Monthly), 12.99);
        assert_eq!(monthly_equivalent(120.0, Frequency::Annual), 10.0);
    }

    #[test]
    fn test_classify_incomplete_without_due_date() {
        let today = date(2024, 5, 1);
        assert_eq!(
            classify(today, None, None, CommitmentTerm::None),
            Status::Incomplete
        );
        // Even under a commitment: no due date means Incomplete.
        assert_eq!(
            classify(today, None, Some(date(2025, 1, 1)), CommitmentTerm::TwelveMonths),
            Status::Incomplete
        );
    }

    #[test]
    fn test_classify_finished_after_commitment_lapses() {
        let today = date(2023, 6, 1);
        let status = classify(
            today,
            Some(date(2023, 7, 1)),
            Some(date(2023, 1, 1)),
            CommitmentTerm::TwelveMonths,
        );
        assert_eq!(status, Status::Finished);
    }

    #[test]
    fn test_classify_auto_renewing_during_commitment() {
        let today = date(2022, 6, 1);
        let status = classify(
            today,
            Some(date(2022, 7, 1)),
            Some(date(2023, 1, 1)),
            CommitmentTerm::TwentyFourMonths,
        );
        assert_eq!(status, Status::AutoRenewing);
    }

    #[test]
    fn test_classify_commitment_end_boundary_is_not_finished() {
        // today == commitment end: the term has not lapsed yet.
        let today = date(2023, 1, 1);
        let status = classify(
            today,
            Some(date(2023, 2, 1)),
            Some(today),
            CommitmentTerm::TwelveMonths,
        );
        assert_eq!(status, Status::AutoRenewing);
    }

    #[test]
    fn test_classify_no_commitment_branches() {
        let today = date(2024, 5, 1);
        assert_eq!(
            classify(today, Some(date(2024, 5, 2)), None, CommitmentTerm::None),
            Status::Active
        );
        // Stale cached due dates from a prior day still classify.
        assert_eq!(
            classify(today, Some(today), None, CommitmentTerm::None),
            Status::DueToday
        );
        assert_eq!(
            classify(today, Some(date(2024, 4, 30)), None, CommitmentTerm::None),
            Status::WatchClosely
        );
    }

    #[test]
    fn test_derive_fields_active() {
        let today = date(2024, 5, 20);
        let s = sub(9.99, Frequency::Monthly, Some(date(2024, 1, 5)), CommitmentTerm::None);
        let d = derive_fields(&s, today);
        assert_eq!(d.status, Status::Active);
        assert_eq!(d.next_due, Some(date(2024, 6, 5)));
        assert_eq!(d.days_remaining, Some(16));
        assert_eq!(d.commitment_end, None);
        assert_eq!(d.monthly_equivalent, 9.99);
    }

    #[test]
    fn test_derive_fields_finished_clears_next_due() {
        // Started 2022-01-01 with a 12-month term, evaluated 2023-06-01: the
        // term lapsed 2023-01-01, so no due date may be reported.
        let today = date(2023, 6, 1);
        let s = sub(15.0, Frequency::Monthly, Some(date(2022, 1, 1)), CommitmentTerm::TwelveMonths);
        let d = derive_fields(&s, today);
        assert_eq!(d.status, Status::Finished);
        assert_eq!(d.commitment_end, Some(date(2023, 1, 1)));
        assert_eq!(d.next_due, None);
        assert_eq!(d.days_remaining, None);
    }

    #[test]
    fn test_derive_fields_incomplete_without_start() {
        let s = sub(5.0, Frequency::Annual, None, CommitmentTerm::None);
        let d = derive_fields(&s, date(2024, 5, 1));
        assert_eq!(d.status, Status::Incomplete);
        assert_eq!(d.next_due, None);
        assert_eq!(d.commitment_end, None);
        assert_eq!(d.days_remaining, None);
    }

    #[test]
    fn test_derive_fields_auto_renewing() {
        let today = date(2024, 5, 1);
        let s = sub(40.0, Frequency::Monthly, Some(date(2024, 2, 10)), CommitmentTerm::TwentyFourMonths);
        let d = derive_fields(&s, today);
        assert_eq!(d.status, Status::AutoRenewing);
        assert_eq!(d.next_due, Some(date(2024, 5, 10)));
        assert_eq!(d.days_remaining, Some(9));
    }

    #[test]
    fn test_derive_all_is_pointwise_and_independent() {
        let today = date(2024, 5, 1);
        let subs = vec![
            sub(10.0, Frequency::Monthly, Some(date(2024, 1, 1)), CommitmentTerm::None),
            // Missing start date does not block the batch.
            sub(99.0, Frequency::Annual, None, CommitmentTerm::TwelveMonths),
        ];
        let derived = derive_all(&subs, today);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].status, Status::Active);
        assert_eq!(derived[1].status, Status::Incomplete);
    }
}
