//! Spending summaries computed over a snapshot of subscriptions plus their
//! derived fields.

use crate::models::{DerivedFields, Frequency, Subscription};

pub struct Summary {
    pub count: usize,
    pub monthly_count: usize,
    pub annual_count: usize,
    pub monthly_total: f64,
    pub annual_total: f64,
}

pub fn get_summary(subs: &[Subscription], derived: &[DerivedFields]) -> Summary {
    let monthly_total: f64 = derived.iter().map(|d| d.monthly_equivalent).sum();
    Summary {
        count: subs.len(),
        monthly_count: subs.iter().filter(|s| s.frequency == Frequency::Monthly).count(),
        annual_count: subs.iter().filter(|s| s.frequency == Frequency::Annual).count(),
        monthly_total,
        annual_total: monthly_total * 12.0,
    }
}

pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub monthly_total: f64,
    pub pct: f64,
}

/// Per-category monthly-equivalent totals, largest first.
pub fn get_category_breakdown(subs: &[Subscription], derived: &[DerivedFields]) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    for (sub, fields) in subs.iter().zip(derived) {
        match shares.iter_mut().find(|s| s.category == sub.category) {
            Some(share) => {
                share.count += 1;
                share.monthly_total += fields.monthly_equivalent;
            }
            None => shares.push(CategoryShare {
                category: sub.category.clone(),
                count: 1,
                monthly_total: fields.monthly_equivalent,
                pct: 0.0,
            }),
        }
    }

    let total: f64 = shares.iter().map(|s| s.monthly_total).sum();
    for share in &mut shares {
        share.pct = if total != 0.0 {
            share.monthly_total / total * 100.0
        } else {
            0.0
        };
    }
    shares.sort_by(|a, b| b.monthly_total.total_cmp(&a.monthly_total));
    shares
}
