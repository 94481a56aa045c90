use super::Member;
use serde::Serialize;

/// Rupees charged per selected shift for each paid month.
pub const RATE_PER_SHIFT_PER_MONTH: u64 = 500;

/// Total collected from a member: shifts x paid months x rate.
/// No proration or partial months.
pub fn compute_total(member: &Member) -> u64 {
    if member.selected_shifts.is_empty() || member.payments.is_empty() {
        return 0;
    }
    let paid_months = member.payments.values().filter(|paid| **paid).count();
    paid_months as u64
        * member.selected_shifts.len() as u64
        * RATE_PER_SHIFT_PER_MONTH
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub shift_count: u64,
    pub months_paid: u64,
    pub rate: u64,
    pub monthly_charge: u64,
    pub total: u64,
}

impl BillingSummary {
    pub fn for_member(member: &Member) -> Self {
        let shift_count = member.selected_shifts.len() as u64;
        let months_paid = member.paid_months().count() as u64;
        Self {
            shift_count,
            months_paid,
            rate: RATE_PER_SHIFT_PER_MONTH,
            monthly_charge: shift_count * RATE_PER_SHIFT_PER_MONTH,
            total: compute_total(member),
        }
    }
}
