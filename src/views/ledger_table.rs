use serde::Serialize;

use crate::domain::{BillingSummary, Member, Month, Shift, Year};

/// Case-insensitive substring match on the mobile number. An empty filter
/// matches every member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileFilter(String);

impl MobileFilter {
    pub fn parse(search: &str) -> Self {
        Self(search.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, member: &Member) -> bool {
        self.is_empty() || member.mobile_number.to_lowercase().contains(&self.0)
    }
}

impl AsRef<str> for MobileFilter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the admin table shows for one year, derived from the stored
/// members without touching storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTable {
    pub year: Year,
    pub years: Vec<YearOption>,
    pub search: String,
    pub rows: Vec<MemberRow>,
    pub summary: TableSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearOption {
    pub value: Year,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub visible_count: usize,
    pub visible_total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub id: String,
    pub date_of_joining: String,
    pub mobile_number: String,
    pub name: String,
    pub shifts: Vec<ShiftCell>,
    pub months: Vec<MonthCell>,
    pub billing: BillingSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftCell {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell {
    pub label: &'static str,
    pub paid: bool,
}

impl LedgerTable {
    pub fn build(
        year: Year,
        available_years: &[Year],
        members: &[Member],
        filter: &MobileFilter,
    ) -> Self {
        let rows: Vec<MemberRow> = members
            .iter()
            .filter(|member| filter.matches(member))
            .map(MemberRow::from_member)
            .collect();

        let summary = TableSummary {
            visible_count: rows.len(),
            visible_total: rows.iter().map(|row| row.billing.total).sum(),
        };

        Self {
            year,
            years: available_years
                .iter()
                .map(|value| YearOption {
                    value: *value,
                    selected: *value == year,
                })
                .collect(),
            search: filter.as_ref().to_owned(),
            rows,
            summary,
        }
    }
}

impl MemberRow {
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            date_of_joining: member.date_of_joining.clone(),
            mobile_number: member.mobile_number.clone(),
            name: member.name.clone(),
            shifts: Shift::ALL
                .iter()
                .map(|shift| ShiftCell {
                    label: shift.label(),
                    selected: member.selected_shifts.contains(shift),
                })
                .collect(),
            months: month_cells(member),
            billing: BillingSummary::for_member(member),
        }
    }

    pub fn rate_line(&self) -> String {
        format!(
            "Shifts: {} × ₹{} = ₹{}/month",
            self.billing.shift_count, self.billing.rate, self.billing.monthly_charge
        )
    }

    pub fn months_line(&self) -> String {
        format!("Paid Months: {}", self.billing.months_paid)
    }

    pub fn total_line(&self) -> String {
        format!("Total Paid: ₹{}", self.billing.total)
    }
}

pub(crate) fn month_cells(member: &Member) -> Vec<MonthCell> {
    Month::ALL
        .iter()
        .map(|month| MonthCell {
            label: month.label(),
            paid: member.is_paid(*month),
        })
        .collect()
}
