use super::{today_date_string, MemberId, MemberName, MobileNumber, Month, Shift};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub date_of_joining: String,
    pub mobile_number: String,
    pub name: String,
    pub selected_shifts: BTreeSet<Shift>,
    /// Sparse: a missing month is unpaid.
    pub payments: BTreeMap<Month, bool>,
}

/// The editable text fields of a member. The join date is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberUpdate {
    MobileNumber(MobileNumber),
    Name(MemberName),
}

impl Member {
    /// A blank member joining today.
    pub fn new() -> Self {
        Self {
            id: MemberId::default(),
            date_of_joining: today_date_string(),
            mobile_number: String::new(),
            name: String::new(),
            selected_shifts: BTreeSet::new(),
            payments: BTreeMap::new(),
        }
    }

    pub fn apply(&mut self, update: MemberUpdate) {
        match update {
            MemberUpdate::MobileNumber(number) => {
                self.mobile_number = number.as_ref().to_owned()
            }
            MemberUpdate::Name(name) => self.name = name.as_ref().to_owned(),
        }
    }

    pub fn set_shift(&mut self, shift: Shift, selected: bool) {
        if selected {
            self.selected_shifts.insert(shift);
        } else {
            self.selected_shifts.remove(&shift);
        }
    }

    pub fn set_payment(&mut self, month: Month, paid: bool) {
        self.payments.insert(month, paid);
    }

    pub fn is_paid(&self, month: Month) -> bool {
        self.payments.get(&month).copied().unwrap_or(false)
    }

    pub fn paid_months(&self) -> impl Iterator<Item = Month> + '_ {
        Month::ALL.into_iter().filter(|month| self.is_paid(*month))
    }

    /// A bill can only be issued once the member is identifiable.
    pub fn is_billable(&self) -> bool {
        !self.name.trim().is_empty() && !self.mobile_number.trim().is_empty()
    }
}

impl Default for Member {
    fn default() -> Self {
        Self::new()
    }
}
