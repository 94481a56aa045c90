use super::{Member, MemberId, Year};
use std::collections::{BTreeMap, BTreeSet};

/// Members partitioned by year. Within a year, insertion order is display
/// order; members are addressed by id, never by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    years: BTreeMap<Year, Vec<Member>>,
}

impl Ledger {
    pub fn new(years: BTreeMap<Year, Vec<Member>>) -> Self {
        Self { years }
    }

    pub fn members(&self, year: Year) -> &[Member] {
        self.years.get(&year).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_members(&mut self, year: Year, members: Vec<Member>) {
        self.years.insert(year, members);
    }

    pub fn push(&mut self, year: Year, member: Member) {
        self.years.entry(year).or_default().push(member);
    }

    pub fn member(&self, year: Year, id: &MemberId) -> Option<&Member> {
        self.members(year).iter().find(|member| &member.id == id)
    }

    pub fn member_mut(
        &mut self,
        year: Year,
        id: &MemberId,
    ) -> Option<&mut Member> {
        self.years
            .get_mut(&year)?
            .iter_mut()
            .find(|member| &member.id == id)
    }

    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.years.keys().copied()
    }

    pub fn partitions(&self) -> &BTreeMap<Year, Vec<Member>> {
        &self.years
    }

    /// Years offered by the year selector: every stored year plus the
    /// current one, newest first.
    pub fn available_years(&self, current_year: Year) -> Vec<Year> {
        let mut years: BTreeSet<Year> = self.years().collect();
        years.insert(current_year);
        years.into_iter().rev().collect()
    }

    pub fn member_count(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }
}
