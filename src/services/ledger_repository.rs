use color_eyre::eyre::{eyre, Report, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr,
    sync::Arc,
};
use tokio::sync::Mutex;

use super::storage_gateway::{StorageGateway, LEDGER_KEY, LEGACY_FLAT_LEDGER_KEY};
use crate::domain::{
    Ledger, LedgerStoreError, Member, MemberId, MemberUpdate, Month, Shift,
    Year,
};

pub const LEDGER_SCHEMA_VERSION: u32 = 2;

/// Year-partitioned member records persisted as one blob.
///
/// Every mutation loads the whole ledger, changes one record and writes the
/// whole ledger back. Mutations are serialised within this process; separate
/// processes sharing one backend are last-writer-wins.
#[derive(Clone)]
pub struct LedgerRepository {
    storage: StorageGateway,
    mutation_lock: Arc<Mutex<()>>,
}

impl LedgerRepository {
    pub fn new(storage: StorageGateway) -> Self {
        Self {
            storage,
            mutation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// A malformed stored ledger is logged and read as empty; it is left in
    /// place until the next successful save replaces it. A ledger in an
    /// older schema is rewritten in the current one under the mutation lock,
    /// so concurrent readers all see the ids of the single migrated copy.
    #[tracing::instrument(name = "Loading ledger", skip_all)]
    pub async fn load_all(&self) -> Result<Ledger, LedgerStoreError> {
        match self.read_decoded().await? {
            Decoded::Migrated(_) => {
                let _guard = self.mutation_lock.lock().await;
                self.load_locked().await
            }
            Decoded::Current(ledger) => Ok(ledger),
        }
    }

    // Caller holds `mutation_lock`.
    async fn load_locked(&self) -> Result<Ledger, LedgerStoreError> {
        match self.read_decoded().await? {
            Decoded::Current(ledger) => Ok(ledger),
            Decoded::Migrated(ledger) => {
                self.write(&ledger).await?;
                tracing::info!(
                    "migrated {} members to ledger schema version {LEDGER_SCHEMA_VERSION}",
                    ledger.member_count()
                );
                Ok(ledger)
            }
        }
    }

    async fn read_decoded(&self) -> Result<Decoded, LedgerStoreError> {
        let raw = match self.read_raw(LEDGER_KEY).await? {
            Some(raw) => raw,
            None => match self.read_raw(LEGACY_FLAT_LEDGER_KEY).await? {
                Some(raw) => raw,
                None => return Ok(Decoded::Current(Ledger::default())),
            },
        };

        match decode_ledger(&raw) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                tracing::warn!("stored ledger is malformed, using an empty ledger: {e:?}");
                Ok(Decoded::Current(Ledger::default()))
            }
        }
    }

    pub async fn save_all(&self, ledger: &Ledger) -> Result<(), LedgerStoreError> {
        let _guard = self.mutation_lock.lock().await;
        self.write(ledger).await
    }

    pub async fn load_year(&self, year: Year) -> Result<Vec<Member>, LedgerStoreError> {
        Ok(self.load_all().await?.members(year).to_vec())
    }

    #[tracing::instrument(name = "Saving ledger year", skip(self, members))]
    pub async fn save_year(
        &self,
        year: Year,
        members: Vec<Member>,
    ) -> Result<(), LedgerStoreError> {
        let _guard = self.mutation_lock.lock().await;
        let mut ledger = self.load_locked().await?;
        ledger.set_members(year, members);
        self.write(&ledger).await
    }

    /// Appends a blank member joining today.
    #[tracing::instrument(name = "Adding member", skip(self))]
    pub async fn add_member(&self, year: Year) -> Result<Member, LedgerStoreError> {
        let _guard = self.mutation_lock.lock().await;
        let mut ledger = self.load_locked().await?;
        let member = Member::new();
        ledger.push(year, member.clone());
        self.write(&ledger).await?;
        Ok(member)
    }

    pub async fn get_member(
        &self,
        year: Year,
        id: &MemberId,
    ) -> Result<Member, LedgerStoreError> {
        self.load_all()
            .await?
            .member(year, id)
            .cloned()
            .ok_or(LedgerStoreError::MemberNotFound)
    }

    #[tracing::instrument(name = "Updating member field", skip(self, update))]
    pub async fn update_field(
        &self,
        year: Year,
        id: &MemberId,
        update: MemberUpdate,
    ) -> Result<Member, LedgerStoreError> {
        self.mutate_member(year, id, |member| member.apply(update))
            .await
    }

    #[tracing::instrument(name = "Updating member shift", skip(self))]
    pub async fn update_shift(
        &self,
        year: Year,
        id: &MemberId,
        shift: Shift,
        selected: bool,
    ) -> Result<Member, LedgerStoreError> {
        self.mutate_member(year, id, |member| member.set_shift(shift, selected))
            .await
    }

    #[tracing::instrument(name = "Updating member payment", skip(self))]
    pub async fn update_payment_month(
        &self,
        year: Year,
        id: &MemberId,
        month: Month,
        paid: bool,
    ) -> Result<Member, LedgerStoreError> {
        self.mutate_member(year, id, |member| member.set_payment(month, paid))
            .await
    }

    async fn mutate_member<F>(
        &self,
        year: Year,
        id: &MemberId,
        mutate: F,
    ) -> Result<Member, LedgerStoreError>
    where
        F: FnOnce(&mut Member),
    {
        let _guard = self.mutation_lock.lock().await;
        let mut ledger = self.load_locked().await?;
        let member = ledger
            .member_mut(year, id)
            .ok_or(LedgerStoreError::MemberNotFound)?;
        mutate(member);
        let member = member.clone();
        self.write(&ledger).await?;
        Ok(member)
    }

    async fn read_raw(&self, key: &str) -> Result<Option<String>, LedgerStoreError> {
        self.storage
            .get_raw(key)
            .await
            .map_err(|e| LedgerStoreError::UnexpectedError(eyre!(e)))
    }

    async fn write(&self, ledger: &Ledger) -> Result<(), LedgerStoreError> {
        self.storage
            .set_json(LEDGER_KEY, &StoredLedger::from(ledger))
            .await
            .map_err(|e| LedgerStoreError::UnexpectedError(eyre!(e)))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLedger {
    version: u32,
    years: BTreeMap<i32, Vec<Member>>,
}

impl From<&Ledger> for StoredLedger {
    fn from(ledger: &Ledger) -> Self {
        Self {
            version: LEDGER_SCHEMA_VERSION,
            years: ledger
                .partitions()
                .iter()
                .map(|(year, members)| (year.value_of(), members.clone()))
                .collect(),
        }
    }
}

/// Member record as written by earlier releases: no id, `doj`/`mobile`
/// field names, and sometimes a single `shift` instead of a list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyMember {
    #[serde(alias = "doj", default)]
    date_of_joining: Option<String>,
    #[serde(alias = "mobile", default)]
    mobile_number: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    selected_shifts: Option<Vec<String>>,
    #[serde(default)]
    shift: Option<String>,
    #[serde(default)]
    payments: Option<BTreeMap<String, Option<bool>>>,
}

impl LegacyMember {
    fn into_member(self) -> Member {
        let mut selected_shifts = BTreeSet::new();
        let labels = self
            .selected_shifts
            .unwrap_or_default()
            .into_iter()
            .chain(self.shift.filter(|label| !label.trim().is_empty()));
        for label in labels {
            match Shift::from_str(&label) {
                Ok(shift) => {
                    selected_shifts.insert(shift);
                }
                Err(_) => tracing::warn!("dropping unknown shift label {label:?}"),
            }
        }

        let mut payments = BTreeMap::new();
        for (label, paid) in self.payments.unwrap_or_default() {
            match Month::from_str(&label) {
                Ok(month) => {
                    payments.insert(month, paid.unwrap_or(false));
                }
                Err(_) => tracing::warn!("dropping unknown month label {label:?}"),
            }
        }

        Member {
            id: MemberId::default(),
            date_of_joining: self.date_of_joining.unwrap_or_default(),
            mobile_number: self.mobile_number.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            selected_shifts,
            payments,
        }
    }
}

enum Decoded {
    Current(Ledger),
    Migrated(Ledger),
}

/// Decodes any known schema revision into a ledger:
/// - version 2: `{"version": 2, "years": {"2025": [Member]}}`
/// - revision 1: `{"2025": [LegacyMember]}`
/// - flat list: `[LegacyMember]`, split by join-date year
fn decode_ledger(raw: &str) -> color_eyre::eyre::Result<Decoded> {
    let value: Value = serde_json::from_str(raw).wrap_err("ledger is not JSON")?;

    let versioned = matches!(&value, Value::Object(object) if object.contains_key("version"));

    match value {
        Value::Object(_) if versioned => {
            let stored: StoredLedger = serde_json::from_value(value)
                .wrap_err("ledger does not match the current schema")?;
            if stored.version != LEDGER_SCHEMA_VERSION {
                return Err(eyre!("unsupported ledger version {}", stored.version));
            }
            let mut years = BTreeMap::new();
            for (year, members) in stored.years {
                years.insert(Year::parse(year).map_err(Report::new)?, members);
            }
            Ok(Decoded::Current(Ledger::new(years)))
        }
        Value::Object(object) => {
            let mut ledger = Ledger::default();
            for (key, members) in object {
                let year = key
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .and_then(|year| Year::parse(year).ok());
                let Some(year) = year else {
                    tracing::warn!("dropping ledger partition with invalid year {key:?}");
                    continue;
                };
                let members: Vec<LegacyMember> = serde_json::from_value(members)
                    .wrap_err_with(|| format!("members for {key} are malformed"))?;
                let members = members.into_iter().map(LegacyMember::into_member).collect();
                ledger.set_members(year, members);
            }
            Ok(Decoded::Migrated(ledger))
        }
        Value::Array(_) => {
            let members: Vec<LegacyMember> =
                serde_json::from_value(value).wrap_err("member list is malformed")?;
            let mut ledger = Ledger::default();
            for member in members.into_iter().map(LegacyMember::into_member) {
                let year = Year::from_date_string(&member.date_of_joining)
                    .unwrap_or_else(Year::current);
                ledger.push(year, member);
            }
            Ok(Decoded::Migrated(ledger))
        }
        other => Err(eyre!("unexpected ledger shape: {other}")),
    }
}
