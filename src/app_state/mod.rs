use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::KeyValueStore,
    services::{CredentialStore, LedgerRepository, StorageGateway},
};

pub type KeyValueStoreType = Arc<RwLock<dyn KeyValueStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub credential_store: CredentialStore,
    pub ledger: LedgerRepository,
}

impl AppState {
    pub fn new(key_value_store: KeyValueStoreType) -> Self {
        let storage = StorageGateway::new(key_value_store);
        Self {
            credential_store: CredentialStore::new(storage.clone()),
            ledger: LedgerRepository::new(storage),
        }
    }
}
