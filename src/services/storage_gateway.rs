use color_eyre::eyre::Report;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{app_state::KeyValueStoreType, domain::KeyValueStoreError};

pub const CREDENTIALS_KEY: &str = "adminCredentials";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const LEDGER_KEY: &str = "libraryMembersAllYears";
/// Written by the single-list revision, before members were split by year.
pub const LEGACY_FLAT_LEDGER_KEY: &str = "libraryMembers";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable(#[from] KeyValueStoreError),
    #[error("Stored value under '{key}' is malformed")]
    Malformed {
        key: String,
        #[source]
        source: Report,
    },
}

/// JSON blobs under fixed keys, on top of a string key-value store.
#[derive(Clone)]
pub struct StorageGateway {
    store: KeyValueStoreType,
}

impl StorageGateway {
    pub fn new(store: KeyValueStoreType) -> Self {
        Self { store }
    }

    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.read().await.get(key).await?)
    }

    pub async fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        Ok(self.store.write().await.set(key, value).await?)
    }

    #[tracing::instrument(name = "Reading JSON from storage", skip(self))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get_raw(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Malformed {
                key: key.to_owned(),
                source: Report::new(e),
            })
    }

    #[tracing::instrument(name = "Writing JSON to storage", skip(self, value))]
    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| {
            StorageError::Malformed {
                key: key.to_owned(),
                source: Report::new(e),
            }
        })?;
        self.set_raw(key, raw).await
    }
}
