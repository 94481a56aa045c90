use crate::domain::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapKeyValueStore {
    entries: HashMap<String, String>,
}

#[async_trait::async_trait]
impl KeyValueStore for HashmapKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    async fn set(
        &mut self,
        key: &str,
        value: String,
    ) -> Result<(), KeyValueStoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}
