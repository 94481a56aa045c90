use color_eyre::eyre::{eyre, WrapErr};
use redis::{Commands, Connection};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{KeyValueStore, KeyValueStoreError};

pub struct RedisKeyValueStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisKeyValueStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisKeyValueStore {
    #[tracing::instrument(name = "Reading from Redis key-value store", skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let key = get_key(key);

        self.conn
            .write()
            .await
            .get::<_, Option<String>>(&key)
            .map_err(|e| {
                KeyValueStoreError::Unavailable(
                    eyre!(e).wrap_err("failed to get value from Redis"),
                )
            })
    }

    #[tracing::instrument(
        name = "Writing to Redis key-value store",
        skip(self, value)
    )]
    async fn set(
        &mut self,
        key: &str,
        value: String,
    ) -> Result<(), KeyValueStoreError> {
        let key = get_key(key);

        self.conn
            .write()
            .await
            .set::<_, _, ()>(key, value)
            .wrap_err("failed to set value in Redis")
            .map_err(KeyValueStoreError::Unavailable)?;
        Ok(())
    }
}

const KEY_PREFIX: &str = "purainiya:";

fn get_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}
