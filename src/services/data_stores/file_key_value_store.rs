use color_eyre::eyre::{eyre, WrapErr};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::domain::{KeyValueStore, KeyValueStoreError};

/// All entries live in one JSON object on disk. The file is read once on
/// open and rewritten in full on every `set`, via a temporary file and a
/// rename so a crash never leaves a half-written store behind.
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    #[tracing::instrument(name = "Opening file key-value store", skip_all)]
    pub async fn open(
        path: impl AsRef<Path>,
    ) -> Result<Self, KeyValueStoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .wrap_err_with(|| {
                    format!("store file {} is not a JSON object", path.display())
                })
                .map_err(KeyValueStoreError::Unavailable)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "store file {} not found, starting empty",
                    path.display()
                );
                BTreeMap::new()
            }
            Err(e) => {
                return Err(KeyValueStoreError::Unavailable(
                    eyre!(e).wrap_err("failed to read store file"),
                ))
            }
        };

        Ok(Self { path, entries })
    }

    async fn persist(&self) -> color_eyre::eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .wrap_err("failed to create store directory")?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.entries)
            .wrap_err("failed to serialise store")?;
        let tmp_path = self.path.with_extension("tmp");

        tokio::fs::write(&tmp_path, contents)
            .await
            .wrap_err("failed to write temporary store file")?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .wrap_err("failed to replace store file")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[tracing::instrument(name = "Writing file key-value store", skip(self, value))]
    async fn set(
        &mut self,
        key: &str,
        value: String,
    ) -> Result<(), KeyValueStoreError> {
        let previous = self.entries.insert(key.to_owned(), value);

        if let Err(e) = self.persist().await {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(previous) => self.entries.insert(key.to_owned(), previous),
                None => self.entries.remove(key),
            };
            return Err(KeyValueStoreError::Unavailable(e));
        }
        Ok(())
    }
}
