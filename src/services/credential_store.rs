use color_eyre::eyre::eyre;
use secrecy::Secret;

use super::storage_gateway::{
    StorageError, StorageGateway, CREDENTIALS_KEY, LOGGED_IN_KEY,
};
use crate::domain::{
    AdminCredential, AdminPasswordHash, CredentialStoreError, Password,
    StoredCredential, Username,
};

/// The single admin identity and the logged-in flag, both kept in the
/// shared key-value store.
#[derive(Clone)]
pub struct CredentialStore {
    storage: StorageGateway,
}

impl CredentialStore {
    pub fn new(storage: StorageGateway) -> Self {
        Self { storage }
    }

    pub async fn exists(&self) -> Result<bool, CredentialStoreError> {
        match self.get().await {
            Ok(_) => Ok(true),
            Err(CredentialStoreError::CredentialNotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Stores a new admin credential, replacing any existing one.
    #[tracing::instrument(name = "Creating admin credential", skip_all)]
    pub async fn create(
        &self,
        username: Username,
        password: Password,
    ) -> Result<(), CredentialStoreError> {
        let hash = AdminPasswordHash::from_password(password)
            .await
            .map_err(CredentialStoreError::UnexpectedError)?;
        self.store(&AdminCredential::new(username, hash)).await
    }

    /// A malformed stored record counts as absent, so first-run setup can
    /// replace it.
    #[tracing::instrument(name = "Retrieving admin credential", skip_all)]
    pub async fn get(&self) -> Result<AdminCredential, CredentialStoreError> {
        match self.storage.get_json::<StoredCredential>(CREDENTIALS_KEY).await {
            Ok(Some(stored)) => Ok(stored.into_credential()),
            Ok(None) => Err(CredentialStoreError::CredentialNotFound),
            Err(e @ StorageError::Malformed { .. }) => {
                tracing::warn!("ignoring malformed admin credential: {e}");
                Err(CredentialStoreError::CredentialNotFound)
            }
            Err(e) => Err(CredentialStoreError::UnexpectedError(eyre!(e))),
        }
    }

    /// Succeeds only when both username and password match the most
    /// recently created credential. A legacy base64 credential is upgraded
    /// to an argon2 hash on its first successful verification.
    #[tracing::instrument(name = "Verifying admin credential", skip_all)]
    pub async fn verify(
        &self,
        username: &Username,
        password: &Secret<String>,
    ) -> Result<(), CredentialStoreError> {
        let credential = self.get().await?;

        if credential.username != *username {
            return Err(CredentialStoreError::InvalidCredentials);
        }

        credential
            .password
            .verify(password.to_owned())
            .await
            .map_err(|_| CredentialStoreError::InvalidCredentials)?;

        if credential.password.is_legacy() {
            if let Err(e) = self.upgrade_legacy(credential, password).await {
                tracing::warn!("failed to re-hash legacy admin password: {e:?}");
            }
        }

        Ok(())
    }

    #[tracing::instrument(name = "Setting logged-in flag", skip(self))]
    pub async fn set_logged_in(
        &self,
        logged_in: bool,
    ) -> Result<(), CredentialStoreError> {
        self.storage
            .set_raw(LOGGED_IN_KEY, logged_in.to_string())
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(eyre!(e)))
    }

    pub async fn is_logged_in(&self) -> Result<bool, CredentialStoreError> {
        let flag = self
            .storage
            .get_raw(LOGGED_IN_KEY)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(eyre!(e)))?;
        Ok(flag.as_deref() == Some("true"))
    }

    async fn upgrade_legacy(
        &self,
        credential: AdminCredential,
        password: &Secret<String>,
    ) -> Result<(), CredentialStoreError> {
        let password = Password::parse(password.to_owned())
            .map_err(|e| CredentialStoreError::UnexpectedError(eyre!(e)))?;
        let hash = AdminPasswordHash::from_password(password)
            .await
            .map_err(CredentialStoreError::UnexpectedError)?;

        tracing::info!("upgrading legacy admin credential to argon2");
        self.store(&AdminCredential::new(credential.username, hash))
            .await
    }

    async fn store(
        &self,
        credential: &AdminCredential,
    ) -> Result<(), CredentialStoreError> {
        self.storage
            .set_json(CREDENTIALS_KEY, &StoredCredential::from(credential))
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(eyre!(e)))
    }
}
