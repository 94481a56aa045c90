use color_eyre::eyre::Report;
use thiserror::Error;

/// A synchronous-per-call string key-value store, the server-side stand-in
/// for the browser's local storage.
#[async_trait::async_trait]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set(
        &mut self,
        key: &str,
        value: String,
    ) -> Result<(), KeyValueStoreError>;
}

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("Store unavailable")]
    Unavailable(#[source] Report),
}

impl PartialEq for KeyValueStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Unavailable(_), Self::Unavailable(_))
        )
    }
}

#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Admin credential not found")]
    CredentialNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::CredentialNotFound, Self::CredentialNotFound)
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[derive(Debug, Error)]
pub enum LedgerStoreError {
    #[error("Member not found")]
    MemberNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for LedgerStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MemberNotFound, Self::MemberNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
