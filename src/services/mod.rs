pub mod credential_store;
pub mod data_stores;
pub mod ledger_repository;
pub mod storage_gateway;

pub use credential_store::CredentialStore;
pub use ledger_repository::LedgerRepository;
pub use storage_gateway::{StorageError, StorageGateway};
