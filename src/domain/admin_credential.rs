use super::{AdminPasswordHash, Username};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// The single admin identity. At most one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredential {
    pub username: Username,
    pub password: AdminPasswordHash,
}

impl AdminCredential {
    pub fn new(username: Username, password: AdminPasswordHash) -> Self {
        Self { username, password }
    }
}

/// Persisted shape: `{ "username": ..., "password": ... }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredCredential {
    pub username: String,
    pub password: String,
}

impl From<&AdminCredential> for StoredCredential {
    fn from(credential: &AdminCredential) -> Self {
        Self {
            username: credential.username.as_ref().to_owned(),
            password: credential.password.as_ref().expose_secret().to_owned(),
        }
    }
}

impl StoredCredential {
    /// Usernames are not re-validated: a stored credential is trusted as
    /// written, including ones created before validation existed.
    pub fn into_credential(self) -> AdminCredential {
        AdminCredential {
            username: Username::from_stored(self.username),
            password: AdminPasswordHash::from_stored(Secret::new(self.password)),
        }
    }
}
