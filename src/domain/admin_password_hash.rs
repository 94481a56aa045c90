use super::Password;
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash,
    PasswordHasher, PasswordVerifier, Version,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use color_eyre::eyre::{eyre, Result, WrapErr};
use secrecy::{ExposeSecret, Secret};

/// The password half of a stored admin credential.
///
/// Credentials written by older releases hold the password base64-encoded
/// rather than hashed. Those still verify, and are reported as
/// [`AdminPasswordHash::is_legacy`] so the caller can re-hash them.
#[derive(Debug, Clone)]
pub enum AdminPasswordHash {
    Argon2(Secret<String>),
    Obscured(Secret<String>),
}

impl PartialEq for AdminPasswordHash {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Argon2(a), Self::Argon2(b))
            | (Self::Obscured(a), Self::Obscured(b)) => {
                a.expose_secret() == b.expose_secret()
            }
            _ => false,
        }
    }
}

impl AdminPasswordHash {
    /// Classifies a stored password value. Anything that is not a PHC
    /// string is taken to be a legacy base64 value.
    pub fn from_stored(s: Secret<String>) -> Self {
        match PasswordHash::new(s.expose_secret()) {
            Ok(_) => Self::Argon2(s),
            Err(_) => Self::Obscured(s),
        }
    }

    pub async fn from_password(password: Password) -> Result<Self> {
        let hash = compute_password_hash(password.as_ref().to_owned()).await?;
        Ok(Self::Argon2(hash))
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Obscured(_))
    }

    pub async fn verify(&self, candidate: Secret<String>) -> Result<()> {
        match self {
            Self::Argon2(expected) => {
                verify_password_hash(expected.to_owned(), candidate).await
            }
            Self::Obscured(expected) => {
                let encoded = STANDARD.encode(candidate.expose_secret());
                if encoded == *expected.expose_secret() {
                    Ok(())
                } else {
                    Err(eyre!("password does not match obscured value"))
                }
            }
        }
    }
}

impl AsRef<Secret<String>> for AdminPasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        match self {
            Self::Argon2(s) | Self::Obscured(s) => s,
        }
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<()> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| eyre!(e))?;

            Argon2::default()
                .verify_password(
                    password_candidate.expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| eyre!(e))
                .wrap_err("failed to verify password hash")
        })
    })
    .await?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(
    password: Secret<String>,
) -> Result<Secret<String>> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let salt: SaltString =
                SaltString::generate(&mut rand::thread_rng());
            let password_hash = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| eyre!(e))?,
            )
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map_err(|e| eyre!(e))?
            .to_string();

            Ok(Secret::new(password_hash))
        })
    })
    .await?
}
