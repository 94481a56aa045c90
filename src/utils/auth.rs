use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use chrono::Utc;
use color_eyre::eyre::{eyre, Context, ContextCompat, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{AuthAPIError, CredentialStoreError, Username},
    services::CredentialStore,
};

use super::constants::{JWT_SECRET, SESSION_COOKIE_NAME};

// Create cookie with a new session token for the admin
#[tracing::instrument(name = "Generating auth cookie", skip_all)]
pub fn generate_auth_cookie(username: &Username) -> Result<Cookie<'static>> {
    let token = generate_auth_token(username)?;
    Ok(create_auth_cookie(token))
}

#[tracing::instrument(name = "Creating auth cookie", skip_all)]
fn create_auth_cookie(token: Secret<String>) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.expose_secret().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Removal cookie matching the path the session cookie was set on.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME).path("/").build()
}

// A working day at the front desk
pub const TOKEN_TTL_SECONDS: i64 = 8 * 60 * 60;

#[tracing::instrument(name = "Generating auth token", skip_all)]
fn generate_auth_token(username: &Username) -> Result<Secret<String>> {
    let delta = chrono::Duration::try_seconds(TOKEN_TTL_SECONDS)
        .wrap_err("Failed to create session time delta")?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(eyre!("failed to add to current time"))?
        .timestamp();

    let exp: usize = exp.try_into().wrap_err(format!(
        "failed to cast exp time to usize. exp time: {}",
        exp
    ))?;

    let claims = Claims {
        sub: username.as_ref().to_owned(),
        exp,
    };

    create_token(&claims)
}

/// A session is live only while its token decodes, names the stored admin,
/// and the logged-in flag is still set.
#[tracing::instrument(name = "Validating auth token", skip_all)]
pub async fn validate_token(
    token: &Secret<String>,
    credential_store: &CredentialStore,
) -> Result<Claims, AuthAPIError> {
    let claims = decode::<Claims>(
        token.expose_secret(),
        &DecodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("failed to decode token: {e}");
        AuthAPIError::InvalidToken
    })?;

    let credential = match credential_store.get().await {
        Ok(credential) => credential,
        Err(CredentialStoreError::CredentialNotFound) => {
            return Err(AuthAPIError::InvalidToken)
        }
        Err(e) => return Err(AuthAPIError::UnexpectedError(eyre!(e))),
    };

    if credential.username.as_ref() != &claims.sub {
        return Err(AuthAPIError::InvalidToken);
    }

    let logged_in = credential_store
        .is_logged_in()
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;
    if !logged_in {
        return Err(AuthAPIError::InvalidToken);
    }

    Ok(claims)
}

#[tracing::instrument(name = "Creating auth token", skip_all)]
fn create_token(claims: &Claims) -> Result<Secret<String>> {
    let token_string = encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.expose_secret().as_bytes()),
    )
    .wrap_err("failed to create token")?;

    Ok(Secret::new(token_string))
}

#[tracing::instrument(name = "Getting session claims", skip_all)]
pub async fn get_claims(
    jar: &CookieJar,
    credential_store: &CredentialStore,
) -> Result<Claims, AuthAPIError> {
    let cookie = jar
        .get(SESSION_COOKIE_NAME)
        .ok_or(AuthAPIError::MissingToken)?;

    let token = Secret::new(cookie.value().to_owned());

    validate_token(&token, credential_store).await
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
