use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, CredentialStoreError, Username},
    utils::auth::generate_auth_cookie,
};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> (
    CookieJar,
    Result<(StatusCode, Json<LoginResponse>), AuthAPIError>,
) {
    let username = match Username::parse(request.username) {
        Ok(username) => username,
        Err(_) => return (jar, Err(AuthAPIError::IncorrectCredentials)),
    };

    match state
        .credential_store
        .verify(&username, &request.password)
        .await
    {
        Ok(()) => (),
        Err(
            CredentialStoreError::InvalidCredentials
            | CredentialStoreError::CredentialNotFound,
        ) => return (jar, Err(AuthAPIError::IncorrectCredentials)),
        Err(e) => return (jar, Err(AuthAPIError::UnexpectedError(eyre!(e)))),
    }

    let auth_cookie = match generate_auth_cookie(&username) {
        Ok(cookie) => cookie,
        Err(e) => return (jar, Err(AuthAPIError::UnexpectedError(e))),
    };

    if let Err(e) = state.credential_store.set_logged_in(true).await {
        return (jar, Err(AuthAPIError::UnexpectedError(eyre!(e))));
    }

    let updated_jar = jar.add(auth_cookie);
    let response = Json(LoginResponse {
        username: username.as_ref().to_owned(),
    });

    (updated_jar, Ok((StatusCode::OK, response)))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct LoginResponse {
    pub username: String,
}
