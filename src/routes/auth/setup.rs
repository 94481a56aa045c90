use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Password, Username},
    routes::ACCOUNT_CREATED_NOTICE,
};

/// First-run creation of the single admin account.
#[tracing::instrument(name = "Admin setup", skip_all)]
pub async fn setup(
    State(state): State<AppState>,
    Json(request): Json<SetupRequest>,
) -> Result<impl IntoResponse, AuthAPIError> {
    let admin_exists = state
        .credential_store
        .exists()
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;
    if admin_exists {
        return Err(AuthAPIError::AdminAlreadyExists);
    }

    let username = Username::parse(request.username)?;
    let password =
        Password::parse_confirmed(request.password, &request.confirm_password)?;

    state
        .credential_store
        .create(username, password)
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    let response = Json(SetupResponse {
        message: ACCOUNT_CREATED_NOTICE.to_string(),
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    pub username: String,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SetupResponse {
    pub message: String,
}
