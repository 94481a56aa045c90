use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::AuthAPIError, utils::auth::get_claims, views::Screen, AppState,
};

#[tracing::instrument(name = "Auth status route handler", skip_all)]
pub async fn auth_status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<AuthStatusResponse>), AuthAPIError> {
    let admin_exists = state
        .credential_store
        .exists()
        .await
        .map_err(|e| AuthAPIError::UnexpectedError(eyre!(e)))?;

    let logged_in = is_authenticated(&jar, &state).await?;

    let response = Json(AuthStatusResponse {
        admin_exists,
        logged_in,
        screen: Screen::resolve(admin_exists, logged_in),
    });

    Ok((StatusCode::OK, response))
}

/// Missing or stale sessions are simply "not logged in" here; only store
/// failures are errors.
pub(crate) async fn is_authenticated(
    jar: &CookieJar,
    state: &AppState,
) -> Result<bool, AuthAPIError> {
    match get_claims(jar, &state.credential_store).await {
        Ok(_) => Ok(true),
        Err(AuthAPIError::MissingToken | AuthAPIError::InvalidToken) => Ok(false),
        Err(e) => Err(e),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub admin_exists: bool,
    pub logged_in: bool,
    pub screen: Screen,
}
