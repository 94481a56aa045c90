use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::AuthAPIError,
    utils::auth::{get_claims, removal_cookie},
    AppState,
};

/// Clears the logged-in flag, which retires every outstanding session
/// token, and drops the cookie.
#[tracing::instrument(name = "Logout route handler", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Result<impl IntoResponse, AuthAPIError>) {
    if let Err(e) = get_claims(&jar, &state.credential_store).await {
        return (jar, Err(e));
    }

    if let Err(e) = state.credential_store.set_logged_in(false).await {
        return (jar, Err(AuthAPIError::UnexpectedError(eyre!(e))));
    }

    let jar = jar.remove(removal_cookie());

    (jar, Ok(StatusCode::OK))
}
