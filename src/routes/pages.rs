use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use super::{auth::is_authenticated, ledger::load_table};
use crate::{
    domain::LedgerAPIError,
    utils::auth::get_claims,
    views::{AdminPage, LoginPage, Screen},
    AppState,
};

pub const ACCOUNT_CREATED_NOTICE: &str = "Account created! Please login.";

#[derive(Deserialize)]
pub struct IndexQueryParams {
    year: Option<i32>,
    search: Option<String>,
    notice: Option<String>,
}

/// Renders whichever screen the current session is on.
#[tracing::instrument(name = "Index page handler", skip_all)]
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<IndexQueryParams>,
) -> Result<Html<String>, LedgerAPIError> {
    let admin_exists = state
        .credential_store
        .exists()
        .await
        .map_err(|e| LedgerAPIError::UnexpectedError(eyre!(e)))?;
    let authenticated = is_authenticated(&jar, &state).await?;

    let screen = Screen::resolve(admin_exists, authenticated);
    tracing::debug!("screen: {screen:?}");

    let html = match screen {
        Screen::FirstRunSetup | Screen::LoggedOut => {
            let notice = match query_params.notice.as_deref() {
                Some("created") => Some(ACCOUNT_CREATED_NOTICE.to_owned()),
                _ => None,
            };
            LoginPage::new(screen, notice).render()
        }
        Screen::LoggedIn => {
            let claims = get_claims(&jar, &state.credential_store).await?;
            let table =
                load_table(&state, query_params.year, query_params.search).await?;
            AdminPage::new(claims.sub, table).render()
        }
    }
    .map_err(|e| LedgerAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(html))
}
