use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use super::store_error;
use crate::{
    domain::{LedgerAPIError, Year},
    utils::auth::get_claims,
    AppState,
};

#[tracing::instrument(name = "Get ledger years route handler", skip_all)]
pub async fn get_years(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<YearsResponse>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;

    let current_year = Year::current();
    let ledger = state.ledger.load_all().await.map_err(store_error)?;

    let response = Json(YearsResponse {
        current_year,
        years: ledger.available_years(current_year),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearsResponse {
    pub current_year: Year,
    pub years: Vec<Year>,
}
