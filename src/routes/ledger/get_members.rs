use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::store_error;
use crate::{
    domain::{LedgerAPIError, Year},
    utils::auth::get_claims,
    views::{LedgerTable, MobileFilter},
    AppState,
};

#[derive(Deserialize)]
pub struct GetMembersQueryParams {
    year: Option<i32>,
    search: Option<String>,
}

/// The table for one year, filtered by mobile number.
#[tracing::instrument(name = "Get members route handler", skip_all)]
pub async fn get_members(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<GetMembersQueryParams>,
) -> Result<(StatusCode, Json<LedgerTable>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;

    let table = load_table(&state, query_params.year, query_params.search).await?;

    Ok((StatusCode::OK, Json(table)))
}

pub(crate) async fn load_table(
    state: &AppState,
    year: Option<i32>,
    search: Option<String>,
) -> Result<LedgerTable, LedgerAPIError> {
    let current_year = Year::current();
    let year = match year {
        Some(year) => Year::parse(year)?,
        None => current_year,
    };
    let filter = MobileFilter::parse(search.as_deref().unwrap_or_default());
    tracing::debug!("year: {year}, search: {:?}", filter.as_ref());

    let ledger = state.ledger.load_all().await.map_err(store_error)?;

    Ok(LedgerTable::build(
        year,
        &ledger.available_years(current_year),
        ledger.members(year),
        &filter,
    ))
}
