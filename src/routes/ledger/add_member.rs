use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::store_error;
use crate::{
    domain::{LedgerAPIError, Year},
    utils::auth::get_claims,
    views::MemberRow,
    AppState,
};

/// Appends a blank member joining today to the selected year.
#[tracing::instrument(name = "Add member route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MemberRow>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;
    let year = Year::parse(request.year)?;

    let member = state.ledger.add_member(year).await.map_err(store_error)?;
    tracing::info!("added member {} to {year}", member.id);

    Ok((StatusCode::CREATED, Json(MemberRow::from_member(&member))))
}

#[derive(Deserialize)]
pub struct AddMemberRequest {
    pub year: i32,
}
