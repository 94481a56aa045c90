use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::{member_error, MemberQueryParams};
use crate::{
    domain::{LedgerAPIError, Shift, Year},
    utils::auth::get_claims,
    views::MemberRow,
    AppState,
};

#[tracing::instrument(name = "Update member shift route handler", skip_all)]
pub async fn update_member_shift(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<MemberQueryParams>,
    Json(request): Json<UpdateShiftRequest>,
) -> Result<(StatusCode, Json<MemberRow>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;
    let member_id = query_params.member_id();
    let year = Year::parse(request.year)?;
    let shift: Shift = request.shift.parse()?;

    let member = state
        .ledger
        .update_shift(year, &member_id, shift, request.selected)
        .await
        .map_err(member_error(&member_id))?;

    Ok((StatusCode::OK, Json(MemberRow::from_member(&member))))
}

#[derive(Deserialize)]
pub struct UpdateShiftRequest {
    pub year: i32,
    pub shift: String,
    pub selected: bool,
}
