use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::{member_error, MemberQueryParams};
use crate::{
    domain::{LedgerAPIError, Month, Year},
    utils::auth::get_claims,
    views::MemberRow,
    AppState,
};

#[tracing::instrument(name = "Update member payment route handler", skip_all)]
pub async fn update_member_payment(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<MemberQueryParams>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<(StatusCode, Json<MemberRow>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;
    let member_id = query_params.member_id();
    let year = Year::parse(request.year)?;
    let month: Month = request.month.parse()?;

    let member = state
        .ledger
        .update_payment_month(year, &member_id, month, request.paid)
        .await
        .map_err(member_error(&member_id))?;

    Ok((StatusCode::OK, Json(MemberRow::from_member(&member))))
}

#[derive(Deserialize)]
pub struct UpdatePaymentRequest {
    pub year: i32,
    pub month: String,
    pub paid: bool,
}
