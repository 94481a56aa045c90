use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::{member_error, MemberQueryParams};
use crate::{
    domain::{
        LedgerAPIError, MemberName, MemberUpdate, MobileNumber, ValidationError,
        Year,
    },
    utils::auth::get_claims,
    views::MemberRow,
    AppState,
};

#[tracing::instrument(name = "Update member field route handler", skip_all)]
pub async fn update_member_field(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<MemberQueryParams>,
    Json(request): Json<UpdateFieldRequest>,
) -> Result<(StatusCode, Json<MemberRow>), LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;
    let member_id = query_params.member_id();
    let year = Year::parse(request.year)?;

    let update = match request.field.as_str() {
        "mobileNumber" => MemberUpdate::MobileNumber(MobileNumber::parse(request.value)?),
        "name" => MemberUpdate::Name(MemberName::parse(request.value)?),
        field => {
            return Err(ValidationError::new(format!("Invalid field: {field}")).into())
        }
    };

    let member = state
        .ledger
        .update_field(year, &member_id, update)
        .await
        .map_err(member_error(&member_id))?;

    Ok((StatusCode::OK, Json(MemberRow::from_member(&member))))
}

#[derive(Deserialize)]
pub struct UpdateFieldRequest {
    pub year: i32,
    pub field: String,
    pub value: String,
}
