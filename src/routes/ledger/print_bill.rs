use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use super::member_error;
use crate::{
    domain::{today_date_string, BillingSummary, LedgerAPIError, MemberId, Year},
    utils::auth::get_claims,
    views::{generate_bill, BillError},
    AppState,
};

#[derive(Deserialize)]
pub struct PrintBillQueryParams {
    #[serde(rename = "memberId")]
    member_id: uuid::Uuid,
    year: i32,
}

/// Standalone invoice page, dated today, that prints itself on load.
#[tracing::instrument(name = "Print bill route handler", skip_all)]
pub async fn print_bill(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query_params): Query<PrintBillQueryParams>,
) -> Result<Html<String>, LedgerAPIError> {
    get_claims(&jar, &state.credential_store).await?;
    let member_id = MemberId::new(query_params.member_id);
    let year = Year::parse(query_params.year)?;

    let member = state
        .ledger
        .get_member(year, &member_id)
        .await
        .map_err(member_error(&member_id))?;

    let billing = BillingSummary::for_member(&member);
    let bill = generate_bill(&member, &billing, year, &today_date_string())
        .map_err(|e| match e {
            BillError::IncompleteMember => LedgerAPIError::BillRefused(e.to_string()),
            e => LedgerAPIError::UnexpectedError(eyre!(e)),
        })?;
    tracing::info!("{}", bill.title);

    Ok(Html(bill.html))
}
