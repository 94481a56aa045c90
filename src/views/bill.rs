use askama::Template;
use thiserror::Error;

use super::ledger_table::{month_cells, MonthCell};
use crate::domain::{BillingSummary, Member, Year};

pub const LIBRARY_NAME: &str = "Purainiya Library";

#[derive(Debug, Error)]
pub enum BillError {
    #[error("Please fill member name and mobile number before printing bill!")]
    IncompleteMember,
    #[error("Failed to render bill")]
    RenderError(#[source] askama::Error),
}

/// A standalone, printable HTML invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDocument {
    pub title: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "bill.html")]
struct BillTemplate<'a> {
    library_name: &'a str,
    year: Year,
    name: &'a str,
    mobile_number: &'a str,
    date_of_joining: &'a str,
    bill_date: &'a str,
    shifts: Vec<&'static str>,
    months: Vec<MonthCell>,
    billing: &'a BillingSummary,
}

/// Renders the invoice for `member`. Refused until the member has both a
/// name and a mobile number.
#[tracing::instrument(name = "Generating bill", skip_all)]
pub fn generate_bill(
    member: &Member,
    billing: &BillingSummary,
    year: Year,
    bill_date: &str,
) -> Result<BillDocument, BillError> {
    if !member.is_billable() {
        return Err(BillError::IncompleteMember);
    }

    let template = BillTemplate {
        library_name: LIBRARY_NAME,
        year,
        name: member.name.trim(),
        mobile_number: member.mobile_number.trim(),
        date_of_joining: &member.date_of_joining,
        bill_date,
        shifts: member.selected_shifts.iter().map(|shift| shift.label()).collect(),
        months: month_cells(member),
        billing,
    };

    let html = template.render().map_err(BillError::RenderError)?;

    Ok(BillDocument {
        title: format!("Bill - {}", member.name.trim()),
        html,
    })
}
