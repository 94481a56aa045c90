mod add_member;
mod get_members;
mod get_years;
mod print_bill;
mod update_member;
mod update_payment;
mod update_shift;

pub use add_member::*;
pub use get_members::*;
pub use get_years::*;
pub use print_bill::*;
pub use update_member::*;
pub use update_payment::*;
pub use update_shift::*;

use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::domain::{LedgerAPIError, LedgerStoreError, MemberId};

#[derive(Deserialize)]
pub struct MemberQueryParams {
    #[serde(rename = "memberId")]
    member_id: uuid::Uuid,
}

impl MemberQueryParams {
    fn member_id(&self) -> MemberId {
        MemberId::new(self.member_id)
    }
}

fn member_error(member_id: &MemberId) -> impl FnOnce(LedgerStoreError) -> LedgerAPIError {
    let id = *member_id.as_ref();
    move |e| match e {
        LedgerStoreError::MemberNotFound => LedgerAPIError::MemberNotFound(id),
        e => LedgerAPIError::UnexpectedError(eyre!(e)),
    }
}

fn store_error(e: LedgerStoreError) -> LedgerAPIError {
    LedgerAPIError::UnexpectedError(eyre!(e))
}
