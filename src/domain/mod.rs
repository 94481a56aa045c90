mod admin_credential;
mod admin_password_hash;
mod billing;
mod data_stores;
mod error;
mod ledger;
mod member;
mod member_id;
mod member_name;
mod mobile_number;
mod month;
mod password;
mod shift;
mod username;
mod year;

pub use admin_credential::*;
pub use admin_password_hash::*;
pub use billing::*;
pub use data_stores::*;
pub use error::*;
pub use ledger::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use mobile_number::*;
pub use month::*;
pub use password::*;
pub use shift::*;
pub use username::*;
pub use year::*;
