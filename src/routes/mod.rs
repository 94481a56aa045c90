pub mod auth;
pub mod ledger;
mod pages;

pub use pages::*;
