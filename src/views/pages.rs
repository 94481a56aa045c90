use askama::Template;

use super::{bill::LIBRARY_NAME, ledger_table::LedgerTable, screen::Screen};
use crate::domain::RATE_PER_SHIFT_PER_MONTH;

/// Login form, or the first-run setup form when no admin exists yet.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub library_name: &'static str,
    pub first_run: bool,
    pub notice: Option<String>,
}

impl LoginPage {
    pub fn new(screen: Screen, notice: Option<String>) -> Self {
        Self {
            library_name: LIBRARY_NAME,
            first_run: screen == Screen::FirstRunSetup,
            notice,
        }
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPage {
    pub library_name: &'static str,
    pub username: String,
    pub rate: u64,
    pub table: LedgerTable,
}

impl AdminPage {
    pub fn new(username: String, table: LedgerTable) -> Self {
        Self {
            library_name: LIBRARY_NAME,
            username,
            rate: RATE_PER_SHIFT_PER_MONTH,
            table,
        }
    }
}
