pub mod bill;
pub mod ledger_table;
pub mod pages;
pub mod screen;

pub use bill::{generate_bill, BillDocument, BillError};
pub use ledger_table::{LedgerTable, MemberRow, MobileFilter, TableSummary};
pub use pages::{AdminPage, LoginPage};
pub use screen::Screen;
