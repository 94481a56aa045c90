use serde::{Deserialize, Serialize};

/// Which page the operator sees.
///
/// `FirstRunSetup -> LoggedOut` once a credential is created,
/// `LoggedOut -> LoggedIn` on verified credentials, and
/// `LoggedIn -> LoggedOut` on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    FirstRunSetup,
    LoggedOut,
    LoggedIn,
}

impl Screen {
    pub fn resolve(admin_exists: bool, authenticated: bool) -> Self {
        match (admin_exists, authenticated) {
            (false, _) => Screen::FirstRunSetup,
            (true, false) => Screen::LoggedOut,
            (true, true) => Screen::LoggedIn,
        }
    }
}
