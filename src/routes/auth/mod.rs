mod login;
mod logout;
mod setup;
mod status;

pub use login::*;
pub use logout::*;
pub use setup::*;
pub use status::*;
