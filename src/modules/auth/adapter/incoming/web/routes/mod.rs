mod login_admin;
mod verify_admin;

pub use login_admin::*;
pub use verify_admin::*;
