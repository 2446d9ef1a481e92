mod current_user;
mod user_state;

pub use current_user::CurrentUser;
pub use user_state::{UserState, UserStateGuard};
