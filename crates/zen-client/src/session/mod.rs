mod api_request;
mod auth_session;
mod auth_state;
mod login_redirect;

pub use api_request::ApiRequest;
pub use auth_session::{AuthOutcome, AuthSession};
pub use auth_state::{Attempt, AuthState};
pub use login_redirect::{LogRedirect, LoginRedirect, RedirectRecorder};
