pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod response;

pub use client::ZenClient;
pub use error::{ClientError, Result as ClientResult};
