//! Types shared by every stage of the speech pipeline

mod context;
mod error;
mod http_client;

pub use context::Caller;
pub use error::HttpError;
pub use http_client::http_client;
