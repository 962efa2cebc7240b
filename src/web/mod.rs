pub mod auth;
mod error;
pub mod extract;
mod log;
pub mod midware;
pub mod routes;
pub mod types;

pub use error::{ClientError, Error, Result as WebResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
