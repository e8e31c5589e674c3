//! obesiq-common — shared error taxonomy for the obesiq workspace.

pub mod error;

pub use error::{ApiError, ObesiqError, Result};
