pub mod address;
pub mod distribution;
pub mod schema;

pub use address::*;
pub use distribution::*;
pub use schema::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("address length {found} bytes, expected {expected}")]
    BadAddressLength { expected: usize, found: usize },

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, ClaimsError>;
