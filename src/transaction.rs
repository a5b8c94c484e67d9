//! Transaction module split into record types and the wire codec

pub mod codec;
pub mod types;

pub use types::*;
