pub mod error;
pub mod status;
