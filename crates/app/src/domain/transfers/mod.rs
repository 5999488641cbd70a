//! Transfers
//!
//! Export and import of the item list as JSON documents.

pub mod errors;
pub mod filenames;
pub mod service;

pub use errors::TransfersServiceError;
pub use service::*;
