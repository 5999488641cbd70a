//! Items

pub mod errors;
mod repository;
pub mod service;

pub use errors::ItemsServiceError;
pub use service::*;
