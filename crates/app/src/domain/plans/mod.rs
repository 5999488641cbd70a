//! Plans

pub mod errors;
pub mod service;

pub use errors::PlansServiceError;
pub use service::*;
