//! Budget

pub mod errors;
pub mod service;

pub use errors::BudgetServiceError;
pub use service::*;
