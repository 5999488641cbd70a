//! Shared application services for the purchase planner.

pub mod context;
pub mod domain;
pub mod editor;
pub mod store;

#[cfg(test)]
mod test;
