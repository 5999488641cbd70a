//! Planner Domain Concerns

pub mod budget;
pub mod items;
pub mod plans;
pub mod transfers;
