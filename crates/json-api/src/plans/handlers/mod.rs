//! Plan Handlers

pub(crate) mod solve;
