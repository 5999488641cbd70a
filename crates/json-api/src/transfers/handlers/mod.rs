//! Transfer Handlers

pub(crate) mod download;
pub(crate) mod export;
pub(crate) mod import;
