//! Batch run orchestration module

pub mod conflict;
pub mod walker;
