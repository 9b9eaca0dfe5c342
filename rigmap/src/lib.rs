//! Category-based bone mapping core for skeletal animation retargeting.
//!
//! Given the bone lists of a source and a target skeleton, this crate decides
//! which source bone should drive which target bone, one anatomical category
//! at a time. Everything around that decision (skeleton import/export, curve
//! retargeting, manual-override UI) lives in separate tools that consume the
//! returned `target name -> source name` mapping.

#![forbid(unsafe_code)]

mod error;
mod mapper;
mod matcher;
mod model;

#[cfg(feature = "json")]
pub mod json;

pub use error::*;
pub use mapper::*;
pub use matcher::*;
pub use model::*;

#[cfg(test)]
mod matcher_tests;
