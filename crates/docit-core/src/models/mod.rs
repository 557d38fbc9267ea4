//! Domain models for the DocIt record store.

mod appointment;
mod fields;
mod patient;
mod prescription;

pub use appointment::*;
pub use fields::*;
pub use patient::*;
pub use prescription::*;

use thiserror::Error;

/// A field value that violates its constraint.
///
/// Carries the human-readable constraint so parsers and storage can surface
/// it unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);
