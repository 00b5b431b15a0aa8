//! Sumi Value - runtime instances of registered enum types.
//!
//! This crate provides:
//! - `Value`: scalar field values plus nested variants
//! - `Payload`: the data supplied to and returned from a variant
//! - `VariantValue`: a discriminant paired with a payload that always
//!   matches the descriptor at that discriminant
//! - `ValueError`: construction and extraction failures
//!
//! # Invariant
//!
//! A `VariantValue` can only be built through [`construct`], which checks the
//! payload against the descriptor. The tag and payload are stored together
//! and never change after construction.

mod error;
mod payload;
mod value;
mod variant;

pub use error::{ShapeMismatch, ValueError};
pub use payload::Payload;
pub use value::Value;
pub use variant::{construct, construct_named, construct_positional, construct_unit, VariantValue};
