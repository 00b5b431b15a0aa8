//! Sumi Types - the variant registry.
//!
//! This crate defines the shape of tagged-union types once, at setup time:
//! - `VariantDescriptor`: one named shape (unit, positional, or named fields)
//! - `EnumType`: an ordered, frozen list of descriptors
//! - `EnumTypeHandle`: a `Copy` handle used by values and the match engine
//! - `TypeTag`: the field type vocabulary shared by every Sumi crate
//!
//! # Lifecycle
//!
//! Registration inserts the type into process-wide state and freezes it.
//! Registered types are never mutated or dropped, so reads through an
//! `EnumTypeHandle` take no lock and may happen from any thread.

mod descriptor;
mod error;
mod registry;
mod tag;

pub use descriptor::{FieldDef, PayloadShape, VariantDescriptor};
pub use error::RegistryError;
pub use registry::{
    lookup, register, register_instance, registered_count, EnumType, EnumTypeHandle, TypeId,
};
pub use tag::TypeTag;
