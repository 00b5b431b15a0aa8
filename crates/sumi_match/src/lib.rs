//! Sumi Match - exhaustive dispatch over variant values.
//!
//! # Architecture
//!
//! Matching is split in two phases:
//!
//! 1. **Validation** compiles the *shape* of an arm list (patterns and binder
//!    specs, never bodies) against an enum type into a [`DispatchPlan`]: a
//!    dense tag -> arm table plus resolved binder positions. Every coverage
//!    and binder problem is reported here, before any value is inspected.
//! 2. **Dispatch** indexes the table with the value's tag, binds the payload,
//!    and runs the selected body. Dispatch is O(1) in the number of variants.
//!
//! Plans are pure functions of `(type, arm shapes)`, so [`MatchEngine`] can
//! cache them. Caching is optional; re-validating is always correct.

mod arm;
mod bindings;
mod engine;
mod error;
mod plan;

pub use arm::{Arm, ArmPattern, ArmShape, BinderSpec, MatchArms};
pub use bindings::Bindings;
pub use engine::{evaluate, validate, MatchEngine, DEFAULT_PLAN_CAPACITY};
pub use error::{BinderIssue, MatchError};
pub use plan::{compile, DispatchPlan};
