//! Sumi - tagged-variant values with exhaustive matching.
//!
//! Enum types are registered once and live for the rest of the process.
//! Values are immutable and always hold exactly one variant with a payload
//! that conforms to that variant's declared shape. Matching is validated
//! for coverage before any arm runs.
//!
//! ```text
//! register("IpKind", [V4(byte, byte, byte, byte), V6(text)])
//! construct(IpKind, "V4", [127, 0, 0, 1])
//! evaluate(home, arms { V4(a, b, c, d) => ..., V6(addr) => ... })
//! ```
//!
//! This crate re-exports the component crates and adds a unified [`Error`].

use std::sync::Once;

pub use sumi_match::{
    compile, evaluate, validate, Arm, ArmPattern, ArmShape, BinderIssue, BinderSpec, Bindings,
    DispatchPlan, MatchArms, MatchEngine, MatchError, DEFAULT_PLAN_CAPACITY,
};
pub use sumi_option::{
    and_then, into_native, is_absent, is_present, map, or_else, unwrap, unwrap_or, OptionError,
    OptionType,
};
pub use sumi_types::{
    lookup, register, register_instance, registered_count, EnumType, EnumTypeHandle, FieldDef,
    PayloadShape, RegistryError, TypeId, TypeTag, VariantDescriptor,
};
pub use sumi_value::{
    construct, construct_named, construct_positional, construct_unit, Payload, ShapeMismatch,
    Value, ValueError, VariantValue,
};

/// Any error produced by the variant system.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Option(#[from] OptionError),
}

/// Result alias over [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, or if a global subscriber is
/// already installed. Safe to call multiple times.
/// Enable with `RUST_LOG=sumi_match=debug` or `RUST_LOG=sumi_value=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
