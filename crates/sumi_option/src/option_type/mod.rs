//! Option type instantiation.
//!
//! Instances are memoized per inner tag. The first call for a tag registers
//! `Option<tag>` under the table's write lock; later calls only take the read
//! lock.

use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use sumi_types::{register_instance, EnumTypeHandle, TypeId, TypeTag, VariantDescriptor};
use sumi_value::{construct, Payload, Value, VariantValue};

use crate::OptionError;

static INSTANCES: LazyLock<RwLock<OptionTable>> =
    LazyLock::new(|| RwLock::new(OptionTable::default()));

#[derive(Default)]
struct OptionTable {
    by_inner: FxHashMap<TypeTag, OptionType>,
    by_type: FxHashMap<TypeId, OptionType>,
}

/// One instantiation of the option type, `{Present(T), Absent}`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct OptionType {
    handle: EnumTypeHandle,
    inner: TypeTag,
}

impl OptionType {
    /// Variant carrying a value.
    pub const PRESENT: &'static str = "Present";

    /// Variant carrying nothing.
    pub const ABSENT: &'static str = "Absent";

    /// The option type over `inner`, registering it on first use.
    ///
    /// Registered as the instance `Option<inner>`. Instance names cannot be
    /// claimed by user types, so distinct inner types always get distinct
    /// option types.
    pub fn of(inner: TypeTag) -> Result<Self, OptionError> {
        if let Some(ty) = INSTANCES.read().by_inner.get(&inner) {
            return Ok(*ty);
        }

        let mut table = INSTANCES.write();
        // Double-check after acquiring write lock
        if let Some(ty) = table.by_inner.get(&inner) {
            return Ok(*ty);
        }

        let handle = register_instance(
            "Option",
            &[inner],
            [
                VariantDescriptor::positional(Self::PRESENT, [inner]),
                VariantDescriptor::unit(Self::ABSENT),
            ],
        )?;
        let ty = OptionType { handle, inner };
        table.by_inner.insert(inner, ty);
        table.by_type.insert(handle.id(), ty);

        tracing::debug!(type_name = handle.name(), "instantiated option type");
        Ok(ty)
    }

    /// The option type a value belongs to.
    ///
    /// Fails with `NotAnOption` for values of any other enum type, including
    /// user enums that happen to declare `Present` and `Absent`.
    pub fn of_value(value: &VariantValue) -> Result<Self, OptionError> {
        let ty = value.enum_type();
        INSTANCES
            .read()
            .by_type
            .get(&ty.id())
            .copied()
            .ok_or_else(|| OptionError::NotAnOption {
                type_name: ty.name().to_string(),
            })
    }

    /// Check whether `value` belongs to any option instantiation.
    pub fn is_option(value: &VariantValue) -> bool {
        INSTANCES.read().by_type.contains_key(&value.enum_type().id())
    }

    /// The registered enum type.
    #[inline]
    pub fn handle(self) -> EnumTypeHandle {
        self.handle
    }

    /// The wrapped type `T`.
    #[inline]
    pub fn inner_tag(self) -> TypeTag {
        self.inner
    }

    /// This option type as a field tag, for nesting (`Option<Option<T>>`).
    #[inline]
    pub fn tag(self) -> TypeTag {
        TypeTag::Enum(self.handle)
    }

    /// Registered type name, e.g. `Option<int>`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.handle.name()
    }

    /// Check whether `value` is an instance of this option type.
    #[inline]
    pub fn is_instance(self, value: &VariantValue) -> bool {
        value.enum_type() == self.handle
    }

    /// Construct `Present(value)`. The value must conform to `T`.
    pub fn present(self, value: impl Into<Value>) -> Result<VariantValue, OptionError> {
        Ok(construct(
            self.handle,
            Self::PRESENT,
            Payload::Positional(vec![value.into()]),
        )?)
    }

    /// Construct `Absent`.
    pub fn absent(self) -> Result<VariantValue, OptionError> {
        Ok(construct(self.handle, Self::ABSENT, Payload::Unit)?)
    }

    /// Wrap a native `Option`: `Some(v)` becomes `Present(v)`.
    pub fn wrap(self, value: Option<Value>) -> Result<VariantValue, OptionError> {
        match value {
            Some(value) => self.present(value),
            None => self.absent(),
        }
    }
}

impl fmt::Debug for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionType({})", self.handle.name())
    }
}
