//! Process-wide registry of enum types.
//!
//! # Design
//!
//! - Registered `EnumType`s are leaked into `&'static` storage and frozen, so
//!   an `EnumTypeHandle` is a plain pointer: reads never lock.
//! - The name table sits behind a `parking_lot::RwLock` and is only touched
//!   by `register` and `lookup`.
//! - Variant index: O(1) variant lookup by name within a type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{RegistryError, TypeTag, VariantDescriptor};

/// Name table for all registered types.
static REGISTRY: LazyLock<RwLock<TypeTable>> = LazyLock::new(|| RwLock::new(TypeTable::default()));

#[derive(Default)]
struct TypeTable {
    by_name: FxHashMap<&'static str, EnumTypeHandle>,
    next_id: u32,
}

/// Identity of a registered enum type.
///
/// Assigned sequentially at registration. Two handles denote the same type
/// iff their ids are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A registered, immutable tagged-union type.
///
/// Variant order defines tag indices `0..variant_count()`.
pub struct EnumType {
    id: TypeId,
    name: Box<str>,
    variants: Vec<VariantDescriptor>,
    /// Variant name -> tag index.
    variant_index: FxHashMap<Box<str>, usize>,
}

impl EnumType {
    /// Type identity.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All variants in tag order.
    #[inline]
    pub fn variants(&self) -> &[VariantDescriptor] {
        &self.variants
    }

    /// Number of variants.
    #[inline]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Descriptor at a tag index.
    #[inline]
    pub fn variant(&self, tag: usize) -> Option<&VariantDescriptor> {
        self.variants.get(tag)
    }

    /// Tag index of a variant name.
    #[inline]
    pub fn variant_index(&self, name: &str) -> Option<usize> {
        self.variant_index.get(name).copied()
    }

    /// Look up a variant descriptor by name.
    ///
    /// Returns `Some((tag, descriptor))` if found.
    pub fn variant_by_name(&self, name: &str) -> Option<(usize, &VariantDescriptor)> {
        let tag = self.variant_index(name)?;
        Some((tag, self.variants.get(tag)?))
    }

    /// Variant names in tag order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(VariantDescriptor::name)
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("id", &self.id.0)
            .field("name", &self.name)
            .field("variants", &self.variants)
            .finish()
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum {} {{ ", self.name)?;
        for (i, variant) in self.variants.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{variant}")?;
        }
        f.write_str(" }")
    }
}

/// Handle to a registered enum type.
///
/// `Copy`, lock-free to read, and valid for the rest of the process.
#[derive(Copy, Clone)]
pub struct EnumTypeHandle(&'static EnumType);

impl EnumTypeHandle {
    /// Borrow the type for the rest of the process.
    #[inline]
    pub fn get(self) -> &'static EnumType {
        self.0
    }

    /// Type name with `'static` lifetime.
    #[inline]
    pub fn name(self) -> &'static str {
        &self.0.name
    }

    /// Variant name at a tag index with `'static` lifetime.
    #[inline]
    pub fn variant_name(self, tag: usize) -> Option<&'static str> {
        self.0.variants.get(tag).map(VariantDescriptor::name)
    }
}

impl Deref for EnumTypeHandle {
    type Target = EnumType;

    #[inline]
    fn deref(&self) -> &EnumType {
        self.0
    }
}

impl PartialEq for EnumTypeHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for EnumTypeHandle {}

impl Hash for EnumTypeHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for EnumTypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumTypeHandle({}#{})", self.0.name, self.0.id.0)
    }
}

/// Register a new enum type and freeze it.
///
/// Fails without touching the registry if the definition is malformed or the
/// name is already taken. Scalar type names (`int`, `text`, ...) and names
/// containing `<` or `>` are reserved; the latter belong to
/// [`register_instance`].
pub fn register(
    name: &str,
    variants: impl IntoIterator<Item = VariantDescriptor>,
) -> Result<EnumTypeHandle, RegistryError> {
    check_plain_name(name)?;
    insert(name.to_string(), variants.into_iter().collect())
}

/// Register one instantiation of a generic type, named `generic<args>`.
///
/// Plain names can never contain `<`, and scalar names are reserved, so the
/// generated name is distinct for every distinct argument list: no user
/// registration can take it first.
pub fn register_instance(
    generic: &str,
    args: &[TypeTag],
    variants: impl IntoIterator<Item = VariantDescriptor>,
) -> Result<EnumTypeHandle, RegistryError> {
    check_plain_name(generic)?;
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    insert(
        format!("{generic}<{}>", args.join(", ")),
        variants.into_iter().collect(),
    )
}

fn check_plain_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyTypeName);
    }
    if name.contains(['<', '>']) || TypeTag::SCALAR_NAMES.contains(&name) {
        return Err(RegistryError::ReservedTypeName {
            type_name: name.to_string(),
        });
    }
    Ok(())
}

fn insert(name: String, variants: Vec<VariantDescriptor>) -> Result<EnumTypeHandle, RegistryError> {
    if variants.is_empty() {
        return Err(RegistryError::NoVariants { type_name: name });
    }

    let mut variant_index = FxHashMap::default();
    for (tag, variant) in variants.iter().enumerate() {
        variant.validate(&name)?;
        if variant_index.insert(Box::from(variant.name()), tag).is_some() {
            return Err(RegistryError::DuplicateVariantName {
                type_name: name,
                variant: variant.name().to_string(),
            });
        }
    }

    let mut table = REGISTRY.write();
    if table.by_name.contains_key(name.as_str()) {
        return Err(RegistryError::DuplicateTypeName { type_name: name });
    }

    let id = TypeId(table.next_id);
    table.next_id += 1;

    let leaked: &'static EnumType = Box::leak(Box::new(EnumType {
        id,
        name: name.into_boxed_str(),
        variants,
        variant_index,
    }));
    let handle = EnumTypeHandle(leaked);
    table.by_name.insert(&leaked.name, handle);

    tracing::debug!(
        type_name = &*leaked.name,
        id = id.0,
        variants = leaked.variants.len(),
        "registered enum type"
    );
    Ok(handle)
}

/// Look up a registered type by name.
pub fn lookup(name: &str) -> Option<EnumTypeHandle> {
    REGISTRY.read().by_name.get(name).copied()
}

/// Number of registered types in this process.
pub fn registered_count() -> usize {
    REGISTRY.read().by_name.len()
}
