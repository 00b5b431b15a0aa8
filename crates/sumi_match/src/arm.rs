//! Match arms and their shapes.
//!
//! An [`ArmShape`] is everything validation looks at: the pattern and the
//! binder spec. Bodies live only on [`Arm`] and never influence validation,
//! which is what makes plans cacheable per shape.

use std::fmt;

use crate::Bindings;

/// Placeholder binding name: binds nothing.
pub(crate) const PLACEHOLDER: &str = "_";

/// What an arm matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArmPattern {
    /// Exactly one named variant.
    Variant(Box<str>),
    /// Every variant not matched by an earlier arm.
    Wildcard,
}

/// How an arm binds the matched value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BinderSpec {
    /// Bind nothing: `V4(..)`.
    #[default]
    Ignore,
    /// Bind the entire value: `ip @ _`.
    Whole(Box<str>),
    /// Bind positional fields by index: `V4(a, b, c, d)`.
    Positional(Vec<Box<str>>),
    /// Bind named fields: `Move { x: px, y: py }`, as `(field, binding)` pairs.
    Named(Vec<(Box<str>, Box<str>)>),
}

impl BinderSpec {
    /// Bind the whole value to `name`.
    pub fn whole(name: impl Into<Box<str>>) -> Self {
        BinderSpec::Whole(name.into())
    }

    /// Bind positional fields, in order.
    pub fn positional<N: Into<Box<str>>>(names: impl IntoIterator<Item = N>) -> Self {
        BinderSpec::Positional(names.into_iter().map(Into::into).collect())
    }

    /// Bind named fields to explicit binding names.
    pub fn named<F: Into<Box<str>>, B: Into<Box<str>>>(
        pairs: impl IntoIterator<Item = (F, B)>,
    ) -> Self {
        BinderSpec::Named(
            pairs
                .into_iter()
                .map(|(field, binding)| (field.into(), binding.into()))
                .collect(),
        )
    }

    /// Bind named fields to bindings of the same name: `Move { x, y }`.
    pub fn fields<N: AsRef<str>>(names: impl IntoIterator<Item = N>) -> Self {
        BinderSpec::Named(
            names
                .into_iter()
                .map(|name| (Box::from(name.as_ref()), Box::from(name.as_ref())))
                .collect(),
        )
    }
}

/// The validation-relevant part of an arm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArmShape {
    pub pattern: ArmPattern,
    pub binders: BinderSpec,
}

impl ArmShape {
    /// Check if this is a wildcard arm.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self.pattern, ArmPattern::Wildcard)
    }
}

impl fmt::Display for ArmShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match &self.pattern {
            ArmPattern::Variant(name) => &**name,
            ArmPattern::Wildcard => PLACEHOLDER,
        };
        match &self.binders {
            BinderSpec::Ignore if self.is_wildcard() => f.write_str(PLACEHOLDER),
            BinderSpec::Ignore => write!(f, "{name}(..)"),
            BinderSpec::Whole(binding) => write!(f, "{binding} @ {name}"),
            BinderSpec::Positional(names) => write!(f, "{name}({})", names.join(", ")),
            BinderSpec::Named(pairs) => {
                write!(f, "{name} {{ ")?;
                for (i, (field, binding)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if field == binding {
                        f.write_str(field)?;
                    } else {
                        write!(f, "{field}: {binding}")?;
                    }
                }
                f.write_str(" }")
            }
        }
    }
}

/// One match arm: a shape plus the body to run when it fires.
pub struct Arm<'a, R> {
    shape: ArmShape,
    pub(crate) body: Box<dyn FnOnce(Bindings) -> R + 'a>,
}

impl<'a, R> Arm<'a, R> {
    /// An arm for one named variant.
    pub fn variant(
        name: impl Into<Box<str>>,
        binders: BinderSpec,
        body: impl FnOnce(Bindings) -> R + 'a,
    ) -> Self {
        Arm {
            shape: ArmShape {
                pattern: ArmPattern::Variant(name.into()),
                binders,
            },
            body: Box::new(body),
        }
    }

    /// A terminal wildcard arm.
    pub fn wildcard(binders: BinderSpec, body: impl FnOnce(Bindings) -> R + 'a) -> Self {
        Arm {
            shape: ArmShape {
                pattern: ArmPattern::Wildcard,
                binders,
            },
            body: Box::new(body),
        }
    }

    /// The arm's shape.
    #[inline]
    pub fn shape(&self) -> &ArmShape {
        &self.shape
    }
}

impl<R> fmt::Debug for Arm<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm").field("shape", &self.shape).finish_non_exhaustive()
    }
}

/// An ordered arm list.
///
/// Consumed by evaluation: exactly one body runs, so bodies may be `FnOnce`.
pub struct MatchArms<'a, R> {
    arms: Vec<Arm<'a, R>>,
}

impl<'a, R> MatchArms<'a, R> {
    /// Create an empty arm list.
    pub fn new() -> Self {
        MatchArms { arms: Vec::new() }
    }

    /// Append an arm for a named variant.
    #[must_use]
    pub fn on(
        mut self,
        variant: impl Into<Box<str>>,
        binders: BinderSpec,
        body: impl FnOnce(Bindings) -> R + 'a,
    ) -> Self {
        self.arms.push(Arm::variant(variant, binders, body));
        self
    }

    /// Append a wildcard arm.
    #[must_use]
    pub fn otherwise(mut self, binders: BinderSpec, body: impl FnOnce(Bindings) -> R + 'a) -> Self {
        self.arms.push(Arm::wildcard(binders, body));
        self
    }

    /// Append a prebuilt arm.
    pub fn push(&mut self, arm: Arm<'a, R>) {
        self.arms.push(arm);
    }

    /// Shapes of all arms, in order.
    pub fn shapes(&self) -> Vec<ArmShape> {
        self.arms.iter().map(|arm| arm.shape.clone()).collect()
    }

    /// Number of arms.
    #[inline]
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if there are no arms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub(crate) fn into_arms(self) -> Vec<Arm<'a, R>> {
        self.arms
    }
}

impl<R> Default for MatchArms<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> FromIterator<Arm<'a, R>> for MatchArms<'a, R> {
    fn from_iter<I: IntoIterator<Item = Arm<'a, R>>>(iter: I) -> Self {
        MatchArms {
            arms: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> From<Vec<Arm<'a, R>>> for MatchArms<'a, R> {
    fn from(arms: Vec<Arm<'a, R>>) -> Self {
        MatchArms { arms }
    }
}

impl<R> fmt::Debug for MatchArms<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.arms).finish()
    }
}
