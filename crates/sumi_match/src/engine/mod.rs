//! The match engine: plan caching and dispatch.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use sumi_types::{EnumTypeHandle, TypeId};
use sumi_value::VariantValue;

use crate::{compile, ArmShape, DispatchPlan, MatchArms, MatchError};

/// Process-wide engine used by the free [`evaluate`] and [`validate`].
static GLOBAL_ENGINE: LazyLock<MatchEngine> = LazyLock::new(MatchEngine::new);

/// Cache key: a plan depends only on the type and the arm shapes.
#[derive(Clone, PartialEq, Eq, Hash)]
struct PlanKey {
    type_id: TypeId,
    shapes: Vec<ArmShape>,
}

/// Plans kept by [`MatchEngine::new`] and the global engine.
pub const DEFAULT_PLAN_CAPACITY: usize = 1024;

/// Validates arm lists and dispatches values through them.
///
/// Plans are immutable and shared via `Arc`, so a cached plan can be used
/// from any number of threads at once.
///
/// The cache is bounded. Once it holds `capacity` plans, new shapes are
/// still validated and dispatched but not stored, so arm lists built with
/// generated binder names cannot grow it without limit.
pub struct MatchEngine {
    cache: Option<PlanCache>,
}

struct PlanCache {
    plans: RwLock<FxHashMap<PlanKey, Arc<DispatchPlan>>>,
    capacity: usize,
}

impl MatchEngine {
    /// Create an engine that caches up to [`DEFAULT_PLAN_CAPACITY`] plans.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PLAN_CAPACITY)
    }

    /// Create an engine that caches up to `capacity` plans.
    ///
    /// A capacity of 0 behaves like [`uncached`](MatchEngine::uncached).
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::uncached();
        }
        MatchEngine {
            cache: Some(PlanCache {
                plans: RwLock::new(FxHashMap::default()),
                capacity,
            }),
        }
    }

    /// Create an engine that re-validates every arm list.
    pub fn uncached() -> Self {
        MatchEngine { cache: None }
    }

    /// Maximum number of cached plans (0 for an uncached engine).
    pub fn capacity(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.capacity)
    }

    /// The process-wide engine.
    pub fn global() -> &'static MatchEngine {
        &GLOBAL_ENGINE
    }

    /// Number of cached plans (always 0 for an uncached engine).
    pub fn cached_plans(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.plans.read().len())
    }

    /// Validate an arm list against `ty` without evaluating anything.
    pub fn validate<R>(
        &self,
        ty: EnumTypeHandle,
        arms: &MatchArms<'_, R>,
    ) -> Result<Arc<DispatchPlan>, MatchError> {
        self.plan(ty, arms.shapes())
    }

    /// Get the plan for `(ty, shapes)`, compiling it on a cache miss.
    ///
    /// Failed validations are never cached, nor are plans compiled while the
    /// cache is full.
    pub fn plan(
        &self,
        ty: EnumTypeHandle,
        shapes: Vec<ArmShape>,
    ) -> Result<Arc<DispatchPlan>, MatchError> {
        let Some(cache) = &self.cache else {
            return compile(ty, &shapes).map(Arc::new);
        };

        let key = PlanKey {
            type_id: ty.id(),
            shapes,
        };
        if let Some(plan) = cache.plans.read().get(&key) {
            return Ok(Arc::clone(plan));
        }

        tracing::debug!(type_name = ty.name(), arms = key.shapes.len(), "dispatch plan cache miss");
        let plan = Arc::new(compile(ty, &key.shapes)?);

        let mut plans = cache.plans.write();
        if let Some(existing) = plans.get(&key) {
            return Ok(Arc::clone(existing));
        }
        if plans.len() >= cache.capacity {
            tracing::debug!(
                type_name = ty.name(),
                capacity = cache.capacity,
                "dispatch plan cache full, not storing plan"
            );
            return Ok(plan);
        }
        plans.insert(key, Arc::clone(&plan));
        Ok(plan)
    }

    /// Match `value` against `arms` and run the body of the arm that fires.
    ///
    /// The arm list is validated against the value's type first; a defective
    /// list fails even if the value would have hit a well-formed arm.
    pub fn evaluate<R>(&self, value: &VariantValue, arms: MatchArms<'_, R>) -> Result<R, MatchError> {
        let ty = value.enum_type();
        let plan = self.validate(ty, &arms)?;

        let Some(arm_index) = plan.arm_for_tag(value.tag()) else {
            return Err(MatchError::NonExhaustiveMatch {
                type_name: ty.name().to_string(),
                missing: vec![value.variant_name().to_string()],
            });
        };
        let bindings = plan.bind(arm_index, value)?;

        tracing::trace!(
            type_name = ty.name(),
            variant = value.variant_name(),
            arm_index,
            "dispatching match arm"
        );
        let arm = arms.into_arms().swap_remove(arm_index);
        Ok((arm.body)(bindings))
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("capacity", &self.capacity())
            .field("plans", &self.cached_plans())
            .finish()
    }
}

/// Match `value` against `arms` using the process-wide engine.
pub fn evaluate<R>(value: &VariantValue, arms: MatchArms<'_, R>) -> Result<R, MatchError> {
    MatchEngine::global().evaluate(value, arms)
}

/// Validate `arms` against `ty` using the process-wide engine.
pub fn validate<R>(ty: EnumTypeHandle, arms: &MatchArms<'_, R>) -> Result<Arc<DispatchPlan>, MatchError> {
    MatchEngine::global().validate(ty, arms)
}
