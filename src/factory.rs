//! Instance factory and the resolver handed to constructors.

use std::sync::Arc;

use crate::construct::Construct;
use crate::error::{FakeError, FakeResult};
use crate::fake::Fake;
use crate::key::ServiceKey;
use crate::registry::{downcast_shared, AnyService};
use crate::traits::FakerCore;

/// Dependency resolver passed to [`Construct::construct`].
///
/// Each resolution asks the service registry first; what happens on a miss
/// depends on the method. The context borrows the container core, so a
/// constructor can only resolve, never re-wire.
pub struct FactoryContext<'a> {
    core: &'a (dyn FakerCore + 'a),
}

impl<'a> FactoryContext<'a> {
    pub(crate) fn new(core: &'a (dyn FakerCore + 'a)) -> Self {
        Self { core }
    }

    /// Resolves a dependency from the registry, synthesizing a fake on a miss.
    ///
    /// A synthesized fake is cached back into the registry, so the same fake
    /// is shared by later constructions and retrievable afterwards via `get`
    /// for configuring expectations.
    pub fn resolve<D>(&self) -> FakeResult<Arc<D>>
    where
        D: ?Sized + Fake + 'static,
    {
        let key = ServiceKey::of::<D>();
        let synthesize = || -> AnyService { Arc::new(D::fake()) };
        downcast_shared::<D>(self.core.resolve_or_synthesize_any(&key, &synthesize))
    }

    /// Resolves a dependency from the registry only.
    ///
    /// For parameters that must not be stood in for by a fake. Fails with
    /// [`FakeError::ResolutionFailed`] when the type was never registered.
    pub fn resolve_registered<D>(&self) -> FakeResult<Arc<D>>
    where
        D: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<D>();
        downcast_shared::<D>(self.core.resolve_any(&key)?)
    }

    /// Resolves a dependency from the registry, falling back to a caller-
    /// supplied synthesizer for types without a [`Fake`] impl.
    ///
    /// The synthesized instance is cached exactly like a fake.
    pub fn resolve_or_else<D>(&self, synthesize: impl Fn() -> Arc<D>) -> FakeResult<Arc<D>>
    where
        D: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<D>();
        let make = || -> AnyService { Arc::new(synthesize()) };
        downcast_shared::<D>(self.core.resolve_or_synthesize_any(&key, &make))
    }
}

/// Builds instances of [`Construct`] types against a container core.
///
/// Stateless; the registry it consults belongs to the container that invokes
/// it. Instances are built fresh on every call. Only the fakes synthesized
/// while resolving dependencies are cached, never the constructed instance
/// itself.
#[derive(Default)]
pub(crate) struct InstanceFactory;

impl InstanceFactory {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Constructs `T`, wrapping any dependency failure in
    /// [`FakeError::ConstructionFailed`] naming the type.
    pub(crate) fn create<T: Construct>(&self, core: &dyn FakerCore) -> FakeResult<T> {
        let cx = FactoryContext::new(core);
        T::construct(&cx).map_err(|source| {
            FakeError::ConstructionFailed(std::any::type_name::<T>(), Box::new(source))
        })
    }
}
