//! Core container traits for callers that depend on an abstraction.

use std::sync::Arc;

use crate::construct::Construct;
use crate::error::FakeResult;
use crate::factory::InstanceFactory;
use crate::key::ServiceKey;
use crate::registry::{downcast_shared, AnyService};

/// Object-safe, non-generic container operations.
///
/// This is the contract a test can depend on (or stand in for) instead of
/// the concrete [`AutoFaker`](crate::AutoFaker). Payloads are type-erased:
/// every service travels as its `Arc<T>` handle boxed into an [`AnyService`].
/// Nothing here validates that a payload matches its key; the generic sugar
/// in [`Faker`] upholds that contract, and a mismatch introduced through
/// this layer surfaces as `InvalidArgument` at retrieval.
pub trait FakerCore: Send + Sync {
    /// Stores or overwrites the entry for `key`. Last writer wins.
    fn register_any(&self, key: ServiceKey, service: AnyService);

    /// Returns the entry for `key`, or `ResolutionFailed` naming the type.
    fn resolve_any(&self, key: &ServiceKey) -> FakeResult<AnyService>;

    /// Returns the entry for `key`, synthesizing and caching one on a miss.
    fn resolve_or_synthesize_any(
        &self,
        key: &ServiceKey,
        synthesize: &dyn Fn() -> AnyService,
    ) -> AnyService;
}

/// Generic sugar over [`FakerCore`].
///
/// These wrappers build a [`ServiceKey`] from the type parameter, delegate to
/// the non-generic core, and downcast the result. They carry no contract of
/// their own and behave identically to calling the core with an equivalent
/// key directly. Implemented for everything that implements [`FakerCore`].
///
/// ```rust
/// use autofaker::{AutoFaker, Faker};
///
/// let faker = AutoFaker::new();
/// faker.use_fake(8080u16);
/// assert_eq!(*faker.get_fake::<u16>().unwrap(), 8080);
/// ```
pub trait Faker: FakerCore {
    /// Registers `service` under `T`, wrapping it in an `Arc`.
    fn use_fake<T: Send + Sync + 'static>(&self, service: T) {
        self.use_fake_shared(Arc::new(service));
    }

    /// Registers an existing handle under `T`.
    ///
    /// This is the form for trait object services:
    /// `faker.use_fake_shared::<dyn Db>(Arc::new(stub))`.
    fn use_fake_shared<T: ?Sized + Send + Sync + 'static>(&self, service: Arc<T>) {
        self.register_any(ServiceKey::of::<T>(), Arc::new(service));
    }

    /// Retrieves the service registered (or cached during construction)
    /// under `T`.
    ///
    /// Never falls back to synthesizing a fake; only construction does that.
    fn get_fake<T: ?Sized + Send + Sync + 'static>(&self) -> FakeResult<Arc<T>> {
        downcast_shared::<T>(self.resolve_any(&ServiceKey::of::<T>())?)
    }

    /// Constructs a `T`, resolving each dependency from the registry or from
    /// a synthesized fake. Factory errors propagate unchanged.
    fn create_instance<T: Construct>(&self) -> FakeResult<T>
    where
        Self: Sized,
    {
        InstanceFactory::new().create(self)
    }
}

impl<F: FakerCore + ?Sized> Faker for F {}
