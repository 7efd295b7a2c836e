//! The auto-faking container facade.

use std::sync::Arc;

use crate::construct::Construct;
use crate::error::{FakeError, FakeResult};
use crate::factory::InstanceFactory;
use crate::key::ServiceKey;
use crate::registry::{downcast_shared, AnyService, ServiceRegistry};
use crate::traits::FakerCore;

/// An auto-faking service container.
///
/// `AutoFaker` is a thin facade over two collaborators wired at construction
/// and fixed for its lifetime: a type-keyed service registry of supplied
/// instances, and an instance factory that builds [`Construct`] types by
/// resolving each dependency from the registry or from a synthesized fake.
///
/// ```rust
/// use autofaker::{AutoFaker, Construct, Fake, FactoryContext, FakeResult};
/// use std::sync::Arc;
///
/// trait Mailer: Send + Sync {
///     fn deliver(&self, to: &str) -> bool;
/// }
///
/// struct InertMailer;
///
/// impl Mailer for InertMailer {
///     fn deliver(&self, _to: &str) -> bool {
///         false
///     }
/// }
///
/// impl Fake for dyn Mailer {
///     fn fake() -> Arc<Self> {
///         Arc::new(InertMailer)
///     }
/// }
///
/// struct Newsletter {
///     mailer: Arc<dyn Mailer>,
/// }
///
/// impl Construct for Newsletter {
///     fn construct(cx: &FactoryContext<'_>) -> FakeResult<Self> {
///         Ok(Newsletter {
///             mailer: cx.resolve::<dyn Mailer>()?,
///         })
///     }
/// }
///
/// let faker = AutoFaker::new();
///
/// // No mailer registered: the dependency is a synthesized fake, and the
/// // same fake is cached for retrieval afterwards.
/// let letter = faker.create_instance::<Newsletter>().unwrap();
/// let mailer = faker.get::<dyn Mailer>().unwrap();
/// assert!(Arc::ptr_eq(&letter.mailer, &mailer));
/// ```
pub struct AutoFaker {
    registry: ServiceRegistry,
    factory: InstanceFactory,
}

impl AutoFaker {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::with_parts(ServiceRegistry::new(), InstanceFactory::new())
    }

    // Composition root for tests that inject the collaborators directly.
    pub(crate) fn with_parts(registry: ServiceRegistry, factory: InstanceFactory) -> Self {
        Self { registry, factory }
    }

    /// Registers `service` under `T`, wrapping it in an `Arc`.
    ///
    /// Re-registering a type replaces the previous entry; subsequent [`get`]
    /// and [`create_instance`] calls observe the new value.
    ///
    /// [`get`]: AutoFaker::get
    /// [`create_instance`]: AutoFaker::create_instance
    pub fn use_instance<T: Send + Sync + 'static>(&self, service: T) {
        self.use_shared(Arc::new(service));
    }

    /// Registers an existing handle under `T`.
    ///
    /// The form for trait object services:
    ///
    /// ```rust
    /// # use autofaker::AutoFaker;
    /// # use std::sync::Arc;
    /// trait Database: Send + Sync {}
    /// struct Stub;
    /// impl Database for Stub {}
    ///
    /// let faker = AutoFaker::new();
    /// faker.use_shared::<dyn Database>(Arc::new(Stub));
    /// assert!(faker.get::<dyn Database>().is_ok());
    /// ```
    pub fn use_shared<T: ?Sized + Send + Sync + 'static>(&self, service: Arc<T>) {
        self.registry
            .register(ServiceKey::of::<T>(), Arc::new(service));
    }

    /// Retrieves the service registered under `T`, whether supplied
    /// explicitly via [`use_instance`]/[`use_shared`] or cached implicitly
    /// while constructing an instance.
    ///
    /// Fails with [`FakeError::ResolutionFailed`] for a type that was never
    /// made known; retrieval deliberately does not synthesize fakes.
    ///
    /// [`use_instance`]: AutoFaker::use_instance
    /// [`use_shared`]: AutoFaker::use_shared
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> FakeResult<Arc<T>> {
        downcast_shared::<T>(self.resolve_any(&ServiceKey::of::<T>())?)
    }

    /// Constructs an instance of `T` from known services.
    ///
    /// Each dependency is fulfilled by searching the registry or, if not
    /// found, synthesizing a fake. Returns a fresh instance on every call;
    /// factory errors propagate unchanged.
    pub fn create_instance<T: Construct>(&self) -> FakeResult<T> {
        self.factory.create(self)
    }
}

impl Default for AutoFaker {
    fn default() -> Self {
        Self::new()
    }
}

impl FakerCore for AutoFaker {
    fn register_any(&self, key: ServiceKey, service: AnyService) {
        self.registry.register(key, service);
    }

    fn resolve_any(&self, key: &ServiceKey) -> FakeResult<AnyService> {
        self.registry
            .try_resolve(key)
            .ok_or(FakeError::ResolutionFailed(key.display_name()))
    }

    fn resolve_or_synthesize_any(
        &self,
        key: &ServiceKey,
        synthesize: &dyn Fn() -> AnyService,
    ) -> AnyService {
        self.registry.resolve_or_synthesize(key, synthesize)
    }
}
