//! Declaring how a type is constructed from its dependencies.

use crate::error::FakeResult;
use crate::factory::FactoryContext;

/// A type the container knows how to construct.
///
/// Without runtime reflection there is no way to discover a constructor's
/// parameter list, so each constructible type declares its one canonical
/// constructor as an impl of this trait. That also settles constructor
/// ambiguity by design: exactly one `construct` exists per type, checked at
/// compile time.
///
/// The impl resolves every dependency through the [`FactoryContext`], which
/// consults the service registry first and falls back to synthesizing a fake.
/// A fake is a terminal leaf value; nothing recurses into further
/// construction unless the impl asks for it explicitly.
///
/// ```rust
/// use autofaker::{AutoFaker, Construct, Fake, FactoryContext, FakeResult};
/// use std::sync::Arc;
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// struct FrozenClock;
///
/// impl Clock for FrozenClock {
///     fn now(&self) -> u64 {
///         0
///     }
/// }
///
/// impl Fake for dyn Clock {
///     fn fake() -> Arc<Self> {
///         Arc::new(FrozenClock)
///     }
/// }
///
/// struct Scheduler {
///     clock: Arc<dyn Clock>,
/// }
///
/// impl Construct for Scheduler {
///     fn construct(cx: &FactoryContext<'_>) -> FakeResult<Self> {
///         Ok(Scheduler {
///             clock: cx.resolve::<dyn Clock>()?,
///         })
///     }
/// }
///
/// let faker = AutoFaker::new();
/// let scheduler = faker.create_instance::<Scheduler>().unwrap();
/// assert_eq!(scheduler.clock.now(), 0);
/// ```
pub trait Construct: Sized + Send + Sync + 'static {
    /// Builds `Self`, resolving each dependency through `cx`.
    fn construct(cx: &FactoryContext<'_>) -> FakeResult<Self>;
}
