//! The fake-synthesis capability boundary.

use std::sync::Arc;

/// Capability to synthesize an inert stand-in instance of a type.
///
/// This is the container's only external boundary: the actual fake/mock
/// generation engine lives in a mocking library (such as `mockall`), and the
/// container reaches it solely through this trait. An implementation returns
/// an instance whose members behave inertly until the test configures them.
///
/// Rust has no runtime proxy generation, so each fakeable type declares the
/// capability explicitly. The trait is implemented both for concrete types
/// and for trait object types; the latter is the common case, wiring a mock
/// in as the default stand-in for a dependency:
///
/// ```rust
/// use autofaker::Fake;
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
/// let mailer = <dyn Mailer>::fake();
/// assert!(!mailer.deliver("someone@example.com"));
/// ```
///
/// With `mockall` the implementation typically returns the generated mock:
///
/// ```rust,ignore
/// impl Fake for dyn Mailer {
///     fn fake() -> Arc<Self> {
///         Arc::new(MockMailer::new())
///     }
/// }
/// ```
pub trait Fake: Send + Sync {
    /// Synthesizes a fresh stand-in instance.
    fn fake() -> Arc<Self>;
}
