//! # autofaker
//!
//! An auto-faking service container: a thin convenience layer over a mocking
//! library that constructs a type by resolving each of its dependencies
//! either from an explicitly-registered service instance or from an
//! automatically-synthesized fake.
//!
//! ## Features
//!
//! - **Type-keyed registry**: register a service once, retrieve the same
//!   handle for the container's lifetime
//! - **Auto-faking construction**: unregistered dependencies become fakes via
//!   the [`Fake`] capability, never errors and never placeholder defaults
//! - **Cached fakes**: a fake synthesized during construction is retrievable
//!   afterwards for configuring expectations
//! - **Abstraction-friendly**: callers can depend on the [`FakerCore`] /
//!   [`Faker`] traits instead of the concrete container
//!
//! ## Quick Start
//!
//! ```rust
//! use autofaker::{AutoFaker, Construct, Fake, FactoryContext, FakeResult};
//! use std::sync::Arc;
//!
//! // A dependency the system under test talks to.
//! trait Database: Send + Sync {
//!     fn count(&self) -> usize;
//! }
//!
//! struct EmptyDatabase;
//!
//! impl Database for EmptyDatabase {
//!     fn count(&self) -> usize {
//!         0
//!     }
//! }
//!
//! // Tell the container what an inert stand-in looks like. With a mocking
//! // library this would return the generated mock instead.
//! impl Fake for dyn Database {
//!     fn fake() -> Arc<Self> {
//!         Arc::new(EmptyDatabase)
//!     }
//! }
//!
//! // The system under test declares its one canonical constructor.
//! struct Report {
//!     db: Arc<dyn Database>,
//! }
//!
//! impl Construct for Report {
//!     fn construct(cx: &FactoryContext<'_>) -> FakeResult<Self> {
//!         Ok(Report {
//!             db: cx.resolve::<dyn Database>()?,
//!         })
//!     }
//! }
//!
//! let faker = AutoFaker::new();
//! let report = faker.create_instance::<Report>().unwrap();
//! assert_eq!(report.db.count(), 0);
//!
//! // The synthesized database was cached; retrieve the very same instance.
//! let db = faker.get::<dyn Database>().unwrap();
//! assert!(Arc::ptr_eq(&report.db, &db));
//! ```
//!
//! ## Supplying real collaborators
//!
//! Anything registered beforehand wins over synthesis, so a test can pin the
//! dependencies it cares about and let the rest be faked:
//!
//! ```rust
//! # use autofaker::{AutoFaker, Construct, Fake, FactoryContext, FakeResult};
//! # use std::sync::Arc;
//! # trait Database: Send + Sync { fn count(&self) -> usize; }
//! # struct EmptyDatabase;
//! # impl Database for EmptyDatabase { fn count(&self) -> usize { 0 } }
//! # impl Fake for dyn Database { fn fake() -> Arc<Self> { Arc::new(EmptyDatabase) } }
//! # struct Report { db: Arc<dyn Database> }
//! # impl Construct for Report {
//! #     fn construct(cx: &FactoryContext<'_>) -> FakeResult<Self> {
//! #         Ok(Report { db: cx.resolve::<dyn Database>()? })
//! #     }
//! # }
//! struct SeededDatabase;
//!
//! impl Database for SeededDatabase {
//!     fn count(&self) -> usize {
//!         3
//!     }
//! }
//!
//! let faker = AutoFaker::new();
//! let seeded: Arc<dyn Database> = Arc::new(SeededDatabase);
//! faker.use_shared::<dyn Database>(seeded.clone());
//!
//! let report = faker.create_instance::<Report>().unwrap();
//! assert!(Arc::ptr_eq(&report.db, &seeded));
//! assert_eq!(report.db.count(), 3);
//! ```
//!
//! Retrieval is deliberately asymmetric to construction: [`AutoFaker::get`]
//! only returns what was made known (explicitly or through construction-time
//! caching) and fails with [`FakeError::ResolutionFailed`] otherwise, while
//! [`AutoFaker::create_instance`] is the only operation that synthesizes.

pub mod construct;
pub mod error;
pub mod factory;
pub mod fake;
pub mod faker;
pub mod key;
pub mod traits;

mod registry;

pub use construct::Construct;
pub use error::{FakeError, FakeResult};
pub use factory::FactoryContext;
pub use fake::Fake;
pub use faker::AutoFaker;
pub use key::ServiceKey;
pub use registry::AnyService;
pub use traits::{Faker, FakerCore};
