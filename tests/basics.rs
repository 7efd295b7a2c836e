use autofaker::{AutoFaker, Fake, FakeError, Faker};
use std::sync::Arc;

trait Bar: Send + Sync {
    fn tag(&self) -> &'static str;
}

struct RealBar;

impl Bar for RealBar {
    fn tag(&self) -> &'static str {
        "real"
    }
}

impl Fake for dyn Bar {
    fn fake() -> Arc<Self> {
        Arc::new(RealBar)
    }
}

trait Foo: Send + Sync {}

#[test]
fn test_use_then_get_returns_same_instance() {
    let faker = AutoFaker::new();
    let service: Arc<dyn Bar> = Arc::new(RealBar);
    faker.use_shared::<dyn Bar>(service.clone());

    let resolved = faker.get::<dyn Bar>().expect("registered");
    assert!(Arc::ptr_eq(&resolved, &service));
    assert_eq!(resolved.tag(), "real");
}

#[test]
fn test_get_is_stable_across_calls() {
    let faker = AutoFaker::new();
    faker.use_instance(42usize);

    let a = faker.get::<usize>().expect("registered");
    let b = faker.get::<usize>().expect("registered");

    assert_eq!(*a, 42);
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_get_unregistered_fails_with_resolution_error() {
    let faker = AutoFaker::new();

    match faker.get::<dyn Foo>() {
        Err(FakeError::ResolutionFailed(name)) => assert!(name.contains("Foo")),
        other => panic!("expected ResolutionFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_get_never_synthesizes() {
    // dyn Bar has a Fake impl, but retrieval must not use it.
    let faker = AutoFaker::new();
    assert!(matches!(
        faker.get::<dyn Bar>(),
        Err(FakeError::ResolutionFailed(_))
    ));
}

#[test]
fn test_reregistration_replaces() {
    let faker = AutoFaker::new();
    faker.use_instance(1usize);
    faker.use_instance(2usize);

    let value = faker.get::<usize>().expect("registered");
    assert_eq!(*value, 2);
}

#[test]
fn test_distinct_types_do_not_collide() {
    let faker = AutoFaker::new();
    faker.use_instance(7u32);
    faker.use_instance("seven".to_string());

    assert_eq!(*faker.get::<u32>().expect("registered"), 7);
    assert_eq!(*faker.get::<String>().expect("registered"), "seven");
}

#[test]
fn test_trait_sugar_shares_storage_with_inherent_api() {
    let faker = AutoFaker::new();
    faker.use_fake(8080u16);

    let via_trait = faker.get_fake::<u16>().expect("registered");
    let via_inherent = faker.get::<u16>().expect("registered");

    assert_eq!(*via_trait, 8080);
    assert!(Arc::ptr_eq(&via_trait, &via_inherent));
}

#[test]
fn test_default_container_is_empty() {
    let faker = AutoFaker::default();
    assert!(faker.get::<usize>().is_err());
}
