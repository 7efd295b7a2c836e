/// Unit tests for FakeError and FakeResult.

use autofaker::{FakeError, FakeResult};
use std::error::Error;

#[test]
fn test_error_display_invalid_argument() {
    let error = FakeError::InvalidArgument("service");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Invalid argument: service");

    assert!(display_str.contains("service"));
    assert!(display_str.contains("Invalid argument"));
}

#[test]
fn test_error_display_resolution_failed() {
    let error = FakeError::ResolutionFailed("alloc::string::String");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Cannot resolve the alloc::string::String service");

    assert!(display_str.contains("alloc::string::String"));
    assert!(display_str.contains("Cannot resolve"));
}

#[test]
fn test_error_display_construction_failed() {
    let source = Box::new(FakeError::ResolutionFailed("dyn tests::Ledger"));
    let error = FakeError::ConstructionFailed("tests::Audit", source);
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Cannot construct tests::Audit: Cannot resolve the dyn tests::Ledger service"
    );
}

#[test]
fn test_error_source_chain() {
    let source = Box::new(FakeError::ResolutionFailed("dyn tests::Ledger"));
    let error = FakeError::ConstructionFailed("tests::Audit", source);

    let inner = error.source().expect("construction carries its cause");
    assert_eq!(
        format!("{}", inner),
        "Cannot resolve the dyn tests::Ledger service"
    );

    // Leaf variants have no cause.
    assert!(FakeError::InvalidArgument("service").source().is_none());
    assert!(FakeError::ResolutionFailed("x").source().is_none());
}

#[test]
fn test_error_debug_format() {
    let error = FakeError::ResolutionFailed("TestService");
    let debug_str = format!("{:?}", error);

    assert!(debug_str.contains("ResolutionFailed"));
    assert!(debug_str.contains("TestService"));
}

#[test]
fn test_error_clone() {
    let error = FakeError::ConstructionFailed(
        "SomeType",
        Box::new(FakeError::InvalidArgument("service")),
    );
    let cloned = error.clone();

    assert_eq!(format!("{}", error), format!("{}", cloned));
}

#[test]
fn test_error_as_std_error() {
    let error = FakeError::ResolutionFailed("TestService");
    let _: &dyn std::error::Error = &error;
}

#[test]
fn test_fakeresult_ok() {
    let result: FakeResult<String> = Ok("success".to_string());
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");
}

#[test]
fn test_fakeresult_err() {
    let result: FakeResult<String> = Err(FakeError::ResolutionFailed("TestService"));
    assert!(result.is_err());

    match result {
        Err(FakeError::ResolutionFailed(name)) => assert_eq!(name, "TestService"),
        _ => panic!("Expected ResolutionFailed error"),
    }
}
