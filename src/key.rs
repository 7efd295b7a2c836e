//! Service key type for the auto-faking container.

use std::any::TypeId;

/// Key for service storage and lookup.
///
/// A key pairs the `TypeId` used for lookup with the `std::any::type_name`
/// used for diagnostics. Keys work for concrete types and for trait object
/// types alike, since both carry a `TypeId`:
///
/// ```rust
/// use autofaker::ServiceKey;
///
/// trait Database: Send + Sync {}
///
/// let concrete = ServiceKey::of::<String>();
/// let object = ServiceKey::of::<dyn Database>();
/// assert_ne!(concrete, object);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ServiceKey {
    id: TypeId,
    name: &'static str,
}

impl ServiceKey {
    /// Creates the key for `T`.
    #[inline(always)]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name for error messages.
    ///
    /// ```rust
    /// use autofaker::ServiceKey;
    ///
    /// let key = ServiceKey::of::<String>();
    /// assert_eq!(key.display_name(), "alloc::string::String");
    /// ```
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

// Equality and hashing use the TypeId only; the name is diagnostics.
impl PartialEq for ServiceKey {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceKey {}

impl std::hash::Hash for ServiceKey {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
