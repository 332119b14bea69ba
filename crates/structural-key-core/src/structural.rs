//! Structural values: opaque, comparable and hashable representations of
//! a value's logical content.
//!
//! A [`StructuralValue`] may hold any `Eq + Hash + Debug + Send + Sync`
//! type. Two structural values are equal iff they hold the same concrete
//! type and those values are equal. Comparison is therefore untyped with
//! respect to the key type `K`: coders for different `K` that emit the same
//! representation type produce comparable structural values.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bytes::Bytes;

/// Object-safe view of a structural representation.
///
/// Implemented for every `T: Any + Eq + Hash + Debug + Send + Sync`; there
/// is no need to implement it by hand.
pub trait StructuralRepr: Any + fmt::Debug + Send + Sync {
    /// Upcast to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Equality against another representation of possibly different type.
    fn dyn_eq(&self, other: &dyn StructuralRepr) -> bool;

    /// Feed this representation into `state`.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T> StructuralRepr for T
where
    T: Any + Eq + Hash + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn StructuralRepr) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

/// An immutable, cheaply clonable structural representation.
#[derive(Clone)]
pub struct StructuralValue(Arc<dyn StructuralRepr>);

impl StructuralValue {
    /// Wrap a representation.
    pub fn new<T>(repr: T) -> Self
    where
        T: Any + Eq + Hash + fmt::Debug + Send + Sync,
    {
        Self(Arc::new(repr))
    }

    /// Wrap an encoded byte sequence as the representation.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self::new(StructuralBytes(bytes.into()))
    }

    /// Borrow the representation as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Whether the representation is of concrete type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }
}

impl PartialEq for StructuralValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.dyn_eq(&*other.0)
    }
}

impl Eq for StructuralValue {}

impl Hash for StructuralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.dyn_hash(state);
    }
}

impl fmt::Debug for StructuralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Encoded bytes used as a structural representation.
///
/// This is the representation produced by the default
/// [`Coder::structural_value`](crate::Coder::structural_value).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StructuralBytes(pub Bytes);

impl StructuralBytes {
    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for StructuralBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StructuralBytes({})", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for StructuralBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
