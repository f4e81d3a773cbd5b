//! Shared, immutable heap storage for value payloads.
//!
//! Every heap-backed value (strings, maps, functions, lazy cells) lives
//! behind a `Heap<T>`. The constructor is private to the value module, so
//! values can only be created through the factory methods on `Value`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, thread-safe pointer to an immutable payload.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T: ?Sized> Heap<T> {
    #[inline]
    pub(super) fn from_arc(inner: Arc<T>) -> Self {
        Heap(inner)
    }

    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Self::address(this) == Self::address(other)
    }

    /// Address of the allocation, without any vtable metadata.
    ///
    /// Identity for functions is defined by this address.
    #[inline]
    pub fn address(this: &Self) -> usize {
        Arc::as_ptr(&this.0).cast::<()>() as usize
    }
}

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
