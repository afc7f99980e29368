use crate::scalar::ScalarRepr;
use std::{fmt, marker::PhantomData};

///
/// StrongValue
///
/// Typed wrapper for one primitive value.
/// The marker parameters exist only at the type level, so instantiations
/// with different markers share a layout yet never interchange.
/// `B` is a second, optional axis for domains that already share `A`
/// (a coordinate kind split by coordinate space, say); it defaults to `()`
/// and single-marker instantiations can ignore it.
///

#[repr(transparent)]
pub struct StrongValue<T: ScalarRepr, A, B = ()> {
    value: T,
    _marker: PhantomData<fn() -> (A, B)>,
}

impl<T, A, B> StrongValue<T, A, B>
where
    T: ScalarRepr,
{
    /// Wrap one raw representation value.
    ///
    /// Construction is always explicit; a bare `T` never coerces into the
    /// wrapper on assignment or at a call boundary.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Return the stored raw value, unchanged.
    ///
    /// This is the only way back to the representation type, e.g. for
    /// persistence or display. No `From`/`Into`/`Deref` shortcut exists.
    #[must_use]
    pub const fn get(self) -> T {
        self.value
    }
}

// Trait impls are written out by hand: deriving would bound the marker
// parameters, and markers are uninhabited types that implement nothing.

#[allow(clippy::expl_impl_clone_on_copy)]
impl<T, A, B> Clone for StrongValue<T, A, B>
where
    T: ScalarRepr,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A, B> Copy for StrongValue<T, A, B> where T: ScalarRepr {}

impl<T, A, B> fmt::Debug for StrongValue<T, A, B>
where
    T: ScalarRepr + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrongValue").field(&self.value).finish()
    }
}

impl<T, A, B> Eq for StrongValue<T, A, B> where T: ScalarRepr {}

impl<T, A, B> PartialEq for StrongValue<T, A, B>
where
    T: ScalarRepr,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

///
/// TESTS
///
