use core::marker::PhantomData;

/// Marker that is invariant in `'id`.
///
/// Invariance stops the compiler from shrinking two different brands to a
/// common lifetime, which would let tables from separate scopes be mixed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
