//! Branding tokens for per-call algorithm state.
//!
//! A `GhostToken<'brand>` is a zero-sized capability tied to a fresh, invariant
//! lifetime. Structures branded with `'brand` (for example
//! [`BrandedDisjointSet`](crate::collections::BrandedDisjointSet)) can only be
//! touched while that token is alive, and the token only exists inside the
//! closure passed to [`GhostToken::new`]. Algorithms use this to guarantee that
//! scratch tables built for one call cannot leak into another.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`. Mutating a
//! branded structure requires `&mut GhostToken<'brand>`, so at most one mutator
//! exists per brand at any time.

/// Invariant lifetime markers used for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token that scopes branded structures.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and runs `f` with it.
    ///
    /// Each call introduces a brand that no other scope can name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::{BrandedDisjointSet, GhostToken};
    ///
    /// let joined = GhostToken::new(|mut token| {
    ///     let mut sets = BrandedDisjointSet::with_singletons(&mut token, 2);
    ///     sets.union(&mut token, 0, 1)
    /// });
    /// assert!(joined);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}
