//! Type constructor emulation through Generic Associated Types.
//!
//! Rust has no higher-kinded types, so a container such as `Deque<_>` cannot
//! be named without its element type. [`TypeConstructor`] recovers the two
//! facts the folding abstraction needs: the element type a container is
//! applied to (`Inner`), and the same container applied to another element
//! type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use strata::typeclass::TypeConstructor;
//!
//! fn rewrap<C: TypeConstructor>(_container: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = vec![1, 2, 3];
//! let strings: Vec<String> = rewrap(&numbers);
//! assert!(strings.is_empty());
//! ```

/// A container type applied to some element type.
///
/// # Laws
///
/// `<C as TypeConstructor>::WithType<C::Inner>` names the same type as `C`.
pub trait TypeConstructor {
    /// The element type the container currently holds.
    type Inner;

    /// The same container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
