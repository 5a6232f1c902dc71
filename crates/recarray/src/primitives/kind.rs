//! Numeric kinds a record can be instantiated over.
//!
//! ## Purpose
//!
//! This module defines the sealed [`Kind`] trait. A kind is a concrete numeric
//! representation fixed at compile time; every `Record<K>` and
//! `FixedRecordArray<K>` has exactly one layout per kind.
//!
//! ## Arithmetic semantics
//!
//! | Kind  | Addition                                   | Associative |
//! |-------|--------------------------------------------|-------------|
//! | `i32` | two's-complement wrapping                  | yes         |
//! | `i64` | two's-complement wrapping                  | yes         |
//! | `f32` | IEEE-754, round-to-nearest-even            | no          |
//! | `f64` | IEEE-754, round-to-nearest-even            | no          |
//!
//! Integer addition wraps in both debug and release builds. Floating addition
//! propagates NaN and overflows to ±∞. Nothing is trapped.
//!
//! ## Invariants
//!
//! * The set of kinds is closed; the trait cannot be implemented downstream.
//! * `ZERO` is the additive identity of `plus`.
//!
//! ## Non-goals
//!
//! * Arbitrary-precision or dynamically typed numbers.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::WrappingAdd;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

// ============================================================================
// Kind Trait
// ============================================================================

/// A concrete, compile-time-fixed numeric representation.
pub trait Kind:
    sealed::Sealed + Copy + PartialEq + Debug + Display + Send + Sync + 'static
{
    /// Human-readable name of the kind (e.g. `"i64"`).
    const NAME: &'static str;

    /// Whether `plus` is associative for every pair of values.
    ///
    /// Parallel reductions are only allowed to reorder additions when this is `true`.
    const ASSOCIATIVE: bool;

    /// Additive identity.
    const ZERO: Self;

    /// Native addition of the kind (see module docs for semantics).
    fn plus(self, rhs: Self) -> Self;

    /// Raw bit pattern, widened to 64 bits.
    fn to_bits(self) -> u64;
}

macro_rules! impl_integer_kind {
    ($t:ty) => {
        impl Kind for $t {
            const NAME: &'static str = stringify!($t);
            const ASSOCIATIVE: bool = true;
            const ZERO: Self = 0;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn to_bits(self) -> u64 {
                self as u64
            }
        }
    };
}

macro_rules! impl_float_kind {
    ($t:ty) => {
        impl Kind for $t {
            const NAME: &'static str = stringify!($t);
            const ASSOCIATIVE: bool = false;
            const ZERO: Self = 0.0;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn to_bits(self) -> u64 {
                <$t>::to_bits(self) as u64
            }
        }
    };
}

impl_integer_kind!(i32);
impl_integer_kind!(i64);
impl_float_kind!(f32);
impl_float_kind!(f64);
