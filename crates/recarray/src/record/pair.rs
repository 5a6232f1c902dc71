//! Immutable two-field numeric record.
//!
//! ## Purpose
//!
//! This module defines `Record<K>`, the element type of every record array.
//! A record is a plain `(x, y)` pair of a single numeric kind with a layout
//! fixed at compile time.
//!
//! ## Design notes
//!
//! * **Immutable**: Fields are private; "changing" a record builds a new one.
//! * **Inline**: `#[repr(C)]` with two `K` fields, no tag word, no indirection.
//! * **Total**: Construction and addition never fail.
//!
//! ## Invariants
//!
//! * `size_of::<Record<K>>() == 2 * size_of::<K>()`.
//! * `Record::zero()` is the identity of `add`.
//! * Equality is exact field-by-field value equality; there is no tolerance.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::iter::Sum;
use core::ops::Add;
use num_traits::Zero;

// Internal dependencies
use crate::primitives::kind::Kind;

// ============================================================================
// Record
// ============================================================================

/// An immutable pair of values of the same numeric kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<K> {
    x: K,
    y: K,
}

impl<K: Kind> Record<K> {
    /// Create a record from its two fields.
    #[inline]
    pub fn new(x: K, y: K) -> Self {
        Self { x, y }
    }

    /// The additive identity `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(K::ZERO, K::ZERO)
    }

    /// First field.
    #[inline]
    pub fn x(&self) -> K {
        self.x
    }

    /// Second field.
    #[inline]
    pub fn y(&self) -> K {
        self.y
    }

    /// Copy of this record with `x` replaced.
    #[inline]
    pub fn with_x(self, x: K) -> Self {
        Self::new(x, self.y)
    }

    /// Copy of this record with `y` replaced.
    #[inline]
    pub fn with_y(self, y: K) -> Self {
        Self::new(self.x, y)
    }

    /// Fieldwise sum using the native addition of `K`.
    ///
    /// Also available as the `+` operator.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x.plus(other.x), self.y.plus(other.y))
    }

    /// Bit-for-bit equality.
    ///
    /// Unlike `==`, this distinguishes `0.0` from `-0.0` and treats identical
    /// NaN payloads as equal.
    #[inline]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }

    /// Split the record into its fields.
    #[inline]
    pub fn into_tuple(self) -> (K, K) {
        (self.x, self.y)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<K: Kind> Add for Record<K> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Record::add(self, rhs)
    }
}

impl<K: Kind> Zero for Record<K> {
    fn zero() -> Self {
        Record::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Record::zero()
    }
}

// Folds strictly left to right.
impl<K: Kind> Sum for Record<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Record::zero(), Record::add)
    }
}

impl<'a, K: Kind> Sum<&'a Record<K>> for Record<K> {
    fn sum<I: Iterator<Item = &'a Record<K>>>(iter: I) -> Self {
        iter.fold(Record::zero(), |acc, r| acc.add(*r))
    }
}

impl<K: Kind> From<(K, K)> for Record<K> {
    fn from((x, y): (K, K)) -> Self {
        Self::new(x, y)
    }
}

impl<K: Kind> Display for Record<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
