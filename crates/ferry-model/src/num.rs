// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Length Numeric Trait
//!
//! Unified bounds for the integer type carrying car lengths and ferry
//! capacities. Lengths are unsigned, parse from input tokens and support the
//! by-value checked and saturating arithmetic from `ferry_core`, so the
//! greedy pack and the meters-to-centimeters conversion can detect overflow
//! instead of wrapping.

use ferry_core::num::{
    constants::Zero,
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::{hash::Hash, str::FromStr};

/// A trait alias for the length types usable in the simulation.
///
/// These are the unsigned primitives `u8` through `u128` and `usize`.
pub trait FerryNumeric:
    PrimInt
    + Unsigned
    + FromPrimitive
    + FromStr
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedMulVal
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + Send
    + Sync
    + Hash
    + 'static
{
}

impl<T> FerryNumeric for T where
    T: PrimInt
        + Unsigned
        + FromPrimitive
        + FromStr
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
            + checked_arithmetic::CheckedAddVal
            + checked_arithmetic::CheckedMulVal
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + Send
        + Sync
        + Hash
        + 'static
{
}

/// Number of centimeters in a meter.
pub const CENTIMETERS_PER_METER: u32 = 100;

/// Converts a ferry length in meters into a capacity in centimeters.
///
/// Returns `None` if the result does not fit into `T`.
///
/// # Examples
///
/// ```rust
/// # use ferry_model::num::meters_to_centimeters;
/// assert_eq!(meters_to_centimeters(20u32), Some(2000));
/// assert_eq!(meters_to_centimeters(3u8), None);
/// ```
#[inline]
pub fn meters_to_centimeters<T>(meters: T) -> Option<T>
where
    T: FerryNumeric,
{
    let factor = T::from_u32(CENTIMETERS_PER_METER)?;
    meters.checked_mul_val(factor)
}
