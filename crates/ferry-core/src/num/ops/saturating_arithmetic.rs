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

use core::ops::{Add, Sub};

/// A trait for types that support saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use ferry_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// assert_eq!(250u8.saturating_add_val(10), u8::MAX);
/// assert_eq!(5u64.saturating_add_val(1), 6);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value, clamping at the type's maximum.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// A trait for types that support saturating subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use ferry_core::num::ops::saturating_arithmetic::SaturatingSubVal;
/// assert_eq!(3u8.saturating_sub_val(10), 0);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value, clamping at zero.
    fn saturating_sub_val(self, v: Self) -> Self;
}

macro_rules! saturating_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    <$t>::saturating_add(self, v)
                }
            }

            impl SaturatingSubVal for $t {
                #[inline(always)]
                fn saturating_sub_val(self, v: $t) -> $t {
                    <$t>::saturating_sub(self, v)
                }
            }
        )*
    };
}

saturating_impl_val!(u8, u16, u32, u64, u128, usize);
