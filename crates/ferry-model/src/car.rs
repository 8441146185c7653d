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

use crate::{bank::Bank, index::CarIndex, num::FerryNumeric};

/// A car waiting for the ferry.
///
/// Cars are immutable: once read from the input they are only ever moved,
/// first into the queue of their bank and then onto the ferry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Car<T> {
    index: CarIndex,
    length: T,
    bank: Bank,
}

impl<T> Car<T>
where
    T: FerryNumeric,
{
    /// Creates a new car.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `length` is zero.
    #[inline]
    pub fn new(index: CarIndex, length: T, bank: Bank) -> Self {
        debug_assert!(
            length > T::zero(),
            "called `Car::new` with a zero length for car {}",
            index
        );

        Self {
            index,
            length,
            bank,
        }
    }

    /// Returns the arrival position of the car within its case.
    #[inline]
    pub fn index(&self) -> CarIndex {
        self.index
    }

    /// Returns the length of the car in centimeters.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Returns the bank the car waits on.
    #[inline]
    pub fn bank(&self) -> Bank {
        self.bank
    }

    /// Returns `true` if the car fits on a ferry of the given capacity.
    #[inline]
    pub fn fits(&self, capacity: T) -> bool {
        self.length <= capacity
    }
}

impl<T> std::fmt::Display for Car<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Car({}, {} cm, {})", self.index.get(), self.length, self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let car = Car::new(CarIndex::new(4), 250u32, Bank::Right);
        assert_eq!(car.index(), CarIndex::new(4));
        assert_eq!(car.length(), 250);
        assert_eq!(car.bank(), Bank::Right);
        assert_eq!(car.to_string(), "Car(4, 250 cm, right)");
    }

    #[test]
    fn test_fits_is_inclusive() {
        let car = Car::new(CarIndex::new(0), 100u64, Bank::Left);
        assert!(car.fits(100));
        assert!(car.fits(101));
        assert!(!car.fits(99));
    }
}
