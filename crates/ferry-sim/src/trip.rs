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

use crate::queue::TripLoad;
use ferry_model::{bank::Bank, index::CarIndex, num::FerryNumeric};
use smallvec::SmallVec;

/// The record of one completed crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip<T> {
    number: u64,
    bank: Bank,
    capacity: T,
    load: T,
    cars: SmallVec<[CarIndex; 8]>,
}

impl<T> Trip<T>
where
    T: FerryNumeric,
{
    /// Creates the record of trip `number` departing from `bank` carrying `load`.
    pub fn new(number: u64, bank: Bank, capacity: T, load: &TripLoad<T>) -> Self {
        debug_assert!(
            load.length() <= capacity,
            "called `Trip::new` with a load of {} exceeding the capacity of {}",
            load.length(),
            capacity
        );

        Self {
            number,
            bank,
            capacity,
            load: load.length(),
            cars: load.car_indices().collect(),
        }
    }

    /// Returns the 1-based position of this trip within the simulation.
    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Returns the bank the ferry departed from.
    #[inline]
    pub fn bank(&self) -> Bank {
        self.bank
    }

    /// Returns the bank the ferry arrived at.
    #[inline]
    pub fn destination(&self) -> Bank {
        self.bank.opposite()
    }

    /// Returns the ferry's capacity during this trip.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the summed length of the cars on board.
    #[inline]
    pub fn load(&self) -> T {
        self.load
    }

    /// Returns the unused deck length.
    #[inline]
    pub fn slack(&self) -> T {
        self.capacity.saturating_sub_val(self.load)
    }

    /// Returns the cars on board in loading order.
    #[inline]
    pub fn cars(&self) -> &[CarIndex] {
        &self.cars
    }

    /// Returns the number of cars on board.
    #[inline]
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// Returns `true` if the ferry crossed without cars.
    #[inline]
    pub fn is_empty_crossing(&self) -> bool {
        self.cars.is_empty()
    }
}

impl<T> std::fmt::Display for Trip<T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trip #{} {} -> {}: {} car(s), {}/{} cm",
            self.number,
            self.bank,
            self.destination(),
            self.cars.len(),
            self.load,
            self.capacity
        )
    }
}
