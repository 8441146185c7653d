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

//! Validated test cases.
//!
//! A `FerryCase` is the immutable description of one simulation run: the
//! ferry's length as given in meters, the derived capacity in centimeters, and
//! every car in arrival order. It is produced by `FerryCaseBuilder`, which
//! checks lengths eagerly so the simulation never has to.

use crate::{
    bank::Bank,
    car::Car,
    index::CarIndex,
    num::{FerryNumeric, meters_to_centimeters},
};
use thiserror::Error;

/// Upper bound on the car slots `FerryCaseBuilder::preallocated` reserves.
pub const MAX_PREALLOCATED_CARS: usize = 1024;

/// The error type for building a `FerryCase`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseBuildError<T>
where
    T: FerryNumeric,
{
    /// The ferry length is zero.
    #[error("ferry length must be a positive number of meters")]
    InvalidFerryLength,
    /// The ferry length in centimeters does not fit into the length type.
    #[error("ferry length of {ferry_length} m overflows the centimeter capacity")]
    CapacityOverflow { ferry_length: T },
    /// A car has zero length.
    #[error("car {} has zero length", .car_index.get())]
    InvalidCarLength { car_index: CarIndex },
    /// A car is longer than the ferry and could never be loaded.
    #[error(
        "car {} is {length} cm long but the ferry only holds {capacity} cm",
        .car_index.get()
    )]
    OversizedCar {
        car_index: CarIndex,
        length: T,
        capacity: T,
    },
}

/// One validated test case.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FerryCase<T> {
    ferry_length: T,
    capacity: T,
    cars: Vec<Car<T>>,
}

impl<T> FerryCase<T>
where
    T: FerryNumeric,
{
    /// Returns the ferry length in meters, as it was read.
    #[inline]
    pub fn ferry_length(&self) -> T {
        self.ferry_length
    }

    /// Returns the per-trip capacity in centimeters.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns all cars in arrival order.
    #[inline]
    pub fn cars(&self) -> &[Car<T>] {
        &self.cars
    }

    /// Returns the number of cars in the case.
    #[inline]
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// Returns `true` if no car is waiting on either bank.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Returns the car at `car_index`.
    ///
    /// # Panics
    ///
    /// Panics if `car_index` is out of bounds.
    #[inline]
    pub fn car(&self, car_index: CarIndex) -> &Car<T> {
        let index = car_index.get();
        debug_assert!(
            index < self.cars.len(),
            "called `FerryCase::car` with car index out of bounds: the len is {} but the index is {}",
            self.cars.len(),
            index
        );

        &self.cars[index]
    }

    /// Returns the cars waiting on `bank`, in arrival order.
    #[inline]
    pub fn cars_on(&self, bank: Bank) -> impl Iterator<Item = &Car<T>> + '_ {
        self.cars.iter().filter(move |car| car.bank() == bank)
    }
}

impl<T> std::fmt::Debug for FerryCase<T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FerryCase")
            .field("ferry_length", &self.ferry_length)
            .field("capacity", &self.capacity)
            .field("num_cars", &self.cars.len())
            .finish()
    }
}

impl<T> std::fmt::Display for FerryCase<T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FerryCase(length: {} m, capacity: {} cm, cars: {} left / {} right)",
            self.ferry_length,
            self.capacity,
            self.cars_on(Bank::Left).count(),
            self.cars_on(Bank::Right).count()
        )
    }
}

/// A builder for `FerryCase`, fed car by car while the input is parsed.
#[derive(Clone, Debug)]
pub struct FerryCaseBuilder<T> {
    ferry_length: T,
    capacity: T,
    reject_oversized: bool,
    cars: Vec<Car<T>>,
}

impl<T> FerryCaseBuilder<T>
where
    T: FerryNumeric,
{
    /// Creates a builder for a ferry of `ferry_length` meters.
    ///
    /// Oversized cars are rejected by default.
    pub fn new(ferry_length: T) -> Result<Self, CaseBuildError<T>> {
        if ferry_length == T::zero() {
            return Err(CaseBuildError::InvalidFerryLength);
        }

        let capacity = meters_to_centimeters(ferry_length)
            .ok_or(CaseBuildError::CapacityOverflow { ferry_length })?;

        Ok(Self {
            ferry_length,
            capacity,
            reject_oversized: true,
            cars: Vec::new(),
        })
    }

    /// Creates a builder with room for `num_cars` cars.
    ///
    /// The count usually comes straight from the input, so at most
    /// `MAX_PREALLOCATED_CARS` slots are reserved up front.
    pub fn preallocated(ferry_length: T, num_cars: usize) -> Result<Self, CaseBuildError<T>> {
        let mut builder = Self::new(ferry_length)?;
        builder.cars.reserve(num_cars.min(MAX_PREALLOCATED_CARS));
        Ok(builder)
    }

    /// Configures whether cars longer than the capacity are rejected.
    #[inline]
    pub fn reject_oversized(mut self, yes: bool) -> Self {
        self.reject_oversized = yes;
        self
    }

    /// Returns the capacity in centimeters derived from the ferry length.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of cars added so far.
    #[inline]
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// Appends the next arriving car and returns its index.
    pub fn add_car(&mut self, length: T, bank: Bank) -> Result<CarIndex, CaseBuildError<T>> {
        let car_index = CarIndex::new(self.cars.len());

        if length == T::zero() {
            return Err(CaseBuildError::InvalidCarLength { car_index });
        }

        let car = Car::new(car_index, length, bank);
        if self.reject_oversized && !car.fits(self.capacity) {
            return Err(CaseBuildError::OversizedCar {
                car_index,
                length,
                capacity: self.capacity,
            });
        }

        self.cars.push(car);
        Ok(car_index)
    }

    /// Finalizes the case.
    #[inline]
    pub fn build(self) -> FerryCase<T> {
        FerryCase {
            ferry_length: self.ferry_length,
            capacity: self.capacity,
            cars: self.cars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_converts_meters_to_centimeters() {
        let case = FerryCaseBuilder::new(20u64).unwrap().build();
        assert_eq!(case.ferry_length(), 20);
        assert_eq!(case.capacity(), 2000);
        assert!(case.is_empty());
    }

    #[test]
    fn test_builder_rejects_zero_ferry_length() {
        assert_eq!(
            FerryCaseBuilder::new(0u64).unwrap_err(),
            CaseBuildError::InvalidFerryLength
        );
    }

    #[test]
    fn test_builder_rejects_capacity_overflow() {
        assert_eq!(
            FerryCaseBuilder::new(3u8).unwrap_err(),
            CaseBuildError::CapacityOverflow { ferry_length: 3 }
        );
    }

    #[test]
    fn test_cars_keep_arrival_order_and_banks() {
        let mut builder = FerryCaseBuilder::new(1u32).unwrap();
        assert_eq!(builder.add_car(50, Bank::Left).unwrap(), CarIndex::new(0));
        assert_eq!(builder.add_car(60, Bank::Right).unwrap(), CarIndex::new(1));
        assert_eq!(builder.add_car(40, Bank::Left).unwrap(), CarIndex::new(2));
        let case = builder.build();

        assert_eq!(case.num_cars(), 3);
        let left: Vec<u32> = case.cars_on(Bank::Left).map(|c| c.length()).collect();
        let right: Vec<u32> = case.cars_on(Bank::Right).map(|c| c.length()).collect();
        assert_eq!(left, vec![50, 40]);
        assert_eq!(right, vec![60]);
        assert_eq!(case.car(CarIndex::new(1)).bank(), Bank::Right);
        assert_eq!(
            case.to_string(),
            "FerryCase(length: 1 m, capacity: 100 cm, cars: 2 left / 1 right)"
        );
    }

    #[test]
    fn test_zero_length_car_is_rejected() {
        let mut builder = FerryCaseBuilder::new(1u32).unwrap();
        builder.add_car(10, Bank::Left).unwrap();
        assert_eq!(
            builder.add_car(0, Bank::Left).unwrap_err(),
            CaseBuildError::InvalidCarLength {
                car_index: CarIndex::new(1)
            }
        );
    }

    #[test]
    fn test_oversized_car_policy() {
        let mut strict = FerryCaseBuilder::new(1u32).unwrap();
        assert_eq!(strict.add_car(100, Bank::Left).unwrap(), CarIndex::new(0));
        assert_eq!(
            strict.add_car(101, Bank::Right).unwrap_err(),
            CaseBuildError::OversizedCar {
                car_index: CarIndex::new(1),
                length: 101,
                capacity: 100
            }
        );

        let mut lenient = FerryCaseBuilder::new(1u32).unwrap().reject_oversized(false);
        assert!(lenient.add_car(101, Bank::Right).is_ok());
        assert_eq!(lenient.build().num_cars(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err: CaseBuildError<u32> = CaseBuildError::OversizedCar {
            car_index: CarIndex::new(2),
            length: 150,
            capacity: 100,
        };
        assert_eq!(
            err.to_string(),
            "car 2 is 150 cm long but the ferry only holds 100 cm"
        );

        let err: CaseBuildError<u32> = CaseBuildError::InvalidCarLength {
            car_index: CarIndex::new(4),
        };
        assert_eq!(err.to_string(), "car 4 has zero length");
    }

    #[test]
    fn test_preallocation_is_capped() {
        let builder = FerryCaseBuilder::preallocated(1u64, usize::MAX).unwrap();
        assert_eq!(builder.num_cars(), 0);
        assert!(builder.cars.capacity() < 2 * MAX_PREALLOCATED_CARS);
    }
}
