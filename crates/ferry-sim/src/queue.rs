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

//! FIFO queue of cars waiting on one riverbank.
//!
//! `BankQueue` owns the cars of a single bank in arrival order. Cars enter at
//! the back and leave from the front, and the only bulk removal is
//! `take_trip`, the greedy pack that moves the longest prefix of the queue
//! whose total length fits into the ferry. Cars are never skipped or
//! reordered to obtain a tighter fit.
//!
//! The queue is backed by a `VecDeque`, giving amortized O(1) push at the
//! back and pop at the front.

use ferry_model::{bank::Bank, car::Car, case::FerryCase, index::CarIndex, num::FerryNumeric};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// The cars moved by one call to `BankQueue::take_trip`, in loading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLoad<T> {
    cars: SmallVec<[Car<T>; 4]>,
    length: T,
}

impl<T> TripLoad<T>
where
    T: FerryNumeric,
{
    #[inline]
    fn empty() -> Self {
        Self {
            cars: SmallVec::new(),
            length: T::ZERO,
        }
    }

    /// Returns the loaded cars in the order they left the queue.
    #[inline]
    pub fn cars(&self) -> &[Car<T>] {
        &self.cars
    }

    /// Returns the number of loaded cars.
    #[inline]
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// Returns `true` if no car was loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Returns the total length of the loaded cars.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Returns the indices of the loaded cars in loading order.
    #[inline]
    pub fn car_indices(&self) -> impl Iterator<Item = CarIndex> + '_ {
        self.cars.iter().map(|car| car.index())
    }
}

/// The queue of cars waiting on one bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankQueue<T> {
    bank: Bank,
    capacity: T,
    cars: VecDeque<Car<T>>,
}

impl<T> BankQueue<T>
where
    T: FerryNumeric,
{
    /// Creates an empty queue for `bank` served by a ferry of `capacity` centimeters.
    #[inline]
    pub fn new(bank: Bank, capacity: T) -> Self {
        Self {
            bank,
            capacity,
            cars: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `num_cars` cars.
    #[inline]
    pub fn preallocated(bank: Bank, capacity: T, num_cars: usize) -> Self {
        Self {
            bank,
            capacity,
            cars: VecDeque::with_capacity(num_cars),
        }
    }

    /// Creates the queue of `bank` holding that bank's cars of `case` in arrival order.
    pub fn from_case(case: &FerryCase<T>, bank: Bank) -> Self {
        let mut queue = Self::new(bank, case.capacity());
        queue.extend(case.cars_on(bank).copied());
        queue
    }

    /// Returns the bank this queue belongs to.
    #[inline]
    pub fn bank(&self) -> Bank {
        self.bank
    }

    /// Returns the ferry's per-trip capacity in centimeters.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of waiting cars.
    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns `true` if no car is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Appends a car at the back of the queue.
    ///
    /// No capacity check happens here; a car longer than the ferry is
    /// accepted and simply never leaves through `take_trip`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the car has zero length or waits on the
    /// other bank.
    #[inline]
    pub fn enqueue(&mut self, car: Car<T>) {
        debug_assert!(
            car.length() > T::zero(),
            "called `BankQueue::enqueue` with zero-length car {}",
            car.index()
        );
        debug_assert!(
            car.bank() == self.bank,
            "called `BankQueue::enqueue` on the {} bank with car {} waiting on the {} bank",
            self.bank,
            car.index(),
            car.bank()
        );

        self.cars.push_back(car);
    }

    /// Returns the first car in line.
    #[inline]
    pub fn front(&self) -> Option<&Car<T>> {
        self.cars.front()
    }

    /// Returns the length of the first car in line, `None` if the queue is empty.
    #[inline]
    pub fn peek_front_length(&self) -> Option<T> {
        self.cars.front().map(Car::length)
    }

    /// Returns the length of the last car in line, `None` if the queue is empty.
    #[inline]
    pub fn peek_back_length(&self) -> Option<T> {
        self.cars.back().map(Car::length)
    }

    /// Returns the summed length of all waiting cars, saturating at `T::max_value()`.
    pub fn total_length(&self) -> T {
        self.cars
            .iter()
            .fold(T::ZERO, |acc, car| acc.saturating_add_val(car.length()))
    }

    /// Returns an iterator over the waiting cars, front to back.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Car<T>> {
        self.cars.iter()
    }

    /// Loads a trip's worth of cars from the front of the queue.
    ///
    /// Cars are taken front to back while the accumulated length stays within
    /// `capacity`. Loading stops at the first car that does not fit, which
    /// stays at the front. If that is the very first car, nothing is loaded.
    pub fn take_trip(&mut self, capacity: T) -> TripLoad<T> {
        let mut load: TripLoad<T> = TripLoad::empty();

        while let Some(length) = self.peek_front_length() {
            let Some(accumulated) = load
                .length
                .checked_add_val(length)
                .filter(|&accumulated| accumulated <= capacity)
            else {
                break;
            };

            match self.cars.pop_front() {
                Some(car) => {
                    load.length = accumulated;
                    load.cars.push(car);
                }
                None => break,
            }
        }

        load
    }

    /// Loads a trip's worth of cars using the queue's own capacity.
    #[inline]
    pub fn load_trip(&mut self) -> TripLoad<T> {
        self.take_trip(self.capacity)
    }
}

impl<T> Extend<Car<T>> for BankQueue<T>
where
    T: FerryNumeric,
{
    fn extend<I: IntoIterator<Item = Car<T>>>(&mut self, iter: I) {
        for car in iter {
            self.enqueue(car);
        }
    }
}

impl<'a, T> IntoIterator for &'a BankQueue<T>
where
    T: FerryNumeric,
{
    type Item = &'a Car<T>;
    type IntoIter = std::collections::vec_deque::Iter<'a, Car<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Display for BankQueue<T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BankQueue({}: [", self.bank)?;
        for (i, car) in self.cars.iter().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{}", car.length())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_model::case::FerryCaseBuilder;

    fn queue_of(bank: Bank, capacity: u64, lengths: &[u64]) -> BankQueue<u64> {
        let mut queue = BankQueue::new(bank, capacity);
        for (i, &length) in lengths.iter().enumerate() {
            queue.enqueue(Car::new(CarIndex::new(i), length, bank));
        }
        queue
    }

    fn lengths(queue: &BankQueue<u64>) -> Vec<u64> {
        queue.iter().map(|c| c.length()).collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = BankQueue::<u64>::new(Bank::Left, 100);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek_front_length(), None);
        assert_eq!(queue.peek_back_length(), None);
        assert_eq!(queue.total_length(), 0);
    }

    #[test]
    fn test_enqueue_appends_at_back() {
        let queue = queue_of(Bank::Right, 100, &[30, 40, 50]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek_front_length(), Some(30));
        assert_eq!(queue.peek_back_length(), Some(50));
        assert_eq!(queue.total_length(), 120);
        assert_eq!(queue.to_string(), "BankQueue(right: [30 <- 40 <- 50])");
    }

    #[test]
    fn test_take_trip_packs_greedy_prefix() {
        let mut queue = queue_of(Bank::Left, 100, &[30, 40, 50, 10]);
        let load = queue.take_trip(100);

        assert_eq!(load.num_cars(), 2);
        assert_eq!(load.length(), 70);
        // 10 would fit after 50 is skipped, but cars are never skipped.
        assert_eq!(lengths(&queue), vec![50, 10]);
    }

    #[test]
    fn test_take_trip_exact_fit() {
        let mut queue = queue_of(Bank::Left, 100, &[60, 40, 1]);
        let load = queue.take_trip(100);
        assert_eq!(load.length(), 100);
        assert_eq!(lengths(&queue), vec![1]);
    }

    #[test]
    fn test_take_trip_drains_queue() {
        let mut queue = queue_of(Bank::Left, 100, &[10, 20]);
        let load = queue.take_trip(100);
        assert_eq!(load.num_cars(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_trip_on_empty_queue() {
        let mut queue = BankQueue::<u64>::new(Bank::Right, 100);
        let load = queue.take_trip(100);
        assert!(load.is_empty());
        assert_eq!(load.length(), 0);
    }

    #[test]
    fn test_oversized_front_car_blocks_without_error() {
        let mut queue = queue_of(Bank::Left, 100, &[150, 10]);
        let load = queue.take_trip(100);
        assert!(load.is_empty());
        assert_eq!(lengths(&queue), vec![150, 10]);
    }

    #[test]
    fn test_take_trip_preserves_fifo_order() {
        let mut queue = queue_of(Bank::Left, 100, &[20, 30, 40, 50, 60]);
        let first: Vec<usize> = queue.take_trip(100).car_indices().map(|i| i.get()).collect();
        let second: Vec<usize> = queue.take_trip(100).car_indices().map(|i| i.get()).collect();
        let third: Vec<usize> = queue.take_trip(100).car_indices().map(|i| i.get()).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(second, vec![3]);
        assert_eq!(third, vec![4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_trip_does_not_overflow() {
        let mut queue = BankQueue::new(Bank::Left, u8::MAX);
        queue.enqueue(Car::new(CarIndex::new(0), 200u8, Bank::Left));
        queue.enqueue(Car::new(CarIndex::new(1), 100u8, Bank::Left));
        let load = queue.take_trip(u8::MAX);
        assert_eq!(load.length(), 200);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_load_trip_uses_queue_capacity() {
        let mut queue = queue_of(Bank::Right, 50, &[30, 30]);
        assert_eq!(queue.load_trip().num_cars(), 1);
        assert_eq!(queue.load_trip().num_cars(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_from_case_splits_by_bank() {
        let mut builder = FerryCaseBuilder::new(1u64).unwrap();
        builder.add_car(50, Bank::Left).unwrap();
        builder.add_car(60, Bank::Right).unwrap();
        builder.add_car(70, Bank::Left).unwrap();
        let case = builder.build();

        let left = BankQueue::from_case(&case, Bank::Left);
        let right = BankQueue::from_case(&case, Bank::Right);
        assert_eq!(left.capacity(), 100);
        assert_eq!(lengths(&left), vec![50, 70]);
        assert_eq!(lengths(&right), vec![60]);
        assert_eq!(left.front().map(|c| c.index()), Some(CarIndex::new(0)));
    }
}
