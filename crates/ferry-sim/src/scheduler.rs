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

//! # Ferry Scheduler
//!
//! Drives a simulation over a pair of bank queues. The ferry starts on the
//! left bank. Every iteration it loads a greedy trip from the bank it is on,
//! crosses, and counts the crossing, whether or not any car came along. The
//! loop ends once both banks are empty.
//!
//! ## Termination
//!
//! A crossing from a non-empty bank always moves at least one car, unless the
//! car at the front is longer than the ferry. That car could never leave, so
//! instead of looping forever the scheduler stops with
//! `SimulationError::Stalled`. With stalls excluded, a run needs at most
//! `2 * cars + 1` crossings.
//!
//! Monitors may additionally stop a run early via `SimulationCommand`.

use crate::{
    monitor::{
        ferry_monitor::{FerryMonitor, SimulationCommand},
        no_op::NoOpMonitor,
    },
    queue::BankQueue,
    result::{SimulationOutcome, TerminationReason},
    stats::SimulationStatistics,
    trip::Trip,
};
use ferry_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use ferry_model::{bank::Bank, case::FerryCase, num::FerryNumeric};
use std::time::Instant;
use thiserror::Error;

/// The error type for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError<T>
where
    T: FerryNumeric,
{
    /// The front car of a bank does not fit on the ferry, so that bank can never drain.
    #[error(
        "trip {trip} from the {bank} bank cannot load the front car: {front_length} cm exceeds the capacity of {capacity} cm"
    )]
    Stalled {
        bank: Bank,
        front_length: T,
        capacity: T,
        trip: u64,
    },
}

/// The scheduler state: which bank the ferry is on and how many trips it made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FerryScheduler {
    active_bank: Bank,
    trip_count: u64,
}

impl FerryScheduler {
    /// Creates a scheduler with the ferry on the left bank.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bank the ferry currently waits on.
    #[inline]
    pub fn active_bank(&self) -> Bank {
        self.active_bank
    }

    /// Returns the number of trips made in the current or last run.
    #[inline]
    pub fn trip_count(&self) -> u64 {
        self.trip_count
    }

    /// Puts the ferry back on the left bank with no trips made.
    #[inline]
    pub fn reset(&mut self) {
        self.active_bank = Bank::Left;
        self.trip_count = 0;
    }

    /// Counts the trips needed to drain both queues.
    pub fn count_trips<T>(
        capacity: T,
        left: &mut BankQueue<T>,
        right: &mut BankQueue<T>,
    ) -> Result<u64, SimulationError<T>>
    where
        T: FerryNumeric,
    {
        let mut scheduler = Self::new();
        let outcome = scheduler.run(capacity, left, right, &mut NoOpMonitor)?;
        Ok(outcome.trip_count())
    }

    /// Builds both queues from `case` and simulates it.
    pub fn run_case<T, M>(
        &mut self,
        case: &FerryCase<T>,
        monitor: &mut M,
    ) -> Result<SimulationOutcome<T>, SimulationError<T>>
    where
        T: FerryNumeric,
        M: FerryMonitor<T> + ?Sized,
    {
        let mut left = BankQueue::from_case(case, Bank::Left);
        let mut right = BankQueue::from_case(case, Bank::Right);
        self.run(case.capacity(), &mut left, &mut right, monitor)
    }

    /// Runs the simulation until both queues are empty or a monitor stops it.
    ///
    /// The scheduler is reset first, so the ferry always starts on the left bank.
    pub fn run<T, M>(
        &mut self,
        capacity: T,
        left: &mut BankQueue<T>,
        right: &mut BankQueue<T>,
        monitor: &mut M,
    ) -> Result<SimulationOutcome<T>, SimulationError<T>>
    where
        T: FerryNumeric,
        M: FerryMonitor<T> + ?Sized,
    {
        debug_assert!(
            left.bank() == Bank::Left && right.bank() == Bank::Right,
            "called `FerryScheduler::run` with queues of the {} and {} banks",
            left.bank(),
            right.bank()
        );

        self.reset();
        let start_time = Instant::now();
        let mut stats = SimulationStatistics::default();

        monitor.on_enter_simulation(capacity, left, right);

        let reason = loop {
            if left.is_empty() && right.is_empty() {
                break TerminationReason::Drained;
            }

            if let SimulationCommand::Terminate(reason) = monitor.simulation_command(&stats) {
                break TerminationReason::Aborted(reason);
            }

            let queue = match self.active_bank {
                Bank::Left => &mut *left,
                Bank::Right => &mut *right,
            };

            let load = queue.take_trip(capacity);

            if load.is_empty()
                && let Some(front_length) = queue.peek_front_length()
            {
                stats.set_total_time(start_time.elapsed());
                monitor.on_exit_simulation(&stats);
                return Err(SimulationError::Stalled {
                    bank: self.active_bank,
                    front_length,
                    capacity,
                    trip: self.trip_count.saturating_add_val(1),
                });
            }

            self.trip_count = self.trip_count.saturating_add_val(1);
            let trip = Trip::new(self.trip_count, self.active_bank, capacity, &load);
            stats.on_trip(&trip);
            monitor.on_trip(&trip, &stats);

            self.active_bank = self.active_bank.opposite();
        };

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_simulation(&stats);

        Ok(SimulationOutcome::new(self.trip_count, reason, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{recording::RecordingMonitor, trip_limit::TripLimitMonitor};
    use ferry_model::{car::Car, index::CarIndex};

    /// Builds both queues from `(length, bank)` pairs in arrival order.
    fn queues(capacity: u64, cars: &[(u64, Bank)]) -> (BankQueue<u64>, BankQueue<u64>) {
        let mut left = BankQueue::new(Bank::Left, capacity);
        let mut right = BankQueue::new(Bank::Right, capacity);
        for (i, &(length, bank)) in cars.iter().enumerate() {
            let car = Car::new(CarIndex::new(i), length, bank);
            match bank {
                Bank::Left => left.enqueue(car),
                Bank::Right => right.enqueue(car),
            }
        }
        (left, right)
    }

    fn trips(capacity: u64, cars: &[(u64, Bank)]) -> u64 {
        let (mut left, mut right) = queues(capacity, cars);
        FerryScheduler::count_trips(capacity, &mut left, &mut right).unwrap()
    }

    #[test]
    fn test_single_car_on_left() {
        assert_eq!(trips(100, &[(50, Bank::Left)]), 1);
    }

    #[test]
    fn test_one_car_each_side() {
        assert_eq!(trips(100, &[(50, Bank::Left), (60, Bank::Right)]), 2);
    }

    #[test]
    fn test_second_car_waits_for_return_trip() {
        assert_eq!(trips(100, &[(60, Bank::Left), (60, Bank::Left)]), 3);
    }

    #[test]
    fn test_no_cars_no_trips() {
        assert_eq!(trips(100, &[]), 0);
    }

    #[test]
    fn test_first_trip_is_empty_crossing_when_left_is_empty() {
        assert_eq!(trips(100, &[(100, Bank::Right)]), 2);
    }

    #[test]
    fn test_classic_samples() {
        let mixed = [
            (380, Bank::Left),
            (720, Bank::Left),
            (1340, Bank::Right),
            (1040, Bank::Left),
        ];
        assert_eq!(trips(2000, &mixed), 3);
        assert_eq!(trips(1500, &mixed), 3);

        let all_left: Vec<(u64, Bank)> = mixed.iter().map(|&(l, _)| (l, Bank::Left)).collect();
        assert_eq!(trips(1500, &all_left), 5);

        let all_right: Vec<(u64, Bank)> = mixed.iter().map(|&(l, _)| (l, Bank::Right)).collect();
        assert_eq!(trips(1500, &all_right), 6);
    }

    #[test]
    fn test_recorded_trips_alternate_banks() {
        let (mut left, mut right) = queues(
            100,
            &[(60, Bank::Left), (60, Bank::Left), (30, Bank::Right)],
        );
        let mut recorder = RecordingMonitor::new();
        let mut scheduler = FerryScheduler::new();
        let outcome = scheduler
            .run(100, &mut left, &mut right, &mut recorder)
            .unwrap();

        assert!(outcome.is_drained());
        assert_eq!(outcome.trip_count(), 3);
        let banks: Vec<Bank> = recorder.banks().collect();
        assert_eq!(banks, vec![Bank::Left, Bank::Right, Bank::Left]);
        assert_eq!(scheduler.trip_count(), 3);
        assert_eq!(scheduler.active_bank(), Bank::Right);

        let stats = outcome.statistics();
        assert_eq!(stats.trips, 3);
        assert_eq!(stats.loaded_trips, 3);
        assert_eq!(stats.empty_crossings, 0);
        assert_eq!(stats.cars_moved, 3);
        assert_eq!(stats.length_moved, 150);
        assert_eq!(stats.fullest_load, 60);
    }

    #[test]
    fn test_empty_crossings_are_counted() {
        let (mut left, mut right) = queues(100, &[(100, Bank::Right), (10, Bank::Right)]);
        let mut recorder = RecordingMonitor::new();
        let outcome = FerryScheduler::new()
            .run(100, &mut left, &mut right, &mut recorder)
            .unwrap();

        assert_eq!(outcome.trip_count(), 4);
        let empty: Vec<bool> = recorder.trips().iter().map(Trip::is_empty_crossing).collect();
        assert_eq!(empty, vec![true, false, true, false]);
        assert_eq!(outcome.statistics().empty_crossings, 2);
    }

    #[test]
    fn test_oversized_car_stalls_instead_of_looping() {
        let (mut left, mut right) = queues(100, &[(50, Bank::Right), (150, Bank::Left)]);
        let err = FerryScheduler::count_trips(100, &mut left, &mut right).unwrap_err();
        assert_eq!(
            err,
            SimulationError::Stalled {
                bank: Bank::Left,
                front_length: 150,
                capacity: 100,
                trip: 1
            }
        );
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn test_stall_after_other_bank_drains() {
        let (mut left, mut right) = queues(100, &[(40, Bank::Left), (101, Bank::Right)]);
        let err = FerryScheduler::count_trips(100, &mut left, &mut right).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Stalled {
                bank: Bank::Right,
                trip: 2,
                ..
            }
        ));
        assert!(left.is_empty());
    }

    #[test]
    fn test_trip_limit_aborts() {
        let cars: Vec<(u64, Bank)> = (0..10).map(|_| (100, Bank::Left)).collect();
        let (mut left, mut right) = queues(100, &cars);
        let mut limit = TripLimitMonitor::new(4);
        let outcome = FerryScheduler::new()
            .run(100, &mut left, &mut right, &mut limit)
            .unwrap();

        assert!(outcome.is_aborted());
        assert_eq!(outcome.trip_count(), 4);
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("trip limit of 4 reached".to_string())
        );
        assert_eq!(left.len(), 8);
    }

    #[test]
    fn test_run_resets_state_between_runs() {
        let mut scheduler = FerryScheduler::new();
        let (mut left, mut right) = queues(100, &[(50, Bank::Left)]);
        scheduler
            .run(100, &mut left, &mut right, &mut NoOpMonitor)
            .unwrap();
        assert_eq!(scheduler.active_bank(), Bank::Right);

        let (mut left, mut right) = queues(100, &[(50, Bank::Left)]);
        let outcome = scheduler
            .run(100, &mut left, &mut right, &mut NoOpMonitor)
            .unwrap();
        assert_eq!(outcome.trip_count(), 1);
    }

    #[test]
    fn test_run_case_splits_cars_by_bank() {
        let mut builder = ferry_model::case::FerryCaseBuilder::new(1u64).unwrap();
        builder.add_car(50, Bank::Left).unwrap();
        builder.add_car(60, Bank::Right).unwrap();
        let case = builder.build();

        let outcome = FerryScheduler::new()
            .run_case(&case, &mut NoOpMonitor)
            .unwrap();
        assert_eq!(outcome.trip_count(), 2);
    }

    #[test]
    fn test_stalled_error_message() {
        let err: SimulationError<u64> = SimulationError::Stalled {
            bank: Bank::Right,
            front_length: 150,
            capacity: 100,
            trip: 2,
        };
        assert_eq!(
            err.to_string(),
            "trip 2 from the right bank cannot load the front car: 150 cm exceeds the capacity of 100 cm"
        );
    }
}
