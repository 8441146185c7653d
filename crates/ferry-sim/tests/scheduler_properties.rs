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

//! Property-based tests for the ferry scheduler.

use ferry_model::{
    bank::Bank,
    case::{FerryCase, FerryCaseBuilder},
    index::CarIndex,
};
use ferry_sim::{
    monitor::recording::RecordingMonitor,
    queue::BankQueue,
    scheduler::FerryScheduler,
    trip::Trip,
};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// A ferry of 1..=30 meters with up to 40 cars that all fit on board.
fn arbitrary_case() -> impl Strategy<Value = FerryCase<u64>> {
    (1u64..=30).prop_flat_map(|meters| {
        let capacity = meters * 100;
        let car = (1u64..=capacity, prop::bool::ANY)
            .prop_map(|(length, right)| (length, if right { Bank::Right } else { Bank::Left }));
        prop::collection::vec(car, 0..40).prop_map(move |cars| {
            let mut builder = FerryCaseBuilder::new(meters).expect("valid ferry length");
            for (length, bank) in cars {
                builder.add_car(length, bank).expect("car fits");
            }
            builder.build()
        })
    })
}

fn simulate(case: &FerryCase<u64>) -> (u64, Vec<Trip<u64>>) {
    let mut recorder = RecordingMonitor::new();
    let outcome = FerryScheduler::new()
        .run_case(case, &mut recorder)
        .expect("valid cases never stall");
    assert!(outcome.is_drained());
    (outcome.trip_count(), recorder.into_trips())
}

/// Reference model: the same rules written as a plain loop over slices.
fn reference_trip_count(case: &FerryCase<u64>) -> u64 {
    let capacity = case.capacity();
    let mut banks: [Vec<u64>; 2] = [
        case.cars_on(Bank::Left).map(|c| c.length()).collect(),
        case.cars_on(Bank::Right).map(|c| c.length()).collect(),
    ];
    let mut side = 0;
    let mut trips = 0;
    while !banks[0].is_empty() || !banks[1].is_empty() {
        let mut load = 0;
        let mut taken = 0;
        for &length in &banks[side] {
            if load + length > capacity {
                break;
            }
            load += length;
            taken += 1;
        }
        banks[side].drain(..taken);
        trips += 1;
        side = 1 - side;
    }
    trips
}

// =============================================================================
// Scheduler properties
// =============================================================================

proptest! {
    #[test]
    fn prop_terminates_with_at_least_one_trip_per_nonempty_case(case in arbitrary_case()) {
        let (trips, _) = simulate(&case);
        if case.is_empty() {
            prop_assert_eq!(trips, 0);
        } else {
            prop_assert!(trips >= 1);
        }
        prop_assert!(trips <= 2 * case.num_cars() as u64 + 1);
    }

    #[test]
    fn prop_every_car_is_moved_exactly_once(case in arbitrary_case()) {
        let (_, trips) = simulate(&case);
        let mut moved: Vec<CarIndex> = trips.iter().flat_map(|t| t.cars().iter().copied()).collect();
        moved.sort();
        let expected: Vec<CarIndex> = (0..case.num_cars()).map(CarIndex::new).collect();
        prop_assert_eq!(moved, expected);
    }

    #[test]
    fn prop_cars_leave_each_bank_in_arrival_order(case in arbitrary_case()) {
        let (_, trips) = simulate(&case);
        for bank in Bank::ALL {
            let departed: Vec<CarIndex> = trips
                .iter()
                .filter(|t| t.bank() == bank)
                .flat_map(|t| t.cars().iter().copied())
                .collect();
            let arrived: Vec<CarIndex> = case.cars_on(bank).map(|c| c.index()).collect();
            prop_assert_eq!(departed, arrived);
        }
    }

    #[test]
    fn prop_each_trip_is_a_maximal_greedy_prefix(case in arbitrary_case()) {
        let (_, trips) = simulate(&case);
        let capacity = case.capacity();
        let mut next_waiting = [0usize; 2];
        let waiting: [Vec<u64>; 2] = [
            case.cars_on(Bank::Left).map(|c| c.length()).collect(),
            case.cars_on(Bank::Right).map(|c| c.length()).collect(),
        ];

        for trip in &trips {
            let side = if trip.bank().is_left() { 0 } else { 1 };
            prop_assert!(trip.load() <= capacity);
            next_waiting[side] += trip.num_cars();
            if let Some(&front) = waiting[side].get(next_waiting[side]) {
                prop_assert!(front > capacity - trip.load());
            }
        }
    }

    #[test]
    fn prop_banks_alternate_starting_left(case in arbitrary_case()) {
        let (_, trips) = simulate(&case);
        for (i, trip) in trips.iter().enumerate() {
            let expected = if i % 2 == 0 { Bank::Left } else { Bank::Right };
            prop_assert_eq!(trip.bank(), expected);
            prop_assert_eq!(trip.number(), i as u64 + 1);
        }
    }

    #[test]
    fn prop_matches_reference_model(case in arbitrary_case()) {
        let (trips, _) = simulate(&case);
        prop_assert_eq!(trips, reference_trip_count(&case));
    }

    #[test]
    fn prop_count_trips_agrees_with_run_case(case in arbitrary_case()) {
        let mut left = BankQueue::from_case(&case, Bank::Left);
        let mut right = BankQueue::from_case(&case, Bank::Right);
        let counted = FerryScheduler::count_trips(case.capacity(), &mut left, &mut right)
            .expect("valid cases never stall");
        prop_assert!(left.is_empty() && right.is_empty());
        prop_assert_eq!(counted, simulate(&case).0);
    }
}
