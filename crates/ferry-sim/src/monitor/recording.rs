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

use crate::{
    monitor::ferry_monitor::FerryMonitor, queue::BankQueue, stats::SimulationStatistics,
    trip::Trip,
};
use ferry_model::{bank::Bank, num::FerryNumeric};

/// Keeps the record of every trip of the last simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingMonitor<T> {
    trips: Vec<Trip<T>>,
}

impl<T> RecordingMonitor<T>
where
    T: FerryNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self { trips: Vec::new() }
    }

    /// Returns the recorded trips in order.
    #[inline]
    pub fn trips(&self) -> &[Trip<T>] {
        &self.trips
    }

    /// Returns the departure bank of every recorded trip.
    #[inline]
    pub fn banks(&self) -> impl Iterator<Item = Bank> + '_ {
        self.trips.iter().map(Trip::bank)
    }

    #[inline]
    pub fn into_trips(self) -> Vec<Trip<T>> {
        self.trips
    }
}

impl<T> FerryMonitor<T> for RecordingMonitor<T>
where
    T: FerryNumeric,
{
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_enter_simulation(&mut self, _capacity: T, left: &BankQueue<T>, right: &BankQueue<T>) {
        self.trips.clear();
        self.trips.reserve(left.len() + right.len());
    }

    fn on_trip(&mut self, trip: &Trip<T>, _statistics: &SimulationStatistics<T>) {
        self.trips.push(trip.clone());
    }

    fn on_exit_simulation(&mut self, _statistics: &SimulationStatistics<T>) {}
}
