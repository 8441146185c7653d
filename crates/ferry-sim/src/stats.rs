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

use crate::trip::Trip;
use ferry_core::num::{constants::Zero, ops::saturating_arithmetic::SaturatingAddVal};
use ferry_model::num::FerryNumeric;
use std::time::Duration;

/// Statistics collected while simulating one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStatistics<T> {
    /// Total crossings, loaded or not.
    pub trips: u64,
    /// Crossings that carried at least one car.
    pub loaded_trips: u64,
    /// Crossings from a bank with no waiting cars.
    pub empty_crossings: u64,
    /// Total cars delivered to the opposite bank.
    pub cars_moved: u64,
    /// Summed length of all delivered cars, saturating.
    pub length_moved: T,
    /// The largest single-trip load.
    pub fullest_load: T,
    /// Wall-clock time spent in the scheduler.
    pub time_total: Duration,
}

impl<T> Default for SimulationStatistics<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self {
            trips: 0,
            loaded_trips: 0,
            empty_crossings: 0,
            cars_moved: 0,
            length_moved: T::ZERO,
            fullest_load: T::ZERO,
            time_total: Duration::ZERO,
        }
    }
}

impl<T> SimulationStatistics<T>
where
    T: FerryNumeric,
{
    /// Records a completed trip.
    #[inline]
    pub fn on_trip(&mut self, trip: &Trip<T>) {
        self.trips = self.trips.saturating_add_val(1);

        if trip.is_empty_crossing() {
            self.empty_crossings = self.empty_crossings.saturating_add_val(1);
            return;
        }

        self.loaded_trips = self.loaded_trips.saturating_add_val(1);
        self.cars_moved = self.cars_moved.saturating_add_val(trip.num_cars() as u64);
        self.length_moved = self.length_moved.saturating_add_val(trip.load());
        self.fullest_load = self.fullest_load.max(trip.load());
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl<T> std::fmt::Display for SimulationStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ferry Simulation Statistics:")?;
        writeln!(f, "  Trips:              {}", self.trips)?;
        writeln!(f, "  Loaded trips:       {}", self.loaded_trips)?;
        writeln!(f, "  Empty crossings:    {}", self.empty_crossings)?;
        writeln!(f, "  Cars moved:         {}", self.cars_moved)?;
        writeln!(f, "  Length moved (cm):  {}", self.length_moved)?;
        writeln!(f, "  Fullest load (cm):  {}", self.fullest_load)?;
        writeln!(f, "  Total time:         {:.2?}", self.time_total)?;
        Ok(())
    }
}
