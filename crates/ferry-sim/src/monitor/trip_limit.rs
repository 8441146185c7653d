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
    monitor::ferry_monitor::{FerryMonitor, SimulationCommand},
    queue::BankQueue,
    stats::SimulationStatistics,
    trip::Trip,
};
use ferry_model::num::FerryNumeric;

/// Stops the simulation once a fixed number of trips has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripLimitMonitor {
    limit: u64,
}

impl TripLimitMonitor {
    #[inline]
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl std::fmt::Display for TripLimitMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TripLimitMonitor(limit: {})", self.limit)
    }
}

impl<T> FerryMonitor<T> for TripLimitMonitor
where
    T: FerryNumeric,
{
    fn name(&self) -> &str {
        "TripLimitMonitor"
    }

    fn on_enter_simulation(&mut self, _capacity: T, _left: &BankQueue<T>, _right: &BankQueue<T>) {}

    fn on_trip(&mut self, _trip: &Trip<T>, _statistics: &SimulationStatistics<T>) {}

    fn on_exit_simulation(&mut self, _statistics: &SimulationStatistics<T>) {}

    fn simulation_command(&self, statistics: &SimulationStatistics<T>) -> SimulationCommand {
        if statistics.trips >= self.limit {
            SimulationCommand::Terminate(format!("trip limit of {} reached", self.limit))
        } else {
            SimulationCommand::Continue
        }
    }
}
