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
use ferry_model::num::FerryNumeric;

/// A monitor that observes nothing and never interferes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> FerryMonitor<T> for NoOpMonitor
where
    T: FerryNumeric,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_simulation(&mut self, _capacity: T, _left: &BankQueue<T>, _right: &BankQueue<T>) {}

    fn on_trip(&mut self, _trip: &Trip<T>, _statistics: &SimulationStatistics<T>) {}

    fn on_exit_simulation(&mut self, _statistics: &SimulationStatistics<T>) {}
}
