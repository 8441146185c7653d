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

use crate::stats::SimulationStatistics;
use ferry_model::num::FerryNumeric;

/// Why a simulation stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Both banks are empty.
    Drained,
    /// A monitor requested termination before the banks drained.
    /// The string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Drained => write!(f, "Drained"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The outcome of simulating one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome<T> {
    trips: u64,
    reason: TerminationReason,
    statistics: SimulationStatistics<T>,
}

impl<T> SimulationOutcome<T>
where
    T: FerryNumeric,
{
    #[inline]
    pub fn new(trips: u64, reason: TerminationReason, statistics: SimulationStatistics<T>) -> Self {
        Self {
            trips,
            reason,
            statistics,
        }
    }

    /// Returns the number of crossings made.
    #[inline]
    pub fn trip_count(&self) -> u64 {
        self.trips
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SimulationStatistics<T> {
        &self.statistics
    }

    /// Returns `true` if every car reached the opposite bank.
    #[inline]
    pub fn is_drained(&self) -> bool {
        matches!(self.reason, TerminationReason::Drained)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }
}

impl<T> std::fmt::Display for SimulationOutcome<T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimulationOutcome(trips: {}, reason: {})", self.trips, self.reason)
    }
}
