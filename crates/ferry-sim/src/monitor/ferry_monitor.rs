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

//! Simulation monitoring interface
//!
//! Declares the `FerryMonitor` trait and `SimulationCommand`. Callbacks follow
//! the scheduler lifecycle: enter, then one `on_trip` per crossing, then exit.
//! Before each crossing the scheduler asks `simulation_command` whether to go
//! on (default: Continue).
//!
//! Methods take `&mut self`; monitors are single-threaded. Keep callbacks
//! light, they run once per trip.

use crate::{queue::BankQueue, stats::SimulationStatistics, trip::Trip};
use ferry_model::num::FerryNumeric;

/// The decision of a monitor about the next trip.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SimulationCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SimulationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationCommand::Continue => write!(f, "Continue"),
            SimulationCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for observing and controlling a ferry simulation.
pub trait FerryMonitor<T>
where
    T: FerryNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first trip, with both queues fully loaded.
    fn on_enter_simulation(&mut self, capacity: T, left: &BankQueue<T>, right: &BankQueue<T>);
    /// Called after every completed trip.
    fn on_trip(&mut self, trip: &Trip<T>, statistics: &SimulationStatistics<T>);
    /// Called once when the simulation stops, whatever the reason.
    fn on_exit_simulation(&mut self, statistics: &SimulationStatistics<T>);
    /// Called before every trip to decide whether the simulation goes on.
    fn simulation_command(&self, _statistics: &SimulationStatistics<T>) -> SimulationCommand {
        SimulationCommand::Continue
    }
}

impl<T> std::fmt::Debug for dyn FerryMonitor<T> + '_
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FerryMonitor({})", self.name())
    }
}

impl<T, M> FerryMonitor<T> for &mut M
where
    T: FerryNumeric,
    M: FerryMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_simulation(&mut self, capacity: T, left: &BankQueue<T>, right: &BankQueue<T>) {
        (**self).on_enter_simulation(capacity, left, right);
    }

    fn on_trip(&mut self, trip: &Trip<T>, statistics: &SimulationStatistics<T>) {
        (**self).on_trip(trip, statistics);
    }

    fn on_exit_simulation(&mut self, statistics: &SimulationStatistics<T>) {
        (**self).on_exit_simulation(statistics);
    }

    fn simulation_command(&self, statistics: &SimulationStatistics<T>) -> SimulationCommand {
        (**self).simulation_command(statistics)
    }
}
