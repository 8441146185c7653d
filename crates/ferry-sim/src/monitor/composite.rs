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

/// A composite monitor that forwards every event to all of its monitors.
///
/// The first monitor asking to terminate wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn FerryMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names())
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: FerryMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds an already boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn FerryMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl<'a, T> FromIterator<Box<dyn FerryMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn FerryMonitor<T> + 'a>>,
    {
        CompositeMonitor {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> FerryMonitor<T> for CompositeMonitor<'a, T>
where
    T: FerryNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_simulation(&mut self, capacity: T, left: &BankQueue<T>, right: &BankQueue<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_simulation(capacity, left, right);
        }
    }

    fn on_trip(&mut self, trip: &Trip<T>, statistics: &SimulationStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_trip(trip, statistics);
        }
    }

    fn on_exit_simulation(&mut self, statistics: &SimulationStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_simulation(statistics);
        }
    }

    fn simulation_command(&self, statistics: &SimulationStatistics<T>) -> SimulationCommand {
        self.monitors
            .iter()
            .map(|monitor| monitor.simulation_command(statistics))
            .find(|command| matches!(command, SimulationCommand::Terminate(_)))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOpMonitor, trip_limit::TripLimitMonitor};

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::<u64>::new();
        assert!(composite.is_empty());
        assert_eq!(
            composite.simulation_command(&SimulationStatistics::default()),
            SimulationCommand::Continue
        );
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeMonitor::<u64>::with_capacity(3);
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(TripLimitMonitor::new(2));
        composite.add_monitor(TripLimitMonitor::new(1));
        assert_eq!(composite.len(), 3);

        let mut stats = SimulationStatistics::<u64>::default();
        stats.trips = 2;
        assert_eq!(
            composite.simulation_command(&stats),
            SimulationCommand::Terminate("trip limit of 2 reached".to_string())
        );
        assert_eq!(
            composite.to_string(),
            "CompositeMonitor([NoOpMonitor, TripLimitMonitor, TripLimitMonitor])"
        );
    }
}
