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
use std::io::Write;
use std::time::Instant;

const RULE_WIDTH: usize = 72;

/// Writes one table row per trip (or per `every` trips) to a writer.
///
/// Write failures are ignored; logging never interrupts a simulation.
#[derive(Debug)]
pub struct LogMonitor<W> {
    out: W,
    every: u64,
    start_time: Instant,
    waiting_left: usize,
    waiting_right: usize,
}

impl LogMonitor<std::io::Stderr> {
    /// Creates a monitor logging every trip to standard error.
    #[inline]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W> LogMonitor<W>
where
    W: Write,
{
    #[inline]
    pub fn new(out: W) -> Self {
        Self {
            out,
            every: 1,
            start_time: Instant::now(),
            waiting_left: 0,
            waiting_right: 0,
        }
    }

    /// Only logs every `every`-th trip. Zero is treated as one.
    #[inline]
    pub fn every(mut self, every: u64) -> Self {
        self.every = every.max(1);
        self
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_header(&mut self, capacity: impl std::fmt::Display) {
        let _ = writeln!(
            self.out,
            "Ferry capacity {} cm, {} car(s) left, {} car(s) right",
            capacity, self.waiting_left, self.waiting_right
        );
        let _ = writeln!(
            self.out,
            "{:<8} | {:<5} | {:<4} | {:<10} | {:<10} | {:<7} | {:<7}",
            "Trip", "From", "Cars", "Load", "Slack", "Left", "Right"
        );
        let _ = writeln!(self.out, "{}", "-".repeat(RULE_WIDTH));
    }
}

impl<T, W> FerryMonitor<T> for LogMonitor<W>
where
    T: FerryNumeric,
    W: Write,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_simulation(&mut self, capacity: T, left: &BankQueue<T>, right: &BankQueue<T>) {
        self.start_time = Instant::now();
        self.waiting_left = left.len();
        self.waiting_right = right.len();
        self.print_header(capacity);
    }

    fn on_trip(&mut self, trip: &Trip<T>, _statistics: &SimulationStatistics<T>) {
        match trip.bank() {
            Bank::Left => self.waiting_left = self.waiting_left.saturating_sub(trip.num_cars()),
            Bank::Right => self.waiting_right = self.waiting_right.saturating_sub(trip.num_cars()),
        }

        if trip.number() % self.every != 0 {
            return;
        }

        let _ = writeln!(
            self.out,
            "{:<8} | {:<5} | {:<4} | {:<10} | {:<10} | {:<7} | {:<7}",
            trip.number(),
            trip.bank(),
            trip.num_cars(),
            trip.load(),
            trip.slack(),
            self.waiting_left,
            self.waiting_right
        );
    }

    fn on_exit_simulation(&mut self, statistics: &SimulationStatistics<T>) {
        let _ = writeln!(self.out, "{}", "-".repeat(RULE_WIDTH));
        let _ = writeln!(
            self.out,
            "Simulation finished after {} trip(s) in {:.2?}.",
            statistics.trips,
            self.start_time.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::TripLoad;
    use ferry_model::{car::Car, index::CarIndex};

    fn loaded(bank: Bank, lengths: &[u64]) -> (BankQueue<u64>, TripLoad<u64>) {
        let mut queue = BankQueue::new(bank, 100);
        for (i, &length) in lengths.iter().enumerate() {
            queue.enqueue(Car::new(CarIndex::new(i), length, bank));
        }
        let snapshot = queue.clone();
        let load = queue.take_trip(100);
        (snapshot, load)
    }

    #[test]
    fn test_log_lines_track_waiting_cars() {
        let (left, load) = loaded(Bank::Left, &[30, 40]);
        let right = BankQueue::<u64>::new(Bank::Right, 100);
        let mut monitor = LogMonitor::new(Vec::new());

        monitor.on_enter_simulation(100, &left, &right);
        let trip = Trip::new(1, Bank::Left, 100, &load);
        let mut stats = SimulationStatistics::default();
        stats.on_trip(&trip);
        monitor.on_trip(&trip, &stats);
        FerryMonitor::<u64>::on_exit_simulation(&mut monitor, &stats);

        let text = String::from_utf8(monitor.into_inner()).unwrap();
        assert!(text.starts_with("Ferry capacity 100 cm, 2 car(s) left, 0 car(s) right"));
        assert!(text.contains("1        | left  | 2    | 70         | 30         | 0       | 0"));
        assert!(text.contains("Simulation finished after 1 trip(s)"));
    }

    #[test]
    fn test_every_skips_rows() {
        let (left, _) = loaded(Bank::Left, &[10]);
        let right = BankQueue::<u64>::new(Bank::Right, 100);
        let mut monitor = LogMonitor::new(Vec::new()).every(2);
        monitor.on_enter_simulation(100, &left, &right);

        let empty = BankQueue::<u64>::new(Bank::Right, 100).take_trip(100);
        let trip = Trip::new(1, Bank::Right, 100, &empty);
        monitor.on_trip(&trip, &SimulationStatistics::default());

        let text = String::from_utf8(monitor.into_inner()).unwrap();
        assert!(!text.contains("| right |"));
    }
}
