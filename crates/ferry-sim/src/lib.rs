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

//! # Ferry Simulation
//!
//! The simulation engine: two FIFO bank queues feed a ferry of fixed deck
//! length that alternates between the banks until no car is left waiting.
//!
//! ## Modules
//!
//! - `queue`: `BankQueue`, the per-bank FIFO with the greedy `take_trip` pack.
//! - `scheduler`: `FerryScheduler`, which alternates banks, counts trips and
//!   detects banks that can never drain.
//! - `trip`: the record of one crossing.
//! - `monitor`: observers of the scheduler (logging, recording, trip limits).
//! - `stats` and `result`: what a run reports back.
//!
//! ## Usage
//!
//! ```rust
//! use ferry_model::{bank::Bank, case::FerryCaseBuilder};
//! use ferry_sim::{monitor::no_op::NoOpMonitor, scheduler::FerryScheduler};
//!
//! let mut builder = FerryCaseBuilder::new(1u64).unwrap();
//! builder.add_car(60, Bank::Left).unwrap();
//! builder.add_car(60, Bank::Left).unwrap();
//! let case = builder.build();
//!
//! let outcome = FerryScheduler::new().run_case(&case, &mut NoOpMonitor).unwrap();
//! assert_eq!(outcome.trip_count(), 3);
//! ```

pub mod monitor;
pub mod queue;
pub mod result;
pub mod scheduler;
pub mod stats;
pub mod trip;
