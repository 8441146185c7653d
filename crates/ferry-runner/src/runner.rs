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

//! # Case Runner
//!
//! Wires the loader, the bank queues and the scheduler together. Cases are
//! read from the input one at a time, simulated in order, and their trip
//! counts written as one line each. The first failure of any kind aborts the
//! whole run; cases before it have already been reported.
//!
//! ## Configuration
//!
//! `CaseRunnerBuilder` collects the options:
//!
//! - `bank_policy`: how unknown bank tokens are read (permissive by default).
//! - `reject_oversized`: whether cars longer than the ferry fail loading
//!   (default `true`); with `false` they surface as a stalled simulation.
//! - `with_trip_limit`: aborts a case after the given number of trips.
//! - `verbose`: logs every trip to the diagnostics writer.
//! - `with_statistics`: writes per-case statistics to the diagnostics writer.
//!
//! ```rust
//! use ferry_runner::runner::CaseRunnerBuilder;
//!
//! let mut runner = CaseRunnerBuilder::<u64>::new().build();
//! let mut out = Vec::new();
//! let summary = runner
//!     .run_all("2  1 1 50 left  1 2 60 left 60 left".as_bytes(), &mut out, std::io::sink())
//!     .unwrap();
//!
//! assert_eq!(summary.cases, 2);
//! assert_eq!(String::from_utf8(out).unwrap(), "1\n3\n");
//! ```

use ferry_model::{
    bank::BankPolicy,
    case::FerryCase,
    index::CaseIndex,
    loading::{CaseLoader, CaseLoaderError},
    num::FerryNumeric,
};
use ferry_sim::{
    monitor::{composite::CompositeMonitor, log::LogMonitor, trip_limit::TripLimitMonitor},
    result::{SimulationOutcome, TerminationReason},
    scheduler::{FerryScheduler, SimulationError},
};
use std::io::{BufRead, Write};
use thiserror::Error;

/// The error type for a complete run.
#[derive(Debug, Error)]
pub enum RunnerError<T>
where
    T: FerryNumeric,
{
    /// The input could not be read into cases.
    #[error(transparent)]
    Load(#[from] CaseLoaderError<T>),
    /// A case could not be simulated to the end.
    #[error("case {}: {source}", .case.get())]
    Simulation {
        case: CaseIndex,
        #[source]
        source: SimulationError<T>,
    },
    /// A case was stopped by a limit before both banks drained.
    #[error("case {}: {reason}", .case.get())]
    Aborted { case: CaseIndex, reason: String },
    /// Writing results or diagnostics failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The result of one simulated case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport<T> {
    case: CaseIndex,
    outcome: SimulationOutcome<T>,
}

impl<T> CaseReport<T>
where
    T: FerryNumeric,
{
    #[inline]
    pub fn case(&self) -> CaseIndex {
        self.case
    }

    /// Returns the number of trips the ferry made.
    #[inline]
    pub fn trip_count(&self) -> u64 {
        self.outcome.trip_count()
    }

    #[inline]
    pub fn outcome(&self) -> &SimulationOutcome<T> {
        &self.outcome
    }
}

/// Totals over all cases of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of cases simulated.
    pub cases: usize,
    /// Sum of the trip counts of all cases.
    pub total_trips: u64,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RunSummary(cases: {}, total_trips: {})",
            self.cases, self.total_trips
        )
    }
}

/// Runs ferry cases read from an input stream.
#[derive(Debug, Clone)]
pub struct CaseRunner<T> {
    loader: CaseLoader<T>,
    trip_limit: Option<u64>,
    verbose: bool,
    report_statistics: bool,
    scheduler: FerryScheduler,
}

impl<T> CaseRunner<T>
where
    T: FerryNumeric,
{
    #[inline]
    pub fn loader(&self) -> &CaseLoader<T> {
        &self.loader
    }

    #[inline]
    pub fn trip_limit(&self) -> Option<u64> {
        self.trip_limit
    }

    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    #[inline]
    pub fn reports_statistics(&self) -> bool {
        self.report_statistics
    }

    /// Simulates a single case, writing diagnostics to `diagnostics`.
    pub fn run_case<D>(
        &mut self,
        case_index: CaseIndex,
        case: &FerryCase<T>,
        mut diagnostics: D,
    ) -> Result<CaseReport<T>, RunnerError<T>>
    where
        D: Write,
    {
        let outcome = {
            let mut monitor = CompositeMonitor::<T>::with_capacity(2);
            if let Some(limit) = self.trip_limit {
                monitor.add_monitor(TripLimitMonitor::new(limit));
            }
            if self.verbose {
                monitor.add_monitor(LogMonitor::new(&mut diagnostics));
            }

            self.scheduler
                .run_case(case, &mut monitor)
                .map_err(|source| RunnerError::Simulation {
                    case: case_index,
                    source,
                })?
        };

        if let TerminationReason::Aborted(reason) = outcome.reason() {
            return Err(RunnerError::Aborted {
                case: case_index,
                reason: reason.clone(),
            });
        }

        if self.report_statistics {
            writeln!(diagnostics, "Case {} ({})", case_index.get(), case)?;
            write!(diagnostics, "{}", outcome.statistics())?;
        }

        Ok(CaseReport {
            case: case_index,
            outcome,
        })
    }

    /// Reads every case from `input` and writes one trip count per line to `out`.
    pub fn run_all<R, W, D>(
        &mut self,
        input: R,
        mut out: W,
        mut diagnostics: D,
    ) -> Result<RunSummary, RunnerError<T>>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut summary = RunSummary::default();
        let mut stream = self.loader.stream(input);

        loop {
            let case_index = stream.next_case_index();
            let Some(case) = stream.next() else {
                break;
            };

            let report = self.run_case(case_index, &case?, &mut diagnostics)?;
            writeln!(out, "{}", report.trip_count())?;

            summary.cases += 1;
            summary.total_trips = summary.total_trips.saturating_add(report.trip_count());
        }

        out.flush()?;
        diagnostics.flush()?;
        Ok(summary)
    }
}

/// A builder for `CaseRunner`.
#[derive(Debug, Clone, Copy)]
pub struct CaseRunnerBuilder<T> {
    bank_policy: BankPolicy,
    reject_oversized: bool,
    trip_limit: Option<u64>,
    verbose: bool,
    report_statistics: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for CaseRunnerBuilder<T> {
    fn default() -> Self {
        Self {
            bank_policy: BankPolicy::Permissive,
            reject_oversized: true,
            trip_limit: None,
            verbose: false,
            report_statistics: false,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> CaseRunnerBuilder<T>
where
    T: FerryNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn bank_policy(mut self, policy: BankPolicy) -> Self {
        self.bank_policy = policy;
        self
    }

    #[inline]
    pub fn reject_oversized(mut self, yes: bool) -> Self {
        self.reject_oversized = yes;
        self
    }

    #[inline]
    pub fn with_trip_limit(mut self, limit: u64) -> Self {
        self.trip_limit = Some(limit);
        self
    }

    #[inline]
    pub fn verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    #[inline]
    pub fn with_statistics(mut self, yes: bool) -> Self {
        self.report_statistics = yes;
        self
    }

    pub fn build(self) -> CaseRunner<T> {
        CaseRunner {
            loader: CaseLoader::new()
                .bank_policy(self.bank_policy)
                .reject_oversized(self.reject_oversized),
            trip_limit: self.trip_limit,
            verbose: self.verbose,
            report_statistics: self.report_statistics,
            scheduler: FerryScheduler::new(),
        }
    }
}
