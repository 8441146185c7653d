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

use clap::Parser;
use ferry_model::bank::BankPolicy;
use ferry_runner::runner::CaseRunnerBuilder;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

/// Counts the crossings a ferry needs to carry every waiting car across the river.
#[derive(Debug, Parser)]
#[command(name = "ferry", version, about)]
struct Cli {
    /// Input file with the cases; standard input when omitted.
    input: Option<PathBuf>,

    /// Reject bank tokens other than `left` and `right`.
    #[arg(long)]
    strict_banks: bool,

    /// Accept cars longer than the ferry instead of failing to load them.
    #[arg(long)]
    allow_oversized: bool,

    /// Abort a case after this many trips.
    #[arg(long, value_name = "N")]
    trip_limit: Option<u64>,

    /// Log every trip to standard error.
    #[arg(short, long)]
    verbose: bool,

    /// Print per-case statistics to standard error.
    #[arg(long)]
    stats: bool,
}

fn open_input(path: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = CaseRunnerBuilder::<u64>::new()
        .bank_policy(if cli.strict_banks {
            BankPolicy::Strict
        } else {
            BankPolicy::Permissive
        })
        .reject_oversized(!cli.allow_oversized)
        .verbose(cli.verbose)
        .with_statistics(cli.stats);
    if let Some(limit) = cli.trip_limit {
        builder = builder.with_trip_limit(limit);
    }
    let mut runner = builder.build();

    let input = match open_input(cli.input.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            let name = cli.input.as_deref().map(|p| p.display().to_string());
            eprintln!(
                "ferry: cannot open {}: {err}",
                name.as_deref().unwrap_or("standard input")
            );
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match runner.run_all(input, out, io::stderr().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ferry: {err}");
            ExitCode::FAILURE
        }
    }
}
