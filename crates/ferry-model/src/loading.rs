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

//! Test case loader for the ferry loading domain.
//!
//! This module turns whitespace-delimited text streams into validated
//! `FerryCase` values. The stream starts with the number of cases; every case
//! gives the ferry length in meters and the number of cars, followed by one
//! `length bank` pair per car.
//!
//! `CaseLoader` reads everything up front, while `CaseStream` yields cases one
//! at a time so a runner can report results before the whole input has been
//! read. Both share the same tokenizer: tokens are separated by any
//! whitespace, and `#` starts a comment that runs to the end of the line.
//!
//! Any malformed or missing token aborts loading. There is no partial-case
//! recovery.

use crate::{
    bank::{Bank, BankPolicy},
    case::{CaseBuildError, FerryCase, FerryCaseBuilder},
    index::{CarIndex, CaseIndex},
    num::FerryNumeric,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u64").
    pub type_name: &'static str,
}

/// Failures of the underlying tokenizer.
#[derive(Debug, Error)]
pub enum TokenError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended unexpectedly.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A token could not be parsed into the expected type.
    #[error(transparent)]
    Parse(#[from] ParseTokenError),
}

/// The error type for the case loading process.
#[derive(Debug, Error)]
pub enum CaseLoaderError<T>
where
    T: FerryNumeric,
{
    /// Reading or parsing a token failed.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// A case violates a structural constraint.
    #[error("case {}: {source}", .case.get())]
    Case {
        case: CaseIndex,
        #[source]
        source: CaseBuildError<T>,
    },
    /// A bank token was not recognized under the strict policy.
    #[error("case {}, car {}: unknown bank '{token}'", .case.get(), .car_index.get())]
    UnknownBank {
        case: CaseIndex,
        car_index: CarIndex,
        token: String,
    },
}

impl<T> CaseLoaderError<T>
where
    T: FerryNumeric,
{
    /// Returns `true` if the input ended before all announced data was read.
    #[inline]
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, CaseLoaderError::Token(TokenError::UnexpectedEof))
    }
}

/// A configurable loader for ferry test cases.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// C                  // number of test cases
/// L M                // ferry length in meters, number of cars
/// T_1 SIDE_1         // car length in centimeters, "left" or "right"
/// ...
/// T_M SIDE_M
/// ...                // next case
/// ```
///
/// # Configuration
/// * `bank_policy`: how bank tokens other than `left`/`right` are handled.
/// * `reject_oversized`: if true, a car longer than the ferry is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseLoader<T> {
    bank_policy: BankPolicy,
    reject_oversized: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for CaseLoader<T> {
    fn default() -> Self {
        Self {
            bank_policy: BankPolicy::Permissive,
            reject_oversized: true,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> CaseLoader<T>
where
    T: FerryNumeric,
{
    /// Creates a new `CaseLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for unrecognized bank tokens.
    #[inline]
    pub fn bank_policy(mut self, policy: BankPolicy) -> Self {
        self.bank_policy = policy;
        self
    }

    /// Configures whether a car longer than the ferry fails loading.
    #[inline]
    pub fn reject_oversized(mut self, yes: bool) -> Self {
        self.reject_oversized = yes;
        self
    }

    /// Returns a streaming view over the cases of `rdr`.
    #[inline]
    pub fn stream<R: BufRead>(&self, rdr: R) -> CaseStream<R, T> {
        CaseStream::new(*self, rdr)
    }

    /// Loads all cases from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(
        &self,
        rdr: R,
    ) -> Result<Vec<FerryCase<T>>, CaseLoaderError<T>> {
        self.stream(rdr).collect()
    }

    /// Loads all cases from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<FerryCase<T>>, CaseLoaderError<T>> {
        let file = File::open(path).map_err(TokenError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads all cases from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<FerryCase<T>>, CaseLoaderError<T>> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads all cases from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<FerryCase<T>>, CaseLoaderError<T>> {
        self.from_reader(s.as_bytes())
    }

    fn read_case<R: BufRead>(
        &self,
        sc: &mut Scanner<R>,
        case: CaseIndex,
    ) -> Result<FerryCase<T>, CaseLoaderError<T>> {
        let ferry_length: T = sc.next()?;
        let num_cars: usize = sc.next()?;

        let in_case = |source: CaseBuildError<T>| CaseLoaderError::Case { case, source };

        let mut builder = FerryCaseBuilder::preallocated(ferry_length, num_cars)
            .map_err(in_case)?
            .reject_oversized(self.reject_oversized);

        for i in 0..num_cars {
            let length: T = sc.next()?;
            let token: String = sc.next()?;

            let bank = Bank::from_token(&token, self.bank_policy).map_err(|e| {
                CaseLoaderError::UnknownBank {
                    case,
                    car_index: CarIndex::new(i),
                    token: e.token,
                }
            })?;

            builder.add_car(length, bank).map_err(in_case)?;
        }

        Ok(builder.build())
    }
}

/// An iterator reading one case at a time.
///
/// The case count is read lazily on the first call to `next`. After the first
/// error the stream is exhausted.
pub struct CaseStream<R, T> {
    loader: CaseLoader<T>,
    scanner: Scanner<R>,
    remaining: Option<usize>,
    next_case: CaseIndex,
    failed: bool,
}

impl<R, T> CaseStream<R, T>
where
    R: BufRead,
    T: FerryNumeric,
{
    fn new(loader: CaseLoader<T>, rdr: R) -> Self {
        Self {
            loader,
            scanner: Scanner::new(rdr),
            remaining: None,
            next_case: CaseIndex::new(0),
            failed: false,
        }
    }

    /// Returns the number of cases announced by the input, reading it if needed.
    pub fn num_cases(&mut self) -> Result<usize, CaseLoaderError<T>> {
        if let Some(remaining) = self.remaining {
            return Ok(remaining + self.next_case.get());
        }

        let count: usize = self.scanner.next()?;
        self.remaining = Some(count);
        Ok(count)
    }

    /// Returns the index the next yielded case will have.
    #[inline]
    pub fn next_case_index(&self) -> CaseIndex {
        self.next_case
    }

    fn advance(&mut self) -> Option<Result<FerryCase<T>, CaseLoaderError<T>>> {
        if let Err(e) = self.num_cases() {
            return Some(Err(e));
        }

        match self.remaining {
            Some(0) | None => None,
            Some(n) => {
                let case = self.next_case;
                self.remaining = Some(n - 1);
                self.next_case = case.next();
                Some(self.loader.read_case(&mut self.scanner, case))
            }
        }
    }
}

impl<R, T> Iterator for CaseStream<R, T>
where
    R: BufRead,
    T: FerryNumeric,
{
    type Item = Result<FerryCase<T>, CaseLoaderError<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.advance();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl<R, T> std::iter::FusedIterator for CaseStream<R, T>
where
    R: BufRead,
    T: FerryNumeric,
{
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, TokenError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns the byte range of the next token in the current line, if any.
    /// A `#` ends the line for tokenization purposes.
    fn next_span(&self) -> Option<(usize, usize)> {
        let line = &self.buf[self.pos..];
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return None;
        }

        let start = self.pos + (line.len() - trimmed.len());
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        Some((start, start + len))
    }

    /// Reads the next token and parses it into `U`.
    fn next<U>(&mut self) -> Result<U, TokenError>
    where
        U: FromStr,
    {
        loop {
            if let Some((start, end)) = self.next_span() {
                self.pos = end;
                let token = &self.buf[start..end];
                return token.parse::<U>().map_err(|_| {
                    TokenError::Parse(ParseTokenError {
                        token: token.to_owned(),
                        type_name: std::any::type_name::<U>(),
                    })
                });
            }

            if !self.fill_line()? {
                return Err(TokenError::UnexpectedEof);
            }
        }
    }
}
