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

//! # Ferry Model
//!
//! **The domain model of the ferry loading simulator.**
//!
//! A test case describes a ferry of a given length and the cars waiting on
//! either bank of the river, in the order they arrived. This crate turns that
//! description into validated values the simulation can consume without
//! re-checking anything.
//!
//! ## Architecture
//!
//! * **`index`**: typed indices (`CarIndex`, `CaseIndex`) so a car's arrival
//!   position is never confused with a case number.
//! * **`num`**: the `FerryNumeric` bound collecting what a length type must
//!   support.
//! * **`bank`**: the two riverbanks and the policy for reading bank tokens.
//! * **`car`**: the immutable car record.
//! * **`case`**: `FerryCase` (immutable, validated) and `FerryCaseBuilder`
//!   (mutable, used while parsing).
//! * **`loading`**: the whitespace-token input reader producing cases.
//!
//! ## Design Philosophy
//!
//! Lengths are validated when a case is built: a zero ferry length, a
//! capacity overflowing the length type and zero-length cars never reach a
//! queue. Oversized cars are rejected by the loader unless explicitly allowed.

pub mod bank;
pub mod car;
pub mod case;
pub mod index;
pub mod loading;
pub mod num;
