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

//! Riverbanks and bank-token parsing.
//!
//! The ferry shuttles between two banks. Each car in the input names the
//! bank it waits on with a token, and the ferry itself always starts on the
//! left bank. How unrecognized tokens are treated is a matter of policy:
//! `BankPolicy::Permissive` maps everything that is not `"right"` to the left
//! bank, `BankPolicy::Strict` only accepts `"left"` and `"right"`.

use thiserror::Error;

/// Token naming the left bank.
pub const LEFT_TOKEN: &str = "left";
/// Token naming the right bank.
pub const RIGHT_TOKEN: &str = "right";

/// One of the two sides of the river.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Bank {
    /// The bank the ferry starts on.
    #[default]
    Left,
    Right,
}

impl Bank {
    /// Both banks, in the order the ferry visits them.
    pub const ALL: [Bank; 2] = [Bank::Left, Bank::Right];

    /// Returns the bank on the other side of the river.
    #[inline]
    pub const fn opposite(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }

    /// Returns the input token naming this bank.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Bank::Left => LEFT_TOKEN,
            Bank::Right => RIGHT_TOKEN,
        }
    }

    /// Returns `true` for the left bank.
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Bank::Left)
    }

    /// Returns `true` for the right bank.
    #[inline]
    pub const fn is_right(self) -> bool {
        matches!(self, Bank::Right)
    }

    /// Interprets a bank token under the given policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ferry_model::bank::{Bank, BankPolicy};
    /// assert_eq!(Bank::from_token("right", BankPolicy::Permissive), Ok(Bank::Right));
    /// assert_eq!(Bank::from_token("west", BankPolicy::Permissive), Ok(Bank::Left));
    /// assert!(Bank::from_token("west", BankPolicy::Strict).is_err());
    /// ```
    pub fn from_token(token: &str, policy: BankPolicy) -> Result<Bank, UnknownBankError> {
        match (token, policy) {
            (RIGHT_TOKEN, _) => Ok(Bank::Right),
            (LEFT_TOKEN, _) => Ok(Bank::Left),
            (_, BankPolicy::Permissive) => Ok(Bank::Left),
            (_, BankPolicy::Strict) => Err(UnknownBankError {
                token: token.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Bank {
    type Err = UnknownBankError;

    /// Strict parsing; only `"left"` and `"right"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bank::from_token(s, BankPolicy::Strict)
    }
}

/// How bank tokens other than `"left"` and `"right"` are handled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BankPolicy {
    /// Anything other than `"right"` means the left bank.
    #[default]
    Permissive,
    /// Unrecognized tokens are rejected.
    Strict,
}

impl std::fmt::Display for BankPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankPolicy::Permissive => write!(f, "Permissive"),
            BankPolicy::Strict => write!(f, "Strict"),
        }
    }
}

/// A bank token that names neither bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bank '{token}', expected 'left' or 'right'")]
pub struct UnknownBankError {
    /// The token as it appeared in the input.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for bank in Bank::ALL {
            assert_ne!(bank, bank.opposite());
            assert_eq!(bank, bank.opposite().opposite());
        }
    }

    #[test]
    fn test_default_is_left() {
        assert_eq!(Bank::default(), Bank::Left);
        assert_eq!(BankPolicy::default(), BankPolicy::Permissive);
    }

    #[test]
    fn test_permissive_falls_back_to_left() {
        let p = BankPolicy::Permissive;
        assert_eq!(Bank::from_token("left", p), Ok(Bank::Left));
        assert_eq!(Bank::from_token("right", p), Ok(Bank::Right));
        assert_eq!(Bank::from_token("Right", p), Ok(Bank::Left));
        assert_eq!(Bank::from_token("", p), Ok(Bank::Left));
    }

    #[test]
    fn test_strict_rejects_unknown_tokens() {
        let err = Bank::from_token("RIGHT", BankPolicy::Strict).unwrap_err();
        assert_eq!(err.token, "RIGHT");
        assert_eq!(
            err.to_string(),
            "unknown bank 'RIGHT', expected 'left' or 'right'"
        );
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:<5}|", Bank::Left), "left |");
        assert_eq!(format!("{:>6}|", Bank::Right), " right|");
        assert_eq!(Bank::Left.to_string(), "left");
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("left".parse::<Bank>(), Ok(Bank::Left));
        assert_eq!("right".parse::<Bank>(), Ok(Bank::Right));
        assert!("middle".parse::<Bank>().is_err());
    }

    #[test]
    fn test_display_round_trips_tokens() {
        assert_eq!(Bank::Left.to_string(), "left");
        assert_eq!(Bank::Right.to_string(), "right");
    }
}
