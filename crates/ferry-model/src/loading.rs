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

//! Instance loader for the trip capacity problem.
//!
//! Turns whitespace-delimited text into a validated `Instance`. The expected
//! layout is the item count, the trip count, then one weight per item:
//!
//! ```raw
//! n k
//! w_1 w_2 ... w_n
//! ```
//!
//! Line breaks carry no meaning, so the weights may be spread over any number
//! of lines. Text from `#` to the end of a line is a comment. Every parse
//! failure names the offending token and its line, and a malformed instance
//! (zero items, zero trips, zero weights, an overflowing total) is rejected
//! before any search runs.
//!
//! By default the loader is strict: tokens after the `n`-th weight are an
//! error, since they usually mean `n` was wrong. `allow_trailing_input`
//! relaxes this for streams that carry more than one record.

use crate::instance::{Instance, InstanceBuilder, InstanceError};
use ferry_core::num::ops::CheckedAddVal;
use num_traits::{PrimInt, Unsigned};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    ops::Range,
    path::Path,
    str::FromStr,
};

/// Upper bound on the weights reserved up front. The item count comes from
/// the input, so larger instances grow the buffer as weights arrive.
const MAX_PREALLOCATED_ITEMS: usize = 1 << 16;

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input ended before the named value was read.
    UnexpectedEof {
        /// A description of the missing value, e.g. "trip count".
        expected: &'static str,
    },
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The item count or trip count is zero.
    InvalidDimensions { num_items: usize, num_trips: usize },
    /// Tokens remain after the last weight while the loader is strict.
    TrailingInput { token: String, line: usize },
    /// The values parsed but do not form a valid instance.
    Instance(InstanceError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u64").
    pub type_name: &'static str,
    /// The 1-based line the token appeared on.
    pub line: usize,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' on line {} as type {}",
            self.token, self.line, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for InstanceLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "Unexpected end of input while reading {expected}")
            }
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::InvalidDimensions {
                num_items,
                num_trips,
            } => write!(
                f,
                "Item count and trip count must be positive, got n = {num_items} and k = {num_trips}"
            ),
            Self::TrailingInput { token, line } => {
                write!(f, "Unexpected token '{token}' on line {line} after the last weight")
            }
            Self::Instance(e) => write!(f, "Invalid instance: {e}"),
        }
    }
}

impl std::error::Error for InstanceLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Instance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<InstanceError> for InstanceLoaderError {
    fn from(e: InstanceError) -> Self {
        Self::Instance(e)
    }
}

/// A configurable loader for trip capacity instances.
///
/// # Configuration
/// * `allow_trailing_input`: If false (the default), any token after the last
///   weight is reported as `InstanceLoaderError::TrailingInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    allow_trailing_input: bool,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for InstanceLoader<T> {
    fn default() -> Self {
        Self {
            allow_trailing_input: false,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + Unsigned + CheckedAddVal + FromStr,
{
    /// Creates a new strict `InstanceLoader`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether tokens after the last weight are tolerated.
    #[inline]
    pub fn allow_trailing_input(mut self, yes: bool) -> Self {
        self.allow_trailing_input = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Instance<T>, InstanceLoaderError> {
        let mut tokens = TokenStream::new(rdr);

        let num_items: usize = tokens.parse_next("item count")?;
        let num_trips: usize = tokens.parse_next("trip count")?;
        if num_items == 0 || num_trips == 0 {
            return Err(InstanceLoaderError::InvalidDimensions {
                num_items,
                num_trips,
            });
        }

        let reserved = num_items.min(MAX_PREALLOCATED_ITEMS);
        let mut builder = InstanceBuilder::with_capacity(num_trips, reserved);
        for _ in 0..num_items {
            let weight: T = tokens.parse_next("item weight")?;
            builder.push_item(weight);
        }

        if !self.allow_trailing_input {
            if let Some((token, line)) = tokens.next_owned()? {
                return Err(InstanceLoaderError::TrailingInput { token, line });
            }
        }

        Ok(builder.build()?)
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance<T>, InstanceLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance<T>, InstanceLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance<T>, InstanceLoaderError> {
        self.from_bufread(s.as_bytes())
    }
}

/// Splits a line-oriented reader into whitespace-separated tokens, dropping
/// `#` comments and tracking line numbers for diagnostics.
struct TokenStream<R> {
    rdr: R,
    line: String,
    line_number: usize,
    cursor: usize,
    content_end: usize,
}

impl<R: BufRead> TokenStream<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            line_number: 0,
            cursor: 0,
            content_end: 0,
        }
    }

    /// Reads the next line. Returns `Ok(false)` at end of input.
    fn fill_line(&mut self) -> Result<bool, InstanceLoaderError> {
        self.line.clear();
        let n = self.rdr.read_line(&mut self.line)?;
        self.line_number += 1;
        self.cursor = 0;
        self.content_end = self.line.find('#').unwrap_or(self.line.len());
        Ok(n > 0)
    }

    /// Returns the byte range of the next token within `self.line`.
    fn advance(&mut self) -> Result<Option<Range<usize>>, InstanceLoaderError> {
        loop {
            let rest = &self.line[self.cursor..self.content_end];
            if let Some(offset) = rest.find(|c: char| !c.is_whitespace()) {
                let start = self.cursor + offset;
                let len = self.line[start..self.content_end]
                    .find(char::is_whitespace)
                    .unwrap_or(self.content_end - start);
                self.cursor = start + len;
                return Ok(Some(start..start + len));
            }

            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Parses the next token as `V`; `expected` names it in EOF errors.
    fn parse_next<V: FromStr>(&mut self, expected: &'static str) -> Result<V, InstanceLoaderError> {
        let span = self
            .advance()?
            .ok_or(InstanceLoaderError::UnexpectedEof { expected })?;
        let token = &self.line[span];

        token.parse::<V>().map_err(|_| {
            InstanceLoaderError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<V>(),
                line: self.line_number,
            })
        })
    }

    /// Returns the next raw token and its line, if any.
    fn next_owned(&mut self) -> Result<Option<(String, usize)>, InstanceLoaderError> {
        Ok(self
            .advance()?
            .map(|span| (self.line[span].to_owned(), self.line_number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ItemIndex;

    type IntegerType = u64;

    fn load(s: &str) -> Result<Instance<IntegerType>, InstanceLoaderError> {
        InstanceLoader::<IntegerType>::new().from_str(s)
    }

    const COMMENTED_INSTANCE: &str = r#"
        # five items, three trips
        5 3
        3 2   # first two
        2 1 1
    "#;

    #[test]
    fn test_loads_two_line_layout() {
        let instance = load("3 2\n1 2 3\n").expect("Failed to load");
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.num_trips(), 2);
        assert_eq!(instance.weights(), &[1, 2, 3]);
    }

    #[test]
    fn test_ignores_comments_and_line_layout() {
        let instance = load(COMMENTED_INSTANCE).expect("Failed to load");
        assert_eq!(instance.weights(), &[3, 2, 2, 1, 1]);
        assert_eq!(instance.num_trips(), 3);
    }

    #[test]
    fn test_accepts_missing_final_newline() {
        let instance = load("1 1 5").expect("Failed to load");
        assert_eq!(instance.total_weight(), 5);
    }

    #[test]
    fn test_parse_error_structure() {
        match load("2 2\n4 garbage") {
            Err(InstanceLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert_eq!(e.line, 2);
                assert!(e.type_name.contains("u64"));
            }
            other => panic!("Expected Parse error with context, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_is_parse_error() {
        assert!(matches!(
            load("1 1 -3"),
            Err(InstanceLoaderError::Parse(ParseTokenError { ref token, .. })) if token == "-3"
        ));
    }

    #[test]
    fn test_unexpected_eof_names_missing_value() {
        assert!(matches!(
            load(""),
            Err(InstanceLoaderError::UnexpectedEof {
                expected: "item count"
            })
        ));
        assert!(matches!(
            load("4"),
            Err(InstanceLoaderError::UnexpectedEof {
                expected: "trip count"
            })
        ));
        assert!(matches!(
            load("3 1\n1 2"),
            Err(InstanceLoaderError::UnexpectedEof {
                expected: "item weight"
            })
        ));
    }

    #[test]
    fn test_overstated_item_count_is_eof_not_allocation() {
        assert!(matches!(
            load("1000000000000 1\n5\n"),
            Err(InstanceLoaderError::UnexpectedEof {
                expected: "item weight"
            })
        ));
    }

    #[test]
    fn test_huge_trip_count_loads() {
        let instance = load("2 2000000000000\n5 3").unwrap();
        assert_eq!(instance.num_trips(), 2_000_000_000_000);
        assert_eq!(instance.num_trip_slots(), 2);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(matches!(
            load("0 3"),
            Err(InstanceLoaderError::InvalidDimensions {
                num_items: 0,
                num_trips: 3
            })
        ));
        assert!(matches!(
            load("2 0 1 1"),
            Err(InstanceLoaderError::InvalidDimensions {
                num_items: 2,
                num_trips: 0
            })
        ));
    }

    #[test]
    fn test_zero_weight_surfaces_instance_error() {
        match load("3 1\n5 0 2") {
            Err(InstanceLoaderError::Instance(InstanceError::ZeroWeight { item })) => {
                assert_eq!(item, ItemIndex::new(1));
            }
            other => panic!("Expected ZeroWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_surfaces_instance_error() {
        let res = InstanceLoader::<u8>::new().from_str("2 1 200 100");
        assert!(matches!(
            res,
            Err(InstanceLoaderError::Instance(InstanceError::WeightOverflow { .. }))
        ));
    }

    #[test]
    fn test_trailing_input_strict_and_relaxed() {
        match load("1 1\n5\n6") {
            Err(InstanceLoaderError::TrailingInput { token, line }) => {
                assert_eq!(token, "6");
                assert_eq!(line, 3);
            }
            other => panic!("Expected TrailingInput, got {:?}", other),
        }

        let relaxed = InstanceLoader::<IntegerType>::new()
            .allow_trailing_input(true)
            .from_str("1 1\n5\n6")
            .expect("Failed to load");
        assert_eq!(relaxed.weights(), &[5]);
    }

    #[test]
    fn test_trailing_comment_is_not_trailing_input() {
        let instance = load("1 1 5 # done\n# really done\n").expect("Failed to load");
        assert_eq!(instance.weights(), &[5]);
    }

    #[test]
    fn test_error_display() {
        let err = load("2 2\n4 x").unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Parse error: Could not parse token 'x' on line 2 as type u64"
        );
    }
}
