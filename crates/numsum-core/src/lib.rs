//! numsum — Delimited Integer String Summation (core library)
//!
//! This crate provides the summing engine behind the `numsum` CLI and Python
//! module.
//!
//! ```
//! assert_eq!(numsum_core::sum("1,2\n3"), Ok(6));
//! assert_eq!(numsum_core::sum(";\n1;2"), Ok(3));
//! ```

mod header;
mod summer;
mod tokenize;

#[cfg(test)]
mod proptests;

use thiserror::Error;

pub use header::{parse_header, DelimiterSpec, DEFAULT_DELIMITERS, HEADER_MARKER};
pub use summer::Summer;
pub use tokenize::split_literal;

/// Library error type.
///
/// A failed sum never carries a partial total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// One or more operands were negative. `offenders` keeps input order.
    #[error("negatives not allowed: {}", join_offenders(.offenders))]
    NegativeNumber { offenders: Vec<i32> },
    /// A non-empty token is not a base-10 integer.
    #[error("invalid number: {token:?}")]
    Format { token: String },
}

fn join_offenders(offenders: &[i32]) -> String {
    offenders
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sum `input` with the default delimiters and header recognition enabled.
pub fn sum(input: &str) -> Result<i64, SumError> {
    Summer::default().sum(input)
}
