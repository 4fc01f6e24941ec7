//! numsum — Delimited Integer String Summation
//!
//! This crate re-exports the summing engine from `numsum-core` for the
//! `numsum` CLI and the Python extension module.

#[cfg(feature = "pyo3")]
mod python;

pub use numsum_core::{
    parse_header, split_literal, sum, DelimiterSpec, SumError, Summer, DEFAULT_DELIMITERS,
    HEADER_MARKER,
};

/// Decode `\n`, `\r`, `\t` and `\\` escapes in a command-line expression.
///
/// Unknown escapes are kept verbatim, backslash included.
pub fn unescape(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut chars = arg.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
