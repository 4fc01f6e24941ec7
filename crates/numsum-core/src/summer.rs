use log::{debug, trace};

use crate::header::{DelimiterSpec, DEFAULT_DELIMITERS};
use crate::tokenize::split_literal;
use crate::SumError;

/// Sums delimited integer strings.
///
/// The default configuration splits on `,` and `\n` and honours a leading
/// `;<delimiter>\n` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summer {
    defaults: Vec<String>,
    headers: bool,
}

impl Default for Summer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summer {
    pub fn new() -> Self {
        Self {
            defaults: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            headers: true,
        }
    }

    /// Replace the delimiters used when no header is present.
    ///
    /// Empty strings are dropped. With no delimiters left the whole body is a
    /// single token.
    pub fn with_default_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults = delimiters
            .into_iter()
            .map(Into::into)
            .filter(|d: &String| !d.is_empty())
            .collect();
        self
    }

    /// Treat the whole input as the body, even when it starts with `;`.
    pub fn without_header(mut self) -> Self {
        self.headers = false;
        self
    }

    pub fn default_delimiters(&self) -> &[String] {
        &self.defaults
    }

    pub fn headers_enabled(&self) -> bool {
        self.headers
    }

    /// Resolve the active delimiters and body for `input`.
    pub fn delimiters_for<'a>(&self, input: &'a str) -> DelimiterSpec<'a> {
        DelimiterSpec::resolve(input, &self.defaults, self.headers)
    }

    /// Parse every non-empty token of `input`, in input order.
    ///
    /// Stops at the first token that is not an integer. Negative values are
    /// returned as-is; see [`Summer::sum`] for the negative check.
    pub fn parse(&self, input: &str) -> Result<Vec<i32>, SumError> {
        let spec = self.delimiters_for(input);
        debug!(
            "summing {} byte(s) with delimiters {:?} (custom: {})",
            spec.body.len(),
            spec.delimiters,
            spec.custom
        );
        split_literal(spec.body, &spec.delimiters)
            .into_iter()
            .filter(|tok| !tok.is_empty())
            .map(parse_token)
            .collect()
    }

    /// Negative operands of `input`, in input order.
    pub fn negatives(&self, input: &str) -> Result<Vec<i32>, SumError> {
        Ok(self.parse(input)?.into_iter().filter(|n| *n < 0).collect())
    }

    /// Sum the integers in `input`.
    ///
    /// Fails with [`SumError::Format`] on the first malformed token, otherwise
    /// with [`SumError::NegativeNumber`] listing every negative operand.
    pub fn sum(&self, input: &str) -> Result<i64, SumError> {
        let numbers = self.parse(input)?;
        let offenders: Vec<i32> = numbers.iter().copied().filter(|n| *n < 0).collect();
        if !offenders.is_empty() {
            debug!("rejecting {} negative operand(s)", offenders.len());
            return Err(SumError::NegativeNumber { offenders });
        }
        Ok(numbers.into_iter().map(i64::from).sum())
    }
}

fn parse_token(tok: &str) -> Result<i32, SumError> {
    trace!("token {tok:?}");
    tok.parse::<i32>().map_err(|_| SumError::Format {
        token: tok.to_string(),
    })
}
