/// Delimiter used when the header line names none (`";\n"`).
pub const HEADER_MARKER: &str = ";";

/// Delimiters active when the input has no custom-delimiter header.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// The delimiters resolved for one input, and the body they split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSpec<'a> {
    pub delimiters: Vec<String>,
    pub body: &'a str,
    /// True when `delimiters` came from a header line.
    pub custom: bool,
}

impl<'a> DelimiterSpec<'a> {
    /// Resolve the active delimiters for `input`.
    ///
    /// With a header, the custom delimiter replaces `defaults` but `\n` stays
    /// active so that the body may still span several lines.
    pub fn resolve(input: &'a str, defaults: &[String], headers: bool) -> Self {
        if headers {
            if let Some((custom, body)) = parse_header(input) {
                return Self {
                    delimiters: vec![custom, "\n".to_string()],
                    body,
                    custom: true,
                };
            }
        }
        Self {
            delimiters: defaults.to_vec(),
            body: input,
            custom: false,
        }
    }
}

/// Split a `;<delimiter>\n` header off the start of `input`.
///
/// Returns the delimiter literal and the remaining body. An empty literal
/// means the delimiter is `;` itself. Returns `None` when there is no header.
///
/// The header line ends at the first `\n`; a preceding `\r` belongs to the
/// literal.
pub fn parse_header(input: &str) -> Option<(String, &str)> {
    let (literal, body) = input.strip_prefix(HEADER_MARKER)?.split_once('\n')?;
    let delimiter = if literal.is_empty() { HEADER_MARKER } else { literal };
    Some((delimiter.to_string(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn bare_marker_is_the_delimiter() {
        let (delim, body) = parse_header(";\n1;2").unwrap();
        assert_eq!(delim, ";");
        assert_eq!(body, "1;2");
    }

    #[test]
    fn literal_after_marker_is_the_delimiter() {
        let (delim, body) = parse_header(";***\n1***2").unwrap();
        assert_eq!(delim, "***");
        assert_eq!(body, "1***2");
    }

    #[test]
    fn carriage_return_is_part_of_the_literal() {
        let (delim, body) = parse_header(";#\r\n1#\r2").unwrap();
        assert_eq!(delim, "#\r");
        assert_eq!(body, "1#\r2");
    }

    #[test]
    fn header_splits_at_first_newline() {
        let (delim, body) = parse_header(";ab\n1ab2\n3").unwrap();
        assert_eq!(delim, "ab");
        assert_eq!(body, "1ab2\n3");
    }

    #[test]
    fn no_header_without_newline() {
        assert!(parse_header(";1;2").is_none());
        assert!(parse_header("1,2").is_none());
        assert!(parse_header("").is_none());
    }

    #[test]
    fn header_keeps_newline_and_drops_comma() {
        let spec = DelimiterSpec::resolve(";|\n1|2", &defaults(), true);
        assert!(spec.custom);
        assert_eq!(spec.delimiters, vec!["|".to_string(), "\n".to_string()]);
        assert_eq!(spec.body, "1|2");
    }

    #[test]
    fn headers_disabled_uses_whole_input() {
        let spec = DelimiterSpec::resolve(";\n1", &defaults(), false);
        assert!(!spec.custom);
        assert_eq!(spec.body, ";\n1");
        assert_eq!(spec.delimiters, defaults());
    }
}
