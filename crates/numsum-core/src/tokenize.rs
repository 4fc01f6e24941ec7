use std::cmp::Reverse;

/// Split `body` on every occurrence of any of `delimiters`.
///
/// Matching is literal. Where several delimiters match at one position the
/// longest wins. Adjacent and trailing delimiters produce empty tokens, so the
/// result always has at least one element.
pub fn split_literal<'a>(body: &'a str, delimiters: &[String]) -> Vec<&'a str> {
    let mut by_len: Vec<&str> = delimiters
        .iter()
        .map(String::as_str)
        .filter(|d| !d.is_empty())
        .collect();
    by_len.sort_by_key(|d| Reverse(d.len()));

    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        if let Some(d) = by_len.iter().find(|d| rest.starts_with(**d)) {
            out.push(&body[start..i]);
            i += d.len();
            start = i;
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push(&body[start..]);
    out
}
