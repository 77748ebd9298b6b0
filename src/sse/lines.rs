//! Line handling shared by the event encoders.
//!
//! SSE knows three line terminators: `\r\n`, `\n` and a lone `\r`.
//! Any of them inside a field value would end the field early,
//! so multi-line text is split on all three before it is written.

/// Iterator over the lines of a str, see [`split_lines`].
#[derive(Debug, Clone)]
pub(crate) struct Lines<'a> {
    rest: &'a str,
}

/// Split `s` into lines on `\r\n`, `\n` and `\r`.
///
/// The terminators are not part of the yielded lines.
/// A trailing terminator does not produce an extra empty line,
/// and an empty input yields no lines at all.
pub(crate) fn split_lines(s: &str) -> Lines<'_> {
    Lines { rest: s }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match memchr::memchr2(b'\n', b'\r', bytes) {
            Some(delimiter) => {
                let line = &self.rest[..delimiter];
                let skip = if bytes[delimiter] == b'\r' && bytes.get(delimiter + 1) == Some(&b'\n')
                {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[delimiter + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

/// Returns true if `s` contains any SSE line terminator.
pub(crate) fn contains_line_break(s: &str) -> bool {
    memchr::memchr2(b'\n', b'\r', s.as_bytes()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<&str> {
        split_lines(s).collect()
    }

    #[test]
    fn test_split_lines() {
        let test_cases: Vec<(&str, Vec<&str>)> = vec![
            ("", vec![]),
            ("foo", vec!["foo"]),
            ("foo\n", vec!["foo"]),
            ("\n", vec![""]),
            ("foo\nbar", vec!["foo", "bar"]),
            ("foo\r\nbar\r\n", vec!["foo", "bar"]),
            ("foo\rbar", vec!["foo", "bar"]),
            ("foo\n\nbar", vec!["foo", "", "bar"]),
            ("foo\n\r\nbar", vec!["foo", "", "bar"]),
            ("foo\r\rbar", vec!["foo", "", "bar"]),
            ("  indented\n\ttabbed  ", vec!["  indented", "\ttabbed  "]),
            ("héllo\nwörld", vec!["héllo", "wörld"]),
        ];
        for (input, expected) in test_cases {
            assert_eq!(lines(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_contains_line_break() {
        assert!(!contains_line_break(""));
        assert!(!contains_line_break("#foo > .bar"));
        assert!(contains_line_break("#foo\n"));
        assert!(contains_line_break("\r#foo"));
    }
}
