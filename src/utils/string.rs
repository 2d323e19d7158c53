use memchr::memchr;

/// Word characters for boundary checks: alphanumerics in any script plus `_`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `text[start..end]` is not glued to a word character on either side.
///
/// `start` and `end` must be char boundaries.
pub fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
}

/// Split on a single-byte delimiter without allocating.
///
/// A trailing delimiter does not produce an empty final slice.
pub fn split_efficient(text: &str, delimiter: u8) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut last = 0;
    std::iter::from_fn(move || {
        if last >= bytes.len() {
            return None;
        }
        match memchr(delimiter, &bytes[last..]) {
            Some(i) => {
                let new_last = last + i + 1;
                let slice = std::str::from_utf8(&bytes[last..last + i]).ok()?;
                last = new_last;
                Some(slice)
            }
            None => {
                let slice = std::str::from_utf8(&bytes[last..]).ok()?;
                last = bytes.len();
                Some(slice)
            }
        }
    })
}

/// Lines of `text`, with a trailing `\r` trimmed from each.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    split_efficient(text, b'\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_boundaries() {
        let text = "say ASAP_ now";
        assert!(is_whole_word(text, 0, 3));
        assert!(!is_whole_word(text, 4, 8));
        assert!(is_whole_word(text, 10, 13));
    }

    #[test]
    fn splits_lines_without_trailing_empty() {
        let lines: Vec<_> = split_lines("a\r\nب\n\nc\n").collect();
        assert_eq!(lines, vec!["a", "ب", "", "c"]);
    }
}
