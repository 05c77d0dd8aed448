use crate::error::{FreqError, FreqResult};
use std::io::BufRead;

/// One character in, one character out. Where the full mapping expands
/// (`İ` to `i` + U+0307), only the base character is kept.
pub fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lower-cases one character at a time, the same mapping the reader applies.
pub fn fold_case(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// Streams lower-cased characters out of a byte reader.
///
/// Decoding is strict: the first malformed or truncated UTF-8 sequence ends
/// the stream with [`FreqError::Decode`] carrying its byte offset.
pub struct CharReader<R> {
    inner: R,
    carry: Vec<u8>,
    decoded: Vec<char>,
    pos: usize,
    offset: u64,
    done: bool,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            carry: Vec::with_capacity(8),
            decoded: Vec::with_capacity(4096),
            pos: 0,
            offset: 0,
            done: false,
        }
    }

    fn refill(&mut self) -> FreqResult<bool> {
        self.decoded.clear();
        self.pos = 0;

        while self.decoded.is_empty() {
            let chunk = self.inner.fill_buf()?;
            if chunk.is_empty() {
                if !self.carry.is_empty() {
                    // Stream ended inside a multi-byte sequence.
                    return Err(FreqError::Decode {
                        offset: self.offset,
                    });
                }
                return Ok(false);
            }
            let n = chunk.len();
            self.carry.extend_from_slice(chunk);
            self.inner.consume(n);

            let valid_len = match std::str::from_utf8(&self.carry) {
                Ok(s) => s.len(),
                Err(e) if e.error_len().is_some() => {
                    return Err(FreqError::Decode {
                        offset: self.offset + e.valid_up_to() as u64,
                    });
                }
                Err(e) => e.valid_up_to(),
            };

            let text = std::str::from_utf8(&self.carry[..valid_len]).map_err(|e| {
                FreqError::Decode {
                    offset: self.offset + e.valid_up_to() as u64,
                }
            })?;
            self.decoded.extend(text.chars().map(lower_char));
            self.offset += valid_len as u64;
            self.carry.drain(..valid_len);
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for CharReader<R> {
    type Item = FreqResult<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pos >= self.decoded.len() {
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        let c = self.decoded[self.pos];
        self.pos += 1;
        Some(Ok(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn collect(bytes: &[u8]) -> FreqResult<String> {
        CharReader::new(Cursor::new(bytes.to_vec())).collect()
    }

    #[test]
    fn test_lowercases_on_read() {
        assert_eq!(collect("AbC Привет".as_bytes()).unwrap(), "abc привет");
    }

    #[test]
    fn test_sequence_split_across_chunks() {
        // Capacity 1 forces every multi-byte char to straddle refills.
        let text = "жёлтый ΣΑΣ";
        let reader = BufReader::with_capacity(1, Cursor::new(text.as_bytes().to_vec()));
        let out: String = CharReader::new(reader).collect::<FreqResult<_>>().unwrap();
        assert_eq!(out, "жёлтый σασ");
    }

    #[test]
    fn test_invalid_byte_is_fatal() {
        let err = collect(b"ab\xffcd").unwrap_err();
        assert!(matches!(err, FreqError::Decode { offset: 2 }));
    }

    #[test]
    fn test_truncated_tail_is_fatal() {
        // First byte of a two-byte sequence, then EOF.
        let err = collect(b"ok\xd0").unwrap_err();
        assert!(matches!(err, FreqError::Decode { offset: 2 }));
    }

    #[test]
    fn test_stops_after_error() {
        let mut reader = CharReader::new(Cursor::new(b"\xff".to_vec()));
        assert!(matches!(reader.next(), Some(Err(_))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(collect(b"").unwrap(), "");
    }

    #[test]
    fn test_expanding_lowercase_keeps_one_char() {
        assert_eq!(lower_char('İ'), 'i');
        assert_eq!(collect("İstanbul".as_bytes()).unwrap(), "istanbul");
        assert_eq!(fold_case("İZMİR"), "izmir");
    }

    #[test]
    fn test_fold_case_matches_reader() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
    }
}
