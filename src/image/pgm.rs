//! Binary PGM (P5) codec.
//!
//! Header layout: magic `P5`, then whitespace-separated `width height maxgray`
//! in ASCII decimal, then exactly one whitespace byte, then `width * height`
//! raw 8-bit samples. `#` comments run to end of line and may appear wherever
//! header whitespace is allowed. Only `maxgray <= 255` is accepted, so every
//! sample is a single byte.
use super::{GrayImageU8, ImageView};
use crate::error::CodecError;

const MAGIC: &[u8; 2] = b"P5";
const MAX_GRAY: u32 = 255;

/// Parse a P5 byte stream into an owned grayscale image.
///
/// Bytes after the pixel data are ignored.
pub fn decode(bytes: &[u8]) -> Result<GrayImageU8, CodecError> {
    let mut cursor = HeaderCursor { rest: bytes };

    let magic = cursor.take(MAGIC.len());
    if magic != MAGIC {
        return Err(CodecError::BadMagic(
            String::from_utf8_lossy(magic).into_owned(),
        ));
    }
    if !cursor.at_separator() {
        return Err(CodecError::MalformedHeader {
            expected: "whitespace after magic number",
        });
    }

    let width = cursor.number("width")? as usize;
    let height = cursor.number("height")? as usize;
    let max_gray = cursor.number("maxgray")?;
    if max_gray == 0 || max_gray > MAX_GRAY {
        return Err(CodecError::UnsupportedMaxGray(max_gray));
    }

    match cursor.rest.split_first() {
        Some((b, tail)) if b.is_ascii_whitespace() => cursor.rest = tail,
        _ => {
            return Err(CodecError::MalformedHeader {
                expected: "single whitespace byte before pixel data",
            })
        }
    }

    let expected = width
        .checked_mul(height)
        .ok_or(CodecError::DimensionOverflow { width, height })?;
    if cursor.rest.len() < expected {
        return Err(CodecError::Truncated {
            expected,
            actual: cursor.rest.len(),
        });
    }
    GrayImageU8::new(width, height, cursor.rest[..expected].to_vec())
}

/// Serialize an image as P5 with `maxgray = 255`.
pub fn encode(image: &GrayImageU8) -> Vec<u8> {
    let header = format!("P5\n{} {}\n{}\n", image.width(), image.height(), MAX_GRAY);
    let mut out = Vec::with_capacity(header.len() + image.as_bytes().len());
    out.extend_from_slice(header.as_bytes());
    for row in image.rows() {
        out.extend_from_slice(row);
    }
    out
}

struct HeaderCursor<'a> {
    rest: &'a [u8],
}

impl<'a> HeaderCursor<'a> {
    fn take(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.rest.len());
        let (head, tail) = self.rest.split_at(n);
        self.rest = tail;
        head
    }

    fn at_separator(&self) -> bool {
        matches!(self.rest.first(), Some(b) if b.is_ascii_whitespace() || *b == b'#')
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.rest.first() {
                Some(b) if b.is_ascii_whitespace() => self.rest = &self.rest[1..],
                Some(b'#') => {
                    let line_end = self
                        .rest
                        .iter()
                        .position(|&b| b == b'\n')
                        .map_or(self.rest.len(), |p| p + 1);
                    self.rest = &self.rest[line_end..];
                }
                _ => break,
            }
        }
    }

    fn number(&mut self, field: &'static str) -> Result<u32, CodecError> {
        self.skip_whitespace_and_comments();
        let digits = self
            .rest
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            let found = self.rest.iter().take(8).copied().collect::<Vec<u8>>();
            return Err(CodecError::InvalidNumber {
                field,
                value: String::from_utf8_lossy(&found).into_owned(),
            });
        }
        let token = self.take(digits);
        // Digits only, so the UTF-8 conversion cannot fail; overflow can.
        let text = std::str::from_utf8(token).unwrap_or_default();
        let value = text.parse::<u32>().map_err(|_| CodecError::InvalidNumber {
            field,
            value: text.to_string(),
        })?;
        if !self.rest.is_empty() && !self.at_separator() {
            return Err(CodecError::MalformedHeader {
                expected: "whitespace between header fields",
            });
        }
        Ok(value)
    }
}
