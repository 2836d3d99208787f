//! Request and response frames.
//!
//! A request is the big-endian opcode followed by up to two data words, each
//! sent as `[msb, lsb, crc]`. A response is a run of such triplets.

use crate::crc::{check, crc};

/// Maximum number of data words carried by a request.
pub const MAX_TX_WORDS: usize = 2;

/// Opcode plus the largest argument block.
pub const MAX_TX_BYTES: usize = 2 + 3 * MAX_TX_WORDS;

/// Response-side decoding failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer does not hold exactly three bytes per expected word.
    Length,
    /// A word's checksum byte does not match its data bytes.
    Crc,
}

/// An encoded request, ready to be written to the bus in one transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    buf: [u8; MAX_TX_BYTES],
    len: usize,
}

impl Frame {
    /// Opcode-only frame.
    pub fn command(opcode: u16) -> Self {
        let mut buf = [0; MAX_TX_BYTES];
        buf[..2].copy_from_slice(&opcode.to_be_bytes());
        Self { buf, len: 2 }
    }

    /// Frame with zero, one or two checksummed data words.
    pub fn with_words<const N: usize>(opcode: u16, words: [u16; N]) -> Self {
        const { assert!(N <= MAX_TX_WORDS, "request carries at most two words") };
        let mut frame = Self::command(opcode);
        for word in words {
            let bytes = word.to_be_bytes();
            frame.buf[frame.len..frame.len + 2].copy_from_slice(&bytes);
            frame.buf[frame.len + 2] = crc(&bytes);
            frame.len += 3;
        }
        frame
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Decodes `N` checksummed words from `buf`.
///
/// Every checksum is verified before any word is produced, so a single bad
/// triplet fails the whole response.
pub fn decode_words<const N: usize>(buf: &[u8]) -> Result<[u16; N], CodecError> {
    if buf.len() != 3 * N {
        return Err(CodecError::Length);
    }
    if !check(buf) {
        return Err(CodecError::Crc);
    }
    let mut words = [0u16; N];
    for (word, triplet) in words.iter_mut().zip(buf.chunks_exact(3)) {
        *word = u16::from_be_bytes([triplet[0], triplet[1]]);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_only_frame() {
        let frame = Frame::command(0x3682);
        assert_eq!(frame.as_bytes(), &[0x36, 0x82]);
        assert_eq!(Frame::with_words(0x3615, []).as_bytes(), &[0x36, 0x15]);
    }

    #[test]
    fn frame_with_default_compensation() {
        let frame = Frame::with_words(0x2619, [0x8000, 0x6666]);
        assert_eq!(
            frame.as_bytes(),
            &[0x26, 0x19, 0x80, 0x00, 0xa2, 0x66, 0x66, 0x93]
        );
    }

    #[test]
    fn frame_with_one_word() {
        let frame = Frame::with_words(0x1234, [0xbeef]);
        assert_eq!(frame.as_bytes(), &[0x12, 0x34, 0xbe, 0xef, 0x92]);
    }

    #[test]
    fn decode_two_words() {
        let words: [u16; 2] = decode_words(&[0x12, 0x34, 0x37, 0xbe, 0xef, 0x92]).unwrap();
        assert_eq!(words, [0x1234, 0xbeef]);
    }

    #[test]
    fn flipped_bit_fails_whole_response() {
        // First word is intact, second has one data bit flipped.
        let result: Result<[u16; 2], _> = decode_words(&[0x12, 0x34, 0x37, 0xbe, 0xee, 0x92]);
        assert_eq!(result, Err(CodecError::Crc));
    }

    #[test]
    fn short_response() {
        let result: Result<[u16; 2], _> = decode_words(&[0x12, 0x34, 0x37, 0xbe, 0xef]);
        assert_eq!(result, Err(CodecError::Length));
    }
}
