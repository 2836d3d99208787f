use core::fmt;

use crate::codec::CodecError;

/// Errors returned by the driver. `E` is the bus error type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// An operation was attempted before [`Sgp4x::begin`](crate::Sgp4x::begin).
    NotInitialized,
    /// The operation is not supported by the configured sensor variant.
    WrongVariant,
    /// Writing a request frame failed.
    I2cWrite(E),
    /// Reading a response failed.
    I2cRead(E),
    /// The response held fewer bytes than requested.
    ShortResponse,
    /// A response word failed its checksum.
    Crc,
}

impl<E> Error<E> {
    /// Status code stored by the driver for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NotInitialized => ErrorCode::NotInitialized,
            Error::WrongVariant => ErrorCode::WrongVariant,
            Error::I2cWrite(_) => ErrorCode::I2cWrite,
            Error::I2cRead(_) => ErrorCode::I2cRead,
            Error::ShortResponse => ErrorCode::ShortResponse,
            Error::Crc => ErrorCode::Crc,
        }
    }
}

impl<E> From<CodecError> for Error<E> {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Crc => Error::Crc,
            CodecError::Length => Error::ShortResponse,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "driver not initialized"),
            Error::WrongVariant => write!(f, "command not supported by this sensor variant"),
            Error::I2cWrite(e) => write!(f, "I2C write failed: {:?}", e),
            Error::I2cRead(e) => write!(f, "I2C read failed: {:?}", e),
            Error::ShortResponse => write!(f, "response shorter than requested"),
            Error::Crc => write!(f, "CRC mismatch in response"),
        }
    }
}

impl<E> embedded_hal::i2c::Error for Error<E>
where
    E: embedded_hal::i2c::Error,
{
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Error::I2cWrite(e) | Error::I2cRead(e) => e.kind(),
            _ => embedded_hal::i2c::ErrorKind::Other,
        }
    }
}

#[cfg(feature = "thiserror")]
impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Last-error status kept by the driver, see [`Sgp4x::last_error`](crate::Sgp4x::last_error).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorCode {
    #[default]
    None = 0,
    NotInitialized = 1,
    WrongVariant = 2,
    I2cWrite = 3,
    I2cRead = 4,
    Crc = 5,
    ShortResponse = 6,
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{Error as _, ErrorKind, NoAcknowledgeSource};

    #[test]
    fn codes_are_distinct() {
        let errors: [Error<ErrorKind>; 6] = [
            Error::NotInitialized,
            Error::WrongVariant,
            Error::I2cWrite(ErrorKind::Other),
            Error::I2cRead(ErrorKind::Other),
            Error::ShortResponse,
            Error::Crc,
        ];
        let codes = errors.map(|e| u8::from(e.code()));
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn kind_is_forwarded() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
        assert_eq!(Error::I2cRead(nack).kind(), nack);
        assert_eq!(Error::<ErrorKind>::Crc.kind(), ErrorKind::Other);
    }

    #[test]
    fn codec_errors() {
        assert_eq!(Error::<ErrorKind>::from(CodecError::Crc), Error::Crc);
        assert_eq!(
            Error::<ErrorKind>::from(CodecError::Length),
            Error::ShortResponse
        );
    }
}
