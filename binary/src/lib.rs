//! bedrock-binary - the byte stream underneath the bedrock packet codec.
//! Provides `NetworkBinaryStream`, a cursor-based reader/writer over a `ByteBuffer` with the primitives
//! the protocol is built from (bytes, booleans, fixed-width integers, varints and varint-prefixed strings).
//!
//! Also provides the traits `Encodable` and `Decodable` for types that know how to write and read themselves,
//! with implementations for the common primitives, strings, vectors and `RemainderBytes`.

#![allow(
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
use std::fmt::Display;

mod common;
mod limits;
mod stream;
pub mod types;

pub use bytebuffer::ByteBuffer;
pub use limits::StreamLimits;
pub use stream::NetworkBinaryStream;
pub use types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    NotEnoughData,
    InvalidStringValue,
    VarIntTooLong,
    LengthLimitExceeded { length: usize, limit: usize },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughData => f.write_str("could not read enough bytes from the stream"),
            Self::InvalidStringValue => f.write_str("invalid string was passed, likely not properly UTF-8 encoded"),
            Self::VarIntTooLong => f.write_str("varint did not terminate within the maximum number of bytes"),
            Self::LengthLimitExceeded { length, limit } => {
                f.write_fmt(format_args!("length prefix {length} exceeds the limit of {limit}"))
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<std::io::Error> for DecodeError {
    fn from(_: std::io::Error) -> Self {
        Self::NotEnoughData
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::InvalidStringValue
    }
}

pub type DecodeResult<T> = core::result::Result<T, DecodeError>;

pub trait Encodable {
    fn encode(&self, stream: &mut NetworkBinaryStream);
}

pub trait Decodable {
    fn decode(stream: &mut NetworkBinaryStream) -> DecodeResult<Self>
    where
        Self: Sized;
}

/// Simple and compact way of implementing `Decodable::decode`.
///
/// Example usage:
/// ```rust
/// use bedrock_binary::*;
/// struct Type {
///     some_val: String,
/// }
///
/// decode_impl!(Type, stream, {
///     Ok(Self { some_val: stream.get_string()? })
/// });
/// ```
#[macro_export]
macro_rules! decode_impl {
    ($typ:ty, $stream:ident, $decode:expr) => {
        impl $crate::Decodable for $typ {
            #[inline]
            fn decode($stream: &mut $crate::NetworkBinaryStream) -> $crate::DecodeResult<Self> {
                $decode
            }
        }
    };
}

/// Simple and compact way of implementing `Encodable::encode`.
///
/// Example usage:
/// ```rust
/// use bedrock_binary::*;
/// struct Type {
///     some_val: String,
/// }
///
/// encode_impl!(Type, stream, self, {
///     stream.put_string(&self.some_val);
/// });
/// ```
#[macro_export]
macro_rules! encode_impl {
    ($typ:ty, $stream:ident, $self:ident, $encode:expr) => {
        impl $crate::Encodable for $typ {
            #[inline]
            fn encode(&$self, $stream: &mut $crate::NetworkBinaryStream) {
                $encode
            }
        }
    };
}

// Tests.
