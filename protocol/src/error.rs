use std::{borrow::Cow, fmt::Display};

use bedrock_binary::DecodeError;

/// Failure while decoding a packet payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    Stream(DecodeError),             // a primitive read failed, usually the buffer ran out
    Malformed(Cow<'static, str>),    // the payload was read fine but its contents were rejected
    UnreadBytes(usize),              // the payload ended before the buffer did
}

pub type PayloadResult<T> = core::result::Result<T, PayloadError>;

impl PayloadError {
    pub fn malformed(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Malformed(reason.into())
    }
}

impl From<DecodeError> for PayloadError {
    fn from(value: DecodeError) -> Self {
        Self::Stream(value)
    }
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stream(err) => Display::fmt(err, f),
            Self::Malformed(reason) => f.write_fmt(format_args!("malformed payload: {reason}")),
            Self::UnreadBytes(n) => f.write_fmt(format_args!("still {n} bytes unread")),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure while decoding the generic packet header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    IdentifierMismatch { expected: u32, actual: u32 },
    Payload(PayloadError),
}

impl From<DecodeError> for HeaderError {
    fn from(value: DecodeError) -> Self {
        Self::Payload(PayloadError::Stream(value))
    }
}

impl From<PayloadError> for HeaderError {
    fn from(value: PayloadError) -> Self {
        Self::Payload(value)
    }
}

/// The only error `PacketCodec::decode` returns.
///
/// `BadPacket` means the data was bad: it ran out early, failed validation or had garbage at the end.
/// `IdentifierMismatch` means the packet was handed bytes that belong to a different packet type,
/// which is a bug in whatever routed the data here, so it is kept separate instead of being wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketDecodeError {
    IdentifierMismatch {
        packet: &'static str,
        expected: u32,
        actual: u32,
    },
    BadPacket {
        packet: &'static str,
        cause: PayloadError,
    },
}

impl PacketDecodeError {
    pub(crate) fn from_header(packet: &'static str, err: HeaderError) -> Self {
        match err {
            HeaderError::IdentifierMismatch { expected, actual } => Self::IdentifierMismatch {
                packet,
                expected,
                actual,
            },
            HeaderError::Payload(cause) => Self::BadPacket { packet, cause },
        }
    }

    /// name of the packet that failed to decode
    pub fn packet(&self) -> &'static str {
        match self {
            Self::IdentifierMismatch { packet, .. } | Self::BadPacket { packet, .. } => packet,
        }
    }

    /// whether this points at a dispatch bug rather than bad network data
    pub fn is_logic_error(&self) -> bool {
        matches!(self, Self::IdentifierMismatch { .. })
    }

    pub fn cause(&self) -> Option<&PayloadError> {
        match self {
            Self::BadPacket { cause, .. } => Some(cause),
            Self::IdentifierMismatch { .. } => None,
        }
    }
}

impl Display for PacketDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierMismatch {
                packet,
                expected,
                actual,
            } => f.write_fmt(format_args!("{packet}: expected {expected} for packet ID, got {actual}")),
            Self::BadPacket { packet, cause } => f.write_fmt(format_args!("{packet}: {cause}")),
        }
    }
}

impl std::error::Error for PacketDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadPacket { cause, .. } => Some(cause),
            Self::IdentifierMismatch { .. } => None,
        }
    }
}
