//! bedrock-protocol - packet envelope and payload codecs for the bedrock network protocol.
//!
//! Every packet is a plain struct implementing `DataPacket`, which supplies the payload half of the codec.
//! The envelope (identifier header, cursor handling, error wrapping) is provided by `PacketCodec`,
//! which is implemented for every `DataPacket` and cannot be overridden.
//!
//! ```rust
//! use bedrock_protocol::*;
//!
//! let packet = TextPacket::chat("Alice", "hi");
//! let data = encode_packet(&packet);
//!
//! let decoded: TextPacket = decode_packet(&data, &CodecConfig::default()).unwrap();
//! assert_eq!(decoded, packet);
//! ```

#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

// lets the derive macros refer to `::bedrock_protocol` from inside this crate too
extern crate self as bedrock_protocol;

pub mod codec;
pub mod config;
pub mod debug;
pub mod error;
pub mod handler;
pub mod logger;
pub mod packet;
pub mod packets;
pub mod protocol_info;

pub use bedrock_binary::{self as binary, DecodeError, DecodeResult, NetworkBinaryStream, RemainderBytes, StreamLimits};
pub use bedrock_derive::*;

pub use codec::{decode_packet, encode_packet};
pub use config::CodecConfig;
pub use debug::{DebugInfo, DebugValue, PacketDebug};
pub use error::{HeaderError, PacketDecodeError, PayloadError, PayloadResult};
pub use handler::PacketHandler;
pub use packet::*;
pub use packets::*;
