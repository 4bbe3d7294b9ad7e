use std::ops::{Deref, DerefMut};

use bedrock_binary::NetworkBinaryStream;
use log::trace;

use crate::{
    debug::PacketDebug,
    error::{HeaderError, PacketDecodeError, PayloadResult},
    handler::PacketHandler,
};

/// Compile-time facts about a packet type, emitted by `#[derive(Packet)]`.
pub trait PacketMetadata {
    const NETWORK_ID: u32;
    const NAME: &'static str;
    const CAN_BE_SENT_BEFORE_LOGIN: bool;
    const MAY_HAVE_UNREAD_BYTES: bool;
}

/// Routing IDs used to multiplex several split-screen clients over one connection. Not part of the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubClientIds {
    pub sender_sub_id: u8,
    pub recipient_sub_id: u8,
}

pub trait SubClient {
    fn sub_client(&self) -> &SubClientIds;
    fn sub_client_mut(&mut self) -> &mut SubClientIds;
}

/// Read side of the stream as seen by a packet while it is being decoded.
/// Only `PacketCodec::decode` can create one, so header and payload decoding can't be invoked on their own.
pub struct PacketReader<'a> {
    stream: &'a mut NetworkBinaryStream,
}

impl<'a> PacketReader<'a> {
    #[inline]
    pub(crate) fn new(stream: &'a mut NetworkBinaryStream) -> Self {
        Self { stream }
    }
}

impl Deref for PacketReader<'_> {
    type Target = NetworkBinaryStream;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.stream
    }
}

impl DerefMut for PacketReader<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stream
    }
}

/// Write side of the stream as seen by a packet while it is being encoded. Only `PacketCodec::encode` can create one.
pub struct PacketWriter<'a> {
    stream: &'a mut NetworkBinaryStream,
}

impl<'a> PacketWriter<'a> {
    #[inline]
    pub(crate) fn new(stream: &'a mut NetworkBinaryStream) -> Self {
        Self { stream }
    }
}

impl Deref for PacketWriter<'_> {
    type Target = NetworkBinaryStream;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.stream
    }
}

impl DerefMut for PacketWriter<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stream
    }
}

/// A packet of the network protocol.
///
/// Implementors derive `Packet` (for the id, name and capability flags) and `PacketDebug`,
/// then supply the two payload methods. Header handling has a default that should only be
/// replaced for packets with unusual framing.
pub trait DataPacket: PacketMetadata + SubClient + PacketDebug {
    #[inline]
    fn pid(&self) -> u32 {
        Self::NETWORK_ID
    }

    #[inline]
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// consulted by the session layer, the codec itself does not enforce it
    #[inline]
    fn can_be_sent_before_login(&self) -> bool {
        Self::CAN_BE_SENT_BEFORE_LOGIN
    }

    /// whether bytes left in the buffer after the payload are a known quirk of this packet instead of an error
    #[inline]
    fn may_have_unread_bytes(&self) -> bool {
        Self::MAY_HAVE_UNREAD_BYTES
    }

    fn decode_header(&mut self, input: &mut PacketReader<'_>) -> Result<(), HeaderError> {
        let pid = input.get_unsigned_var_int()?;
        if pid != Self::NETWORK_ID {
            return Err(HeaderError::IdentifierMismatch {
                expected: Self::NETWORK_ID,
                actual: pid,
            });
        }

        Ok(())
    }

    fn encode_header(&self, out: &mut PacketWriter<'_>) {
        out.put_unsigned_var_int(Self::NETWORK_ID);
    }

    /// Decodes the packet body, without the packet ID or other generic header fields.
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()>;

    /// Encodes the packet body, without the packet ID or other generic header fields.
    fn encode_payload(&self, out: &mut PacketWriter<'_>);

    /// pass the packet to the matching method of the handler, returns whether the handler consumed it
    fn handle(&self, handler: &mut dyn PacketHandler) -> bool;
}

/// The envelope around every packet: header first, then payload, in that order and always both.
/// Implemented for all `DataPacket` types, the blanket impl means no packet can replace it.
pub trait PacketCodec {
    /// Rewinds the stream and decodes the header and payload into `self`.
    /// On failure `self` may be partially populated and should be thrown away.
    fn decode(&mut self, stream: &mut NetworkBinaryStream) -> Result<(), PacketDecodeError>;

    /// Clears the stream and writes the header and payload of `self` into it.
    fn encode(&self, stream: &mut NetworkBinaryStream);
}

impl<P: DataPacket> PacketCodec for P {
    fn decode(&mut self, stream: &mut NetworkBinaryStream) -> Result<(), PacketDecodeError> {
        stream.rewind();

        let mut input = PacketReader::new(stream);
        self.decode_header(&mut input)
            .map_err(|err| PacketDecodeError::from_header(P::NAME, err))?;

        self.decode_payload(&mut input)
            .map_err(|cause| PacketDecodeError::BadPacket { packet: P::NAME, cause })?;

        trace!("decoded {} ({} bytes)", P::NAME, input.offset());
        Ok(())
    }

    fn encode(&self, stream: &mut NetworkBinaryStream) {
        stream.reset();

        let mut out = PacketWriter::new(stream);
        self.encode_header(&mut out);
        self.encode_payload(&mut out);

        trace!("encoded {} ({} bytes)", P::NAME, out.len());
    }
}

/// Marker for packets the server may send to the client.
pub trait ClientboundPacket: DataPacket {}

/// Marker for packets the client may send to the server.
pub trait ServerboundPacket: DataPacket {}
