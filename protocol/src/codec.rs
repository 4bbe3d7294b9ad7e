use bedrock_binary::NetworkBinaryStream;
use log::debug;

use crate::{
    config::CodecConfig,
    error::{PacketDecodeError, PayloadError},
    packet::{DataPacket, PacketCodec},
};

/// Decode a packet of type `P` out of `data`, the way a dispatcher does after looking up the type by ID:
/// construct it empty, decode into it, then check nothing was left over.
///
/// Leftover bytes are an error unless the packet allows them or `config.strict_trailing_bytes` is off,
/// in which case they are logged at debug level.
pub fn decode_packet<P: DataPacket + Default>(data: &[u8], config: &CodecConfig) -> Result<P, PacketDecodeError> {
    let mut stream = NetworkBinaryStream::from_bytes(data).limited_by(config.limits);

    let mut packet = P::default();
    packet.decode(&mut stream)?;

    if !packet.may_have_unread_bytes() && !stream.feof() {
        let remaining = stream.remaining();

        if config.strict_trailing_bytes {
            return Err(PacketDecodeError::BadPacket {
                packet: P::NAME,
                cause: PayloadError::UnreadBytes(remaining),
            });
        }

        debug!(
            "Still {remaining} bytes unread in {}: {}",
            P::NAME,
            hex::encode(&stream.as_bytes()[stream.offset()..])
        );
    }

    Ok(packet)
}

/// Encode `packet` into a fresh buffer.
pub fn encode_packet<P: DataPacket>(packet: &P) -> Vec<u8> {
    let mut stream = NetworkBinaryStream::new();
    packet.encode(&mut stream);
    stream.into_vec()
}
