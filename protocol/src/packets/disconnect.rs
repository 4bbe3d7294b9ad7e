use crate::*;

/// Tells the client it is being disconnected, optionally with a message to show.
///
/// ```rust,compile_fail
/// let mut packet = bedrock_protocol::DisconnectPacket::default();
/// packet.status = 0;
/// ```
#[derive(Packet, PacketDebug, Debug, Clone, Default, PartialEq, Eq)]
#[packet(id = protocol_info::DISCONNECT_PACKET, before_login = true)]
pub struct DisconnectPacket {
    pub sub_client: SubClientIds,
    pub hide_disconnection_screen: bool,
    /// only sent when the disconnection screen is shown
    pub message: String,
}

impl DisconnectPacket {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// disconnect without showing the client a reason
    pub fn silent() -> Self {
        Self {
            hide_disconnection_screen: true,
            ..Self::default()
        }
    }
}

impl DataPacket for DisconnectPacket {
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()> {
        self.hide_disconnection_screen = input.get_bool()?;
        self.message = if self.hide_disconnection_screen {
            String::new()
        } else {
            input.get_string()?
        };

        Ok(())
    }

    fn encode_payload(&self, out: &mut PacketWriter<'_>) {
        out.put_bool(self.hide_disconnection_screen);
        if !self.hide_disconnection_screen {
            out.put_string(&self.message);
        }
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_disconnect(self)
    }
}

impl ClientboundPacket for DisconnectPacket {}
impl ServerboundPacket for DisconnectPacket {}
