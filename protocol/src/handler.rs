use crate::packets::*;

/// Receives decoded packets, one method per packet kind.
/// Every method returns whether the packet was consumed; unhandled kinds fall back to `false`.
pub trait PacketHandler {
    fn handle_play_status(&mut self, _packet: &PlayStatusPacket) -> bool {
        false
    }

    fn handle_disconnect(&mut self, _packet: &DisconnectPacket) -> bool {
        false
    }

    fn handle_text(&mut self, _packet: &TextPacket) -> bool {
        false
    }
}
