//! Protocol-wide constants. Packet IDs are assigned here and nowhere else.

/// network protocol version these packet layouts belong to
pub const CURRENT_PROTOCOL: u32 = 361;
pub const MINECRAFT_VERSION: &str = "v1.12.0";
pub const MINECRAFT_VERSION_NETWORK: &str = "1.12.0";

pub const LOGIN_PACKET: u32 = 0x01;
pub const PLAY_STATUS_PACKET: u32 = 0x02;
pub const SERVER_TO_CLIENT_HANDSHAKE_PACKET: u32 = 0x03;
pub const CLIENT_TO_SERVER_HANDSHAKE_PACKET: u32 = 0x04;
pub const DISCONNECT_PACKET: u32 = 0x05;
pub const RESOURCE_PACKS_INFO_PACKET: u32 = 0x06;
pub const RESOURCE_PACK_STACK_PACKET: u32 = 0x07;
pub const RESOURCE_PACK_CLIENT_RESPONSE_PACKET: u32 = 0x08;
pub const TEXT_PACKET: u32 = 0x09;
pub const SET_TIME_PACKET: u32 = 0x0a;
pub const START_GAME_PACKET: u32 = 0x0b;
