use std::fmt::Display;

use crate::*;

/// Values outside the named statuses are kept as `Unknown`, which only `PlayStatus::from` can build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayStatus {
    #[default]
    LoginSuccess,
    LoginFailedClient,
    LoginFailedServer,
    PlayerSpawn,
    LoginFailedInvalidTenant,
    LoginFailedVanillaEdu,
    LoginFailedEduVanilla,
    LoginFailedServerFull,
    Unknown(UnknownPlayStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownPlayStatus(i32);

impl UnknownPlayStatus {
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for PlayStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::LoginSuccess,
            1 => Self::LoginFailedClient,
            2 => Self::LoginFailedServer,
            3 => Self::PlayerSpawn,
            4 => Self::LoginFailedInvalidTenant,
            5 => Self::LoginFailedVanillaEdu,
            6 => Self::LoginFailedEduVanilla,
            7 => Self::LoginFailedServerFull,
            other => Self::Unknown(UnknownPlayStatus(other)),
        }
    }
}

impl From<PlayStatus> for i32 {
    fn from(value: PlayStatus) -> Self {
        match value {
            PlayStatus::LoginSuccess => 0,
            PlayStatus::LoginFailedClient => 1,
            PlayStatus::LoginFailedServer => 2,
            PlayStatus::PlayerSpawn => 3,
            PlayStatus::LoginFailedInvalidTenant => 4,
            PlayStatus::LoginFailedVanillaEdu => 5,
            PlayStatus::LoginFailedEduVanilla => 6,
            PlayStatus::LoginFailedServerFull => 7,
            PlayStatus::Unknown(other) => other.0,
        }
    }
}

impl Display for PlayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginSuccess => f.write_str("LOGIN_SUCCESS"),
            Self::LoginFailedClient => f.write_str("LOGIN_FAILED_CLIENT"),
            Self::LoginFailedServer => f.write_str("LOGIN_FAILED_SERVER"),
            Self::PlayerSpawn => f.write_str("PLAYER_SPAWN"),
            Self::LoginFailedInvalidTenant => f.write_str("LOGIN_FAILED_INVALID_TENANT"),
            Self::LoginFailedVanillaEdu => f.write_str("LOGIN_FAILED_VANILLA_EDU"),
            Self::LoginFailedEduVanilla => f.write_str("LOGIN_FAILED_EDU_VANILLA"),
            Self::LoginFailedServerFull => f.write_str("LOGIN_FAILED_SERVER_FULL"),
            Self::Unknown(other) => f.write_fmt(format_args!("UNKNOWN({})", other.0)),
        }
    }
}

impl DebugValue for PlayStatus {
    fn debug_value(&self) -> String {
        self.to_string()
    }
}

/// Login outcome, and later the signal that the player has spawned.
///
/// ```rust,compile_fail
/// let mut packet = bedrock_protocol::PlayStatusPacket::default();
/// packet.reason = String::new();
/// ```
#[derive(Packet, PacketDebug, Debug, Clone, Default, PartialEq, Eq)]
#[packet(id = protocol_info::PLAY_STATUS_PACKET, before_login = true)]
pub struct PlayStatusPacket {
    pub sub_client: SubClientIds,
    pub status: PlayStatus,
}

impl PlayStatusPacket {
    pub fn new(status: PlayStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

impl DataPacket for PlayStatusPacket {
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()> {
        self.status = PlayStatus::from(input.get_int()?);
        Ok(())
    }

    fn encode_payload(&self, out: &mut PacketWriter<'_>) {
        out.put_int(self.status.into());
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_play_status(self)
    }
}

impl ClientboundPacket for PlayStatusPacket {}
