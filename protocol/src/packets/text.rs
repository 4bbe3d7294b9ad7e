use std::fmt::Display;

use crate::*;

/// Kind of a `TextPacket`, decides which fields follow on the wire.
///
/// Bytes outside the known kinds are kept as `Unknown` so that newer clients sending
/// kinds this crate doesn't know about can still be decoded and passed along.
/// An `Unknown` can only be made through `TextType::from`, so it never holds a known kind's byte:
/// ```rust,compile_fail
/// let kind = bedrock_protocol::TextType::Unknown(bedrock_protocol::UnknownTextType(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextType {
    #[default]
    Raw,
    Chat,
    Translation,
    Popup,
    JukeboxPopup,
    Tip,
    System,
    Whisper,
    Announcement,
    Json,
    Unknown(UnknownTextType),
}

/// Byte of a kind outside `TextType`'s named variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownTextType(u8);

impl UnknownTextType {
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// kinds that carry a source name before the message
pub const SOURCE_NAME_TYPES: [TextType; 3] = [TextType::Chat, TextType::Whisper, TextType::Announcement];
/// kinds that carry only the message
pub const MESSAGE_ONLY_TYPES: [TextType; 4] = [TextType::Raw, TextType::Tip, TextType::System, TextType::Json];
/// kinds that carry the message followed by a parameter list
pub const PARAMETER_TYPES: [TextType; 3] = [TextType::Translation, TextType::Popup, TextType::JukeboxPopup];

impl TextType {
    #[inline]
    pub fn has_source_name(self) -> bool {
        SOURCE_NAME_TYPES.contains(&self)
    }

    /// message with nothing after it: the message-only kinds plus the source name kinds, which end the same way
    #[inline]
    pub fn has_plain_message(self) -> bool {
        self.has_source_name() || MESSAGE_ONLY_TYPES.contains(&self)
    }

    #[inline]
    pub fn has_parameters(self) -> bool {
        PARAMETER_TYPES.contains(&self)
    }

    #[inline]
    pub fn has_message(self) -> bool {
        self.has_plain_message() || self.has_parameters()
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<u8> for TextType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Raw,
            1 => Self::Chat,
            2 => Self::Translation,
            3 => Self::Popup,
            4 => Self::JukeboxPopup,
            5 => Self::Tip,
            6 => Self::System,
            7 => Self::Whisper,
            8 => Self::Announcement,
            9 => Self::Json,
            other => Self::Unknown(UnknownTextType(other)),
        }
    }
}

impl From<TextType> for u8 {
    fn from(value: TextType) -> Self {
        match value {
            TextType::Raw => 0,
            TextType::Chat => 1,
            TextType::Translation => 2,
            TextType::Popup => 3,
            TextType::JukeboxPopup => 4,
            TextType::Tip => 5,
            TextType::System => 6,
            TextType::Whisper => 7,
            TextType::Announcement => 8,
            TextType::Json => 9,
            TextType::Unknown(other) => other.0,
        }
    }
}

impl Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => f.write_str("RAW"),
            Self::Chat => f.write_str("CHAT"),
            Self::Translation => f.write_str("TRANSLATION"),
            Self::Popup => f.write_str("POPUP"),
            Self::JukeboxPopup => f.write_str("JUKEBOX_POPUP"),
            Self::Tip => f.write_str("TIP"),
            Self::System => f.write_str("SYSTEM"),
            Self::Whisper => f.write_str("WHISPER"),
            Self::Announcement => f.write_str("ANNOUNCEMENT"),
            Self::Json => f.write_str("JSON"),
            Self::Unknown(other) => f.write_fmt(format_args!("UNKNOWN({})", other.0)),
        }
    }
}

impl DebugValue for TextType {
    fn debug_value(&self) -> String {
        self.to_string()
    }
}

/// Chat, system messages, popups and tips, in both directions.
///
/// Which optional fields are used depends on `text_type`:
/// `source_name` for chat, whisper and announcement, `parameters` for translation and the popups.
/// Fields that don't apply are ignored when encoding and left at their default when decoding.
///
/// Packets are plain structs, so touching a field that doesn't exist does not compile:
/// ```rust,compile_fail
/// let mut packet = bedrock_protocol::TextPacket::default();
/// packet.sender = String::new();
/// ```
#[derive(Packet, PacketDebug, Debug, Clone, Default, PartialEq, Eq)]
#[packet(id = protocol_info::TEXT_PACKET)]
pub struct TextPacket {
    pub sub_client: SubClientIds,
    pub text_type: TextType,
    pub needs_translation: bool,
    pub source_name: String,
    pub message: String,
    pub parameters: Vec<String>,
    pub xbox_user_id: String,
    pub platform_chat_id: String,
}

impl TextPacket {
    fn with_type(text_type: TextType, message: impl Into<String>) -> Self {
        Self {
            text_type,
            message: message.into(),
            ..Self::default()
        }
    }

    fn with_source(text_type: TextType, source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::with_type(text_type, message)
        }
    }

    fn with_parameters(text_type: TextType, key: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            needs_translation: true,
            parameters,
            ..Self::with_type(text_type, key)
        }
    }

    pub fn raw(message: impl Into<String>) -> Self {
        Self::with_type(TextType::Raw, message)
    }

    pub fn chat(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_source(TextType::Chat, source_name, message)
    }

    pub fn whisper(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_source(TextType::Whisper, source_name, message)
    }

    pub fn announcement(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_source(TextType::Announcement, source_name, message)
    }

    /// translated message, `key` is looked up in the client's language files and filled in with `parameters`
    pub fn translation(key: impl Into<String>, parameters: Vec<String>) -> Self {
        Self::with_parameters(TextType::Translation, key, parameters)
    }

    pub fn popup(message: impl Into<String>) -> Self {
        Self::with_type(TextType::Popup, message)
    }

    pub fn translated_popup(key: impl Into<String>, parameters: Vec<String>) -> Self {
        Self::with_parameters(TextType::Popup, key, parameters)
    }

    pub fn jukebox_popup(key: impl Into<String>, parameters: Vec<String>) -> Self {
        Self::with_parameters(TextType::JukeboxPopup, key, parameters)
    }

    pub fn tip(message: impl Into<String>) -> Self {
        Self::with_type(TextType::Tip, message)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::with_type(TextType::System, message)
    }

    pub fn json(message: impl Into<String>) -> Self {
        Self::with_type(TextType::Json, message)
    }

    #[must_use]
    pub fn with_xbox_user_id(mut self, xbox_user_id: impl Into<String>) -> Self {
        self.xbox_user_id = xbox_user_id.into();
        self
    }

    #[must_use]
    pub fn with_platform_chat_id(mut self, platform_chat_id: impl Into<String>) -> Self {
        self.platform_chat_id = platform_chat_id.into();
        self
    }
}

impl DataPacket for TextPacket {
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()> {
        // start from a clean slate so fields from a previous use of this value don't leak through
        *self = Self {
            sub_client: self.sub_client,
            ..Self::default()
        };

        self.text_type = TextType::from(input.get_byte()?);
        self.needs_translation = input.get_bool()?;

        let text_type = self.text_type;
        if text_type.has_source_name() {
            self.source_name = input.get_string()?;
        }

        if text_type.has_plain_message() {
            self.message = input.get_string()?;
        } else if text_type.has_parameters() {
            self.message = input.get_string()?;

            let count = input.get_array_len()?;
            self.parameters = Vec::with_capacity(count.min(input.remaining()));
            for _ in 0..count {
                self.parameters.push(input.get_string()?);
            }
        }

        self.xbox_user_id = input.get_string()?;
        self.platform_chat_id = input.get_string()?;

        Ok(())
    }

    fn encode_payload(&self, out: &mut PacketWriter<'_>) {
        let text_type = self.text_type;

        out.put_byte(text_type.into());
        out.put_bool(self.needs_translation);

        if text_type.has_source_name() {
            out.put_string(&self.source_name);
        }

        if text_type.has_plain_message() {
            out.put_string(&self.message);
        } else if text_type.has_parameters() {
            out.put_string(&self.message);
            out.put_array_len(self.parameters.len());
            for parameter in &self.parameters {
                out.put_string(parameter);
            }
        }

        out.put_string(&self.xbox_user_id);
        out.put_string(&self.platform_chat_id);
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_text(self)
    }
}

impl ClientboundPacket for TextPacket {}
impl ServerboundPacket for TextPacket {}
