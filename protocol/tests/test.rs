#![allow(clippy::wildcard_imports)]
use bedrock_protocol::{logger::*, *};

/* packets only used by the tests */

#[derive(Packet, PacketDebug, Debug, Default)]
#[packet(id = 0xfe, unread_bytes = true)]
struct QuirkyPacket {
    sub_client: SubClientIds,
    value: u8,
}

impl DataPacket for QuirkyPacket {
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()> {
        self.value = input.get_byte()?;
        if self.value == 0xff {
            return Err(PayloadError::malformed("0xff is reserved"));
        }

        Ok(())
    }

    fn encode_payload(&self, out: &mut PacketWriter<'_>) {
        out.put_byte(self.value);
    }

    fn handle(&self, _handler: &mut dyn PacketHandler) -> bool {
        false
    }
}

#[derive(Packet, PacketDebug, Debug, Default)]
#[packet(id = 0xfd, name = "Blob")]
struct BlobPacket {
    sub_client: SubClientIds,
    label: String,
    payload: RemainderBytes,
}

impl DataPacket for BlobPacket {
    fn decode_payload(&mut self, input: &mut PacketReader<'_>) -> PayloadResult<()> {
        self.label = input.get_string()?;
        self.payload = input.get_value()?;
        Ok(())
    }

    fn encode_payload(&self, out: &mut PacketWriter<'_>) {
        out.put_string(&self.label);
        out.put_value(&self.payload);
    }

    fn handle(&self, _handler: &mut dyn PacketHandler) -> bool {
        false
    }
}

/* helpers */

fn round_trip<P: DataPacket + Default + PartialEq + std::fmt::Debug>(packet: &P) {
    let data = encode_packet(packet);
    let decoded: P = decode_packet(&data, &CodecConfig::default()).unwrap();
    assert_eq!(&decoded, packet);
}

fn payload_stream(pid: u32, build: impl FnOnce(&mut NetworkBinaryStream)) -> NetworkBinaryStream {
    let mut stream = NetworkBinaryStream::new();
    stream.put_unsigned_var_int(pid);
    build(&mut stream);
    stream
}

fn decode_text(mut stream: NetworkBinaryStream) -> TextPacket {
    let mut packet = TextPacket::default();
    packet.decode(&mut stream).unwrap();
    assert!(stream.feof(), "{} bytes left over", stream.remaining());
    packet
}

fn assert_rejects_foreign_id<P: DataPacket + Default>() {
    let mut stream = payload_stream(P::NETWORK_ID + 1, |s| s.put_bytes(&[0; 16]));

    let mut packet = P::default();
    let err = packet.decode(&mut stream).unwrap_err();

    assert!(err.is_logic_error());
    assert_eq!(
        err,
        PacketDecodeError::IdentifierMismatch {
            packet: P::NAME,
            expected: P::NETWORK_ID,
            actual: P::NETWORK_ID + 1,
        }
    );
}

fn assert_accepts_own_id<P: DataPacket + Default>() {
    let mut stream = NetworkBinaryStream::new();
    P::default().encode(&mut stream);

    let mut packet = P::default();
    assert!(packet.decode(&mut stream).is_ok());
}

/* envelope */

#[test]
fn identity() {
    let packet = TextPacket::default();
    assert_eq!(packet.pid(), protocol_info::TEXT_PACKET);
    assert_eq!(packet.name(), "TextPacket");
    assert!(!packet.can_be_sent_before_login());
    assert!(!packet.may_have_unread_bytes());

    assert_eq!(PlayStatusPacket::default().pid(), protocol_info::PLAY_STATUS_PACKET);
    assert!(PlayStatusPacket::default().can_be_sent_before_login());
    assert_eq!(DisconnectPacket::default().pid(), protocol_info::DISCONNECT_PACKET);
    assert!(DisconnectPacket::default().can_be_sent_before_login());

    assert!(QuirkyPacket::default().may_have_unread_bytes());
    assert_eq!(BlobPacket::default().name(), "Blob");
}

#[test]
fn header_rejects_foreign_ids() {
    assert_rejects_foreign_id::<TextPacket>();
    assert_rejects_foreign_id::<PlayStatusPacket>();
    assert_rejects_foreign_id::<DisconnectPacket>();
    assert_rejects_foreign_id::<QuirkyPacket>();
    assert_rejects_foreign_id::<BlobPacket>();
}

#[test]
fn header_accepts_own_ids() {
    assert_accepts_own_id::<TextPacket>();
    assert_accepts_own_id::<PlayStatusPacket>();
    assert_accepts_own_id::<DisconnectPacket>();
    assert_accepts_own_id::<QuirkyPacket>();
    assert_accepts_own_id::<BlobPacket>();
}

#[test]
fn empty_buffer_is_bad_packet() {
    let mut stream = NetworkBinaryStream::new();
    let err = TextPacket::default().decode(&mut stream).unwrap_err();

    assert!(!err.is_logic_error());
    assert_eq!(
        err,
        PacketDecodeError::BadPacket {
            packet: "TextPacket",
            cause: PayloadError::Stream(DecodeError::NotEnoughData),
        }
    );
}

#[test]
fn truncated_payload_is_bad_packet() {
    let mut data = encode_packet(&TextPacket::chat("Alice", "hi"));
    data.truncate(data.len() - 3);

    let err = decode_packet::<TextPacket>(&data, &CodecConfig::default()).unwrap_err();

    assert_eq!(err.packet(), "TextPacket");
    assert_eq!(err.cause(), Some(&PayloadError::Stream(DecodeError::NotEnoughData)));
    assert!(err.to_string().starts_with("TextPacket: "));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn malformed_payload_is_bad_packet() {
    let data = [0xfe, 0x01, 0xff];
    let err = decode_packet::<QuirkyPacket>(&data, &CodecConfig::default()).unwrap_err();

    assert_eq!(
        err,
        PacketDecodeError::BadPacket {
            packet: "QuirkyPacket",
            cause: PayloadError::malformed("0xff is reserved"),
        }
    );
    assert_eq!(err.to_string(), "QuirkyPacket: malformed payload: 0xff is reserved");
}

#[test]
fn decode_rewinds_the_stream() {
    let mut stream = NetworkBinaryStream::new();
    TextPacket::raw("hello").encode(&mut stream);

    // move the read cursor somewhere in the middle first
    stream.get_byte().unwrap();
    stream.get_byte().unwrap();

    let mut packet = TextPacket::default();
    packet.decode(&mut stream).unwrap();
    assert_eq!(packet.message, "hello");
}

#[test]
fn encode_resets_the_stream() {
    let mut stream = NetworkBinaryStream::new();
    stream.put_bytes(b"leftover data");

    PlayStatusPacket::new(PlayStatus::PlayerSpawn).encode(&mut stream);
    assert_eq!(stream.as_bytes(), &[0x02, 0x00, 0x00, 0x00, 0x03]);
}

#[test]
fn sub_client_ids_stay_off_the_wire() {
    let mut packet = TextPacket::raw("hi");
    packet.sub_client_mut().sender_sub_id = 2;
    packet.sub_client_mut().recipient_sub_id = 3;

    assert_eq!(encode_packet(&packet), encode_packet(&TextPacket::raw("hi")));
    assert_eq!(packet.sub_client().sender_sub_id, 2);
}

/* TextPacket */

#[test]
fn chat_end_to_end() {
    let packet = TextPacket {
        text_type: TextType::Chat,
        needs_translation: false,
        source_name: "Alice".to_owned(),
        message: "hi".to_owned(),
        xbox_user_id: String::new(),
        platform_chat_id: String::new(),
        ..TextPacket::default()
    };

    let data = encode_packet(&packet);
    assert_eq!(data, b"\x09\x01\x00\x05Alice\x02hi\x00\x00");

    let decoded: TextPacket = decode_packet(&data, &CodecConfig::default()).unwrap();
    assert_eq!(decoded.text_type, TextType::Chat);
    assert!(!decoded.needs_translation);
    assert_eq!(decoded.source_name, "Alice");
    assert_eq!(decoded.message, "hi");
    assert_eq!(decoded.xbox_user_id, "");
    assert_eq!(decoded.platform_chat_id, "");
    assert!(decoded.parameters.is_empty());
}

#[test]
fn source_name_kinds_read_source_and_message() {
    for kind in [1u8, 7, 8] {
        let packet = decode_text(payload_stream(protocol_info::TEXT_PACKET, |s| {
            s.put_byte(kind);
            s.put_bool(false);
            s.put_string("Steve");
            s.put_string("hello");
            s.put_string("xuid");
            s.put_string("chat id");
        }));

        assert!(SOURCE_NAME_TYPES.contains(&packet.text_type));
        assert_eq!(packet.source_name, "Steve");
        assert_eq!(packet.message, "hello");
        assert!(packet.parameters.is_empty());
        assert_eq!(packet.xbox_user_id, "xuid");
        assert_eq!(packet.platform_chat_id, "chat id");
    }
}

#[test]
fn message_only_kinds_skip_source_name() {
    for kind in [0u8, 5, 6, 9] {
        let packet = decode_text(payload_stream(protocol_info::TEXT_PACKET, |s| {
            s.put_byte(kind);
            s.put_bool(true);
            s.put_string("hello");
            s.put_string("");
            s.put_string("");
        }));

        assert!(MESSAGE_ONLY_TYPES.contains(&packet.text_type));
        assert!(packet.needs_translation);
        assert_eq!(packet.source_name, "");
        assert_eq!(packet.message, "hello");
        assert!(packet.parameters.is_empty());
    }
}

#[test]
fn parameter_kinds_read_parameters_in_order() {
    for kind in [2u8, 3, 4] {
        let packet = decode_text(payload_stream(protocol_info::TEXT_PACKET, |s| {
            s.put_byte(kind);
            s.put_bool(true);
            s.put_string("chat.type.text");
            s.put_unsigned_var_int(3);
            s.put_string("first");
            s.put_string("second");
            s.put_string("third");
            s.put_string("");
            s.put_string("");
        }));

        assert!(PARAMETER_TYPES.contains(&packet.text_type));
        assert_eq!(packet.source_name, "");
        assert_eq!(packet.message, "chat.type.text");
        assert_eq!(packet.parameters, ["first", "second", "third"]);
    }
}

#[test]
fn zero_parameters() {
    // the count is followed directly by the trailing ids, any string read in between would eat them
    let packet = decode_text(payload_stream(protocol_info::TEXT_PACKET, |s| {
        s.put_byte(2);
        s.put_bool(false);
        s.put_string("key");
        s.put_unsigned_var_int(0);
        s.put_string("xuid");
        s.put_string("pcid");
    }));

    assert!(packet.parameters.is_empty());
    assert_eq!(packet.xbox_user_id, "xuid");
    assert_eq!(packet.platform_chat_id, "pcid");
}

#[test]
fn unknown_kind_is_not_an_error() {
    let packet = decode_text(payload_stream(protocol_info::TEXT_PACKET, |s| {
        s.put_byte(42);
        s.put_bool(false);
        s.put_string("xuid");
        s.put_string("pcid");
    }));

    assert_eq!(packet.text_type, TextType::from(42));
    assert!(!packet.text_type.is_known());
    assert!(matches!(packet.text_type, TextType::Unknown(kind) if kind.get() == 42));
    assert_eq!(packet.message, "");
    assert_eq!(packet.xbox_user_id, "xuid");
    assert_eq!(packet.platform_chat_id, "pcid");

    round_trip(&packet);
}

#[test]
fn every_kind_byte_round_trips() {
    for byte in 0..=u8::MAX {
        let text_type = TextType::from(byte);
        assert_eq!(u8::from(text_type), byte);
        assert_eq!(text_type.is_known(), byte <= 9, "kind {byte}");

        let mut packet = TextPacket {
            text_type,
            xbox_user_id: "xuid".to_owned(),
            ..TextPacket::default()
        };

        if text_type.has_message() {
            packet.message = "popup".to_owned();
        }
        if text_type.has_source_name() {
            packet.source_name = "Alice".to_owned();
        }
        if text_type.has_parameters() {
            packet.parameters = vec!["a".to_owned()];
        }

        round_trip(&packet);
    }

    // byte 3 is a popup whichever way it was built, so it decodes with its message and parameters
    let popup = TextPacket {
        text_type: TextType::from(3),
        message: "popup".to_owned(),
        ..TextPacket::default()
    };
    assert_eq!(popup.text_type, TextType::Popup);
    assert_eq!(encode_packet(&popup), b"\x09\x03\x00\x05popup\x00\x00\x00");
    round_trip(&popup);
}

#[test]
fn constructors_round_trip() {
    let packets = [
        TextPacket::raw("raw"),
        TextPacket::chat("Alice", "hi"),
        TextPacket::whisper("Bob", "psst"),
        TextPacket::announcement("Server", "restarting"),
        TextPacket::translation("death.attack.generic", vec!["Alice".to_owned()]),
        TextPacket::popup("popup"),
        TextPacket::translated_popup("record.nowPlaying", vec!["cat".to_owned(), String::new()]),
        TextPacket::jukebox_popup("record.nowPlaying", vec!["13".to_owned()]),
        TextPacket::tip("tip"),
        TextPacket::system("system"),
        TextPacket::json(r#"{"rawtext":[{"text":"hi"}]}"#),
        TextPacket::chat("Alice", "hi")
            .with_xbox_user_id("2535400000000000")
            .with_platform_chat_id("platform"),
    ];

    for packet in &packets {
        round_trip(packet);
    }
}

#[test]
fn constructors_set_only_applicable_fields() {
    let chat = TextPacket::chat("Alice", "hi");
    assert_eq!(chat.text_type, TextType::Chat);
    assert!(chat.parameters.is_empty());

    let translation = TextPacket::translation("key", vec!["a".to_owned()]);
    assert!(translation.needs_translation);
    assert_eq!(translation.source_name, "");

    let tip = TextPacket::tip("tip");
    assert_eq!(tip.source_name, "");
    assert!(tip.parameters.is_empty());
}

#[test]
fn inapplicable_fields_are_not_encoded() {
    let mut stale = TextPacket::raw("hello");
    stale.source_name = "stale".to_owned();
    stale.parameters = vec!["stale".to_owned()];

    assert_eq!(encode_packet(&stale), encode_packet(&TextPacket::raw("hello")));

    let mut unknown = TextPacket::raw("unused");
    unknown.text_type = TextType::from(200);
    assert_eq!(encode_packet(&unknown), b"\x09\xc8\x00\x00\x00");
}

#[test]
fn reused_packet_does_not_keep_stale_fields() {
    let mut packet = TextPacket::translation("key", vec!["a".to_owned(), "b".to_owned()]);

    let mut stream = NetworkBinaryStream::new();
    TextPacket::raw("fresh").encode(&mut stream);
    packet.decode(&mut stream).unwrap();

    assert_eq!(packet, TextPacket::raw("fresh"));
}

#[test]
fn parameter_count_respects_limits() {
    let config = CodecConfig {
        limits: StreamLimits {
            max_array_length: 2,
            ..StreamLimits::default()
        },
        ..CodecConfig::default()
    };

    let packet = TextPacket::translation("key", vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    let err = decode_packet::<TextPacket>(&encode_packet(&packet), &config).unwrap_err();

    assert_eq!(
        err.cause(),
        Some(&PayloadError::Stream(DecodeError::LengthLimitExceeded { length: 3, limit: 2 }))
    );
}

/* other packets */

#[test]
fn play_status() {
    let packet = PlayStatusPacket::new(PlayStatus::LoginFailedServerFull);
    assert_eq!(encode_packet(&packet), &[0x02, 0x00, 0x00, 0x00, 0x07]);
    round_trip(&packet);

    let unknown: PlayStatusPacket = decode_packet(&[0x02, 0x00, 0x00, 0x01, 0x00], &CodecConfig::default()).unwrap();
    assert_eq!(unknown.status, PlayStatus::from(256));
    assert!(matches!(unknown.status, PlayStatus::Unknown(status) if status.get() == 256));
    round_trip(&unknown);

    for value in [-1, 0, 3, 7, 8, i32::MAX] {
        let status = PlayStatus::from(value);
        assert_eq!(i32::from(status), value);
        round_trip(&PlayStatusPacket::new(status));
    }
}

#[test]
fn disconnect() {
    let silent = DisconnectPacket::silent();
    assert_eq!(encode_packet(&silent), &[0x05, 0x01]);
    round_trip(&silent);

    let shown = DisconnectPacket::new("Server closed");
    assert_eq!(encode_packet(&shown), b"\x05\x00\x0dServer closed");
    round_trip(&shown);
}

/* decode_packet */

#[test]
fn trailing_bytes_are_rejected_by_default() {
    let mut data = encode_packet(&TextPacket::raw("hi"));
    data.extend_from_slice(&[0xaa, 0xbb]);

    let err = decode_packet::<TextPacket>(&data, &CodecConfig::default()).unwrap_err();
    assert_eq!(err.cause(), Some(&PayloadError::UnreadBytes(2)));
    assert_eq!(err.to_string(), "TextPacket: still 2 bytes unread");
}

#[test]
fn trailing_bytes_are_tolerated_when_not_strict() {
    let mut data = encode_packet(&TextPacket::raw("hi"));
    data.push(0xaa);

    let config = CodecConfig {
        strict_trailing_bytes: false,
        ..CodecConfig::default()
    };

    let packet: TextPacket = decode_packet(&data, &config).unwrap();
    assert_eq!(packet.message, "hi");
}

#[test]
fn trailing_bytes_are_allowed_for_quirky_packets() {
    let packet: QuirkyPacket = decode_packet(&[0xfe, 0x01, 0x05, 0x01, 0x02], &CodecConfig::default()).unwrap();
    assert_eq!(packet.value, 5);
}

/* handlers */

#[derive(Default)]
struct ChatLog {
    lines: Vec<String>,
}

impl PacketHandler for ChatLog {
    fn handle_text(&mut self, packet: &TextPacket) -> bool {
        self.lines.push(format!("<{}> {}", packet.source_name, packet.message));
        true
    }
}

#[test]
fn handler_dispatch() {
    let mut log = ChatLog::default();

    assert!(TextPacket::chat("Alice", "hi").handle(&mut log));
    assert!(!PlayStatusPacket::new(PlayStatus::PlayerSpawn).handle(&mut log));
    assert!(!DisconnectPacket::silent().handle(&mut log));

    assert_eq!(log.lines, ["<Alice> hi"]);
}

/* diagnostics */

#[test]
fn text_debug_info() {
    let mut packet = TextPacket::translation("key\u{1}", vec!["a".to_owned(), "b".to_owned()]);
    packet.sub_client.sender_sub_id = 1;

    let info = packet.debug_info();
    let names: Vec<_> = info.iter().map(|(name, _)| name).collect();

    assert_eq!(info.packet(), "TextPacket");
    assert_eq!(
        names,
        [
            "sub_client",
            "text_type",
            "needs_translation",
            "source_name",
            "message",
            "parameters",
            "xbox_user_id",
            "platform_chat_id",
        ]
    );
    assert_eq!(info.get("sub_client"), Some("sender 1, recipient 0"));
    assert_eq!(info.get("text_type"), Some("TRANSLATION"));
    assert_eq!(info.get("needs_translation"), Some("true"));
    assert_eq!(info.get("message"), Some("key\\x01"));
    assert_eq!(info.get("parameters"), Some("[a, b]"));
}

#[test]
fn raw_bytes_debug_as_hex() {
    let packet = BlobPacket {
        label: "tab\there".to_owned(),
        payload: RemainderBytes::from(vec![0x00, 0xff, 0x10]),
        ..BlobPacket::default()
    };

    let info = packet.debug_info();
    assert_eq!(info.get("label"), Some("tab\\x09here"));
    assert_eq!(info.get("payload"), Some("00ff10"));

    let decoded: BlobPacket = decode_packet(&encode_packet(&packet), &CodecConfig::default()).unwrap();
    assert_eq!(&*decoded.payload, &[0x00, 0xff, 0x10]);
}

/* configuration & logging */

#[test]
fn config_from_json() {
    let config = CodecConfig::from_json(r#"{ "limits": { "max_array_length": 16 } }"#).unwrap();
    assert_eq!(config.limits.max_array_length, 16);
    assert_eq!(config.limits.max_string_length, StreamLimits::default().max_string_length);
    assert!(config.strict_trailing_bytes);

    let config = CodecConfig::from_json(r#"{ "strict_trailing_bytes": false }"#).unwrap();
    assert!(!config.strict_trailing_bytes);

    assert!(CodecConfig::from_json("[]").is_err());
}

#[test]
fn config_save_and_load() {
    let path = std::env::temp_dir().join(format!("bedrock-codec-config-{}.json", std::process::id()));

    let config = CodecConfig {
        strict_trailing_bytes: false,
        ..CodecConfig::default()
    };

    config.save(&path).unwrap();
    let loaded = CodecConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, config);
}

#[test]
fn logger_installs_once() {
    assert!(Logger::install("bedrock_protocol", LogLevelFilter::Trace).is_ok());
    assert!(Logger::install("bedrock_protocol", LogLevelFilter::Trace).is_err());

    log::info!(target: "bedrock_protocol", "logger installed");
    round_trip(&TextPacket::chat("Alice", "logged"));
}
