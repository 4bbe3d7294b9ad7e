#![allow(clippy::wildcard_imports)]
use bedrock_protocol::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn text_packets(c: &mut Criterion) {
    let chat = TextPacket::chat("hit his is my name", "a reasonably sized chat message for a benchmark")
        .with_xbox_user_id("2535400000000000");

    let translation = TextPacket::translation(
        "death.attack.player.item",
        vec!["Alice".to_owned(), "Bob".to_owned(), "Diamond Sword".to_owned()],
    );

    c.bench_function("text-chat-encode", |b| {
        let mut stream = NetworkBinaryStream::new();
        b.iter(|| {
            black_box(&chat).encode(&mut stream);
        });
    });

    let chat_data = encode_packet(&chat);
    c.bench_function("text-chat-decode", |b| {
        let mut stream = NetworkBinaryStream::from_bytes(&chat_data);
        b.iter(|| {
            let mut packet = TextPacket::default();
            packet.decode(black_box(&mut stream)).unwrap();
            packet
        });
    });

    let translation_data = encode_packet(&translation);
    c.bench_function("text-translation-decode", |b| {
        let config = CodecConfig::default();
        b.iter(|| decode_packet::<TextPacket>(black_box(&translation_data), &config).unwrap());
    });
}

criterion_group!(benches, text_packets);
criterion_main!(benches);
