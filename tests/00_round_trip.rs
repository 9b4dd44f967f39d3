mod support;

use bytes::BytesMut;
use std::collections::HashSet;
use std::io::Cursor;

use pgcrab_wire::{
    BackendMessage, CodecConfig, CodecError, MessageKind, read_envelope, read_message,
    write_message,
};

#[test]
fn every_kind_is_covered_by_the_samples() {
    let seen: HashSet<u8> = support::sample_messages().iter().map(BackendMessage::kind).collect();
    for kind in MessageKind::ALL {
        assert!(seen.contains(&kind.as_byte()), "no sample for {}", kind.name());
    }
}

#[test]
fn decode_of_encode_is_identity() {
    support::init_tracing();

    for message in support::sample_messages() {
        let bytes = message.to_bytes().unwrap();
        assert_eq!(bytes.len(), 5 + message.body_size(), "{}", message.name());

        let back = BackendMessage::decode(bytes[0], bytes.slice(5..)).unwrap();
        assert_eq!(back, message, "{}", message.name());
    }
}

#[test]
fn encode_of_decode_is_byte_exact() {
    for message in support::sample_messages() {
        let bytes = message.to_bytes().unwrap();
        let back = BackendMessage::decode(bytes[0], bytes.slice(5..)).unwrap();
        assert_eq!(back.to_bytes().unwrap(), bytes, "{}", message.name());
    }
}

#[test]
fn stream_of_all_samples_reads_back_in_order() {
    let samples = support::sample_messages();
    let mut wire = Vec::new();
    for message in &samples {
        write_message(&mut wire, message).unwrap();
    }

    let mut reader = Cursor::new(wire);
    for expected in &samples {
        assert_eq!(&read_message(&mut reader).unwrap(), expected);
    }
    assert!(matches!(
        read_message(&mut reader),
        Err(CodecError::UnexpectedEndOfStream)
    ));
}

#[test]
fn truncating_any_single_frame_never_yields_a_wrong_answer() {
    for message in support::sample_messages() {
        let bytes = message.to_bytes().unwrap();
        for cut in 0..bytes.len() {
            let err = read_message(&mut Cursor::new(&bytes[..cut])).unwrap_err();
            assert!(
                matches!(
                    err,
                    CodecError::UnexpectedEndOfStream | CodecError::Underflow { .. }
                ),
                "{} cut at {cut}: {err:?}",
                message.name()
            );
        }
    }
}

#[test]
fn shrinking_the_declared_length_is_caught_by_the_payload_codec() {
    // Keep the stream intact but lie about the length: the payload codec
    // sees one byte fewer than it needs.
    for message in support::sample_messages() {
        if message.body_size() == 0 {
            continue;
        }
        let bytes = message.to_bytes().unwrap();
        let mut lied = BytesMut::from(&bytes[..]);
        let len = u32::from_be_bytes([lied[1], lied[2], lied[3], lied[4]]) - 1;
        lied[1..5].copy_from_slice(&len.to_be_bytes());

        let envelope = read_envelope(&mut Cursor::new(&lied[..]), &CodecConfig::default()).unwrap();
        let result = BackendMessage::from_envelope(envelope);
        assert!(
            !matches!(&result, Ok(decoded) if *decoded == message),
            "{} decoded despite a short payload",
            message.name()
        );
    }
}
