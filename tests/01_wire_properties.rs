mod support;

use bytes::Bytes;

use pgcrab_wire::frames::*;
use pgcrab_wire::wire_protocol::utils::{PayloadCursor, read_cstr};
use pgcrab_wire::{BackendMessage, CodecError, FieldTag, InvalidValue, WireSerializable};

fn underflow<T: std::fmt::Debug>(result: Result<T, CodecError>) -> bool {
    matches!(result, Err(CodecError::Underflow { .. }))
}

// -----------------------------------------------------------------------------
// ----- Primitives ------------------------------------------------------------

#[test]
fn fixed_width_reads_at_the_boundary() {
    assert!(underflow(PayloadCursor::new(Bytes::new()).read_u8()));
    assert!(underflow(PayloadCursor::new(Bytes::new()).read_i8()));
    assert!(underflow(PayloadCursor::new(vec![0]).read_i16()));
    assert!(underflow(PayloadCursor::new(vec![0, 0, 0]).read_i32()));

    let mut cursor = PayloadCursor::new(vec![0xAB]);
    assert_eq!(cursor.read_u8().unwrap(), 0xAB);
    assert_eq!(cursor.consumed(), 1);

    let mut cursor = PayloadCursor::new(vec![0x80]);
    assert_eq!(cursor.read_i8().unwrap(), i8::MIN);
    assert_eq!(cursor.consumed(), 1);

    let mut cursor = PayloadCursor::new(vec![0x01, 0x02]);
    assert_eq!(cursor.read_i16().unwrap(), 0x0102);
    assert_eq!(cursor.consumed(), 2);

    let mut cursor = PayloadCursor::new(vec![0xFF, 0xFF, 0xFF, 0xFE]);
    assert_eq!(cursor.read_i32().unwrap(), -2);
    assert_eq!(cursor.consumed(), 4);
}

#[test]
fn cstring_edge_cases() {
    assert_eq!(read_cstr(&[0]).unwrap(), ("", 1));
    assert!(underflow(read_cstr(b"no terminator")));

    let buf = b"abc\0def\0";
    let (first, used) = read_cstr(buf).unwrap();
    assert_eq!((first, used), ("abc", 4));
    let (second, used) = read_cstr(&buf[used..]).unwrap();
    assert_eq!((second, used), ("def", 4));
}

// -----------------------------------------------------------------------------
// ----- Payload shapes --------------------------------------------------------

#[test]
fn data_row_null_is_not_empty() {
    let payload = [0, 2, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
    let row = DataRowFrame::from_payload(payload.to_vec()).unwrap();
    assert_eq!(row.columns, vec![None, Some(Bytes::new())]);
}

#[test]
fn error_response_field_sequence() {
    let payload = b"SERROR\0Mhello world\0\0";
    let msg = BackendMessage::decode(b'E', &payload[..]).unwrap();
    let BackendMessage::ErrorResponse(frame) = msg else {
        panic!("expected ErrorResponse");
    };

    let tags: Vec<_> = frame.fields.iter().map(|f| f.tag).collect();
    let values: Vec<_> = frame.fields.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(tags, vec![FieldTag::Severity, FieldTag::Message]);
    assert_eq!(values, vec!["ERROR", "hello world"]);
}

#[test]
fn notice_response_rejects_unknown_tag() {
    let err = BackendMessage::decode(b'N', &b"SWARNING\0Zzz\0\0"[..]).unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidValue(InvalidValue::FieldTag(b'Z'))
    ));
}

#[test]
fn authentication_sub_dispatch() {
    let ok = BackendMessage::decode(b'R', vec![0, 0, 0, 0]).unwrap();
    assert_eq!(ok, BackendMessage::Authentication(AuthenticationFrame::Ok));

    let md5 = BackendMessage::decode(b'R', vec![0, 0, 0, 5, 9, 8, 7, 6]).unwrap();
    assert_eq!(
        md5,
        BackendMessage::Authentication(AuthenticationFrame::Md5Password { salt: [9, 8, 7, 6] })
    );

    let unknown = BackendMessage::decode(b'R', vec![0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
    let BackendMessage::Authentication(frame) = &unknown else {
        panic!("expected Authentication, got {unknown:?}");
    };
    assert_eq!(frame.raw_kind(), -1);
    assert!(matches!(
        unknown.to_bytes(),
        Err(CodecError::InvalidValue(InvalidValue::UnknownAuthentication(-1)))
    ));
}

#[test]
fn scm_credential_is_surfaced_as_unknown() {
    let msg = BackendMessage::decode(b'R', vec![0, 0, 0, 6]).unwrap();
    assert_eq!(
        msg,
        BackendMessage::Authentication(AuthenticationFrame::Unknown {
            kind: 6,
            data: Bytes::new()
        })
    );
}

#[test]
fn backend_key_data_secret_bound() {
    let mut payload = 1i32.to_be_bytes().to_vec();
    payload.extend_from_slice(&[0u8; 257]);
    let err = BackendMessage::decode(b'K', payload).unwrap_err();
    assert!(matches!(err, CodecError::Overflow { .. }));
}

#[test]
fn decode_rejects_trailing_bytes() {
    let err = BackendMessage::decode(b'1', vec![0]).unwrap_err();
    assert!(matches!(err, CodecError::TrailingBytes(1)));

    let err = BackendMessage::decode(b'S', &b"a\0b\0c"[..]).unwrap_err();
    assert!(matches!(err, CodecError::TrailingBytes(1)));
}

#[test]
fn unknown_message_kind() {
    support::init_tracing();

    let msg = BackendMessage::decode(b'x', &b"future"[..]).unwrap();
    assert!(msg.is_unknown());
    assert!(matches!(
        msg.to_bytes(),
        Err(CodecError::InvalidValue(InvalidValue::UnknownMessage(b'x')))
    ));
}

#[test]
fn interior_nul_is_never_truncated() {
    let msg = BackendMessage::from(ParameterStatusFrame::new("search_path", "public\0evil"));
    assert!(matches!(
        msg.to_bytes(),
        Err(CodecError::InvalidValue(InvalidValue::InteriorNul))
    ));
}

#[test]
fn counts_past_i16_overflow_on_encode() {
    let row = DataRowFrame::new(vec![None; i16::MAX as usize + 1]);
    assert!(matches!(
        row.to_bytes(),
        Err(CodecError::Overflow { what: "columns", .. })
    ));
}

#[test]
fn sasl_mechanisms_in_either_wire_form_reencode_exactly() {
    for body in [&b"one\0two\0three\0"[..], &b"SCRAM-SHA-256\0\0"[..]] {
        let mut payload = 10i32.to_be_bytes().to_vec();
        payload.extend_from_slice(body);

        let msg = BackendMessage::decode(b'R', payload.clone()).unwrap();
        let BackendMessage::Authentication(AuthenticationFrame::Sasl { mechanisms, .. }) = &msg
        else {
            panic!("expected a SASL offer");
        };
        assert!(!mechanisms.is_empty());
        assert_eq!(&msg.to_bytes().unwrap()[5..], &payload[..]);
    }
}
