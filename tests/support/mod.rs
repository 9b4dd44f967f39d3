use bytes::Bytes;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

use pgcrab_wire::frames::*;
use pgcrab_wire::{BackendMessage, FieldTag, FormatCode, Severity, TxStatus};

static TRACING: Once = Once::new();

// Call this at the top of integration tests to see codec traces with RUST_LOG.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            let _ = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_test_writer()
                .try_init();
        }
    });
}

/// One valid value of every message shape, plus a few payload variations.
#[allow(dead_code)]
pub fn sample_messages() -> Vec<BackendMessage> {
    vec![
        AuthenticationFrame::Ok.into(),
        AuthenticationFrame::KerberosV5.into(),
        AuthenticationFrame::CleartextPassword.into(),
        AuthenticationFrame::Md5Password {
            salt: [0x01, 0x02, 0x03, 0x04],
        }
        .into(),
        AuthenticationFrame::Gss.into(),
        AuthenticationFrame::GssContinue {
            data: Bytes::from_static(b"\x60\x82token"),
        }
        .into(),
        AuthenticationFrame::Sspi.into(),
        AuthenticationFrame::sasl(["SCRAM-SHA-256", "SCRAM-SHA-256-PLUS"]).into(),
        AuthenticationFrame::Sasl {
            mechanisms: vec!["SCRAM-SHA-256".into()],
            terminated: false,
        }
        .into(),
        AuthenticationFrame::SaslContinue {
            data: Bytes::from_static(b"r=nonce,s=c2FsdA==,i=4096"),
        }
        .into(),
        AuthenticationFrame::SaslFinal {
            data: Bytes::from_static(b"v=c2lnbmF0dXJl"),
        }
        .into(),
        BackendKeyDataFrame::new(31337, Bytes::from_static(&[0xCA, 0xFE, 0xBA, 0xBE])).into(),
        BackendKeyDataFrame::new(7, Bytes::from(vec![0x5A; 32])).into(),
        BindCompleteFrame.into(),
        CloseCompleteFrame.into(),
        CommandCompleteFrame::new("INSERT 0 1").into(),
        CopyDataFrame::new(Bytes::from_static(b"42\tanswer\n")).into(),
        CopyDoneFrame.into(),
        CopyInResponseFrame::new(FormatCode::Text, [FormatCode::Text, FormatCode::Text]).into(),
        CopyOutResponseFrame::new(FormatCode::Binary, [FormatCode::Binary]).into(),
        CopyBothResponseFrame::new(FormatCode::Text, Vec::<FormatCode>::new()).into(),
        DataRowFrame::new(vec![
            Some(Bytes::from_static(b"1")),
            None,
            Some(Bytes::new()),
        ])
        .into(),
        EmptyQueryResponseFrame.into(),
        ErrorResponseFrame::new(Severity::Error, "42P01", "relation \"nope\" does not exist")
            .with_position(15)
            .with(FieldTag::File, "parse_relation.c")
            .with(FieldTag::Line, "1392")
            .with(FieldTag::Routine, "parserOpenTable")
            .into(),
        FunctionCallResponseFrame::new(Some(Bytes::from_static(b"\0\0\0\x2a"))).into(),
        FunctionCallResponseFrame::new(None).into(),
        NegotiateProtocolVersionFrame::new(0, vec!["_pq_.compression".into()]).into(),
        NoDataFrame.into(),
        NoticeResponseFrame::new(Severity::Notice, "00000", "table will be created")
            .with_hint("nothing to do")
            .into(),
        NotificationResponseFrame::new(4242, "jobs", "done").into(),
        ParameterDescriptionFrame::new(vec![23, 25, 1184]).into(),
        ParameterStatusFrame::new("client_encoding", "UTF8").into(),
        ParseCompleteFrame.into(),
        PortalSuspendedFrame.into(),
        ReadyForQueryFrame::new(TxStatus::Idle).into(),
        ReadyForQueryFrame::new(TxStatus::Active).into(),
        ReadyForQueryFrame::new(TxStatus::Error).into(),
        RowDescriptionFrame::new(vec![
            FieldDescription::new("id", 23),
            FieldDescription {
                name: "payload".into(),
                table_oid: 16384,
                column_attr: 2,
                type_oid: 17,
                type_size: -1,
                type_modifier: -1,
                format: FormatCode::Binary,
            },
        ])
        .into(),
    ]
}
