use std::sync::Arc;
use wacore::binary::builder::NodeBuilder;
use wacore::binary::jid::Jid;
use wacore::binary::node::Node;
use wacore::biz::is_biz_content;
use wacore::types::NackReason;
use wacore::types::message::{AddressingMode, MessageType, Platform};
use waproto::whatsapp::web_message_info::Status;
use whatsapp_decoder::test_utils::MockSignalRepository;
use whatsapp_decoder::{DecoderConfig, MessageDecoder, StanzaError};

const OWN_PN: &str = "15550000000@s.whatsapp.net";
const OWN_LID: &str = "99990000@lid";
const PEER: &str = "15551234567@s.whatsapp.net";
const GROUP: &str = "120363000000000000@g.us";

fn jid(s: &str) -> Jid {
    s.parse().expect("test JID should be valid")
}

fn decoder() -> (MessageDecoder, Arc<MockSignalRepository>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let repo = Arc::new(MockSignalRepository::new());
    let config = DecoderConfig::new(jid(OWN_PN), Some(jid(OWN_LID)));
    (MessageDecoder::new(config, repo.clone()), repo)
}

fn stanza(attrs: &[(&str, &str)]) -> Node {
    NodeBuilder::new("message")
        .attrs(attrs.iter().copied())
        .build()
}

#[test]
fn test_user_sender_without_recipient_is_direct_chat() {
    let (decoder, _) = decoder();
    for from in [PEER, "15551234567:12@s.whatsapp.net", "77771111@lid"] {
        let node = stanza(&[("id", "ABCDEF"), ("from", from)]);
        let pending = decoder
            .decrypt_message_node(&node)
            .expect("user stanza should classify");
        assert_eq!(pending.message_type, MessageType::Chat, "from={from}");
        assert_eq!(pending.envelope.key.remote_jid, jid(from));
        assert_eq!(pending.author, jid(from));
    }
}

#[test]
fn test_recipient_not_addressed_to_self_fails() {
    let (decoder, _) = decoder();
    let node = stanza(&[
        ("id", "ABCDEF"),
        ("from", PEER),
        ("recipient", "15557654321@s.whatsapp.net"),
    ]);

    let err = decoder
        .decrypt_message_node(&node)
        .err()
        .expect("foreign recipient should fail");
    assert!(matches!(err, StanzaError::Malformed { .. }));
    assert_eq!(err.stanza(), &node);
}

#[test]
fn test_lid_recipient_from_own_lid_is_accepted() {
    let (decoder, _) = decoder();
    let node = stanza(&[
        ("id", "ABCDEF"),
        ("from", "99990000:2@lid"),
        ("addressing_mode", "lid"),
        ("recipient", "77771111@lid"),
    ]);

    let pending = decoder
        .decrypt_message_node(&node)
        .expect("own lid stanza should classify");
    assert_eq!(pending.envelope.key.remote_jid, jid("77771111@lid"));
    assert!(pending.envelope.key.from_me);
    assert_eq!(pending.envelope.key.addressing_mode, AddressingMode::Lid);
}

#[test]
fn test_group_participant_rules() {
    let (decoder, _) = decoder();
    let missing = stanza(&[("id", "ABCDEF"), ("from", GROUP)]);
    let err = decoder
        .decrypt_message_node(&missing)
        .err()
        .expect("group without participant should fail");
    assert_eq!(err.nack_reason(), NackReason::UnrecognizedStanza);
    assert_eq!(err.nack_reason().code(), 488);

    let node = stanza(&[("id", "ABCDEF"), ("from", GROUP), ("participant", PEER)]);
    let pending = decoder
        .decrypt_message_node(&node)
        .expect("group stanza should classify");
    assert_eq!(pending.message_type, MessageType::Group);
    assert_eq!(pending.envelope.key.remote_jid, jid(GROUP));
    assert_eq!(pending.author, jid(PEER));
    assert_eq!(pending.sender, jid(GROUP));
}

#[test]
fn test_status_broadcast_self_check() {
    let (decoder, _) = decoder();
    let own = stanza(&[
        ("id", "ABCDEF"),
        ("from", "status@broadcast"),
        ("participant", "15550000000:4@s.whatsapp.net"),
    ]);
    let other = stanza(&[
        ("id", "ABCDEF"),
        ("from", "status@broadcast"),
        ("participant", PEER),
    ]);

    let own = decoder.decrypt_message_node(&own).expect("own status");
    assert_eq!(own.message_type, MessageType::DirectPeerStatus);
    assert!(own.envelope.key.from_me);
    assert_eq!(own.envelope.status, Some(Status::ServerAck));

    let other = decoder.decrypt_message_node(&other).expect("other status");
    assert_eq!(other.message_type, MessageType::OtherStatus);
    assert!(!other.envelope.key.from_me);
    assert_eq!(other.envelope.status, None);
}

#[test]
fn test_invalid_jid_is_a_parsing_error() {
    let (decoder, _) = decoder();
    let node = stanza(&[("id", "ABCDEF"), ("from", "abc:x@s.whatsapp.net")]);

    let err = decoder
        .decrypt_message_node(&node)
        .err()
        .expect("unparseable JID should fail");
    assert!(matches!(err, StanzaError::InvalidJid { name: "from", .. }));
    assert_eq!(err.nack_reason(), NackReason::ParsingError);
}

#[test]
fn test_newsletter_server_id_and_sender_flag() {
    let (decoder, _) = decoder();
    let node = stanza(&[
        ("id", "ABCDEF"),
        ("from", "120363111111111111@newsletter"),
        ("server_id", "4096"),
    ]);

    let pending = decoder
        .decrypt_message_node(&node)
        .expect("newsletter stanza should classify");
    assert_eq!(pending.message_type, MessageType::Newsletter);
    assert_eq!(pending.envelope.key.server_id, Some(4096));
    assert_eq!(pending.envelope.newsletter_server_id, Some(4096));
    assert!(!pending.envelope.key.from_me);
    assert_eq!(pending.author, pending.sender);
}

#[test]
fn test_envelope_metadata() {
    let (decoder, _) = decoder();
    let node = NodeBuilder::new("message")
        .attrs([
            ("id", "3A0123456789ABCDEF01"),
            ("from", PEER),
            ("t", "1700000123"),
            ("notify", "Bob"),
        ])
        .children([
            NodeBuilder::new("biz")
                .children([NodeBuilder::new("interactive").build()])
                .build(),
            NodeBuilder::new("enc").attr("type", "msg").bytes(vec![1]).build(),
        ])
        .build();

    let pending = decoder
        .decrypt_message_node(&node)
        .expect("chat stanza should classify");
    let envelope = &pending.envelope;
    assert_eq!(envelope.platform, Platform::Ios);
    assert_eq!(envelope.push_name.as_deref(), Some("Bob"));
    assert_eq!(
        envelope.timestamp().map(|t| t.timestamp()),
        Some(1_700_000_123)
    );
    assert_eq!(envelope.attrs.get("notify"), Some("Bob"));
    assert!(is_biz_content(envelope.content.as_ref()));
    assert_eq!(pending.category, None);
}
