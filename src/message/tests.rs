//! Tests for stanza classification and child decryption.

use super::*;
use crate::error::StanzaError;
use crate::test_utils::{MockSignalRepository, RepositoryCall, padded, text_message};
use wacore::types::message::{
    AddressingMode, EncType, MessageEnvelope, MessageType, NO_MESSAGE_FOUND_ERROR_TEXT,
};
use wacore::types::NackReason;
use wacore_binary::builder::NodeBuilder;
use wacore_binary::jid::Jid;
use wacore_binary::node::{Node, NodeContent};
use waproto::whatsapp as wa;
use waproto::whatsapp::web_message_info::{Status, StubType};

const OWN_PN: &str = "15550000000@s.whatsapp.net";
const OWN_LID: &str = "99990000@lid";

fn own_pn() -> Jid {
    OWN_PN.parse().expect("test JID should be valid")
}

fn own_lid() -> Jid {
    OWN_LID.parse().expect("test JID should be valid")
}

fn jid(s: &str) -> Jid {
    s.parse().expect("test JID should be valid")
}

fn classify(node: &Node) -> Result<DecodedMessageNode, StanzaError> {
    let lid = own_lid();
    decode_message_node(node, &own_pn(), Some(&lid))
}

fn enc(enc_type: &str, ciphertext: Vec<u8>) -> Node {
    NodeBuilder::new("enc")
        .attr("v", "2")
        .attr("type", enc_type)
        .bytes(ciphertext)
        .build()
}

async fn run_children(decoded: &mut DecodedMessageNode, stanza: &Node, repo: &MockSignalRepository) {
    decrypt_message_children(
        &mut decoded.envelope,
        stanza.get_all_children(),
        &decoded.author,
        &decoded.sender,
        repo,
    )
    .await;
}

#[test]
fn test_direct_chat_from_peer() {
    let node = NodeBuilder::new("message")
        .attr("id", "3EB0A1B2C3D4E5F6A7B8C9")
        .attr("from", "15551234567@s.whatsapp.net")
        .attr("t", "1700000000")
        .attr("notify", "Alice")
        .build();

    let decoded = classify(&node).expect("chat stanza should classify");
    assert_eq!(decoded.message_type, MessageType::Chat);
    assert_eq!(decoded.envelope.key.remote_jid, jid("15551234567@s.whatsapp.net"));
    assert!(!decoded.envelope.key.from_me);
    assert_eq!(decoded.envelope.key.participant, None);
    assert_eq!(decoded.envelope.key.sender_pn, "15551234567");
    assert_eq!(decoded.envelope.timestamp_seconds, 1_700_000_000);
    assert_eq!(decoded.envelope.push_name.as_deref(), Some("Alice"));
    assert_eq!(decoded.author, decoded.sender);
    assert_eq!(decoded.envelope.status, None);
}

#[test]
fn test_own_message_to_peer_uses_recipient_as_chat() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15550000000:3@s.whatsapp.net")
        .attr("recipient", "15551234567@s.whatsapp.net")
        .build();

    let decoded = classify(&node).expect("own chat stanza should classify");
    assert_eq!(decoded.message_type, MessageType::Chat);
    assert_eq!(decoded.envelope.key.remote_jid, jid("15551234567@s.whatsapp.net"));
    assert!(decoded.envelope.key.from_me);
    assert_eq!(decoded.envelope.key.participant, Some(own_pn()));
    assert_eq!(decoded.envelope.status, Some(Status::ServerAck));
}

#[test]
fn test_recipient_from_someone_else_is_rejected() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15551234567@s.whatsapp.net")
        .attr("recipient", "15557654321@s.whatsapp.net")
        .build();

    let err = classify(&node).expect_err("foreign recipient should be rejected");
    assert!(matches!(err, StanzaError::Malformed { .. }));
    assert_eq!(err.nack_reason(), NackReason::UnrecognizedStanza);
}

#[test]
fn test_group_requires_participant() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363000000000000@g.us")
        .build();

    let err = classify(&node).expect_err("group without participant should fail");
    assert_eq!(err.to_string(), "no participant in group message");
    assert_eq!(err.stanza().tag, "message");
}

#[test]
fn test_group_message_routing() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363000000000000@g.us")
        .attr("participant", "15551234567:2@s.whatsapp.net")
        .build();

    let decoded = classify(&node).expect("group stanza should classify");
    assert_eq!(decoded.message_type, MessageType::Group);
    assert_eq!(decoded.sender, jid("120363000000000000@g.us"));
    assert_eq!(decoded.author, jid("15551234567:2@s.whatsapp.net"));
    assert_eq!(
        decoded.envelope.key.participant,
        Some(jid("15551234567:2@s.whatsapp.net"))
    );
    assert_eq!(decoded.envelope.key.sender_pn, "15551234567");
    assert!(!decoded.envelope.key.from_me);
}

#[test]
fn test_status_and_broadcast_types() {
    let cases = [
        ("status@broadcast", OWN_PN, MessageType::DirectPeerStatus),
        ("status@broadcast", "15551234567@s.whatsapp.net", MessageType::OtherStatus),
        ("1234@broadcast", OWN_PN, MessageType::PeerBroadcast),
        ("1234@broadcast", "15551234567@s.whatsapp.net", MessageType::OtherBroadcast),
    ];

    for (from, participant, expected) in cases {
        let node = NodeBuilder::new("message")
            .attr("id", "ABCDEF")
            .attr("from", from)
            .attr("participant", participant)
            .build();
        let decoded = classify(&node).expect("broadcast stanza should classify");
        assert_eq!(decoded.message_type, expected, "from={from} participant={participant}");
        assert!(decoded.envelope.broadcast);
        assert_eq!(decoded.sender, jid(from));
    }
}

#[test]
fn test_newsletter_message() {
    let node = NodeBuilder::new("message")
        .attr("id", "NEWSLETTERID")
        .attr("from", "120363111111111111@newsletter")
        .attr("server_id", "812")
        .attr("is_sender", "true")
        .build();

    let decoded = classify(&node).expect("newsletter stanza should classify");
    assert_eq!(decoded.message_type, MessageType::Newsletter);
    assert!(decoded.envelope.newsletter);
    assert!(decoded.envelope.key.from_me);
    assert_eq!(decoded.envelope.key.server_id, Some(812));
    assert_eq!(decoded.envelope.newsletter_server_id, Some(812));
}

#[test]
fn test_lid_addressing_prefers_pn_attributes() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363000000000000@g.us")
        .attr("addressing_mode", "lid")
        .attr("participant", "77771111@lid")
        .attr("participant_pn", "15551234567@s.whatsapp.net")
        .build();

    let decoded = classify(&node).expect("lid group stanza should classify");
    assert_eq!(decoded.envelope.key.addressing_mode, AddressingMode::Lid);
    assert_eq!(decoded.author, jid("15551234567@s.whatsapp.net"));
    assert_eq!(decoded.envelope.key.lid, Some(jid("77771111@lid")));
}

#[test]
fn test_own_lid_marks_from_me() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "99990000:5@lid")
        .build();

    let decoded = classify(&node).expect("lid chat stanza should classify");
    assert!(decoded.envelope.key.from_me);
}

#[test]
fn test_unrecognized_sender_and_missing_attrs() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "someone@example.net")
        .build();
    assert!(matches!(classify(&node), Err(StanzaError::Malformed { .. })));

    let node = NodeBuilder::new("message").attr("from", OWN_PN).build();
    let err = classify(&node).expect_err("missing id should fail");
    assert!(matches!(err, StanzaError::MissingAttribute { name: "id", .. }));
    assert_eq!(err.nack_reason(), NackReason::ParsingError);
}

#[test]
fn test_envelope_content_hides_ciphertext() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15551234567@s.whatsapp.net")
        .children([
            enc("msg", vec![1, 2, 3]),
            NodeBuilder::new("reporting").children([]).build(),
            NodeBuilder::new("biz").attr("host_storage", "1").build(),
            NodeBuilder::new("device-identity").bytes(vec![9, 9]).build(),
        ])
        .build();

    let decoded = classify(&node).expect("chat stanza should classify");
    let Some(NodeContent::Nodes(visible)) = &decoded.envelope.content else {
        panic!("expected node list content");
    };
    let tags: Vec<_> = visible.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, ["biz"]);
}

#[tokio::test]
async fn test_pairwise_child_is_decrypted_and_unpadded() {
    let ciphertext = padded(&text_message("hello"));
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15551234567:4@s.whatsapp.net")
        .children([enc("pkmsg", ciphertext)])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("chat stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    let envelope: &MessageEnvelope = &decoded.envelope;
    assert_eq!(
        envelope.message.as_ref().and_then(|m| m.conversation.as_deref()),
        Some("hello")
    );
    assert!(!envelope.is_stub());
    assert_eq!(
        repo.calls(),
        [RepositoryCall::Pairwise {
            jid: jid("15551234567:4@s.whatsapp.net"),
            enc_type: EncType::PreKey,
        }]
    );
}

#[tokio::test]
async fn test_group_child_uses_sender_key() {
    let ciphertext = padded(&text_message("hi group"));
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363000000000000@g.us")
        .attr("participant", "15551234567@s.whatsapp.net")
        .children([enc("skmsg", ciphertext)])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("group stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    assert_eq!(
        repo.calls(),
        [RepositoryCall::Group {
            group: jid("120363000000000000@g.us"),
            author: jid("15551234567@s.whatsapp.net"),
        }]
    );
    assert!(decoded.envelope.message.is_some());
}

#[tokio::test]
async fn test_pairwise_child_in_group_goes_to_author() {
    let ciphertext = padded(&text_message("direct"));
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363000000000000@g.us")
        .attr("participant", "15551234567@s.whatsapp.net")
        .children([enc("msg", ciphertext)])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("group stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    assert_eq!(
        repo.calls(),
        [RepositoryCall::Pairwise {
            jid: jid("15551234567@s.whatsapp.net"),
            enc_type: EncType::Session,
        }]
    );
}

#[tokio::test]
async fn test_no_decryptable_children_sets_stub() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15551234567@s.whatsapp.net")
        .children([NodeBuilder::new("enc").attr("type", "msg").build()])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("chat stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    assert_eq!(decoded.envelope.message_stub_type, Some(StubType::Ciphertext));
    assert_eq!(
        decoded.envelope.message_stub_parameters,
        [NO_MESSAGE_FOUND_ERROR_TEXT]
    );
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_enc_type_sets_stub() {
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "15551234567@s.whatsapp.net")
        .children([enc("frank", vec![1, 2, 3])])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("chat stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    assert_eq!(
        decoded.envelope.message_stub_parameters,
        ["Unknown e2e type: frank"]
    );
    assert!(decoded.envelope.message.is_none());
}

#[tokio::test]
async fn test_plaintext_child_is_not_unpadded() {
    let payload = wa::Message {
        reaction_message: Some(wa::message::ReactionMessage {
            text: Some("👍".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let node = NodeBuilder::new("message")
        .attr("id", "ABCDEF")
        .attr("from", "120363111111111111@newsletter")
        .children([NodeBuilder::new("plaintext")
            .bytes(prost::Message::encode_to_vec(&payload))
            .build()])
        .build();
    let repo = MockSignalRepository::new();

    let mut decoded = classify(&node).expect("newsletter stanza should classify");
    run_children(&mut decoded, &node, &repo).await;

    assert_eq!(decoded.envelope.message, Some(payload));
    assert!(repo.calls().is_empty());
}
