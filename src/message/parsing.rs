//! Classification of incoming message stanzas.
//!
//! Works out who a stanza is from, which conversation it belongs to and
//! whether it was sent by this account, and builds the message key and the
//! plaintext-free envelope that decryption later fills in.

use crate::error::StanzaError;
use std::str::FromStr;
use wacore::types::message::{AddressingMode, MessageEnvelope, MessageKey, MessageType, Platform};
use wacore_binary::jid::{Jid, JidExt};
use wacore_binary::node::{Node, NodeContent};
use waproto::whatsapp::web_message_info::Status;

/// Children that never reach the consumer through the envelope content.
const HIDDEN_CHILD_TAGS: [&str; 3] = ["reporting", "enc", "verified"];

/// Result of classifying a stanza.
#[derive(Debug, Clone)]
pub struct DecodedMessageNode {
    pub envelope: MessageEnvelope,
    pub message_type: MessageType,
    /// Who wrote the message.
    pub author: Jid,
    /// Routing identity for decryption: the author for direct chats, the chat otherwise.
    pub sender: Jid,
}

/// Classifies `stanza` relative to the local phone-number and LID identities.
///
/// Fails when the stanza lacks the attributes its sender shape requires or
/// when the sender shape is not one we understand. No partial envelope is
/// produced in that case.
pub fn decode_message_node(
    stanza: &Node,
    own_pn: &Jid,
    own_lid: Option<&Jid>,
) -> Result<DecodedMessageNode, StanzaError> {
    let mut attrs = stanza.attrs();

    let id = attrs
        .optional_string("id")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StanzaError::MissingAttribute {
            name: "id",
            stanza: Box::new(stanza.clone()),
        })?;
    let from_raw = attrs
        .optional_string("from")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StanzaError::MissingAttribute {
            name: "from",
            stanza: Box::new(stanza.clone()),
        })?;
    let from = parse_jid(stanza, "from", from_raw)?;

    let addressing_mode = AddressingMode::from_attr(attrs.optional_string("addressing_mode"));
    let (participant_raw, recipient_raw) = match addressing_mode {
        AddressingMode::Lid => (
            attrs.first_present(&["participant_pn", "sender_pn", "participant"]),
            attrs.first_present(&["peer_recipient_pn", "sender_pn", "recipient"]),
        ),
        AddressingMode::Pn => (
            attrs.first_present(&["participant"]),
            attrs.first_present(&["recipient"]),
        ),
    };
    let participant = participant_raw
        .map(|raw| parse_jid(stanza, "participant", raw))
        .transpose()?;
    let recipient = recipient_raw
        .map(|raw| parse_jid(stanza, "recipient", raw))
        .transpose()?;

    let is_me = |jid: &Jid| jid.is_same_user_as(own_pn);
    let is_me_lid = |jid: &Jid| own_lid.is_some_and(|lid| jid.is_same_user_as(lid));
    let malformed = |reason: &'static str| StanzaError::Malformed {
        reason,
        stanza: Box::new(stanza.clone()),
    };

    let (message_type, chat, author) = if from.is_user() {
        let chat = match &recipient {
            Some(recipient) => {
                if !is_me(&from) && !is_me_lid(&from) {
                    return Err(malformed("recipient present, but message not from self"));
                }
                recipient.clone()
            }
            None => from.clone(),
        };
        (MessageType::Chat, chat, from.clone())
    } else if from.is_group() {
        let participant = participant
            .clone()
            .ok_or_else(|| malformed("no participant in group message"))?;
        (MessageType::Group, from.clone(), participant)
    } else if from.is_broadcast() {
        let participant = participant
            .clone()
            .ok_or_else(|| malformed("no participant in broadcast message"))?;
        let is_participant_me = is_me(&participant);
        let message_type = match (from.is_status_broadcast(), is_participant_me) {
            (true, true) => MessageType::DirectPeerStatus,
            (true, false) => MessageType::OtherStatus,
            (false, true) => MessageType::PeerBroadcast,
            (false, false) => MessageType::OtherBroadcast,
        };
        (message_type, from.clone(), participant)
    } else if from.is_newsletter() {
        (MessageType::Newsletter, from.clone(), from.clone())
    } else {
        return Err(malformed("unrecognized sender identifier shape"));
    };

    let from_me = if from.is_newsletter() {
        attrs.optional_bool("is_sender")
    } else {
        // The raw attribute, regardless of addressing mode.
        let claimed = attrs
            .first_present(&["participant"])
            .and_then(|raw| Jid::from_str(raw).ok())
            .unwrap_or_else(|| from.clone());
        if from.is_lid() {
            is_me_lid(&claimed)
        } else {
            is_me(&claimed)
        }
    };

    let sender_pn_source = if message_type == MessageType::Chat {
        Some(&author)
    } else {
        participant.as_ref().or(recipient.as_ref())
    };
    let sender_pn = sender_pn_source
        .map(|jid| jid.to_normalized_user().user)
        .unwrap_or_default();

    let lid_raw = match addressing_mode {
        AddressingMode::Lid => attrs.first_present(&["participant"]),
        AddressingMode::Pn => attrs.first_present(&[
            "participant_lid",
            "sender_lid",
            "peer_recipient_lid",
            "participant",
        ]),
    };
    let lid = lid_raw.and_then(|raw| Jid::from_str(raw).ok());

    let newsletter_server_id = if message_type == MessageType::Newsletter {
        attrs.optional_i64("server_id")
    } else {
        None
    };

    let key = MessageKey {
        remote_jid: chat.clone(),
        from_me,
        id: id.to_string(),
        participant: if from_me {
            Some(own_pn.to_normalized_user())
        } else {
            participant.clone()
        },
        sender_pn,
        addressing_mode,
        lid,
        server_id: newsletter_server_id,
    };

    if !attrs.ok() {
        log::debug!(
            "Ignoring unparseable optional attributes on message {}: {:?}",
            id,
            attrs.errors
        );
    }

    let envelope = MessageEnvelope {
        key,
        timestamp_seconds: attrs.optional_unix_time("t").unwrap_or_default(),
        push_name: attrs
            .optional_string("notify")
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        broadcast: from.is_broadcast(),
        newsletter: from.is_newsletter(),
        platform: Platform::from_message_id(id),
        attrs: stanza.attrs.clone(),
        content: visible_content(stanza),
        message: None,
        verified_biz_name: None,
        message_stub_type: None,
        message_stub_parameters: Vec::new(),
        status: from_me.then_some(Status::ServerAck),
        newsletter_server_id,
        is_mentioned_in_status: false,
        status_mention_sources: Vec::new(),
    };

    log::debug!(
        "Classified message {} in {} as {} (author: {}, from_me: {}, mode: {})",
        envelope.key.id,
        chat,
        message_type.as_str(),
        author,
        from_me,
        addressing_mode.as_str()
    );

    let sender = if message_type == MessageType::Chat {
        author.clone()
    } else {
        chat
    };

    Ok(DecodedMessageNode {
        envelope,
        message_type,
        author,
        sender,
    })
}

fn parse_jid(stanza: &Node, name: &'static str, raw: &str) -> Result<Jid, StanzaError> {
    Jid::from_str(raw).map_err(|_| StanzaError::InvalidJid {
        name,
        value: raw.to_string(),
        stanza: Box::new(stanza.clone()),
    })
}

/// Drops byte-content children and the ciphertext/reporting siblings; other
/// content shapes pass through untouched.
fn visible_content(stanza: &Node) -> Option<NodeContent> {
    match &stanza.content {
        Some(NodeContent::Nodes(nodes)) => Some(NodeContent::Nodes(
            nodes
                .iter()
                .filter(|n| !matches!(n.content, Some(NodeContent::Bytes(_))))
                .filter(|n| !HIDDEN_CHILD_TAGS.contains(&n.tag.as_str()))
                .cloned()
                .collect(),
        )),
        other => other.clone(),
    }
}
