use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use wacore_binary::jid::{Jid, MessageId, MessageServerId};
use wacore_binary::node::{Attrs, NodeContent};
use waproto::whatsapp as wa;
use waproto::whatsapp::web_message_info::{Status, StubType};

/// Stub parameter recorded when a stanza carried nothing to decrypt.
pub const NO_MESSAGE_FOUND_ERROR_TEXT: &str = "Message absent from node";

/// Which identifier namespace governs `participant`/`recipient` on a stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    #[default]
    Pn,
    Lid,
}

impl AddressingMode {
    /// Anything other than `lid` falls back to phone-number addressing.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("lid") => Self::Lid,
            _ => Self::Pn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pn => "pn",
            Self::Lid => "lid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Chat,
    Group,
    DirectPeerStatus,
    OtherStatus,
    PeerBroadcast,
    OtherBroadcast,
    Newsletter,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Group => "group",
            Self::DirectPeerStatus => "direct_peer_status",
            Self::OtherStatus => "other_status",
            Self::PeerBroadcast => "peer_broadcast",
            Self::OtherBroadcast => "other_broadcast",
            Self::Newsletter => "newsletter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown e2e type: {0}")]
pub struct UnknownEncType(pub String);

/// End-to-end scheme of an encrypted child, resolved from its tag and `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncType {
    /// `skmsg`: group sender-key ciphertext.
    SenderKey,
    /// `pkmsg`: pairwise message that also establishes a session.
    PreKey,
    /// `msmsg`
    Retry,
    /// `msg`: pairwise message on an existing session.
    Session,
    Plaintext,
}

impl EncType {
    pub fn resolve(tag: &str, type_attr: Option<&str>) -> Result<Self, UnknownEncType> {
        if tag == "plaintext" {
            return Ok(Self::Plaintext);
        }
        match type_attr {
            Some("skmsg") => Ok(Self::SenderKey),
            Some("pkmsg") => Ok(Self::PreKey),
            Some("msmsg") => Ok(Self::Retry),
            Some("msg") => Ok(Self::Session),
            other => Err(UnknownEncType(other.unwrap_or_default().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SenderKey => "skmsg",
            Self::PreKey => "pkmsg",
            Self::Retry => "msmsg",
            Self::Session => "msg",
            Self::Plaintext => "plaintext",
        }
    }

    pub fn is_padded(&self) -> bool {
        !matches!(self, Self::Plaintext)
    }
}

/// Client family that generated a message, inferred from the id shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Web,
    Desktop,
    /// Ids that match no official client, typically third-party libraries.
    Library,
}

impl Platform {
    pub fn from_message_id(id: &str) -> Self {
        let len = id.chars().count();
        if id.starts_with("3A") && len == 20 {
            Self::Ios
        } else if id.starts_with("3E") && len == 22 {
            Self::Web
        } else if len == 21 || len == 32 {
            Self::Android
        } else if id.starts_with("3F") || len == 18 {
            Self::Desktop
        } else {
            Self::Library
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageKey {
    pub remote_jid: Jid,
    pub from_me: bool,
    pub id: MessageId,
    pub participant: Option<Jid>,
    /// Bare user part of the sender's phone-number identity.
    pub sender_pn: String,
    pub addressing_mode: AddressingMode,
    pub lid: Option<Jid>,
    pub server_id: Option<MessageServerId>,
}

impl MessageKey {
    pub fn to_proto(&self) -> wa::MessageKey {
        wa::MessageKey {
            remote_jid: Some(self.remote_jid.to_string()),
            from_me: Some(self.from_me),
            id: Some(self.id.clone()),
            participant: self.participant.as_ref().map(Jid::to_string),
        }
    }
}

/// A classified stanza plus whatever its encrypted children decoded to.
#[derive(Debug, Clone, Serialize)]
pub struct MessageEnvelope {
    pub key: MessageKey,
    pub timestamp_seconds: i64,
    pub push_name: Option<String>,
    pub broadcast: bool,
    pub newsletter: bool,
    pub platform: Platform,
    pub attrs: Attrs,
    /// Children left for the consumer after removing ciphertext and reporting nodes.
    pub content: Option<NodeContent>,
    pub message: Option<wa::Message>,
    pub verified_biz_name: Option<String>,
    pub message_stub_type: Option<StubType>,
    pub message_stub_parameters: Vec<String>,
    pub status: Option<Status>,
    pub newsletter_server_id: Option<MessageServerId>,
    pub is_mentioned_in_status: bool,
    pub status_mention_sources: Vec<String>,
}

impl MessageEnvelope {
    pub fn is_stub(&self) -> bool {
        self.message_stub_type.is_some()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_seconds, 0)
    }

    /// Replaces any earlier stub; the last failure wins.
    pub fn set_ciphertext_stub(&mut self, reason: impl Into<String>) {
        self.message_stub_type = Some(StubType::Ciphertext);
        self.message_stub_parameters = vec![reason.into()];
    }

    pub fn to_web_message_info(&self) -> wa::WebMessageInfo {
        wa::WebMessageInfo {
            key: self.key.to_proto(),
            message: self.message.clone(),
            message_timestamp: u64::try_from(self.timestamp_seconds).ok(),
            status: self.status.map(|s| s as i32),
            participant: self.key.participant.as_ref().map(Jid::to_string),
            push_name: self.push_name.clone(),
            message_stub_type: self.message_stub_type.map(|s| s as i32),
            message_stub_parameters: self.message_stub_parameters.clone(),
        }
    }
}
