use crate::config::DecoderConfig;
use crate::error::StanzaError;
use crate::message::{DecodedMessageNode, decode_message_node, decrypt_message_children};
use std::sync::Arc;
use wacore::signal_repository::SignalRepository;
use wacore::types::message::{MessageEnvelope, MessageType};
use wacore_binary::jid::Jid;
use wacore_binary::node::Node;

/// Turns inbound `<message>` stanzas into decrypted envelopes.
///
/// Classification is synchronous and never touches the session store;
/// decryption is deferred to [`DecryptableMessage::decrypt`] so callers can
/// nack an unclassifiable stanza before doing any crypto.
#[derive(Clone)]
pub struct MessageDecoder {
    config: DecoderConfig,
    repository: Arc<dyn SignalRepository>,
}

impl MessageDecoder {
    pub fn new(config: DecoderConfig, repository: Arc<dyn SignalRepository>) -> Self {
        Self { config, repository }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Classifies `stanza` and returns a handle that decrypts its children.
    pub fn decrypt_message_node<'a>(
        &'a self,
        stanza: &'a Node,
    ) -> Result<DecryptableMessage<'a>, StanzaError> {
        let DecodedMessageNode {
            envelope,
            message_type,
            author,
            sender,
        } = decode_message_node(stanza, &self.config.own_pn, self.config.own_lid.as_ref())?;

        Ok(DecryptableMessage {
            envelope,
            category: stanza
                .attrs
                .get("category")
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            message_type,
            author,
            sender,
            children: stanza.get_all_children(),
            repository: self.repository.as_ref(),
        })
    }

    /// Classifies and decrypts in one step.
    pub async fn decode(&self, stanza: &Node) -> Result<MessageEnvelope, StanzaError> {
        Ok(self.decrypt_message_node(stanza)?.decrypt().await)
    }
}

/// A classified stanza whose encrypted children have not been decrypted yet.
pub struct DecryptableMessage<'a> {
    pub envelope: MessageEnvelope,
    /// The stanza's `category` attribute, e.g. `peer` for messages from our own devices.
    pub category: Option<String>,
    pub message_type: MessageType,
    pub author: Jid,
    pub sender: Jid,
    children: &'a [Node],
    repository: &'a dyn SignalRepository,
}

impl DecryptableMessage<'_> {
    /// Decrypts every encrypted child in order. Failures are recorded on the
    /// returned envelope as a ciphertext stub rather than returned.
    pub async fn decrypt(mut self) -> MessageEnvelope {
        decrypt_message_children(
            &mut self.envelope,
            self.children,
            &self.author,
            &self.sender,
            self.repository,
        )
        .await;
        self.envelope
    }
}
