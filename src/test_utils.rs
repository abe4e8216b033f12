//! In-memory stand-ins for the session store, shared by unit and integration tests.

use async_trait::async_trait;
use prost::Message as _;
use std::sync::Mutex;
use wacore::messages::MessageUtils;
use wacore::signal_repository::SignalRepository;
use wacore::types::EncType;
use wacore_binary::jid::Jid;
use waproto::whatsapp as wa;

/// One call observed by [`MockSignalRepository`], in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    Pairwise { jid: Jid, enc_type: EncType },
    Group { group: Jid, author: Jid },
    SenderKey { author: Jid, group_id: String },
}

/// Treats every ciphertext as the padded plaintext itself.
///
/// Ciphertexts registered with [`MockSignalRepository::reject`] fail to
/// decrypt, which lets tests mix good and bad children in one stanza.
#[derive(Debug, Default)]
pub struct MockSignalRepository {
    calls: Mutex<Vec<RepositoryCall>>,
    rejected: Vec<Vec<u8>>,
    reject_sender_keys: bool,
}

impl MockSignalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(mut self, ciphertext: impl Into<Vec<u8>>) -> Self {
        self.rejected.push(ciphertext.into());
        self
    }

    pub fn reject_sender_keys(mut self) -> Self {
        self.reject_sender_keys = true;
        self
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: RepositoryCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn open(&self, ciphertext: &[u8]) -> anyhow::Result<Vec<u8>> {
        if self.rejected.iter().any(|r| r == ciphertext) {
            anyhow::bail!("No session record");
        }
        Ok(ciphertext.to_vec())
    }
}

#[async_trait]
impl SignalRepository for MockSignalRepository {
    async fn decrypt_message(
        &self,
        jid: &Jid,
        enc_type: EncType,
        ciphertext: &[u8],
    ) -> anyhow::Result<Vec<u8>> {
        self.record(RepositoryCall::Pairwise {
            jid: jid.clone(),
            enc_type,
        });
        self.open(ciphertext)
    }

    async fn decrypt_group_message(
        &self,
        group: &Jid,
        author: &Jid,
        ciphertext: &[u8],
    ) -> anyhow::Result<Vec<u8>> {
        self.record(RepositoryCall::Group {
            group: group.clone(),
            author: author.clone(),
        });
        self.open(ciphertext)
    }

    async fn process_sender_key_distribution_message(
        &self,
        author: &Jid,
        item: &wa::message::SenderKeyDistributionMessage,
    ) -> anyhow::Result<()> {
        self.record(RepositoryCall::SenderKey {
            author: author.clone(),
            group_id: item.group_id.clone().unwrap_or_default(),
        });
        if self.reject_sender_keys {
            anyhow::bail!("sender key store unavailable");
        }
        Ok(())
    }
}

/// Serializes and pads `msg` the way a sender does before encrypting.
pub fn padded(msg: &wa::Message) -> Vec<u8> {
    MessageUtils::pad_message_v2(msg.encode_to_vec())
}

pub fn text_message(text: &str) -> wa::Message {
    wa::Message {
        conversation: Some(text.to_string()),
        ..Default::default()
    }
}
