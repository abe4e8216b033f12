use crate::types::message::EncType;
use async_trait::async_trait;
use wacore_binary::jid::Jid;
use waproto::whatsapp as wa;

/// The slice of the Signal session store that inbound message decoding needs.
///
/// Implementations own the pairwise and sender-key state; every call may
/// suspend. Plaintext returned from the decrypt calls is still padded.
#[async_trait]
pub trait SignalRepository: Send + Sync {
    /// Decrypts a pairwise (`pkmsg`, `msg` or `msmsg`) ciphertext from `jid`.
    async fn decrypt_message(
        &self,
        jid: &Jid,
        enc_type: EncType,
        ciphertext: &[u8],
    ) -> anyhow::Result<Vec<u8>>;

    /// Decrypts a sender-key ciphertext sent by `author` to `group`.
    async fn decrypt_group_message(
        &self,
        group: &Jid,
        author: &Jid,
        ciphertext: &[u8],
    ) -> anyhow::Result<Vec<u8>>;

    /// Stores the sender key `author` distributed alongside a message.
    async fn process_sender_key_distribution_message(
        &self,
        author: &Jid,
        item: &wa::message::SenderKeyDistributionMessage,
    ) -> anyhow::Result<()>;
}
