//! Decryption of the encrypted children of a classified message stanza.
//!
//! Children are handled strictly in wire order: a sender key distributed by
//! one child may be needed to decrypt the next. Every per-child failure is
//! recorded on the envelope as a ciphertext stub and never aborts the walk.

use crate::error::DecryptError;
use prost::Message as ProtoMessage;
use wacore::messages::MessageUtils;
use wacore::proto_helpers::{MessageExt, decode_verified_name};
use wacore::signal_repository::SignalRepository;
use wacore::types::message::{EncType, MessageEnvelope, NO_MESSAGE_FOUND_ERROR_TEXT};
use wacore_binary::jid::{Jid, JidExt};
use wacore_binary::node::Node;
use waproto::whatsapp as wa;

/// Decrypts every `enc`/`plaintext` child of a stanza into `envelope`.
///
/// `author` wrote the message; `sender` is the routing identity returned by
/// classification (the author for direct chats, the group or broadcast
/// otherwise).
pub async fn decrypt_message_children(
    envelope: &mut MessageEnvelope,
    children: &[Node],
    author: &Jid,
    sender: &Jid,
    repository: &dyn SignalRepository,
) {
    let mut decryptables = 0usize;

    for child in children {
        match child.tag.as_str() {
            "verified_name" => capture_verified_name(envelope, child),
            "meta" => collect_status_mentions(envelope, child),
            _ => {}
        }

        if child.tag != "enc" && child.tag != "plaintext" {
            continue;
        }
        let Some(ciphertext) = child.content_bytes() else {
            continue;
        };
        decryptables += 1;

        if let Err(e) =
            decrypt_child(envelope, child, ciphertext, author, sender, repository).await
        {
            log::error!(
                "[msg:{}] Failed to decrypt {} child from {} in {}: {e}",
                envelope.key.id,
                child.attrs.get("type").unwrap_or(child.tag.as_str()),
                author,
                envelope.key.remote_jid
            );
            envelope.set_ciphertext_stub(e.to_string());
        }
    }

    if decryptables == 0 {
        log::warn!(
            "[msg:{}] Received message without decryptable content from {}",
            envelope.key.id,
            author
        );
        envelope.set_ciphertext_stub(NO_MESSAGE_FOUND_ERROR_TEXT);
    }
}

async fn decrypt_child(
    envelope: &mut MessageEnvelope,
    child: &Node,
    ciphertext: &[u8],
    author: &Jid,
    sender: &Jid,
    repository: &dyn SignalRepository,
) -> Result<(), DecryptError> {
    let enc_type = EncType::resolve(&child.tag, child.attrs.get("type"))?;

    let plaintext = match enc_type {
        EncType::SenderKey => {
            repository
                .decrypt_group_message(sender, author, ciphertext)
                .await?
        }
        EncType::PreKey | EncType::Retry | EncType::Session => {
            let peer = if sender.is_user() { sender } else { author };
            repository
                .decrypt_message(peer, enc_type, ciphertext)
                .await?
        }
        EncType::Plaintext => ciphertext.to_vec(),
    };

    let payload = if enc_type.is_padded() {
        MessageUtils::unpad_message_ref(&plaintext)
            .map_err(|e| DecryptError::Padding(e.to_string()))?
    } else {
        &plaintext[..]
    };

    let msg = wa::Message::decode(payload)?.unwrap_device_sent();
    log::debug!(
        "[msg:{}] Decrypted {} bytes ({}) from {}",
        envelope.key.id,
        payload.len(),
        enc_type.as_str(),
        author
    );

    if let Some(skdm) = &msg.sender_key_distribution_message
        && let Err(e) = repository
            .process_sender_key_distribution_message(author, skdm)
            .await
    {
        // The main payload of this child is still valid.
        log::warn!(
            "[msg:{}] Failed to process sender key distribution from {}: {e:?}",
            envelope.key.id,
            author
        );
    }

    if let Some(existing) = envelope.message.as_mut() {
        existing.merge_present_fields(msg);
    } else {
        envelope.message = Some(msg);
    }
    Ok(())
}

fn capture_verified_name(envelope: &mut MessageEnvelope, child: &Node) {
    let Some(certificate) = child.content_bytes() else {
        return;
    };
    match decode_verified_name(certificate) {
        Ok(name) => envelope.verified_biz_name = name,
        Err(e) => log::warn!(
            "[msg:{}] Ignoring malformed verified name certificate: {e}",
            envelope.key.id
        ),
    }
}

fn collect_status_mentions(envelope: &mut MessageEnvelope, child: &Node) {
    if !child.attrs.contains_key("status_mentioned") {
        return;
    }
    envelope.is_mentioned_in_status = true;
    envelope.status_mention_sources = child
        .get_children_by_tag("mention_source")
        .flat_map(|source| source.get_children_by_tag("to"))
        .filter_map(|to| to.attrs.get("jid"))
        .map(str::to_string)
        .collect();
}
