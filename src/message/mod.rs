//! Inbound message stanza handling.
//!
//! The module is split into focused submodules:
//! - `parsing`: classifying a stanza and building its message key and envelope
//! - `decrypt`: walking the encrypted children and merging their payloads

mod decrypt;
mod parsing;

pub use decrypt::decrypt_message_children;
pub use parsing::{DecodedMessageNode, decode_message_node};

#[cfg(test)]
mod tests;
