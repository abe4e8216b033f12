use prost::Message as _;
use wacore_binary::node::Node;
use waproto::whatsapp as wa;

/// Invokes a callback macro with every top-level field of `wa::Message`.
///
/// Keep this list in sync with `waproto` when new message kinds are added.
macro_rules! with_message_fields {
    ($callback:ident!($($prefix:tt)*)) => {
        $callback!($($prefix)*
            conversation,
            sender_key_distribution_message,
            image_message,
            extended_text_message,
            protocol_message,
            device_sent_message,
            message_context_info,
            reaction_message,
        )
    };
}

macro_rules! overwrite_present_fields_impl {
    ($dst:expr, $src:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $src.$field {
                $dst.$field = Some(value);
            }
        )+
    };
}

/// Extension trait for wa::Message
pub trait MessageExt {
    /// Returns the inner message of a device-sent wrapper, or the message itself.
    fn unwrap_device_sent(self) -> wa::Message;

    /// Shallow merge: every top-level field set on `other` replaces ours.
    fn merge_present_fields(&mut self, other: wa::Message);
}

impl MessageExt for wa::Message {
    fn unwrap_device_sent(mut self) -> wa::Message {
        match self
            .device_sent_message
            .as_mut()
            .and_then(|dsm| dsm.message.take())
        {
            Some(inner) => *inner,
            None => self,
        }
    }

    fn merge_present_fields(&mut self, other: wa::Message) {
        with_message_fields!(overwrite_present_fields_impl!(self, other,));
    }
}

/// Decodes a `VerifiedNameCertificate` and returns the name from its details.
pub fn decode_verified_name(certificate: &[u8]) -> Result<Option<String>, prost::DecodeError> {
    let cert = wa::VerifiedNameCertificate::decode(certificate)?;
    let details = wa::verified_name_certificate::Details::decode(
        cert.details.as_deref().unwrap_or_default(),
    )?;
    Ok(details.verified_name)
}

/// Decodes every byte-content `<message>` child as a `WebMessageInfo`, in wire order.
pub fn get_binary_node_messages(node: &Node) -> Result<Vec<wa::WebMessageInfo>, prost::DecodeError> {
    node.get_children_by_tag("message")
        .filter_map(Node::content_bytes)
        .map(wa::WebMessageInfo::decode)
        .collect()
}
