use thiserror::Error;
use wacore::types::NackReason;
use wacore_binary::node::Node;

/// A stanza that cannot be classified. Carries the offending stanza for diagnostics.
#[derive(Debug, Error)]
pub enum StanzaError {
    #[error("missing required attribute '{name}'")]
    MissingAttribute { name: &'static str, stanza: Box<Node> },
    #[error("invalid JID in '{name}': {value}")]
    InvalidJid {
        name: &'static str,
        value: String,
        stanza: Box<Node>,
    },
    #[error("{reason}")]
    Malformed {
        reason: &'static str,
        stanza: Box<Node>,
    },
}

impl StanzaError {
    pub fn stanza(&self) -> &Node {
        match self {
            Self::MissingAttribute { stanza, .. }
            | Self::InvalidJid { stanza, .. }
            | Self::Malformed { stanza, .. } => stanza,
        }
    }

    /// The code a caller should use when rejecting the stanza.
    pub fn nack_reason(&self) -> NackReason {
        match self {
            Self::MissingAttribute { .. } | Self::InvalidJid { .. } => NackReason::ParsingError,
            Self::Malformed { .. } => NackReason::UnrecognizedStanza,
        }
    }
}
