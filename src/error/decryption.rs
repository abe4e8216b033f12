use thiserror::Error;
use wacore::types::message::UnknownEncType;

/// Failure to turn one encrypted child into a message.
///
/// The `Display` text becomes the ciphertext stub parameter on the envelope.
#[derive(Debug, Error)]
pub enum DecryptError {
    #[error(transparent)]
    UnknownEncType(#[from] UnknownEncType),
    #[error("{0}")]
    Repository(#[from] anyhow::Error),
    #[error("invalid padding: {0}")]
    Padding(String),
    #[error("failed to decode message payload: {0}")]
    Decode(#[from] prost::DecodeError),
}
