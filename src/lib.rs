// Re-export core modules so consumers only need this crate
pub use wacore::{biz, binary, messages, proto_helpers, signal_repository, types, xml};

pub mod config;
pub mod decoder;
pub mod error;
pub mod message;

#[doc(hidden)]
pub mod test_utils;

pub use config::DecoderConfig;
pub use decoder::{DecryptableMessage, MessageDecoder};
pub use error::{DecryptError, StanzaError};
