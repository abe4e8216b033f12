pub mod message;
pub mod nack;

pub use message::{
    AddressingMode, EncType, MessageEnvelope, MessageKey, MessageType, Platform,
};
pub use nack::NackReason;
