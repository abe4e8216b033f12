pub use wacore_binary as binary;

pub mod biz;
pub mod messages;
pub mod proto_helpers;
pub mod signal_repository;
pub mod types;
pub mod xml;
