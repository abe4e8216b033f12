pub mod decryption;
pub mod stanza;

pub use decryption::DecryptError;
pub use stanza::StanzaError;
