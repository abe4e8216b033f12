use serde::{Deserialize, Serialize};
use wacore_binary::jid::Jid;

/// Identities of the local account, used to decide which messages are our own.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecoderConfig {
    pub own_pn: Jid,
    pub own_lid: Option<Jid>,
}

impl DecoderConfig {
    pub fn new(own_pn: Jid, own_lid: Option<Jid>) -> Self {
        Self { own_pn, own_lid }
    }
}
