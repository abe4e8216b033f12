/// Reasons a caller can attach to a negative acknowledgement of a stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NackReason {
    ParsingError,
    UnrecognizedStanza,
    UnrecognizedStanzaClass,
    UnrecognizedStanzaType,
    InvalidProtobuf,
    InvalidHostedCompanionStanza,
    MissingMessageSecret,
    SignalErrorOldCounter,
    MessageDeletedOnPeer,
    UnhandledError,
    UnsupportedAdminRevoke,
    UnsupportedLidGroup,
    DbOperationFailed,
}

impl NackReason {
    pub const ALL: [NackReason; 13] = [
        Self::ParsingError,
        Self::UnrecognizedStanza,
        Self::UnrecognizedStanzaClass,
        Self::UnrecognizedStanzaType,
        Self::InvalidProtobuf,
        Self::InvalidHostedCompanionStanza,
        Self::MissingMessageSecret,
        Self::SignalErrorOldCounter,
        Self::MessageDeletedOnPeer,
        Self::UnhandledError,
        Self::UnsupportedAdminRevoke,
        Self::UnsupportedLidGroup,
        Self::DbOperationFailed,
    ];

    pub fn code(self) -> u16 {
        match self {
            Self::ParsingError => 487,
            Self::UnrecognizedStanza => 488,
            Self::UnrecognizedStanzaClass => 489,
            Self::UnrecognizedStanzaType => 490,
            Self::InvalidProtobuf => 491,
            Self::InvalidHostedCompanionStanza => 493,
            Self::MissingMessageSecret => 495,
            Self::SignalErrorOldCounter => 496,
            Self::MessageDeletedOnPeer => 499,
            Self::UnhandledError => 500,
            Self::UnsupportedAdminRevoke => 550,
            Self::UnsupportedLidGroup => 551,
            Self::DbOperationFailed => 552,
        }
    }
}

impl TryFrom<u16> for NackReason {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or(code)
    }
}

impl std::fmt::Display for NackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
