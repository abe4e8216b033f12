use std::fmt;

use crate::jid::JidError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// An attribute was present but its value did not parse.
    AttrParse {
        key: String,
        value: String,
        reason: String,
    },
    MissingAttr(String),
    Jid(JidError),
    AttrList(Vec<BinaryError>),
    /// The node carried an `<error>` child.
    ErrorNode { code: Option<u16>, text: String },
}

impl fmt::Display for BinaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryError::AttrParse { key, value, reason } => {
                write!(f, "invalid value '{value}' for attribute '{key}': {reason}")
            }
            BinaryError::MissingAttr(key) => write!(f, "missing required attribute '{key}'"),
            BinaryError::Jid(e) => write!(f, "{e}"),
            BinaryError::AttrList(list) => {
                write!(f, "{} attribute errors", list.len())?;
                for e in list {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
            BinaryError::ErrorNode { code: Some(code), text } => write!(f, "{text} (code {code})"),
            BinaryError::ErrorNode { code: None, text } => f.write_str(text),
        }
    }
}

impl std::error::Error for BinaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BinaryError::Jid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<JidError> for BinaryError {
    fn from(err: JidError) -> Self {
        BinaryError::Jid(err)
    }
}

pub type Result<T> = std::result::Result<T, BinaryError>;
