use std::fmt;
use std::str::FromStr;

pub const DEFAULT_USER_SERVER: &str = "s.whatsapp.net";
pub const GROUP_SERVER: &str = "g.us";
pub const LEGACY_USER_SERVER: &str = "c.us";
pub const BROADCAST_SERVER: &str = "broadcast";
pub const HIDDEN_USER_SERVER: &str = "lid";
pub const NEWSLETTER_SERVER: &str = "newsletter";
pub const STATUS_BROADCAST_USER: &str = "status";

pub type MessageId = String;
pub type MessageServerId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JidError {
    /// No server part after the `@`.
    MissingServer(String),
    /// The device or agent suffix is not a number.
    InvalidSuffix(String, std::num::ParseIntError),
}

impl fmt::Display for JidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JidError::MissingServer(s) => write!(f, "JID '{s}' has no server"),
            JidError::InvalidSuffix(s, e) => write!(f, "JID '{s}' has an invalid device: {e}"),
        }
    }
}

impl std::error::Error for JidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JidError::InvalidSuffix(_, e) => Some(e),
            JidError::MissingServer(_) => None,
        }
    }
}

/// Shape predicates shared by every JID-like type.
pub trait JidExt {
    fn user(&self) -> &str;
    fn server(&self) -> &str;

    /// Phone-number addressed user (`@s.whatsapp.net`).
    fn is_pn(&self) -> bool {
        self.server() == DEFAULT_USER_SERVER
    }

    /// Linked-identity addressed user (`@lid`).
    fn is_lid(&self) -> bool {
        self.server() == HIDDEN_USER_SERVER
    }

    /// An individual user under either addressing scheme.
    fn is_user(&self) -> bool {
        self.is_pn() || self.is_lid()
    }

    fn is_group(&self) -> bool {
        self.server() == GROUP_SERVER
    }

    /// Any broadcast JID, including `status@broadcast`.
    fn is_broadcast(&self) -> bool {
        self.server() == BROADCAST_SERVER
    }

    fn is_broadcast_list(&self) -> bool {
        self.is_broadcast() && self.user() != STATUS_BROADCAST_USER
    }

    fn is_status_broadcast(&self) -> bool {
        self.is_broadcast() && self.user() == STATUS_BROADCAST_USER
    }

    fn is_newsletter(&self) -> bool {
        self.server() == NEWSLETTER_SERVER
    }

    fn is_same_user_as(&self, other: &impl JidExt) -> bool {
        self.user() == other.user()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Jid {
    pub user: String,
    pub server: String,
    pub agent: u8,
    pub device: u16,
}

impl JidExt for Jid {
    fn user(&self) -> &str {
        &self.user
    }
    fn server(&self) -> &str {
        &self.server
    }
}

impl Jid {
    pub fn new(user: &str, server: &str) -> Self {
        Self {
            user: user.to_string(),
            server: server.to_string(),
            ..Default::default()
        }
    }

    /// Strips agent and device and folds the legacy `c.us` server into
    /// `s.whatsapp.net`.
    pub fn to_normalized_user(&self) -> Self {
        let server = if self.server == LEGACY_USER_SERVER {
            DEFAULT_USER_SERVER
        } else {
            self.server.as_str()
        };
        Self::new(&self.user, server)
    }
}

impl FromStr for Jid {
    type Err = JidError;

    /// Accepts `server`, `user@server`, `user:device@server` and
    /// `user.agent:device@server`. LID users keep any dots in the user part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (user_part, server) = s.split_once('@').unwrap_or(("", s));
        if server.is_empty() {
            return Err(JidError::MissingServer(s.to_string()));
        }

        let mut jid = Jid::new(user_part, server);
        let Some((user, device)) = user_part.rsplit_once(':') else {
            // Legacy `user.device` form without a colon.
            // A suffix that does not fit leaves the user part untouched.
            if server != HIDDEN_USER_SERVER
                && let Some((user, suffix)) = user_part.rsplit_once('.')
            {
                if server == DEFAULT_USER_SERVER {
                    if let Ok(device) = suffix.parse::<u16>() {
                        jid.user = user.to_string();
                        jid.device = device;
                    }
                } else if let Ok(agent) = suffix.parse::<u8>() {
                    jid.user = user.to_string();
                    jid.agent = agent;
                }
            }
            return Ok(jid);
        };

        jid.device = device
            .parse()
            .map_err(|e| JidError::InvalidSuffix(s.to_string(), e))?;
        jid.user = user.to_string();
        if server != HIDDEN_USER_SERVER
            && let Some((bare, agent)) = user.rsplit_once('.')
            && let Ok(agent) = agent.parse::<u8>()
        {
            jid.user = bare.to_string();
            jid.agent = agent;
        }
        Ok(jid)
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user.is_empty() {
            write!(f, "{}", self.server)
        } else {
            write!(f, "{}", self.user)?;
            if self.agent > 0 {
                write!(f, ".{}", self.agent)?;
            }
            if self.device > 0 {
                write!(f, ":{}", self.device)?;
            }
            write!(f, "@{}", self.server)
        }
    }
}
