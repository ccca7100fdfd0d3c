
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Rule flag token requiring the established bit.
pub const ESTABLISHED: &str = "established";

/// The established bit carried by every packet, `0` or `1` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, IntoStaticStr)]
#[cfg_attr(feature = "user", derive(serde::Serialize))]
pub enum ConnectionState {
    #[strum(serialize = "0")]
    #[cfg_attr(feature = "user", serde(rename = "0"))]
    New,
    #[strum(serialize = "1")]
    #[cfg_attr(feature = "user", serde(rename = "1"))]
    Established,
}

/// Optional fifth token of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FlagRequirement {
    /// No flag token: any packet passes.
    #[default]
    Any,
    /// `established`: only packets with the bit set pass.
    Established,
    /// Any other token. Kept for diagnostics, no packet satisfies it.
    Unrecognized(String),
}

impl FlagRequirement {
    /// Builds the requirement from the optional flag token of a rule line.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Self::Any,
            Some(ESTABLISHED) => Self::Established,
            Some(other) => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn admits(&self, state: ConnectionState) -> bool {
        match self {
            Self::Any => true,
            Self::Established => state == ConnectionState::Established,
            Self::Unrecognized(_) => false,
        }
    }

    /// Token as written in the rule file, `None` when absent.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Established => Some(ESTABLISHED),
            Self::Unrecognized(token) => Some(token.as_str()),
        }
    }
}
