mod lookup;

use std::fmt;
use thiserror::Error;

/// Port token matching every packet port.
pub const WILDCARD: &str = "*";

/// One comma-separated element of a rule's port list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortToken {
    Any,
    /// Compared literally against the packet's port text, `80` never matches `080`.
    Exact(String),
}

impl From<&str> for PortToken {
    fn from(token: &str) -> Self {
        if token == WILDCARD {
            PortToken::Any
        } else {
            PortToken::Exact(token.to_string())
        }
    }
}

impl fmt::Display for PortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortToken::Any => f.write_str(WILDCARD),
            PortToken::Exact(port) => f.write_str(port),
        }
    }
}

/// Ordered, non-empty list of port tokens from a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortSet {
    tokens: Vec<PortToken>,
    // set when any token is `*`, lookup short-circuits on it
    any: bool,
}

impl PortSet {
    /// Splits a port spec such as `80,443` or `*` on commas.
    ///
    /// No numeric validation happens here, every token is kept as written.
    pub fn parse(spec: &str) -> Result<Self, PortSetError> {
        if spec.is_empty() {
            return Err(PortSetError::Empty);
        }
        Self::new(spec.split(',').map(PortToken::from).collect())
    }

    pub fn new(tokens: Vec<PortToken>) -> Result<Self, PortSetError> {
        if tokens.is_empty() {
            return Err(PortSetError::Empty);
        }
        let any = tokens.contains(&PortToken::Any);
        Ok(Self { tokens, any })
    }

    pub fn tokens(&self) -> &[PortToken] {
        &self.tokens
    }
}

impl fmt::Display for PortSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PortSetError {
    #[error("port list is empty")]
    Empty,
}
