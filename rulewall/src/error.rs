use std::{io, path::PathBuf, str::Utf8Error};

use rulewall_common::PortSetError;
use thiserror::Error;

/// Firewall errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A rule line could not be compiled.
    #[error("line {line}: {source}")]
    Rule {
        line: usize,
        #[source]
        source: RuleFormatError,
    },
    /// A packet line could not be parsed.
    #[error(transparent)]
    Packet(#[from] PacketFormatError),
    /// The rule file could not be opened or read.
    #[error("cannot read rule file '{}': {source}", path.display())]
    RuleFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// IO error on the packet or verdict stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Malformed dotted-decimal IPv4 text.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AddressFormatError {
    #[error("expected 4 octets, found {0}")]
    WrongOctetCount(usize),
    #[error("octet '{0}' is not a decimal number")]
    NonNumericOctet(String),
    #[error("octet '{0}' is out of range 0-255")]
    OctetOutOfRange(String),
}

/// Malformed rule line.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RuleFormatError {
    #[error("expected 4 or 5 fields, found {0}")]
    TokenCount(usize),
    #[error("direction must be either 'in' or 'out', found '{0}'")]
    Direction(String),
    #[error("action must be either 'accept', 'deny' or 'drop', found '{0}'")]
    Action(String),
    #[error("malformed ip address: {0}")]
    Address(#[from] AddressFormatError),
    #[error("malformed subnet mask '{0}'")]
    Prefix(String),
    #[error("subnet mask /{0} is longer than 32 bits")]
    PrefixOutOfRange(u8),
    #[error("'{0}' contains multiple subnet masks")]
    MultipleMasks(String),
    #[error(transparent)]
    Ports(#[from] PortSetError),
    #[error("line is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
}

/// Malformed packet line.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PacketFormatError {
    #[error("expected 4 fields, found {0}")]
    TokenCount(usize),
    #[error("direction must be either 'in' or 'out', found '{0}'")]
    Direction(String),
    #[error("ip must be a valid IPv4 address: {0}")]
    Address(#[from] AddressFormatError),
    #[error("port must be between 0 and 65535, found '{0}'")]
    Port(String),
    #[error("flag must be either '0' or '1', found '{0}'")]
    Flag(String),
    #[error("line is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
}
