
use std::{fmt, str::FromStr};

use rulewall_common::{ConnectionState, Direction};

use crate::{address, error::PacketFormatError};

/// One classification request: `direction ip port flag`.
///
/// The address and port keep their original text, verdict lines echo the
/// packet as it was received and ports are compared literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    direction: Direction,
    address: u32,
    address_text: String,
    port: String,
    state: ConnectionState,
}

impl Packet {
    pub fn parse(line: &str) -> Result<Self, PacketFormatError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [direction, ip, port, flag] = tokens[..] else {
            return Err(PacketFormatError::TokenCount(tokens.len()));
        };

        let direction = Direction::from_str(direction)
            .map_err(|_| PacketFormatError::Direction(direction.to_string()))?;
        let address = address::parse(ip)?;
        // range check only, the text is what rules compare against
        port.parse::<u16>()
            .map_err(|_| PacketFormatError::Port(port.to_string()))?;
        let state = ConnectionState::from_str(flag)
            .map_err(|_| PacketFormatError::Flag(flag.to_string()))?;

        Ok(Self {
            direction,
            address,
            address_text: ip.to_string(),
            port: port.to_string(),
            state,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }
}

impl FromStr for Packet {
    type Err = PacketFormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.direction, self.address_text, self.port, self.state
        )
    }
}
