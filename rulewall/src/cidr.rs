
use std::{fmt, net::Ipv4Addr};

use ipnet::{Ipv4Net, PrefixLenError};

use crate::{address, error::RuleFormatError};

pub(crate) const MAX_PREFIX: u8 = 32;

/// IPv4 network stored as its canonical base address and prefix length.
///
/// Host bits of the address given at construction are masked off, so
/// `base == base & mask` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    base: u32,
    prefix: u8,
}

impl Cidr {
    pub fn new(ip: u32, prefix: u8) -> Result<Self, RuleFormatError> {
        if prefix > MAX_PREFIX {
            return Err(RuleFormatError::PrefixOutOfRange(prefix));
        }
        Ok(Self {
            base: Self::normalize(ip, prefix),
            prefix,
        })
    }

    /// Single host, every bit significant.
    pub fn host(ip: u32) -> Self {
        Self {
            base: ip,
            prefix: MAX_PREFIX,
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        Self::mask_prefix(self.prefix)
    }

    pub fn contains(&self, ip: u32) -> bool {
        ip & self.mask() == self.base
    }

    fn normalize(ip: u32, prefix: u8) -> u32 {
        ip & Self::mask_prefix(prefix)
    }

    // Shifting by 32 is out of range for u32, checked_shr makes /32 all-ones
    // and /0 all-zeros without special cases.
    pub(crate) fn mask_prefix(prefix: u8) -> u32 {
        !(u32::MAX.checked_shr(prefix.into()).unwrap_or_default())
    }
}

impl std::str::FromStr for Cidr {
    type Err = RuleFormatError;

    /// Parses `A.B.C.D` as a host or `A.B.C.D/N` as a network.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut parts = spec.split('/');
        let ip = parts.next().unwrap_or_default();
        let prefix = parts.next();
        if parts.next().is_some() {
            return Err(RuleFormatError::MultipleMasks(spec.to_string()));
        }

        match prefix {
            None => Ok(Self::host(address::parse(ip)?)),
            Some(prefix) => {
                // `u8::from_str` would also take a leading `+`
                if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(RuleFormatError::Prefix(prefix.to_string()));
                }
                let prefix: u8 = prefix
                    .parse()
                    .map_err(|_| RuleFormatError::Prefix(prefix.to_string()))?;
                Self::new(address::parse(ip)?, prefix)
            }
        }
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", address::format(self.base), self.prefix)
    }
}

impl TryFrom<Cidr> for Ipv4Net {
    type Error = PrefixLenError;

    fn try_from(cidr: Cidr) -> Result<Self, Self::Error> {
        Ipv4Net::new(Ipv4Addr::from(cidr.base), cidr.prefix)
    }
}
