//! Static, first-match-wins packet filter.
//!
//! A rule file is compiled once into a [RuleSet]; every [Packet] then takes
//! the action of the first rule it matches, or is dropped when none does.
//!
//! ```
//! use rulewall::{Firewall, Packet, RuleSet};
//!
//! let rules = RuleSet::parse(
//!     [
//!         "in deny 10.0.0.0/8 22        # no ssh from the lan",
//!         "in accept 10.0.0.0/24 80,443",
//!         "out accept * * established",
//!     ],
//!     "inline",
//! );
//! let fw = Firewall::new(rules);
//!
//! let packet = Packet::parse("in 10.0.0.5 443 0").unwrap();
//! assert_eq!(fw.classify(&packet).to_string(), "accept(2) in 10.0.0.5 443 0");
//!
//! let packet = Packet::parse("out 8.8.8.8 53 0").unwrap();
//! assert_eq!(fw.classify(&packet).to_string(), "drop() out 8.8.8.8 53 0");
//! ```
pub mod address;
mod cidr;
mod config;
mod error;
mod firewall;
mod logger;
mod matcher;
mod packet;
mod rule;
mod rule_set;

pub use rulewall_common::{
    Action, ConnectionState, Direction, FlagRequirement, PortSet, PortToken,
};

pub use cidr::Cidr;
pub use config::{Config, MissingRules};
pub use error::{AddressFormatError, Error, PacketFormatError, RuleFormatError};
pub use firewall::{Firewall, Stats};
pub use matcher::Verdict;
pub use packet::Packet;
pub use rule::{Network, Rule};
pub use rule_set::{RuleSet, RuleSetBuilder};
pub type Result<T> = std::result::Result<T, Error>;
