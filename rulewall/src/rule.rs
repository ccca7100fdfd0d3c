mod test;

use std::{fmt, str::FromStr};

use rulewall_common::{Action, Direction, FlagRequirement, PortSet};

use crate::{cidr::Cidr, error::RuleFormatError};

const ANY_ADDRESS: &str = "*";

/// Addresses a [Rule] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Literal `*`, every address.
    Any,
    Cidr(Cidr),
}

impl Network {
    pub fn contains(&self, ip: u32) -> bool {
        match self {
            Network::Any => true,
            Network::Cidr(cidr) => cidr.contains(ip),
        }
    }

    /// All-ones for [Network::Any]; it is never consulted for matching.
    pub fn mask(&self) -> u32 {
        match self {
            Network::Any => u32::MAX,
            Network::Cidr(cidr) => cidr.mask(),
        }
    }
}

impl FromStr for Network {
    type Err = RuleFormatError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec == ANY_ADDRESS {
            Ok(Network::Any)
        } else {
            spec.parse().map(Network::Cidr)
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Any => f.write_str(ANY_ADDRESS),
            Network::Cidr(cidr) => write!(f, "{cidr}"),
        }
    }
}

/// Compiled line of a rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub(crate) direction: Direction,
    pub(crate) action: Action,
    pub(crate) network: Network,
    pub(crate) ports: PortSet,
    pub(crate) flag: FlagRequirement,
    pub(crate) source_line: usize,
}

impl Rule {
    /// Creates a `Rule` without flag requirement and no source line.
    pub fn new(direction: Direction, action: Action, network: Network, ports: PortSet) -> Self {
        Self {
            direction,
            action,
            network,
            ports,
            flag: FlagRequirement::Any,
            source_line: 0,
        }
    }

    /// Sets the flag requirement for the `Rule`.
    pub fn with_flag(self, flag: FlagRequirement) -> Self {
        Self { flag, ..self }
    }

    /// Sets the 1-based line the `Rule` was read from.
    pub fn with_line(self, source_line: usize) -> Self {
        Self {
            source_line,
            ..self
        }
    }

    /// Compiles one rule line: `direction action ipSpec portSpec [flag]`.
    ///
    /// Comments must already be stripped. Either every field is valid and a
    /// `Rule` is returned, or the first offending field is reported.
    pub fn parse(line: &str, source_line: usize) -> Result<Self, RuleFormatError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (direction, action, network, ports, flag) = match tokens[..] {
            [direction, action, network, ports] => (direction, action, network, ports, None),
            [direction, action, network, ports, flag] => {
                (direction, action, network, ports, Some(flag))
            }
            _ => return Err(RuleFormatError::TokenCount(tokens.len())),
        };

        let direction = Direction::from_str(direction)
            .map_err(|_| RuleFormatError::Direction(direction.to_string()))?;
        let action =
            Action::from_str(action).map_err(|_| RuleFormatError::Action(action.to_string()))?;
        let network = network.parse()?;
        let ports = PortSet::parse(ports)?;

        Ok(Rule::new(direction, action, network, ports)
            .with_flag(FlagRequirement::from_token(flag))
            .with_line(source_line))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn ports(&self) -> &PortSet {
        &self.ports
    }

    pub fn flag(&self) -> &FlagRequirement {
        &self.flag
    }

    pub fn source_line(&self) -> usize {
        self.source_line
    }
}

/// Renders the rule back in rule-file syntax, with the network canonicalized.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.direction, self.action, self.network, self.ports
        )?;
        if let Some(flag) = self.flag.token() {
            write!(f, " {flag}")?;
        }
        Ok(())
    }
}
