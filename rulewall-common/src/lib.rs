//! Vocabulary shared by rules and packets.
//!
//! Everything here is a closed set: directions, actions, the established bit
//! carried by packets and the flag requirement carried by rules. Text forms
//! are the ones used by rule files and packet streams.
mod flag;
mod port_set;

pub use flag::{ConnectionState, FlagRequirement, ESTABLISHED};
pub use port_set::{PortSet, PortSetError, PortToken, WILDCARD};

use strum_macros::{Display, EnumString, IntoStaticStr};

/// Traffic direction of a rule or a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "user",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    In,
    Out,
}

/// Action attached to a rule, reported verbatim when the rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "user",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Action {
    Accept,
    Deny,
    Drop,
}

#[cfg(test)]
mod test {
    use super::{Action, Direction};
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case("in", Some(Direction::In))]
    #[test_case("out", Some(Direction::Out))]
    #[test_case("IN", None)]
    #[test_case("inbound", None)]
    #[test_case("", None)]
    fn direction_from_str(text: &str, expected: Option<Direction>) {
        assert_eq!(Direction::from_str(text).ok(), expected);
    }

    #[test_case("accept", Some(Action::Accept))]
    #[test_case("deny", Some(Action::Deny))]
    #[test_case("drop", Some(Action::Drop))]
    #[test_case("reject", None)]
    #[test_case("Accept", None)]
    fn action_from_str(text: &str, expected: Option<Action>) {
        assert_eq!(Action::from_str(text).ok(), expected);
    }

    #[test]
    fn text_forms_are_lowercase() {
        assert_eq!(Action::Deny.to_string(), "deny");
        assert_eq!(Direction::Out.to_string(), "out");
        let s: &'static str = Action::Accept.into();
        assert_eq!(s, "accept");
    }
}
