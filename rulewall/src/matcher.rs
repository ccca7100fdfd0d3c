//! First-match-wins classification.

use std::fmt;

use rulewall_common::Action;

use crate::{Packet, Rule, RuleSet};

impl Rule {
    /// Whether `packet` satisfies every field of the rule.
    pub fn matches(&self, packet: &Packet) -> bool {
        self.network.contains(packet.address())
            && self.direction == packet.direction()
            && self.ports.lookup(packet.port())
            && self.flag.admits(packet.state())
    }
}

impl RuleSet {
    /// First rule, in file order, matching `packet`.
    ///
    /// A broader rule earlier in the file shadows any later, more specific
    /// one; there is no specificity resolution.
    pub fn lookup(&self, packet: &Packet) -> Option<&Rule> {
        self.rules().iter().find(|rule| rule.matches(packet))
    }
}

/// Outcome of classifying one packet, displayed as the verdict line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    pub packet: &'a Packet,
    pub rule: Option<&'a Rule>,
}

impl<'a> Verdict<'a> {
    pub fn new(rules: &'a RuleSet, packet: &'a Packet) -> Self {
        Self {
            packet,
            rule: rules.lookup(packet),
        }
    }

    /// The matching rule's action, otherwise the implicit drop.
    pub fn action(&self) -> Action {
        self.rule.map_or(Action::Drop, Rule::action)
    }

    pub fn is_match(&self) -> bool {
        self.rule.is_some()
    }
}

impl fmt::Display for Verdict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Some(rule) => write!(
                f,
                "{}({}) {}",
                rule.action(),
                rule.source_line(),
                self.packet
            ),
            None => write!(f, "{}() {}", Action::Drop, self.packet),
        }
    }
}
