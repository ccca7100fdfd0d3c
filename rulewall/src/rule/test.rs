#![cfg(test)]

use crate::{
    address,
    error::{AddressFormatError, RuleFormatError},
    rule::{Network, Rule},
};
use rulewall_common::{Action, Direction, FlagRequirement, PortSet, PortSetError};
use test_case::test_case;

#[test]
fn parse_full_rule() {
    let rule = Rule::parse("in accept 10.0.0.9/24 80,443 established", 7).unwrap();
    assert_eq!(rule.direction(), Direction::In);
    assert_eq!(rule.action(), Action::Accept);
    assert_eq!(rule.network(), &"10.0.0.0/24".parse::<Network>().unwrap());
    assert_eq!(rule.network().mask(), 0xFFFF_FF00);
    assert_eq!(rule.ports(), &PortSet::parse("80,443").unwrap());
    assert_eq!(rule.flag(), &FlagRequirement::Established);
    assert_eq!(rule.source_line(), 7);
}

#[test]
fn parse_without_flag() {
    let rule = Rule::parse("  out   drop  *  *  ", 1).unwrap();
    assert_eq!(
        rule,
        Rule::new(
            Direction::Out,
            Action::Drop,
            Network::Any,
            PortSet::parse("*").unwrap()
        )
        .with_line(1)
    );
    assert_eq!(rule.network().mask(), u32::MAX);
}

#[test]
fn parse_host_address() {
    let rule = Rule::parse("in deny 192.168.1.20 22", 3).unwrap();
    let Network::Cidr(cidr) = rule.network() else {
        panic!("expected a cidr");
    };
    assert_eq!(cidr.base(), address::parse("192.168.1.20").unwrap());
    assert_eq!(cidr.mask(), u32::MAX);
}

#[test]
fn unrecognized_flag_is_kept() {
    let rule = Rule::parse("in accept * * syn", 1).unwrap();
    assert_eq!(rule.flag(), &FlagRequirement::Unrecognized("syn".into()));
}

#[test_case("in accept *", RuleFormatError::TokenCount(3))]
#[test_case("in accept * 80 established extra", RuleFormatError::TokenCount(6))]
#[test_case("", RuleFormatError::TokenCount(0))]
#[test_case("up accept * 80", RuleFormatError::Direction("up".into()))]
#[test_case("in allow * 80", RuleFormatError::Action("allow".into()))]
#[test_case("in accept 10.0.0.0/abc 80", RuleFormatError::Prefix("abc".into()))]
#[test_case("in accept 10.0.0.0/40 80", RuleFormatError::PrefixOutOfRange(40))]
#[test_case("in accept 10.0.0.0/8/8 80", RuleFormatError::MultipleMasks("10.0.0.0/8/8".into()))]
#[test_case(
    "in accept 10.0.0 80",
    RuleFormatError::Address(AddressFormatError::WrongOctetCount(3))
)]
#[test_case(
    "in accept 10.0.0.256/8 80",
    RuleFormatError::Address(AddressFormatError::OctetOutOfRange("256".into()))
)]
fn parse_malformed(line: &str, error: RuleFormatError) {
    assert_eq!(Rule::parse(line, 1), Err(error));
}

#[test]
fn empty_port_list_is_impossible_from_text() {
    // whitespace splitting never yields an empty port field
    assert_eq!(PortSet::parse(""), Err(PortSetError::Empty));
    assert!(Rule::parse("in accept * ,", 1).is_ok());
}

#[test_case("in accept 10.0.0.9/24 80,443 established", "in accept 10.0.0.0/24 80,443 established")]
#[test_case("out drop * *", "out drop * *")]
#[test_case("in deny 1.2.3.4 22", "in deny 1.2.3.4/32 22")]
fn display_canonical(line: &str, rendered: &str) {
    assert_eq!(Rule::parse(line, 1).unwrap().to_string(), rendered);
}
