#![cfg(test)]

use crate::{rule_set::strip_comment, Error, Rule, RuleSet};
use rulewall_common::{Action, Direction};
use test_case::test_case;

const SOURCE: &str = "rules.txt";

#[test_case("in accept * 80", "in accept * 80")]
#[test_case("in accept * 80 # web", "in accept * 80 ")]
#[test_case("# only a comment", "")]
#[test_case("in accept * 80#a#b", "in accept * 80")]
#[test_case("", "")]
fn strip_comments(line: &str, stripped: &str) {
    assert_eq!(strip_comment(line), stripped);
}

#[test]
fn parse_keeps_file_order_and_line_numbers() {
    let lines = [
        "# header comment",
        "in accept 10.0.0.0/24 80,443",
        "",
        "   ",
        "out deny * * established # trailing",
        "in drop * *",
    ];
    let rule_set = RuleSet::parse(lines, SOURCE);
    let summary: Vec<_> = rule_set
        .rules()
        .iter()
        .map(|rule| (rule.source_line(), rule.action()))
        .collect();
    assert_eq!(
        summary,
        vec![(2, Action::Accept), (5, Action::Deny), (6, Action::Drop)]
    );
}

#[test]
fn malformed_lines_are_skipped() {
    let lines = [
        "in accept *",
        "in accept 10.0.0.0/24 80",
        "in allow * 80",
        "in accept 10.0.0.0/8/8 80",
        "in accept 300.0.0.1 80",
        "out drop * 22",
    ];
    let rule_set = RuleSet::parse(lines, SOURCE);
    assert_eq!(rule_set.len(), 2);
    assert_eq!(rule_set.rules()[0].source_line(), 2);
    assert_eq!(rule_set.rules()[1].source_line(), 6);
}

#[test]
fn empty_input_gives_empty_set() {
    let rule_set = RuleSet::parse(Vec::<String>::new(), SOURCE);
    assert!(rule_set.is_empty());
    assert_eq!(rule_set, RuleSet::default());
}

#[test]
fn builder_appends_in_order() {
    let mut builder = RuleSet::builder();
    builder
        .push(Rule::parse("in accept * 80", 10).unwrap())
        .push(Rule::parse("in deny * 80", 20).unwrap());
    assert!(builder.add_line("out drop * * # c", 30, SOURCE));
    assert!(!builder.add_line("# nothing", 31, SOURCE));
    assert!(!builder.add_line("broken", 32, SOURCE));
    let rule_set = builder.build();
    let lines: Vec<_> = rule_set.rules().iter().map(Rule::source_line).collect();
    assert_eq!(lines, vec![10, 20, 30]);
}

#[test]
fn from_reader_handles_crlf() {
    let input = "in accept * 80\r\nout deny * 22\r\n";
    let rule_set = RuleSet::from_reader(input.as_bytes(), SOURCE).unwrap();
    assert_eq!(rule_set.len(), 2);
}

#[test]
fn invalid_utf8_line_is_skipped() {
    let input: &[u8] = b"in accept * 80\nin accept \xff 80\nout accept * 22\n";
    let rule_set = RuleSet::from_reader(input, SOURCE).unwrap();
    let summary: Vec<_> = rule_set
        .rules()
        .iter()
        .map(|rule| (rule.source_line(), rule.direction()))
        .collect();
    assert_eq!(summary, vec![(1, Direction::In), (3, Direction::Out)]);
}

#[test]
fn load_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rules.txt");
    let rule_set = RuleSet::load(path).unwrap();
    assert!(!rule_set.is_empty());
}

#[test]
fn load_missing_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/does-not-exist.txt");
    let error = RuleSet::load(path).unwrap_err();
    assert!(matches!(error, Error::RuleFile { .. }));
    assert!(error.to_string().contains("does-not-exist.txt"));
}
