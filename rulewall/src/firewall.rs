
use std::io::{BufRead, Write};

use crate::{
    config::{Config, MissingRules},
    error::PacketFormatError,
    logger::Logger,
    matcher::Verdict,
    Error, Packet, Result, RuleSet,
};

/// Counters for one pass over a packet stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Packets classified, matched or not.
    pub packets: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Lines skipped because they were not valid packets.
    pub malformed: usize,
}

/// Classifies packets against a fixed [RuleSet].
///
/// A packet takes the action of the first rule it matches, packets matching
/// no rule are dropped. The rules never change once the `Firewall` exists.
///
/// # Example
/// ```
/// # use rulewall::{Firewall, Packet, RuleSet};
/// let rules = RuleSet::parse(["in accept 10.0.0.0/24 80,443"], "inline");
/// let fw = Firewall::new(rules);
/// let packet = Packet::parse("in 10.0.0.5 80 0").unwrap();
/// assert_eq!(fw.classify(&packet).to_string(), "accept(1) in 10.0.0.5 80 0");
/// ```
#[derive(Debug, Default)]
pub struct Firewall {
    rules: RuleSet,
    logger: Logger,
}

impl Firewall {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            logger: Logger::default(),
        }
    }

    /// Loads the rule file named by `config`.
    ///
    /// An unreadable rule file yields a `Firewall` without rules unless
    /// [MissingRules::Fail] is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rules = match RuleSet::load(&config.rule_file) {
            Ok(rules) => rules,
            Err(error) if config.missing_rules == MissingRules::Empty => {
                tracing::error!(%error, "continuing without rules, every packet will be dropped");
                RuleSet::default()
            }
            Err(error) => return Err(error),
        };
        Ok(Self::new(rules).with_verdict_log(config.log_verdicts))
    }

    /// Also logs every verdict as JSON on the `packet_log` target.
    pub fn with_verdict_log(self, enabled: bool) -> Self {
        Self {
            logger: Logger::new(enabled),
            ..self
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classify<'a>(&'a self, packet: &'a Packet) -> Verdict<'a> {
        let verdict = Verdict::new(&self.rules, packet);
        self.logger.log(&verdict);
        verdict
    }

    /// Classifies every packet line of `input`, writing one verdict line per
    /// packet to `output`.
    ///
    /// Blank lines are ignored; malformed lines, including ones that are not
    /// valid UTF-8, are reported and skipped without output. Output is flushed
    /// after each verdict. Only failures of `input` or `output` end the run.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<Stats> {
        let mut stats = Stats::default();
        for (index, line) in input.split(b'\n').enumerate() {
            let line = line?;
            let parsed = match std::str::from_utf8(&line) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => Packet::parse(text),
                Err(error) => Err(PacketFormatError::from(error)),
            };

            let packet = match parsed {
                Ok(packet) => packet,
                Err(error) => {
                    let error = Error::from(error);
                    let text = String::from_utf8_lossy(&line);
                    tracing::warn!(
                        line = index + 1,
                        text = text.trim(),
                        %error,
                        "ignoring malformed packet"
                    );
                    stats.malformed += 1;
                    continue;
                }
            };

            let verdict = self.classify(&packet);
            writeln!(output, "{verdict}")?;
            output.flush()?;

            stats.packets += 1;
            if verdict.is_match() {
                stats.matched += 1;
            } else {
                stats.unmatched += 1;
            }
        }
        Ok(stats)
    }
}
