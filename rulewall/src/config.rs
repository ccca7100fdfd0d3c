use std::path::PathBuf;

/// What to do when the rule file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRules {
    /// Report the failure and run with no rules, every packet drops.
    #[default]
    Empty,
    /// Report the failure and stop.
    Fail,
}

/// Startup configuration of a [Firewall](crate::Firewall).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rule_file: PathBuf,
    pub missing_rules: MissingRules,
    pub log_verdicts: bool,
}

impl Config {
    pub fn new(rule_file: impl Into<PathBuf>) -> Self {
        Self {
            rule_file: rule_file.into(),
            missing_rules: MissingRules::default(),
            log_verdicts: false,
        }
    }

    pub fn with_missing_rules(self, missing_rules: MissingRules) -> Self {
        Self {
            missing_rules,
            ..self
        }
    }

    pub fn with_verdict_log(self, log_verdicts: bool) -> Self {
        Self {
            log_verdicts,
            ..self
        }
    }
}
