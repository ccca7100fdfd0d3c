use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::bail;
use clap::Parser;
use rulewall::{Config, Firewall, MissingRules};
use tracing_subscriber::EnvFilter;

/// Classify packet lines read from standard input against a rule file.
#[derive(Debug, Parser)]
#[clap(name = "rulewall", version)]
pub struct Opt {
    /// Rule file, one `direction action ip ports [flag]` rule per line
    rule_file: PathBuf,
    /// Stop if the rule file cannot be read instead of running without rules
    #[clap(long)]
    strict: bool,
    /// Also log every verdict as JSON on standard error
    #[clap(long)]
    log_verdicts: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let missing_rules = if opt.strict {
            MissingRules::Fail
        } else {
            MissingRules::Empty
        };
        Config::new(opt.rule_file)
            .with_missing_rules(missing_rules)
            .with_verdict_log(opt.log_verdicts)
    }
}

fn main() -> Result<(), anyhow::Error> {
    let opt = Opt::parse();
    // stdout carries verdict lines only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no packet input received, usage: rulewall <RULE_FILE> < <PACKET_FILE>");
    }

    let firewall = Firewall::from_config(&Config::from(opt))?;
    let stats = firewall.run(stdin.lock(), io::stdout().lock())?;
    tracing::info!(
        packets = stats.packets,
        matched = stats.matched,
        unmatched = stats.unmatched,
        malformed = stats.malformed,
        "input exhausted"
    );

    Ok(())
}
