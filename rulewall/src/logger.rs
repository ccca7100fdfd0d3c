use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use rulewall_common::{Action, ConnectionState, Direction};
use serde::Serialize;

use crate::{matcher::Verdict, rule::Network};

/// Emits one JSON record per classified packet on the `packet_log` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, verdict: &Verdict<'_>) {
        if !self.enabled {
            return;
        }
        let Ok(record) = serde_json::to_string(&VerdictFormatted::from(verdict)) else {
            return;
        };
        tracing::info!(target: "packet_log", "{record}");
    }
}

#[derive(Debug, Clone, Serialize)]
struct VerdictFormatted<'a> {
    direction: Direction,
    address: Ipv4Addr,
    port: &'a str,
    flag: ConnectionState,
    action: Action,
    rule_line: Option<usize>,
    network: Option<Ipv4Net>,
    timestamp: String,
}

impl<'a> From<&Verdict<'a>> for VerdictFormatted<'a> {
    fn from(verdict: &Verdict<'a>) -> Self {
        let timestamp =
            chrono::offset::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let network = verdict.rule.and_then(|rule| match rule.network() {
            Network::Any => None,
            Network::Cidr(cidr) => Ipv4Net::try_from(*cidr).ok(),
        });
        Self {
            direction: verdict.packet.direction(),
            address: Ipv4Addr::from(verdict.packet.address()),
            port: verdict.packet.port(),
            flag: verdict.packet.state(),
            action: verdict.action(),
            rule_line: verdict.rule.map(|rule| rule.source_line()),
            network,
            timestamp,
        }
    }
}
