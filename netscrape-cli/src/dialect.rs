//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use itertools::Itertools;
use netscrape_utils::Error;
use netscrape_utils::parser::{self, Entry, Input};
use serde::Deserialize;

// Network operating systems with a parser collection.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Iosxe,
    Iosxr,
    Nxos,
}

// ===== impl Os =====

impl Os {
    pub const NAMES: &'static [&'static str] = &["iosxe", "iosxr", "nxos"];

    pub fn from_name(name: &str) -> Option<Os> {
        match name {
            "iosxe" => Some(Os::Iosxe),
            "iosxr" => Some(Os::Iosxr),
            "nxos" => Some(Os::Nxos),
            _ => None,
        }
    }

    pub fn parsers(&self) -> Vec<Entry> {
        match self {
            Os::Iosxe => netscrape_iosxe::parsers(),
            Os::Iosxr => netscrape_iosxr::parsers(),
            Os::Nxos => netscrape_nxos::parsers(),
        }
    }

    // Command templates accepted by this OS, one per line.
    pub fn commands(&self) -> String {
        self.parsers()
            .iter()
            .flat_map(|entry| entry.commands.iter())
            .join("\n")
    }

    // Parses captured output of `command` into a JSON record.
    pub fn parse(
        &self,
        command: &str,
        output: &str,
    ) -> Result<serde_json::Value, Error> {
        let entries = self.parsers();
        let (entry, params) = parser::lookup(&entries, command)?;
        entry.run(Input::Output(output), &params)
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for name in Os::NAMES {
            assert!(Os::from_name(name).is_some());
        }
        assert_eq!(Os::from_name("junos"), None);
    }

    #[test]
    fn command_listing() {
        let commands = Os::Iosxr.commands();
        assert!(commands.lines().any(|line| line == "show route ipv4"));
        assert!(!commands.contains("show access-lists"));
    }

    #[test]
    fn parse_captured_output() {
        let record = Os::Iosxr
            .parse(
                "show l2vpn bridge-domain summary",
                "Number of groups: 1, bridge-domains: 1, Up: 1, Shutdown: 0",
            )
            .unwrap();
        assert_eq!(record["number_of_groups"], 1);
        assert_eq!(record["bridge_domains"]["total"], 1);

        assert!(matches!(
            Os::Nxos.parse("show route ipv4", ""),
            Err(Error::UnknownCommand(..))
        ));
        assert!(matches!(
            Os::Nxos.parse("show ip route", ""),
            Err(Error::EmptyOutput)
        ));
    }
}
