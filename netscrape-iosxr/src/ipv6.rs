//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::LazyLock as Lazy;

use netscrape_utils::parser::{self, Arguments, Parser};
use netscrape_utils::{Error, Params, Schema, interface};
use regex::Regex;
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Ipv6Neighbors {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub interfaces: BTreeMap<String, InterfaceNeighbors>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InterfaceNeighbors {
    pub interface: String,
    pub neighbors: BTreeMap<String, Neighbor>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Neighbor {
    pub age: String,
    pub ip: String,
    pub link_layer_address: String,
    pub neighbor_state: String,
    pub location: String,
    // Detail columns.
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub static_flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serg_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NeighborArgs {
    pub vrf: Option<String>,
    pub interface: Option<String>,
}

// "show ipv6 neighbors"
#[derive(Debug)]
pub struct ShowIpv6Neighbors;

// "show ipv6 neighbors detail"
#[derive(Debug)]
pub struct ShowIpv6NeighborsDetail;

// ===== regular expressions =====

// Detail output pads its columns with non-breaking spaces, hence `\s`.
static REGEX_NEIGHBOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<ip>\[Mcast adjacency\]|\S+)\s+(?P<age>\S+)\s+(?P<lladdr>[\da-f]{4}\.[\da-f]{4}\.[\da-f]{4})\s+(?P<state>\S+)\s+(?P<interface>\S+)\s+(?P<location>\S+)(?:\s+(?P<static>\S+)\s+(?P<dynamic>\S+)\s+(?P<sync>\S+)\s+(?P<serg_flags>\S+))?$",
    )
    .unwrap()
});

// ===== impl Ipv6Neighbors =====

impl Ipv6Neighbors {
    pub fn parse_output(output: &str) -> Ipv6Neighbors {
        let mut neighbors = Ipv6Neighbors::default();

        for line in parser::lines(output) {
            let Some(caps) = REGEX_NEIGHBOR.captures(line) else {
                parser::ignore(line);
                continue;
            };

            let ip = caps["ip"].trim_matches(['[', ']']).to_owned();
            let flag =
                |name: &str| caps.name(name).map(|m| m.as_str().to_owned());
            let mut neighbor = Neighbor {
                age: caps["age"].to_owned(),
                ip: ip.clone(),
                link_layer_address: caps["lladdr"].to_owned(),
                neighbor_state: caps["state"].to_owned(),
                location: caps["location"].to_owned(),
                static_flag: flag("static"),
                dynamic: flag("dynamic"),
                sync: flag("sync"),
                serg_flags: flag("serg_flags"),
                origin: None,
            };
            if neighbor.static_flag.is_some() {
                neighbor.origin = Some(neighbor.origin().to_owned());
            }

            let name = interface::normalize(&caps["interface"]);
            neighbors
                .interfaces
                .entry(name.clone())
                .or_insert_with(|| InterfaceNeighbors {
                    interface: name,
                    neighbors: Default::default(),
                })
                .neighbors
                .insert(ip, neighbor);
        }

        neighbors
    }
}

impl Schema for Ipv6Neighbors {}

// ===== impl Neighbor =====

impl Neighbor {
    // How the entry was learned, from the detail flags.
    fn origin(&self) -> &'static str {
        let set = |flag: &Option<String>| flag.as_deref() == Some("Y");
        if set(&self.static_flag) {
            "static"
        } else if set(&self.dynamic) {
            "dynamic"
        } else if set(&self.sync) {
            "sync"
        } else {
            "other"
        }
    }
}

// ===== impl NeighborArgs =====

impl Arguments for NeighborArgs {
    fn from_params(params: &Params) -> Result<NeighborArgs, Error> {
        Ok(NeighborArgs {
            vrf: params.get_owned("vrf"),
            interface: params.get_owned("interface"),
        })
    }

    fn to_params(&self) -> Params {
        [("vrf", &self.vrf), ("interface", &self.interface)]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect()
    }
}

// ===== impl ShowIpv6Neighbors =====

impl Parser for ShowIpv6Neighbors {
    type Args = NeighborArgs;
    type Output = Ipv6Neighbors;

    const COMMANDS: &'static [&'static str] = &[
        "show ipv6 neighbors",
        "show ipv6 neighbors vrf {vrf}",
        "show ipv6 neighbors {interface}",
        "show ipv6 neighbors vrf {vrf} {interface}",
    ];

    fn cli(output: &str, _args: &NeighborArgs) -> Ipv6Neighbors {
        Ipv6Neighbors::parse_output(output)
    }
}

// ===== impl ShowIpv6NeighborsDetail =====

impl Parser for ShowIpv6NeighborsDetail {
    type Args = ();
    type Output = Ipv6Neighbors;

    const COMMANDS: &'static [&'static str] = &["show ipv6 neighbors detail"];

    fn cli(output: &str, _args: &()) -> Ipv6Neighbors {
        Ipv6Neighbors::parse_output(output)
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_origin() {
        let output = "2010:1:2::22\u{a0}\u{a0} - aaaa.beaf.bbbb REACH Gi0/0/0/0\u{a0} 0/0/CPU0\u{a0} Y\u{a0} -\u{a0} -\u{a0} ff\n\
                      [Mcast adjacency]  - 0000.0000.0000 REACH Gi0/0/0/0 0/0/CPU0 - - - ff\n";
        let neighbors = Ipv6Neighbors::parse_output(output);
        let entries =
            &neighbors.interfaces["GigabitEthernet0/0/0/0"].neighbors;
        assert_eq!(entries["2010:1:2::22"].origin.as_deref(), Some("static"));
        assert_eq!(entries["Mcast adjacency"].origin.as_deref(), Some("other"));
    }

    #[test]
    fn brief_has_no_flags() {
        let output = "fe80::1  47  fa16.3e26.1224 REACH Gi0/0/0/0.390  0/0/CPU0\n";
        let neighbors = Ipv6Neighbors::parse_output(output);
        let neighbor =
            &neighbors.interfaces["GigabitEthernet0/0/0/0.390"].neighbors["fe80::1"];
        assert_eq!(neighbor.origin, None);
        assert_eq!(neighbor.static_flag, None);
    }
}
