//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::LazyLock as Lazy;

use netscrape_utils::parser::{self, Arguments, Parser, number};
use netscrape_utils::{Error, Params, Schema, interface};
use regex::{Captures, Regex};
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RouteTable {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vrf: BTreeMap<String, Vrf>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Vrf {
    pub address_family: BTreeMap<String, AddressFamily>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AddressFamily {
    pub routes: BTreeMap<String, Route>,
}

// A route and the paths installed for it.
//
// Protocol, preference, metric and tag describe the last path listed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Route {
    pub route: String,
    pub active: bool,
    pub ubest: u32,
    pub mbest: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_preference: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_protocol_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<NextHops>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NextHops {
    pub next_hop_list: BTreeMap<u32, NextHop>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NextHop {
    pub index: u32,
    pub next_hop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop_vrf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop_af: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_ucast_nexthop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_mcast_nexthop: Option<bool>,
    pub updated: String,
    pub source_protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_protocol_status: Option<String>,
}

// Filters accepted by "show ip route" and "show ipv6 route".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RouteArgs {
    pub route: Option<String>,
    pub protocol: Option<String>,
    pub interface: Option<String>,
    // VRF name, or "all".
    pub vrf: Option<String>,
}

// "show ip route"
#[derive(Debug)]
pub struct ShowIpRoute;

// "show ipv6 route"
#[derive(Debug)]
pub struct ShowIpv6Route;

// ===== regular expressions =====

static REGEX_VRF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^IP(?:v6)? Rout(?:e|ing) Table for VRF "(?P<vrf>[^"]+)""#)
        .unwrap()
});
static REGEX_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<route>[\w:.]+/\d+), ubest/mbest: (?P<ubest>\d+)/(?P<mbest>\d+)(?P<attached>, attached)?",
    )
    .unwrap()
});
// A next hop in another VRF is written "addr%vrf:af".
static REGEX_VIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<best>\*{0,2})via (?P<next_hop>[\w:.]+)(?:%(?P<next_hop_vrf>[\w-]+):(?P<next_hop_af>\w+))?,(?: (?P<interface>[\w/.-]+),)? \[(?P<preference>\d+)/(?P<metric>\d+)\], (?P<updated>[\w:]+), (?P<protocol>[a-zA-Z0-9]+)(?:-(?P<process_id>[\w-]+))?(?:, (?P<status>[\w-]+))?(?:, tag (?P<tag>\d+))?(?P<hidden> \(hidden\))?,?$",
    )
    .unwrap()
});
static REGEX_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tag (?P<tag>\d+)$").unwrap());

// ===== impl RouteTable =====

impl RouteTable {
    pub fn parse_output(
        output: &str,
        vrf: Option<&str>,
        af: &str,
    ) -> RouteTable {
        let mut table = RouteTable::default();

        // Routes listed before any table header belong to the requested VRF.
        let mut vrf = match vrf {
            Some(vrf) if vrf != "all" => vrf.to_owned(),
            _ => "default".to_owned(),
        };
        let mut route: Option<String> = None;

        for line in parser::lines(output) {
            // A table header lists the VRF even when it has no routes.
            if let Some(caps) = REGEX_VRF.captures(line) {
                vrf = caps["vrf"].to_owned();
                table.routes_mut(&vrf, af);
                route = None;
                continue;
            }

            if let Some(caps) = REGEX_ROUTE.captures(line) {
                let prefix = caps["route"].to_owned();
                let entry = Route {
                    route: prefix.clone(),
                    active: true,
                    ubest: number(&caps["ubest"]),
                    mbest: number(&caps["mbest"]),
                    attached: caps.name("attached").map(|_| true),
                    ..Default::default()
                };
                table.routes_mut(&vrf, af).insert(prefix.clone(), entry);
                route = Some(prefix);
                continue;
            }

            let entry = match &route {
                Some(prefix) => table.routes_mut(&vrf, af).get_mut(prefix),
                None => None,
            };
            let Some(entry) = entry else {
                parser::ignore(line);
                continue;
            };

            if let Some(caps) = REGEX_VIA.captures(line) {
                entry.add_path(&caps);
            } else if let Some(caps) = REGEX_TAG.captures(line) {
                // Tag wrapped from the previous path line.
                entry.tag = Some(number(&caps["tag"]));
            } else {
                parser::ignore(line);
            }
        }

        table
    }

    fn routes_mut(
        &mut self,
        vrf: &str,
        af: &str,
    ) -> &mut BTreeMap<String, Route> {
        &mut self
            .vrf
            .entry(vrf.to_owned())
            .or_default()
            .address_family
            .entry(af.to_owned())
            .or_default()
            .routes
    }
}

impl Schema for RouteTable {}

// ===== impl Route =====

impl Route {
    fn add_path(&mut self, caps: &Captures<'_>) {
        let protocol = caps["protocol"].to_owned();
        let status = caps.name("status").map(|m| m.as_str().to_owned());

        let next_hops = self.next_hop.get_or_insert_with(Default::default);
        let index = next_hops.next_hop_list.len() as u32 + 1;
        next_hops.next_hop_list.insert(
            index,
            NextHop {
                index,
                next_hop: caps["next_hop"].to_owned(),
                next_hop_vrf: caps
                    .name("next_hop_vrf")
                    .map(|m| m.as_str().to_owned()),
                next_hop_af: caps
                    .name("next_hop_af")
                    .map(|m| m.as_str().to_lowercase()),
                outgoing_interface: caps
                    .name("interface")
                    .map(|m| interface::normalize(m.as_str())),
                best_ucast_nexthop: (&caps["best"] == "*").then_some(true),
                best_mcast_nexthop: (&caps["best"] == "**").then_some(true),
                updated: caps["updated"].to_owned(),
                source_protocol: protocol.clone(),
                source_protocol_status: status.clone(),
            },
        );

        self.route_preference = Some(number(&caps["preference"]));
        self.metric = Some(number(&caps["metric"]));
        self.source_protocol = Some(protocol);
        if let Some(status) = status {
            self.source_protocol_status = Some(status);
        }
        if let Some(process_id) = caps.name("process_id") {
            self.process_id = Some(process_id.as_str().to_owned());
        }
        if let Some(tag) = caps.name("tag") {
            self.tag = Some(number(tag.as_str()));
        }
        if caps.name("hidden").is_some() {
            self.hidden = Some(true);
        }
    }
}

// ===== impl RouteArgs =====

impl Arguments for RouteArgs {
    fn from_params(params: &Params) -> Result<RouteArgs, Error> {
        Ok(RouteArgs {
            route: params.get_owned("route"),
            protocol: params.get_owned("protocol"),
            interface: params.get_owned("interface"),
            vrf: params.get_owned("vrf"),
        })
    }

    fn to_params(&self) -> Params {
        [
            ("route", &self.route),
            ("protocol", &self.protocol),
            ("interface", &self.interface),
            ("vrf", &self.vrf),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

// ===== impl ShowIpRoute =====

impl Parser for ShowIpRoute {
    type Args = RouteArgs;
    type Output = RouteTable;

    // Templates of equal length are ordered so that keywords are matched
    // before bare placeholders.
    const COMMANDS: &'static [&'static str] = &[
        "show ip route",
        "show ip route {route}",
        "show ip route {protocol}",
        "show ip route interface {interface}",
        "show ip route vrf {vrf}",
        "show ip route {route} {protocol}",
        "show ip route {route} interface {interface}",
        "show ip route {route} vrf {vrf}",
        "show ip route {protocol} interface {interface}",
        "show ip route {protocol} vrf {vrf}",
        "show ip route interface {interface} vrf {vrf}",
        "show ip route {route} {protocol} interface {interface}",
        "show ip route {route} {protocol} vrf {vrf}",
        "show ip route {route} interface {interface} vrf {vrf}",
        "show ip route {protocol} interface {interface} vrf {vrf}",
        "show ip route {route} {protocol} interface {interface} vrf {vrf}",
    ];

    fn cli(output: &str, args: &RouteArgs) -> RouteTable {
        RouteTable::parse_output(output, args.vrf.as_deref(), "ipv4")
    }
}

// ===== impl ShowIpv6Route =====

impl Parser for ShowIpv6Route {
    type Args = RouteArgs;
    type Output = RouteTable;

    const COMMANDS: &'static [&'static str] = &[
        "show ipv6 route",
        "show ipv6 route {route}",
        "show ipv6 route {protocol}",
        "show ipv6 route interface {interface}",
        "show ipv6 route vrf {vrf}",
        "show ipv6 route {route} {protocol}",
        "show ipv6 route {route} interface {interface}",
        "show ipv6 route {route} vrf {vrf}",
        "show ipv6 route {protocol} interface {interface}",
        "show ipv6 route {protocol} vrf {vrf}",
        "show ipv6 route interface {interface} vrf {vrf}",
        "show ipv6 route {route} {protocol} interface {interface}",
        "show ipv6 route {route} {protocol} vrf {vrf}",
        "show ipv6 route {route} interface {interface} vrf {vrf}",
        "show ipv6 route {protocol} interface {interface} vrf {vrf}",
        "show ipv6 route {route} {protocol} interface {interface} vrf {vrf}",
    ];

    fn cli(output: &str, args: &RouteArgs) -> RouteTable {
        RouteTable::parse_output(output, args.vrf.as_deref(), "ipv6")
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_path_wins() {
        let output = "\
            2001:1:1:1::1/128, ubest/mbest: 1/0
                *via fe80::1, Eth1/2.390, [90/2848], 2w0d, eigrp-test, internal
                via fe80::1, Eth1/2.390, [200/0], 2w0d, bgp-65000, internal, tag 65000 (hidden)
        ";
        let table = RouteTable::parse_output(output, Some("VRF1"), "ipv6");
        let route = &table.vrf["VRF1"].address_family["ipv6"].routes
            ["2001:1:1:1::1/128"];
        assert_eq!(route.source_protocol.as_deref(), Some("bgp"));
        assert_eq!(route.process_id.as_deref(), Some("65000"));
        assert_eq!(route.route_preference, Some(200));
        assert_eq!(route.tag, Some(65000));
        assert_eq!(route.hidden, Some(true));

        let paths = &route.next_hop.as_ref().unwrap().next_hop_list;
        assert_eq!(paths[&1].best_ucast_nexthop, Some(true));
        assert_eq!(paths[&2].best_ucast_nexthop, None);
        assert_eq!(
            paths[&1].outgoing_interface.as_deref(),
            Some("Ethernet1/2.390")
        );
    }

    #[test]
    fn next_hop_in_other_vrf() {
        let output = "\
            2001:31:31:31::31/128, ubest/mbest: 1/0
                *via ::ffff:10.229.11.11%default:IPv4, [200/0], 01:01:43, bgp-100, internal,
            tag 100
        ";
        let table = RouteTable::parse_output(output, None, "ipv6");
        let route = &table.vrf["default"].address_family["ipv6"].routes
            ["2001:31:31:31::31/128"];
        assert_eq!(route.tag, Some(100));
        let path = &route.next_hop.as_ref().unwrap().next_hop_list[&1];
        assert_eq!(path.next_hop_vrf.as_deref(), Some("default"));
        assert_eq!(path.next_hop_af.as_deref(), Some("ipv4"));
        assert_eq!(path.outgoing_interface, None);
    }

    #[test]
    fn empty_vrf_table() {
        let output = "IPv6 Routing Table for VRF \"management\"\n";
        let table = RouteTable::parse_output(output, Some("all"), "ipv6");
        let vrf = &table.vrf["management"];
        assert!(vrf.address_family["ipv6"].routes.is_empty());

        let output = "No IP Route Table for VRF \"VRF3\"\n";
        let table = RouteTable::parse_output(output, Some("VRF3"), "ipv6");
        assert!(table.vrf.is_empty());
    }
}
