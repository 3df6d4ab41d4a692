//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::LazyLock as Lazy;

use netscrape_utils::parser::{self, Arguments, Parser, number};
use netscrape_utils::{Error, Params, Schema};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

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

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Route {
    pub route: String,
    pub active: bool,
    pub source_protocol_codes: String,
    pub source_protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_preference: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<u32>,
    #[serde(skip_serializing_if = "NextHops::is_empty")]
    pub next_hop: NextHops,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NextHops {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub next_hop_list: BTreeMap<u32, NextHop>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outgoing_interface: BTreeMap<String, OutgoingInterface>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NextHop {
    pub index: u32,
    pub next_hop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_interface: Option<String>,
    pub updated: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OutgoingInterface {
    pub outgoing_interface: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RouteArgs {
    // VRF name, or "all".
    pub vrf: Option<String>,
}

// "show route ipv4"
#[derive(Debug)]
pub struct ShowRouteIpv4;

// "show route ipv6"
#[derive(Debug)]
pub struct ShowRouteIpv6;

// ===== regular expressions =====

static REGEX_VRF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^VRF: (?P<vrf>\S+)$").unwrap());
static REGEX_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<code>[A-Za-z]+\*?)(?: ?(?P<sub>[A-Za-z]+\d?))? +(?P<route>[\w:.]+/\d+)(?: +(?P<rest>.*))?$",
    )
    .unwrap()
});
static REGEX_CONNECTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^is directly connected,(?: (?P<updated>[\w:]+), (?P<interface>\S+))?",
    )
    .unwrap()
});
static REGEX_VIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\[(?P<preference>\d+)/(?P<metric>\d+)\] via (?P<next_hop>\S+)(?: \(nexthop in vrf \S+\))?, (?P<updated>[\w:]+)(?:, (?P<interface>\S+))?",
    )
    .unwrap()
});
static REGEX_WRAPPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<updated>[\w:]+), (?P<interface>\S+)$").unwrap()
});

// ===== impl RouteTable =====

impl RouteTable {
    pub fn parse_output(
        output: &str,
        vrf: Option<&str>,
        af: &str,
    ) -> RouteTable {
        let mut table = RouteTable::default();

        // Without "VRF:" headers, routes belong to the requested VRF.
        let mut vrf = match vrf {
            Some(vrf) if vrf != "all" => vrf.to_owned(),
            _ => "default".to_owned(),
        };
        let mut route: Option<String> = None;

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_VRF.captures(line) {
                vrf = caps["vrf"].to_owned();
                route = None;
                continue;
            }

            let (entry, rest) = match REGEX_ROUTE.captures(line) {
                Some(caps) => {
                    let prefix = caps["route"].to_owned();
                    // The VRF only shows up once it holds a route, so a
                    // "% No matching routes found" section adds nothing.
                    let routes = &mut table
                        .vrf
                        .entry(vrf.clone())
                        .or_default()
                        .address_family
                        .entry(af.to_owned())
                        .or_default()
                        .routes;
                    routes.insert(prefix.clone(), Route::new(&caps, line));
                    let entry = routes.get_mut(&prefix);
                    route = Some(prefix);
                    let rest = caps.name("rest").map_or("", |m| m.as_str());
                    (entry, rest)
                }
                None => {
                    let entry = match &route {
                        Some(prefix) => table
                            .vrf
                            .get_mut(&vrf)
                            .and_then(|vrf| vrf.address_family.get_mut(af))
                            .and_then(|af| af.routes.get_mut(prefix)),
                        None => None,
                    };
                    (entry, line)
                }
            };

            match entry {
                Some(entry) => entry.path_line(rest),
                None => parser::ignore(line),
            }
        }

        table
    }
}

impl Schema for RouteTable {}

// ===== impl Route =====

impl Route {
    fn new(caps: &Captures<'_>, line: &str) -> Route {
        let code = &caps["code"];
        let mut codes = code.to_owned();
        if let Some(sub) = caps.name("sub") {
            codes.push(' ');
            codes.push_str(sub.as_str());
        }
        // FRR backup path marker.
        if line.ends_with("(!)") {
            codes.push_str(" (!)");
        }

        Route {
            route: caps["route"].to_owned(),
            active: true,
            source_protocol_codes: codes,
            source_protocol: source_protocol(code.trim_end_matches('*')),
            route_preference: None,
            metric: None,
            next_hop: NextHops::default(),
        }
    }

    // Handles the part of a line describing one path, either following the
    // prefix or on a line of its own.
    fn path_line(&mut self, rest: &str) {
        if let Some(caps) = REGEX_CONNECTED.captures(rest) {
            // Without an interface the details wrap to the next line.
            if caps.name("interface").is_some() {
                self.next_hop.add_interface(&caps);
            }
        } else if let Some(caps) = REGEX_VIA.captures(rest) {
            let preference = number(&caps["preference"]);
            if preference != 0 {
                self.route_preference = Some(preference);
            }
            self.metric = Some(number(&caps["metric"]));

            let index = self.next_hop.next_hop_list.len() as u32 + 1;
            self.next_hop.next_hop_list.insert(
                index,
                NextHop {
                    index,
                    next_hop: caps["next_hop"].to_owned(),
                    outgoing_interface: caps
                        .name("interface")
                        .map(|m| m.as_str().to_owned()),
                    updated: caps["updated"].to_owned(),
                },
            );
        } else if let Some(caps) = REGEX_WRAPPED.captures(rest) {
            self.next_hop.add_interface(&caps);
        } else {
            parser::ignore(rest);
        }
    }
}

// ===== impl NextHops =====

impl NextHops {
    fn is_empty(&self) -> bool {
        self.next_hop_list.is_empty() && self.outgoing_interface.is_empty()
    }

    fn add_interface(&mut self, caps: &Captures<'_>) {
        let interface = caps["interface"].to_owned();
        self.outgoing_interface.insert(
            interface.clone(),
            OutgoingInterface {
                outgoing_interface: interface,
                updated: caps["updated"].to_owned(),
            },
        );
    }
}

// ===== impl RouteArgs =====

impl Arguments for RouteArgs {
    fn from_params(params: &Params) -> Result<RouteArgs, Error> {
        Ok(RouteArgs {
            vrf: params.get_owned("vrf"),
        })
    }

    fn to_params(&self) -> Params {
        self.vrf.iter().map(|vrf| ("vrf", vrf.as_str())).collect()
    }
}

// ===== impl ShowRouteIpv4 =====

impl Parser for ShowRouteIpv4 {
    type Args = RouteArgs;
    type Output = RouteTable;

    const COMMANDS: &'static [&'static str] =
        &["show route ipv4", "show route vrf {vrf} ipv4"];

    fn cli(output: &str, args: &RouteArgs) -> RouteTable {
        RouteTable::parse_output(output, args.vrf.as_deref(), "ipv4")
    }
}

// ===== impl ShowRouteIpv6 =====

impl Parser for ShowRouteIpv6 {
    type Args = RouteArgs;
    type Output = RouteTable;

    const COMMANDS: &'static [&'static str] =
        &["show route ipv6", "show route vrf {vrf} ipv6"];

    fn cli(output: &str, args: &RouteArgs) -> RouteTable {
        RouteTable::parse_output(output, args.vrf.as_deref(), "ipv6")
    }
}

// ===== helper functions =====

// Maps a route code to the protocol name, falling back to the code itself.
fn source_protocol(code: &str) -> String {
    let protocol = match code {
        "C" => "connected",
        "S" => "static",
        "R" => "rip",
        "B" => "bgp",
        "D" | "EX" => "eigrp",
        "O" => "ospf",
        "E" => "egp",
        "i" => "isis",
        "U" => "per-user static route",
        "o" => "odr",
        "L" => "local",
        "G" => "dagr",
        "l" => "lisp",
        "A" => "access/subscriber",
        "a" => "application route",
        "M" => "mobile route",
        "r" => "rpl",
        "t" => "traffic engineering",
        _ => {
            debug!(%code, "unknown route code");
            code
        }
    };
    protocol.to_owned()
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_names() {
        assert_eq!(source_protocol("i"), "isis");
        assert_eq!(source_protocol("EX"), "eigrp");
        assert_eq!(source_protocol("P"), "P");
    }

    #[test]
    fn route_codes() {
        let output = "O*E2 0.0.0.0/0 [110/1] via 172.16.0.88, 3d00h, Bundle-Ether1\n\
                      i L2 10.4.1.32/32 [115/30] via 10.16.2.3, 1d06h, Hu0/0/1/1 (!)\n";
        let table = RouteTable::parse_output(output, None, "ipv4");
        let routes = &table.vrf["default"].address_family["ipv4"].routes;
        assert_eq!(routes["0.0.0.0/0"].source_protocol_codes, "O* E2");
        assert_eq!(routes["0.0.0.0/0"].source_protocol, "ospf");
        assert_eq!(routes["10.4.1.32/32"].source_protocol_codes, "i L2 (!)");
        assert_eq!(
            routes["10.4.1.32/32"].next_hop.next_hop_list[&1]
                .outgoing_interface
                .as_deref(),
            Some("Hu0/0/1/1")
        );
    }

    #[test]
    fn no_matching_routes() {
        let output = "VRF: red\n\
                      C    10.1.1.0/24 is directly connected, 00:01:02, Gi0/0/0/0\n\
                      VRF: blue\n\
                      % No matching routes found\n\
                      VRF: green\n\
                      S    10.2.2.0/24 [1/0] via 10.1.1.2, 00:00:10\n";
        let table = RouteTable::parse_output(output, Some("all"), "ipv4");
        assert_eq!(table.vrf.keys().collect::<Vec<_>>(), ["green", "red"]);
        assert!(
            table.vrf["green"].address_family["ipv4"]
                .routes
                .contains_key("10.2.2.0/24")
        );
    }
}
