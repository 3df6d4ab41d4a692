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

// Unicast RIB as reported by "show routing".
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Rib {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vrf: BTreeMap<String, RibVrf>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibVrf {
    pub address_family: BTreeMap<String, RibAddressFamily>,
}

// Routes of one address family, with the BGP distances seen on its paths.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibAddressFamily {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_distance_extern_as: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_distance_internal_as: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_distance_local: Option<u32>,
    pub ip: BTreeMap<String, RibRoute>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibRoute {
    pub ubest_num: String,
    pub mbest_num: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_route: Option<BestRoute>,
    // Paths that aren't best for either unicast or multicast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<RibNextHops>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BestRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicast: Option<RibNextHops>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multicast: Option<RibNextHops>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibNextHops {
    pub nexthop: BTreeMap<String, RibNextHop>,
}

// Paths through one next hop, keyed by the protocol that installed them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibNextHop {
    pub protocol: BTreeMap<String, RibPath>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RibPath {
    pub uptime: String,
    pub preference: String,
    pub metric: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    // Table of a next hop written "addr%table".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpls_vpn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evpn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnelid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encap: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RibFamily {
    Ipv4,
    Ipv6,
}

// Filters accepted by "show routing [ipv6]".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RoutingArgs {
    pub ip: Option<String>,
    // VRF name, or "all".
    pub vrf: Option<String>,
}

// "show routing vrf all"
#[derive(Debug)]
pub struct ShowRoutingVrfAll;

// "show routing ipv6 vrf all"
#[derive(Debug)]
pub struct ShowRoutingIpv6VrfAll;

// "show routing"
#[derive(Debug)]
pub struct ShowRouting;

// ===== regular expressions =====

static REGEX_VRF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^IP(?:v6)? Rout(?:e|ing) Table for VRF "(?P<vrf>[^"]+)""#)
        .unwrap()
});
static REGEX_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<prefix>[\w:.]+/\d+), ubest/mbest: (?P<ubest>\d+)/(?P<mbest>\d+)(?: time)?(?P<attached>, attached)?",
    )
    .unwrap()
});
static REGEX_VIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<best>\*{0,2})via (?P<next_hop>vrf \S+?|[\w:.]+)(?:%(?P<table>[\w:-]+))?, (?P<rest>.*)$",
    )
    .unwrap()
});
static REGEX_PREFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<preference>\d+)/(?P<metric>\d+)\]$").unwrap()
});
static REGEX_PROTOCOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<protocol>[a-zA-Z0-9]+)(?:-(?P<id>\S+))?$").unwrap()
});
static REGEX_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((?P<flag>[\w-]+)\)").unwrap());
static REGEX_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tag (?P<tag>\d+)$").unwrap());
static REGEX_SEGID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^segid: (?P<segid>\d+)(?: tunnelid: (?P<tunnelid>\S+))?(?: encap: (?P<encap>\S+))?$",
    )
    .unwrap()
});

// ===== impl Rib =====

impl Rib {
    pub fn parse_output(
        output: &str,
        vrf: Option<&str>,
        family: RibFamily,
    ) -> Rib {
        let mut rib = Rib::default();

        // Routes listed before any table header belong to the requested VRF.
        let mut vrf = match vrf {
            Some(vrf) if vrf != "all" => vrf.to_owned(),
            _ => "default".to_owned(),
        };
        // The route whose paths follow. It enters the RIB with its first
        // path, so VRFs without routes are left out.
        let mut route: Option<(String, RibRoute)> = None;

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_VRF.captures(line) {
                vrf = caps["vrf"].to_owned();
                route = None;
                continue;
            }

            if let Some(caps) = REGEX_ROUTE.captures(line) {
                let entry = RibRoute {
                    ubest_num: caps["ubest"].to_owned(),
                    mbest_num: caps["mbest"].to_owned(),
                    attach: caps
                        .name("attached")
                        .map(|_| "attached".to_owned()),
                    ..Default::default()
                };
                route = Some((caps["prefix"].to_owned(), entry));
                continue;
            }

            let (Some(caps), Some((prefix, entry))) =
                (REGEX_VIA.captures(line), &route)
            else {
                parser::ignore(line);
                continue;
            };
            let Some((protocol, path)) = RibPath::parse(&caps) else {
                parser::ignore(line);
                continue;
            };

            let af = rib.address_family_mut(&vrf, family);
            if protocol == "bgp" {
                af.add_bgp_distance(&path);
            }
            let hops = af
                .ip
                .entry(prefix.clone())
                .or_insert_with(|| entry.clone())
                .next_hops_mut(&caps["best"]);
            hops.nexthop
                .entry(caps["next_hop"].to_owned())
                .or_default()
                .protocol
                .insert(protocol, path);
        }

        rib
    }

    fn address_family_mut(
        &mut self,
        vrf: &str,
        family: RibFamily,
    ) -> &mut RibAddressFamily {
        let name = match (vrf, family) {
            ("default", RibFamily::Ipv4) => "ipv4 unicast",
            ("default", RibFamily::Ipv6) => "ipv6 unicast",
            (_, RibFamily::Ipv4) => "vpnv4 unicast",
            (_, RibFamily::Ipv6) => "vpnv6 unicast",
        };
        self.vrf
            .entry(vrf.to_owned())
            .or_default()
            .address_family
            .entry(name.to_owned())
            .or_default()
    }
}

impl Schema for Rib {}

// ===== impl RibAddressFamily =====

impl RibAddressFamily {
    fn add_bgp_distance(&mut self, path: &RibPath) {
        let distance = match path.attribute.as_deref() {
            Some("external") => &mut self.bgp_distance_extern_as,
            Some("internal") => &mut self.bgp_distance_internal_as,
            Some("discard") => &mut self.bgp_distance_local,
            _ => return,
        };
        *distance = Some(number(&path.preference));
    }
}

// ===== impl RibRoute =====

impl RibRoute {
    // "*" marks the best unicast path and "**" the best multicast path.
    fn next_hops_mut(&mut self, best: &str) -> &mut RibNextHops {
        match best {
            "*" => self
                .best_route
                .get_or_insert_with(Default::default)
                .unicast
                .get_or_insert_with(Default::default),
            "**" => self
                .best_route
                .get_or_insert_with(Default::default)
                .multicast
                .get_or_insert_with(Default::default),
            _ => self.routes.get_or_insert_with(Default::default),
        }
    }
}

// ===== impl RibPath =====

impl RibPath {
    // Reads the fields of a "via" line following the next hop:
    // [interface,] [pref/metric], uptime, protocol[-id], attributes.
    fn parse(caps: &Captures<'_>) -> Option<(String, RibPath)> {
        let mut path = RibPath {
            route_table: caps.name("table").map(|m| m.as_str().to_owned()),
            ..Default::default()
        };
        let mut fields = caps["rest"].split(',').map(str::trim);

        let mut field = fields.next()?;
        if !REGEX_PREFERENCE.is_match(field) {
            path.interface = Some(interface::normalize(field));
            field = fields.next()?;
        }
        let preference = REGEX_PREFERENCE.captures(field)?;
        path.preference = preference["preference"].to_owned();
        path.metric = preference["metric"].to_owned();
        path.uptime = fields.next()?.to_owned();

        let field = path.strip_flags(fields.next()?);
        let protocol = REGEX_PROTOCOL.captures(&field)?;
        path.protocol_id = protocol.name("id").map(|m| m.as_str().to_owned());
        let name = protocol["protocol"].to_owned();

        for field in fields {
            let field = path.strip_flags(field);
            if field.is_empty() {
                continue;
            }
            if let Some(caps) = REGEX_TAG.captures(&field) {
                path.tag = Some(caps["tag"].to_owned());
            } else if let Some(caps) = REGEX_SEGID.captures(&field) {
                path.segid = Some(number(&caps["segid"]));
                path.tunnelid =
                    caps.name("tunnelid").map(|m| m.as_str().to_owned());
                path.encap =
                    caps.name("encap").map(|m| m.as_str().to_lowercase());
            } else if path.attribute.is_none() {
                path.attribute = Some(field);
            } else {
                parser::ignore(&field);
            }
        }

        Some((name, path))
    }

    // Records the parenthesized flags of a field and returns what's left.
    fn strip_flags(&mut self, field: &str) -> String {
        for caps in REGEX_FLAG.captures_iter(field) {
            match &caps["flag"] {
                "mpls" => self.mpls = Some(true),
                "mpls-vpn" => self.mpls_vpn = Some(true),
                "evpn" => self.evpn = Some(true),
                // Hidden paths are listed as non-best paths.
                _ => (),
            }
        }
        REGEX_FLAG.replace_all(field, "").trim().to_owned()
    }
}

// ===== impl RoutingArgs =====

impl Arguments for RoutingArgs {
    fn from_params(params: &Params) -> Result<RoutingArgs, Error> {
        Ok(RoutingArgs {
            ip: params.get_owned("ip"),
            vrf: params.get_owned("vrf"),
        })
    }

    fn to_params(&self) -> Params {
        [("ip", &self.ip), ("vrf", &self.vrf)]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect()
    }
}

// ===== impl ShowRoutingVrfAll =====

impl Parser for ShowRoutingVrfAll {
    type Args = RoutingArgs;
    type Output = Rib;

    const COMMANDS: &'static [&'static str] = &[
        "show routing vrf all",
        "show routing {ip}",
        "show routing vrf {vrf}",
        "show routing {ip} vrf {vrf}",
    ];

    fn cli(output: &str, args: &RoutingArgs) -> Rib {
        Rib::parse_output(output, args.vrf.as_deref(), RibFamily::Ipv4)
    }
}

// ===== impl ShowRoutingIpv6VrfAll =====

impl Parser for ShowRoutingIpv6VrfAll {
    type Args = RoutingArgs;
    type Output = Rib;

    const COMMANDS: &'static [&'static str] =
        &["show routing ipv6 vrf all", "show routing ipv6 vrf {vrf}"];

    fn cli(output: &str, args: &RoutingArgs) -> Rib {
        Rib::parse_output(output, args.vrf.as_deref(), RibFamily::Ipv6)
    }
}

// ===== impl ShowRouting =====

impl Parser for ShowRouting {
    type Args = ();
    type Output = Rib;

    const COMMANDS: &'static [&'static str] = &["show routing"];

    fn cli(output: &str, _args: &()) -> Rib {
        Rib::parse_output(output, None, RibFamily::Ipv4)
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    // The last BGP path of each kind sets the distance of its family.
    #[test]
    fn bgp_distances() {
        let output = "\
            10.1.0.0/16, ubest/mbest: 1/0
                *via 10.0.0.1, [20/0], 1d02h, bgp-65000, external, tag 65001
                via 10.0.0.2, [200/0], 1d02h, bgp-65000, internal, tag 65000 (hidden)
            10.2.0.0/16, ubest/mbest: 1/0
                *via Null0, [220/0], 1d02h, bgp-65000, discard, tag 65000
                *via 10.0.0.3, Eth1/1, [110/41], 1d02h, ospf-1, intra
        ";
        let rib = Rib::parse_output(output, None, RibFamily::Ipv4);
        let af = &rib.vrf["default"].address_family["ipv4 unicast"];
        assert_eq!(af.bgp_distance_extern_as, Some(20));
        assert_eq!(af.bgp_distance_internal_as, Some(200));
        assert_eq!(af.bgp_distance_local, Some(220));

        let route = &af.ip["10.1.0.0/16"];
        let hidden = &route.routes.as_ref().unwrap().nexthop["10.0.0.2"];
        assert_eq!(hidden.protocol["bgp"].tag.as_deref(), Some("65000"));
        let best = af.ip["10.2.0.0/16"].best_route.as_ref().unwrap();
        let path = &best.unicast.as_ref().unwrap().nexthop["10.0.0.3"];
        assert_eq!(
            path.protocol["ospf"].interface.as_deref(),
            Some("Ethernet1/1")
        );
    }

    // A requested VRF names the routes until a table header says otherwise,
    // and table headers alone don't create VRFs.
    #[test]
    fn vrf_selection() {
        let output = "\
            10.9.0.0/16, ubest/mbest: 1/0
                *via 10.0.0.9, [1/0], 00:10:00, static
            IPv6 Routing Table for VRF \"management\"
        ";
        let rib = Rib::parse_output(output, Some("blue"), RibFamily::Ipv6);
        assert_eq!(rib.vrf.keys().collect::<Vec<_>>(), ["blue"]);
        let af = &rib.vrf["blue"].address_family;
        assert!(af.contains_key("vpnv6 unicast"));

        let rib = Rib::parse_output(output, Some("all"), RibFamily::Ipv4);
        let af = &rib.vrf["default"].address_family;
        assert!(af.contains_key("ipv4 unicast"));
    }

    #[test]
    fn vxlan_path() {
        let output = "\
            10.189.1.0/24, ubest/mbest: 1/0 time
                *via 10.55.130.3%default, [33/0], 3d10h, bgp-1, internal, tag 1 (evpn), segid: 50051 tunnelid: 0x64008203 encap: VXLAN
        ";
        let rib = Rib::parse_output(output, Some("VRF1"), RibFamily::Ipv4);
        let route = &rib.vrf["VRF1"].address_family["vpnv4 unicast"].ip
            ["10.189.1.0/24"];
        let best = route.best_route.as_ref().unwrap();
        let hop = &best.unicast.as_ref().unwrap().nexthop["10.55.130.3"];
        let path = &hop.protocol["bgp"];
        assert_eq!(path.route_table.as_deref(), Some("default"));
        assert_eq!(path.evpn, Some(true));
        assert_eq!(path.segid, Some(50051));
        assert_eq!(path.encap.as_deref(), Some("vxlan"));
        assert_eq!(path.attribute.as_deref(), Some("internal"));
        assert_eq!(path.tag.as_deref(), Some("1"));
    }
}
