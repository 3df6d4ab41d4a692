//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock as Lazy;

use netscrape_utils::error::SchemaError;
use netscrape_utils::parser::{self, Arguments, Parser};
use netscrape_utils::{Error, Params, Schema};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

// Access lists, keyed by name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AccessLists(pub BTreeMap<String, Acl>);

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Acl {
    pub name: String,
    #[serde(rename = "type")]
    pub acl_type: AclType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_user: Option<bool>,
    // Entries keyed by sequence number.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aces: BTreeMap<String, Ace>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AclType {
    Ipv4AclType,
    Ipv6AclType,
    EthAclType,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Ace {
    pub name: String,
    pub matches: Matches,
    pub actions: Actions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Matches {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<L2>,
    // Layer 3 and 4 matches, keyed by protocol.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub l3: BTreeMap<String, L3>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub l4: BTreeMap<String, L4>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct L2 {
    pub eth: Eth,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Eth {
    pub destination_mac_address: String,
    pub source_mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ether_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cos: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsap: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct L3 {
    pub protocol: String,
    pub source_network: BTreeMap<String, SourceNetwork>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub destination_network: BTreeMap<String, DestinationNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dscp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence_code: Option<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourceNetwork {
    pub source_network: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DestinationNetwork {
    pub destination_network: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct L4 {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_name: Option<String>,
    pub established: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<PortMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<PortMatch>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortMatch {
    Operator { operator: String, port: Port },
    Range { lower_port: Port, upper_port: Port },
}

// Port number, or the name as written when it isn't a well-known port name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Port {
    Number(u16),
    Name(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Actions {
    pub forwarding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Logging {
    LogSyslog,
    LogNone,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Statistics {
    pub matched_packets: u64,
}

// Optional ACL name filter.
#[derive(Clone, Debug, Default)]
pub struct AclArgs {
    pub acl: Option<String>,
}

// "show access-lists"
#[derive(Debug)]
pub struct ShowAccessLists;

// "show ip access-lists"
#[derive(Debug)]
pub struct ShowIpAccessLists;

// "show ipv6 access-list"
#[derive(Debug)]
pub struct ShowIpv6AccessList;

// ===== lookup tables =====

// IP option names.
static IP_OPTIONS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("add-ext", 147),
        ("com-security", 134),
        ("dps", 151),
        ("encode", 15),
        ("eool", 0),
        ("ext-ip", 145),
        ("ext-security", 133),
        ("finn", 205),
        ("imitd", 144),
        ("lsr", 131),
        ("mtup", 11),
        ("mtur", 12),
        ("no-op", 1),
        ("nsapa", 150),
        ("record-route", 7),
        ("router-alert", 148),
        ("sdb", 149),
        ("security", 130),
        ("ssr", 137),
        ("stream-id", 136),
        ("timestamp", 68),
        ("traceroute", 82),
        ("ump", 152),
        ("visa", 142),
        ("zsu", 10),
    ]
    .into_iter()
    .collect()
});

// ToS precedence names, indexed by precedence code.
static PRECEDENCE_NAMES: [&str; 8] = [
    "routine",
    "priority",
    "immediate",
    "flash",
    "flash-override",
    "critical",
    "internet",
    "network",
];

// Well-known TCP and UDP port names.
//
// The UDP block repeats several names already listed in the TCP block. The
// table is built in order, so the later definition wins.
static PORT_NAMES_TABLE: &[(&str, u16)] = &[
    // TCP
    ("bgp", 179),
    ("chargen", 19),
    ("cmd", 514),
    ("daytime", 13),
    ("discard", 9),
    ("domain", 53),
    ("echo", 7),
    ("exec", 512),
    ("finger", 79),
    ("ftp", 21),
    ("ftp-data", 20),
    ("gopher", 70),
    ("hostname", 101),
    ("ident", 113),
    ("irc", 194),
    ("klogin", 543),
    ("kshell", 544),
    ("login", 513),
    ("lpd", 515),
    ("msrpc", 135),
    ("nntp", 119),
    ("onep-plain", 15001),
    ("onep-tls", 15002),
    ("pim-auto-rp", 496),
    ("pop2", 109),
    ("pop3", 110),
    ("smtp", 25),
    ("sunrpc", 111),
    ("syslog", 514),
    ("tacacs", 49),
    ("talk", 517),
    ("telnet", 23),
    ("time", 37),
    ("uucp", 540),
    ("whois", 43),
    ("www", 80),
    // UDP
    ("biff", 512),
    ("bootpc", 68),
    ("bootps", 67),
    ("discard", 9),
    ("dnsix", 195),
    ("domain", 53),
    ("echo", 7),
    ("isakmp", 500),
    ("mobile-ip", 434),
    ("nameserver", 42),
    ("netbios-dgm", 138),
    ("netbios-ns", 137),
    ("netbios-ss", 139),
    ("non500-isakmp", 4500),
    ("ntp", 123),
    ("pim-auto-rp", 496),
    ("rip", 520),
    ("ripv6", 21),
    ("snmp", 161),
    ("snmptrap", 162),
    ("sunrpc", 111),
    ("syslog", 514),
    ("tacacs", 49),
    ("talk", 517),
    ("tftp", 69),
    ("time", 37),
    ("who", 513),
    ("xdmcp", 177),
];

static PORT_NAMES: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| PORT_NAMES_TABLE.iter().copied().collect());

// Keywords that may follow the destination port list.
const TRAILING_KEYWORDS: &[&str] = &[
    "log",
    "log-input",
    "established",
    "precedence",
    "dscp",
    "ttl",
    "option",
    "options",
    "fragments",
    "time-range",
];

// ===== regular expressions =====

// Extended IP access list acl_name
// Standard IP access list 1
static REGEX_HDR_IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:Extended|Standard) +IP +access +lists? +(?P<name>[\w.#-]+)(?: *\((?P<per_user>.*)\))?$",
    )
    .unwrap()
});

// ip access-list extended mylist2
static REGEX_HDR_IP_CFG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^ip +access-list +extended +(?P<name>[\w.#-]+)(?: *\((?P<per_user>.*)\))?$",
    )
    .unwrap()
});

// IPv6 access list preauth_v6 (per-user)
static REGEX_HDR_IPV6: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^IPv6 +access +list +(?P<name>[\w.#-]+)(?: *\((?P<per_user>.*)\))?.*$",
    )
    .unwrap()
});

// Extended MAC access list mac_acl
static REGEX_HDR_MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Extended +MAC +access +list +(?P<name>[\w.-]+)(?: *\((?P<per_user>.*)\))?$",
    )
    .unwrap()
});

// 10 permit 10.2.0.0, wildcard bits 0.0.255.255
// permit 172.20.10.10
// 30 deny   any
static REGEX_ACE_STANDARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<seq>\d+) +)?(?P<action>permit|deny) +(?P<src>[\w.]+)(?:, +wildcard +bits +(?P<wildcard>[\w.]+))?$",
    )
    .unwrap()
});

// 20 permit tcp host 10.16.2.2 eq www telnet 443 any precedence network ttl eq 255
// 40 permit tcp any range ftp-data bgp any
// 10 permit ip any any (10031 matches)
static REGEX_ACE_IPV4: Lazy<Regex> = Lazy::new(|| {
    let addr = r"(?:any|host|\d+\.\d+\.\d+\.\d+)(?: +\d+\.\d+\.\d+\.\d+)?";
    Regex::new(&format!(
        r"^(?P<seq>\d+) +(?P<action>permit|deny) +(?P<protocol>\w+) +(?P<src>{addr})(?: +(?P<src_operator>eq|gt|lt|neq|range) +(?P<src_port>[\S ]+\S))? +(?P<dst>{addr})(?: +(?P<dst_operator>eq|gt|lt|neq|range) +(?P<dst_port>(?:\S ?)+\S))?(?P<left>.+)?$"
    ))
    .unwrap()
});

// permit tcp host 2001:DB8:1::32 eq bgp host 2001:DB8:2::32 eq 11000 sequence 1
// permit esp any any dscp cs7 log sequence 20
static REGEX_ACE_IPV6: Lazy<Regex> = Lazy::new(|| {
    let ip = r"\w*(?::\w*){2,7}";
    let addr = format!(r"any|{ip}/\d+|(?:host|{ip}) {ip}");
    Regex::new(&format!(
        r"^(?P<action>permit|deny) +(?P<protocol>ahp|esp|hbh|icmp|ipv6|pcp|sctp|tcp|udp) +(?P<src>{addr})(?: +(?P<src_operator>eq|gt|lt|neq|range) +(?P<src_port>[\S ]+\S))? +(?P<dst>{addr})(?: +(?P<dst_operator>eq|gt|lt|neq|range) +(?P<dst_port>(?:[\w-]+ ?)+[\w-]+))?(?P<left>.+)? +sequence +(?P<seq>\d+)$"
    ))
    .unwrap()
});

// permit host aaaa.aaaa.aaaa host bbbb.bbbb.bbbb aarp
// deny   any any vlan 10
static REGEX_ACE_MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<action>deny|permit) +(?P<src>(?:host *)?[\w.]+) +(?P<dst>(?:host *)?[\w.]+)(?: *(?P<left>.*))?$",
    )
    .unwrap()
});

static REGEX_MATCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+) +matches\)").unwrap());
static REGEX_DSCP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dscp +(\w+)").unwrap());
static REGEX_TTL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ttl +(\w+) +(\d+)").unwrap());
static REGEX_PRECEDENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"precedence +([\w-]+)").unwrap());
static REGEX_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"options? +([\w-]+)").unwrap());
static REGEX_ICMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+) +(\d+)").unwrap());
static REGEX_COS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cos +(\d+)").unwrap());
static REGEX_VLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vlan +(\d+)").unwrap());
static REGEX_PROTOCOL_FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"protocol-family +(\w+)").unwrap());
static REGEX_LSAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"lsap +(\w+ +\w+)").unwrap());

// ===== impl AccessLists =====

impl AccessLists {
    // Extracts the access lists from the output of any of the "show
    // access-lists" variants.
    pub fn parse_output(output: &str) -> AccessLists {
        let mut acls = AccessLists::default();
        let mut current: Option<String> = None;

        for line in parser::lines(output) {
            if let Some((caps, acl_type)) = header(line) {
                let name = caps["name"].to_owned();
                let acl = acls.0.entry(name.clone()).or_insert_with(|| Acl {
                    name: name.clone(),
                    acl_type,
                    per_user: None,
                    aces: Default::default(),
                });
                acl.acl_type = acl_type;
                if caps.name("per_user").is_some() {
                    acl.per_user = Some(true);
                }
                current = Some(name);
                continue;
            }

            // Entries are only meaningful under an access list header.
            let Some(acl) = current.as_ref().and_then(|name| acls.0.get_mut(name))
            else {
                parser::ignore(line);
                continue;
            };

            if let Some(caps) = REGEX_ACE_STANDARD.captures(line) {
                acl.add_standard_ace(&caps);
            } else if let Some(caps) = REGEX_ACE_IPV4
                .captures(line)
                .or_else(|| REGEX_ACE_IPV6.captures(line))
            {
                acl.add_ip_ace(&caps);
            } else if let Some(caps) = REGEX_ACE_MAC.captures(line) {
                acl.add_mac_ace(&caps);
            } else {
                parser::ignore(line);
            }
        }

        acls
    }
}

impl Schema for AccessLists {
    fn check(&self) -> Result<(), SchemaError> {
        for (name, acl) in &self.0 {
            for (seq, ace) in &acl.aces {
                netscrape_utils::schema::one_of(
                    &ace.actions.forwarding,
                    &["permit", "deny"],
                    &format!("{name}.aces.{seq}.actions.forwarding"),
                )?;
            }
        }
        Ok(())
    }
}

// ===== impl Acl =====

impl Acl {
    // Sequence number for an entry that doesn't carry one: ten more than the
    // highest number in use, compared as integers.
    pub fn next_sequence(&self) -> u32 {
        self.aces
            .keys()
            .filter_map(|seq| seq.parse::<u32>().ok())
            .max()
            .map_or(10, |max| max + 10)
    }

    fn insert_ace(
        &mut self,
        seq: String,
        matches: Matches,
        actions: Actions,
        statistics: Option<Statistics>,
    ) {
        let ace = Ace {
            name: seq.clone(),
            matches,
            actions,
            statistics,
        };
        self.aces.insert(seq, ace);
    }

    fn add_standard_ace(&mut self, caps: &Captures<'_>) {
        let seq = match caps.name("seq") {
            Some(seq) => seq.as_str().to_owned(),
            None => self.next_sequence().to_string(),
        };

        let src = &caps["src"];
        let network = match caps.name("wildcard") {
            Some(wildcard) => format!("{} {}", src, wildcard.as_str()),
            None if src == "any" => src.to_owned(),
            None => format!("{src} 0.0.0.0"),
        };

        let protocol = "ipv4".to_owned();
        let l3 = L3 {
            protocol: protocol.clone(),
            source_network: source_network(network),
            ..Default::default()
        };
        let matches = Matches {
            l3: [(protocol, l3)].into(),
            ..Default::default()
        };
        let actions = Actions {
            forwarding: caps["action"].to_owned(),
            logging: None,
        };
        self.insert_ace(seq, matches, actions, None);
    }

    fn add_ip_ace(&mut self, caps: &Captures<'_>) {
        let seq = caps["seq"].to_owned();
        let protocol = match &caps["protocol"] {
            "ip" => "ipv4".to_owned(),
            protocol => protocol.to_owned(),
        };
        let src = caps["src"].trim().to_owned();
        let dst = caps["dst"].trim().to_owned();

        // Split the destination ports from any trailing clauses that the
        // port list swallowed.
        let mut left = caps.name("left").map_or("", |m| m.as_str()).to_owned();
        let dst_ports = caps.name("dst_port").map(|dst_port| {
            let tokens = dst_port.as_str().split_whitespace().collect::<Vec<_>>();
            let count = tokens
                .iter()
                .position(|token| {
                    TRAILING_KEYWORDS.contains(token) || token.starts_with('(')
                })
                .unwrap_or(tokens.len());
            left = format!("{} {}", tokens[count..].join(" "), left);
            tokens[..count]
                .iter()
                .map(|token| token.to_string())
                .collect::<Vec<_>>()
        });

        // Actions and statistics.
        let actions = Actions {
            forwarding: caps["action"].to_owned(),
            logging: Some(match left.contains("log") {
                true => Logging::LogSyslog,
                false => Logging::LogNone,
            }),
        };
        let statistics = REGEX_MATCHES.captures(&left).and_then(|m| {
            m[1].parse()
                .ok()
                .map(|matched_packets| Statistics { matched_packets })
        });

        // Layer 3.
        let mut l3 = L3 {
            protocol: protocol.clone(),
            source_network: source_network(src),
            destination_network: [(
                dst.clone(),
                DestinationNetwork {
                    destination_network: dst,
                },
            )]
            .into(),
            ..Default::default()
        };
        if let Some(m) = REGEX_DSCP.captures(&left) {
            l3.dscp = Some(m[1].to_owned());
        }
        if let Some(m) = REGEX_TTL.captures(&left) {
            l3.ttl_operator = Some(m[1].to_owned());
            l3.ttl = m[2].parse().ok();
        }
        if let Some(m) = REGEX_PRECEDENCE.captures(&left) {
            let precedence = &m[1];
            match precedence.parse::<u8>() {
                Ok(code) => {
                    l3.precedence_code = Some(code);
                    l3.precedence = PRECEDENCE_NAMES
                        .get(code as usize)
                        .map(|name| name.to_string());
                }
                Err(_) => l3.precedence = Some(precedence.to_owned()),
            }
        }

        // Layer 4.
        let mut l4 = L4 {
            established: left.contains("established"),
            ..Default::default()
        };
        if let Some(m) = REGEX_OPTION.captures(&left) {
            let option = &m[1];
            match option.parse::<u8>() {
                Ok(value) => l4.options = Some(value),
                Err(_) => {
                    l4.options = IP_OPTIONS.get(option).copied();
                    if l4.options.is_none() {
                        debug!(%option, "unknown IP option name");
                    }
                    l4.options_name = Some(option.to_owned());
                }
            }
        }
        if let (Some(operator), Some(ports)) =
            (caps.name("src_operator"), caps.name("src_port"))
        {
            l4.source_port = source_port(operator.as_str(), ports.as_str());
        }
        if let (Some(operator), Some(ports)) =
            (caps.name("dst_operator"), dst_ports)
        {
            l4.destination_port = destination_port(operator.as_str(), &ports);
        }
        if protocol == "icmp" {
            if let Some(m) = REGEX_ICMP.captures(left.trim()) {
                l4.icmp_type = m[1].parse().ok();
                l4.code = m[2].parse().ok();
            }
        }

        let matches = Matches {
            l2: None,
            l3: [(protocol.clone(), l3)].into(),
            l4: [(protocol, l4)].into(),
        };
        self.insert_ace(seq, matches, actions, statistics);
    }

    fn add_mac_ace(&mut self, caps: &Captures<'_>) {
        let seq = self.next_sequence().to_string();
        let mut left = caps.name("left").map_or("", |m| m.as_str()).to_owned();

        let actions = Actions {
            forwarding: caps["action"].to_owned(),
            logging: Some(match left.contains("log") {
                true => Logging::LogSyslog,
                false => Logging::LogNone,
            }),
        };

        // Each recognized clause is removed from the remaining text, whatever
        // is left over is the ether type.
        let mut eth = Eth {
            destination_mac_address: caps["dst"].trim().to_owned(),
            source_mac_address: caps["src"].trim().to_owned(),
            ..Default::default()
        };
        eth.cos = take_clause(&REGEX_COS, &mut left)
            .and_then(|cos| cos.parse().ok());
        eth.vlan = take_clause(&REGEX_VLAN, &mut left)
            .and_then(|vlan| vlan.parse().ok());
        eth.protocol_family = take_clause(&REGEX_PROTOCOL_FAMILY, &mut left);
        eth.lsap = take_clause(&REGEX_LSAP, &mut left);
        let left = left.trim();
        if !left.is_empty() {
            eth.ether_type = Some(left.to_owned());
        }

        let matches = Matches {
            l2: Some(L2 { eth }),
            ..Default::default()
        };
        self.insert_ace(seq, matches, actions, None);
    }
}

// ===== impl Port =====

impl Port {
    // Resolves a port number or well-known port name.
    pub fn lookup(port: &str) -> Port {
        if let Ok(number) = port.parse() {
            return Port::Number(number);
        }
        match PORT_NAMES.get(port) {
            Some(number) => Port::Number(*number),
            None => {
                debug!(%port, "unknown port name");
                Port::Name(port.to_owned())
            }
        }
    }
}

// ===== impl AclArgs =====

impl Arguments for AclArgs {
    fn from_params(params: &Params) -> Result<AclArgs, Error> {
        Ok(AclArgs {
            acl: params.get_owned("acl"),
        })
    }

    fn to_params(&self) -> Params {
        self.acl.iter().map(|acl| ("acl", acl.as_str())).collect()
    }
}

// ===== impl ShowAccessLists =====

impl Parser for ShowAccessLists {
    type Args = AclArgs;
    type Output = AccessLists;

    const COMMANDS: &'static [&'static str] =
        &["show access-lists", "show access-lists {acl}"];

    fn cli(output: &str, _args: &AclArgs) -> AccessLists {
        AccessLists::parse_output(output)
    }
}

// ===== impl ShowIpAccessLists =====

impl Parser for ShowIpAccessLists {
    type Args = AclArgs;
    type Output = AccessLists;

    const COMMANDS: &'static [&'static str] =
        &["show ip access-lists", "show ip access-lists {acl}"];

    fn cli(output: &str, _args: &AclArgs) -> AccessLists {
        AccessLists::parse_output(output)
    }
}

// ===== impl ShowIpv6AccessList =====

impl Parser for ShowIpv6AccessList {
    type Args = AclArgs;
    type Output = AccessLists;

    const COMMANDS: &'static [&'static str] =
        &["show ipv6 access-list", "show ipv6 access-list {acl}"];

    fn cli(output: &str, _args: &AclArgs) -> AccessLists {
        AccessLists::parse_output(output)
    }
}

// ===== helper functions =====

fn header(line: &str) -> Option<(Captures<'_>, AclType)> {
    if let Some(caps) = REGEX_HDR_IP
        .captures(line)
        .or_else(|| REGEX_HDR_IP_CFG.captures(line))
    {
        return Some((caps, AclType::Ipv4AclType));
    }
    if let Some(caps) = REGEX_HDR_IPV6.captures(line) {
        return Some((caps, AclType::Ipv6AclType));
    }
    REGEX_HDR_MAC
        .captures(line)
        .map(|caps| (caps, AclType::EthAclType))
}

fn source_network(network: String) -> BTreeMap<String, SourceNetwork> {
    [(
        network.clone(),
        SourceNetwork {
            source_network: network,
        },
    )]
    .into()
}

fn source_port(operator: &str, ports: &str) -> Option<PortMatch> {
    if operator != "range" {
        return Some(PortMatch::Operator {
            operator: operator.to_owned(),
            port: Port::Name(ports.to_owned()),
        });
    }

    let mut ports = ports.split_whitespace();
    let lower_port = Port::lookup(ports.next()?);
    let upper_port = Port::lookup(ports.next()?);
    Some(PortMatch::Range {
        lower_port,
        upper_port,
    })
}

fn destination_port(operator: &str, ports: &[String]) -> Option<PortMatch> {
    match ports {
        [] => None,
        [port] => Some(PortMatch::Operator {
            operator: operator.to_owned(),
            port: Port::lookup(port),
        }),
        [lower, upper, ..] => Some(PortMatch::Range {
            lower_port: Port::lookup(lower),
            upper_port: Port::lookup(upper),
        }),
    }
}

// Extracts the first capture group of `regex` and removes the whole match
// from `text`.
fn take_clause(regex: &Regex, text: &mut String) -> Option<String> {
    let value = regex.captures(text).map(|caps| caps[1].to_owned())?;
    *text = regex.replace(text, "").into_owned();
    Some(value)
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_lookup() {
        assert_eq!(Port::lookup("443"), Port::Number(443));
        assert_eq!(Port::lookup("www"), Port::Number(80));
        assert_eq!(Port::lookup("ftp-data"), Port::Number(20));
        assert_eq!(Port::lookup("8o8o"), Port::Name("8o8o".to_owned()));
    }

    // Several port names are defined twice; the later definition wins.
    #[test]
    fn port_table_duplicates() {
        let mut seen = HashMap::new();
        let mut duplicates = Vec::new();
        for (name, port) in PORT_NAMES_TABLE {
            if seen.insert(*name, *port).is_some() {
                duplicates.push(*name);
            }
        }
        assert_eq!(
            duplicates,
            [
                "discard",
                "domain",
                "echo",
                "pim-auto-rp",
                "sunrpc",
                "syslog",
                "tacacs",
                "talk",
                "time"
            ]
        );
        for name in duplicates {
            assert_eq!(PORT_NAMES.get(name), seen.get(name));
        }
    }

    #[test]
    fn precedence_names() {
        assert_eq!(PRECEDENCE_NAMES[5], "critical");
        assert_eq!(PRECEDENCE_NAMES[7], "network");
    }

    #[test]
    fn ip_option_names() {
        assert_eq!(IP_OPTIONS.get("record-route"), Some(&7));
        assert_eq!(IP_OPTIONS.get("any-options"), None);
    }

    #[test]
    fn clause_removal() {
        let mut text = " vlan 10 cos 4 aarp".to_owned();
        assert_eq!(take_clause(&REGEX_COS, &mut text).as_deref(), Some("4"));
        assert_eq!(take_clause(&REGEX_VLAN, &mut text).as_deref(), Some("10"));
        assert_eq!(take_clause(&REGEX_LSAP, &mut text), None);
        assert_eq!(text.trim(), "aarp");
    }
}
