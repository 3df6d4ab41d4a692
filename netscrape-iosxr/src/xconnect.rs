//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::LazyLock as Lazy;

use netscrape_utils::error::SchemaError;
use netscrape_utils::parser::{self, Parser, key, number};
use netscrape_utils::schema::require;
use netscrape_utils::{Schema, interface};
use regex::{Captures, Regex};
use serde::Serialize;

//
// Cross-connect table.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Xconnects {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, XconnectGroup>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct XconnectGroup {
    pub name: BTreeMap<String, Xconnect>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Xconnect {
    pub status: String,
    pub segment1: BTreeMap<String, Segment1>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Segment1 {
    pub status: String,
    pub segment2: BTreeMap<String, Segment2>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Segment2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// "show l2vpn xconnect"
#[derive(Debug)]
pub struct ShowL2vpnXconnect;

//
// Brief counters.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct XconnectBrief {
    // Sections ("locally_switching", "atom").
    #[serde(flatten)]
    pub sections: BTreeMap<String, BriefSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<BriefCounters>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BriefSection {
    // Categories ("like_to_like"), each with per-type rows and its total.
    #[serde(flatten)]
    pub categories: BTreeMap<String, BTreeMap<String, BriefCounters>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<BriefCounters>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BriefCounters {
    pub up: u32,
    pub down: u32,
    pub unr: u32,
}

// "show l2vpn xconnect brief"
#[derive(Debug)]
pub struct ShowL2vpnXconnectBrief;

//
// Summary counters.
//

// Counter blocks ("number_of_xconnects", "backup_pw", ...) keyed by name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct XconnectSummary(pub BTreeMap<String, BTreeMap<String, u32>>);

// "show l2vpn xconnect summary"
#[derive(Debug)]
pub struct ShowL2vpnXconnectSummary;

//
// Detail.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct XconnectDetail {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub group: BTreeMap<String, DetailGroup>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailGroup {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mp2mp: BTreeMap<String, Mp2mp>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub xc: BTreeMap<String, XconnectInstance>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Mp2mp {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_encapsulation: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub auto_discovery: BTreeMap<String, AutoDiscovery>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub import_route_targets: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub export_route_targets: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub signaling_protocol: BTreeMap<String, Signaling>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AutoDiscovery {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_distinguisher: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Signaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ce_range: Option<u32>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct XconnectInstance {
    pub state: String,
    pub interworking: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ce_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ce_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_state: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub monitor_session: BTreeMap<String, MonitorSession>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ac: BTreeMap<String, AttachmentCircuit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<Neighbors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_pw: Option<Neighbors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evpn: Option<Neighbors>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MonitorSession {
    pub state: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AttachmentCircuit {
    pub state: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ac_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ranges: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_ranges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interworking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msti: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Neighbors {
    pub neighbor: BTreeMap<String, NeighborIds>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NeighborIds {
    pub id: BTreeMap<String, Pseudowire>,
}

// Pseudowire or EVPN segment.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Pseudowire {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encapsulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encap_type: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pw_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interworking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_disable_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsp: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mpls: BTreeMap<String, LocalRemote>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub evpn: BTreeMap<String, LocalRemote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_time_status_changed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

// Row of an MPLS or EVPN label table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LocalRemote {
    pub local: String,
    pub remote: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub local_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remote_type: Vec<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Statistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_totals: Option<Totals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_totals: Option<Totals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drops: Option<Drops>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Totals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send: Option<u64>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Drops {
    pub illegal_vlan: u64,
    pub illegal_length: u64,
}

// "show l2vpn xconnect detail"
#[derive(Debug)]
pub struct ShowL2vpnXconnectDetail;

// "show l2vpn xconnect mp2mp detail"
#[derive(Debug)]
pub struct ShowL2vpnXconnectMp2mpDetail;

// Keys of a segment 2 whose status is on the next line.
#[derive(Debug)]
struct Segment2Key {
    group: String,
    name: String,
    segment1: String,
    segment2: String,
}

// Line-driven state of the detail parser.
#[derive(Debug, Default)]
struct DetailParser {
    record: XconnectDetail,
    owner: Owner,
    block: Block,
    table: Option<LabelTable>,
    // Pseudowires that follow "Backup PW:" are backups.
    backup: bool,
    route_targets: Option<RouteTargets>,
    discovery: Option<String>,
    signaling: Option<String>,
}

// Object that group-level lines apply to.
#[derive(Debug, Default)]
enum Owner {
    #[default]
    None,
    Xconnect(String, String),
    Mp2mp(String, String),
}

// Segment that indented lines apply to.
#[derive(Debug, Default)]
enum Block {
    #[default]
    None,
    Ac(String),
    Pw(PwKind, String, String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PwKind {
    Primary,
    Backup,
    Evpn,
}

// MPLS or EVPN label table of a pseudowire, framed by two separators.
#[derive(Debug)]
pub(crate) struct LabelTable {
    pub(crate) kind: TableKind,
    // Set once the separator below the header was seen.
    body: bool,
    // Set once the closing separator was seen.
    closed: bool,
    // Column dividing local from remote continuation values.
    threshold: Option<usize>,
    last_row: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TableKind {
    Mpls,
    Evpn,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RouteTargets {
    Import,
    Export,
}

// ===== regular expressions =====

const STATUS: &str = "UP|DN|AD|UR|SB|SR";

static REGEX_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+(?: +-+)*$").unwrap());
static REGEX_XC_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:(?P<name>\S+) +)?(?P<status>{STATUS}) +(?P<seg1>\S+) +(?P<seg1_status>{STATUS}) +(?P<seg2>.+?)(?: +(?P<seg2_status>{STATUS}))?$"
    ))
    .unwrap()
});
static REGEX_XC_STATUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?P<status>{STATUS})$")).unwrap());
static REGEX_XC_GROUP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<group>\S+) +(?P<name>\S+)$").unwrap());
static REGEX_XC_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<word>\S+)$").unwrap());
static REGEX_BRIEF_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>[A-Za-z][A-Za-z ]*)$").unwrap());
static REGEX_BRIEF_CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>\S+) +UP +DOWN +UNR$").unwrap());
static REGEX_BRIEF_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z][\w/ -]*?) +(?P<up>\d+) +(?P<down>\d+) +(?P<unr>\d+)$",
    )
    .unwrap()
});
static REGEX_BRIEF_TOTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Total: (?P<up>\d+) UP, (?P<down>\d+) DOWN, (?P<unr>\d+) UNRESOLVED$",
    )
    .unwrap()
});
static REGEX_SUMMARY_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Number of (?P<name>[\w -]+?): (?P<total>\d+)$").unwrap()
});
static REGEX_SUMMARY_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>[A-Za-z][\w -]*):$").unwrap());
static REGEX_SUMMARY_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<key>[A-Za-z][A-Za-z -]*?) *:? *(?P<value>\d+)").unwrap()
});
static REGEX_DETAIL_XC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Group (?P<group>[^,]+), XC (?P<xc>[^,]+), state is (?P<state>[\w-]+); Interworking (?P<interworking>\S+)",
    )
    .unwrap()
});
static REGEX_DETAIL_MP2MP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Group (?P<group>[^,]+), MP2MP (?P<mp2mp>[^,]+), state: (?P<state>[\w-]+)",
    )
    .unwrap()
});
static REGEX_DETAIL_MONITOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Monitor-Session: (?P<name>[^,]+), state is (?P<state>[\w-]+)")
        .unwrap()
});
static REGEX_DETAIL_CE_IDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Local CE ID: (?P<local>\d+), Remote CE ID: (?P<remote>\d+), Discovery State: (?P<state>[\w-]+)",
    )
    .unwrap()
});
static REGEX_DETAIL_AC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AC: (?P<intf>[^,]+), state is (?P<state>[\w-]+)").unwrap()
});
static REGEX_DETAIL_PW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^PW: neighbor (?P<neighbor>[^,]+), PW ID (?P<id>\d+), state is (?P<state>.+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_EVPN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^EVPN: neighbor (?P<neighbor>[^,]+), PW ID: (?P<id>evi \d+), ac-id (?P<ac_id>\d+), state is (?P<state>.+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_AC_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Type (?P<type>[\w-]+)(?:; Num Ranges: (?P<ranges>\d+))?$")
        .unwrap()
});
static REGEX_DETAIL_REWRITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Rewrite Tags: \[(?P<tags>[^\]]*)\]$").unwrap()
});
static REGEX_DETAIL_VLAN_RANGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^VLAN ranges: \[(?P<ranges>[^\]]*)\]$").unwrap()
});
static REGEX_DETAIL_AC_MTU: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^MTU (?P<mtu>\d+); XC ID (?P<xc_id>\S+); interworking (?P<interworking>[^;]+)(?:; MSTi (?P<msti>\d+))?$",
    )
    .unwrap()
});
static REGEX_DETAIL_PW_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PW class (?P<class>.+?), XC ID (?P<xc_id>\S+)$").unwrap()
});
static REGEX_DETAIL_XC_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^XC ID (?P<xc_id>\S+)$").unwrap());
static REGEX_DETAIL_ENCAPSULATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Encapsulation (?P<encap>[\w-]+)(?:, Auto-discovered \([^)]*\))?(?:, protocol (?P<protocol>[\w-]+))?$",
    )
    .unwrap()
});
static REGEX_DETAIL_SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Source address (?P<address>\S+)$").unwrap());
static REGEX_DETAIL_PW_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^PW type (?P<type>[^,]+), control word (?P<cw>\w+), interworking (?P<interworking>\w+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_ENCAP_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Encap type (?P<type>[^,]+), control word (?P<cw>\w+)$")
        .unwrap()
});
static REGEX_DETAIL_BACKUP_DELAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PW backup disable delay (?P<delay>\d+) sec$").unwrap()
});
static REGEX_DETAIL_SEQUENCING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Sequencing (?P<sequencing>.+)$").unwrap());
static REGEX_DETAIL_LSP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^LSP ?: ?(?P<lsp>\S+)$").unwrap());
static REGEX_DETAIL_TABLE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<kind>MPLS|EVPN) +Local +Remote$").unwrap()
});
static REGEX_DETAIL_TABLE_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<key>Label|Group ID|Interface|MTU|Control word|PW type|EVPN type|VCCV CV type|VCCV CC type|AC ID|CE-ID|PW Status TLV) +(?P<local>\S+(?: \S+)*?) {2,}(?P<remote>\S+(?: \S+)*)$",
    )
    .unwrap()
});
static REGEX_DETAIL_CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([^)]+\)(?: +\([^)]+\))*$").unwrap());
static REGEX_PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]+\)").unwrap());
static REGEX_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());
static REGEX_DETAIL_CREATE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Create time: (?P<time>.+)$").unwrap());
static REGEX_DETAIL_STATUS_CHANGED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Last time status changed: (?P<time>.+)$").unwrap()
});
static REGEX_DETAIL_PACKET_TOTALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>packet|byte) totals: (?P<direction>send|receive) (?P<count>\d+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>packets|bytes): received (?P<received>\d+), sent (?P<sent>\d+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_DROPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^drops: illegal VLAN (?P<vlan>\d+), illegal length (?P<length>\d+)$",
    )
    .unwrap()
});
static REGEX_DETAIL_VPN_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^VPN ID: (?P<id>\d+)$").unwrap());
static REGEX_DETAIL_VPN_MTU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^VPN MTU: (?P<mtu>\d+)$").unwrap());
static REGEX_DETAIL_L2_ENCAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^L2 Encapsulation: (?P<encap>\S+)$").unwrap());
static REGEX_DETAIL_AUTO_DISCOVERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Auto Discovery: (?P<protocol>\w+), state is (?P<state>\w+)(?: \((?P<event>[^)]+)\))?$",
    )
    .unwrap()
});
static REGEX_DETAIL_RD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Route Distinguisher: (?P<rd>.+)$").unwrap());
static REGEX_DETAIL_RT_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<kind>Import|Export) Route Targets:$").unwrap()
});
static REGEX_DETAIL_RT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<rt>\S+:\d+)$").unwrap());
static REGEX_DETAIL_SIGNALING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Signaling protocol: ?(?P<protocol>\w+)$").unwrap()
});
static REGEX_DETAIL_CE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CE Range: ?(?P<range>\d+)$").unwrap());

// ===== impl Xconnects =====

impl Xconnects {
    pub fn parse_output(output: &str) -> Xconnects {
        let mut xconnects = Xconnects::default();
        let mut table = false;
        let mut group: Option<String> = None;
        let mut name: Option<String> = None;
        let mut pending: Option<Segment2Key> = None;

        for line in parser::lines(output) {
            // Separators close the current group.
            if REGEX_SEPARATOR.is_match(line) {
                table = true;
                group = None;
                name = None;
                pending = None;
                continue;
            }
            if !table {
                parser::ignore(line);
                continue;
            }

            if let Some(caps) = REGEX_XC_ROW.captures(line) {
                if let Some(row_name) = caps.name("name") {
                    name = Some(row_name.as_str().to_owned());
                }
                let (Some(group), Some(name)) = (&group, &name) else {
                    parser::ignore(line);
                    continue;
                };
                let key = Segment2Key {
                    group: group.clone(),
                    name: name.clone(),
                    segment1: interface::normalize(&caps["seg1"]),
                    segment2: caps["seg2"].to_owned(),
                };
                let segment2 = xconnects.add_row(&key, &caps);
                pending = segment2.status.is_none().then_some(key);
            } else if let Some(caps) = REGEX_XC_STATUS.captures(line) {
                match pending.take() {
                    Some(key) => {
                        xconnects.segment2_mut(&key).status =
                            Some(caps["status"].to_owned());
                    }
                    None => parser::ignore(line),
                }
            } else if let Some(caps) = REGEX_XC_GROUP_NAME.captures(line) {
                group = Some(caps["group"].to_owned());
                name = Some(caps["name"].to_owned());
            } else if let Some(caps) = REGEX_XC_WORD.captures(line) {
                // Wrapped group and xconnect names.
                let word = caps["word"].to_owned();
                if group.is_none() {
                    group = Some(word);
                } else {
                    name = Some(word);
                }
            } else {
                parser::ignore(line);
            }
        }

        xconnects
    }

    fn add_row(
        &mut self,
        key: &Segment2Key,
        caps: &Captures<'_>,
    ) -> &mut Segment2 {
        let xconnect = self
            .groups
            .entry(key.group.clone())
            .or_default()
            .name
            .entry(key.name.clone())
            .or_default();
        xconnect.status = caps["status"].to_owned();

        let segment1 = xconnect.segment1.entry(key.segment1.clone()).or_default();
        segment1.status = caps["seg1_status"].to_owned();

        let segment2 = segment1.segment2.entry(key.segment2.clone()).or_default();
        segment2.status = caps.name("seg2_status").map(|m| m.as_str().to_owned());
        segment2
    }

    fn segment2_mut(&mut self, key: &Segment2Key) -> &mut Segment2 {
        self.groups
            .entry(key.group.clone())
            .or_default()
            .name
            .entry(key.name.clone())
            .or_default()
            .segment1
            .entry(key.segment1.clone())
            .or_default()
            .segment2
            .entry(key.segment2.clone())
            .or_default()
    }
}

impl Schema for Xconnects {}

// ===== impl ShowL2vpnXconnect =====

impl Parser for ShowL2vpnXconnect {
    type Args = ();
    type Output = Xconnects;

    const COMMANDS: &'static [&'static str] = &["show l2vpn xconnect"];

    fn cli(output: &str, _args: &()) -> Xconnects {
        Xconnects::parse_output(output)
    }
}

// ===== impl XconnectBrief =====

impl XconnectBrief {
    pub fn parse_output(output: &str) -> XconnectBrief {
        let mut brief = XconnectBrief::default();
        let mut section: Option<String> = None;
        let mut category: Option<String> = None;

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_BRIEF_TOTAL.captures(line) {
                brief.total = Some(BriefCounters::new(&caps));
            } else if let Some(caps) = REGEX_BRIEF_CATEGORY.captures(line) {
                category = Some(key(&caps["name"]));
            } else if let Some(caps) = REGEX_BRIEF_ROW.captures(line) {
                let Some(name) = &section else {
                    parser::ignore(line);
                    continue;
                };
                let row = key(&caps["type"]);
                let counters = BriefCounters::new(&caps);
                let section = brief.sections.entry(name.clone()).or_default();
                match category.take() {
                    Some(name) => {
                        section
                            .categories
                            .entry(name.clone())
                            .or_default()
                            .insert(row.clone(), counters);
                        // The category total closes the category.
                        if row != "total" {
                            category = Some(name);
                        }
                    }
                    None if row == "total" => section.total = Some(counters),
                    None => parser::ignore(line),
                }
            } else if let Some(caps) = REGEX_BRIEF_SECTION.captures(line) {
                section = Some(key(&caps["name"]));
                category = None;
            } else {
                parser::ignore(line);
            }
        }

        brief
    }
}

impl Schema for XconnectBrief {}

// ===== impl BriefCounters =====

impl BriefCounters {
    fn new(caps: &Captures<'_>) -> BriefCounters {
        BriefCounters {
            up: number(&caps["up"]),
            down: number(&caps["down"]),
            unr: number(&caps["unr"]),
        }
    }
}

// ===== impl ShowL2vpnXconnectBrief =====

impl Parser for ShowL2vpnXconnectBrief {
    type Args = ();
    type Output = XconnectBrief;

    const COMMANDS: &'static [&'static str] = &["show l2vpn xconnect brief"];

    fn cli(output: &str, _args: &()) -> XconnectBrief {
        XconnectBrief::parse_output(output)
    }
}

// ===== impl XconnectSummary =====

impl XconnectSummary {
    pub fn parse_output(output: &str) -> XconnectSummary {
        let mut summary = XconnectSummary::default();
        let mut block: Option<String> = None;

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_SUMMARY_NUMBER.captures(line) {
                let name = format!("number_of_{}", key(&caps["name"]));
                summary
                    .0
                    .entry(name.clone())
                    .or_default()
                    .insert("total".to_owned(), number(&caps["total"]));
                block = Some(name);
            } else if let Some(caps) = REGEX_SUMMARY_BLOCK.captures(line) {
                let name = key(&caps["name"]);
                summary.0.entry(name.clone()).or_default();
                block = Some(name);
            } else if let Some(name) = &block {
                let counters = summary.0.entry(name.clone()).or_default();
                let mut matched = false;
                for caps in REGEX_SUMMARY_PAIR.captures_iter(line) {
                    counters.insert(key(&caps["key"]), number(&caps["value"]));
                    matched = true;
                }
                if !matched {
                    parser::ignore(line);
                }
            } else {
                parser::ignore(line);
            }
        }

        summary
    }
}

impl Schema for XconnectSummary {
    fn check(&self) -> Result<(), SchemaError> {
        require(&self.0.get("number_of_groups"), "number_of_groups")?;
        require(&self.0.get("number_of_xconnects"), "number_of_xconnects")?;
        Ok(())
    }
}

// ===== impl ShowL2vpnXconnectSummary =====

impl Parser for ShowL2vpnXconnectSummary {
    type Args = ();
    type Output = XconnectSummary;

    const COMMANDS: &'static [&'static str] = &["show l2vpn xconnect summary"];

    fn cli(output: &str, _args: &()) -> XconnectSummary {
        XconnectSummary::parse_output(output)
    }
}

// ===== impl XconnectDetail =====

impl XconnectDetail {
    // Extracts the cross-connects from "show l2vpn xconnect detail" and
    // "show l2vpn xconnect mp2mp detail".
    pub fn parse_output(output: &str) -> XconnectDetail {
        let mut parser = DetailParser::default();
        for raw in output.lines() {
            parser.line(raw);
        }
        parser.record
    }
}

impl Schema for XconnectDetail {}

// ===== impl DetailParser =====

impl DetailParser {
    fn line(&mut self, raw: &str) {
        let line = raw.trim();

        if self.table.is_some() && self.table_line(raw, line) {
            return;
        }

        if let Some(caps) = REGEX_DETAIL_XC.captures(line) {
            let (group, xc) = (caps["group"].to_owned(), caps["xc"].to_owned());
            let instance = self
                .record
                .group
                .entry(group.clone())
                .or_default()
                .xc
                .entry(xc.clone())
                .or_default();
            instance.state = caps["state"].to_owned();
            instance.interworking = caps["interworking"].to_owned();
            self.owner = Owner::Xconnect(group, xc);
            self.block = Block::None;
            self.backup = false;
            self.route_targets = None;
        } else if let Some(caps) = REGEX_DETAIL_MP2MP.captures(line) {
            let (group, mp2mp) =
                (caps["group"].to_owned(), caps["mp2mp"].to_owned());
            self.record
                .group
                .entry(group.clone())
                .or_default()
                .mp2mp
                .entry(mp2mp.clone())
                .or_default()
                .state = caps["state"].to_owned();
            self.owner = Owner::Mp2mp(group, mp2mp);
            self.block = Block::None;
            self.route_targets = None;
            self.discovery = None;
            self.signaling = None;
        } else if self.mp2mp_mut().is_some() {
            self.mp2mp_line(line);
        } else if self.xconnect_mut().is_some() {
            self.xconnect_line(line);
        } else {
            parser::ignore(line);
        }
    }

    // Lines under an MP2MP header.
    fn mp2mp_line(&mut self, line: &str) {
        if let Some(caps) = REGEX_DETAIL_RT_LIST.captures(line) {
            self.route_targets = match &caps["kind"] {
                "Import" => Some(RouteTargets::Import),
                _ => Some(RouteTargets::Export),
            };
            return;
        }
        if let Some(caps) = REGEX_DETAIL_SIGNALING.captures(line) {
            let protocol = caps["protocol"].to_owned();
            if let Some(mp2mp) = self.mp2mp_mut() {
                mp2mp.signaling_protocol.entry(protocol.clone()).or_default();
            }
            self.signaling = Some(protocol);
            self.route_targets = None;
            return;
        }
        if let Some(caps) = REGEX_DETAIL_AUTO_DISCOVERY.captures(line) {
            let protocol = caps["protocol"].to_owned();
            let discovery = AutoDiscovery {
                state: caps["state"].to_owned(),
                event_name: caps.name("event").map(|m| m.as_str().to_owned()),
                route_distinguisher: None,
            };
            if let Some(mp2mp) = self.mp2mp_mut() {
                mp2mp.auto_discovery.insert(protocol.clone(), discovery);
            }
            self.discovery = Some(protocol);
            return;
        }

        let route_targets = self.route_targets;
        let discovery = self.discovery.clone();
        let signaling = self.signaling.clone();
        let Some(mp2mp) = self.mp2mp_mut() else {
            return;
        };
        if let Some(caps) = REGEX_DETAIL_VPN_ID.captures(line) {
            mp2mp.vpn_id = Some(number(&caps["id"]));
        } else if let Some(caps) = REGEX_DETAIL_VPN_MTU.captures(line) {
            mp2mp.vpn_mtu = Some(number(&caps["mtu"]));
        } else if let Some(caps) = REGEX_DETAIL_L2_ENCAP.captures(line) {
            mp2mp.l2_encapsulation = Some(caps["encap"].to_owned());
        } else if let Some(caps) = REGEX_DETAIL_RD.captures(line) {
            let entry = match &discovery {
                Some(protocol) => mp2mp.auto_discovery.get_mut(protocol),
                None => None,
            };
            match entry {
                Some(entry) => {
                    entry.route_distinguisher = Some(caps["rd"].to_owned());
                }
                None => parser::ignore(line),
            }
        } else if let Some(caps) = REGEX_DETAIL_CE_RANGE.captures(line) {
            let entry = match &signaling {
                Some(protocol) => mp2mp.signaling_protocol.get_mut(protocol),
                None => None,
            };
            match entry {
                Some(entry) => entry.ce_range = Some(number(&caps["range"])),
                None => parser::ignore(line),
            }
        } else if let Some(caps) = REGEX_DETAIL_RT.captures(line) {
            match route_targets {
                Some(RouteTargets::Import) => {
                    mp2mp.import_route_targets.push(caps["rt"].to_owned());
                }
                Some(RouteTargets::Export) => {
                    mp2mp.export_route_targets.push(caps["rt"].to_owned());
                }
                None => parser::ignore(line),
            }
        } else {
            parser::ignore(line);
        }
    }

    // Lines under a cross-connect header.
    fn xconnect_line(&mut self, line: &str) {
        if let Some(caps) = REGEX_DETAIL_AC.captures(line) {
            let name = caps["intf"].to_owned();
            if let Some(xc) = self.xconnect_mut() {
                xc.ac.entry(name.clone()).or_default().state =
                    caps["state"].to_owned();
            }
            self.block = Block::Ac(name);
            return;
        }
        if let Some(caps) = REGEX_DETAIL_PW.captures(line) {
            let kind = if self.backup {
                PwKind::Backup
            } else {
                PwKind::Primary
            };
            self.open_pw(kind, &caps, None);
            return;
        }
        if let Some(caps) = REGEX_DETAIL_EVPN.captures(line) {
            let ac_id = number(&caps["ac_id"]);
            self.open_pw(PwKind::Evpn, &caps, Some(ac_id));
            return;
        }
        if line == "Backup PW:" {
            self.block = Block::None;
            self.backup = true;
            return;
        }
        if let Some(table) = LabelTable::open(line) {
            self.table = Some(table);
            return;
        }

        if let Some(caps) = REGEX_DETAIL_MONITOR.captures(line) {
            if let Some(xc) = self.xconnect_mut() {
                xc.monitor_session.insert(
                    caps["name"].to_owned(),
                    MonitorSession {
                        state: caps["state"].to_owned(),
                    },
                );
            }
        } else if let Some(caps) = REGEX_DETAIL_CE_IDS.captures(line) {
            if let Some(xc) = self.xconnect_mut() {
                xc.local_ce_id = Some(number(&caps["local"]));
                xc.remote_ce_id = Some(number(&caps["remote"]));
                xc.discovery_state = Some(caps["state"].to_owned());
            }
        } else if !self.block_line(line) {
            parser::ignore(line);
        }
    }

    // Lines of the current AC or pseudowire.
    fn block_line(&mut self, line: &str) -> bool {
        if let Some(statistics) = self.statistics_mut() {
            if statistics_line(statistics, line) {
                return true;
            }
        }
        if let Some(ac) = self.ac_mut() {
            return ac_line(ac, line);
        }
        if let Some(pw) = self.pw_mut() {
            return pw_line(pw, line);
        }
        false
    }

    // Lines inside an MPLS or EVPN label table. Returns false for lines
    // that don't belong to the table.
    fn table_line(&mut self, raw: &str, line: &str) -> bool {
        let Some(mut table) = self.table.take() else {
            return false;
        };

        let mut orphan = BTreeMap::new();
        let rows = match self.table_rows_mut(table.kind) {
            Some(rows) => rows,
            None => &mut orphan,
        };
        let consumed = table.line(raw, line, rows, |name, rows| {
            // A second interface row describes the monitor session.
            if name == "interface" && rows.contains_key("interface") {
                "monitor_interface".to_owned()
            } else {
                name
            }
        });
        if !table.closed {
            self.table = Some(table);
        }
        consumed
    }

    fn table_rows_mut(
        &mut self,
        kind: TableKind,
    ) -> Option<&mut BTreeMap<String, LocalRemote>> {
        let pw = self.pw_mut()?;
        match kind {
            TableKind::Mpls => Some(&mut pw.mpls),
            TableKind::Evpn => Some(&mut pw.evpn),
        }
    }

    fn statistics_mut(&mut self) -> Option<&mut Option<Statistics>> {
        match self.block {
            Block::Ac(_) => self.ac_mut().map(|ac| &mut ac.statistics),
            Block::Pw(..) => self.pw_mut().map(|pw| &mut pw.statistics),
            Block::None => None,
        }
    }

    fn open_pw(
        &mut self,
        kind: PwKind,
        caps: &Captures<'_>,
        ac_id: Option<u32>,
    ) {
        let neighbor = caps["neighbor"].to_owned();
        let id = caps["id"].to_owned();
        self.block = Block::Pw(kind, neighbor, id);
        if let Some(pw) = self.pw_mut() {
            pw.state = caps["state"].trim().to_owned();
            pw.ac_id = ac_id;
        }
    }

    fn xconnect_mut(&mut self) -> Option<&mut XconnectInstance> {
        let Owner::Xconnect(group, xc) = &self.owner else {
            return None;
        };
        self.record.group.get_mut(group)?.xc.get_mut(xc)
    }

    fn mp2mp_mut(&mut self) -> Option<&mut Mp2mp> {
        let Owner::Mp2mp(group, mp2mp) = &self.owner else {
            return None;
        };
        self.record.group.get_mut(group)?.mp2mp.get_mut(mp2mp)
    }

    fn ac_mut(&mut self) -> Option<&mut AttachmentCircuit> {
        let Block::Ac(name) = &self.block else {
            return None;
        };
        let Owner::Xconnect(group, xc) = &self.owner else {
            return None;
        };
        self.record
            .group
            .get_mut(group)?
            .xc
            .get_mut(xc)?
            .ac
            .get_mut(name)
    }

    fn pw_mut(&mut self) -> Option<&mut Pseudowire> {
        let Block::Pw(kind, neighbor, id) = &self.block else {
            return None;
        };
        let Owner::Xconnect(group, xc) = &self.owner else {
            return None;
        };
        let xc = self.record.group.get_mut(group)?.xc.get_mut(xc)?;
        let neighbors = match kind {
            PwKind::Primary => &mut xc.pw,
            PwKind::Backup => &mut xc.backup_pw,
            PwKind::Evpn => &mut xc.evpn,
        };
        let pw = neighbors
            .get_or_insert_with(Default::default)
            .neighbor
            .entry(neighbor.clone())
            .or_default()
            .id
            .entry(id.clone())
            .or_default();
        Some(pw)
    }
}

// ===== impl LabelTable =====

impl LabelTable {
    // Starts a table at its header line ("MPLS  Local  Remote").
    pub(crate) fn open(line: &str) -> Option<LabelTable> {
        let caps = REGEX_DETAIL_TABLE_HEADER.captures(line)?;
        let kind = match &caps["kind"] {
            "MPLS" => TableKind::Mpls,
            _ => TableKind::Evpn,
        };
        Some(LabelTable {
            kind,
            body: false,
            closed: false,
            threshold: None,
            last_row: None,
        })
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    // Adds a line of the table to `rows`, naming new rows with `row_name`.
    // Returns false for lines that don't belong to the table; past the
    // header, such a line also closes it.
    pub(crate) fn line(
        &mut self,
        raw: &str,
        line: &str,
        rows: &mut BTreeMap<String, LocalRemote>,
        row_name: impl FnOnce(String, &BTreeMap<String, LocalRemote>) -> String,
    ) -> bool {
        if REGEX_SEPARATOR.is_match(line) {
            if self.body {
                self.closed = true;
            } else {
                self.body = true;
                self.threshold = column_threshold(raw);
            }
            return true;
        }
        if line.is_empty() {
            return true;
        }
        if !self.body {
            return false;
        }

        if let Some(caps) = REGEX_DETAIL_TABLE_ROW.captures(line) {
            let name = row_name(key(&caps["key"]), rows);
            let row = LocalRemote {
                local: caps["local"].to_owned(),
                remote: caps["remote"].to_owned(),
                ..Default::default()
            };
            rows.insert(name.clone(), row);
            self.last_row = Some(name);
            return true;
        }

        if REGEX_DETAIL_CONTINUATION.is_match(line) {
            let row = match &self.last_row {
                Some(name) => rows.get_mut(name),
                None => None,
            };
            match row {
                Some(row) => add_continuation(row, raw, self.threshold),
                None => parser::ignore(line),
            }
            return true;
        }

        self.closed = true;
        false
    }
}

// ===== impl ShowL2vpnXconnectDetail =====

impl Parser for ShowL2vpnXconnectDetail {
    type Args = ();
    type Output = XconnectDetail;

    const COMMANDS: &'static [&'static str] = &["show l2vpn xconnect detail"];

    fn cli(output: &str, _args: &()) -> XconnectDetail {
        XconnectDetail::parse_output(output)
    }
}

// ===== impl ShowL2vpnXconnectMp2mpDetail =====

impl Parser for ShowL2vpnXconnectMp2mpDetail {
    type Args = ();
    type Output = XconnectDetail;

    const COMMANDS: &'static [&'static str] =
        &["show l2vpn xconnect mp2mp detail"];

    fn cli(output: &str, _args: &()) -> XconnectDetail {
        XconnectDetail::parse_output(output)
    }
}

// ===== helper functions =====

fn ac_line(ac: &mut AttachmentCircuit, line: &str) -> bool {
    if let Some(caps) = REGEX_DETAIL_AC_TYPE.captures(line) {
        ac.ac_type = Some(caps["type"].to_owned());
        ac.num_ranges = caps.name("ranges").map(|m| number(m.as_str()));
    } else if let Some(caps) = REGEX_DETAIL_REWRITE.captures(line) {
        ac.rewrite_tags = Some(caps["tags"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_VLAN_RANGES.captures(line) {
        let ranges = caps["ranges"]
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(str::to_owned)
            .collect();
        ac.vlan_ranges = Some(ranges);
    } else if let Some(caps) = REGEX_DETAIL_AC_MTU.captures(line) {
        ac.mtu = Some(number(&caps["mtu"]));
        ac.xc_id = Some(caps["xc_id"].to_owned());
        ac.interworking = Some(caps["interworking"].to_owned());
        ac.msti = caps.name("msti").map(|m| number(m.as_str()));
    } else {
        return false;
    }
    true
}

fn pw_line(pw: &mut Pseudowire, line: &str) -> bool {
    if let Some(caps) = REGEX_DETAIL_PW_CLASS.captures(line) {
        pw.pw_class = Some(caps["class"].to_owned());
        pw.xc_id = Some(caps["xc_id"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_XC_ID.captures(line) {
        pw.xc_id = Some(caps["xc_id"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_ENCAPSULATION.captures(line) {
        pw.encapsulation = Some(caps["encap"].to_owned());
        if let Some(protocol) = caps.name("protocol") {
            pw.protocol = Some(protocol.as_str().to_owned());
        }
    } else if let Some(caps) = REGEX_DETAIL_SOURCE.captures(line) {
        pw.source_address = Some(caps["address"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_PW_TYPE.captures(line) {
        pw.pw_type = Some(caps["type"].to_owned());
        pw.control_word = Some(caps["cw"].to_owned());
        pw.interworking = Some(caps["interworking"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_ENCAP_TYPE.captures(line) {
        pw.encap_type = Some(caps["type"].to_owned());
        pw.control_word = Some(caps["cw"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_BACKUP_DELAY.captures(line) {
        pw.backup_disable_delay = Some(number(&caps["delay"]));
    } else if let Some(caps) = REGEX_DETAIL_SEQUENCING.captures(line) {
        pw.sequencing = Some(caps["sequencing"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_LSP.captures(line) {
        pw.lsp = Some(caps["lsp"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_CREATE_TIME.captures(line) {
        pw.create_time = Some(caps["time"].to_owned());
    } else if let Some(caps) = REGEX_DETAIL_STATUS_CHANGED.captures(line) {
        pw.last_time_status_changed = Some(caps["time"].to_owned());
    } else {
        return false;
    }
    true
}

fn statistics_line(statistics: &mut Option<Statistics>, line: &str) -> bool {
    if line == "Statistics:" {
        return true;
    }

    if let Some(caps) = REGEX_DETAIL_PACKET_TOTALS.captures(line) {
        let statistics = statistics.get_or_insert_with(Default::default);
        let totals = match &caps["kind"] {
            "packet" => &mut statistics.packet_totals,
            _ => &mut statistics.byte_totals,
        };
        let totals = totals.get_or_insert_with(Default::default);
        let count = Some(number(&caps["count"]));
        match &caps["direction"] {
            "receive" => totals.receive = count,
            _ => totals.send = count,
        }
    } else if let Some(caps) = REGEX_DETAIL_COUNTERS.captures(line) {
        let statistics = statistics.get_or_insert_with(Default::default);
        let totals = Totals {
            receive: Some(number(&caps["received"])),
            send: Some(number(&caps["sent"])),
        };
        match &caps["kind"] {
            "packets" => statistics.packet_totals = Some(totals),
            _ => statistics.byte_totals = Some(totals),
        }
    } else if let Some(caps) = REGEX_DETAIL_DROPS.captures(line) {
        statistics.get_or_insert_with(Default::default).drops = Some(Drops {
            illegal_vlan: number(&caps["vlan"]),
            illegal_length: number(&caps["length"]),
        });
    } else {
        return false;
    }
    true
}


// Column halfway between the local and remote columns of a table separator.
fn column_threshold(separator: &str) -> Option<usize> {
    let starts = REGEX_DASHES
        .find_iter(separator)
        .map(|m| m.start())
        .collect::<Vec<_>>();
    match starts.as_slice() {
        [_, local, remote, ..] => Some((local + remote) / 2),
        _ => None,
    }
}

// Attaches the parenthesized values of a continuation line to the local or
// remote side of a table row, depending on their column.
fn add_continuation(row: &mut LocalRemote, raw: &str, threshold: Option<usize>) {
    for (i, m) in REGEX_PARENTHESIZED.find_iter(raw).enumerate() {
        let remote = match threshold {
            Some(threshold) => m.start() > threshold,
            None => i > 0,
        };
        let text = m.as_str().trim_matches(['(', ')']).to_owned();
        if remote {
            row.remote_type.push(text);
        } else {
            row.local_type.push(text);
        }
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_threshold() {
        let separator =
            "    ------------ ------------------------------ -----------------";
        assert_eq!(column_threshold(separator), Some((17 + 48) / 2));
        assert_eq!(column_threshold("--------"), None);
    }

    #[test]
    fn continuation_sides() {
        let mut row = LocalRemote::default();
        add_continuation(&mut row, "        (control word)          (none)", Some(20));
        add_continuation(&mut row, "                                (none)", Some(20));
        assert_eq!(row.local_type, ["control word"]);
        assert_eq!(row.remote_type, ["none", "none"]);
    }
}
