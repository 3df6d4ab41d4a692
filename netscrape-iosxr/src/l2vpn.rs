//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::LazyLock as Lazy;

use netscrape_utils::error::SchemaError;
use netscrape_utils::parser::{self, Arguments, Parser, number};
use netscrape_utils::schema::require;
use netscrape_utils::{Error, Params, Schema, interface};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::xconnect::{Drops, LabelTable, LocalRemote, TableKind, Totals};

//
// MAC learning.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MacLearning {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub topo_id: BTreeMap<String, Topology>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Topology {
    pub producer: BTreeMap<String, Producer>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Producer {
    pub next_hop: BTreeMap<String, NextHop>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct NextHop {
    pub mac_address: BTreeMap<String, LearnedMac>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LearnedMac {
    pub ip_address: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MacLearningArgs {
    pub mac_type: String,
    pub location: String,
}

// "show l2vpn mac-learning"
#[derive(Debug)]
pub struct ShowL2vpnMacLearning;

//
// Forwarding MAC table.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ForwardingMacTable {
    // Entries keyed by where they were learned from.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mac_table: BTreeMap<String, LearnedFrom>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct LearnedFrom {
    pub mac_address: BTreeMap<String, ForwardingMac>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ForwardingMac {
    #[serde(rename = "type")]
    pub mac_type: String,
    pub learned_from: String,
    pub lc_learned: String,
    pub resync_age: String,
    pub mapped_to: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ForwardingArgs {
    pub bridge_domain: Option<String>,
    pub location: String,
}

// "show l2vpn forwarding bridge-domain mac-address"
#[derive(Debug)]
pub struct ShowL2vpnForwardingBridgeDomainMacAddress;

//
// Forwarding protection.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Protection {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub main_interface_id: BTreeMap<String, MainInterface>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct MainInterface {
    pub instance: BTreeMap<String, ProtectionInstance>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProtectionInstance {
    pub state: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocationArgs {
    pub location: String,
}

// "show l2vpn forwarding protection main-interface"
#[derive(Debug)]
pub struct ShowL2vpnForwardingProtectionMainInterface;

//
// Bridge domains.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomains {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bridge_group: BTreeMap<String, BridgeGroup>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeGroup {
    pub bridge_domain: BTreeMap<String, BridgeDomain>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomain {
    pub id: u32,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shg_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_i: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_aging_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_notification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mac_address: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<Attachments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vfi: Option<Vfis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<Pseudowires>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbb: Option<Pbbs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vni: Option<Vnis>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub evpn: BTreeMap<String, Evpn>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Attachments {
    pub num_ac: u32,
    pub num_ac_up: u32,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub interfaces: BTreeMap<String, AttachmentCircuit>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AttachmentCircuit {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_mac_address: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_i: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_i_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvi_mac_address: Option<u32>,
}

// VFI count followed by the VFIs, keyed by name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Vfis {
    pub num_vfi: u32,
    #[serde(flatten)]
    pub vfis: BTreeMap<String, Vfi>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Vfi {
    pub neighbor: BTreeMap<String, VfiNeighbor>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct VfiNeighbor {
    pub pw_id: BTreeMap<String, VfiPseudowire>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct VfiPseudowire {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_mac_address: Option<u32>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Pseudowires {
    pub num_pw: u32,
    pub num_pw_up: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Pbbs {
    pub num_pbb: u32,
    pub num_pbb_up: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Vnis {
    pub num_vni: u32,
    pub num_vni_up: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Evpn {
    pub state: String,
}

// "show l2vpn bridge-domain"
#[derive(Debug)]
pub struct ShowL2vpnBridgeDomain;

// "show l2vpn bridge-domain brief"
#[derive(Debug)]
pub struct ShowL2vpnBridgeDomainBrief;

//
// Bridge domain summary.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomainSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_groups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_domains: Option<BridgeDomainCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<UpDownCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<UpDownCounters>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomainCounters {
    pub total: u32,
    pub up: u32,
    pub shutdown: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct UpDownCounters {
    pub total: u32,
    pub up: u32,
    pub down: u32,
}

// "show l2vpn bridge-domain summary"
#[derive(Debug)]
pub struct ShowL2vpnBridgeDomainSummary;

//
// Bridge domain details.
//

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomainDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bridge_group: BTreeMap<String, DetailBridgeGroup>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailBridgeGroup {
    pub bridge_domain: BTreeMap<String, BridgeDomainDetail>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeDomainDetail {
    pub state: String,
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shg_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_i: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupled_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vine_state: Option<String>,
    #[serde(flatten)]
    pub bridge: BridgeSettings,
    #[serde(flatten)]
    pub port: PortSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_mtu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_cvpls_config_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p2mp_pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_changed_since_creation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<DetailAttachments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vfi: Option<DetailVfis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw: Option<Pseudowires>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbb: Option<Pbbs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vni: Option<Vnis>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub evpn: BTreeMap<String, DetailEvpn>,
    // Access pseudowires keyed by kind ("EVPN").
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub access_pw: BTreeMap<String, PwNeighbors>,
}

// Settings that apply to the whole bridge domain.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BridgeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_withdraw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_withdraw_for_access_pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_withdraw_sent_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_withdraw_relaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_port_down_flush: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_secure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_secure_logging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_horizon_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_arp_inspection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_arp_logging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_source_guard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_source_logging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storm_control: Option<String>,
}

// Settings that each bridge port can override.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PortSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flooding: Option<Flooding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_aging_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_aging_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_notification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_reached: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_limit_threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_v4_snooping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_v4_snooping_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igmp_snooping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igmp_snooping_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mld_snooping_profile: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Flooding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_multicast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_unicast: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailAttachments {
    pub num_ac: u32,
    pub num_ac_up: u32,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub interfaces: BTreeMap<String, DetailCircuit>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailCircuit {
    pub state: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ac_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_num_ranges: Option<String>,
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
    pub mst_i: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_i_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub port: PortSettings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_mac_address: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bvi_mac_address: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PortStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storm_control_drop_counters: Option<StormControlDrops>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_arp_inspection_drop_counters: Option<DropCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_source_guard_drop_counters: Option<DropCounters>,
}

// Traffic counters of an AC, EVPN or pseudowire.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PortStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_totals: Option<Totals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_totals: Option<Totals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_move: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StormControlDrops {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets: Option<StormCounters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<StormCounters>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StormCounters {
    pub broadcast: String,
    pub multicast: String,
    pub unknown_unicast: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DropCounters {
    pub packets: String,
    pub bytes: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailEvpn {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PortStatistics>,
}

// VFI count followed by the VFIs, keyed by name.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailVfis {
    pub num_vfi: u32,
    #[serde(flatten)]
    pub vfis: BTreeMap<String, DetailVfi>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailVfi {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub neighbor: BTreeMap<String, PwNeighbor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VfiStatistics>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct VfiStatistics {
    pub drop: Drops,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PwNeighbors {
    pub neighbor: BTreeMap<String, PwNeighbor>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PwNeighbor {
    pub pw_id: BTreeMap<String, DetailPseudowire>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DetailPseudowire {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_id: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interworking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pw_backup_disable_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsp: Option<Lsp>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mpls: BTreeMap<String, LocalRemote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_time_status_changed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_withdraw_message: Option<WithdrawMessages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PortStatistics>,
    #[serde(flatten)]
    pub bridge: BridgeSettings,
    #[serde(flatten)]
    pub port: PortSettings,
}

// Transport LSP state, with the EVPN label table of access pseudowires.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Lsp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub evpn: BTreeMap<String, LocalRemote>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WithdrawMessages {
    pub send: u64,
    pub receive: u64,
}

// "show l2vpn bridge-domain detail"
#[derive(Debug)]
pub struct ShowL2vpnBridgeDomainDetail;

// Lists of a bridge domain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum BridgeDomainList {
    Evpns,
    Acs,
    AccessPws,
    Vfis,
    #[default]
    Other,
}

// Line-driven state of the bridge domain detail parser.
#[derive(Debug, Default)]
struct BridgeDetailParser {
    record: BridgeDomainDetails,
    current: Option<(String, String)>,
    list: BridgeDomainList,
    member: Member,
    vfi: Option<String>,
    table: Option<LabelTable>,
    // MAC address list that the following lines belong to.
    mac_list: Option<MacList>,
    drop_counters: Option<DropCounterKind>,
    // Neighbor of the last pseudowire with an interface row.
    interface_neighbor: Option<String>,
}

// Member of the bridge domain that indented lines apply to.
#[derive(Debug, Default)]
enum Member {
    #[default]
    None,
    Evpn(String),
    Ac(String),
    Vfi,
    Pw(PwOwner, String, String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum PwOwner {
    // Access pseudowire of the given kind ("EVPN").
    Access(String),
    Vfi(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MacList {
    Static,
    Bvi,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DropCounterKind {
    StormControl,
    DynamicArp,
    IpSourceGuard,
}

// ===== regular expressions =====

static REGEX_MAC_LEARNING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<topo_id>\d+) +(?P<producer>\S+) +(?P<next_hop>\S+) +(?P<mac>[\da-fA-F]{4}\.[\da-fA-F]{4}\.[\da-fA-F]{4})(?: +(?P<ip>\S+))?$",
    )
    .unwrap()
});
static REGEX_FORWARDING_MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<mac>[\da-fA-F]{4}\.[\da-fA-F]{4}\.[\da-fA-F]{4}) +(?P<type>\w+) +(?P<learned_from>.+?) +(?P<lc_learned>\S+) +(?P<resync_age>N/A|\d+d \d+h \d+m \d+s|\d+ \w+ [\d:]+) +(?P<mapped_to>\S+)$",
    )
    .unwrap()
});
static REGEX_LEARNED_FROM_BD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BD id: +(\d+)$").unwrap());
static REGEX_PROTECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>\S+) +(?P<instance>\d+) +(?P<state>\S+)$").unwrap()
});
static REGEX_BD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Bridge group: (?P<group>[^,]+), bridge-domain: (?P<bd>[^,]+), id: (?P<id>\d+), state: (?P<state>[\w-]+)(?:, ShgId: (?P<shg_id>\d+))?(?:, MSTi: (?P<mst_i>\d+))?",
    )
    .unwrap()
});
static REGEX_BD_AGING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Aging: (?P<aging>\d+) s, MAC limit: (?P<limit>\d+), Action: (?P<action>\w+), Notification: (?P<notification>\w+)$",
    )
    .unwrap()
});
static REGEX_BD_FILTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Filter MAC addresses: (\d+)$").unwrap());
static REGEX_BD_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^ACs: (?P<ac>\d+) \((?P<ac_up>\d+) up\), VFIs: (?P<vfi>\d+), PWs: (?P<pw>\d+) \((?P<pw_up>\d+) up\)(?:, PBBs: (?P<pbb>\d+) \((?P<pbb_up>\d+) up\))?(?:, VNIs: (?P<vni>\d+) \((?P<vni_up>\d+) up\))?",
    )
    .unwrap()
});
static REGEX_BD_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^List of (?P<list>[\w ]+):$").unwrap());
static REGEX_BD_MEMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>\S+), state: (?P<state>[\w-]+)(?:, Static MAC addresses: (?P<static>\d+))?(?:, BVI MAC addresses: (?P<bvi>\d+))?(?:, MSTi: (?P<mst_i>\d+)(?: \((?P<mst_i_state>[^)]+)\))?)?$",
    )
    .unwrap()
});
static REGEX_BD_VFI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^VFI (?P<name>\S+)$").unwrap());
static REGEX_BD_NEIGHBOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Neighbor (?P<ip>\S+) pw-id (?P<pw_id>\d+), state: (?P<state>[\w-]+)(?:, Static MAC addresses: (?P<static>\d+))?",
    )
    .unwrap()
});
static REGEX_BD_BRIEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<group>[^/\s]+)/(?P<bd>\S+) +(?P<id>\d+) +(?P<state>[\w-]+) +(?P<ac>\d+)/(?P<ac_up>\d+) +(?P<pw>\d+)/(?P<pw_up>\d+)$",
    )
    .unwrap()
});
static REGEX_BD_LEGEND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Legend: (?P<legend>.+)$").unwrap());
static REGEX_BD_SETTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<label>[A-Za-z][^:]*?) *: (?P<value>\S.*)$").unwrap()
});
static REGEX_BD_MODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<mode>\S+) Mode$").unwrap());
static REGEX_BD_AGING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<time>\d+) s, Type: (?P<type>\S+)$").unwrap()
});
static REGEX_BD_MAC_LIMIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<limit>\d+), Action: (?P<action>\S+), Notification: (?P<notification>\S+)$",
    )
    .unwrap()
});
static REGEX_BD_LIMIT_REACHED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<reached>\w+)(?:, threshold: (?P<threshold>\S+))?$")
        .unwrap()
});
static REGEX_BD_DETAIL_AC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AC: (?P<intf>[^,]+), state is (?P<state>.+)$").unwrap()
});
static REGEX_BD_AC_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Type (?P<type>[\w-]+)(?:; Num Ranges: (?P<ranges>\d+))?(?: +(?P<rest>MTU .+))?$",
    )
    .unwrap()
});
static REGEX_BD_AC_MTU: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^MTU (?P<mtu>\d+); XC ID (?P<xc_id>\S+); interworking (?P<interworking>[^;]+?)(?:; MSTi (?P<mst_i>\d+)(?: \((?P<mst_i_state>[^)]+)\))?)?$",
    )
    .unwrap()
});
static REGEX_BD_REWRITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Rewrite Tags: \[(?P<tags>[^\]]*)\]$").unwrap()
});
static REGEX_BD_VLAN_RANGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^VLAN ranges: \[(?P<ranges>[^\]]*)\]$").unwrap()
});
static REGEX_BD_MAC_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\da-fA-F]{4}\.[\da-fA-F]{4}\.[\da-fA-F]{4}$").unwrap()
});
static REGEX_BD_TOTALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>packet|byte) totals: receive (?P<receive>\d+), ?send (?P<send>\d+)$",
    )
    .unwrap()
});
static REGEX_BD_RECEIVED_SENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>packets|bytes): received (?P<receive>\d+)(?: \([^)]*\))?, sent (?P<send>\d+)$",
    )
    .unwrap()
});
static REGEX_BD_MAC_MOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^MAC move: (?P<count>\d+)$").unwrap());
static REGEX_BD_STORM_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>packets|bytes): broadcast (?P<broadcast>\d+), multicast (?P<multicast>\d+), unknown unicast (?P<unknown_unicast>\d+)$",
    )
    .unwrap()
});
static REGEX_BD_DROP_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^packets: (?P<packets>\d+), bytes: (?P<bytes>\d+)$").unwrap()
});
static REGEX_BD_DROPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^drops: illegal VLAN (?P<vlan>\d+), illegal length (?P<length>\d+)$",
    )
    .unwrap()
});
static REGEX_BD_DETAIL_PW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<kind>PW|EVPN): neighbor (?P<neighbor>[^,]+), PW ID:? (?P<id>[^,]+?)(?:, ac-id (?P<ac_id>\d+))?, state is (?P<state>.+)$",
    )
    .unwrap()
});
static REGEX_BD_PW_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PW class (?P<class>.+?)(?:, XC ID (?P<xc_id>\S+))?$").unwrap()
});
static REGEX_BD_XC_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^XC ID (?P<xc_id>\S+)$").unwrap());
static REGEX_BD_ENCAPSULATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Encapsulation (?P<encap>[\w-]+)(?:, protocol (?P<protocol>[\w-]+))?$",
    )
    .unwrap()
});
static REGEX_BD_SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Source address (?P<address>\S+)$").unwrap());
static REGEX_BD_PW_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^PW type (?P<type>[^,]+), control word (?P<cw>\w+), interworking (?P<interworking>\w+)$",
    )
    .unwrap()
});
static REGEX_BD_ENCAP_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Encap type (?P<type>[^,]+), control word (?P<cw>\w+)$")
        .unwrap()
});
static REGEX_BD_BACKUP_DELAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PW backup disable delay (?P<delay>\d+) sec$").unwrap()
});
static REGEX_BD_SEQUENCING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Sequencing (?P<sequencing>.+)$").unwrap());
static REGEX_BD_WITHDRAW_MESSAGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^MAC withdraw messages?: sen(?:d|t) (?P<send>\d+),? receiv(?:e|ed) (?P<receive>\d+)$",
    )
    .unwrap()
});
static REGEX_SUMMARY_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Number of groups: (?P<groups>\d+), bridge-domains: (?P<total>\d+), Up: (?P<up>\d+), Shutdown: (?P<shutdown>\d+)",
    )
    .unwrap()
});
static REGEX_SUMMARY_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Number of (?P<kind>ACs|PWs): (?P<total>\d+),? Up: (?P<up>\d+), Down: (?P<down>\d+)",
    )
    .unwrap()
});

// ===== impl MacLearning =====

impl MacLearning {
    pub fn parse_output(output: &str) -> MacLearning {
        let mut table = MacLearning::default();

        for line in parser::lines(output) {
            let Some(caps) = REGEX_MAC_LEARNING.captures(line) else {
                parser::ignore(line);
                continue;
            };

            let entry = table
                .topo_id
                .entry(caps["topo_id"].to_owned())
                .or_default()
                .producer
                .entry(caps["producer"].to_owned())
                .or_default()
                .next_hop
                .entry(caps["next_hop"].to_owned())
                .or_default()
                .mac_address
                .entry(caps["mac"].to_owned())
                .or_default();
            if let Some(ip) = caps.name("ip") {
                entry.ip_address.push(ip.as_str().to_owned());
            }
        }

        table
    }
}

impl Schema for MacLearning {}

// ===== impl MacLearningArgs =====

impl Default for MacLearningArgs {
    fn default() -> MacLearningArgs {
        MacLearningArgs {
            mac_type: "mac".to_owned(),
            location: "0/0/CPU0".to_owned(),
        }
    }
}

impl Arguments for MacLearningArgs {
    fn from_params(params: &Params) -> Result<MacLearningArgs, Error> {
        let defaults = MacLearningArgs::default();
        Ok(MacLearningArgs {
            mac_type: params.get_owned("mac_type").unwrap_or(defaults.mac_type),
            location: params.get_owned("location").unwrap_or(defaults.location),
        })
    }

    fn to_params(&self) -> Params {
        [
            ("mac_type", self.mac_type.as_str()),
            ("location", self.location.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

// ===== impl ShowL2vpnMacLearning =====

impl Parser for ShowL2vpnMacLearning {
    type Args = MacLearningArgs;
    type Output = MacLearning;

    const COMMANDS: &'static [&'static str] =
        &["show l2vpn mac-learning {mac_type} all location {location}"];

    fn cli(output: &str, _args: &MacLearningArgs) -> MacLearning {
        MacLearning::parse_output(output)
    }
}

// ===== impl ForwardingMacTable =====

impl ForwardingMacTable {
    pub fn parse_output(output: &str) -> ForwardingMacTable {
        let mut table = ForwardingMacTable::default();

        for line in parser::lines(output) {
            let Some(caps) = REGEX_FORWARDING_MAC.captures(line) else {
                parser::ignore(line);
                continue;
            };

            // "BD id: 0" is reported as "BD id:0".
            let learned_from = match REGEX_LEARNED_FROM_BD
                .captures(&caps["learned_from"])
            {
                Some(bd) => format!("BD id:{}", &bd[1]),
                None => caps["learned_from"].to_owned(),
            };
            let mac = ForwardingMac {
                mac_type: caps["type"].to_owned(),
                learned_from: learned_from.clone(),
                lc_learned: caps["lc_learned"].to_owned(),
                resync_age: caps["resync_age"].to_owned(),
                mapped_to: caps["mapped_to"].to_owned(),
            };
            table
                .mac_table
                .entry(learned_from)
                .or_default()
                .mac_address
                .insert(caps["mac"].to_owned(), mac);
        }

        table
    }
}

impl Schema for ForwardingMacTable {}

// ===== impl ForwardingArgs =====

impl Arguments for ForwardingArgs {
    fn from_params(params: &Params) -> Result<ForwardingArgs, Error> {
        Ok(ForwardingArgs {
            bridge_domain: params.get_owned("bridge_domain"),
            location: params.required("location")?,
        })
    }

    fn to_params(&self) -> Params {
        let mut params = Params::default();
        if let Some(bridge_domain) = &self.bridge_domain {
            params.insert("bridge_domain", bridge_domain.as_str());
        }
        params.insert("location", self.location.as_str());
        params
    }
}

// ===== impl ShowL2vpnForwardingBridgeDomainMacAddress =====

impl Parser for ShowL2vpnForwardingBridgeDomainMacAddress {
    type Args = ForwardingArgs;
    type Output = ForwardingMacTable;

    const COMMANDS: &'static [&'static str] = &[
        "show l2vpn forwarding bridge-domain mac-address location {location}",
        "show l2vpn forwarding bridge-domain {bridge_domain} mac-address location {location}",
    ];

    fn cli(output: &str, _args: &ForwardingArgs) -> ForwardingMacTable {
        ForwardingMacTable::parse_output(output)
    }
}

// ===== impl Protection =====

impl Protection {
    pub fn parse_output(output: &str) -> Protection {
        let mut protection = Protection::default();

        for line in parser::lines(output) {
            let Some(caps) = REGEX_PROTECTION.captures(line) else {
                parser::ignore(line);
                continue;
            };

            let instance = ProtectionInstance {
                state: caps["state"].to_owned(),
            };
            protection
                .main_interface_id
                .entry(caps["name"].to_owned())
                .or_default()
                .instance
                .insert(caps["instance"].to_owned(), instance);
        }

        protection
    }
}

impl Schema for Protection {}

// ===== impl LocationArgs =====

impl Arguments for LocationArgs {
    fn from_params(params: &Params) -> Result<LocationArgs, Error> {
        Ok(LocationArgs {
            location: params.required("location")?,
        })
    }

    fn to_params(&self) -> Params {
        [("location", self.location.as_str())].into_iter().collect()
    }
}

// ===== impl ShowL2vpnForwardingProtectionMainInterface =====

impl Parser for ShowL2vpnForwardingProtectionMainInterface {
    type Args = LocationArgs;
    type Output = Protection;

    const COMMANDS: &'static [&'static str] = &[
        "show l2vpn forwarding protection main-interface location {location}",
    ];

    fn cli(output: &str, _args: &LocationArgs) -> Protection {
        Protection::parse_output(output)
    }
}

// ===== impl BridgeDomains =====

impl BridgeDomains {
    // Extracts the bridge domains from "show l2vpn bridge-domain".
    pub fn parse_output(output: &str) -> BridgeDomains {
        let mut domains = BridgeDomains::default();
        let mut current: Option<(String, String)> = None;
        let mut list = BridgeDomainList::Other;
        let mut vfi: Option<String> = None;

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_BD_HEADER.captures(line) {
                let key = (caps["group"].to_owned(), caps["bd"].to_owned());
                let bd = domains.bridge_domain_mut(&key);
                bd.id = number(&caps["id"]);
                bd.state = caps["state"].to_owned();
                bd.shg_id = caps.name("shg_id").map(|m| number(m.as_str()));
                bd.mst_i = caps.name("mst_i").map(|m| number(m.as_str()));
                current = Some(key);
                list = BridgeDomainList::Other;
                vfi = None;
                continue;
            }

            let Some(bd) =
                current.as_ref().map(|key| domains.bridge_domain_mut(key))
            else {
                parser::ignore(line);
                continue;
            };

            if let Some(caps) = REGEX_BD_AGING.captures(line) {
                bd.mac_aging_time = Some(number(&caps["aging"]));
                bd.mac_limit = Some(number(&caps["limit"]));
                bd.mac_limit_action = Some(caps["action"].to_owned());
                bd.mac_limit_notification =
                    Some(caps["notification"].to_owned());
            } else if let Some(caps) = REGEX_BD_FILTER.captures(line) {
                bd.filter_mac_address = Some(number(&caps[1]));
            } else if let Some(caps) = REGEX_BD_COUNTERS.captures(line) {
                bd.add_counters(&caps);
            } else if let Some(caps) = REGEX_BD_LIST.captures(line) {
                list = BridgeDomainList::from_name(&caps["list"]);
                vfi = None;
            } else if let Some(caps) = REGEX_BD_MEMBER.captures(line) {
                match list {
                    BridgeDomainList::Evpns => {
                        let evpn = Evpn {
                            state: caps["state"].to_owned(),
                        };
                        bd.evpn.insert(caps["name"].to_owned(), evpn);
                    }
                    BridgeDomainList::Acs => bd.add_attachment_circuit(&caps),
                    _ => parser::ignore(line),
                }
            } else if let Some(caps) = REGEX_BD_VFI
                .captures(line)
                .filter(|_| list == BridgeDomainList::Vfis)
            {
                let name = caps["name"].to_owned();
                bd.vfi.get_or_insert_with(Default::default)
                    .vfis
                    .entry(name.clone())
                    .or_default();
                vfi = Some(name);
            } else if let Some(caps) = REGEX_BD_NEIGHBOR.captures(line) {
                match &vfi {
                    Some(name) => bd.add_vfi_neighbor(name, &caps),
                    None => parser::ignore(line),
                }
            } else {
                parser::ignore(line);
            }
        }

        domains
    }

    // Extracts the bridge domains from "show l2vpn bridge-domain brief".
    pub fn parse_brief_output(output: &str) -> BridgeDomains {
        let mut domains = BridgeDomains::default();

        for line in parser::lines(output) {
            let Some(caps) = REGEX_BD_BRIEF.captures(line) else {
                parser::ignore(line);
                continue;
            };

            let key = (caps["group"].to_owned(), caps["bd"].to_owned());
            let bd = domains.bridge_domain_mut(&key);
            bd.id = number(&caps["id"]);
            bd.state = caps["state"].to_owned();
            bd.ac = Some(Attachments {
                num_ac: number(&caps["ac"]),
                num_ac_up: number(&caps["ac_up"]),
                interfaces: Default::default(),
            });
            bd.pw = Some(Pseudowires {
                num_pw: number(&caps["pw"]),
                num_pw_up: number(&caps["pw_up"]),
            });
        }

        domains
    }

    fn bridge_domain_mut(&mut self, key: &(String, String)) -> &mut BridgeDomain {
        let (group, bd) = key;
        self.bridge_group
            .entry(group.clone())
            .or_default()
            .bridge_domain
            .entry(bd.clone())
            .or_default()
    }
}

impl Schema for BridgeDomains {}

// ===== impl BridgeDomain =====

impl BridgeDomain {
    fn add_counters(&mut self, caps: &Captures<'_>) {
        let ac = self.ac.get_or_insert_with(Default::default);
        ac.num_ac = number(&caps["ac"]);
        ac.num_ac_up = number(&caps["ac_up"]);
        self.vfi.get_or_insert_with(Default::default).num_vfi =
            number(&caps["vfi"]);
        self.pw = Some(Pseudowires {
            num_pw: number(&caps["pw"]),
            num_pw_up: number(&caps["pw_up"]),
        });
        if let Some(pbb) = caps.name("pbb") {
            self.pbb = Some(Pbbs {
                num_pbb: number(pbb.as_str()),
                num_pbb_up: number(&caps["pbb_up"]),
            });
        }
        if let Some(vni) = caps.name("vni") {
            self.vni = Some(Vnis {
                num_vni: number(vni.as_str()),
                num_vni_up: number(&caps["vni_up"]),
            });
        }
    }

    fn add_attachment_circuit(&mut self, caps: &Captures<'_>) {
        let circuit = AttachmentCircuit {
            state: caps["state"].to_owned(),
            static_mac_address: caps.name("static").map(|m| number(m.as_str())),
            mst_i: caps.name("mst_i").map(|m| number(m.as_str())),
            mst_i_state: caps.name("mst_i_state").map(|m| m.as_str().to_owned()),
            bvi_mac_address: caps.name("bvi").map(|m| number(m.as_str())),
        };
        self.ac
            .get_or_insert_with(Default::default)
            .interfaces
            .insert(interface::normalize(&caps["name"]), circuit);
    }

    fn add_vfi_neighbor(&mut self, vfi: &str, caps: &Captures<'_>) {
        let pw = VfiPseudowire {
            state: caps["state"].to_owned(),
            static_mac_address: caps.name("static").map(|m| number(m.as_str())),
        };
        self.vfi
            .get_or_insert_with(Default::default)
            .vfis
            .entry(vfi.to_owned())
            .or_default()
            .neighbor
            .entry(caps["ip"].to_owned())
            .or_default()
            .pw_id
            .insert(caps["pw_id"].to_owned(), pw);
    }
}

// ===== impl ShowL2vpnBridgeDomain =====

impl Parser for ShowL2vpnBridgeDomain {
    type Args = ();
    type Output = BridgeDomains;

    const COMMANDS: &'static [&'static str] = &["show l2vpn bridge-domain"];

    fn cli(output: &str, _args: &()) -> BridgeDomains {
        BridgeDomains::parse_output(output)
    }
}

// ===== impl ShowL2vpnBridgeDomainBrief =====

impl Parser for ShowL2vpnBridgeDomainBrief {
    type Args = ();
    type Output = BridgeDomains;

    const COMMANDS: &'static [&'static str] =
        &["show l2vpn bridge-domain brief"];

    fn cli(output: &str, _args: &()) -> BridgeDomains {
        BridgeDomains::parse_brief_output(output)
    }
}

// ===== impl BridgeDomainList =====

impl BridgeDomainList {
    fn from_name(name: &str) -> BridgeDomainList {
        match name {
            "EVPNs" => BridgeDomainList::Evpns,
            "ACs" => BridgeDomainList::Acs,
            "Access PWs" => BridgeDomainList::AccessPws,
            "VFIs" => BridgeDomainList::Vfis,
            _ => BridgeDomainList::Other,
        }
    }
}

// ===== impl BridgeDomainDetails =====

impl BridgeDomainDetails {
    // Extracts the bridge domains from "show l2vpn bridge-domain detail".
    pub fn parse_output(output: &str) -> BridgeDomainDetails {
        let mut parser = BridgeDetailParser::default();
        for raw in output.lines() {
            parser.line(raw);
        }
        parser.record
    }
}

impl Schema for BridgeDomainDetails {}

// ===== impl BridgeDetailParser =====

impl BridgeDetailParser {
    fn line(&mut self, raw: &str) {
        let line = raw.trim();

        if self.table.is_some() && self.table_line(raw, line) {
            return;
        }

        if let Some(caps) = REGEX_BD_HEADER.captures(line) {
            self.open_bridge_domain(&caps);
            return;
        }
        if let Some(caps) = REGEX_BD_LEGEND.captures(line) {
            self.record.legend = Some(caps["legend"].to_owned());
            return;
        }
        if self.current.is_none() {
            parser::ignore(line);
            return;
        }

        if let Some(caps) = REGEX_BD_LIST.captures(line) {
            self.list = BridgeDomainList::from_name(&caps["list"]);
            self.mac_list = None;
        } else if let Some(caps) = REGEX_BD_COUNTERS.captures(line) {
            if let Some(bd) = self.bridge_domain_mut() {
                bd.add_counters(&caps);
            }
        } else if let Some(caps) = REGEX_BD_DETAIL_AC.captures(line) {
            self.open_circuit(&caps);
        } else if let Some(caps) = REGEX_BD_MEMBER
            .captures(line)
            .filter(|_| self.list == BridgeDomainList::Evpns)
        {
            let name = caps["name"].to_owned();
            if let Some(bd) = self.bridge_domain_mut() {
                bd.evpn.entry(name.clone()).or_default().state =
                    caps["state"].to_owned();
            }
            self.member = Member::Evpn(name);
        } else if line == "VFI Statistics:" {
            parser::ignore(line);
        } else if let Some(caps) = REGEX_BD_VFI
            .captures(line)
            .filter(|_| self.list == BridgeDomainList::Vfis)
        {
            let name = caps["name"].to_owned();
            if let Some(bd) = self.bridge_domain_mut() {
                bd.vfi
                    .get_or_insert_with(Default::default)
                    .vfis
                    .entry(name.clone())
                    .or_default();
            }
            self.vfi = Some(name);
            self.member = Member::Vfi;
        } else if let Some(caps) = REGEX_BD_DETAIL_PW.captures(line) {
            self.open_pseudowire(&caps);
        } else if let Some(caps) = REGEX_BD_DROPS.captures(line) {
            // Drops are counted per VFI, after its pseudowires.
            let drops = Drops {
                illegal_vlan: number(&caps["vlan"]),
                illegal_length: number(&caps["length"]),
            };
            match self.vfi_mut() {
                Some(vfi) => {
                    vfi.statistics = Some(VfiStatistics { drop: drops })
                }
                None => parser::ignore(line),
            }
        } else {
            match self.member {
                Member::None => self.bridge_domain_line(line),
                Member::Evpn(_) => self.evpn_line(line),
                Member::Ac(_) => self.circuit_line(line),
                Member::Vfi => parser::ignore(line),
                Member::Pw(..) => self.pseudowire_line(line),
            }
        }
    }

    fn open_bridge_domain(&mut self, caps: &Captures<'_>) {
        let key = (caps["group"].to_owned(), caps["bd"].to_owned());
        let bd = self
            .record
            .bridge_group
            .entry(key.0.clone())
            .or_default()
            .bridge_domain
            .entry(key.1.clone())
            .or_default();
        bd.state = caps["state"].to_owned();
        bd.id = number(&caps["id"]);
        bd.shg_id = caps.name("shg_id").map(|m| number(m.as_str()));
        bd.mst_i = caps.name("mst_i").map(|m| number(m.as_str()));

        *self = BridgeDetailParser {
            record: std::mem::take(&mut self.record),
            current: Some(key),
            ..Default::default()
        };
    }

    fn open_circuit(&mut self, caps: &Captures<'_>) {
        let name = interface::normalize(&caps["intf"]);
        if let Some(bd) = self.bridge_domain_mut() {
            bd.ac
                .get_or_insert_with(Default::default)
                .interfaces
                .entry(name.clone())
                .or_default()
                .state = caps["state"].to_owned();
        }
        self.member = Member::Ac(name);
        self.mac_list = None;
        self.drop_counters = None;
    }

    fn open_pseudowire(&mut self, caps: &Captures<'_>) {
        let owner = match (self.list, &self.vfi) {
            (BridgeDomainList::AccessPws, _) => {
                PwOwner::Access(caps["kind"].to_owned())
            }
            (_, Some(vfi)) => PwOwner::Vfi(vfi.clone()),
            _ => {
                parser::ignore(&caps[0]);
                return;
            }
        };
        let neighbor = caps["neighbor"].to_owned();
        let id = caps["id"].to_owned();

        let Some(bd) = self.bridge_domain_mut() else {
            return;
        };
        let neighbors = match &owner {
            PwOwner::Access(kind) => {
                &mut bd.access_pw.entry(kind.clone()).or_default().neighbor
            }
            PwOwner::Vfi(vfi) => {
                &mut bd
                    .vfi
                    .get_or_insert_with(Default::default)
                    .vfis
                    .entry(vfi.clone())
                    .or_default()
                    .neighbor
            }
        };
        let pw = neighbors
            .entry(neighbor.clone())
            .or_default()
            .pw_id
            .entry(id.clone())
            .or_default();
        pw.state = caps["state"].trim().to_owned();
        pw.ac_id = caps.name("ac_id").map(|m| m.as_str().to_owned());

        self.member = Member::Pw(owner, neighbor, id);
        self.mac_list = None;
    }

    // Lines of the bridge domain itself, before its member lists.
    fn bridge_domain_line(&mut self, line: &str) {
        let Some(bd) = self.bridge_domain_mut() else {
            parser::ignore(line);
            return;
        };

        if let Some(caps) = REGEX_BD_MODE.captures(line) {
            bd.mode = Some(caps["mode"].to_owned());
            return;
        }
        if line == "No status change since creation" {
            bd.status_changed_since_creation = Some("No".to_owned());
            return;
        }
        let Some((label, value)) = setting(line) else {
            parser::ignore(line);
            return;
        };
        let value_owned = Some(value.to_owned());
        match label.as_str() {
            "mtu" => bd.mtu = Some(number(value)),
            "coupled state" => bd.coupled_state = value_owned,
            // "BVI Resolved" is reported as "BVI".
            "vine state" => {
                bd.vine_state =
                    value.split_whitespace().next().map(str::to_owned)
            }
            "bridge mtu" => bd.bridge_mtu = value_owned,
            "mib cvplsconfigindex" => bd.mid_cvpls_config_index = value_owned,
            "p2mp pw" => bd.p2mp_pw = value_owned,
            "create time" => bd.create_time = value_owned,
            _ => {
                if !bridge_setting(&mut bd.bridge, &label, value)
                    && !port_setting(&mut bd.port, &label, value)
                {
                    parser::ignore(line);
                }
            }
        }
    }

    fn evpn_line(&mut self, line: &str) {
        let Some(evpn) = self.evpn_mut() else {
            parser::ignore(line);
            return;
        };

        if port_statistics_line(&mut evpn.statistics, line) {
            return;
        }
        if let Some(caps) = REGEX_BD_XC_ID.captures(line) {
            evpn.xc_id = Some(caps["xc_id"].to_owned());
            return;
        }
        match setting(line) {
            Some((label, value)) if label == "evi" => {
                evpn.evi = Some(value.to_owned());
            }
            _ => parser::ignore(line),
        }
    }

    fn circuit_line(&mut self, line: &str) {
        if let Some(list) = self
            .mac_list
            .take()
            .filter(|_| REGEX_BD_MAC_ADDRESS.is_match(line))
        {
            self.mac_list = Some(list);
            if let Some(ac) = self.circuit_mut() {
                let addresses = match list {
                    MacList::Static => &mut ac.static_mac_address,
                    MacList::Bvi => &mut ac.bvi_mac_address,
                };
                addresses.push(line.to_owned());
            }
            return;
        }
        match line {
            "Static MAC addresses:" => self.mac_list = Some(MacList::Static),
            "BVI MAC address:" => self.mac_list = Some(MacList::Bvi),
            "Storm control drop counters:" => {
                self.drop_counters = Some(DropCounterKind::StormControl)
            }
            "Dynamic ARP inspection drop counters:" => {
                self.drop_counters = Some(DropCounterKind::DynamicArp)
            }
            "IP source guard drop counters:" => {
                self.drop_counters = Some(DropCounterKind::IpSourceGuard)
            }
            _ => {
                let drop_counters = self.drop_counters;
                let consumed = match self.circuit_mut() {
                    Some(ac) => circuit_field(ac, line, drop_counters),
                    None => false,
                };
                if consumed {
                    return;
                }
                // Bridge-wide settings listed under an AC belong to the
                // bridge domain.
                let consumed = match (setting(line), self.bridge_domain_mut()) {
                    (Some((label, value)), Some(bd)) => {
                        bridge_setting(&mut bd.bridge, &label, value)
                    }
                    _ => false,
                };
                if !consumed {
                    parser::ignore(line);
                }
            }
        }
    }

    fn pseudowire_line(&mut self, line: &str) {
        if let Some(table) = LabelTable::open(line) {
            self.table = Some(table);
            return;
        }
        let consumed = match self.pseudowire_mut() {
            Some(pw) => pseudowire_field(pw, line),
            None => false,
        };
        if !consumed {
            parser::ignore(line);
        }
    }

    // Lines inside an MPLS or EVPN label table. Returns false for lines
    // that don't belong to the table.
    fn table_line(&mut self, raw: &str, line: &str) -> bool {
        let Some(mut table) = self.table.take() else {
            return false;
        };

        let neighbor = match &self.member {
            Member::Pw(_, neighbor, _) => Some(neighbor.clone()),
            _ => None,
        };
        // A later interface row of the same neighbor describes the monitor
        // session.
        let monitor = neighbor.is_some() && neighbor == self.interface_neighbor;
        let mut interface = false;

        let mut orphan = BTreeMap::new();
        let kind = table.kind;
        let rows = match self.pseudowire_mut() {
            Some(pw) => match kind {
                TableKind::Mpls => &mut pw.mpls,
                TableKind::Evpn => {
                    &mut pw.lsp.get_or_insert_with(Default::default).evpn
                }
            },
            None => &mut orphan,
        };
        let consumed = table.line(raw, line, rows, |name, _| {
            if name != "interface" {
                return name;
            }
            interface = true;
            if monitor {
                "monitor_interface".to_owned()
            } else {
                name
            }
        });

        if interface {
            self.interface_neighbor = neighbor;
        }
        if !table.is_closed() {
            self.table = Some(table);
        }
        consumed
    }

    fn bridge_domain_mut(&mut self) -> Option<&mut BridgeDomainDetail> {
        let (group, bd) = self.current.as_ref()?;
        self.record
            .bridge_group
            .get_mut(group)?
            .bridge_domain
            .get_mut(bd)
    }

    fn evpn_mut(&mut self) -> Option<&mut DetailEvpn> {
        let Member::Evpn(name) = &self.member else {
            return None;
        };
        let (group, bd) = self.current.as_ref()?;
        self.record
            .bridge_group
            .get_mut(group)?
            .bridge_domain
            .get_mut(bd)?
            .evpn
            .get_mut(name)
    }

    fn circuit_mut(&mut self) -> Option<&mut DetailCircuit> {
        let Member::Ac(name) = &self.member else {
            return None;
        };
        let (group, bd) = self.current.as_ref()?;
        self.record
            .bridge_group
            .get_mut(group)?
            .bridge_domain
            .get_mut(bd)?
            .ac
            .as_mut()?
            .interfaces
            .get_mut(name)
    }

    fn vfi_mut(&mut self) -> Option<&mut DetailVfi> {
        let name = self.vfi.as_ref()?;
        let (group, bd) = self.current.as_ref()?;
        self.record
            .bridge_group
            .get_mut(group)?
            .bridge_domain
            .get_mut(bd)?
            .vfi
            .as_mut()?
            .vfis
            .get_mut(name)
    }

    fn pseudowire_mut(&mut self) -> Option<&mut DetailPseudowire> {
        let Member::Pw(owner, neighbor, id) = &self.member else {
            return None;
        };
        let (group, bd) = self.current.as_ref()?;
        let bd = self
            .record
            .bridge_group
            .get_mut(group)?
            .bridge_domain
            .get_mut(bd)?;
        let neighbors = match owner {
            PwOwner::Access(kind) => &mut bd.access_pw.get_mut(kind)?.neighbor,
            PwOwner::Vfi(vfi) => {
                &mut bd.vfi.as_mut()?.vfis.get_mut(vfi)?.neighbor
            }
        };
        neighbors.get_mut(neighbor)?.pw_id.get_mut(id)
    }
}

// ===== impl BridgeDomainDetail =====

impl BridgeDomainDetail {
    fn add_counters(&mut self, caps: &Captures<'_>) {
        let ac = self.ac.get_or_insert_with(Default::default);
        ac.num_ac = number(&caps["ac"]);
        ac.num_ac_up = number(&caps["ac_up"]);
        self.vfi.get_or_insert_with(Default::default).num_vfi =
            number(&caps["vfi"]);
        self.pw = Some(Pseudowires {
            num_pw: number(&caps["pw"]),
            num_pw_up: number(&caps["pw_up"]),
        });
        if let Some(pbb) = caps.name("pbb") {
            self.pbb = Some(Pbbs {
                num_pbb: number(pbb.as_str()),
                num_pbb_up: number(&caps["pbb_up"]),
            });
        }
        if let Some(vni) = caps.name("vni") {
            self.vni = Some(Vnis {
                num_vni: number(vni.as_str()),
                num_vni_up: number(&caps["vni_up"]),
            });
        }
    }
}

// ===== impl ShowL2vpnBridgeDomainDetail =====

impl Parser for ShowL2vpnBridgeDomainDetail {
    type Args = ();
    type Output = BridgeDomainDetails;

    const COMMANDS: &'static [&'static str] =
        &["show l2vpn bridge-domain detail"];

    fn cli(output: &str, _args: &()) -> BridgeDomainDetails {
        BridgeDomainDetails::parse_output(output)
    }
}

// ===== impl BridgeDomainSummary =====

impl BridgeDomainSummary {
    pub fn parse_output(output: &str) -> BridgeDomainSummary {
        let mut summary = BridgeDomainSummary::default();

        for line in parser::lines(output) {
            if let Some(caps) = REGEX_SUMMARY_GROUPS.captures(line) {
                summary.number_of_groups = Some(number(&caps["groups"]));
                summary.bridge_domains = Some(BridgeDomainCounters {
                    total: number(&caps["total"]),
                    up: number(&caps["up"]),
                    shutdown: number(&caps["shutdown"]),
                });
            } else if let Some(caps) = REGEX_SUMMARY_COUNTERS.captures(line) {
                let counters = UpDownCounters {
                    total: number(&caps["total"]),
                    up: number(&caps["up"]),
                    down: number(&caps["down"]),
                };
                match &caps["kind"] {
                    "ACs" => summary.ac = Some(counters),
                    _ => summary.pw = Some(counters),
                }
            } else {
                parser::ignore(line);
            }
        }

        summary
    }
}

impl Schema for BridgeDomainSummary {
    fn check(&self) -> Result<(), SchemaError> {
        require(&self.number_of_groups, "number_of_groups")?;
        require(&self.bridge_domains, "bridge_domains")?;
        Ok(())
    }
}

// ===== impl ShowL2vpnBridgeDomainSummary =====

impl Parser for ShowL2vpnBridgeDomainSummary {
    type Args = ();
    type Output = BridgeDomainSummary;

    const COMMANDS: &'static [&'static str] =
        &["show l2vpn bridge-domain summary"];

    fn cli(output: &str, _args: &()) -> BridgeDomainSummary {
        BridgeDomainSummary::parse_output(output)
    }
}

// ===== helper functions =====

// Splits a "Label: value" line into its lowercase label and its value.
fn setting(line: &str) -> Option<(String, &str)> {
    let caps = REGEX_BD_SETTING.captures(line)?;
    let label = caps.name("label")?.as_str().to_lowercase();
    let value = caps.name("value")?.as_str();
    Some((label, value))
}

// Splits "disabled, Logging: disabled" into the state and logging values.
fn with_logging(value: &str) -> (Option<String>, Option<String>) {
    match value.split_once(", Logging: ") {
        Some((state, logging)) => {
            (Some(state.to_owned()), Some(logging.to_owned()))
        }
        None => (Some(value.to_owned()), None),
    }
}

fn bridge_setting(
    bridge: &mut BridgeSettings,
    label: &str,
    value: &str,
) -> bool {
    let value_owned = Some(value.to_owned());
    match label {
        "mac withdraw" => bridge.mac_withdraw = value_owned,
        "mac withdraw for access pw" => {
            bridge.mac_withdraw_for_access_pw = value_owned
        }
        "mac withdraw sent on" => bridge.mac_withdraw_sent_on = value_owned,
        "mac withdraw relaying (access to access)" => {
            bridge.mac_withdraw_relaying = value_owned
        }
        "mac port down flush" => bridge.mac_port_down_flush = value_owned,
        "mac secure" => {
            (bridge.mac_secure, bridge.mac_secure_logging) = with_logging(value)
        }
        "split horizon group" => bridge.split_horizon_group = value_owned,
        "dynamic arp inspection" => {
            (bridge.dynamic_arp_inspection, bridge.dynamic_arp_logging) =
                with_logging(value)
        }
        "ip source guard" => {
            (bridge.ip_source_guard, bridge.ip_source_logging) =
                with_logging(value)
        }
        "storm control" => bridge.storm_control = value_owned,
        _ => return false,
    }
    true
}

fn port_setting(port: &mut PortSettings, label: &str, value: &str) -> bool {
    let value_owned = Some(value.to_owned());
    match label {
        "mac learning" => port.mac_learning = value_owned,
        "broadcast & multicast" => {
            port.flooding
                .get_or_insert_with(Default::default)
                .broadcast_multicast = value_owned
        }
        "unknown unicast" => {
            port.flooding
                .get_or_insert_with(Default::default)
                .unknown_unicast = value_owned
        }
        "mac aging time" => {
            let Some(caps) = REGEX_BD_AGING_TIME.captures(value) else {
                return false;
            };
            port.mac_aging_time = Some(number(&caps["time"]));
            port.mac_aging_type = Some(caps["type"].to_owned());
        }
        "mac limit" => {
            let Some(caps) = REGEX_BD_MAC_LIMIT.captures(value) else {
                return false;
            };
            port.mac_limit = Some(number(&caps["limit"]));
            port.mac_limit_action = Some(caps["action"].to_owned());
            port.mac_limit_notification = Some(caps["notification"].to_owned());
        }
        "mac limit reached" => {
            let Some(caps) = REGEX_BD_LIMIT_REACHED.captures(value) else {
                return false;
            };
            port.mac_limit_reached = Some(caps["reached"].to_owned());
            port.mac_limit_threshold =
                caps.name("threshold").map(|m| m.as_str().to_owned());
        }
        "security" => port.security = value_owned,
        "dhcpv4 snooping" => port.dhcp_v4_snooping = value_owned,
        "dhcpv4 snooping profile" => {
            port.dhcp_v4_snooping_profile = value_owned
        }
        "igmp snooping" => port.igmp_snooping = value_owned,
        "igmp snooping profile" => port.igmp_snooping_profile = value_owned,
        "mld snooping profile" => port.mld_snooping_profile = value_owned,
        _ => return false,
    }
    true
}

fn port_statistics_line(
    statistics: &mut Option<PortStatistics>,
    line: &str,
) -> bool {
    if let Some(caps) = REGEX_BD_TOTALS
        .captures(line)
        .or_else(|| REGEX_BD_RECEIVED_SENT.captures(line))
    {
        let statistics = statistics.get_or_insert_with(Default::default);
        let totals = Some(Totals {
            receive: Some(number(&caps["receive"])),
            send: Some(number(&caps["send"])),
        });
        match &caps["kind"] {
            "packet" | "packets" => statistics.packet_totals = totals,
            _ => statistics.byte_totals = totals,
        }
    } else if let Some(caps) = REGEX_BD_MAC_MOVE.captures(line) {
        statistics.get_or_insert_with(Default::default).mac_move =
            Some(caps["count"].to_owned());
    } else {
        return false;
    }
    true
}

fn circuit_mtu(ac: &mut DetailCircuit, text: &str) -> bool {
    let Some(caps) = REGEX_BD_AC_MTU.captures(text) else {
        return false;
    };
    ac.mtu = Some(number(&caps["mtu"]));
    ac.xc_id = Some(caps["xc_id"].to_owned());
    ac.interworking = Some(caps["interworking"].to_owned());
    ac.mst_i = caps.name("mst_i").map(|m| number(m.as_str()));
    ac.mst_i_state = caps.name("mst_i_state").map(|m| m.as_str().to_owned());
    true
}

fn circuit_field(
    ac: &mut DetailCircuit,
    line: &str,
    drop_counters: Option<DropCounterKind>,
) -> bool {
    if let Some(caps) = REGEX_BD_AC_TYPE.captures(line) {
        ac.ac_type = Some(caps["type"].to_owned());
        ac.vlan_num_ranges = caps.name("ranges").map(|m| m.as_str().to_owned());
        // Short type names share their line with the MTU.
        if let Some(rest) = caps.name("rest") {
            return circuit_mtu(ac, rest.as_str());
        }
        return true;
    }
    if circuit_mtu(ac, line) || port_statistics_line(&mut ac.statistics, line)
    {
        return true;
    }
    if let Some(caps) = REGEX_BD_REWRITE.captures(line) {
        ac.rewrite_tags = Some(caps["tags"].to_owned());
        return true;
    }
    if let Some(caps) = REGEX_BD_VLAN_RANGES.captures(line) {
        let ranges = caps["ranges"]
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(str::to_owned)
            .collect();
        ac.vlan_ranges = Some(ranges);
        return true;
    }

    match drop_counters {
        Some(DropCounterKind::StormControl) => {
            if let Some(caps) = REGEX_BD_STORM_COUNTERS.captures(line) {
                let counters = Some(StormCounters {
                    broadcast: caps["broadcast"].to_owned(),
                    multicast: caps["multicast"].to_owned(),
                    unknown_unicast: caps["unknown_unicast"].to_owned(),
                });
                let drops = ac
                    .storm_control_drop_counters
                    .get_or_insert_with(Default::default);
                match &caps["kind"] {
                    "packets" => drops.packets = counters,
                    _ => drops.bytes = counters,
                }
                return true;
            }
        }
        Some(kind) => {
            if let Some(caps) = REGEX_BD_DROP_COUNTERS.captures(line) {
                let counters = Some(DropCounters {
                    packets: caps["packets"].to_owned(),
                    bytes: caps["bytes"].to_owned(),
                });
                match kind {
                    DropCounterKind::DynamicArp => {
                        ac.dynamic_arp_inspection_drop_counters = counters
                    }
                    _ => ac.ip_source_guard_drop_counters = counters,
                }
                return true;
            }
        }
        None => (),
    }

    match setting(line) {
        Some((label, value)) if label == "error" => {
            ac.error = Some(value.to_owned());
            true
        }
        Some((label, value)) => port_setting(&mut ac.port, &label, value),
        None => false,
    }
}

fn pseudowire_field(pw: &mut DetailPseudowire, line: &str) -> bool {
    if let Some(caps) = REGEX_BD_PW_CLASS.captures(line) {
        pw.pw_class = Some(caps["class"].to_owned());
        if let Some(xc_id) = caps.name("xc_id") {
            pw.xc_id = Some(xc_id.as_str().to_owned());
        }
    } else if let Some(caps) = REGEX_BD_XC_ID.captures(line) {
        pw.xc_id = Some(caps["xc_id"].to_owned());
    } else if let Some(caps) = REGEX_BD_ENCAPSULATION.captures(line) {
        pw.encapsulation = Some(caps["encap"].to_owned());
        pw.protocol = caps.name("protocol").map(|m| m.as_str().to_owned());
    } else if let Some(caps) = REGEX_BD_SOURCE.captures(line) {
        pw.source_address = Some(caps["address"].to_owned());
    } else if let Some(caps) = REGEX_BD_PW_TYPE.captures(line) {
        pw.pw_type = Some(caps["type"].to_owned());
        pw.control_word = Some(caps["cw"].to_owned());
        pw.interworking = Some(caps["interworking"].to_owned());
    } else if let Some(caps) = REGEX_BD_ENCAP_TYPE.captures(line) {
        pw.encap_type = Some(caps["type"].to_owned());
        pw.control_word = Some(caps["cw"].to_owned());
    } else if let Some(caps) = REGEX_BD_BACKUP_DELAY.captures(line) {
        pw.pw_backup_disable_delay = Some(number(&caps["delay"]));
    } else if let Some(caps) = REGEX_BD_SEQUENCING.captures(line) {
        pw.sequencing = Some(caps["sequencing"].to_owned());
    } else if let Some(caps) = REGEX_BD_WITHDRAW_MESSAGES.captures(line) {
        pw.mac_withdraw_message = Some(WithdrawMessages {
            send: number(&caps["send"]),
            receive: number(&caps["receive"]),
        });
    } else if port_statistics_line(&mut pw.statistics, line) {
        return true;
    } else if let Some((label, value)) = setting(line) {
        let value_owned = Some(value.to_owned());
        match label.as_str() {
            "lsp" => {
                pw.lsp.get_or_insert_with(Default::default).state = value_owned
            }
            "create time" => pw.create_time = value_owned,
            "last time status changed" => {
                pw.last_time_status_changed = value_owned
            }
            "forward-class" => pw.forward_class = value_owned,
            _ => {
                return bridge_setting(&mut pw.bridge, &label, value)
                    || port_setting(&mut pw.port, &label, value);
            }
        }
    } else {
        return false;
    }
    true
}
