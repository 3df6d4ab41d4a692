//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use netscrape_utils::testing::{run_empty_test, run_test};

fn run(case: &str) {
    run_test(&netscrape_iosxr::parsers(), case);
}

#[test]
fn empty_output() {
    run_empty_test(&netscrape_iosxr::parsers());
}

// Test description: IPv6 neighbors on several subinterfaces, with multicast
// adjacencies.
#[test]
fn show_ipv6_neighbors_all() {
    run("show-ipv6-neighbors/all");
}

// Test description: IPv6 neighbors of one interface.
#[test]
fn show_ipv6_neighbors_interface() {
    run("show-ipv6-neighbors/interface");
}

// Test description: IPv6 neighbors of one VRF.
#[test]
fn show_ipv6_neighbors_vrf() {
    run("show-ipv6-neighbors/vrf");
}

// Test description: IPv6 neighbors of one interface in a VRF.
#[test]
fn show_ipv6_neighbors_vrf_interface() {
    run("show-ipv6-neighbors/vrf-interface");
}

// Test description: IPv6 neighbor flags padded with non-breaking spaces, and
// the derived origin.
#[test]
fn show_ipv6_neighbors_detail_golden() {
    run("show-ipv6-neighbors-detail/golden");
}

// Test description: bridge domains with EVPN members and AC lists.
#[test]
fn show_l2vpn_bridge_domain_evpn() {
    run("show-l2vpn-bridge-domain/evpn");
}

// Test description: bridge domains with VFIs and their pseudowires.
#[test]
fn show_l2vpn_bridge_domain_vfi() {
    run("show-l2vpn-bridge-domain/vfi");
}

// Test description: one row per bridge domain with AC and PW counters.
#[test]
fn show_l2vpn_bridge_domain_brief_golden() {
    run("show-l2vpn-bridge-domain-brief/golden");
}

// Test description: group, bridge domain, AC and PW counters.
#[test]
fn show_l2vpn_bridge_domain_summary_golden() {
    run("show-l2vpn-bridge-domain-summary/golden");
}

// Test description: bridge domain with an AC, an access pseudowire slot and
// a VFI whose pseudowire carries an MPLS label table.
#[test]
fn show_l2vpn_bridge_domain_detail_vfi() {
    run("show-l2vpn-bridge-domain-detail/vfi");
}

// Test description: the second interface row of a neighbor's pseudowires
// is reported as the monitor interface.
#[test]
fn show_l2vpn_bridge_domain_detail_vfi_monitor_session() {
    run("show-l2vpn-bridge-domain-detail/vfi-monitor-session");
}

// Test description: EVPN-IRB bridge domain with an EVPN member, a BVI
// and sub-interface ACs with drop counters.
#[test]
fn show_l2vpn_bridge_domain_detail_evpn() {
    run("show-l2vpn-bridge-domain-detail/evpn");
}

// Test description: access pseudowire with an EVPN label table and packet
// counters beyond 32 bits.
#[test]
fn show_l2vpn_bridge_domain_detail_evpn_access_pw() {
    run("show-l2vpn-bridge-domain-detail/evpn-access-pw");
}

// Test description: dynamic MAC entries learned from interfaces and
// pseudowires.
#[test]
fn show_l2vpn_forwarding_bridge_domain_mac_address_dynamic() {
    run("show-l2vpn-forwarding-bridge-domain-mac-address/dynamic");
}

// Test description: EVPN MAC entries learned from a bridge domain id.
#[test]
fn show_l2vpn_forwarding_bridge_domain_mac_address_evpn() {
    run("show-l2vpn-forwarding-bridge-domain-mac-address/evpn");
}

// Test description: protection state of main interface instances.
#[test]
fn show_l2vpn_forwarding_protection_main_interface_interfaces() {
    run("show-l2vpn-forwarding-protection-main-interface/interfaces");
}

// Test description: protection state of VFI pseudowire instances.
#[test]
fn show_l2vpn_forwarding_protection_main_interface_vfi_pw() {
    run("show-l2vpn-forwarding-protection-main-interface/vfi-pw");
}

// Test description: learned MAC and IP addresses per topology, producer and
// next hop.
#[test]
fn show_l2vpn_mac_learning_golden() {
    run("show-l2vpn-mac-learning/golden");
}

// Test description: EVPN segments whose status wraps to the next line.
#[test]
fn show_l2vpn_xconnect_evpn_status_wrap() {
    run("show-l2vpn-xconnect/evpn-status-wrap");
}

// Test description: group and xconnect name on a line of their own.
#[test]
fn show_l2vpn_xconnect_group_and_name() {
    run("show-l2vpn-xconnect/group-and-name");
}

// Test description: L2TPv3 pseudowire segments.
#[test]
fn show_l2vpn_xconnect_l2tpv3() {
    run("show-l2vpn-xconnect/l2tpv3");
}

// Test description: long group and xconnect names wrapped over two lines.
#[test]
fn show_l2vpn_xconnect_wrapped_names() {
    run("show-l2vpn-xconnect/wrapped-names");
}

// Test description: EFP counters in the locally switching and AToM sections.
#[test]
fn show_l2vpn_xconnect_brief_efp() {
    run("show-l2vpn-xconnect-brief/efp");
}

// Test description: Ethernet counters in the like-to-like block.
#[test]
fn show_l2vpn_xconnect_brief_ether() {
    run("show-l2vpn-xconnect-brief/ether");
}

// Test description: totals only.
#[test]
fn show_l2vpn_xconnect_brief_total_only() {
    run("show-l2vpn-xconnect-brief/total-only");
}

// Test description: AC, primary and backup pseudowires with label tables and
// statistics.
#[test]
fn show_l2vpn_xconnect_detail_backup_pw() {
    run("show-l2vpn-xconnect-detail/backup-pw");
}

// Test description: EVPN segment with its label table and continuation rows.
#[test]
fn show_l2vpn_xconnect_detail_evpn() {
    run("show-l2vpn-xconnect-detail/evpn");
}

// Test description: MP2MP instance with auto-discovery, route targets and
// BGP signaling.
#[test]
fn show_l2vpn_xconnect_mp2mp_detail_bgp() {
    run("show-l2vpn-xconnect-mp2mp-detail/bgp");
}

// Test description: counter blocks for groups, xconnects, MP2MP and backups.
#[test]
fn show_l2vpn_xconnect_summary_golden() {
    run("show-l2vpn-xconnect-summary/golden");
}

// Test description: IS-IS routes with FRR backup paths.
#[test]
fn show_route_ipv4_backup_path() {
    run("show-route-ipv4/backup-path");
}

// Test description: OSPF external routes, including a combined code.
#[test]
fn show_route_ipv4_ospf_external() {
    run("show-route-ipv4/ospf-external");
}

// Test description: static, connected, IS-IS and BGP routes.
#[test]
fn show_route_ipv4_static() {
    run("show-route-ipv4/static");
}

// Test description: several VRFs, the last one without routes.
#[test]
fn show_route_ipv4_vrf_all() {
    run("show-route-ipv4/vrf-all");
}

// Test description: one VRF with next hops in another VRF.
#[test]
fn show_route_ipv4_vrf_name() {
    run("show-route-ipv4/vrf-name");
}

// Test description: several VRFs with wrapped IPv6 routes, the last one
// without routes.
#[test]
fn show_route_ipv6_vrf_all() {
    run("show-route-ipv6/vrf-all");
}

// Test description: IPv6 routes whose paths wrap to the next lines.
#[test]
fn show_route_ipv6_wrapped() {
    run("show-route-ipv6/wrapped");
}
