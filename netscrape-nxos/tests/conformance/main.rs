//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use netscrape_utils::testing::{run_empty_test, run_test};

fn run(case: &str) {
    run_test(&netscrape_nxos::parsers(), case);
}

#[test]
fn empty_output() {
    run_empty_test(&netscrape_nxos::parsers());
}

// Test description: local, direct, OSPF intra-area and type-2 routes with
// equal-cost paths.
#[test]
fn show_ip_route_default() {
    run("show-ip-route/default");
}

// Test description: VRF routes, including BGP EVPN paths that wrap and are
// left out.
#[test]
fn show_ip_route_vrf_evpn() {
    run("show-ip-route/vrf-evpn");
}

// Test description: two VRF tables with static, IS-IS, OSPF and tagged BGP
// paths.
#[test]
fn show_ip_route_vrf_all() {
    run("show-ip-route/vrf-all");
}

// Test description: route, protocol, interface and VRF filters.
#[test]
fn show_ip_route_route_protocol_interface_vrf() {
    run("show-ip-route/route-protocol-interface-vrf");
}

// Test description: route, protocol and interface filters.
#[test]
fn show_ip_route_route_protocol_interface() {
    run("show-ip-route/route-protocol-interface");
}

// Test description: route, protocol and VRF filters.
#[test]
fn show_ip_route_route_protocol_vrf() {
    run("show-ip-route/route-protocol-vrf");
}

// Test description: protocol, interface and VRF filters.
#[test]
fn show_ip_route_protocol_interface_vrf() {
    run("show-ip-route/protocol-interface-vrf");
}

// Test description: route, interface and VRF filters.
#[test]
fn show_ip_route_route_interface_vrf() {
    run("show-ip-route/route-interface-vrf");
}

// Test description: route and protocol filters.
#[test]
fn show_ip_route_route_protocol() {
    run("show-ip-route/route-protocol");
}

// Test description: protocol and interface filters.
#[test]
fn show_ip_route_protocol_interface() {
    run("show-ip-route/protocol-interface");
}

// Test description: IPv6 tables with a next hop in another address family,
// wrapped tags and an empty VRF.
#[test]
fn show_ipv6_route_vrf_all() {
    run("show-ipv6-route/vrf-all");
}

// Test description: IPv6 EIGRP routes on subinterfaces in two VRFs.
#[test]
fn show_ipv6_route_eigrp() {
    run("show-ipv6-route/eigrp");
}

// Test description: non-best and hidden paths of one route.
#[test]
fn show_ipv6_route_hidden_path() {
    run("show-ipv6-route/hidden-path");
}

// Test description: default and VRF tables with BGP VPN, EVPN/VXLAN, MPLS
// and multicast best paths; an empty VRF table is left out.
#[test]
fn show_routing_vrf_all_all() {
    run("show-routing-vrf-all/all");
}

// Test description: routes of one requested VRF.
#[test]
fn show_routing_vrf_all_vrf() {
    run("show-routing-vrf-all/vrf");
}

// Test description: one attached route with local and direct paths through
// the same next hop.
#[test]
fn show_routing_vrf_all_ip_attached() {
    run("show-routing-vrf-all/ip-attached");
}

// Test description: a best EIGRP path next to non-best BGP and OSPF paths.
#[test]
fn show_routing_vrf_all_ip_non_best() {
    run("show-routing-vrf-all/ip-non-best");
}

// Test description: IPv6 default and VRF tables, with next hops in the IPv4
// default table.
#[test]
fn show_routing_ipv6_vrf_all_all() {
    run("show-routing-ipv6-vrf-all/all");
}

// Test description: IPv6 routes of one VRF.
#[test]
fn show_routing_ipv6_vrf_all_vrf() {
    run("show-routing-ipv6-vrf-all/vrf");
}

// Test description: HSRP, local and direct routes on VLAN interfaces.
#[test]
fn show_routing_ipv6_vrf_all_hsrp() {
    run("show-routing-ipv6-vrf-all/hsrp");
}

// Test description: default table with a next hop in another VRF, a BGP
// next hop in the default table and a static route to Null0.
#[test]
fn show_routing_default() {
    run("show-routing/default");
}
