//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use maplit::btreemap;
use netscrape_nxos::rib::{
    RoutingArgs, ShowRoutingIpv6VrfAll, ShowRoutingVrfAll,
};
use netscrape_nxos::routing::*;
use netscrape_utils::device::RecordedDevice;
use netscrape_utils::{Error, Input, Parser, parser};

const RIP_ROUTE: &str = "
    10.12.120.0/24, ubest/mbest: 2/0
        *via 10.13.120.1, Eth1/2.120, [120/2], 2w0d, rip-1, rip
        *via 10.23.120.2, Eth1/1.120, [120/2], 2w0d, rip-1, rip
";

fn rip_path(index: u32, next_hop: &str, interface: &str) -> NextHop {
    NextHop {
        index,
        next_hop: next_hop.to_owned(),
        outgoing_interface: Some(interface.to_owned()),
        best_ucast_nexthop: Some(true),
        updated: "2w0d".to_owned(),
        source_protocol: "rip".to_owned(),
        source_protocol_status: Some("rip".to_owned()),
        ..Default::default()
    }
}

#[test]
fn filtered_command_on_device() {
    let command = "show ip route 10.12.120.0/24 rip vrf default";
    let mut device = RecordedDevice::new("n9k").with_output(command, RIP_ROUTE);
    let args = RouteArgs {
        route: Some("10.12.120.0/24".to_owned()),
        protocol: Some("rip".to_owned()),
        vrf: Some("default".to_owned()),
        ..Default::default()
    };

    let table = ShowIpRoute::parse(Input::Device(&mut device), &args).unwrap();
    assert_eq!(device.history(), [command]);

    let route =
        &table.vrf["default"].address_family["ipv4"].routes["10.12.120.0/24"];
    assert_eq!(route.ubest, 2);
    assert_eq!(route.process_id.as_deref(), Some("1"));
    assert_eq!(
        route.next_hop.as_ref().unwrap().next_hop_list,
        btreemap! {
            1 => rip_path(1, "10.13.120.1", "Ethernet1/2.120"),
            2 => rip_path(2, "10.23.120.2", "Ethernet1/1.120"),
        }
    );
}

#[test]
fn command_rendering() {
    let args = RouteArgs {
        interface: Some("e1/1.120".to_owned()),
        vrf: Some("VRF1".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        ShowIpv6Route::command(&args).unwrap(),
        "show ipv6 route interface e1/1.120 vrf VRF1"
    );
    assert_eq!(
        ShowIpRoute::command(&RouteArgs::default()).unwrap(),
        "show ip route"
    );
}

#[test]
fn missing_vrf_table() {
    let args = RouteArgs {
        vrf: Some("VRF3".to_owned()),
        ..Default::default()
    };
    let result = ShowIpv6Route::parse(
        Input::Output("No IP Route Table for VRF \"VRF3\"\n"),
        &args,
    );
    assert!(matches!(result, Err(Error::EmptyOutput)));
}

#[test]
fn idempotent() {
    let args = RouteArgs::default();
    let first = ShowIpRoute::parse(Input::Output(RIP_ROUTE), &args).unwrap();
    let second = ShowIpRoute::parse(Input::Output(RIP_ROUTE), &args).unwrap();
    assert_eq!(first, second);
}

#[test]
fn routing_command_lookup() {
    let entries = netscrape_nxos::parsers();

    let (entry, params) =
        parser::lookup(&entries, "show routing ipv6 vrf VRF1").unwrap();
    assert_eq!(entry.commands, ShowRoutingIpv6VrfAll::COMMANDS);
    assert_eq!(params.get("vrf"), Some("VRF1"));
    assert_eq!(params.get("ip"), None);

    let (entry, params) =
        parser::lookup(&entries, "show routing 10.4.1.1 vrf VRF1").unwrap();
    assert_eq!(entry.commands, ShowRoutingVrfAll::COMMANDS);
    assert_eq!(params.get("ip"), Some("10.4.1.1"));

    let (entry, _) = parser::lookup(&entries, "show routing").unwrap();
    assert_eq!(entry.commands, ["show routing"]);
}

#[test]
fn routing_command_rendering() {
    assert_eq!(
        ShowRoutingVrfAll::command(&RoutingArgs::default()).unwrap(),
        "show routing vrf all"
    );
    let args = RoutingArgs {
        ip: Some("10.36.3.3".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        ShowRoutingVrfAll::command(&args).unwrap(),
        "show routing 10.36.3.3"
    );
}

// Table headers without routes leave nothing to report.
#[test]
fn routing_without_routes() {
    let output = "
        IP Route Table for VRF \"management\"
        '*' denotes best ucast next-hop
        '**' denotes best mcast next-hop
        '[x/y]' denotes [preference/metric]
    ";
    let args = RoutingArgs::default();
    let result = ShowRoutingVrfAll::parse(Input::Output(output), &args);
    assert!(matches!(result, Err(Error::EmptyOutput)));
}
