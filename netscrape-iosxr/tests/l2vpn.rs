//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use netscrape_iosxr::l2vpn::*;
use netscrape_iosxr::routing::{RouteArgs, ShowRouteIpv4};
use netscrape_iosxr::xconnect::*;
use netscrape_utils::device::RecordedDevice;
use netscrape_utils::error::SchemaError;
use netscrape_utils::{Arguments, Error, Input, Params, Parser, parser};

const SUMMARY: &str = "
    Device1# show l2vpn bridge-domain summary

    Number of groups: 1, bridge-domains: 1, Up: 1, Shutdown: 0
    Number of ACs: 1 Up: 1, Down: 0
    Number of PWs: 1 Up: 1, Down: 0
";

#[test]
fn bridge_domain_summary() {
    let summary =
        ShowL2vpnBridgeDomainSummary::parse(Input::Output(SUMMARY), &()).unwrap();
    assert_eq!(
        summary,
        BridgeDomainSummary {
            number_of_groups: Some(1),
            bridge_domains: Some(BridgeDomainCounters {
                total: 1,
                up: 1,
                shutdown: 0,
            }),
            ac: Some(UpDownCounters {
                total: 1,
                up: 1,
                down: 0,
            }),
            pw: Some(UpDownCounters {
                total: 1,
                up: 1,
                down: 0,
            }),
        }
    );

    // Parsing is free of side effects.
    let again =
        ShowL2vpnBridgeDomainSummary::parse(Input::Output(SUMMARY), &()).unwrap();
    assert_eq!(summary, again);
}

#[test]
fn bridge_domain_summary_from_device() {
    let mut device = RecordedDevice::new("pe1")
        .with_output("show l2vpn bridge-domain summary", SUMMARY);
    let summary =
        ShowL2vpnBridgeDomainSummary::parse(Input::Device(&mut device), &())
            .unwrap();
    assert_eq!(summary.number_of_groups, Some(1));
    assert_eq!(device.history(), ["show l2vpn bridge-domain summary"]);
}

// Counters without the group line leave required keys unset.
#[test]
fn bridge_domain_summary_missing_groups() {
    let result = ShowL2vpnBridgeDomainSummary::parse(
        Input::Output("Number of ACs: 4 Up: 3, Down: 1\n"),
        &(),
    );
    assert!(matches!(
        result,
        Err(Error::SchemaMismatch(SchemaError::MissingKey(key)))
            if key == "number_of_groups"
    ));
}

#[test]
fn xconnect_summary_missing_xconnects() {
    let result = ShowL2vpnXconnectSummary::parse(
        Input::Output("Number of groups: 2\n"),
        &(),
    );
    assert!(matches!(
        result,
        Err(Error::SchemaMismatch(SchemaError::MissingKey(key)))
            if key == "number_of_xconnects"
    ));
}

#[test]
fn location_is_required() {
    let result = ForwardingArgs::from_params(&Params::default());
    assert!(matches!(result, Err(Error::MissingArgument("location"))));

    let result = LocationArgs::from_params(&Params::default());
    assert!(matches!(result, Err(Error::MissingArgument("location"))));
}

#[test]
fn forwarding_command_selection() {
    let args = ForwardingArgs {
        bridge_domain: Some("bg1:bd1".to_owned()),
        location: "0/0/CPU0".to_owned(),
    };
    assert_eq!(
        ShowL2vpnForwardingBridgeDomainMacAddress::command(&args).unwrap(),
        "show l2vpn forwarding bridge-domain bg1:bd1 mac-address location 0/0/CPU0"
    );
}

#[test]
fn mac_learning_defaults() {
    let args = MacLearningArgs::from_params(&Params::default()).unwrap();
    assert_eq!(
        ShowL2vpnMacLearning::command(&args).unwrap(),
        "show l2vpn mac-learning mac all location 0/0/CPU0"
    );
}

// A VRF reporting "No matching routes" contributes nothing and doesn't stop
// the VRFs that follow.
#[test]
fn route_vrf_without_routes() {
    let output = "
        VRF: blue

        % No matching routes found

        VRF: red

        C    10.1.1.0/24 is directly connected, 00:01:02, GigabitEthernet0/0/0/0
    ";
    let args = RouteArgs {
        vrf: Some("all".to_owned()),
    };
    let table = ShowRouteIpv4::parse(Input::Output(output), &args).unwrap();
    assert_eq!(table.vrf.keys().collect::<Vec<_>>(), ["red"]);

    let result = ShowRouteIpv4::parse(
        Input::Output("VRF: blue\n% No matching routes found\n"),
        &args,
    );
    assert!(matches!(result, Err(Error::EmptyOutput)));
}

#[test]
fn command_lookup() {
    let entries = netscrape_iosxr::parsers();

    let (entry, params) =
        parser::lookup(&entries, "show ipv6 neighbors detail").unwrap();
    assert_eq!(entry.commands, ["show ipv6 neighbors detail"]);
    assert_eq!(params, Params::default());

    let (_, params) =
        parser::lookup(&entries, "show ipv6 neighbors Gi0/0/0/0.390").unwrap();
    assert_eq!(params.get("interface"), Some("Gi0/0/0/0.390"));

    let (entry, _) =
        parser::lookup(&entries, "show l2vpn bridge-domain detail").unwrap();
    assert_eq!(entry.commands, ["show l2vpn bridge-domain detail"]);

    let (entry, _) =
        parser::lookup(&entries, "show l2vpn bridge-domain").unwrap();
    assert_eq!(entry.commands, ["show l2vpn bridge-domain"]);
}

const BRIDGE_DOMAIN_DETAIL: &str = "
    Bridge group: g1, bridge-domain: bd1, id: 0, state: up, ShgId: 0, MSTi: 0
      MAC learning: enabled
      Split Horizon Group: none
      ACs: 1 (1 up), VFIs: 0, PWs: 0 (0 up)
      List of ACs:
        AC: BVI100, state is up
          Type Routed-Interface
          MTU 1514; XC ID 0x80000006; interworking none
          BVI MAC address:
            1000.10ff.1111
          Split Horizon Group: Access
          packet totals: receive 10474510995022,send 10305221406
";

// Bridge-wide settings listed under an AC update the bridge domain, and
// counters keep their full 64-bit values.
#[test]
fn bridge_domain_detail_settings_under_ac() {
    let details = ShowL2vpnBridgeDomainDetail::parse(
        Input::Output(BRIDGE_DOMAIN_DETAIL),
        &(),
    )
    .unwrap();
    let bd = &details.bridge_group["g1"].bridge_domain["bd1"];
    assert_eq!(bd.bridge.split_horizon_group.as_deref(), Some("Access"));
    assert_eq!(bd.port.mac_learning.as_deref(), Some("enabled"));

    let ac = &bd.ac.as_ref().unwrap().interfaces["BVI100"];
    assert_eq!(ac.ac_type.as_deref(), Some("Routed-Interface"));
    assert_eq!(ac.mtu, Some(1514));
    assert_eq!(ac.bvi_mac_address, ["1000.10ff.1111"]);
    assert_eq!(
        ac.statistics.as_ref().unwrap().packet_totals,
        Some(Totals {
            receive: Some(10474510995022),
            send: Some(10305221406),
        })
    );
}
