//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use netscrape_iosxe::acl::*;
use netscrape_utils::device::RecordedDevice;
use netscrape_utils::{Error, Input, Parser};

fn parse(output: &str) -> AccessLists {
    ShowAccessLists::parse(Input::Output(output), &AclArgs::default()).unwrap()
}

fn sequences(acl: &Acl) -> Vec<u32> {
    let mut seqs = acl
        .aces
        .keys()
        .map(|seq| seq.parse().unwrap())
        .collect::<Vec<u32>>();
    seqs.sort();
    seqs
}

// Auto-numbering compares sequence numbers as integers: once "100" exists,
// the next entry must be "110" even though "90" sorts after "100" as a
// string.
#[test]
fn auto_numbering_integer_max() {
    let mut output = "Standard IP access list 99\n".to_owned();
    for i in 1..=12 {
        output.push_str(&format!("    permit 10.0.0.{i}\n"));
    }

    let acls = parse(&output);
    let acl = &acls.0["99"];
    assert_eq!(sequences(acl), (1..=12).map(|i| i * 10).collect::<Vec<_>>());
    assert_eq!(
        acl.aces["120"].matches.l3["ipv4"]
            .source_network
            .keys()
            .collect::<Vec<_>>(),
        ["10.0.0.12 0.0.0.0"]
    );
    assert_eq!(acl.next_sequence(), 130);
}

// Unnumbered entries continue from the highest number in use, whatever
// path created it.
#[test]
fn auto_numbering_after_explicit() {
    let acls = parse(
        "Standard IP access list 5
            15 permit 10.1.1.1
            permit 10.2.2.2
            40 deny any
            permit 10.3.3.3",
    );
    assert_eq!(sequences(&acls.0["5"]), [15, 25, 40, 50]);

    let acls = parse(
        "Extended MAC access list mac_acl
            permit any any
            deny any host 0000.1111.2222 protocol-family appletalk
            permit any any lsap 0x4242 0x0",
    );
    let acl = &acls.0["mac_acl"];
    assert_eq!(sequences(acl), [10, 20, 30]);
    let eth = &acl.aces["20"].matches.l2.as_ref().unwrap().eth;
    assert_eq!(eth.protocol_family.as_deref(), Some("appletalk"));
    assert_eq!(eth.destination_mac_address, "host 0000.1111.2222");
    assert_eq!(eth.ether_type, None);
    let eth = &acl.aces["30"].matches.l2.as_ref().unwrap().eth;
    assert_eq!(eth.lsap.as_deref(), Some("0x4242 0x0"));
}

#[test]
fn unknown_symbols_are_kept() {
    let acls = parse(
        "Extended IP access list edge
            10 permit tcp any range gopher nonesuch any
            20 permit ip any any option bogus-option",
    );
    let acl = &acls.0["edge"];
    let l4 = &acl.aces["10"].matches.l4["tcp"];
    assert_eq!(
        l4.source_port,
        Some(PortMatch::Range {
            lower_port: Port::Number(70),
            upper_port: Port::Name("nonesuch".to_owned()),
        })
    );
    let l4 = &acl.aces["20"].matches.l4["ipv4"];
    assert_eq!(l4.options, None);
    assert_eq!(l4.options_name.as_deref(), Some("bogus-option"));
}

#[test]
fn entries_without_header_are_ignored() {
    let result = ShowAccessLists::parse(
        Input::Output("10 permit ip any any\npermit 10.0.0.1\n"),
        &AclArgs::default(),
    );
    assert!(matches!(result, Err(Error::EmptyOutput)));
}

#[test]
fn command_variants() {
    let output = "Standard IP access list 7\n    permit any\n";
    let args = AclArgs {
        acl: Some("7".to_owned()),
    };

    for (command, parsed) in [
        ("show access-lists 7", {
            let mut device =
                RecordedDevice::new("rt1").with_output("show access-lists 7", output);
            ShowAccessLists::parse(Input::Device(&mut device), &args)
        }),
        ("show ip access-lists 7", {
            let mut device = RecordedDevice::new("rt1")
                .with_output("show ip access-lists 7", output);
            ShowIpAccessLists::parse(Input::Device(&mut device), &args)
        }),
    ] {
        let acls = parsed.unwrap_or_else(|error| panic!("{command}: {error}"));
        assert_eq!(acls.0["7"].aces["10"].actions.forwarding, "permit");
    }

    assert_eq!(
        ShowIpv6AccessList::command(&AclArgs::default()).unwrap(),
        "show ipv6 access-list"
    );
}

#[test]
fn idempotent() {
    let output = "IPv6 access list v6\n    permit ipv6 any any log sequence 10\n";
    assert_eq!(parse(output), parse(output));
}
