//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![warn(rust_2018_idioms)]

pub mod ipv6;
pub mod l2vpn;
pub mod routing;
pub mod xconnect;

use netscrape_utils::Entry;

// Parsers for IOS-XR commands.
//
// Parsers with literal commands come before the ones whose templates could
// capture the same words as placeholder values.
pub fn parsers() -> Vec<Entry> {
    vec![
        Entry::new::<ipv6::ShowIpv6NeighborsDetail>(),
        Entry::new::<ipv6::ShowIpv6Neighbors>(),
        Entry::new::<l2vpn::ShowL2vpnMacLearning>(),
        Entry::new::<l2vpn::ShowL2vpnForwardingBridgeDomainMacAddress>(),
        Entry::new::<l2vpn::ShowL2vpnForwardingProtectionMainInterface>(),
        Entry::new::<l2vpn::ShowL2vpnBridgeDomainBrief>(),
        Entry::new::<l2vpn::ShowL2vpnBridgeDomainSummary>(),
        Entry::new::<l2vpn::ShowL2vpnBridgeDomainDetail>(),
        Entry::new::<l2vpn::ShowL2vpnBridgeDomain>(),
        Entry::new::<routing::ShowRouteIpv4>(),
        Entry::new::<routing::ShowRouteIpv6>(),
        Entry::new::<xconnect::ShowL2vpnXconnectBrief>(),
        Entry::new::<xconnect::ShowL2vpnXconnectSummary>(),
        Entry::new::<xconnect::ShowL2vpnXconnectDetail>(),
        Entry::new::<xconnect::ShowL2vpnXconnectMp2mpDetail>(),
        Entry::new::<xconnect::ShowL2vpnXconnect>(),
    ]
}
