//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![warn(rust_2018_idioms)]

pub mod rib;
pub mod routing;

use netscrape_utils::Entry;

// Parsers for NX-OS commands.
//
// "show routing ipv6 ..." comes first, or the IPv4 templates would read
// "ipv6" as a route.
pub fn parsers() -> Vec<Entry> {
    vec![
        Entry::new::<rib::ShowRoutingIpv6VrfAll>(),
        Entry::new::<rib::ShowRoutingVrfAll>(),
        Entry::new::<rib::ShowRouting>(),
        Entry::new::<routing::ShowIpRoute>(),
        Entry::new::<routing::ShowIpv6Route>(),
    ]
}
