//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![warn(rust_2018_idioms)]

pub mod acl;

use netscrape_utils::Entry;

// Parsers for IOS-XE commands.
pub fn parsers() -> Vec<Entry> {
    vec![
        Entry::new::<acl::ShowAccessLists>(),
        Entry::new::<acl::ShowIpAccessLists>(),
        Entry::new::<acl::ShowIpv6AccessList>(),
    ]
}
