//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use netscrape_utils::testing::{run_empty_test, run_test};

fn run(case: &str) {
    run_test(&netscrape_iosxe::parsers(), case);
}

#[test]
fn empty_output() {
    run_empty_test(&netscrape_iosxe::parsers());
}

// Test description: standard, extended and MAC access lists, including
// unnumbered entries and trailing clauses.
#[test]
fn show_access_lists_ipv4_mac() {
    run("show-access-lists/ipv4-mac");
}

// Test description: named extended access list with options, precedence
// codes and unknown port names.
#[test]
fn show_ip_access_lists_named() {
    run("show-ip-access-lists/named");
}

// Test description: per-user IPv6 access list.
#[test]
fn show_ipv6_access_list_per_user() {
    run("show-ipv6-access-list/per-user");
}
