//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::HashMap;
use std::sync::LazyLock as Lazy;

use regex::Regex;

// Abbreviated interface type prefixes and their full names.
static ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        [
            ("BE", "Bundle-Ether"),
            ("Eth", "Ethernet"),
            ("Fa", "FastEthernet"),
            ("Fo", "FortyGigabitEthernet"),
            ("Gi", "GigabitEthernet"),
            ("Hu", "HundredGigE"),
            ("Lo", "Loopback"),
            ("Po", "Port-channel"),
            ("Se", "Serial"),
            ("Te", "TenGigabitEthernet"),
            ("Tu", "Tunnel"),
            ("Vl", "Vlan"),
        ]
        .into_iter()
        .collect()
    });

static REGEX_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]+)(\d.*)$").unwrap());

// Expands an abbreviated interface name ("Gi0/0/0/1.90") to its full form
// ("GigabitEthernet0/0/0/1.90").
//
// Names that are already complete, or whose type prefix is unknown, are
// returned unchanged.
pub fn normalize(name: &str) -> String {
    REGEX_NAME
        .captures(name)
        .and_then(|caps| {
            ABBREVIATIONS
                .get(&caps[1])
                .map(|full| format!("{}{}", full, &caps[2]))
        })
        .unwrap_or_else(|| name.to_owned())
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand() {
        assert_eq!(normalize("Gi0/0/0/1.90"), "GigabitEthernet0/0/0/1.90");
        assert_eq!(normalize("BE3.100"), "Bundle-Ether3.100");
        assert_eq!(normalize("Eth1/2.120"), "Ethernet1/2.120");
        assert_eq!(normalize("Lo0"), "Loopback0");
        assert_eq!(
            normalize("Te0/0/0/3/1.200"),
            "TenGigabitEthernet0/0/0/3/1.200"
        );
    }

    #[test]
    fn keep() {
        for name in [
            "GigabitEthernet0/0/0/0",
            "Bundle-Ether1",
            "TenGigE1/1/1/4/2.311",
            "HundredGigE0/0/1/1",
            "BV100",
            "BVI3001",
            "Vlan101",
            "Null0",
            "mgmt0",
        ] {
            assert_eq!(normalize(name), name);
        }
    }
}
