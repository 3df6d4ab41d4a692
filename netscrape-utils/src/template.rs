//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Error;

// Parameter values bound by matching a command against a template.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params(BTreeMap<String, String>);

// ===== impl Params =====

impl Params {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn get_owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub(crate) fn names(&self) -> BTreeSet<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    // Returns the value of a parameter the parser can't run without.
    pub fn required(&self, name: &'static str) -> Result<String, Error> {
        self.get_owned(name).ok_or(Error::MissingArgument(name))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Params {
        Params(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

// ===== global functions =====

// Matches a concrete command against a command template such as
// "show route vrf {vrf} ipv4".
//
// Both are compared token by token after collapsing whitespace. Literal
// tokens match case-insensitively and each placeholder binds exactly one
// token.
pub fn match_template(template: &str, command: &str) -> Option<Params> {
    let tmpl_tokens = template.split_whitespace().collect::<Vec<_>>();
    let cmd_tokens = command.split_whitespace().collect::<Vec<_>>();
    if tmpl_tokens.len() != cmd_tokens.len() {
        return None;
    }

    let mut params = Params::default();
    for (tmpl, token) in tmpl_tokens.iter().zip(cmd_tokens) {
        match tmpl.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
            Some(name) => params.insert(name, token),
            None if tmpl.eq_ignore_ascii_case(token) => (),
            None => return None,
        }
    }
    Some(params)
}

// Renders a command template, returning `None` if a placeholder has no
// value.
pub fn render(template: &str, params: &Params) -> Option<String> {
    let tokens = template
        .split_whitespace()
        .map(|tmpl| {
            match tmpl.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
                Some(name) => params.get(name),
                None => Some(tmpl),
            }
        })
        .collect::<Option<Vec<_>>>()?;
    Some(tokens.join(" "))
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_match() {
        let params =
            match_template("show route vrf {vrf} ipv4", "show  route vrf all ipv4")
                .unwrap();
        assert_eq!(params.get("vrf"), Some("all"));

        assert_eq!(
            match_template("show l2vpn bridge-domain", "SHOW l2vpn bridge-domain"),
            Some(Params::default())
        );
        assert!(match_template("show route ipv4", "show route ipv6").is_none());
        assert!(
            match_template("show route vrf {vrf} ipv4", "show route ipv4")
                .is_none()
        );
    }

    #[test]
    fn template_render() {
        let params = [("location", "0/0/CPU0")].into_iter().collect::<Params>();
        assert_eq!(
            render(
                "show l2vpn forwarding protection main-interface location {location}",
                &params
            )
            .as_deref(),
            Some(
                "show l2vpn forwarding protection main-interface location 0/0/CPU0"
            )
        );
        assert!(render("show ipv6 neighbors vrf {vrf}", &params).is_none());
    }

    #[test]
    fn required_param() {
        let params = Params::default();
        assert!(matches!(
            params.required("location"),
            Err(Error::MissingArgument("location"))
        ));
    }
}
