//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::borrow::Cow;
use std::collections::BTreeSet;

use tracing::{debug, debug_span, trace};

use crate::device::Device;
use crate::error::{Error, SchemaError};
use crate::schema::{self, Schema};
use crate::template::{self, Params};

// Where the command output comes from.
pub enum Input<'a> {
    // Run the command on a device.
    Device(&'a mut dyn Device),
    // Output captured beforehand.
    Output(&'a str),
}

// Arguments that shape the command sent to the device.
pub trait Arguments: Sized {
    // Builds the arguments from the values bound by a command template.
    fn from_params(params: &Params) -> Result<Self, Error>;

    // Values used to render the command template.
    fn to_params(&self) -> Params;
}

// A parser for one command, or for a family of commands sharing the same
// output format.
pub trait Parser {
    type Args: Arguments;
    type Output: Schema;

    // Command templates accepted by this parser.
    const COMMANDS: &'static [&'static str];

    // Extracts a record from the command output.
    fn cli(output: &str, args: &Self::Args) -> Self::Output;

    // Selects the command template whose placeholders are exactly the
    // supplied arguments, and renders it.
    fn command(args: &Self::Args) -> Result<String, Error> {
        let params = args.to_params();
        let names = params.names();
        Self::COMMANDS
            .iter()
            .filter(|tmpl| placeholders(tmpl) == names)
            .find_map(|tmpl| template::render(tmpl, &params))
            .ok_or_else(|| Error::UnknownCommand(Self::COMMANDS.join(" | ")))
    }

    // Obtains the command output, extracts the record and validates it.
    fn parse(
        input: Input<'_>,
        args: &Self::Args,
    ) -> Result<Self::Output, Error> {
        let output = match input {
            Input::Device(device) => {
                let command = Self::command(args)?;
                let _span =
                    debug_span!("device", name = %device.name()).entered();
                debug!(%command, "executing command");
                Cow::Owned(device.execute(&command)?)
            }
            Input::Output(output) => Cow::Borrowed(output),
        };

        debug!(parser = %short_name::<Self>(), "parsing command output");
        schema::validate(Self::cli(&output, args))
    }
}

// Type-erased parser entry, used to look up parsers by command.
pub struct Entry {
    pub commands: &'static [&'static str],
    run: fn(Input<'_>, &Params) -> Result<serde_json::Value, Error>,
}

// ===== impl Entry =====

impl Entry {
    pub fn new<P: Parser>() -> Entry {
        Entry {
            commands: P::COMMANDS,
            run: run::<P>,
        }
    }

    pub fn run(
        &self,
        input: Input<'_>,
        params: &Params,
    ) -> Result<serde_json::Value, Error> {
        (self.run)(input, params)
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("commands", &self.commands)
            .finish()
    }
}

// ===== impl () =====

impl Arguments for () {
    fn from_params(_params: &Params) -> Result<(), Error> {
        Ok(())
    }

    fn to_params(&self) -> Params {
        Params::default()
    }
}

// ===== global functions =====

// Finds the parser accepting `command`, along with the values bound by its
// template.
pub fn lookup<'a>(
    entries: &'a [Entry],
    command: &str,
) -> Result<(&'a Entry, Params), Error> {
    entries
        .iter()
        .find_map(|entry| {
            entry.commands.iter().find_map(|tmpl| {
                template::match_template(tmpl, command)
                    .map(|params| (entry, params))
            })
        })
        .ok_or_else(|| Error::UnknownCommand(command.to_owned()))
}

// Splits command output into lines stripped of surrounding whitespace.
pub fn lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim)
}

// Records a line that matched no pattern.
pub fn ignore(line: &str) {
    if !line.is_empty() {
        trace!(%line, "ignoring unrecognized line");
    }
}

// Turns a label such as "Like-to-Like" or "EFP/Invalid AC" into a record
// key ("like_to_like", "efp_invalid_ac").
pub fn key(label: &str) -> String {
    label.trim().to_lowercase().replace([' ', '/', '-'], "_")
}

// Converts a run of digits captured by a pattern.
//
// Values that don't fit in `T` are logged and replaced by zero. Traffic
// counters are therefore captured as `u64`, which holds any counter a
// device prints; `u32` is kept for identifiers and configured values.
pub fn number<T>(value: &str) -> T
where
    T: std::str::FromStr + Default,
{
    value.parse().unwrap_or_else(|_| {
        debug!(%value, "number out of range");
        T::default()
    })
}

fn run<P: Parser>(
    input: Input<'_>,
    params: &Params,
) -> Result<serde_json::Value, Error> {
    let args = P::Args::from_params(params)?;
    let record = P::parse(input, &args)?;
    serde_json::to_value(record)
        .map_err(|error| Error::SchemaMismatch(SchemaError::Serialize(error)))
}

fn placeholders(template: &str) -> BTreeSet<&str> {
    template
        .split_whitespace()
        .filter_map(|t| t.strip_prefix('{').and_then(|t| t.strip_suffix('}')))
        .collect()
}

fn short_name<P: ?Sized>() -> &'static str {
    let name = std::any::type_name::<P>();
    name.rsplit("::").next().unwrap_or(name)
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::*;
    use crate::device::RecordedDevice;

    #[derive(Debug, Default)]
    struct VrfArgs {
        vrf: Option<String>,
    }

    #[derive(Debug, Default, Serialize)]
    #[serde(transparent)]
    struct Words(BTreeMap<String, usize>);

    struct ShowWords;

    impl Arguments for VrfArgs {
        fn from_params(params: &Params) -> Result<VrfArgs, Error> {
            Ok(VrfArgs {
                vrf: params.get_owned("vrf"),
            })
        }

        fn to_params(&self) -> Params {
            self.vrf.iter().map(|vrf| ("vrf", vrf.as_str())).collect()
        }
    }

    impl Schema for Words {}

    impl Parser for ShowWords {
        type Args = VrfArgs;
        type Output = Words;

        const COMMANDS: &'static [&'static str] =
            &["show words", "show words vrf {vrf}"];

        fn cli(output: &str, _args: &VrfArgs) -> Words {
            let mut words = Words::default();
            for line in lines(output).filter(|line| !line.is_empty()) {
                words.0.insert(line.to_owned(), line.len());
            }
            words
        }
    }

    #[test]
    fn command_selection() {
        assert_eq!(ShowWords::command(&VrfArgs::default()).unwrap(), "show words");
        let args = VrfArgs {
            vrf: Some("blue".to_owned()),
        };
        assert_eq!(ShowWords::command(&args).unwrap(), "show words vrf blue");
    }

    #[test]
    fn device_dispatch() {
        let mut device =
            RecordedDevice::new("rt1").with_output("show words vrf red", "alpha\n");
        let args = VrfArgs {
            vrf: Some("red".to_owned()),
        };
        let words = ShowWords::parse(Input::Device(&mut device), &args).unwrap();
        assert_eq!(words.0.get("alpha"), Some(&5));
        assert_eq!(device.history(), ["show words vrf red"]);
    }

    #[test]
    fn output_dispatch() {
        let words =
            ShowWords::parse(Input::Output("  beta \n"), &VrfArgs::default())
                .unwrap();
        assert_eq!(words.0.get("beta"), Some(&4));

        let result = ShowWords::parse(Input::Output(""), &VrfArgs::default());
        assert!(matches!(result, Err(Error::EmptyOutput)));
    }

    #[test]
    fn entry_lookup() {
        let entries = [Entry::new::<ShowWords>()];
        let (entry, params) = lookup(&entries, "show words vrf green").unwrap();
        assert_eq!(params.get("vrf"), Some("green"));
        let value = entry.run(Input::Output("gamma"), &params).unwrap();
        assert_eq!(value, serde_json::json!({ "gamma": 5 }));

        assert!(matches!(
            lookup(&entries, "show clock"),
            Err(Error::UnknownCommand(..))
        ));
    }

    #[test]
    fn label_keys() {
        assert_eq!(key("Like-to-Like"), "like_to_like");
        assert_eq!(key("EFP/Invalid AC"), "efp_invalid_ac");
        assert_eq!(key("Group ID"), "group_id");
    }

    #[test]
    fn number_conversion() {
        assert_eq!(number::<u32>("4000"), 4000);
        assert_eq!(number::<u8>("300"), 0);

        // Counters past 32 bits only survive as u64.
        assert_eq!(number::<u32>("10474510995022"), 0);
        assert_eq!(number::<u64>("10474510995022"), 10474510995022);
        assert_eq!(number::<u64>("18446744073709551616"), 0);
    }
}
