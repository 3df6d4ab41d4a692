//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;
mod dialect;

use std::io::Read;

use clap::{App, Arg};
use config::{Config, LoggingFmtStyle};
use dialect::Os;
use netscrape_utils::Error;
use netscrape_utils::error::{DeviceError, SchemaError};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

fn init_tracing(config: &config::Logging) {
    // Enable logging to stderr.
    let stderr = config.stderr.enabled.then(|| {
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(config.stderr.show_thread_id)
            .with_file(config.stderr.show_source)
            .with_line_number(config.stderr.show_source)
            .with_ansi(config.stderr.colors);
        let layer = match config.stderr.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(
            "netscrape=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr)
        .init();
}

// Reads the captured command output from a file, or from stdin.
fn read_output(file: Option<&str>) -> Result<String, DeviceError> {
    let output = match file {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut output = String::new();
            std::io::stdin().read_to_string(&mut output)?;
            output
        }
    };
    Ok(output)
}

fn run(
    os: Os,
    command: &str,
    file: Option<&str>,
    pretty: bool,
) -> Result<String, Error> {
    let output = read_output(file)?;
    debug!(?os, %command, "parsing captured output");
    let record = os.parse(command, &output)?;
    let json = match pretty {
        true => serde_json::to_string_pretty(&record),
        false => serde_json::to_string(&record),
    };
    json.map_err(|error| Error::SchemaMismatch(SchemaError::Serialize(error)))
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("Network CLI output parser")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .arg(
            Arg::with_name("os")
                .long("os")
                .value_name("os")
                .possible_values(Os::NAMES)
                .help("Operating system that produced the output."),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("file")
                .help("Read the command output from a file instead of stdin."),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the supported commands and exit."),
        )
        .arg(
            Arg::with_name("command")
                .value_name("command")
                .required_unless("list")
                .help("Command that produced the output."),
        )
        .get_matches();

    // Read configuration file.
    let config = match Config::load(matches.value_of("config")) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to parse configuration file: {error}");
            std::process::exit(1);
        }
    };

    // Initialize tracing.
    init_tracing(&config.logging);

    let os = matches
        .value_of("os")
        .and_then(Os::from_name)
        .or(config.output.default_os);
    let Some(os) = os else {
        error!("no operating system selected");
        std::process::exit(1);
    };

    if matches.is_present("list") {
        println!("{}", os.commands());
        return;
    }

    let command = matches.value_of("command").unwrap_or_default();
    match run(os, command, matches.value_of("file"), config.output.pretty) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            error.log();
            std::process::exit(1);
        }
    }
}
