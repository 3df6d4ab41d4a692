//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![allow(clippy::derivable_impls)]

use serde::Deserialize;

use crate::dialect::Os;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: Logging,
    pub output: Output,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    pub stderr: LoggingStderr,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingStderr {
    pub enabled: bool,
    pub style: LoggingFmtStyle,
    pub colors: bool,
    pub show_thread_id: bool,
    pub show_source: bool,
}

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingFmtStyle {
    #[default]
    Compact,
    Full,
    Json,
    Pretty,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Output {
    pub pretty: bool,
    pub default_os: Option<Os>,
}

// ===== impl Config =====

impl Config {
    const DFLT_FILEPATH: &'static str = "/etc/netscrape.toml";

    // Reads the configuration file, falling back to the defaults when it
    // can't be read. A file that fails to parse is an error.
    pub(crate) fn load(
        config_file: Option<&str>,
    ) -> Result<Config, toml::de::Error> {
        let config_file = config_file.unwrap_or(Config::DFLT_FILEPATH);

        match std::fs::read_to_string(config_file) {
            Ok(config_str) => toml::from_str(&config_str),
            Err(err) => {
                eprintln!("Failed to load configuration file: {err}");
                eprintln!("Falling back to default configuration...");
                Ok(Config::default())
            }
        }
    }
}

// ===== impl LoggingStderr =====

impl Default for LoggingStderr {
    fn default() -> LoggingStderr {
        LoggingStderr {
            enabled: true,
            style: Default::default(),
            colors: false,
            show_thread_id: false,
            show_source: false,
        }
    }
}

// ===== impl Output =====

impl Default for Output {
    fn default() -> Output {
        Output {
            pretty: true,
            default_os: None,
        }
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.logging.stderr.enabled);
        assert_eq!(config.logging.stderr.style, LoggingFmtStyle::Compact);
        assert!(config.output.pretty);
        assert_eq!(config.output.default_os, None);
    }

    #[test]
    fn sections() {
        let config: Config = toml::from_str(
            r#"
            [logging.stderr]
            style = "json"
            show_source = true

            [output]
            pretty = false
            default_os = "nxos"
            "#,
        )
        .unwrap();
        assert!(config.logging.stderr.enabled);
        assert_eq!(config.logging.stderr.style, LoggingFmtStyle::Json);
        assert!(config.logging.stderr.show_source);
        assert!(!config.output.pretty);
        assert_eq!(config.output.default_os, Some(Os::Nxos));
    }

    #[test]
    fn unknown_fields() {
        assert!(toml::from_str::<Config>("[output]\ncolor = true\n").is_err());
        assert!(toml::from_str::<Config>("[database]\n").is_err());
        assert!(
            toml::from_str::<Config>("[output]\ndefault_os = \"junos\"\n")
                .is_err()
        );
    }

    #[test]
    fn missing_file() {
        let config =
            Config::load(Some("/nonexistent/netscrape.toml")).unwrap();
        assert!(config.output.pretty);
    }
}
