//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use derive_new::new;
use tracing::debug;

use crate::error::DeviceError;

// Something that runs CLI commands and returns their raw text output.
pub trait Device {
    // Device name used in logs and errors.
    fn name(&self) -> &str;

    // Executes a fully formatted command.
    fn execute(&mut self, command: &str) -> Result<String, DeviceError>;
}

// Device that replays previously captured command outputs.
#[derive(Debug, Default, new)]
pub struct RecordedDevice {
    #[new(into)]
    name: String,
    #[new(default)]
    outputs: BTreeMap<String, String>,
    #[new(default)]
    history: Vec<String>,
}

// ===== impl RecordedDevice =====

impl RecordedDevice {
    // Registers the output returned for `command`.
    pub fn with_output(
        mut self,
        command: impl Into<String>,
        output: impl Into<String>,
    ) -> RecordedDevice {
        self.outputs.insert(command.into(), output.into());
        self
    }

    // Commands executed so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Device for RecordedDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, command: &str) -> Result<String, DeviceError> {
        debug!(device = %self.name, %command, "executing command");
        self.history.push(command.to_owned());
        self.outputs.get(command).cloned().ok_or_else(|| {
            DeviceError::CommandRejected(
                command.to_owned(),
                "no recorded output".to_owned(),
            )
        })
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay() {
        let mut device = RecordedDevice::new("rt1")
            .with_output("show version", "Cisco IOS XR Software");
        assert_eq!(
            device.execute("show version").unwrap(),
            "Cisco IOS XR Software"
        );
        assert!(matches!(
            device.execute("show clock"),
            Err(DeviceError::CommandRejected(..))
        ));
        assert_eq!(device.history(), ["show version", "show clock"]);
    }
}
