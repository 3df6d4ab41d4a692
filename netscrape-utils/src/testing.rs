//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::path::{Path, PathBuf};
use std::sync::LazyLock as Lazy;
use std::sync::Once;

use similar::TextDiff;
use tracing::{debug_span, info};

use crate::error::Error;
use crate::parser::{self, Entry, Input};

// Environment variable that controls if the expected records need to be
// updated or verified.
static UPDATE_OUTPUTS: Lazy<bool> =
    Lazy::new(|| std::env::var("NETSCRAPE_UPDATE_TEST_OUTPUTS").is_ok());

static INIT: Once = Once::new();

// ===== helper functions =====

// Initializes tracing subscriber.
fn init_tracing() {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_target(false)
        .with_ansi(false)
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .init();

    info!("starting");
}

fn setup() {
    INIT.call_once(init_tracing);
}

fn case_dir(case: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_owned());
    Path::new(&manifest_dir).join("tests/conformance").join(case)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|error| {
        panic!("failed to read {}: {}", path.display(), error)
    })
}

fn assert_record(
    expected: &serde_json::Value,
    actual: &serde_json::Value,
    path: &Path,
) {
    if expected == actual {
        return;
    }

    let expected = serde_json::to_string_pretty(expected).unwrap();
    let actual = serde_json::to_string_pretty(actual).unwrap();
    let diff = TextDiff::from_lines(&expected, &actual);
    panic!(
        "record mismatch for {}:\n{}",
        path.display(),
        diff.unified_diff()
            .context_radius(4)
            .header("expected", "actual")
    );
}

// ===== global functions =====

// Runs a conformance case.
//
// The case directory holds the CLI command (`command`), the device output
// (`output.txt`) and the expected record (`expected.json`). The command is
// resolved through the command templates of `entries`, the output is parsed
// twice and both records must match the expected one.
pub fn run_test(entries: &[Entry], case: &str) {
    setup();

    let span = debug_span!("test", %case);
    let _span_guard = span.enter();

    let dir = case_dir(case);
    let command = read(&dir.join("command"));
    let output = read(&dir.join("output.txt"));
    let path = dir.join("expected.json");

    let (entry, params) = parser::lookup(entries, command.trim())
        .unwrap_or_else(|error| panic!("{}: {}", command.trim(), error));
    let actual = entry
        .run(Input::Output(&output), &params)
        .unwrap_or_else(|error| panic!("{}: {}", command.trim(), error));

    // Update or verify the expected record.
    if *UPDATE_OUTPUTS {
        let data = serde_json::to_string_pretty(&actual).unwrap();
        std::fs::write(&path, data + "\n").unwrap();
    } else {
        let expected = serde_json::from_str(&read(&path)).unwrap();
        assert_record(&expected, &actual, &path);
    }

    // Parsing the same output again must yield the same record.
    let again = entry.run(Input::Output(&output), &params).unwrap();
    assert_record(&actual, &again, &path);
}

// Asserts that parsing empty output fails for every parser in `entries`.
pub fn run_empty_test(entries: &[Entry]) {
    setup();

    for entry in entries {
        // Placeholders bind to their own names, which is as good as any
        // other value here.
        let command = entry.commands[0];
        let (_, params) = parser::lookup(std::slice::from_ref(entry), command)
            .unwrap_or_else(|error| panic!("{}: {}", command, error));
        for output in ["", "\n   \n"] {
            let result = entry.run(Input::Output(output), &params);
            assert!(
                matches!(result, Err(Error::EmptyOutput)),
                "{}: expected empty output error, got {:?}",
                command,
                result
            );
        }
    }
}
