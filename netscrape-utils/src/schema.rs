//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::Serialize;

use crate::error::{Error, SchemaError};

// Output record of a parser.
//
// The structure of the implementing type declares which keys are required
// (plain fields) and which are optional (`Option` fields or maps skipped when
// empty). `check` covers the required keys that a parser can only fill in
// from lines that may be absent from the command output.
pub trait Schema: Serialize {
    fn check(&self) -> Result<(), SchemaError> {
        Ok(())
    }
}

// ===== global functions =====

// Validates a fully built record.
//
// A record that serializes to an empty mapping is rejected as empty output
// before any structural check takes place.
pub fn validate<T: Schema>(record: T) -> Result<T, Error> {
    let value = serde_json::to_value(&record).map_err(SchemaError::Serialize)?;
    let empty = match &value {
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Null => true,
        _ => false,
    };
    if empty {
        return Err(Error::EmptyOutput);
    }

    record.check()?;
    Ok(record)
}

// Returns an error naming `path` when a required key wasn't filled in.
pub fn require<T>(value: &Option<T>, path: &str) -> Result<(), SchemaError> {
    match value {
        Some(_) => Ok(()),
        None => Err(SchemaError::MissingKey(path.to_owned())),
    }
}

// Returns an error when `value` isn't one of the accepted values.
pub fn one_of(
    value: &str,
    accepted: &[&str],
    path: &str,
) -> Result<(), SchemaError> {
    if accepted.contains(&value) {
        Ok(())
    } else {
        Err(SchemaError::InvalidValue(path.to_owned(), value.to_owned()))
    }
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Default, Serialize)]
    struct Summary {
        #[serde(skip_serializing_if = "Option::is_none")]
        total: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        up: Option<u32>,
    }

    impl Schema for Summary {
        fn check(&self) -> Result<(), SchemaError> {
            require(&self.total, "total")?;
            require(&self.up, "up")
        }
    }

    #[derive(Debug, Default, Serialize)]
    #[serde(transparent)]
    struct Table(BTreeMap<String, u32>);

    impl Schema for Table {}

    #[test]
    fn empty_record() {
        let error = validate(Summary::default()).unwrap_err();
        assert!(matches!(error, Error::EmptyOutput));
        let error = validate(Table::default()).unwrap_err();
        assert!(matches!(error, Error::EmptyOutput));
    }

    #[test]
    fn missing_required_key() {
        let summary = Summary {
            total: Some(1),
            up: None,
        };
        let error = validate(summary).unwrap_err();
        assert!(matches!(
            error,
            Error::SchemaMismatch(SchemaError::MissingKey(ref path))
                if path == "up"
        ));
    }

    #[test]
    fn valid_record() {
        let table = Table(maplit::btreemap! { "a".to_owned() => 1 });
        assert!(validate(table).is_ok());
    }

    #[test]
    fn invalid_value() {
        assert!(one_of("up", &["up", "down"], "state").is_ok());
        assert!(matches!(
            one_of("sideways", &["up", "down"], "state"),
            Err(SchemaError::InvalidValue(..))
        ));
    }
}
