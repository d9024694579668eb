//! Manifest validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! file exists, JSON parses, root is an object, `schema_version`, `network`,
//! `program_ids`, then each group and each required key within it.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::errors::ManifestError;
use crate::program_id::ProgramId;
use crate::types::{field_path, ProgramEntry, ProgramGroup, ValidatedManifest, TESTNET};

/// Validation parameters: the network a manifest must target and the groups
/// whose required keys are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSchema {
    network: &'static str,
    groups: &'static [ProgramGroup],
}

impl Default for ManifestSchema {
    fn default() -> Self {
        Self::testnet()
    }
}

impl ManifestSchema {
    pub const fn testnet() -> Self {
        ManifestSchema {
            network: TESTNET,
            groups: &ProgramGroup::ALL,
        }
    }

    /// Read and validate the manifest at `path`.
    pub fn validate_file(&self, path: &Path) -> Result<ValidatedManifest, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::PathNotFound(path.to_path_buf()));
        }

        debug!("Reading manifest from {:?}", path);
        let bytes = fs::read(path).map_err(ManifestError::Read)?;
        let document: Value = serde_json::from_slice(&bytes)?;
        self.validate_value(&document, path)
    }

    /// Validate manifest text that has already been read from `path`.
    pub fn validate_str(
        &self,
        source: &str,
        path: &Path,
    ) -> Result<ValidatedManifest, ManifestError> {
        let document: Value = serde_json::from_str(source)?;
        self.validate_value(&document, path)
    }

    /// Validate an already-parsed document. `path` is only carried into the
    /// result.
    pub fn validate_value(
        &self,
        document: &Value,
        path: &Path,
    ) -> Result<ValidatedManifest, ManifestError> {
        let Some(root) = document.as_object() else {
            return Err(ManifestError::schema("manifest root must be an object"));
        };

        let schema_version = expect_str(root, "schema_version")?;
        let network = expect_str(root, "network")?;
        if network != self.network {
            return Err(ManifestError::schema(format!(
                "network must be '{}' (got '{}')",
                self.network, network
            )));
        }

        let Some(program_ids) = root.get("program_ids").and_then(Value::as_object) else {
            return Err(ManifestError::schema("'program_ids' must be an object"));
        };

        let mut entries = Vec::new();
        for &group in self.groups {
            let Some(section) = program_ids.get(group.as_str()).and_then(Value::as_object) else {
                return Err(ManifestError::schema(format!(
                    "'program_ids.{}' must be an object",
                    group
                )));
            };

            for &key in group.required_keys() {
                let id = section
                    .get(key)
                    .and_then(Value::as_str)
                    .and_then(ProgramId::parse)
                    .ok_or_else(|| {
                        ManifestError::schema(format!(
                            "'{}' must be a *.aleo program id",
                            field_path(group, key)
                        ))
                    })?;
                trace!("{} = {}", field_path(group, key), id);
                entries.push(ProgramEntry { group, key, id });
            }
        }

        debug!(
            "Manifest valid: schema_version={}, network={}, {} program ids",
            schema_version,
            network,
            entries.len()
        );

        Ok(ValidatedManifest {
            schema_version,
            network,
            path: path.to_path_buf(),
            entries,
        })
    }
}

/// Read and validate the manifest at `path` against the testnet schema.
pub fn validate(path: &Path) -> Result<ValidatedManifest, ManifestError> {
    ManifestSchema::testnet().validate_file(path)
}

/// Validate manifest text against the testnet schema.
pub fn validate_str(source: &str, path: &Path) -> Result<ValidatedManifest, ManifestError> {
    ManifestSchema::testnet().validate_str(source, path)
}

/// Whitespace stripped from string fields: Unicode whitespace plus the ASCII
/// information separators `\x1c`..=`\x1f`.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn expect_str(root: &Map<String, Value>, key: &str) -> Result<String, ManifestError> {
    root.get(key)
        .and_then(Value::as_str)
        .map(|value| value.trim_matches(is_strippable))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ManifestError::schema(format!("missing/invalid string field '{}'", key))
        })
}
