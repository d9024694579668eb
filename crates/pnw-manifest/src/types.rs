//! Fixed schema table and the typed result of a successful validation

use std::fmt;
use std::path::{Path, PathBuf};

use crate::program_id::ProgramId;

pub const TESTNET: &str = "testnet";

/// Manifest location used when no path is given on the command line.
pub const DEFAULT_MANIFEST_PATH: &str = "config/testnet.manifest.json";

/// Architectural tier a program belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProgramGroup {
    Layer1,
    Layer2,
    External,
}

const LAYER1_KEYS: &[&str] = &[
    "pnw_router",
    "pnw_name_registry",
    "worker_profiles",
    "employer_profiles",
    "employer_license_registry",
    "employer_agreement",
    "payroll_core",
    "paystub_receipts",
    "payroll_audit_log",
];

const LAYER2_KEYS: &[&str] = &["payroll_nfts", "credential_nft", "audit_nft"];

const EXTERNAL_KEYS: &[&str] = &["usdcx"];

impl ProgramGroup {
    /// All groups, in validation order
    pub const ALL: [ProgramGroup; 3] = [
        ProgramGroup::Layer1,
        ProgramGroup::Layer2,
        ProgramGroup::External,
    ];

    /// Key under `program_ids` holding this group
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramGroup::Layer1 => "layer1",
            ProgramGroup::Layer2 => "layer2",
            ProgramGroup::External => "external",
        }
    }

    /// Keys that must be present in this group, in validation order
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            ProgramGroup::Layer1 => LAYER1_KEYS,
            ProgramGroup::Layer2 => LAYER2_KEYS,
            ProgramGroup::External => EXTERNAL_KEYS,
        }
    }
}

impl fmt::Display for ProgramGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required program identifier together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEntry {
    pub group: ProgramGroup,
    pub key: &'static str,
    pub id: ProgramId,
}

impl ProgramEntry {
    /// Fully-qualified field path, e.g. `program_ids.layer1.pnw_router`
    pub fn field_path(&self) -> String {
        field_path(self.group, self.key)
    }
}

pub(crate) fn field_path(group: ProgramGroup, key: &str) -> String {
    format!("program_ids.{}.{}", group.as_str(), key)
}

/// A manifest that passed every check.
///
/// Only the required identifiers are carried; extra keys in a group are
/// tolerated by validation but not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedManifest {
    pub schema_version: String,
    pub network: String,
    pub path: PathBuf,
    pub(crate) entries: Vec<ProgramEntry>,
}

impl ValidatedManifest {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a required identifier by group and key.
    pub fn program_id(&self, group: ProgramGroup, key: &str) -> Option<&ProgramId> {
        self.entries
            .iter()
            .find(|entry| entry.group == group && entry.key == key)
            .map(|entry| &entry.id)
    }

    /// All required identifiers, in schema order.
    pub fn program_ids(&self) -> impl Iterator<Item = &ProgramEntry> {
        self.entries.iter()
    }

    /// One-line confirmation, e.g.
    /// `manifest validation: PASS (schema_version=1.0, network=testnet, path=...)`
    pub fn pass_line(&self) -> String {
        format!(
            "manifest validation: PASS (schema_version={}, network={}, path={})",
            self.schema_version,
            self.network,
            self.path.display()
        )
    }
}
