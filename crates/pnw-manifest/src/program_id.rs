//! Aleo program identifiers
//!
//! A program identifier is one or more lowercase ASCII letters, digits or
//! underscores followed by the literal `.aleo` suffix, e.g. `payroll_core.aleo`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const ALEO_SUFFIX: &str = ".aleo";

const ALEO_PROGRAM_ID_PATTERN: &str = r"^[a-z0-9_]+\.aleo$";

static ALEO_PROGRAM_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(ALEO_PROGRAM_ID_PATTERN)
        .unwrap_or_else(|err| panic!("invalid program id pattern: {err}"))
});

/// Returns true if `value` is a well-formed program identifier.
pub fn is_program_id(value: &str) -> bool {
    ALEO_PROGRAM_ID.is_match(value)
}

/// A program identifier that has passed [`is_program_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgramId(String);

impl ProgramId {
    /// Parse a program identifier, returning `None` if it does not conform.
    pub fn parse(value: &str) -> Option<Self> {
        is_program_id(value).then(|| ProgramId(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Program name without the `.aleo` suffix
    pub fn program_name(&self) -> &str {
        self.0.strip_suffix(ALEO_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProgramId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
