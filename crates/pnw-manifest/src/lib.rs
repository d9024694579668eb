//! PNW deployment manifest validation
//!
//! A testnet deployment manifest is a JSON document naming the Aleo program
//! identifiers of every deployed PNW program, grouped by tier:
//!
//! ```json
//! {
//!   "schema_version": "1.0",
//!   "network": "testnet",
//!   "program_ids": {
//!     "layer1": { "pnw_router": "pnw_router.aleo", "...": "..." },
//!     "layer2": { "payroll_nfts": "payroll_nfts.aleo", "...": "..." },
//!     "external": { "usdcx": "test_usdcx_stablecoin.aleo" }
//!   }
//! }
//! ```
//!
//! Validation is structural and lexical only and stops at the first
//! violation.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod errors;
pub mod program_id;
pub mod types;
pub mod validator;

pub use errors::{FailureKind, ManifestError};
pub use program_id::{is_program_id, ProgramId};
pub use types::{ProgramEntry, ProgramGroup, ValidatedManifest, DEFAULT_MANIFEST_PATH, TESTNET};
pub use validator::{validate, validate_str, ManifestSchema};
