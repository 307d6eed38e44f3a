//! # soxkit-control — Controls, Cross-Validation, and Test Bookkeeping
//!
//! The control side of the audit stack:
//!
//! - **Control registry** (`control.rs`): registration and lookup of
//!   internal controls with their declared attribute sets. Controls are
//!   immutable once created.
//! - **Cross-Validator** (`validate.rs`): checks a control's declared
//!   attributes against the fields extracted from a piece of evidence and
//!   produces human-readable exception strings for reviewers.
//! - **Test runs** (`testrun.rs`) and **workpapers** (`workpaper.rs`):
//!   CRUD bookkeeping downstream of evidence ingestion. Findings and memo
//!   text are reviewer placeholders — no automated assessment happens here.

pub mod control;
pub mod testrun;
pub mod validate;
pub mod workpaper;

pub use control::{Control, ControlDraft, ControlRegistry};
pub use testrun::{FindingResult, TestFinding, TestRunRegistry, TestRunResult};
pub use validate::cross_validate;
pub use workpaper::{Workpaper, WorkpaperRegistry};
