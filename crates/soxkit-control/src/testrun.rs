//! # Test-Run Bookkeeping
//!
//! Records attribute-based test runs against registered controls.
//! Findings are reviewer placeholders: one `pending` finding per declared
//! attribute, awaiting human assessment of the referenced evidence.

use serde::{Deserialize, Serialize};

use soxkit_core::{
    AttributeType, AuditError, AuditResult, ControlId, EvidenceId, Store, TestRunId, Timestamp,
};

use crate::control::ControlRegistry;

/// Placeholder explanation attached to every pending finding.
const PENDING_EXPLANATION: &str = "Review pending. Reviewer to assess evidence.";

/// Assessment state of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingResult {
    /// Awaiting reviewer assessment.
    Pending,
    /// Reviewer judged the attribute satisfied.
    Satisfied,
    /// Reviewer flagged an exception.
    Exception,
}

/// One attribute's finding within a test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestFinding {
    /// The attribute under test.
    pub attribute: AttributeType,
    /// Assessment state.
    pub result: FindingResult,
    /// Reviewer-facing explanation.
    pub explanation: String,
    /// Evidence records the finding refers to (by identifier; never owned).
    pub evidence_ids: Vec<EvidenceId>,
}

/// A recorded test run against a control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRunResult {
    /// Unique test-run identifier.
    pub id: TestRunId,
    /// The control under test.
    pub control_id: ControlId,
    /// One finding per declared attribute.
    pub findings: Vec<TestFinding>,
    /// Run-level exceptions (populated by reviewers; empty at creation).
    pub exceptions: Vec<String>,
    /// When the run was recorded.
    pub created_at: Timestamp,
}

/// In-memory registry of test runs.
#[derive(Debug, Clone, Default)]
pub struct TestRunRegistry {
    store: Store<TestRunResult>,
}

impl TestRunRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test run for a control over a set of evidence records.
    ///
    /// The control must exist, `evidence_ids` must be non-empty, and every
    /// referenced evidence record must exist (checked through the supplied
    /// predicate so this crate stays independent of the evidence store).
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if the control or any evidence id is absent.
    /// - [`AuditError::Validation`] if `evidence_ids` is empty.
    pub fn run(
        &self,
        control_id: ControlId,
        evidence_ids: Vec<EvidenceId>,
        controls: &ControlRegistry,
        evidence_exists: impl Fn(&EvidenceId) -> bool,
    ) -> AuditResult<TestRunResult> {
        let control = controls
            .get(&control_id)
            .ok_or_else(|| AuditError::NotFound(format!("control {control_id}")))?;

        if evidence_ids.is_empty() {
            return Err(AuditError::Validation("evidence ids required".to_string()));
        }

        let missing: Vec<String> = evidence_ids
            .iter()
            .filter(|id| !evidence_exists(id))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(AuditError::NotFound(format!(
                "evidence {}",
                missing.join(", ")
            )));
        }

        let findings = control
            .attributes
            .iter()
            .map(|attribute| TestFinding {
                attribute: *attribute,
                result: FindingResult::Pending,
                explanation: PENDING_EXPLANATION.to_string(),
                evidence_ids: evidence_ids.clone(),
            })
            .collect();

        let run = TestRunResult {
            id: TestRunId::new(),
            control_id,
            findings,
            exceptions: Vec::new(),
            created_at: Timestamp::now(),
        };
        self.store.insert(*run.id.as_uuid(), run.clone());
        tracing::info!(test_run_id = %run.id, control_id = %control_id, "recorded test run");
        Ok(run)
    }

    /// Look up a test run by identifier.
    pub fn get(&self, id: &TestRunId) -> Option<TestRunResult> {
        self.store.get(id.as_uuid())
    }

    /// List all recorded test runs, order unspecified.
    pub fn list(&self) -> Vec<TestRunResult> {
        self.store.list()
    }
}
