//! # Workpaper Generation
//!
//! Generates summary workpapers from recorded test runs. The memo text is
//! a fixed placeholder pending reviewer conclusions; the workpaper's value
//! at this stage is the durable link back to the test run.

use serde::{Deserialize, Serialize};

use soxkit_core::{AuditError, AuditResult, Store, TestRunId, Timestamp, WorkpaperId};

use crate::testrun::TestRunRegistry;

/// Placeholder memo text used until a reviewer concludes.
const PLACEHOLDER_SUMMARY: &str = "Auto-generated testing memo.";
const PLACEHOLDER_CONCLUSION: &str = "Pending reviewer conclusion.";

/// A generated workpaper referencing a test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workpaper {
    /// Unique workpaper identifier.
    pub id: WorkpaperId,
    /// The test run this workpaper summarizes (by identifier; never owned).
    pub test_run_id: TestRunId,
    /// Summary memo text.
    pub summary: String,
    /// Conclusion text.
    pub conclusion: String,
    /// When the workpaper was generated.
    pub created_at: Timestamp,
}

/// In-memory registry of workpapers.
#[derive(Debug, Clone, Default)]
pub struct WorkpaperRegistry {
    store: Store<Workpaper>,
}

impl WorkpaperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a workpaper for a recorded test run.
    ///
    /// # Errors
    ///
    /// [`AuditError::NotFound`] if the test run does not exist.
    pub fn generate(
        &self,
        test_run_id: TestRunId,
        test_runs: &TestRunRegistry,
    ) -> AuditResult<Workpaper> {
        if test_runs.get(&test_run_id).is_none() {
            return Err(AuditError::NotFound(format!("test run {test_run_id}")));
        }

        let workpaper = Workpaper {
            id: WorkpaperId::new(),
            test_run_id,
            summary: PLACEHOLDER_SUMMARY.to_string(),
            conclusion: PLACEHOLDER_CONCLUSION.to_string(),
            created_at: Timestamp::now(),
        };
        self.store.insert(*workpaper.id.as_uuid(), workpaper.clone());
        tracing::info!(workpaper_id = %workpaper.id, test_run_id = %test_run_id, "generated workpaper");
        Ok(workpaper)
    }

    /// Look up a workpaper by identifier.
    pub fn get(&self, id: &WorkpaperId) -> Option<Workpaper> {
        self.store.get(id.as_uuid())
    }

    /// List all workpapers, order unspecified.
    pub fn list(&self) -> Vec<Workpaper> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlDraft, ControlRegistry};
    use soxkit_core::{AttributeType, EvidenceId};

    fn recorded_run() -> (TestRunRegistry, TestRunId) {
        let controls = ControlRegistry::new();
        let control = controls.create(ControlDraft {
            name: "test".to_string(),
            description: "".to_string(),
            attributes: vec![AttributeType::Occurrence],
            owner: None,
        });
        let runs = TestRunRegistry::new();
        let run = runs
            .run(control.id, vec![EvidenceId::new()], &controls, |_| true)
            .unwrap();
        (runs, run.id)
    }

    #[test]
    fn test_generate_links_test_run() {
        let (runs, run_id) = recorded_run();
        let workpapers = WorkpaperRegistry::new();
        let workpaper = workpapers.generate(run_id, &runs).unwrap();
        assert_eq!(workpaper.test_run_id, run_id);
        assert_eq!(workpaper.summary, PLACEHOLDER_SUMMARY);
        assert_eq!(workpaper.conclusion, PLACEHOLDER_CONCLUSION);
    }

    #[test]
    fn test_generate_unknown_run_is_not_found() {
        let workpapers = WorkpaperRegistry::new();
        let runs = TestRunRegistry::new();
        let err = workpapers.generate(TestRunId::new(), &runs).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_returns_generated_workpaper() {
        let (runs, run_id) = recorded_run();
        let workpapers = WorkpaperRegistry::new();
        let workpaper = workpapers.generate(run_id, &runs).unwrap();
        let fetched = workpapers.get(&workpaper.id).unwrap();
        assert_eq!(fetched.id, workpaper.id);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let workpapers = WorkpaperRegistry::new();
        assert!(workpapers.get(&WorkpaperId::new()).is_none());
    }
}
