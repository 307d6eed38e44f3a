//! # Control Model and Registry
//!
//! An internal control declares the attributes its supporting evidence
//! will be tested against. Controls are immutable once registered; the
//! registry is process-lifetime in-memory state.

use serde::{Deserialize, Serialize};

use soxkit_core::{AttributeType, ControlId, Store, Timestamp};

/// Input for registering a control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlDraft {
    /// Short control name (e.g., "Invoice approval").
    pub name: String,
    /// Free-text description of the control activity.
    pub description: String,
    /// Attributes to test evidence against, in evaluation order.
    /// Treated as logically duplicate-free.
    pub attributes: Vec<AttributeType>,
    /// Control owner, if assigned.
    pub owner: Option<String>,
}

/// A registered internal control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Unique control identifier.
    pub id: ControlId,
    /// Short control name.
    pub name: String,
    /// Free-text description of the control activity.
    pub description: String,
    /// Declared attributes, in evaluation order.
    pub attributes: Vec<AttributeType>,
    /// Control owner, if assigned.
    pub owner: Option<String>,
    /// When the control was registered.
    pub created_at: Timestamp,
}

/// In-memory registry of controls.
///
/// Clone-friendly: clones share the same underlying store, so the evidence
/// store and the service layer see one set of controls.
#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    store: Store<Control>,
}

impl ControlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control, assigning it a fresh identifier.
    pub fn create(&self, draft: ControlDraft) -> Control {
        let control = Control {
            id: ControlId::new(),
            name: draft.name,
            description: draft.description,
            attributes: draft.attributes,
            owner: draft.owner,
            created_at: Timestamp::now(),
        };
        self.store.insert(*control.id.as_uuid(), control.clone());
        tracing::info!(control_id = %control.id, name = %control.name, "registered control");
        control
    }

    /// Look up a control by identifier.
    pub fn get(&self, id: &ControlId) -> Option<Control> {
        self.store.get(id.as_uuid())
    }

    /// Whether a control with this identifier exists.
    pub fn contains(&self, id: &ControlId) -> bool {
        self.store.contains(id.as_uuid())
    }

    /// List all registered controls, order unspecified.
    pub fn list(&self) -> Vec<Control> {
        self.store.list()
    }
}
