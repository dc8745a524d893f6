//! Config reconciliation
//!
//! Brings the managed sections of a document in line with a target set:
//! stale sections lose the fixed settings (and disappear if nothing else is
//! in them), target sections gain them. Unmanaged sections are never read.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::document::ConfigDocument;
use crate::error::MissingImportsResult;
use crate::sections::{is_managed_section, SECTION_SETTINGS};

/// What a reconciliation changes, by section name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcilePlan {
    /// Target sections not present before
    pub added: Vec<String>,
    /// Managed sections no longer in the target set
    pub removed: Vec<String>,
    /// Target sections that already existed
    pub kept: Vec<String>,
}

impl ReconcilePlan {
    /// Compute the plan from the document's current sections and the targets.
    pub fn new<S: AsRef<str>>(existing: &[String], targets: &[S]) -> Self {
        let managed: BTreeSet<&str> = existing
            .iter()
            .map(String::as_str)
            .filter(|s| is_managed_section(s))
            .collect();
        let targets: BTreeSet<&str> = targets.iter().map(AsRef::<str>::as_ref).collect();

        Self {
            added: targets.difference(&managed).map(|s| s.to_string()).collect(),
            removed: managed.difference(&targets).map(|s| s.to_string()).collect(),
            kept: targets.intersection(&managed).map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Apply the target set to `doc` in place and report what changed.
pub fn apply<S: AsRef<str>>(
    doc: &mut dyn ConfigDocument,
    targets: &[S],
) -> MissingImportsResult<ReconcilePlan> {
    let plan = ReconcilePlan::new(&doc.sections(), targets);

    for section in &plan.removed {
        tracing::debug!(section = %section, "removing stale section settings");
        doc.remove_from_section(section, SECTION_SETTINGS)?;
    }

    let mut ordered: Vec<&str> = targets.iter().map(AsRef::<str>::as_ref).collect();
    ordered.sort_unstable();
    ordered.dedup();
    for section in ordered {
        tracing::trace!(section, "ensuring section settings");
        doc.add_to_section(section, SECTION_SETTINGS)?;
    }

    Ok(plan)
}

/// Reconcile `doc` against `targets` and return the serialized result.
pub fn reconcile<S: AsRef<str>>(
    doc: &mut dyn ConfigDocument,
    targets: &[S],
) -> MissingImportsResult<String> {
    apply(doc, targets)?;
    Ok(doc.render())
}
