//! Checklist state: inventory, progress, and template export naming.

#[cfg(test)]
#[path = "checklists_test.rs"]
mod checklists_test;

use crate::net::types::{Checklist, ExportFormat};

/// Shared checklist state for the checklists page.
#[derive(Clone, Debug, Default)]
pub struct ChecklistsState {
    pub items: Vec<Checklist>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ChecklistsState {
    /// Replace a checklist in place after an item update, matching by id.
    ///
    /// An update for a checklist that is no longer listed is ignored.
    pub fn apply_update(&mut self, updated: Checklist) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated;
        }
    }
}

/// Completed/total progress of a checklist, recomputed from its items.
///
/// Falls back to the server-side counters when the item list was not
/// included in the payload.
#[must_use]
pub fn progress(checklist: &Checklist) -> (usize, usize) {
    if checklist.items.is_empty() {
        let total = usize::try_from(checklist.total_items).unwrap_or(0);
        let completed = usize::try_from(checklist.completed_items).unwrap_or(0);
        return (completed.min(total), total);
    }
    let completed = checklist.items.iter().filter(|i| i.completed).count();
    (completed, checklist.items.len())
}

/// Progress as a whole percentage, 0 for an empty checklist.
#[must_use]
pub fn progress_percent(checklist: &Checklist) -> u32 {
    let (completed, total) = progress(checklist);
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Download filename for an exported checklist template.
#[must_use]
pub fn template_file_name(standard: &str, format: ExportFormat) -> String {
    format!("{standard}_Checklist.{}", format.extension())
}
