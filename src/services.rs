// SPDX-License-Identifier: MPL-2.0
//! Collapsible service table rows.
//!
//! Each summary row may be followed by a detail row that starts hidden;
//! clicking the summary toggles the detail. A summary row with no detail
//! row (the last row of a table, or a plain row) toggles nothing.

/// Hidden/shown state for the detail rows of a service table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandableRows {
    // One entry per summary row: Some(expanded) when a detail row exists.
    details: Vec<Option<bool>>,
}

impl ExpandableRows {
    /// Creates the row state from a per-row "has a detail row" flag.
    /// All detail rows start collapsed.
    #[must_use]
    pub fn new(has_detail: &[bool]) -> Self {
        Self {
            details: has_detail
                .iter()
                .map(|&has| if has { Some(false) } else { None })
                .collect(),
        }
    }

    /// Toggles the detail row following summary row `index` and returns
    /// the new expanded state.
    ///
    /// Returns `None` (and changes nothing) when the row has no detail
    /// row or the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.details.get_mut(index)?;
        let expanded = slot.as_mut()?;
        *expanded = !*expanded;
        Some(*expanded)
    }

    /// Returns whether the detail row of summary row `index` is expanded.
    /// `false` for rows without a detail row.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        matches!(self.details.get(index), Some(Some(true)))
    }

    /// Returns the number of summary rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// Checks if the table has no summary rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}
