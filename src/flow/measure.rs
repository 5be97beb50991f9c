//! Lookup table of rendered step-marker widths.
//!
//! The progress-bar track is inset so it spans between the centers of the
//! first and last markers. Marker widths are only known after a layout pass
//! has committed, so the view records them here and the controller reads them
//! back when recomputing edge margins. The table is a cache keyed by step
//! count: a structural change (steps added or removed) clears every recorded
//! measurement until the next render.

/// Per-step marker width measurements, populated post-render.
#[derive(Debug, Clone, Default)]
pub struct MarkerWidths {
    widths: Vec<Option<u16>>,
}

impl MarkerWidths {
    /// Create an empty table sized for `count` steps.
    pub fn new(count: usize) -> Self {
        Self {
            widths: vec![None; count],
        }
    }

    /// Number of marker slots in the table.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Resize the table for a new step count.
    ///
    /// A count change invalidates all recorded widths; the same count is a
    /// no-op so measurements survive ordinary re-renders.
    pub fn set_count(&mut self, count: usize) {
        if count != self.widths.len() {
            self.widths = vec![None; count];
        }
    }

    /// Record the rendered cell width of the marker at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn record(&mut self, index: usize, width: u16) {
        if let Some(slot) = self.widths.get_mut(index) {
            *slot = Some(width);
        }
    }

    /// Recorded width of the marker at `index`, if measured.
    pub fn get(&self, index: usize) -> Option<u16> {
        self.widths.get(index).copied().flatten()
    }

    /// Recorded width of the first marker, if measured.
    pub fn first(&self) -> Option<u16> {
        self.widths.first().copied().flatten()
    }

    /// Recorded width of the last marker, if measured.
    pub fn last(&self) -> Option<u16> {
        self.widths.last().copied().flatten()
    }
}
