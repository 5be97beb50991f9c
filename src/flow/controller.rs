//! The step-index state machine at the heart of the flow controller.
//!
//! `FlowController` owns the mutable flow state (active step, completion
//! flag, progress-bar edge margins) and exposes the navigation transitions.
//! Everything else — step content, styling, the host event loop — is a
//! collaborator. All index arithmetic is clamped; no transition can fail or
//! panic from any reachable state.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::measure::MarkerWidths;

/// Default glyph shown on completed step markers.
pub const CHECK_GLYPH: &str = "✓";

/// Renderable content for a single step.
///
/// Implemented for any `Fn(&mut Frame, Rect)` closure, so callers can supply
/// content inline without defining a type per step.
pub trait StepContent {
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl<F> StepContent for F
where
    F: Fn(&mut Frame, Rect),
{
    fn render(&self, frame: &mut Frame, area: Rect) {
        self(frame, area);
    }
}

/// One named stage of the flow, in display/navigation order.
pub struct StepDefinition {
    /// Display label, also the step's key within the flow
    name: String,
    /// Content renderer; a step without content renders an empty area
    content: Option<Box<dyn StepContent>>,
}

impl StepDefinition {
    /// Create a step with renderable content.
    pub fn new(name: impl Into<String>, content: impl StepContent + 'static) -> Self {
        Self {
            name: name.into(),
            content: Some(Box::new(content)),
        }
    }

    /// Create a step with no content (tolerated, renders an empty area).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }

    /// The step's display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The step's content renderer, if any.
    pub fn content(&self) -> Option<&dyn StepContent> {
        self.content.as_deref()
    }
}

impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("name", &self.name)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

/// Visual state of a step marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// The active step has moved past this marker
    Complete,
    /// This marker's step is the one currently displayed
    Active,
    /// Not yet reached
    Inactive,
}

/// Horizontal insets aligning the progress-bar track with the centers of the
/// first and last step markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeMargins {
    pub left: u16,
    pub right: u16,
}

/// Zero-argument callback fired when the flow completes.
pub type CompleteCallback = Box<dyn FnMut()>;

/// Multi-step flow controller: tracks the active step, derives progress and
/// marker state, and applies the next/back/skip transitions.
///
/// `current_step` is 1-based and stays within `[1, N]` for any non-empty step
/// list. With an empty step list the controller is inert: every transition is
/// a no-op and the view renders nothing.
pub struct FlowController {
    steps: Vec<StepDefinition>,
    /// Active step, 1-based
    current_step: usize,
    /// Set by advancing past the final step, cleared by retreating
    is_complete: bool,
    edge_margins: EdgeMargins,
    /// Marker widths recorded by the view after each layout pass
    marker_widths: MarkerWidths,
    on_complete: Option<CompleteCallback>,
}

impl FlowController {
    /// Create a controller positioned on the first step.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        let count = steps.len();
        Self {
            steps,
            current_step: 1,
            is_complete: false,
            edge_margins: EdgeMargins::default(),
            marker_widths: MarkerWidths::new(count),
            on_complete: None,
        }
    }

    /// Attach a callback fired when `advance()` is called on the final step.
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Replace the step list.
    ///
    /// The active step is clamped into the new range and recorded marker
    /// widths are invalidated when the count changes.
    pub fn set_steps(&mut self, steps: Vec<StepDefinition>) {
        self.steps = steps;
        let count = self.steps.len();
        self.marker_widths.set_count(count);
        if count == 0 {
            self.current_step = 1;
            self.is_complete = false;
        } else {
            self.current_step = self.current_step.min(count).max(1);
            if self.current_step != count {
                self.is_complete = false;
            }
        }
    }

    /// Number of steps in the flow.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the flow has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps in display order.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// The active step, 1-based.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the flow has been completed.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Current progress-bar edge margins.
    pub fn edge_margins(&self) -> EdgeMargins {
        self.edge_margins
    }

    /// The active step's definition, unless the flow is complete or empty.
    pub fn active_step(&self) -> Option<&StepDefinition> {
        if self.is_complete {
            return None;
        }
        self.steps.get(self.current_step - 1)
    }

    /// Move forward one step, or complete the flow from the final step.
    ///
    /// On the final step this sets the complete flag and invokes the
    /// completion callback. There is no one-shot guard: every call made while
    /// already on the final step re-invokes the callback. The navigation
    /// layer disables Next once the flow is complete, so repeat invocations
    /// only occur through direct calls.
    pub fn advance(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        if self.current_step == self.steps.len() {
            self.is_complete = true;
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        } else {
            self.current_step += 1;
        }
    }

    /// Move back one step, clamped at the first.
    ///
    /// Always clears the complete flag, even when already on step 1.
    pub fn retreat(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        self.current_step = (self.current_step - 1).max(1);
        self.is_complete = false;
    }

    /// Jump forward two steps.
    ///
    /// Only allowed while at least two steps remain ahead, so from the
    /// second-to-last and final steps this is a no-op. Skipping can land on
    /// the final step but never completes the flow.
    pub fn skip(&mut self) {
        if self.current_step + 1 < self.steps.len() {
            self.current_step += 2;
        }
    }

    /// Record the rendered cell width of a step marker.
    ///
    /// Called by the view after layout; measurements feed
    /// [`recompute_edge_margins`](Self::recompute_edge_margins).
    pub fn record_marker_width(&mut self, index: usize, width: u16) {
        self.marker_widths.record(index, width);
    }

    /// Derive edge margins from the recorded first/last marker widths.
    ///
    /// Half of each edge marker's width, so the progress-bar track spans
    /// between marker centers. A no-op until both markers have been measured,
    /// which only happens after a render pass has committed.
    pub fn recompute_edge_margins(&mut self) {
        if let (Some(first), Some(last)) = (self.marker_widths.first(), self.marker_widths.last()) {
            self.edge_margins = EdgeMargins {
                left: first / 2,
                right: last / 2,
            };
        }
    }

    /// Progress through the flow as a percentage.
    ///
    /// 0 on the first step, 100 on the last, linear in between. A single-step
    /// flow reports 100 (its one step is both first and last); an empty flow
    /// reports 0.
    pub fn progress_percent(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 100.0,
            n => ((self.current_step - 1) as f64 / (n - 1) as f64) * 100.0,
        }
    }

    /// Visual state of the marker at 0-based `index`.
    pub fn visual_state(&self, index: usize) -> VisualState {
        if self.current_step > index + 1 {
            VisualState::Complete
        } else if self.current_step == index + 1 {
            VisualState::Active
        } else {
            VisualState::Inactive
        }
    }

    /// Marker label: the default check glyph once complete, else the 1-based
    /// step number.
    pub fn marker_label(&self, index: usize) -> String {
        self.marker_label_with(index, CHECK_GLYPH)
    }

    /// Marker label with a caller-supplied check glyph.
    pub fn marker_label_with(&self, index: usize, check_glyph: &str) -> String {
        match self.visual_state(index) {
            VisualState::Complete => check_glyph.to_string(),
            VisualState::Active | VisualState::Inactive => (index + 1).to_string(),
        }
    }

    /// Whether the Back control is enabled.
    pub fn back_enabled(&self) -> bool {
        self.current_step != 1
    }

    /// Whether the Next/Complete control is enabled.
    pub fn next_enabled(&self) -> bool {
        !self.is_complete
    }

    /// Whether the Skip control is enabled.
    pub fn skip_enabled(&self) -> bool {
        !self.is_complete && self.current_step < self.steps.len()
    }

    /// Label for the forward control: "Complete" on the final step.
    pub fn next_label(&self) -> &'static str {
        if self.current_step == self.steps.len() {
            "Complete"
        } else {
            "Next"
        }
    }
}

impl std::fmt::Debug for FlowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowController")
            .field("steps", &self.steps)
            .field("current_step", &self.current_step)
            .field("is_complete", &self.is_complete)
            .field("edge_margins", &self.edge_margins)
            .finish_non_exhaustive()
    }
}
