//! Step flow state machine and its layout-measurement cache.

pub mod controller;
pub mod measure;

pub use controller::{
    EdgeMargins, FlowController, StepContent, StepDefinition, VisualState, CHECK_GLYPH,
};
pub use measure::MarkerWidths;
