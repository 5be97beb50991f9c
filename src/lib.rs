//! Stepflow - a multi-step TUI flow controller
//!
//! Renders a sequence of named steps with a progress indicator and exposes
//! next/back/skip navigation. The state machine lives in [`flow`]; the
//! ratatui rendering lives in [`ui`]; [`app`] wires the two to a terminal
//! event loop.

pub mod app;
pub mod config;
pub mod demo;
pub mod flow;
pub mod logging;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use flow::{EdgeMargins, FlowController, StepContent, StepDefinition, VisualState};
pub use ui::FlowView;
