pub mod keybindings;
pub mod stepper;
pub mod terminal_guard;

pub use keybindings::{action_for, NavAction};
pub use stepper::FlowView;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
